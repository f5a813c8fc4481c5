use leptos::prelude::*;

use crate::sections::icons::Icon;
use crate::sections::{BRAND, COPYRIGHT};

/// Hosted demo the guide hands off to. Fixed target, opened in a new
/// browsing context.
const LAUNCH_URL: &str = "https://huggingface.co/spaces/Pawan2605/FINBUZZ";

/// Header row for each walkthrough block, in tab order.
struct GuideTab {
    icon: Icon,
    title: &'static str,
}

const GUIDE_TABS: &[GuideTab] = &[
    GuideTab {
        icon: Icon::HandCoins,
        title: "Tab 1 - Using Financial Advisor Agent",
    },
    GuideTab {
        icon: Icon::FileText,
        title: "Tab 2 - Customer Queries and Automation Agent",
    },
    GuideTab {
        icon: Icon::LineChart,
        title: "Tab 3 - Financial Analytics and Investment Tools",
    },
    GuideTab {
        icon: Icon::Bot,
        title: "Tab 4 - Automated Stock Trading & Investing Agent",
    },
];

#[component]
pub fn AgentUsagePage(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="doc-page">
            <button class="doc-brand" on:click=move |_| on_back.run(())>
                <img src="/assets/Logo.png" alt="FINBUZZ.AI logo" class="doc-brand-logo" />
                {BRAND}
            </button>

            <h1 class="doc-title fade-in-up">
                <span class="accent">{format!("{BRAND} Agent")}</span>
                " Usage Guide"
            </h1>

            <FinancialAdvisorTab />
            <CustomerQueriesTab />
            <AnalyticsTab />
            <TradingTab />

            <div class="launch-row">
                <a href=LAUNCH_URL target="_blank" rel="noopener" class="btn btn-launch">
                    "LAUNCH FINBUZZ.AI"
                </a>
            </div>

            <footer class="page-footer-bar">
                <p>{COPYRIGHT}</p>
            </footer>
        </div>
    }
}

#[component]
fn TabHeader(tab: &'static GuideTab) -> impl IntoView {
    view! {
        <div class="usage-tab-header">
            <span class="usage-tab-icon">{tab.icon.glyph()}</span>
            <h2 class="usage-tab-title">{tab.title}</h2>
        </div>
    }
}

#[component]
fn FinancialAdvisorTab() -> impl IntoView {
    view! {
        <section class="usage-tab fade-in-up">
            <TabHeader tab={&GUIDE_TABS[0]} />

            <div class="step-box">
                <p>
                    <span class="step-lead">"Step 1:"</span>
                    " Navigate to Tab 1 to access the Financial Advisor agent. The agent supports \
                     both text-based chat and voice interactions. To activate the automated voice \
                     chat feature, simply check the 'Voice Chat Mode' box. This setting is turned \
                     off by default for faster performance and computation. As shown in the image \
                     below"
                </p>
            </div>
            <div class="image-row">
                <img
                    src="/assets/Tab1image1.png"
                    alt="Enabling voice chat mode in the financial advisor tab"
                    class="usage-image"
                />
            </div>

            <div class="step-box">
                <p>
                    <span class="step-lead">"Step 2:"</span>
                    " Upload a file with your financial data (e.g., .txt, .json, or .pdf). You \
                     can also use the provided Submit.json file. Once the file is ready, click \
                     the \"Process file\" button. As shown in the image below"
                </p>
            </div>
            <div class="image-row">
                <img
                    src="/assets/Tab1image2.png"
                    alt="Uploading a financial data file"
                    class="usage-image"
                />
            </div>

            <div class="step-box">
                <p>
                    <span class="step-lead">"Step 3:"</span>
                    " To initiate a conversation with the agent, you can either type a greeting \
                     or, when using the voice option, you must first click the record button to \
                     capture your voice and then the process voice button to convert it to a \
                     message for the agent. The agent will then present a list of its \
                     capabilities, allowing you to instruct it to perform a specific task using \
                     one of the available tools. For example: As shown in the image below"
                </p>
            </div>
            <div class="image-grid cols-3">
                {(3..=5).map(|index| view! {
                    <img
                        src=format!("/assets/Tab1image{index}.png")
                        alt=format!("Financial advisor conversation example {}", index - 2)
                        class="usage-image"
                    />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn CustomerQueriesTab() -> impl IntoView {
    view! {
        <section class="usage-tab fade-in-up">
            <TabHeader tab={&GUIDE_TABS[1]} />

            <div class="step-box">
                <p>
                    <span class="step-lead">"Step 1:"</span>
                    " Navigate to Tab 2 to access the Customer Queries and Automation Agent. The \
                     agent supports both text-based chat and voice interactions. To activate the \
                     automated voice chat feature, simply check the 'Voice Chat Mode' box. This \
                     setting is turned off by default for faster performance and computation."
                </p>
            </div>

            <div class="step-box">
                <p>
                    <span class="step-lead">"Step 2:"</span>
                    " Upload a file with your financial data (e.g., .txt, .json, or .pdf). You \
                     can also use the provided Submit.json file. Once the file is ready, click \
                     the \"Process file\" button."
                </p>
            </div>

            <div class="step-box">
                <p class="step-lead">"Step 3: Activating the Agents"</p>
                <p>
                    "Begin by asking the agent what services it can provide. It will then list \
                     its capabilities. You can then select a service and initiate an automated \
                     workflow. The Customer Queries and Automation agent offers several features \
                     to try:"
                </p>
                <ul class="usage-list">
                    <li>
                        <strong>"Financial Literacy Agent:"</strong>
                        " This agent can define and explain any terms related to the banking \
                         sector that you need to understand."
                    </li>
                    <li>
                        <strong>"Fraud Detection Agent:"</strong>
                        " This agent can access recent transaction data from its secure database. \
                         You can instruct it to \"load fraud transactions,\" which will then give \
                         you the option to report them to the bank's servers and generate a copy \
                         of an official report (FIR). The agent will automate the entire process; \
                         you only need to confirm."
                    </li>
                </ul>
            </div>

            <p class="usage-caption">"Full automation example:"</p>
            <div class="image-grid cols-3">
                {(1..=6).map(|index| view! {
                    <img
                        src=format!("/assets/Tab2image{index}.png")
                        alt=format!("Automation walkthrough step {index}")
                        class="usage-image"
                    />
                }).collect::<Vec<_>>()}
            </div>
            <div class="image-row">
                <img
                    src="/assets/Tab2image7.png"
                    alt="Automation walkthrough step 7"
                    class="usage-image"
                />
            </div>

            <div class="step-box">
                <p>
                    <strong>"Crisis Mode:"</strong>
                    " In a crisis or serious emergency, you can activate this mode by simply \
                     typing \"crisis.\" The agent is trained to recognize the urgency and will \
                     immediately present critical options like reporting fraud, a medical \
                     emergency, or theft, allowing you to proceed with the necessary automation. \
                     For security reasons, the full workflow is not shown, but the agent ensures \
                     that the information is securely and urgently sent to the cyber police \
                     department. Similarly, other agents are available for tasks such as \
                     scheduling meetings, understanding new bank schemes, and more. Check images \
                     for clarification."
                </p>
            </div>
            <div class="image-grid cols-2">
                {(8..=9).map(|index| view! {
                    <img
                        src=format!("/assets/Tab2image{index}.png")
                        alt=format!("Crisis mode example {}", index - 7)
                        class="usage-image"
                    />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn AnalyticsTab() -> impl IntoView {
    view! {
        <section class="usage-tab fade-in-up">
            <TabHeader tab={&GUIDE_TABS[2]} />

            <div class="step-box">
                <p>
                    "While the full suite of tools within the Financial Analytics and Investment \
                     Tools tab is still in development, you can see the implementation of two of \
                     the most useful and widely-used tools, including the "
                    <strong>"Stock Sentiment Analysis and Forecasting Tool"</strong>
                    ", in the image below."
                </p>
            </div>
            <div class="image-grid cols-2">
                {(1..=2).map(|index| view! {
                    <img
                        src=format!("/assets/Tab3image{index}.png")
                        alt=format!("Analytics tool screenshot {index}")
                        class="usage-image"
                    />
                }).collect::<Vec<_>>()}
            </div>
            <div class="image-row">
                <img
                    src="/assets/Tab3image3.png"
                    alt="Analytics tool screenshot 3"
                    class="usage-image"
                />
            </div>
        </section>
    }
}

#[component]
fn TradingTab() -> impl IntoView {
    view! {
        <section class="usage-tab fade-in-up">
            <TabHeader tab={&GUIDE_TABS[3]} />

            <div class="step-box">
                <p>
                    "As this is a prototype, the AI automated stock trading agent is currently in \
                     development and will be launching soon."
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_covers_all_four_tabs_in_order() {
        assert_eq!(GUIDE_TABS.len(), 4);
        for (index, tab) in GUIDE_TABS.iter().enumerate() {
            assert!(
                tab.title.starts_with(&format!("Tab {}", index + 1)),
                "{} out of order",
                tab.title
            );
        }
    }

    #[test]
    fn test_launch_target_is_https() {
        assert!(LAUNCH_URL.starts_with("https://"));
    }
}
