use leptos::prelude::*;

use crate::sections::icons::Icon;
use crate::sections::BRAND;

/// The four workflow tabs the hosted agent exposes.
struct Tab {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const TABS: &[Tab] = &[
    Tab {
        icon: Icon::HandCoins,
        title: "Personalized Financial Advisor",
        description: "This tab provides a platform for personalized financial consultation and \
                      strategic planning.",
    },
    Tab {
        icon: Icon::FileText,
        title: "Customer Banking Queries & Automation",
        description: "This section is dedicated to addressing all customer banking inquiries and \
                      automating routine tasks.",
    },
    Tab {
        icon: Icon::LineChart,
        title: "Financial Analytics & Investment Tools",
        description: "Here, users can access comprehensive financial analytics and a suite of \
                      advanced investment tools.",
    },
    Tab {
        icon: Icon::Bot,
        title: "Agentic AI for Automated Stock Trader & Investor",
        description: "This tab empowers users with an agentic AI designed to autonomously manage \
                      stock trading and investment strategies.",
    },
];

#[component]
pub fn DocumentationPage(
    #[prop(into)] on_explore: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="doc-page">
            <button class="doc-brand" on:click=move |_| on_back.run(())>
                <img src="/assets/Logo.png" alt="FINBUZZ.AI logo" class="doc-brand-logo" />
                {BRAND}
            </button>

            <h1 class="doc-title fade-in-up">
                <span class="accent">{BRAND}</span>
                " Agent Workflow Documentation"
            </h1>

            <p class="doc-description fade-in-up">
                "The Finbuzz.AI agent provides a comprehensive financial journey through a \
                 four-tab workflow. Users can select the tab that aligns with their specific \
                 needs to engage with the agent's specialized capabilities."
            </p>

            <div class="doc-tabs">
                {TABS.iter().enumerate().map(|(index, tab)| view! {
                    <article
                        class="doc-tab-card fade-in-up"
                        style=format!("animation-delay: {}ms", index * 200 + 300)
                    >
                        <div class="doc-tab-icon">{tab.icon.glyph()}</div>
                        <div>
                            <h2 class="doc-tab-heading">
                                {format!("Tab {} : {}", index + 1, tab.title)}
                            </h2>
                            <p class="doc-tab-description">{tab.description}</p>
                        </div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>

            <div class="doc-explore fade-in-up">
                <button class="btn btn-explore" on:click=move |_| on_explore.run(())>
                    "Explore All Tabs"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_workflow_has_four_tabs() {
        assert_eq!(TABS.len(), 4);
        let titles: HashSet<_> = TABS.iter().map(|tab| tab.title).collect();
        assert_eq!(titles.len(), TABS.len());
    }

    #[test]
    fn test_tab_descriptions_are_filled_in() {
        for tab in TABS {
            assert!(!tab.description.is_empty());
        }
    }
}
