use leptos::prelude::*;

use super::icons::Icon;
use super::BRAND;

/// One numbered onboarding step.
struct Step {
    number: &'static str,
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        icon: Icon::UserPlus,
        title: "Get Started",
        description: "Click the Get Started button to begin your journey. Our step-by-step guide \
                      will walk you through our tools and show you how to leverage our agent's \
                      full capabilities.",
    },
    Step {
        number: "02",
        icon: Icon::Brain,
        title: "Click FINBUZZ.AI Chat / Trading Agent",
        description: "Instantly access the conversational or trading agent by selecting the \
                      \"FINBUZZ.AI Chat / Trading Agent\" button.",
    },
    Step {
        number: "03",
        icon: Icon::TrendingUp,
        title: "Integrate Your Data",
        description: "Securely upload your financial data in formats like JSON, PDF, or TXT for \
                      personalized analysis and insights.",
    },
    Step {
        number: "04",
        icon: Icon::Target,
        title: "Gain Actionable Insights",
        description: "Utilize a suite of tools to address various needs, from handling routine \
                      customer queries to conducting in-depth financial analysis and receiving \
                      personalized advice.",
    },
];

/// Labels positioned around the central core in the visualization.
struct PanelItem {
    icon: Icon,
    label: &'static str,
    style: &'static str,
}

const PANEL_ITEMS: &[PanelItem] = &[
    PanelItem {
        icon: Icon::UserPlus,
        label: "Get Started",
        style: "top: 10%; left: 10%; animation-delay: 800ms;",
    },
    PanelItem {
        icon: Icon::Lightbulb,
        label: "Launch Agent",
        style: "top: 10%; left: 40%; animation-delay: 1200ms;",
    },
    PanelItem {
        icon: Icon::Database,
        label: "Integrate Data",
        style: "top: 10%; left: 70%; animation-delay: 1600ms;",
    },
    PanelItem {
        icon: Icon::TrendingUp,
        label: "Gain Insights",
        style: "bottom: 10%; left: 10%; animation-delay: 2000ms;",
    },
    PanelItem {
        icon: Icon::Target,
        label: "Invest smartly",
        style: "bottom: 10%; left: 40%; animation-delay: 2400ms;",
    },
    PanelItem {
        icon: Icon::Cloud,
        label: "Connect Data",
        style: "bottom: 10%; left: 70%; animation-delay: 2800ms;",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="how-grid">
                    <div class="how-steps fade-in-left">
                        <div class="section-header align-left">
                            <h2 class="section-title">
                                "How "
                                <span class="accent">{BRAND}</span>
                                " Works"
                            </h2>
                            <p class="section-description">
                                "Initiate Your AI Financial Transformation in Four Simple Stages."
                            </p>
                        </div>
                        <div class="step-list">
                            {STEPS.iter().enumerate().map(|(index, step)| view! {
                                <div
                                    class="step fade-in-up"
                                    style=format!("animation-delay: {}ms", index * 200 + 400)
                                >
                                    <div class="step-badge">{step.icon.glyph()}</div>
                                    <div class="step-body">
                                        <div class="step-heading">
                                            <span class="step-number">{step.number}</span>
                                            <h3 class="step-title">{step.title}</h3>
                                        </div>
                                        <p class="step-description">{step.description}</p>
                                    </div>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="how-visual fade-in-right">
                        <div class="ai-core">
                            <span class="ai-core-glyph">{Icon::Brain.glyph()}</span>
                            <div class="ai-core-ring"></div>
                        </div>
                        {PANEL_ITEMS.iter().map(|item| view! {
                            <div class="panel-item fade-in-up" style=item.style>
                                <span class="panel-item-glyph">{item.icon.glyph()}</span>
                                {item.label}
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_steps_are_numbered_in_order() {
        assert_eq!(STEPS.len(), 4);
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", index + 1));
            assert!(!step.description.is_empty());
        }
    }

    #[test]
    fn test_panel_items_have_distinct_labels() {
        assert_eq!(PANEL_ITEMS.len(), 6);
        let labels: HashSet<_> = PANEL_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels.len(), PANEL_ITEMS.len());
    }
}
