use leptos::prelude::*;

use super::icons::Icon;
use super::BRAND;

/// One feature card row.
struct Feature {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const BANKING_QUERIES: &[Feature] = &[
    Feature {
        icon: Icon::MessageCircle,
        title: "Intelligent AI Agent with Chat/Voice First Functionality",
        description: "This agent operates with various modes, including customer queries, crisis \
                      mode, fraud detection mode, and financial therapy mode.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Intelligent Query Processing",
        description: "Advanced AI understanding of complex banking and financial queries with \
                      contextual responses, and automating workflows such as scheduling calls or \
                      appointments.",
    },
    Feature {
        icon: Icon::Users,
        title: "24/7 Customer Support",
        description: "Round-the-clock automated customer service with seamless escalation to \
                      human experts.",
    },
];

const PERSONALIZED_TOOLS: &[Feature] = &[
    Feature {
        icon: Icon::Smartphone,
        title: "Voice Interaction, JSON Data Input & Report Generator",
        description: "Speak queries, upload financial data in JSON, and get PDF financial health \
                      reports.",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Net Worth & Projection Tracker, Financial Health Score",
        description: "Track net worth, project future milestones, and get a 0–100 health score.",
    },
    Feature {
        icon: Icon::PieChart,
        title: "SIP & Mutual Fund Analyzer, Diversification Checker",
        description: "Identify weak SIPs, benchmark funds, and detect overexposure to \
                      sectors/assets.",
    },
    Feature {
        icon: Icon::AlertTriangle,
        title: "Loan Affordability & Debt Optimization Advisor",
        description: "Simulate loan EMI & burden, and prioritize debts to minimize interest.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Green Investing & Behavioral Bias Alerts",
        description: "Highlight ESG investments and flag risky behaviors like panic-selling or \
                      overtrading.",
    },
];

const ANALYTICS_TOOLS: &[Feature] = &[
    Feature {
        icon: Icon::BarChart,
        title: "Forecaster, Macro-Economic Dashboard, Sector Picker",
        description: "Projects future performance, analyzes macro trends & indices, and suggests \
                      promising sectors.",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Smart Stock Screener, Sentiment Engine, Valuation Comparator",
        description: "Finds strong stocks, rates sentiment from news/social, and checks \
                      valuations vs peers/history.",
    },
    Feature {
        icon: Icon::PieChart,
        title: "Portfolio Builder, Rebalancer, Risk Heatmap",
        description: "Builds & optimizes portfolios, suggests rebalancing, and visualizes \
                      portfolio risk exposure.",
    },
    Feature {
        icon: Icon::Smartphone,
        title: "IPO Advisor, Event-Driven Detector, Dividend Optimizer",
        description: "Evaluates IPOs, flags special situations (mergers, buybacks), and \
                      recommends high yield stocks.",
    },
    Feature {
        icon: Icon::Target,
        title: "Thematic Portfolio Creator, Sector Rotation Advisor, Custom NLP Screening",
        description: "Creates theme-based portfolios, suggests sector shifts, and screens stocks \
                      using natural language commands.",
    },
];

const TRADING_TOOLS: &[Feature] = &[
    Feature {
        icon: Icon::Zap,
        title: "Real-time Trading Data",
        description: "Fetches real-time intra day trading data through the yfinance API.",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Pre/Post Trading Day Analysis",
        description: "Provides pre-trading day and post-trading day analysis through candlestick \
                      charts.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Multi-Agentic Framework",
        description: "Utilizes a multi-agentic framework trained with robust financial strategies \
                      and advanced analytics to reduce risk and increase profit.",
    },
    Feature {
        icon: Icon::PieChart,
        title: "Analytics Dashboard",
        description: "Offers an analytics dashboard with real-time analysis and logs of trades \
                      (buy, sold, or hold), a profit and loss chart, win rate, and more.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Powerful Features of "
                        <span class="accent">{BRAND}</span>
                    </h2>
                    <p class="section-description">
                        "Revolutionizing financial services with cutting-edge AI technology and \
                         comprehensive analytical tools."
                    </p>
                </div>

                <FeatureGroup
                    title="Personalised Banking Queries & Customer Queries"
                    table=BANKING_QUERIES
                    wide=true
                />
                <FeatureGroup
                    title="Personalised Financial Tools"
                    table=PERSONALIZED_TOOLS
                    wide=false
                />
                <FeatureGroup
                    title="Financial Analytics & Investment Tools"
                    table=ANALYTICS_TOOLS
                    wide=false
                />
                <FeatureGroup
                    title="Automated Trading and Investment Tools"
                    table=TRADING_TOOLS
                    wide=false
                />
            </div>
        </section>
    }
}

/// One titled group of cards, rendered in table order.
#[component]
fn FeatureGroup(title: &'static str, table: &'static [Feature], wide: bool) -> impl IntoView {
    let grid_class = if wide {
        "feature-grid feature-grid-columns"
    } else {
        "feature-grid feature-grid-rows"
    };
    view! {
        <div class="feature-group">
            <h3 class="feature-group-title">{title}</h3>
            <div class=grid_class>
                {table.iter().enumerate().map(|(index, feature)| view! {
                    <article
                        class="feature-card fade-in-up"
                        style=format!("animation-delay: {}ms", index * 100)
                    >
                        <div class="feature-icon">{feature.icon.glyph()}</div>
                        <div class="feature-body">
                            <h4 class="feature-title">{feature.title}</h4>
                            <p class="feature-description">{feature.description}</p>
                        </div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn assert_table(table: &[Feature], rows: usize) {
        assert_eq!(table.len(), rows);
        let titles: HashSet<_> = table.iter().map(|feature| feature.title).collect();
        assert_eq!(titles.len(), rows, "duplicate titles in table");
        for feature in table {
            assert!(!feature.description.is_empty());
        }
    }

    #[test]
    fn test_banking_queries_table() {
        assert_table(BANKING_QUERIES, 3);
    }

    #[test]
    fn test_personalized_tools_table() {
        assert_table(PERSONALIZED_TOOLS, 5);
    }

    #[test]
    fn test_analytics_tools_table() {
        assert_table(ANALYTICS_TOOLS, 5);
    }

    #[test]
    fn test_trading_tools_table() {
        assert_table(TRADING_TOOLS, 4);
    }
}
