use std::time::Duration;

use leptos::prelude::*;

use super::BRAND;
use crate::ticker;

/// Hosted agent surfaces the hero links out to. Fixed targets, opened in
/// a new browsing context.
pub(crate) const CHAT_AGENT_URL: &str =
    "https://huggingface.co/spaces/Pawan2605/FINBUZZ.AI_CHAT_AGENT";
pub(crate) const TRADING_AGENT_URL: &str =
    "https://huggingface.co/spaces/Pawan2605/FINBUZZ.AI_TRADING_AGENT";

/// Floating label badges orbiting the analysis panel.
struct FloatBadge {
    label: &'static str,
    style: &'static str,
}

const FLOAT_BADGES: &[FloatBadge] = &[
    FloatBadge {
        label: "AI Forecasting",
        style: "top: 13%; left: 70%; animation-delay: 200ms;",
    },
    FloatBadge {
        label: "Risk Monitoring",
        style: "top: 35%; left: 93%; animation-delay: 400ms;",
    },
    FloatBadge {
        label: "Portfolio Analysis",
        style: "top: 60%; left: 90%; animation-delay: 600ms;",
    },
    FloatBadge {
        label: "Real-time Data",
        style: "top: 65%; left: 0%; animation-delay: 300ms;",
    },
    FloatBadge {
        label: "Market Sentiment",
        style: "top: 40%; left: -10%; animation-delay: 500ms;",
    },
    FloatBadge {
        label: "AI Insights",
        style: "top: 85%; left: 10%; animation-delay: 700ms;",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content fade-in-left">
                        <h1 class="hero-title">
                            "WELCOME"
                            <span class="hero-title-accent">" FINBUZZ.AI"</span>
                        </h1>
                        <p class="hero-description">
                            "An AI-powered conversational agent serves as a sophisticated financial \
                             partner, expertly managing diverse customer inquiries. It provides \
                             personalized financial advisory services, executes complex operations, \
                             and offers predictive market analysis by monitoring global news and \
                             sentiment. For intricate issues, the agent ensures a seamless handoff \
                             to human experts, guaranteeing a superior customer experience."
                        </p>
                        <div class="hero-actions">
                            <a href=CHAT_AGENT_URL target="_blank" rel="noopener" class="btn btn-chat">
                                {format!("{BRAND} Chat Agent")}
                            </a>
                            <a href=TRADING_AGENT_URL target="_blank" rel="noopener" class="btn btn-trading">
                                {format!("{BRAND} Trading Agent")}
                            </a>
                        </div>
                    </div>
                    <div class="hero-visual fade-in-right">
                        <AnalysisPanel />
                        {FLOAT_BADGES.iter().map(|badge| view! {
                            <div class="float-badge" style=badge.style>
                                {badge.label}
                            </div>
                        }).collect::<Vec<_>>()}
                        <div class="float-badge performance-badge" style="bottom: 5%; right: 0%; animation-delay: 800ms;">
                            <span class="performance-label">"Live Performance"</span>
                            <span class="performance-value">"+15.7%"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Mock stock chart with the ticking price readout. Owns the interval; the
/// handle is released when the panel unmounts.
#[component]
fn AnalysisPanel() -> impl IntoView {
    let (price, set_price) = signal(ticker::OPENING_PRICE);
    let (rising, set_rising) = signal(true);

    Effect::new(move || {
        let tick = move || {
            let step = ticker::step_from_unit(js_sys::Math::random());
            let next = ticker::next(price.get_untracked(), step);
            set_price.set(next.price);
            set_rising.set(next.rising);
        };
        if let Ok(handle) =
            set_interval_with_handle(tick, Duration::from_millis(ticker::TICK_INTERVAL_MS))
        {
            on_cleanup(move || handle.clear());
        }
    });

    let price_label = move || format!("${:.2}", price.get());
    let delta_label = move || {
        let delta = price.get() - ticker::OPENING_PRICE;
        if rising.get() {
            format!("+{delta:.2}")
        } else {
            format!("{delta:.2}")
        }
    };

    view! {
        <div class="analysis-panel">
            <div class="panel-heading">
                <h3 class="panel-title">"AI Stock Analysis"</h3>
                <p class="panel-subtitle">"Real-time Market Insights"</p>
            </div>
            <div class="chart-frame">
                <svg attr:viewBox="0 0 350 200" class="chart-svg">
                    <path
                        class="chart-area"
                        d="M 20 160 Q 70 140, 120 100 T 220 80 T 320 60 L 320 200 L 20 200 Z"
                    />
                    <path class="chart-line profit" d="M 20 160 Q 70 140, 120 100 T 220 80 T 320 60" />
                    <path class="chart-line loss" d="M 20 120 Q 80 180, 140 160 T 240 140 T 320 120" />
                    <circle class="chart-dot profit" cx="320" cy="60" r="4" />
                    <circle class="chart-dot loss" cx="320" cy="120" r="3" />
                </svg>
                <div class="chart-readout">
                    <span class="chart-price">{price_label}</span>
                    <span class=move || {
                        if rising.get() { "chart-delta up" } else { "chart-delta down" }
                    }>{delta_label}</span>
                </div>
                <div class="chart-indicators">
                    <div class="indicator profit">
                        <span class="indicator-dot"></span>
                        "Profit +24.5%"
                    </div>
                    <div class="indicator loss">
                        <span class="indicator-dot"></span>
                        "Loss -8.2%"
                    </div>
                </div>
            </div>
        </div>
    }
}
