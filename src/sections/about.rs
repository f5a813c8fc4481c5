use leptos::prelude::*;

use super::icons::Icon;
use super::BRAND;

/// One headline figure in the stats grid.
struct Stat {
    icon: Icon,
    number: &'static str,
    label: &'static str,
    description: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        icon: Icon::Headset,
        number: "24/7",
        label: "Customer Support",
        description: "Seamless 24/7 automated customer service with smooth escalation to human \
                      experts",
    },
    Stat {
        icon: Icon::Zap,
        number: "7+",
        label: "Agentic AI Frameworks",
        description: "A powerful, comprehensive AI agent for finance, unifying multiple \
                      frameworks.",
    },
    Stat {
        icon: Icon::TrendingDown,
        number: "30%",
        label: "Operational Cost Reduction",
        description: "Reduce costs for financial institutions with automated processes and AI \
                      efficiency.",
    },
    Stat {
        icon: Icon::Wrench,
        number: "20+",
        label: "AI-Powered Tools",
        description: "AI-powered tools for generating automated insights and strategic \
                      recommendations.",
    },
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Pawan Pahune",
        role: "Head of AI Innovation & Team Leader",
        image: "/assets/pawan.png",
    },
    TeamMember {
        name: "Varun Nikam",
        role: "Head of Product Strategist",
        image: "/assets/varun.png",
    },
    TeamMember {
        name: "Himanshi Sonkusale",
        role: "Head of Frontend Architect",
        image: "/assets/himanshi.png",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "About "
                        <span class="accent">{BRAND}</span>
                    </h2>
                    <p class="about-lead">
                        "FINBUZZ.AI is a revolutionary AI-powered agent designed to be your \
                         comprehensive financial partner. It's a unified, intelligent platform \
                         that combines the roles of a professional financial advisor, investment \
                         manager, and personalized query assistant into a single solution. This \
                         innovative agent goes beyond simple advice, offering a robust suite of \
                         advanced tools and features to manage investments, provide expert \
                         guidance, and handle all your financial inquiries with precision. It's \
                         the one-stop solution for all your financial needs, empowering you with \
                         a sophisticated and trustworthy guide right at your fingertips."
                    </p>
                    <p class="about-mission">
                        "Our mission is to empower every individual with the tools and insights \
                         needed to make informed financial decisions, backed by cutting-edge \
                         machine learning algorithms and real-time market analysis."
                    </p>
                </div>

                <div class="stats-grid">
                    {STATS.iter().enumerate().map(|(index, stat)| view! {
                        <div
                            class="stat fade-in-up"
                            style=format!("animation-delay: {}ms", index * 100 + 600)
                        >
                            <div class="stat-icon">{stat.icon.glyph()}</div>
                            <div class="stat-number">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                            <div class="stat-description">{stat.description}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="team-panel fade-in-up">
                    <div class="team-heading">
                        <h3 class="team-title">{format!("The Minds Behind {BRAND}")}</h3>
                        <p class="team-subtitle">
                            "Combining financial knowledge with a drive for tech innovation."
                        </p>
                    </div>
                    <div class="team-grid">
                        {TEAM.iter().map(|member| view! {
                            <div class="team-member">
                                <img src=member.image alt=member.name class="team-photo" />
                                <h4 class="team-name">{member.name}</h4>
                                <p class="team-role">{member.role}</p>
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

    #[test]
    fn test_stats_table() {
        assert_eq!(STATS.len(), 4);
        for stat in STATS {
            assert!(!stat.number.is_empty());
            assert!(!stat.label.is_empty());
        }
    }

    #[test]
    fn test_team_portraits_are_bundled_assets() {
        assert_eq!(TEAM.len(), 3);
        for member in TEAM {
            assert!(member.image.starts_with("/assets/"), "{}", member.image);
        }
    }
}
