use leptos::prelude::*;

use super::icons::Icon;
use super::{BRAND, COPYRIGHT};
use crate::routes::Route;

/// Internal quick links, resolved through the route table.
struct QuickLink {
    label: &'static str,
    route: Route,
}

const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        label: "Features",
        route: Route::Features,
    },
    QuickLink {
        label: "FINBUZZ.AI Workflow",
        route: Route::HowToUse,
    },
    QuickLink {
        label: "Documentation",
        route: Route::Documentation,
    },
    QuickLink {
        label: "About",
        route: Route::About,
    },
];

/// External profiles. Content data, reproduced verbatim.
struct SocialLink {
    icon: Icon,
    label: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram",
        url: "https://www.instagram.com/finbuzz.ai",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/finbuzz-ai",
    },
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        url: "https://github.com/github/FINBUZZ.AI",
    },
    SocialLink {
        icon: Icon::Mail,
        label: "Email",
        url: "https://mail.google.com/mail/?view=cm&fs=1&to=customercarefinbuzz@gmail.com&su=Inquiry%20from%20FINBUZZ.AI%20Website",
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer fade-in-up">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title">{BRAND}</h3>
                        <p class="footer-blurb">
                            "The revolutionary financial platform powered by advanced AI."
                            <br />
                            "making your financial journey effortless and intuitive."
                        </p>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            {QUICK_LINKS.iter().map(|link| view! {
                                <li>
                                    <a href=link.route.path() class="footer-link">
                                        {link.label}
                                    </a>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"Contact"</h4>
                        <div class="social-row">
                            {SOCIAL_LINKS.iter().map(|link| view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-link"
                                    aria-label=link.label
                                >
                                    {link.icon.glyph()}
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_quick_links_target_distinct_routes() {
        assert_eq!(QUICK_LINKS.len(), 4);
        let routes: HashSet<_> = QUICK_LINKS.iter().map(|link| link.route).collect();
        assert_eq!(routes.len(), QUICK_LINKS.len());
    }

    #[test]
    fn test_social_links_are_https() {
        assert_eq!(SOCIAL_LINKS.len(), 4);
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }

    #[test]
    fn test_copyright_line() {
        assert!(COPYRIGHT.contains("2025"));
        assert!(COPYRIGHT.contains("FinBuzz.AI"));
    }
}
