// FINBUZZ.AI landing page — Leptos 0.8 Edition

mod pages;
mod routes;
mod sections;
mod styles;
mod ticker;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use pages::{
    AboutPage, AgentUsagePage, DocumentationPage, FeaturesPage, HomePage, HowToUsePage,
    NotFoundPage,
};
use sections::ConsoleBanner;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{styles::SITE_CSS}</style>
        <ConsoleBanner />
        <div class="app-shell">
            <Router>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/features") view=FeaturesPage />
                    <Route path=path!("/how-to-use") view=HowToUsePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/documentation") view=DocumentationRoute />
                    <Route path=path!("/agent-usage") view=AgentUsageRoute />
                </Routes>
            </Router>
        </div>
    }
}

/// Binds the documentation page's actions to the router: explore descends
/// into the usage guide, back returns home.
#[component]
fn DocumentationRoute() -> impl IntoView {
    let explore = use_navigate();
    let back = use_navigate();
    view! {
        <DocumentationPage
            on_explore=Callback::new(move |_| {
                explore(routes::Route::AgentUsage.path(), Default::default())
            })
            on_back=Callback::new(move |_| back(routes::Route::Home.path(), Default::default()))
        />
    }
}

/// The usage guide goes one way back: to the documentation overview.
#[component]
fn AgentUsageRoute() -> impl IntoView {
    let back = use_navigate();
    view! {
        <AgentUsagePage
            on_back=Callback::new(move |_| {
                back(routes::Route::Documentation.path(), Default::default())
            })
        />
    }
}
