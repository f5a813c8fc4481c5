// Features page - single section route
use crate::sections::Features;
use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Features"</h1>
                <p class="page-description">
                    "Everything the FINBUZZ.AI agent can do for you"
                </p>
            </div>
        </section>
        <Features />
    }
}
