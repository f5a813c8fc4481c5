// How-to-use page - single section route
use crate::sections::HowItWorks;
use leptos::prelude::*;

#[component]
pub fn HowToUsePage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"FINBUZZ.AI Workflow"</h1>
                <p class="page-description">
                    "Four simple stages from first click to actionable insight"
                </p>
            </div>
        </section>
        <HowItWorks />
    }
}
