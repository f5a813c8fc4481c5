// About page - single section route
use crate::sections::About;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"About"</h1>
                <p class="page-description">
                    "The platform and the team behind it"
                </p>
            </div>
        </section>
        <About />
    }
}
