// Home page - the full composite, footer included
use crate::sections::{About, Features, Footer, Hero, HowItWorks, Navigation};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navigation />
        <Hero />
        <Features />
        <HowItWorks />
        <About />
        <Footer />
    }
}
