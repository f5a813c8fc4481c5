use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::BRAND;
use crate::routes::Route;

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let navigate = use_navigate();
    let get_started = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Documentation.path(), Default::default())
    };
    let get_started_mobile = move |_| navigate(Route::Documentation.path(), Default::default());

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img src="/assets/Logo.png" alt="FINBUZZ.AI logo" class="nav-logo" />
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#how-it-works" class="nav-link">"How FINBUZZ.AI Works"</a>
                    <a href="#about" class="nav-link">"About"</a>
                    <button class="nav-cta" on:click=get_started>
                        "Get Started"
                    </button>
                </div>
                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Drop-down menu for small screens
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    <a href="#features" class="nav-mobile-link">"Features"</a>
                    <a href="#how-it-works" class="nav-mobile-link">"How It Works"</a>
                    <a href="#about" class="nav-mobile-link">"About"</a>
                    <button class="nav-cta nav-cta-wide" on:click=get_started_mobile.clone()>
                        "Get Started"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
