// Fallback for paths outside the route table
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsValue;

use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    // The one error class the site has; make it visible in the console.
    Effect::new(move || {
        let path = location.pathname.get();
        if Route::from_path(&path).is_none() {
            web_sys::console::warn_1(&JsValue::from_str(&format!("route not found: {path}")));
        }
    });

    view! {
        <section class="not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"This page does not exist."</p>
                <a href="/" class="btn btn-chat">"Back to home"</a>
            </div>
        </section>
    }
}
