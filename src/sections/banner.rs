//! Console branding printed once when the site mounts.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::hero::{CHAT_AGENT_URL, TRADING_AGENT_URL};
use super::BRAND;

fn ascii_logo() -> String {
    format!(
        r#"
  ___ ___ _  _ ___ _   _ _____ ____     _   ___
 | __|_ _| \| | _ ) | | |_  / |_  /    / \  |_ _|
 | _| | || .  | _ \ |_| |/ /   / /  _ / _ \  | |
 |_| |___|_|\_|___/\___//___|_/___|(_)_/ \_\|___|

  {BRAND} — your AI financial partner
"#
    )
}

/// Renders nothing; logs the brand block to the browser console on mount.
#[component]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        print_banner();
    });

    view! {}
}

fn print_banner() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #00ff88; font-family: monospace; font-size: 11px;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%c=== HOSTED AGENTS ==="),
        &JsValue::from_str("color: #ffcc00; font-weight: bold;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c[chat]    {CHAT_AGENT_URL}")),
        &JsValue::from_str("color: #ffcc00;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c[trading] {TRADING_AGENT_URL}")),
        &JsValue::from_str("color: #00ff88;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos."),
        &JsValue::from_str("color: #888;"),
    );
}
