/// Interactive Content Generator - turns blog posts into embeddable tools
/// Built with Rust + WASM + Yew

mod api;
mod auth;
mod config;
mod content;
mod embed;
mod error;
mod frame_size;
mod loading;
mod notifications;
pub mod renderer;
pub mod sanitizer;
mod workflow;
pub mod ui;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMemberstack)]
    fn init_memberstack(public_key: &str);
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Cleaned-up tool code for JavaScript callers
#[wasm_bindgen]
pub fn clean_tool_code(raw: &str) -> String {
    sanitizer::reconstruct(&sanitizer::parse(raw))
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    let config = config::AppConfig::from_build_env();

    match config.memberstack_public_key.as_deref() {
        Some(key) => init_memberstack(key),
        None => log::warn!("MEMBERSTACK_PUBLIC_KEY not set; sign-in will be unavailable"),
    }
    log::info!("Starting app against {}", config.backend_url);

    yew::Renderer::<ui::app::Root>::with_props(ui::app::RootProps {
        config: Rc::new(config),
        auth: auth::AuthHandle::new(auth::MemberstackAuth),
    })
    .render();
}
