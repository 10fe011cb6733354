use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::ReplayConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod time_utils;
pub mod view_state;

/// Install logging and mount the replay viewer
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = ReplayConfig::default();

    let console_logger = Box::new(infrastructure::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Replay viewer starting, endpoint {}", config.endpoint_url()),
    );

    mount_to_body(move || view! { <App config=config /> });
}
