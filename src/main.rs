//! Likes Board Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod dom;
mod store;

use app::App;
use leptos::prelude::*;
use likes_binder::config::DEFAULT_LOG_CAPACITY;
use likes_binder::BoardConfig;
use tracing::{info, warn};

/// Bundled board configuration.
const BOARD_JSON: &str = include_str!("../board.json");

fn main() {
    console_error_panic_hook::set_once();

    let parsed = BoardConfig::from_json(BOARD_JSON);
    let capacity = parsed
        .as_ref()
        .map(|config| config.log_capacity)
        .unwrap_or(DEFAULT_LOG_CAPACITY);
    let logs = rolling_logger::init(capacity);

    let mut config = parsed.unwrap_or_else(|e| {
        warn!(error = %e, "bad board.json, using defaults");
        BoardConfig::default()
    });
    if let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) {
        config.apply_query(&search);
    }
    info!(binding = %config.binding, strategy = ?config.strategy, "starting board");

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
