//! Application Context
//!
//! Start-up settings shared via Leptos Context API.

use likes_binder::BoardConfig;
use rolling_logger::LogBuffer;

#[derive(Clone)]
pub struct AppContext {
    /// Board settings after query overrides
    pub config: BoardConfig,
    /// Buffer behind the global tracing subscriber
    pub logs: LogBuffer,
}

impl AppContext {
    pub fn new(config: BoardConfig, logs: LogBuffer) -> Self {
        Self { config, logs }
    }
}
