//! Likes Board App
//!
//! Main application component: the candy board, the callback exercises
//! and the log column.

use leptos::prelude::*;
use likes_binder::BoardConfig;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::components::{CandyBoard, FoxViewer, LogPanel, LoginForm};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: BoardConfig, logs: LogBuffer) -> impl IntoView {
    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new(config, logs));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Likes Board"</h1>
                <CandyBoard />
                <FoxViewer />
                <LoginForm />
            </main>

            // Right: recent log entries
            <LogPanel />
        </div>
    }
}
