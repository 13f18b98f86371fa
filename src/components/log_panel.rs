//! Log Panel Component
//!
//! Shows the rolling log buffer; refreshed whenever an entry is pushed.

use leptos::prelude::*;
use rolling_logger::LogEntry;

use crate::context::AppContext;
use crate::store::{store_logs, store_set_logs, use_app_store};

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let logs = ctx.logs;

    let refresh = {
        let logs = logs.clone();
        move || {
            let lines = logs.snapshot().iter().map(LogEntry::format_line).collect();
            store_set_logs(&store, lines);
        }
    };
    refresh();
    logs.on_change(refresh);

    view! {
        <aside class="log-panel">
            <div class="log-header">
                <h2>"Log"</h2>
                <button
                    class="clear-btn"
                    on:click=move |_| {
                        logs.clear();
                        store_set_logs(&store, Vec::new());
                    }
                >
                    "Clear"
                </button>
            </div>
            <ol class="log-lines">
                {move || store_logs(&store)
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect_view()}
            </ol>
        </aside>
    }
}
