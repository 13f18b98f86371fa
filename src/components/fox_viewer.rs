//! Fox Viewer Component
//!
//! Fetches a random fox picture on demand.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::api;
use crate::context::AppContext;
use crate::store::{store_fox, store_set_fox, use_app_store, FoxState};

#[component]
pub fn FoxViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let endpoint = ctx.config.fox_endpoint;

    let fetch = move |_| {
        let endpoint = endpoint.clone();
        store_set_fox(&store, FoxState::Loading);
        spawn_local(async move {
            match api::fetch_fox(&endpoint).await {
                Ok(fox) => {
                    info!(image = %fox.image, link = %fox.link, "fetched fox");
                    store_set_fox(&store, FoxState::Loaded(fox));
                }
                Err(e) => {
                    warn!(error = %e, %endpoint, "fox fetch failed");
                    store_set_fox(&store, FoxState::Failed(e));
                }
            }
        });
    };

    view! {
        <section class="fox-viewer">
            <h2>"Random Fox"</h2>
            <button
                class="fetch-btn"
                disabled=move || store_fox(&store) == FoxState::Loading
                on:click=fetch
            >
                "Fetch a fox"
            </button>

            {move || match store_fox(&store) {
                FoxState::Idle => view! { <p class="hint">"No fox yet."</p> }.into_any(),
                FoxState::Loading => view! { <p class="hint">"Fetching..."</p> }.into_any(),
                FoxState::Loaded(fox) => view! {
                    <a href=fox.link target="_blank">
                        <img class="fox-image" src=fox.image alt="A random fox" />
                    </a>
                }.into_any(),
                FoxState::Failed(e) => view! {
                    <p class="fox-error">{format!("Could not fetch a fox: {}", e)}</p>
                }.into_any(),
            }}
        </section>
    }
}
