//! Candy Board Component
//!
//! Hosts the `ListRenderer`. Leptos renders an empty `<ul>`; once it is
//! mounted the renderer takes it over through `DomContainer` and owns every
//! card inside it. The store only receives snapshots for the summary line.

use leptos::prelude::*;
use likes_binder::{ClickOutcome, ListRenderer, NewItemForm};
use tracing::warn;
use web_sys::Element;

use crate::components::NewCandyForm;
use crate::context::AppContext;
use crate::dom::DomContainer;
use crate::store::{store_candies, store_set_candies, use_app_store};

#[component]
pub fn CandyBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let config = ctx.config;
    let binding = config.binding;

    let list_ref = NodeRef::<leptos::html::Ul>::new();
    let renderer = StoredValue::new_local(None::<ListRenderer<DomContainer>>);
    // (listeners attached, total likes), read back from the renderer
    let (stats, set_stats) = signal((0usize, 0u64));

    let sync = move || {
        let snapshot = renderer.with_value(|board| {
            board.as_ref().map(|b| {
                (b.items().to_vec(), b.container().listener_count(), b.total_count())
            })
        });
        if let Some((items, listeners, total)) = snapshot {
            store_set_candies(&store, items);
            set_stats.set((listeners, total));
        }
    };

    // Take over the list once it is in the document
    Effect::new(move |_| {
        let Some(list) = list_ref.get() else { return };
        if renderer.with_value(Option::is_some) {
            return;
        }

        let dispatch = move |current: &Element, origin: &Element| {
            let outcome = renderer
                .try_update_value(|board| board.as_mut().map(|b| b.handle_click(current, origin)))
                .flatten();
            if let Some(ClickOutcome::Incremented { .. }) = outcome {
                sync();
            }
        };

        let Some(container) = DomContainer::new(Element::clone(&list), config.strategy, dispatch)
        else {
            warn!("candy list is not attached to a document");
            return;
        };

        let mut board = ListRenderer::new(container, binding);
        if let Err(e) = board.render_all(config.seed.clone()) {
            warn!(error = %e, "failed to render seed candies");
        }
        renderer.set_value(Some(board));
        sync();
    });

    let add_candy = Callback::new(move |label: String| -> Result<(), String> {
        renderer
            .try_update_value(|board| match board {
                Some(board) => board
                    .add_item(NewItemForm::new(label))
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
                None => Err("board is not ready yet".to_string()),
            })
            .unwrap_or_else(|| Err("board has been disposed".to_string()))?;
        sync();
        Ok(())
    });

    view! {
        <section class="candy-board">
            <h2>"Candies"</h2>
            <p class="binding-info">
                {move || format!("{} binding, {} click listener(s)", binding, stats.get().0)}
            </p>

            <NewCandyForm on_submit=add_candy />

            <ul id="candies" class="cards" node_ref=list_ref></ul>

            <p class="item-count">
                {move || format!("{} candies, {} likes", store_candies(&store).len(), stats.get().1)}
            </p>
        </section>
    }
}
