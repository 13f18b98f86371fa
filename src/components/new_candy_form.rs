//! New Candy Form Component
//!
//! Form for adding a candy to the board.

use leptos::prelude::*;

/// Submits the typed name. The callback returns an error message to show
/// under the input, or `Ok` to clear it.
#[component]
pub fn NewCandyForm(
    #[prop(into)] on_submit: Callback<String, Result<(), String>>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let add_candy = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match on_submit.run(new_text.get()) {
            Ok(()) => {
                set_new_text.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <form id="add-candy" class="new-item-form" on:submit=add_candy>
            <div class="new-item-row">
                <input
                    type="text"
                    name="candy"
                    placeholder="Add a candy..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add Candy"</button>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </form>
    }
}
