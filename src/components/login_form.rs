//! Login Form Component
//!
//! Each input gets its handler from `input_handler`, so both fields share
//! one implementation.

use leptos::prelude::*;
use likes_binder::{input_handler, CredentialField};
use tracing::info;

use crate::store::{store_update_user, store_user, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let (signed_in, set_signed_in) = signal::<Option<String>>(None);

    let on_username = input_handler(CredentialField::Username);
    let on_password = input_handler(CredentialField::Password);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = store_user(&store);
        // Debug output masks the password
        info!(user = ?user, "login submitted");
        set_signed_in.set(Some(user.username));
    };

    view! {
        <section class="login">
            <h2>"Sign In"</h2>
            <form class="login-form" on:submit=submit>
                <input
                    id="username"
                    type="text"
                    placeholder="Username"
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store_update_user(&store, |user| on_username(user, &value));
                    }
                />
                <input
                    id="password"
                    type="password"
                    placeholder="Password"
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store_update_user(&store, |user| on_password(user, &value));
                    }
                />
                <button type="submit">"Sign In"</button>
            </form>

            {move || signed_in.get().map(|name| view! {
                <p class="hint">{format!("Submitted as {}", name)}</p>
            })}
        </section>
    }
}
