//! Credential form shown while signed out, for both login and signup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The email and password are read straight from the inputs at submit time
//! and handed to `SessionController`; they are never kept in a signal.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::api::HttpAuthService;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::session::SessionController;
use crate::state::toast::ToastState;

/// Build credentials from raw field values. Both fields are required.
fn credentials_from_fields(email: &str, password: &str) -> Option<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some(Credentials::new(email, password))
}

fn field_value(node: NodeRef<Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = SessionController::new(HttpAuthService, toasts);

    let email_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let pending = RwSignal::new(false);

    let mode = move || auth.get().form_mode().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(mode) = auth.get_untracked().form_mode() else {
            return;
        };
        let Some(credentials) = credentials_from_fields(&field_value(email_ref), &field_value(password_ref)) else {
            return;
        };
        pending.set(true);
        leptos::task::spawn_local(async move {
            if let Some(next) = session.submit(mode, credentials).await {
                auth.set(next);
            }
            // The page unmounts on success, taking `pending` with it.
            pending.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">{move || mode().title()}</h2>
                <p class="login-card__subtitle">{move || mode().subtitle()}</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="email" class="sr-only">"Email"</label>
                    <input
                        node_ref=email_ref
                        id="email"
                        name="email"
                        type="email"
                        required
                        class="login-input"
                        placeholder="m@example.com"
                    />
                    <label for="password" class="sr-only">"Password"</label>
                    <input
                        node_ref=password_ref
                        id="password"
                        name="password"
                        type="password"
                        required
                        class="login-input"
                        placeholder="********"
                    />
                    <button class="login-button" type="submit" disabled=move || pending.get()>
                        {move || mode().submit_label()}
                    </button>
                </form>
                <div class="login-card__toggle">
                    <button class="login-link" type="button" on:click=move |_| auth.update(AuthState::toggle_mode)>
                        {move || mode().toggle_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
