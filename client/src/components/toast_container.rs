//! Stack of toast notifications pinned to the top-right corner.
//!
//! Mounted once by the app root. Entries expire on their own (see
//! `Notifier for RwSignal<ToastState>`); the close button drops one early.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class()>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="close"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
