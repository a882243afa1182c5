//! Authenticated shell: sidebar plus the selected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the app root only while signed in. Navigation is purely local;
//! logout goes through `SessionController` and is not guarded against
//! overlapping clicks.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::net::api::HttpAuthService;
use crate::pages::content::PageContent;
use crate::state::auth::{AuthState, Page};
use crate::state::session::SessionController;
use crate::state::toast::ToastState;

#[component]
pub fn ShellPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = SessionController::new(HttpAuthService, toasts);

    let active = Signal::derive(move || auth.get().page().unwrap_or_default());

    let on_select = Callback::new(move |page: Page| auth.update(|s| s.select_page(page)));
    let on_logout = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            if let Some(next) = session.logout().await {
                auth.set(next);
            }
        });
    });

    view! {
        <div class="shell">
            <Sidebar active=active on_select=on_select on_logout=on_logout/>
            <main class="shell__content">
                <PageContent page=active/>
            </main>
        </div>
    }
}
