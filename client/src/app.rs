//! Root application component with the auth gate and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::toast_container::ToastContainer;
use crate::pages::{login::LoginPage, shell::ShellPage};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts, mounts the toast stack once, and
/// renders the credential form or the shell depending on `AuthState`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    let authenticated = move || auth.with(AuthState::is_authenticated);

    view! {
        <Stylesheet id="leptos" href="/pkg/acme-shell.css"/>
        <Title text="Acme Inc"/>

        <ToastContainer/>
        <Show when=authenticated fallback=|| view! { <LoginPage/> }>
            <ShellPage/>
        </Show>
    }
}
