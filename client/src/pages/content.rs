//! Static content for the authenticated shell pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell renders exactly one of these blocks beside the sidebar, chosen
//! by the selected `Page` in `AuthState`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use crate::state::auth::Page;

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Project, Page::Settings];

    /// Parse a page slug. Unknown slugs fall back to `Home`.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "project" => Self::Project,
            "settings" => Self::Settings,
            _ => Self::Home,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Project => "project",
            Self::Settings => "settings",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Project => "Project",
            Self::Settings => "Settings",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Self::Home => "Welcome to the Home Page!",
            Self::Project => "This is the Project Page.",
            Self::Settings => "This is the Settings Page.",
        }
    }

    /// Sidebar button label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Project => "Projects",
            Self::Settings => "Settings",
        }
    }
}

/// Heading and body text for one shell page.
#[component]
pub fn PageContent(#[prop(into)] page: Signal<Page>) -> impl IntoView {
    view! {
        <div class="page-content" data-page=move || page.get().slug()>
            <h1>{move || page.get().heading()}</h1>
            <p>{move || page.get().body()}</p>
        </div>
    }
}
