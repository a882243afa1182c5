//! Sidebar navigation for the authenticated shell.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::auth::Page;

fn nav_icon(page: Page) -> &'static str {
    match page {
        Page::Home => "⌂",
        Page::Project => "▤",
        Page::Settings => "⚙",
    }
}

fn nav_item_class(page: Page, active: Page) -> &'static str {
    if page == active {
        "sidebar__item sidebar__item--active"
    } else {
        "sidebar__item"
    }
}

/// Brand header, one button per page, and a logout button.
#[component]
pub fn Sidebar(
    #[prop(into)] active: Signal<Page>,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"🗻"</span>
                <span>"Acme Inc"</span>
            </div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || nav_item_class(page, active.get())
                                type="button"
                                on:click=move |_| on_select.run(page)
                            >
                                <span class="sidebar__icon">{nav_icon(page)}</span>
                                <span>{page.nav_label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="sidebar__item" type="button" on:click=move |_| on_logout.run(())>
                    <span class="sidebar__icon">"⎋"</span>
                    <span>"Logout"</span>
                </button>
            </nav>
        </aside>
    }
}
