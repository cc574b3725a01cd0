//! Collapsible vertical navigation menu.
//!
//! DESIGN
//! ======
//! Collapse state lives in the shared `UiState` context so the layout can
//! react to it; it is never persisted across reloads.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{NAV_ITEMS, UiState};

#[component]
pub fn SidebarMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let collapsed = move || ui.get().sidebar_collapsed;

    view! {
        <nav class="sidebar" class:sidebar--collapsed=collapsed>
            <button
                class="sidebar__toggle"
                title=move || ui.with(UiState::toggle_label)
                aria-label=move || ui.with(UiState::toggle_label)
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            {NAV_ITEMS
                .into_iter()
                .map(|item| {
                    view! {
                        <a
                            class="sidebar__item"
                            class:sidebar__item--active=move || item.is_active(&pathname.get())
                            href=item.path
                            title=item.label
                        >
                            <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                            <Show when=move || !collapsed()>
                                <span class="sidebar__label">{item.label}</span>
                            </Show>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
