//! Page frame: sidebar on the left, routed content on the right.

use leptos::prelude::*;

use crate::components::sidebar_menu::SidebarMenu;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <SidebarMenu/>
            <main class="app-layout__main">{children()}</main>
        </div>
    }
}
