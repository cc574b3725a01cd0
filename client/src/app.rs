//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::pages::{campaign_details::CampaignDetailsPage, campaigns::CampaignsPage, instruction::InstructionPage};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
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
/// Provides the shared UI context and sets up client-side routing inside the
/// sidebar layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/campaign-console.css"/>
        <Title text="Campaign Console"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <p class="page__empty">"Страница не найдена."</p> }>
                    <Route path=StaticSegment("") view=InstructionPage/>
                    <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                    <Route path=(StaticSegment("campaign"), ParamSegment("id")) view=CampaignDetailsPage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}
