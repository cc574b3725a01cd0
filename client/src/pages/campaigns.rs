//! Campaign list page with create and delete dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/campaigns`. Loads the list once on mount and refetches the full
//! list after every confirmed create or delete.

use leptos::prelude::*;
use records::Uuid;

use crate::components::campaign_card::CampaignCard;
use crate::state::campaigns::CampaignsState;
use crate::util::liveness::Liveness;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let state = RwSignal::new(CampaignsState::default());
    let live = Liveness::new();

    Effect::new({
        let live = live.clone();
        move || load_campaigns(state, live.clone())
    });

    let on_open_create = move |_| state.update(CampaignsState::open_create);
    let on_cancel_create = Callback::new(move |()| state.update(CampaignsState::close_create));
    let on_delete_request = Callback::new(move |id: Uuid| state.update(|s| s.request_delete(id)));
    let on_delete_cancel = Callback::new(move |()| {
        state.update(|s| {
            s.take_pending_delete();
        });
    });

    let on_create = Callback::new({
        let live = live.clone();
        move |()| {
            if let Some(name) = state.try_update(CampaignsState::begin_create).flatten() {
                create_campaign(name, state, live.clone());
            }
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = state.try_update(CampaignsState::take_pending_delete).flatten() {
            delete_campaign(id, state, live.clone());
        }
    });

    view! {
        <div class="page campaigns">
            <h1 class="page__title">"Список кампаний"</h1>
            <button class="btn btn--primary campaigns__create" on:click=on_open_create>
                "Создать кампанию"
            </button>

            <div class="campaigns__grid">
                <Show when=move || state.get().show_spinner()>
                    <span class="spinner" aria-label="Загрузка"></span>
                </Show>
                {move || {
                    state
                        .get()
                        .items
                        .into_iter()
                        .map(|campaign| view! { <CampaignCard campaign=campaign on_delete=on_delete_request/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || state.get().show_create>
                <CreateCampaignDialog state=state on_submit=on_create on_cancel=on_cancel_create/>
            </Show>
            <Show when=move || state.get().pending_delete.is_some()>
                <DeleteCampaignDialog on_confirm=on_delete_confirm on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}

/// Modal dialog prompting for a new campaign name.
#[component]
fn CreateCampaignDialog(
    state: RwSignal<CampaignsState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Создать кампанию"</h2>
                <label class="dialog__label">
                    "Название кампании"
                    <input
                        class="dialog__input"
                        type="text"
                        node_ref=input_ref
                        prop:value=move || state.get().new_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.new_name = value);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Отмена"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.get().can_create()
                        on:click=move |_| on_submit.run(())
                    >
                        "Создать"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteCampaignDialog(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Удалить кампанию?"</h2>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Отмена"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Удалить"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn load_campaigns(state: RwSignal<CampaignsState>, live: Liveness) {
    state.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_campaigns().await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(items) => state.update(|s| s.set_items(items)),
                Err(e) => {
                    log::warn!("campaign list fetch failed: {e}");
                    state.update(|s| s.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = live;
    }
}

fn create_campaign(name: String, state: RwSignal<CampaignsState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_campaign(&name).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(campaign) => {
                    log::info!("campaign created: {}", campaign.id);
                    state.update(CampaignsState::create_succeeded);
                    load_campaigns(state, live);
                }
                Err(e) => {
                    log::warn!("campaign insert failed: {e}");
                    state.update(CampaignsState::create_failed);
                    crate::util::browser::alert(crate::util::browser::CREATE_CAMPAIGN_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, state, live);
    }
}

fn delete_campaign(id: Uuid, state: RwSignal<CampaignsState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_campaign(id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(()) => load_campaigns(state, live),
                Err(e) => {
                    log::warn!("campaign delete failed: {e}");
                    crate::util::browser::alert(crate::util::browser::DELETE_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, state, live);
    }
}
