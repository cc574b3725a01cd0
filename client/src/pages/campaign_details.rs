//! Campaign detail page: whitelist panel, injectable add row, table, and the
//! edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/campaign/:id`. The campaign record (for the heading) and the
//! injectables list are fetched independently whenever the route id changes.
//! Every confirmed add, edit, or delete triggers a full refetch of the list.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::{Injectable, InjectableKind, Uuid};

use crate::components::injectable_form::InjectableFormFields;
use crate::components::whitelist_domains::WhitelistDomains;
use crate::state::injectables::{CampaignDetailsState, FormSlot};
use crate::util::browser;
use crate::util::liveness::Liveness;

#[component]
pub fn CampaignDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let raw_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let campaign_id = Memo::new(move |_| Uuid::parse_str(&raw_id.get()).ok());
    let state = RwSignal::new(CampaignDetailsState::default());
    let live = Liveness::new();

    Effect::new({
        let live = live.clone();
        move || {
            let id = campaign_id.get();
            state.update(CampaignDetailsState::switch_campaign);
            if let Some(id) = id {
                load_campaign(id, state, live.clone());
                load_injectables(id, state, live.clone());
            }
        }
    });

    let on_add = Callback::new({
        let live = live.clone();
        move |()| {
            let Some(id) = campaign_id.get_untracked() else {
                return;
            };
            if let Some(fields) = state.try_update(CampaignDetailsState::begin_add).flatten() {
                add_injectable(id, fields, state, live.clone());
            }
        }
    });

    let on_save_edit = Callback::new({
        let live = live.clone();
        move |()| {
            let Some(campaign) = campaign_id.get_untracked() else {
                return;
            };
            if let Some((id, fields)) = state.try_update(CampaignDetailsState::begin_save_edit).flatten() {
                save_injectable(campaign, id, fields, state, live.clone());
            }
        }
    });

    let dialog_live = live.clone();
    let on_cancel_edit = Callback::new(move |()| state.update(CampaignDetailsState::cancel_edit));
    let on_edit = Callback::new(move |row: Injectable| state.update(|s| s.begin_edit(&row)));
    let on_delete = Callback::new({
        let live = live.clone();
        move |row_id: Uuid| {
            if let Some(id) = campaign_id.get_untracked() {
                delete_injectable(id, row_id, state, live.clone());
            }
        }
    });

    view! {
        <div class="page campaign-details">
            <h1 class="page__title">{move || state.with(CampaignDetailsState::title)}</h1>
            <p class="page__subtitle">"ID: " {move || raw_id.get()}</p>

            <WhitelistDomains campaign_id=campaign_id/>

            <section class="card">
                <h2 class="card__title">"Добавить подмену"</h2>
                <div class="form-row">
                    <InjectableFormFields state=state slot=FormSlot::Add campaign_id=campaign_id live=live.clone()/>
                    <button
                        class="btn btn--primary"
                        title="Добавить"
                        disabled=move || !state.with(CampaignDetailsState::can_add)
                        on:click=move |_| on_add.run(())
                    >
                        "+"
                    </button>
                </div>

                <h2 class="card__title">"Список подмен"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Ключ"</th>
                            <th>"Тип"</th>
                            <th>"Значение"</th>
                            <th class="table__actions">"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.injectables.clone())
                                .into_iter()
                                .map(|row| view! { <InjectableRow row=row on_edit=on_edit on_delete=on_delete/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <Show when=move || state.with(|s| s.editing.is_some())>
                <EditInjectableDialog
                    state=state
                    campaign_id=campaign_id
                    live=dialog_live.clone()
                    on_save=on_save_edit
                    on_cancel=on_cancel_edit
                />
            </Show>

            <button class="back-button" title="Назад" aria-label="Назад" on:click=move |_| browser::go_back()>
                "←"
            </button>
        </div>
    }
}

#[component]
fn InjectableRow(row: Injectable, on_edit: Callback<Injectable>, on_delete: Callback<Uuid>) -> impl IntoView {
    let row_id = row.id;
    let value = if row.kind == InjectableKind::Image {
        view! {
            <a href=row.value.clone() target="_blank" rel="noopener noreferrer">
                {row.value.clone()}
            </a>
        }
        .into_any()
    } else {
        row.value.clone().into_any()
    };
    let key = row.key.clone();
    let kind = row.kind.as_str();

    view! {
        <tr>
            <td>{key}</td>
            <td>{kind}</td>
            <td class="table__value">{value}</td>
            <td class="table__actions">
                <button
                    class="btn btn--icon"
                    title="Редактировать"
                    aria-label="Редактировать"
                    on:click=move |_| on_edit.run(row.clone())
                >
                    "✎"
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Удалить"
                    aria-label="Удалить"
                    on:click=move |_| on_delete.run(row_id)
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog editing an existing injectable.
#[component]
fn EditInjectableDialog(
    state: RwSignal<CampaignDetailsState>,
    campaign_id: Memo<Option<Uuid>>,
    live: Liveness,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Редактировать подмену"</h2>
                <div class="dialog__stack">
                    <InjectableFormFields state=state slot=FormSlot::Edit campaign_id=campaign_id live=live/>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Отмена"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(CampaignDetailsState::can_save_edit)
                        on:click=move |_| on_save.run(())
                    >
                        "Сохранить"
                    </button>
                </div>
            </div>
        </div>
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

fn load_campaign(id: Uuid, state: RwSignal<CampaignDetailsState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_campaign(id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(campaign) => state.update(|s| s.campaign = Some(campaign)),
                Err(e) => log::warn!("campaign fetch failed for {id}: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, state, live);
    }
}

fn load_injectables(id: Uuid, state: RwSignal<CampaignDetailsState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_injectables(id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(rows) => state.update(|s| s.injectables = rows),
                Err(e) => log::warn!("injectables fetch failed for {id}: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, state, live);
    }
}

fn add_injectable(
    campaign_id: Uuid,
    fields: records::InjectableFields,
    state: RwSignal<CampaignDetailsState>,
    live: Liveness,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_injectable(campaign_id, &fields).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    state.update(CampaignDetailsState::add_succeeded);
                    load_injectables(campaign_id, state, live);
                }
                Err(e) => {
                    log::warn!("injectable insert failed: {e}");
                    state.update(CampaignDetailsState::add_failed);
                    browser::alert(browser::ADD_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, fields, state, live);
    }
}

fn save_injectable(
    campaign_id: Uuid,
    id: Uuid,
    fields: records::InjectableFields,
    state: RwSignal<CampaignDetailsState>,
    live: Liveness,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_injectable(id, &fields).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    state.update(CampaignDetailsState::save_edit_succeeded);
                    load_injectables(campaign_id, state, live);
                }
                Err(e) => {
                    log::warn!("injectable update failed: {e}");
                    state.update(CampaignDetailsState::save_edit_failed);
                    browser::alert(browser::UPDATE_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, id, fields, state, live);
    }
}

fn delete_injectable(campaign_id: Uuid, id: Uuid, state: RwSignal<CampaignDetailsState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_injectable(id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(()) => load_injectables(campaign_id, state, live),
                Err(e) => {
                    log::warn!("injectable delete failed: {e}");
                    browser::alert(browser::DELETE_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, id, state, live);
    }
}
