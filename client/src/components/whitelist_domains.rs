//! Whitelist domains panel for a campaign.
//!
//! SYSTEM CONTEXT
//! ==============
//! Embedded in the campaign detail page. Owns its own fetch cycle: loads on
//! mount and whenever the campaign id changes, and refetches after every
//! successful add or delete.

use leptos::prelude::*;
use records::Uuid;

use crate::state::whitelist::WhitelistState;
use crate::util::liveness::Liveness;

#[component]
pub fn WhitelistDomains(#[prop(into)] campaign_id: Signal<Option<Uuid>>) -> impl IntoView {
    let state = RwSignal::new(WhitelistState::default());
    let live = Liveness::new();

    Effect::new({
        let live = live.clone();
        move || {
            if let Some(id) = campaign_id.get() {
                load_domains(id, state, live.clone());
            }
        }
    });

    let submit = Callback::new({
        let live = live.clone();
        move |()| {
            let Some(id) = campaign_id.get_untracked() else {
                return;
            };
            let Some(domain) = state.try_update(WhitelistState::begin_add).flatten() else {
                return;
            };
            add_domain(id, domain, state, live.clone());
        }
    });

    let on_delete = Callback::new(move |row_id: Uuid| {
        if let Some(id) = campaign_id.get_untracked() {
            delete_domain(id, row_id, state, live.clone());
        }
    });

    view! {
        <section class="card whitelist">
            <h2 class="card__title">"Whitelist домены"</h2>
            <div class="form-row">
                <input
                    class="field__input"
                    type="text"
                    placeholder="example.com"
                    aria-label="Домен"
                    prop:value=move || state.get().new_domain
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.new_domain = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || !state.get().can_add()
                    on:click=move |_| submit.run(())
                >
                    "+"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Домен"</th>
                        <th class="table__actions">"Действия"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .get()
                            .domains
                            .into_iter()
                            .map(|row| {
                                let row_id = row.id;
                                view! {
                                    <tr>
                                        <td>{row.domain}</td>
                                        <td class="table__actions">
                                            <button
                                                class="btn btn--icon btn--danger"
                                                title="Удалить домен"
                                                aria-label="Удалить домен"
                                                on:click=move |_| on_delete.run(row_id)
                                            >
                                                "✕"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}

fn load_domains(campaign_id: Uuid, state: RwSignal<WhitelistState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_domains(campaign_id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(rows) => state.update(|s| s.domains = rows),
                Err(e) => log::warn!("whitelist fetch failed for {campaign_id}: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, state, live);
    }
}

fn add_domain(campaign_id: Uuid, domain: String, state: RwSignal<WhitelistState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::add_domain(campaign_id, &domain).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(_) => {
                    state.update(WhitelistState::add_succeeded);
                    load_domains(campaign_id, state, live);
                }
                Err(e) => {
                    log::warn!("whitelist insert failed: {e}");
                    state.update(WhitelistState::add_failed);
                    crate::util::browser::alert(crate::util::browser::ADD_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, domain, state, live);
    }
}

fn delete_domain(campaign_id: Uuid, row_id: Uuid, state: RwSignal<WhitelistState>, live: Liveness) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_domain(row_id).await;
            if !live.is_alive() {
                return;
            }
            match result {
                Ok(()) => load_domains(campaign_id, state, live),
                Err(e) => {
                    log::warn!("whitelist delete failed: {e}");
                    crate::util::browser::alert(crate::util::browser::DELETE_FAILED);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, row_id, state, live);
    }
}
