//! Card for one campaign on the list page.

use leptos::prelude::*;
use records::{Campaign, Uuid};

use crate::util::date::format_created_at;

/// Campaign name, creation date, an open link, and a delete button. The
/// delete button only reports the id; confirmation is the page's job.
#[component]
pub fn CampaignCard(campaign: Campaign, on_delete: Callback<Uuid>) -> impl IntoView {
    let id = campaign.id;
    let href = format!("/campaign/{id}");
    let created = format_created_at(&campaign.created_at);

    view! {
        <div class="campaign-card">
            <span class="campaign-card__name">{campaign.name}</span>
            <span class="campaign-card__date">"Создано: " {created}</span>
            <div class="campaign-card__actions">
                <a class="btn btn--primary" href=href>
                    "Перейти"
                </a>
                <button
                    class="btn btn--icon btn--danger"
                    title="Удалить кампанию"
                    aria-label="Удалить кампанию"
                    on:click=move |_| on_delete.run(id)
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}
