//! Key / type / value inputs shared by the add row and the edit dialog.
//!
//! DESIGN
//! ======
//! The component is addressed by a `FormSlot`, so both forms render the same
//! inputs, the same inline key error, and the same upload control, while
//! writing into separate drafts with separate upload flags. Image values are
//! never typed: the URL field is read-only and filled by an upload.

use leptos::prelude::*;
use records::{InjectableKind, Uuid};

use crate::state::injectables::{CampaignDetailsState, FormSlot, kind_label};
use crate::util::liveness::Liveness;

#[component]
pub fn InjectableFormFields(
    state: RwSignal<CampaignDetailsState>,
    slot: FormSlot,
    #[prop(into)] campaign_id: Signal<Option<Uuid>>,
    live: Liveness,
) -> impl IntoView {
    let form = move || state.with(|s| s.form(slot).clone());
    let is_image = move || form().kind == Some(InjectableKind::Image);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            if let (Some(file), Some(id)) = (file, campaign_id.get_untracked()) {
                upload_image(id, file, slot, state, live.clone());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, campaign_id, &live);
        }
    };

    view! {
        <div class="field">
            <input
                class="field__input"
                class:field__input--error=move || form().key_error().is_some()
                type="text"
                placeholder="Ключ"
                aria-label="Ключ"
                prop:value=move || form().key
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.form_mut(slot).key = value);
                }
            />
            <Show when=move || form().key_error().is_some()>
                <span class="field__error">{move || form().key_error().unwrap_or_default()}</span>
            </Show>
        </div>
        <select
            class="field__input field__select"
            aria-label="Тип"
            prop:value=move || form().kind.map_or("", InjectableKind::as_str)
            on:change=move |ev| {
                let kind = InjectableKind::parse(&event_target_value(&ev));
                state.update(|s| s.form_mut(slot).set_kind(kind));
            }
        >
            <option value="" disabled=true>
                "Тип"
            </option>
            {InjectableKind::ALL
                .into_iter()
                .map(|kind| view! { <option value=kind.as_str()>{kind_label(kind)}</option> })
                .collect::<Vec<_>>()}
        </select>
        <Show
            when=is_image
            fallback=move || {
                view! {
                    <input
                        class="field__input field__value"
                        type="text"
                        placeholder="Текст"
                        aria-label="Текст"
                        prop:value=move || form().value
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form_mut(slot).value = value);
                        }
                    />
                }
            }
        >
            <label class="btn btn--outline" class:btn--busy=move || form().uploading>
                {move || if form().uploading { "Загрузка…" } else { "Загрузить" }}
                <input
                    type="file"
                    accept="image/*"
                    hidden=true
                    disabled=move || form().uploading
                    on:change=on_file.clone()
                />
            </label>
            <input
                class="field__input field__value"
                type="text"
                readonly=true
                placeholder="Ссылка на изображение"
                aria-label="Ссылка на изображение"
                prop:value=move || form().value
            />
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn upload_image(
    campaign_id: Uuid,
    file: web_sys::File,
    slot: FormSlot,
    state: RwSignal<CampaignDetailsState>,
    live: Liveness,
) {
    let Some(ticket) = state.try_update(|s| s.form_mut(slot).begin_upload()) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = crate::net::api::upload_image(campaign_id, file).await;
        if !live.is_alive() {
            return;
        }
        match result {
            Ok(url) => state.update(|s| s.form_mut(slot).upload_succeeded(ticket, url)),
            Err(e) => {
                log::warn!("image upload failed: {e}");
                state.update(|s| s.form_mut(slot).upload_failed(ticket));
                crate::util::browser::alert(&crate::util::browser::upload_failed_message(&e));
            }
        }
    });
}
