use super::*;

fn row(n: u128, key: &str, kind: InjectableKind, value: &str) -> Injectable {
    Injectable {
        id: Uuid::from_u128(n),
        campaign_id: Uuid::from_u128(0xC1),
        key: key.to_owned(),
        kind,
        value: value.to_owned(),
        created_at: "2025-03-01T10:00:00+00:00".to_owned(),
    }
}

fn filled(key: &str, kind: InjectableKind, value: &str) -> InjectableForm {
    InjectableForm { key: key.to_owned(), kind: Some(kind), value: value.to_owned(), ..Default::default() }
}

// =============================================================
// InjectableForm
// =============================================================

#[test]
fn key_error_only_for_non_empty_invalid_keys() {
    let mut form = InjectableForm::default();
    assert_eq!(form.key_error(), None);
    form.key = "bad key!".to_owned();
    assert_eq!(form.key_error(), Some(KEY_ERROR_MESSAGE));
    form.key = "valid_key-1".to_owned();
    assert_eq!(form.key_error(), None);
}

#[test]
fn submit_requires_every_field() {
    assert!(filled("cta_1", InjectableKind::Text, "Buy now").can_submit());
    assert!(!filled("", InjectableKind::Text, "Buy now").can_submit());
    assert!(!filled("cta_1", InjectableKind::Text, "").can_submit());
    assert!(!filled("bad key!", InjectableKind::Text, "Buy now").can_submit());

    let mut no_kind = filled("cta_1", InjectableKind::Text, "Buy now");
    no_kind.kind = None;
    assert!(!no_kind.can_submit());
}

#[test]
fn submit_is_disabled_while_uploading() {
    let mut form = filled("hero", InjectableKind::Image, "https://cdn.test/a.png");
    form.begin_upload();
    assert!(!form.can_submit());
    assert_eq!(form.to_fields(), None);
}

#[test]
fn switching_type_clears_value() {
    let mut form = filled("cta_1", InjectableKind::Text, "Buy now");
    form.set_kind(Some(InjectableKind::Image));
    assert_eq!(form.kind, Some(InjectableKind::Image));
    assert!(form.value.is_empty());
}

#[test]
fn reselecting_same_type_keeps_value() {
    let mut form = filled("cta_1", InjectableKind::Text, "Buy now");
    form.set_kind(Some(InjectableKind::Text));
    assert_eq!(form.value, "Buy now");
}

#[test]
fn image_value_comes_from_upload() {
    let mut form = InjectableForm { key: "hero".to_owned(), ..Default::default() };
    form.set_kind(Some(InjectableKind::Image));
    assert!(!form.can_submit());

    let ticket = form.begin_upload();
    assert!(!form.can_submit());
    form.upload_succeeded(ticket, "https://cdn.test/images/c1/1_hero.png".to_owned());

    assert!(form.value.contains("hero.png"));
    assert!(form.can_submit());
}

#[test]
fn failed_upload_leaves_value_untouched() {
    let mut form = filled("hero", InjectableKind::Image, "https://cdn.test/old.png");
    let ticket = form.begin_upload();
    form.upload_failed(ticket);
    assert_eq!(form.value, "https://cdn.test/old.png");
    assert!(!form.uploading);
}

#[test]
fn upload_result_dropped_after_switching_to_text() {
    let mut form = InjectableForm { key: "hero".to_owned(), kind: Some(InjectableKind::Image), ..Default::default() };
    let ticket = form.begin_upload();
    form.set_kind(Some(InjectableKind::Text));
    form.upload_succeeded(ticket, "https://cdn.test/x.png".to_owned());
    assert!(form.value.is_empty());
}

#[test]
fn to_fields_carries_form_values() {
    let fields = filled("cta_1", InjectableKind::Text, "Buy now").to_fields().unwrap();
    assert_eq!(fields.key, "cta_1");
    assert_eq!(fields.kind, InjectableKind::Text);
    assert_eq!(fields.value, "Buy now");
}

// =============================================================
// CampaignDetailsState
// =============================================================

#[test]
fn title_falls_back_until_campaign_loads() {
    let mut state = CampaignDetailsState::default();
    assert_eq!(state.title(), FALLBACK_TITLE);
    state.campaign = Some(Campaign {
        id: Uuid::from_u128(0xC1),
        name: "Spring Promo".to_owned(),
        created_at: String::new(),
    });
    assert_eq!(state.title(), "Spring Promo");
}

#[test]
fn add_success_resets_form_failure_keeps_it() {
    let mut state = CampaignDetailsState { add: filled("cta_1", InjectableKind::Text, "Buy now"), ..Default::default() };

    assert!(state.begin_add().is_some());
    assert!(!state.can_add());
    state.add_failed();
    assert_eq!(state.add.key, "cta_1");
    assert!(state.can_add());

    state.begin_add();
    state.add_succeeded();
    assert_eq!(state.add, InjectableForm { upload_ticket: state.add.upload_ticket, ..Default::default() });
}

#[test]
fn edit_prefills_and_cancel_discards() {
    let target = row(1, "cta_1", InjectableKind::Text, "Buy now");
    let mut state = CampaignDetailsState::default();

    state.begin_edit(&target);
    assert_eq!(state.editing, Some(target.id));
    assert_eq!(state.edit.value, "Buy now");

    state.edit.value = "Buy today".to_owned();
    state.cancel_edit();
    assert_eq!(state.editing, None);
    assert_eq!(state.edit, InjectableForm { upload_ticket: state.edit.upload_ticket, ..Default::default() });
}

#[test]
fn edit_enforces_key_validation() {
    let target = row(1, "cta_1", InjectableKind::Text, "Buy now");
    let mut state = CampaignDetailsState::default();
    state.begin_edit(&target);
    state.edit.key = "cta 1".to_owned();
    assert!(!state.can_save_edit());
    assert_eq!(state.begin_save_edit(), None);
}

#[test]
fn edit_save_targets_the_open_row() {
    let target = row(9, "cta_1", InjectableKind::Text, "Buy now");
    let mut state = CampaignDetailsState::default();
    state.begin_edit(&target);
    state.edit.value = "Buy today".to_owned();

    let (id, fields) = state.begin_save_edit().unwrap();
    assert_eq!(id, target.id);
    assert_eq!(fields.value, "Buy today");

    state.save_edit_failed();
    assert_eq!(state.editing, Some(target.id));
    state.begin_save_edit();
    state.save_edit_succeeded();
    assert_eq!(state.editing, None);
}

#[test]
fn add_and_edit_uploads_are_independent() {
    let mut state = CampaignDetailsState::default();
    state.begin_edit(&row(1, "hero", InjectableKind::Image, "https://cdn.test/a.png"));
    state.edit.begin_upload();
    state.add = filled("cta_1", InjectableKind::Text, "Buy now");
    assert!(state.can_add());
    assert!(!state.can_save_edit());
}

#[test]
fn form_slots_address_separate_drafts() {
    let mut state = CampaignDetailsState::default();
    state.form_mut(FormSlot::Edit).key = "edit_key".to_owned();
    state.form_mut(FormSlot::Add).key = "add_key".to_owned();
    assert_eq!(state.form(FormSlot::Add).key, "add_key");
    assert_eq!(state.edit.key, "edit_key");
}

#[test]
fn upload_finishing_after_edit_cancel_is_dropped() {
    let mut state = CampaignDetailsState::default();
    state.begin_edit(&row(1, "hero", InjectableKind::Image, "https://cdn.test/a.png"));
    let ticket = state.form_mut(FormSlot::Edit).begin_upload();
    state.cancel_edit();
    state.form_mut(FormSlot::Edit).upload_succeeded(ticket, "https://cdn.test/b.png".to_owned());
    assert!(state.edit.value.is_empty());
    assert!(!state.edit.uploading);
}

#[test]
fn upload_from_previous_edit_session_is_ignored() {
    let mut state = CampaignDetailsState::default();
    state.begin_edit(&row(1, "hero", InjectableKind::Image, "https://cdn.test/a.png"));
    let first = state.form_mut(FormSlot::Edit).begin_upload();
    state.cancel_edit();

    state.begin_edit(&row(2, "banner", InjectableKind::Image, "https://cdn.test/banner.png"));
    let second = state.form_mut(FormSlot::Edit).begin_upload();
    assert_ne!(first, second);

    state.form_mut(FormSlot::Edit).upload_succeeded(first, "https://cdn.test/stale_hero.png".to_owned());
    assert!(state.edit.uploading);
    assert_eq!(state.edit.value, "https://cdn.test/banner.png");

    state.form_mut(FormSlot::Edit).upload_failed(first);
    assert!(state.edit.uploading);

    state.form_mut(FormSlot::Edit).upload_succeeded(second, "https://cdn.test/new_banner.png".to_owned());
    assert!(!state.edit.uploading);
    assert_eq!(state.edit.value, "https://cdn.test/new_banner.png");
}

#[test]
fn upload_finishing_after_add_reset_is_dropped() {
    let mut state = CampaignDetailsState { add: filled("hero", InjectableKind::Image, ""), ..Default::default() };
    let ticket = state.add.begin_upload();
    state.add.reset();
    state.add.key = "banner".to_owned();
    state.add.set_kind(Some(InjectableKind::Image));

    state.add.upload_succeeded(ticket, "https://cdn.test/hero.png".to_owned());
    assert!(state.add.value.is_empty());
}

#[test]
fn switching_campaign_clears_loaded_rows_and_open_edit() {
    let target = row(1, "cta_1", InjectableKind::Text, "Buy now");
    let mut state = CampaignDetailsState {
        campaign: Some(Campaign { id: Uuid::from_u128(0xC1), name: "Spring Promo".to_owned(), created_at: String::new() }),
        injectables: vec![target.clone()],
        ..Default::default()
    };
    state.begin_edit(&target);
    state.begin_save_edit();

    state.switch_campaign();

    assert_eq!(state.campaign, None);
    assert!(state.injectables.is_empty());
    assert_eq!(state.editing, None);
    assert!(!state.saving_edit);
    assert_eq!(state.title(), FALLBACK_TITLE);
}

#[test]
fn kind_labels_are_localized() {
    assert_eq!(kind_label(InjectableKind::Text), "Текст");
    assert_eq!(kind_label(InjectableKind::Image), "Изображение");
}
