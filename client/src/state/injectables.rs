//! Campaign-detail state: the injectables table plus its add and edit forms.
//!
//! DESIGN
//! ======
//! The add form and the edit form are two instances of `InjectableForm`, each
//! with its own upload flag, so an upload in one never blocks the other. Both
//! forms gate submission on the same key predicate from `records`.

#[cfg(test)]
#[path = "injectables_test.rs"]
mod injectables_test;

use records::{Campaign, Injectable, InjectableFields, InjectableKind, Uuid, is_valid_key};

/// Inline hint shown under a key that fails validation.
pub const KEY_ERROR_MESSAGE: &str = "Только латинские буквы, цифры, - и _";

/// Heading used until the campaign record has loaded.
pub const FALLBACK_TITLE: &str = "Кампания";

/// Display label for a type option.
#[must_use]
pub fn kind_label(kind: InjectableKind) -> &'static str {
    match kind {
        InjectableKind::Text => "Текст",
        InjectableKind::Image => "Изображение",
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Draft key/type/value for the add or edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectableForm {
    pub key: String,
    pub kind: Option<InjectableKind>,
    pub value: String,
    pub uploading: bool,
    /// Identifies the current upload; results carrying an older ticket are
    /// dropped.
    pub upload_ticket: u64,
}

impl InjectableForm {
    /// Draft pre-filled from an existing row.
    #[must_use]
    pub fn from_injectable(row: &Injectable) -> Self {
        Self {
            key: row.key.clone(),
            kind: Some(row.kind),
            value: row.value.clone(),
            uploading: false,
            upload_ticket: 0,
        }
    }

    /// Inline error for a non-empty key that fails validation.
    #[must_use]
    pub fn key_error(&self) -> Option<&'static str> {
        (!self.key.is_empty() && !is_valid_key(&self.key)).then_some(KEY_ERROR_MESSAGE)
    }

    /// Change the type; a different type clears the value.
    pub fn set_kind(&mut self, kind: Option<InjectableKind>) {
        if kind != self.kind {
            self.kind = kind;
            self.value.clear();
        }
    }

    /// All fields present, key valid, no upload in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.uploading && self.kind.is_some() && !self.value.is_empty() && is_valid_key(&self.key)
    }

    /// Payload for create/update, or `None` while the form is incomplete.
    #[must_use]
    pub fn to_fields(&self) -> Option<InjectableFields> {
        if !self.can_submit() {
            return None;
        }
        Some(InjectableFields {
            key: self.key.clone(),
            kind: self.kind?,
            value: self.value.clone(),
        })
    }

    /// Mark an upload as started and return its ticket.
    pub fn begin_upload(&mut self) -> u64 {
        self.upload_ticket += 1;
        self.uploading = true;
        self.upload_ticket
    }

    /// Store an uploaded image URL as the pending value. Ignored if a newer
    /// upload or draft replaced the one `ticket` belongs to, or if the type
    /// was switched away from image while the upload ran.
    pub fn upload_succeeded(&mut self, ticket: u64, url: String) {
        if ticket != self.upload_ticket {
            return;
        }
        self.uploading = false;
        if self.kind == Some(InjectableKind::Image) {
            self.value = url;
        }
    }

    pub fn upload_failed(&mut self, ticket: u64) {
        if ticket == self.upload_ticket {
            self.uploading = false;
        }
    }

    /// Replace the draft, invalidating any upload still running for it.
    pub fn replace(&mut self, next: Self) {
        *self = Self { upload_ticket: self.upload_ticket + 1, ..next };
    }

    /// Clear the draft, invalidating any upload still running for it.
    pub fn reset(&mut self) {
        self.replace(Self::default());
    }
}

// =============================================================================
// PAGE STATE
// =============================================================================

/// Which of the page's two forms an action applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSlot {
    Add,
    Edit,
}

#[derive(Clone, Debug, Default)]
pub struct CampaignDetailsState {
    pub campaign: Option<Campaign>,
    pub injectables: Vec<Injectable>,
    pub add: InjectableForm,
    pub adding: bool,
    /// Row currently open in the edit dialog.
    pub editing: Option<Uuid>,
    pub edit: InjectableForm,
    pub saving_edit: bool,
}

impl CampaignDetailsState {
    #[must_use]
    pub fn title(&self) -> String {
        self.campaign
            .as_ref()
            .map(|c| c.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_owned())
    }

    /// Drop everything loaded or drafted for the previous route id.
    pub fn switch_campaign(&mut self) {
        self.campaign = None;
        self.injectables.clear();
        self.adding = false;
        self.add.reset();
        self.saving_edit = false;
        self.cancel_edit();
    }

    #[must_use]
    pub fn form(&self, slot: FormSlot) -> &InjectableForm {
        match slot {
            FormSlot::Add => &self.add,
            FormSlot::Edit => &self.edit,
        }
    }

    pub fn form_mut(&mut self, slot: FormSlot) -> &mut InjectableForm {
        match slot {
            FormSlot::Add => &mut self.add,
            FormSlot::Edit => &mut self.edit,
        }
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        !self.adding && self.add.can_submit()
    }

    /// Mark an add as started and return its payload.
    pub fn begin_add(&mut self) -> Option<InjectableFields> {
        if self.adding {
            return None;
        }
        let fields = self.add.to_fields()?;
        self.adding = true;
        Some(fields)
    }

    pub fn add_succeeded(&mut self) {
        self.adding = false;
        self.add.reset();
    }

    pub fn add_failed(&mut self) {
        self.adding = false;
    }

    /// Open the edit dialog for `row`.
    pub fn begin_edit(&mut self, row: &Injectable) {
        self.editing = Some(row.id);
        self.edit.replace(InjectableForm::from_injectable(row));
    }

    /// Close the edit dialog and discard the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit.reset();
    }

    #[must_use]
    pub fn can_save_edit(&self) -> bool {
        self.editing.is_some() && !self.saving_edit && self.edit.can_submit()
    }

    /// Mark a save as started and return the target id with its payload.
    pub fn begin_save_edit(&mut self) -> Option<(Uuid, InjectableFields)> {
        if !self.can_save_edit() {
            return None;
        }
        let id = self.editing?;
        let fields = self.edit.to_fields()?;
        self.saving_edit = true;
        Some((id, fields))
    }

    pub fn save_edit_succeeded(&mut self) {
        self.saving_edit = false;
        self.cancel_edit();
    }

    pub fn save_edit_failed(&mut self) {
        self.saving_edit = false;
    }
}
