//! Campaign-list state for the `/campaigns` page.
//!
//! DESIGN
//! ======
//! The create dialog and the delete confirmation are flat fields on one
//! struct. A failed create leaves the dialog open with its text intact; only
//! a confirmed insert closes and clears it.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use records::{Campaign, Uuid};

#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    pub show_create: bool,
    pub new_name: String,
    pub saving: bool,
    pub pending_delete: Option<Uuid>,
}

impl CampaignsState {
    /// Spinner only while the first load has nothing to show yet.
    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// Create is allowed for a non-blank name with no save in flight.
    #[must_use]
    pub fn can_create(&self) -> bool {
        !self.saving && !self.new_name.trim().is_empty()
    }

    pub fn open_create(&mut self) {
        self.show_create = true;
    }

    pub fn close_create(&mut self) {
        self.show_create = false;
    }

    /// Mark a create as started and return the name to submit, or `None`
    /// when the dialog is not in a submittable state.
    pub fn begin_create(&mut self) -> Option<String> {
        if !self.can_create() {
            return None;
        }
        self.saving = true;
        Some(self.new_name.trim().to_owned())
    }

    pub fn create_succeeded(&mut self) {
        self.saving = false;
        self.show_create = false;
        self.new_name.clear();
    }

    pub fn create_failed(&mut self) {
        self.saving = false;
    }

    pub fn request_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    /// Drop the pending delete target, returning it.
    pub fn take_pending_delete(&mut self) -> Option<Uuid> {
        self.pending_delete.take()
    }

    pub fn set_items(&mut self, items: Vec<Campaign>) {
        self.items = items;
        self.loading = false;
    }
}
