//! Whitelist panel state.

#[cfg(test)]
#[path = "whitelist_test.rs"]
mod whitelist_test;

use records::WhitelistDomain;

#[derive(Clone, Debug, Default)]
pub struct WhitelistState {
    pub domains: Vec<WhitelistDomain>,
    pub new_domain: String,
    pub adding: bool,
}

impl WhitelistState {
    #[must_use]
    pub fn can_add(&self) -> bool {
        !self.adding && !self.new_domain.trim().is_empty()
    }

    /// Mark an insert as started and return the trimmed domain.
    pub fn begin_add(&mut self) -> Option<String> {
        if !self.can_add() {
            return None;
        }
        self.adding = true;
        Some(self.new_domain.trim().to_owned())
    }

    pub fn add_succeeded(&mut self) {
        self.adding = false;
        self.new_domain.clear();
    }

    pub fn add_failed(&mut self) {
        self.adding = false;
    }
}
