//! Blocking alerts and history navigation.
//!
//! Write failures are reported through `window.alert`, which blocks until the
//! user dismisses it. SSR paths no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

pub const CREATE_CAMPAIGN_FAILED: &str = "Ошибка создания кампании!";
pub const ADD_FAILED: &str = "Ошибка добавления!";
pub const UPDATE_FAILED: &str = "Ошибка обновления!";
pub const DELETE_FAILED: &str = "Ошибка удаления!";

/// Alert text for a failed image upload, carrying the backend's reason.
#[must_use]
pub fn upload_failed_message(reason: &str) -> String {
    format!("Ошибка загрузки файла: {reason}")
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Return to the previous history entry.
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
