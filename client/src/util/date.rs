//! Creation-date formatting for campaign cards.
//!
//! In the browser the timestamp is rendered with the user's locale via
//! `Date.toLocaleDateString`. Anywhere else, or when the browser cannot parse
//! the value, the calendar date is rendered as `DD.MM.YYYY`.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Localized date for an ISO-8601 timestamp.
#[must_use]
pub fn format_created_at(created_at: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(created_at));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    fallback_date(created_at)
}

/// `YYYY-MM-DD...` → `DD.MM.YYYY`; anything else is returned unchanged.
#[must_use]
pub fn fallback_date(created_at: &str) -> String {
    let Some(day) = created_at.get(..10) else {
        return created_at.to_owned();
    };
    let mut parts = day.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4 && m.len() == 2 && d.len() == 2 && day.bytes().filter(u8::is_ascii_digit).count() == 8 =>
        {
            format!("{d}.{m}.{y}")
        }
        _ => created_at.to_owned(),
    }
}
