//! Lookup-key normalization shared by the catalog loader and the services

/// Recognized day spellings → canonical lowercase name
pub(crate) const DAY_ALIASES: [(&str, &str); 14] = [
    ("monday", "monday"),
    ("tuesday", "tuesday"),
    ("wednesday", "wednesday"),
    ("thursday", "thursday"),
    ("friday", "friday"),
    ("saturday", "saturday"),
    ("sunday", "sunday"),
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
];

/// Normalize a day name to its canonical lowercase full name.
///
/// Unrecognized input comes back trimmed and lowercased.
///
/// # Examples
/// ```
/// use fitdesk::types::normalized_day;
///
/// assert_eq!(normalized_day(" MON "), "monday");
/// assert_eq!(normalized_day("Funday"), "funday");
/// ```
pub fn normalized_day(day: &str) -> String {
    let day = day.trim().to_lowercase();
    DAY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == day)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(day)
}

/// Trim and upper-case a promo code for catalog lookup
pub fn normalize_promo(code: &str) -> String {
    code.trim().to_uppercase()
}
