//! Day name normalization and class lookup

pub use crate::types::normalized_day;
use crate::types::WeeklySchedule;

/// Classes scheduled on `day`, in schedule order. Unknown days yield nothing.
pub fn day_classes<'a>(day: &str, schedule: &'a WeeklySchedule) -> &'a [String] {
    schedule
        .get(&normalized_day(day))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Title-case a day for display ("monday" → "Monday")
pub fn display_day(day: &str) -> String {
    let mut chars = day.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Catalog;

    // ========== day_classes ==========

    #[test]
    fn test_day_classes_preserves_order() {
        let catalog = Catalog::default();
        assert_eq!(
            day_classes("Tue", &catalog.schedule),
            ["Spin Class - 6:30 AM", "Strength Training - 6:00 PM"]
        );
    }

    #[test]
    fn test_day_classes_unknown_day_is_empty() {
        let catalog = Catalog::default();
        assert!(day_classes("Caturday", &catalog.schedule).is_empty());
    }

    #[test]
    fn test_day_classes_day_without_entry() {
        let mut schedule = WeeklySchedule::new();
        schedule.insert("monday".into(), vec!["Boxing".into()]);
        assert!(day_classes("friday", &schedule).is_empty());
    }

    #[test]
    fn test_display_day() {
        assert_eq!(display_day("monday"), "Monday");
        assert_eq!(display_day(" fRI "), "Fri");
        assert_eq!(display_day(""), "");
    }
}
