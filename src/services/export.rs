//! Plain-text session summary export
//!
//! The report is a fixed banner layout, one line per entry. The attendance
//! section can be read back with [`parse_attendance_report`]. Backslashes and
//! line-breaking characters in activity names are written as `\\`, `\n`,
//! `\r` and `\t` so each activity stays on its own line.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::services::messaging::display_name;
use crate::types::{AttendanceSummary, FitdeskError, PricingBreakdown, Result};

const BANNER_WIDTH: usize = 60;
const REPORT_TITLE: &str = "FITNESS CENTER SESSION SUMMARY";
const ATTENDANCE_HEADER: &str = "ATTENDANCE SUMMARY:";
const NO_ATTENDANCE: &str = "No attendance data recorded.";
const TOTAL_LABEL: &str = "Total Attendance:";
const AVERAGE_LABEL: &str = "Average per Activity:";
const ACTIVITY_BULLET: &str = "•";

/// Format a dollar amount with thousands separators: 1234.5 → "$1,234.50"
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Build the session summary report lines
pub fn session_report(
    name: &str,
    center: &str,
    pricing: Option<&PricingBreakdown>,
    attendance: &AttendanceSummary,
) -> Vec<String> {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![
        banner.clone(),
        REPORT_TITLE.to_string(),
        banner.clone(),
        format!("Name: {}", display_name(name)),
        format!("Center: {}", center),
        String::new(),
        "PRICING BREAKDOWN:".to_string(),
    ];

    match pricing {
        Some(b) => {
            lines.push(format!("  Plan: {}", b.plan));
            lines.push(format!("  Months: {}", b.months));
            lines.push(format!("  Final Cost: {}", format_currency(b.final_cost)));
        }
        None => {
            lines.push("  Plan: N/A".to_string());
            lines.push("  Months: N/A".to_string());
            lines.push(format!("  Final Cost: {}", format_currency(0.0)));
        }
    }

    lines.push(String::new());
    lines.push(ATTENDANCE_HEADER.to_string());
    if attendance.by_activity.is_empty() {
        lines.push(format!("  {}", NO_ATTENDANCE));
    } else {
        lines.push(format!("  {} {}", TOTAL_LABEL, attendance.total));
        lines.push(format!(
            "  {} {:.2}",
            AVERAGE_LABEL, attendance.avg_per_activity
        ));
        lines.push("  By Activity:".to_string());
        for (activity, count) in &attendance.by_activity {
            lines.push(format!(
                "    {} {}: {}",
                ACTIVITY_BULLET,
                escape_activity(activity),
                count
            ));
        }
    }

    lines.push(String::new());
    lines.push(banner);
    lines
}

/// Write `lines` to `path`, one per line, creating parent directories
pub fn export_text<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content)?;

    tracing::info!(path = %path.display(), lines = lines.len(), "exported session summary");
    Ok(())
}

/// Read the attendance section of an exported report back into a summary.
///
/// The average is taken as printed, so it carries two-decimal precision.
pub fn parse_attendance_report(text: &str) -> Result<AttendanceSummary> {
    let mut lines = text
        .lines()
        .skip_while(|line| line.trim() != ATTENDANCE_HEADER)
        .skip(1)
        .map(str::trim)
        .take_while(|line| !line.is_empty());

    let first = lines
        .next()
        .ok_or_else(|| FitdeskError::Parse("missing attendance section".into()))?;
    if first == NO_ATTENDANCE {
        return Ok(AttendanceSummary::default());
    }

    let total = labeled_value(first, TOTAL_LABEL)?
        .parse::<u64>()
        .map_err(|e| FitdeskError::Parse(format!("invalid total: {}", e)))?;

    let average_line = lines
        .next()
        .ok_or_else(|| FitdeskError::Parse("missing average line".into()))?;
    let avg_per_activity = labeled_value(average_line, AVERAGE_LABEL)?
        .parse::<f64>()
        .map_err(|e| FitdeskError::Parse(format!("invalid average: {}", e)))?;

    let mut by_activity = BTreeMap::new();
    for line in lines {
        let Some(entry) = line.strip_prefix(ACTIVITY_BULLET) else {
            continue;
        };
        let (activity, count) = entry
            .trim()
            .rsplit_once(": ")
            .ok_or_else(|| FitdeskError::Parse(format!("invalid activity line: {}", line)))?;
        let count = count
            .parse::<u64>()
            .map_err(|e| FitdeskError::Parse(format!("invalid count for {}: {}", activity, e)))?;
        by_activity.insert(unescape_activity(activity), count);
    }

    Ok(AttendanceSummary {
        total,
        avg_per_activity,
        by_activity,
    })
}

fn escape_activity(activity: &str) -> String {
    let mut escaped = String::with_capacity(activity.len());
    for ch in activity.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn unescape_activity(escaped: &str) -> String {
    let mut activity = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            activity.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => activity.push('\n'),
            Some('r') => activity.push('\r'),
            Some('t') => activity.push('\t'),
            Some('\\') => activity.push('\\'),
            // Unknown escapes are kept verbatim
            Some(other) => {
                activity.push('\\');
                activity.push(other);
            }
            None => activity.push('\\'),
        }
    }
    activity
}

fn labeled_value<'a>(line: &'a str, label: &str) -> Result<&'a str> {
    line.strip_prefix(label)
        .map(str::trim)
        .ok_or_else(|| FitdeskError::Parse(format!("expected '{}', got '{}'", label, line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Aggregator;
    use crate::types::AttendanceStore;
    use tempfile::TempDir;

    fn sample_summary() -> AttendanceSummary {
        let mut store = AttendanceStore::new();
        for (activity, count) in [("Yoga", 10), ("Spin", 20), ("Pilates", 15)] {
            Aggregator::add_entry(&mut store, activity, count).unwrap();
        }
        Aggregator::summarize(&store)
    }

    fn sample_breakdown() -> PricingBreakdown {
        PricingBreakdown {
            plan: "Basic".into(),
            months: 1,
            monthly_price: 25.0,
            base_cost: 25.0,
            student_staff_discount: 3.75,
            promo_applied: Some("WELCOME10".into()),
            promo_rate: 0.1,
            promo_discount: 2.125,
            promo_attempted: false,
            final_cost: 19.125,
        }
    }

    // ========== format_currency ==========

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(25.0), "$25.00");
        assert_eq!(format_currency(19.125), "$19.13");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    // ========== session_report ==========

    #[test]
    fn test_report_layout() {
        let breakdown = sample_breakdown();
        let lines = session_report("Ana", "Baun Fitness Center", Some(&breakdown), &sample_summary());

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "FITNESS CENTER SESSION SUMMARY");
        assert_eq!(lines[3], "Name: Ana");
        assert_eq!(lines[4], "Center: Baun Fitness Center");
        assert!(lines.contains(&"  Plan: Basic".to_string()));
        assert!(lines.contains(&"  Final Cost: $19.13".to_string()));
        assert!(lines.contains(&"  Total Attendance: 45".to_string()));
        assert!(lines.contains(&"  Average per Activity: 15.00".to_string()));
        assert!(lines.contains(&"    • Spin: 20".to_string()));
        assert_eq!(lines.last().unwrap(), &"=".repeat(60));
    }

    #[test]
    fn test_report_without_data() {
        let lines = session_report("", "Gym", None, &AttendanceSummary::default());
        assert_eq!(lines[3], "Name: Guest");
        assert!(lines.contains(&"  Plan: N/A".to_string()));
        assert!(lines.contains(&"  Final Cost: $0.00".to_string()));
        assert!(lines.contains(&"  No attendance data recorded.".to_string()));
    }

    // ========== export_text ==========

    #[test]
    fn test_export_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("summary.txt");
        let lines = vec!["first".to_string(), "second".to_string()];

        export_text(&path, &lines).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_export_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("summary.txt");
        export_text(&path, &["old".to_string(), "data".to_string()]).unwrap();
        export_text(&path, &["new".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_export_unwritable_path_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = export_text(blocker.join("summary.txt"), &["x".to_string()]).unwrap_err();
        assert!(matches!(err, FitdeskError::Io(_)));
    }

    // ========== parse_attendance_report ==========

    #[test]
    fn test_export_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("summary.txt");
        let summary = sample_summary();

        export_text(&path, &session_report("Ana", "Gym", None, &summary)).unwrap();
        let parsed = parse_attendance_report(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(parsed.total, summary.total);
        assert_eq!(parsed.by_activity, summary.by_activity);
        assert_eq!(
            format!("{:.2}", parsed.avg_per_activity),
            format!("{:.2}", summary.avg_per_activity)
        );
    }

    #[test]
    fn test_round_trip_activity_with_colon() {
        let mut store = AttendanceStore::new();
        Aggregator::add_entry(&mut store, "Spin: Advanced", 7).unwrap();
        let summary = Aggregator::summarize(&store);

        let text = session_report("Ana", "Gym", None, &summary).join("\n");
        let parsed = parse_attendance_report(&text).unwrap();
        assert_eq!(parsed.by_activity["Spin: Advanced"], 7);
    }

    #[test]
    fn test_round_trip_activity_with_line_breaks() {
        let mut store = AttendanceStore::new();
        Aggregator::add_entry(&mut store, "Yoga\nSpin", 3).unwrap();
        Aggregator::add_entry(&mut store, "Pilates", 4).unwrap();
        Aggregator::add_entry(&mut store, "Row\r\tErg", 2).unwrap();
        let summary = Aggregator::summarize(&store);

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("summary.txt");
        export_text(&path, &session_report("Ana", "Gym", None, &summary)).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.contains("    • Yoga\\nSpin: 3\n"));
        let parsed = parse_attendance_report(&text).unwrap();
        assert_eq!(parsed.by_activity, summary.by_activity);
        assert_eq!(parsed.total, 9);
    }

    #[test]
    fn test_round_trip_activity_with_backslash() {
        let mut store = AttendanceStore::new();
        Aggregator::add_entry(&mut store, "Spin\\nope", 5).unwrap();
        Aggregator::add_entry(&mut store, "Trailing\\", 1).unwrap();
        let summary = Aggregator::summarize(&store);

        let text = session_report("Ana", "Gym", None, &summary).join("\n");
        let parsed = parse_attendance_report(&text).unwrap();
        assert_eq!(parsed.by_activity, summary.by_activity);
    }

    #[test]
    fn test_unescape_keeps_unknown_escapes() {
        assert_eq!(unescape_activity("a\\qb"), "a\\qb");
        assert_eq!(unescape_activity("end\\"), "end\\");
    }

    #[test]
    fn test_parse_empty_attendance() {
        let text = session_report("Ana", "Gym", None, &AttendanceSummary::default()).join("\n");
        assert_eq!(parse_attendance_report(&text).unwrap(), AttendanceSummary::default());
    }

    #[test]
    fn test_parse_missing_section() {
        assert!(matches!(
            parse_attendance_report("nothing here"),
            Err(FitdeskError::Parse(_))
        ));
    }
}
