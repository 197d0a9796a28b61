//! Text rendering of pricing, schedule and attendance results

use crate::services::format_currency;
use crate::services::pricing::STUDENT_STAFF_DISCOUNT_RATE;
use crate::services::schedule::display_day;
use crate::types::{AttendanceSummary, Catalog, PricingBreakdown};

const RULE_WIDTH: usize = 50;

pub fn pricing_lines(breakdown: &PricingBreakdown) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "MEMBERSHIP PRICING BREAKDOWN".to_string(),
        rule.clone(),
        format!("Plan: {}", breakdown.plan),
        format!("Duration: {} month(s)", breakdown.months),
        format!("Monthly Price: {}", format_currency(breakdown.monthly_price)),
        format!("Base Cost: {}", format_currency(breakdown.base_cost)),
    ];

    if breakdown.student_staff_discount > 0.0 {
        lines.push(format!(
            "Student/Staff Discount ({:.0}%): -{}",
            STUDENT_STAFF_DISCOUNT_RATE * 100.0,
            format_currency(breakdown.student_staff_discount)
        ));
    }

    if let Some(code) = &breakdown.promo_applied {
        lines.push(format!(
            "Promo Code ({}): -{}",
            code,
            format_currency(breakdown.promo_discount)
        ));
    } else if breakdown.promo_attempted {
        lines.push("Invalid promo code - not applied".to_string());
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!("FINAL COST: {}", format_currency(breakdown.final_cost)));
    lines.push(rule);
    lines
}

pub fn attendance_lines(summary: &AttendanceSummary) -> Vec<String> {
    if summary.by_activity.is_empty() {
        return vec!["No attendance data recorded.".to_string()];
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "ATTENDANCE SUMMARY".to_string(),
        rule.clone(),
        format!("Total Attendance: {}", summary.total),
        format!("Average per Activity: {:.2}", summary.avg_per_activity),
        String::new(),
        "By Activity:".to_string(),
    ];
    for (activity, count) in &summary.by_activity {
        lines.push(format!("  • {}: {}", activity, count));
    }
    lines.push(rule);
    lines
}

pub fn schedule_lines(day: &str, classes: &[String]) -> Vec<String> {
    if classes.is_empty() {
        return vec![format!("No classes scheduled for {}", display_day(day))];
    }
    let mut lines = vec![format!("Classes on {}:", display_day(day))];
    lines.extend(classes.iter().map(|c| format!("  • {}", c)));
    lines
}

pub fn catalog_lines(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Available plans:".to_string()];
    lines.extend(
        catalog
            .plans
            .iter()
            .map(|(name, price)| format!("  • {}: {}/month", name, format_currency(*price))),
    );
    lines.push("Promo codes:".to_string());
    lines.extend(
        catalog
            .promo_codes
            .iter()
            .map(|(code, rate)| format!("  • {}: {:.0}% off", code, rate * 100.0)),
    );
    lines
}
