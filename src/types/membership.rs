//! Membership pricing and attendance types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Itemized result of a single pricing computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    pub plan: String,
    pub months: u64,
    pub monthly_price: f64,
    pub base_cost: f64,
    pub student_staff_discount: f64,
    /// Normalized promo code, present only when it matched the promo catalog
    pub promo_applied: Option<String>,
    pub promo_rate: f64,
    /// Amount deducted by the promo, computed on the post-student-discount cost
    pub promo_discount: f64,
    /// A non-blank code was supplied but not recognized
    #[serde(default)]
    pub promo_attempted: bool,
    pub final_cost: f64,
}

impl PricingBreakdown {
    /// Cost after the student/staff discount and before any promo
    pub fn cost_after_student_discount(&self) -> f64 {
        self.base_cost - self.student_staff_discount
    }
}

/// Per-session cumulative attendance counts by activity name.
///
/// Keys are trimmed, non-empty and case-sensitive. Entries only come into
/// existence through [`crate::services::Aggregator::add_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttendanceStore {
    pub(crate) counts: BTreeMap<String, u64>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, activity: &str) -> Option<u64> {
        self.counts.get(activity).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Read-only snapshot of an [`AttendanceStore`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSummary {
    pub total: u64,
    pub avg_per_activity: f64,
    pub by_activity: BTreeMap<String, u64>,
}
