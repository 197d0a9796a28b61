//! Aggregator service for attendance counts

use crate::types::{AttendanceStore, AttendanceSummary, FitdeskError, Result};

/// Aggregator for accumulating and summarizing attendance
pub struct Aggregator;

impl Aggregator {
    /// Add `count` to the running total for `activity`.
    ///
    /// A negative count fails with `NegativeCount` and leaves the store alone.
    /// A blank activity name is skipped silently.
    pub fn add_entry<'s>(
        store: &'s mut AttendanceStore,
        activity: &str,
        count: i64,
    ) -> Result<&'s mut AttendanceStore> {
        let count = u64::try_from(count).map_err(|_| FitdeskError::NegativeCount(count))?;

        let activity = activity.trim();
        if activity.is_empty() {
            tracing::debug!("skipping attendance entry with blank activity");
            return Ok(store);
        }

        let total = store.counts.entry(activity.to_string()).or_insert(0);
        *total = total.saturating_add(count);
        tracing::debug!(activity, count, total = *total, "recorded attendance");

        Ok(store)
    }

    /// Compute totals over the store (empty store → zeros)
    pub fn summarize(store: &AttendanceStore) -> AttendanceSummary {
        if store.is_empty() {
            return AttendanceSummary::default();
        }

        let total = store
            .counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count));
        let avg_per_activity = total as f64 / store.len() as f64;

        AttendanceSummary {
            total,
            avg_per_activity,
            by_activity: store.counts.clone(),
        }
    }
}
