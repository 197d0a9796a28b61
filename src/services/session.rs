//! Per-session state: one attendance store plus notes keyed by day
//!
//! Each front-end session owns its own `Session`; nothing here is shared
//! between sessions.

use std::collections::BTreeMap;

use crate::services::schedule::normalized_day;
use crate::services::Aggregator;
use crate::types::{AttendanceStore, AttendanceSummary, Result};

#[derive(Debug, Default)]
pub struct Session {
    attendance: AttendanceStore,
    notes: BTreeMap<String, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attendance(&self) -> &AttendanceStore {
        &self.attendance
    }

    pub fn add_attendance(&mut self, activity: &str, count: i64) -> Result<()> {
        Aggregator::add_entry(&mut self.attendance, activity, count)?;
        Ok(())
    }

    pub fn summary(&self) -> AttendanceSummary {
        Aggregator::summarize(&self.attendance)
    }

    pub fn clear_attendance(&mut self) {
        self.attendance.clear();
    }

    /// Store a note for `day`; blank text removes it
    pub fn set_note(&mut self, day: &str, text: &str) {
        let day = normalized_day(day);
        let text = text.trim();
        if text.is_empty() {
            self.notes.remove(&day);
        } else {
            self.notes.insert(day, text.to_string());
        }
    }

    pub fn note(&self, day: &str) -> Option<&str> {
        self.notes.get(&normalized_day(day)).map(String::as_str)
    }
}
