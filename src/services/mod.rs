//! Services for pricing, attendance and schedule lookups

pub mod aggregator;
pub mod export;
pub mod messaging;
pub mod pricing;
pub mod schedule;
pub mod session;

pub use aggregator::Aggregator;
pub use export::{export_text, format_currency, parse_attendance_report, session_report};
pub use messaging::build_welcome;
pub use pricing::PricingEngine;
pub use schedule::{day_classes, normalized_day};
pub use session::Session;
