//! Membership pricing, class schedule and attendance tracking for a fitness center

pub mod cli;
pub mod config;
pub mod services;
pub mod types;
