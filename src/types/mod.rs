//! Type definitions for fitdesk

mod catalog;
mod error;
mod keys;
mod membership;

pub use catalog::*;
pub use error::*;
pub use keys::{normalize_promo, normalized_day};
pub use membership::*;
