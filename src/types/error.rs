use thiserror::Error;

/// fitdesk error types
#[derive(Error, Debug)]
pub enum FitdeskError {
    /// Plan name is not in the plan catalog
    #[error("invalid plan: {plan}. Available plans: {}", .available.join(", "))]
    InvalidPlan { plan: String, available: Vec<String> },

    /// Month count is zero or negative
    #[error("months must be greater than 0, got {0}")]
    InvalidDuration(i64),

    /// Attendance count is negative
    #[error("count must be non-negative, got {0}")]
    NegativeCount(i64),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Failed to parse user or file input
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for fitdesk
pub type Result<T> = std::result::Result<T, FitdeskError>;
