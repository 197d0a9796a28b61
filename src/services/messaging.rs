//! Greeting messages

/// Name used when the member leaves theirs blank
pub const GUEST_NAME: &str = "Guest";

/// Build a personalized welcome line
pub fn build_welcome(name: &str, center: &str) -> String {
    format!(
        "Welcome to {}, {}! We're excited to help you achieve your fitness goals.",
        center,
        display_name(name)
    )
}

/// Trimmed member name, or [`GUEST_NAME`] when blank
pub fn display_name(name: &str) -> &str {
    match name.trim() {
        "" => GUEST_NAME,
        trimmed => trimmed,
    }
}
