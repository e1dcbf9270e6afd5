//! Shared serde default helpers.

pub const fn default_true() -> bool { true }
