//! Skip/take clamping for paginated listings.
//!
//! Handlers pass raw `Option` query values down; the repository layer
//! clamps them here so out-of-range input can never turn into an
//! unbounded query.

/// Page size when the caller does not ask for one.
pub const DEFAULT_TAKE: i64 = 10;

/// Hard ceiling on page size.
pub const MAX_TAKE: i64 = 100;

/// Clamp a requested page size into `1..=MAX_TAKE`.
pub fn clamp_take(take: Option<i64>) -> i64 {
    take.unwrap_or(DEFAULT_TAKE).clamp(1, MAX_TAKE)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}
