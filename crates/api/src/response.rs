//! Shared response envelope types for API handlers.
//!
//! Paginated listings use a `{ "total": N, "data": [...] }` envelope so
//! clients can render page controls without a second count request. Use
//! [`PagedResponse`] instead of ad-hoc `serde_json::json!` maps to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "total": N, "data": [...] }` envelope for paginated listings.
///
/// `total` counts every row matching the filter, not just the returned page.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub total: i64,
    pub data: Vec<T>,
}
