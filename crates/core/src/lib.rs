//! Shared domain types and helpers for the wayplan workspace.
//!
//! Keeps the pieces every other crate needs: id/timestamp aliases, the
//! domain error enum, coordinate types, and export naming helpers.

pub mod error;
pub mod geo;
pub mod naming;
pub mod types;
