//! Data models
//!
//! Shared between reservation-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//!
//! Request payloads come in pairs: a `*Draft` type that accepts whatever the
//! wire carries, and the typed value its `validate()` produces.

pub mod reservation;
pub mod table;

// Re-exports
pub use reservation::*;
pub use table::*;
