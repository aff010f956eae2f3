//! Shared types for the reservation service
//!
//! Domain models, request/response envelopes and the unified error type,
//! used by both `reservation-server` and `reservation-client`.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use request::DataRequest;
pub use response::DataResponse;
