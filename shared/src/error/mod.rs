//! Unified error system for the reservation service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: Error response format (`{ status, code, message }`)
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::TableNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::TableOccupied, "this table is occupied");
//!
//! // Convert to the response body
//! let body = ErrorBody::from_error(&err);
//! assert_eq!(body.status, 400);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
