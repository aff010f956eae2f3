//! Reservation Client - HTTP client for the reservation server
//!
//! Provides typed calls to the reservation API and the form models used by
//! the front of house screens.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod http;

pub use api::ReservationApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use forms::{ReservationForm, SeatForm, Submission, TableForm};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Reservation, ReservationStatus, Table};
pub use tokio_util::sync::CancellationToken;
