//! Unified error codes for the reservation service
//!
//! This module defines all error codes used by the server, the client and the
//! frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Reservation is not in the booked state
    ReservationNotBooked = 4002,
    /// Reservation has already finished
    ReservationFinished = 4003,
    /// Reservation date/time is in the past
    ReservationInPast = 4004,
    /// Restaurant is closed on the requested day
    RestaurantClosed = 4005,
    /// Requested time is outside business hours
    OutsideBusinessHours = 4006,
    /// Unknown reservation status
    InvalidStatus = 4007,
    /// Status is only changed by seating or clearing a table
    StatusChangeNotAllowed = 4008,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is occupied
    TableOccupied = 7002,
    /// Table is not occupied
    TableNotOccupied = 7003,
    /// Table capacity is smaller than the party
    TableCapacityExceeded = 7004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationNotBooked => "Reservation is not booked",
            ErrorCode::ReservationFinished => "A finished reservation cannot be updated",
            ErrorCode::ReservationInPast => "Reservation must be in the future",
            ErrorCode::RestaurantClosed => "The restaurant is closed on that day",
            ErrorCode::OutsideBusinessHours => "Reservation time is outside business hours",
            ErrorCode::InvalidStatus => "Unknown reservation status",
            ErrorCode::StatusChangeNotAllowed => "This status change is not allowed",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableNotOccupied => "Table is not occupied",
            ErrorCode::TableCapacityExceeded => "Table capacity is not enough",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::ReservationNotBooked),
            4003 => Ok(ErrorCode::ReservationFinished),
            4004 => Ok(ErrorCode::ReservationInPast),
            4005 => Ok(ErrorCode::RestaurantClosed),
            4006 => Ok(ErrorCode::OutsideBusinessHours),
            4007 => Ok(ErrorCode::InvalidStatus),
            4008 => Ok(ErrorCode::StatusChangeNotAllowed),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableOccupied),
            7003 => Ok(ErrorCode::TableNotOccupied),
            7004 => Ok(ErrorCode::TableCapacityExceeded),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
