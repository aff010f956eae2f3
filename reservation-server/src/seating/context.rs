//! Guard contexts
//!
//! Everything a guard chain needs is loaded into one of these before the
//! chain runs. Accessors return the not-found error when a row is absent.

use shared::models::{Reservation, SeatRequest, Table};
use shared::{AppError, AppResult, ErrorCode};

use super::guards::table_not_occupied;

/// `PUT /tables/{table_id}/seat`
#[derive(Debug, Clone)]
pub struct SeatContext {
    pub table_id: i64,
    pub request: SeatRequest,
    pub reservation: Option<Reservation>,
    pub table: Option<Table>,
}

impl SeatContext {
    pub fn reservation(&self) -> AppResult<&Reservation> {
        self.reservation.as_ref().ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ReservationNotFound,
                format!(
                    "this reservation_id ({}) does not exist",
                    self.request.reservation_id
                ),
            )
        })
    }

    pub fn table(&self) -> AppResult<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| table_not_found(self.table_id))
    }
}

/// `DELETE /tables/{table_id}/seat`
#[derive(Debug, Clone)]
pub struct FinishContext {
    pub table_id: i64,
    pub table: Option<Table>,
}

impl FinishContext {
    pub fn table(&self) -> AppResult<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| table_not_found(self.table_id))
    }

    /// Reservation seated at the table
    pub fn occupant(&self) -> AppResult<i64> {
        self.table()?.reservation_id.ok_or_else(table_not_occupied)
    }
}

pub(crate) fn table_not_found(table_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::TableNotFound,
        format!("this table ({table_id}) does not exist"),
    )
}
