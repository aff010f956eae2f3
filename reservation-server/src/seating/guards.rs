//! Ordered guard chains
//!
//! A guard is a named check over a context. Guards run in order and the
//! first failure is returned without running the rest.

use shared::{AppError, AppResult, ErrorCode};

use super::context::{FinishContext, SeatContext};

pub struct Guard<C> {
    pub name: &'static str,
    pub check: fn(&C) -> AppResult<()>,
}

/// Run `guards` against `ctx`, stopping at the first failure
pub fn run_guards<C>(guards: &[Guard<C>], ctx: &C) -> AppResult<()> {
    for guard in guards {
        if let Err(err) = (guard.check)(ctx) {
            tracing::debug!(
                guard = guard.name,
                code = %err.code,
                message = %err.message,
                "Guard rejected request"
            );
            return Err(err);
        }
    }
    Ok(())
}

/// Seat a reservation at a table
pub const SEAT_GUARDS: &[Guard<SeatContext>] = &[
    Guard {
        name: "reservation_exists",
        check: reservation_exists,
    },
    Guard {
        name: "reservation_is_booked",
        check: reservation_is_booked,
    },
    Guard {
        name: "table_exists",
        check: seat_table_exists,
    },
    Guard {
        name: "table_has_capacity",
        check: table_has_capacity,
    },
    Guard {
        name: "table_is_free",
        check: table_is_free,
    },
];

/// Finish (clear) a table
pub const FINISH_GUARDS: &[Guard<FinishContext>] = &[
    Guard {
        name: "table_exists",
        check: finish_table_exists,
    },
    Guard {
        name: "table_is_occupied",
        check: table_is_occupied,
    },
];

fn reservation_exists(ctx: &SeatContext) -> AppResult<()> {
    ctx.reservation().map(|_| ())
}

fn reservation_is_booked(ctx: &SeatContext) -> AppResult<()> {
    if ctx.reservation()?.status.is_booked() {
        return Ok(());
    }
    Err(AppError::with_message(
        ErrorCode::ReservationNotBooked,
        "status need to be booked, cannot be seated or finished",
    ))
}

fn seat_table_exists(ctx: &SeatContext) -> AppResult<()> {
    ctx.table().map(|_| ())
}

fn table_has_capacity(ctx: &SeatContext) -> AppResult<()> {
    if ctx.table()?.capacity >= ctx.reservation()?.people {
        return Ok(());
    }
    Err(AppError::with_message(
        ErrorCode::TableCapacityExceeded,
        "table capacity is not enough",
    ))
}

fn table_is_free(ctx: &SeatContext) -> AppResult<()> {
    if ctx.table()?.is_free() {
        return Ok(());
    }
    Err(table_occupied())
}

fn finish_table_exists(ctx: &FinishContext) -> AppResult<()> {
    ctx.table().map(|_| ())
}

fn table_is_occupied(ctx: &FinishContext) -> AppResult<()> {
    ctx.occupant().map(|_| ())
}

pub(super) fn table_occupied() -> AppError {
    AppError::with_message(ErrorCode::TableOccupied, "this table is occupied")
}

pub(super) fn table_not_occupied() -> AppError {
    AppError::with_message(ErrorCode::TableNotOccupied, "this table is not occupied")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use http::StatusCode;
    use shared::models::{Reservation, ReservationStatus, SeatRequest, Table};

    fn reservation(people: i64, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: 1,
            first_name: "Rick".into(),
            last_name: "Sanchez".into(),
            mobile_number: "202-555-0164".into(),
            reservation_date: NaiveDate::from_ymd_opt(2035, 1, 2).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
            people,
            status,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn table(capacity: i64, reservation_id: Option<i64>) -> Table {
        Table {
            table_id: 5,
            table_name: "A1".into(),
            capacity,
            reservation_id,
        }
    }

    fn seat_ctx(reservation: Option<Reservation>, table: Option<Table>) -> SeatContext {
        SeatContext {
            table_id: 5,
            request: SeatRequest { reservation_id: 1 },
            reservation,
            table,
        }
    }

    #[test]
    fn test_all_seat_guards_pass() {
        let ctx = seat_ctx(
            Some(reservation(2, ReservationStatus::Booked)),
            Some(table(4, None)),
        );
        assert!(run_guards(SEAT_GUARDS, &ctx).is_ok());
    }

    #[test]
    fn test_missing_reservation_reported_first() {
        // 桌子也不存在，但预订检查在前
        let err = run_guards(SEAT_GUARDS, &seat_ctx(None, None)).unwrap_err();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "this reservation_id (1) does not exist");
    }

    #[test]
    fn test_not_booked_before_missing_table() {
        let ctx = seat_ctx(Some(reservation(2, ReservationStatus::Seated)), None);
        let err = run_guards(SEAT_GUARDS, &ctx).unwrap_err();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "status need to be booked, cannot be seated or finished"
        );
    }

    #[test]
    fn test_missing_table() {
        let ctx = seat_ctx(Some(reservation(2, ReservationStatus::Booked)), None);
        let err = run_guards(SEAT_GUARDS, &ctx).unwrap_err();
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "this table (5) does not exist");
    }

    #[test]
    fn test_capacity_checked_before_occupancy() {
        let ctx = seat_ctx(
            Some(reservation(6, ReservationStatus::Booked)),
            Some(table(4, Some(9))),
        );
        let err = run_guards(SEAT_GUARDS, &ctx).unwrap_err();
        assert_eq!(err.message, "table capacity is not enough");

        let ctx = seat_ctx(
            Some(reservation(4, ReservationStatus::Booked)),
            Some(table(4, Some(9))),
        );
        let err = run_guards(SEAT_GUARDS, &ctx).unwrap_err();
        assert_eq!(err.message, "this table is occupied");
    }

    #[test]
    fn test_finish_guards() {
        let missing = FinishContext {
            table_id: 3,
            table: None,
        };
        let err = run_guards(FINISH_GUARDS, &missing).unwrap_err();
        assert_eq!(err.message, "this table (3) does not exist");

        let free = FinishContext {
            table_id: 5,
            table: Some(table(4, None)),
        };
        let err = run_guards(FINISH_GUARDS, &free).unwrap_err();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "this table is not occupied");

        let occupied = FinishContext {
            table_id: 5,
            table: Some(table(4, Some(1))),
        };
        assert!(run_guards(FINISH_GUARDS, &occupied).is_ok());
    }
}
