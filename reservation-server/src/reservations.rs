//! 预订业务规则
//!
//! Field validation happens in the drafts (`shared::models`); this module adds
//! the rules that need the clock, the configuration or the stored row.

use chrono::NaiveDateTime;
use shared::models::{NewReservation, Reservation, ReservationStatus, normalize_mobile_number};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};
use sqlx::SqlitePool;

use crate::booking::BookingPolicy;
use crate::db::repository::{RepoError, begin_write, reservation};

fn reservation_not_found(reservation_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ReservationNotFound,
        format!("this reservation_id ({reservation_id}) does not exist"),
    )
}

/// Reservations filtered by day, or by mobile number when one is given
pub enum ReservationFilter {
    Date(chrono::NaiveDate),
    Mobile(String),
}

pub async fn list(pool: &SqlitePool, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
    let rows = match filter {
        ReservationFilter::Date(date) => reservation::list_by_date(pool, date).await?,
        ReservationFilter::Mobile(mobile) => {
            let digits = normalize_mobile_number(&mobile);
            if digits.is_empty() {
                return Err(AppError::validation("mobile_number must contain digits")
                    .with_detail("field", "mobile_number"));
            }
            reservation::search_by_mobile(pool, &digits).await?
        }
    };
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, reservation_id: i64) -> AppResult<Reservation> {
    reservation::find_by_id(pool, reservation_id)
        .await?
        .ok_or_else(|| reservation_not_found(reservation_id))
}

pub async fn create(
    pool: &SqlitePool,
    policy: &BookingPolicy,
    data: NewReservation,
    now: NaiveDateTime,
) -> AppResult<Reservation> {
    policy.check(data.reservation_date, data.reservation_time, now)?;
    let created = reservation::create(pool, &data, now_millis()).await?;
    tracing::info!(
        reservation_id = created.reservation_id,
        date = %created.reservation_date,
        people = created.people,
        "Reservation created"
    );
    Ok(created)
}

/// Edit a booked reservation
pub async fn update(
    pool: &SqlitePool,
    policy: &BookingPolicy,
    reservation_id: i64,
    data: NewReservation,
    now: NaiveDateTime,
) -> AppResult<Reservation> {
    let mut tx = begin_write(pool).await?;

    let current = reservation::find_by_id(&mut *tx, reservation_id)
        .await?
        .ok_or_else(|| reservation_not_found(reservation_id))?;
    if !current.status.is_booked() {
        return Err(AppError::with_message(
            ErrorCode::ReservationNotBooked,
            format!(
                "only booked reservations can be edited, this one is {}",
                current.status
            ),
        ));
    }
    policy.check(data.reservation_date, data.reservation_time, now)?;

    let updated = reservation::update(&mut *tx, reservation_id, &data, now_millis())
        .await?
        .ok_or_else(|| reservation_not_found(reservation_id))?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(reservation_id, "Reservation updated");
    Ok(updated)
}

/// Change the status of a reservation through the status endpoint
///
/// Only booked reservations can be cancelled here. Seating and finishing go
/// through [`crate::seating`] so the table reference stays in step.
pub async fn set_status(
    pool: &SqlitePool,
    reservation_id: i64,
    next: ReservationStatus,
) -> AppResult<ReservationStatus> {
    let mut tx = begin_write(pool).await?;

    let current = reservation::find_by_id(&mut *tx, reservation_id)
        .await?
        .ok_or_else(|| reservation_not_found(reservation_id))?;
    let status = current.status.transition_to(next)?;

    reservation::update_status(&mut *tx, reservation_id, status, now_millis()).await?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        reservation_id,
        from = %current.status,
        to = %status,
        "Reservation status changed"
    );
    Ok(status)
}
