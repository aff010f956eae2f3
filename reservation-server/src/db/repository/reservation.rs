//! Reservation Repository

use chrono::NaiveDate;
use shared::models::{NewReservation, Reservation, ReservationStatus};
use sqlx::{Executor, Sqlite};

use super::RepoResult;

const COLUMNS: &str = "reservation_id, first_name, last_name, mobile_number, reservation_date, \
     reservation_time, people, status, created_at, updated_at";

// 搜索时忽略电话号码中的常见分隔符
const MOBILE_DIGITS: &str = "replace(replace(replace(replace(replace(replace(\
     mobile_number, '-', ''), '(', ''), ')', ''), ' ', ''), '.', ''), '+', '')";

/// Reservations of one day that still need a table or are at one,
/// ordered by time
pub async fn list_by_date<'e, E>(executor: E, date: NaiveDate) -> RepoResult<Vec<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE reservation_date = ? AND status NOT IN ('finished', 'cancelled') \
         ORDER BY reservation_time, reservation_id"
    );
    let rows: Vec<Reservation> = sqlx::query_as(&sql)
        .bind(date)
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

/// Reservations whose mobile number contains `digits`, any status,
/// ordered by date then time
pub async fn search_by_mobile<'e, E>(executor: E, digits: &str) -> RepoResult<Vec<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE {MOBILE_DIGITS} LIKE '%' || ? || '%' \
         ORDER BY reservation_date, reservation_time, reservation_id"
    );
    let rows: Vec<Reservation> = sqlx::query_as(&sql)
        .bind(digits)
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

/// Find reservation by id
pub async fn find_by_id<'e, E>(executor: E, reservation_id: i64) -> RepoResult<Option<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("SELECT {COLUMNS} FROM reservations WHERE reservation_id = ?");
    let row: Option<Reservation> = sqlx::query_as(&sql)
        .bind(reservation_id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Create a booked reservation
pub async fn create<'e, E>(executor: E, data: &NewReservation, now: i64) -> RepoResult<Reservation>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "INSERT INTO reservations (first_name, last_name, mobile_number, reservation_date, \
         reservation_time, people, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {COLUMNS}"
    );
    let row: Reservation = sqlx::query_as(&sql)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.mobile_number)
        .bind(data.reservation_date)
        .bind(data.reservation_time)
        .bind(data.people)
        .bind(ReservationStatus::Booked)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await?;
    Ok(row)
}

/// Replace the details of a reservation, keeping its status
pub async fn update<'e, E>(
    executor: E,
    reservation_id: i64,
    data: &NewReservation,
    now: i64,
) -> RepoResult<Option<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "UPDATE reservations SET first_name = ?, last_name = ?, mobile_number = ?, \
         reservation_date = ?, reservation_time = ?, people = ?, updated_at = ? \
         WHERE reservation_id = ? \
         RETURNING {COLUMNS}"
    );
    let row: Option<Reservation> = sqlx::query_as(&sql)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.mobile_number)
        .bind(data.reservation_date)
        .bind(data.reservation_time)
        .bind(data.people)
        .bind(now)
        .bind(reservation_id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Set the status of a reservation. Returns `false` if it does not exist.
pub async fn update_status<'e, E>(
    executor: E,
    reservation_id: i64,
    status: ReservationStatus,
    now: i64,
) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result =
        sqlx::query("UPDATE reservations SET status = ?, updated_at = ? WHERE reservation_id = ?")
            .bind(status)
            .bind(now)
            .bind(reservation_id)
            .execute(executor)
            .await?;
    Ok(result.rows_affected() == 1)
}
