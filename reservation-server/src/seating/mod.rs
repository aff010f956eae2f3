//! 桌台入座 / 离座
//!
//! Each transition loads its context, runs its guard chain and writes the
//! table and reservation changes inside one transaction. A rejected guard
//! rolls back without writing anything.

pub mod context;
pub mod guards;

pub use context::{FinishContext, SeatContext};
pub use guards::{FINISH_GUARDS, Guard, SEAT_GUARDS, run_guards};

use shared::AppResult;
use shared::models::{ReservationStatus, SeatRequest, Table};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, begin_write, reservation, table};

/// Seat a booked reservation at a free table with enough capacity
pub async fn seat(pool: &SqlitePool, table_id: i64, request: SeatRequest) -> AppResult<Table> {
    let mut tx = begin_write(pool).await?;

    let ctx = SeatContext {
        table_id,
        request,
        reservation: reservation::find_by_id(&mut *tx, request.reservation_id).await?,
        table: table::find_by_id(&mut *tx, table_id).await?,
    };
    run_guards(SEAT_GUARDS, &ctx)?;

    // 条件更新: 并发入座时只有一个成功
    if !table::seat(&mut *tx, table_id, request.reservation_id).await? {
        return Err(guards::table_occupied());
    }
    reservation::update_status(
        &mut *tx,
        request.reservation_id,
        ReservationStatus::Seated,
        now_millis(),
    )
    .await?;

    let seated = table::find_by_id(&mut *tx, table_id)
        .await?
        .ok_or_else(|| context::table_not_found(table_id))?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        table_id,
        table_name = %seated.table_name,
        reservation_id = request.reservation_id,
        "Reservation seated"
    );
    Ok(seated)
}

/// Free an occupied table and finish the reservation seated at it
pub async fn finish(pool: &SqlitePool, table_id: i64) -> AppResult<Table> {
    let mut tx = begin_write(pool).await?;

    let ctx = FinishContext {
        table_id,
        table: table::find_by_id(&mut *tx, table_id).await?,
    };
    run_guards(FINISH_GUARDS, &ctx)?;
    let reservation_id = ctx.occupant()?;

    if !table::clear(&mut *tx, table_id).await? {
        return Err(guards::table_not_occupied());
    }
    reservation::update_status(
        &mut *tx,
        reservation_id,
        ReservationStatus::Finished,
        now_millis(),
    )
    .await?;

    let cleared = table::find_by_id(&mut *tx, table_id)
        .await?
        .ok_or_else(|| context::table_not_found(table_id))?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(table_id, reservation_id, "Table finished");
    Ok(cleared)
}
