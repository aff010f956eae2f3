//! Dining Table Repository

use shared::models::{NewTable, Table};
use sqlx::{Executor, Sqlite};

use super::RepoResult;

/// Find all tables, ordered by name
pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<Table>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let tables: Vec<Table> = sqlx::query_as(
        "SELECT table_id, table_name, capacity, reservation_id FROM tables ORDER BY table_name, table_id",
    )
    .fetch_all(executor)
    .await?;
    Ok(tables)
}

/// Find table by id
pub async fn find_by_id<'e, E>(executor: E, table_id: i64) -> RepoResult<Option<Table>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let table: Option<Table> = sqlx::query_as(
        "SELECT table_id, table_name, capacity, reservation_id FROM tables WHERE table_id = ?",
    )
    .bind(table_id)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

/// Create a new (free) table
pub async fn create<'e, E>(executor: E, data: &NewTable) -> RepoResult<Table>
where
    E: Executor<'e, Database = Sqlite>,
{
    let table: Table = sqlx::query_as(
        r#"
        INSERT INTO tables (table_name, capacity, reservation_id)
        VALUES (?, ?, NULL)
        RETURNING table_id, table_name, capacity, reservation_id
        "#,
    )
    .bind(&data.table_name)
    .bind(data.capacity)
    .fetch_one(executor)
    .await?;
    Ok(table)
}

/// Point a free table at a reservation
///
/// Returns `false` when the table was taken in the meantime.
pub async fn seat<'e, E>(executor: E, table_id: i64, reservation_id: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "UPDATE tables SET reservation_id = ? WHERE table_id = ? AND reservation_id IS NULL",
    )
    .bind(reservation_id)
    .bind(table_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Clear the reservation reference of an occupied table
pub async fn clear<'e, E>(executor: E, table_id: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "UPDATE tables SET reservation_id = NULL WHERE table_id = ? AND reservation_id IS NOT NULL",
    )
    .bind(table_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() == 1)
}
