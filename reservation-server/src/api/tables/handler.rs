//! Dining Table API Handlers

use axum::extract::{Query, State};
use http::StatusCode;
use shared::models::{SeatDraft, Table, TableDraft};
use shared::request::TableQuery;
use shared::validation::parse_date;
use shared::{AppError, AppResult, DataResponse};

use crate::api::extract::{DataBody, PathId};
use crate::core::ServerState;
use crate::db::repository::table;
use crate::seating;

/// GET /tables - 获取所有桌台
///
/// `date` 只校验格式，桌台本身不按日期区分
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TableQuery>,
) -> AppResult<DataResponse<Vec<Table>>> {
    if let Some(date) = query.date.as_deref().filter(|d| !d.is_empty())
        && parse_date(date).is_none()
    {
        return Err(AppError::validation("date must be a date (YYYY-MM-DD)")
            .with_detail("field", "date"));
    }
    let tables = table::find_all(state.pool()).await?;
    Ok(DataResponse::new(tables))
}

/// POST /tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    DataBody(draft): DataBody<TableDraft>,
) -> AppResult<(StatusCode, DataResponse<Table>)> {
    let data = draft.validate()?;
    let created = table::create(state.pool(), &data).await?;
    tracing::info!(
        table_id = created.table_id,
        table_name = %created.table_name,
        capacity = created.capacity,
        "Table created"
    );
    Ok((StatusCode::CREATED, DataResponse::new(created)))
}

/// PUT /tables/{table_id}/seat - 入座
pub async fn seat(
    State(state): State<ServerState>,
    PathId(table_id): PathId,
    DataBody(draft): DataBody<SeatDraft>,
) -> AppResult<DataResponse<Table>> {
    let request = draft.validate()?;
    let table = seating::seat(state.pool(), table_id, request).await?;
    Ok(DataResponse::new(table))
}

/// DELETE /tables/{table_id}/seat - 离座
pub async fn finish(
    State(state): State<ServerState>,
    PathId(table_id): PathId,
) -> AppResult<DataResponse<Table>> {
    let table = seating::finish(state.pool(), table_id).await?;
    Ok(DataResponse::new(table))
}
