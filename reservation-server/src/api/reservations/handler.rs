//! Reservation API Handlers

use axum::extract::{Query, State};
use http::StatusCode;
use shared::models::{Reservation, ReservationDraft, StatusDraft, StatusUpdate};
use shared::request::ReservationQuery;
use shared::validation::parse_date;
use shared::{AppError, AppResult, DataResponse};

use crate::api::extract::{DataBody, PathId};
use crate::core::ServerState;
use crate::reservations::{self, ReservationFilter};
use crate::utils::time;

/// GET /reservations - 按手机号搜索，否则按日期 (默认今天)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<DataResponse<Vec<Reservation>>> {
    let filter = match (query.mobile_number, query.date) {
        (Some(mobile), _) if !mobile.trim().is_empty() => ReservationFilter::Mobile(mobile),
        (_, Some(date)) if !date.is_empty() => {
            let date = parse_date(&date).ok_or_else(|| {
                AppError::validation("date must be a date (YYYY-MM-DD)")
                    .with_detail("field", "date")
            })?;
            ReservationFilter::Date(date)
        }
        _ => ReservationFilter::Date(time::today()),
    };
    let rows = reservations::list(state.pool(), filter).await?;
    Ok(DataResponse::new(rows))
}

/// POST /reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    DataBody(draft): DataBody<ReservationDraft>,
) -> AppResult<(StatusCode, DataResponse<Reservation>)> {
    let data = draft.validate()?;
    let created =
        reservations::create(state.pool(), &state.config.booking, data, time::local_now()).await?;
    Ok((StatusCode::CREATED, DataResponse::new(created)))
}

/// GET /reservations/{reservation_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    PathId(reservation_id): PathId,
) -> AppResult<DataResponse<Reservation>> {
    let reservation = reservations::get(state.pool(), reservation_id).await?;
    Ok(DataResponse::new(reservation))
}

/// PUT /reservations/{reservation_id} - 修改预订
pub async fn update(
    State(state): State<ServerState>,
    PathId(reservation_id): PathId,
    DataBody(draft): DataBody<ReservationDraft>,
) -> AppResult<DataResponse<Reservation>> {
    let data = draft.validate()?;
    let updated = reservations::update(
        state.pool(),
        &state.config.booking,
        reservation_id,
        data,
        time::local_now(),
    )
    .await?;
    Ok(DataResponse::new(updated))
}

/// PUT /reservations/{reservation_id}/status - 修改状态
pub async fn update_status(
    State(state): State<ServerState>,
    PathId(reservation_id): PathId,
    DataBody(draft): DataBody<StatusDraft>,
) -> AppResult<DataResponse<StatusUpdate>> {
    let next = draft.validate()?;
    let status = reservations::set_status(state.pool(), reservation_id, next).await?;
    Ok(DataResponse::new(StatusUpdate { status }))
}
