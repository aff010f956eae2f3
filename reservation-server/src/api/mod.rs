//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台管理和入座
//! - [`reservations`] - 预订管理
//!
//! 所有成功响应为 `{ "data": ... }`，错误响应为
//! `{ "status": 400, "code": 7002, "message": "..." }`

pub mod extract;
pub mod health;
pub mod reservations;
pub mod tables;

use axum::{Router, http::Uri, middleware};
use shared::{AppError, ErrorCode};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::core::ServerState;
use crate::middleware::logging_middleware;

/// 所有业务路由 (不含中间件)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(tables::router())
        .merge(reservations::router())
        .fallback(not_found)
}

/// 完整应用: 路由 + 中间件 + 状态
pub fn build_app(state: ServerState) -> Router {
    let max_connections = state.config.max_connections.max(1);

    build_router()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(ConcurrencyLimitLayer::new(max_connections))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("Path not found: {}", uri.path()))
}
