//! 请求日志中间件
//!
//! 每个请求一个 `request` span，带请求 ID、路由模板以及路径里的
//! `table_id` / `reservation_id`。守卫失败、入座、离座等处理函数内的日志
//! 都在这个 span 下输出，可以按桌台或预订过滤。

use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{MatchedPath, RawPathParams, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{Instrument, Span, field};

/// 记录到 span 上的路径参数
const TRACKED_PARAMS: [&str; 2] = ["table_id", "reservation_id"];

pub async fn logging_middleware(
    params: Result<RawPathParams, RawPathParamsRejection>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    // SetRequestIdLayer 在外层，正常情况下一定存在
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
        table_id = field::Empty,
        reservation_id = field::Empty,
    );
    // fallback 路由没有路径参数
    if let Ok(params) = &params {
        record_path_ids(&span, params);
    }

    let response = async {
        tracing::debug!("Request started");
        next.run(req).await
    }
    .instrument(span.clone())
    .await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    span.in_scope(|| log_completion(status, latency_ms));

    response
}

fn record_path_ids(span: &Span, params: &RawPathParams) {
    for (key, value) in params.iter() {
        if TRACKED_PARAMS.contains(&key) {
            span.record(key, value);
        }
    }
}

fn log_completion(status: StatusCode, latency_ms: u64) {
    let code = status.as_u16();
    if status.is_server_error() {
        tracing::warn!(status = code, latency_ms, "Request completed with server error");
    } else if status.is_client_error() {
        tracing::warn!(status = code, latency_ms, "Request completed with client error");
    } else {
        tracing::info!(status = code, latency_ms, "Request completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::extract::Path;
    use axum::middleware;
    use axum::routing::put;
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new()
            .route(
                "/tables/{table_id}/seat",
                put(|Path(table_id): Path<i64>| async move { table_id.to_string() }),
            )
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(logging_middleware))
    }

    #[tokio::test]
    async fn test_passes_through_routed_request() {
        let request = http::Request::builder()
            .method("PUT")
            .uri("/tables/7/seat")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b"7");
    }

    #[tokio::test]
    async fn test_fallback_without_path_params() {
        let request = http::Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
