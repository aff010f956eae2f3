//! Reservation API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /reservations | GET | 按日期或手机号查询 |
//! | /reservations | POST | 新建预订 |
//! | /reservations/{reservation_id} | GET | 预订详情 |
//! | /reservations/{reservation_id} | PUT | 修改预订 (仅 booked) |
//! | /reservations/{reservation_id}/status | PUT | 取消预订 (booked → cancelled) |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/reservations", get(handler::list).post(handler::create))
        .route(
            "/reservations/{reservation_id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route(
            "/reservations/{reservation_id}/status",
            put(handler::update_status),
        )
}
