//! Dining Table API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /tables | GET | 桌台列表 (按名称排序) |
//! | /tables | POST | 新建桌台 |
//! | /tables/{table_id}/seat | PUT | 预订入座 |
//! | /tables/{table_id}/seat | DELETE | 离座，预订完成 |

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/tables", get(handler::list).post(handler::create))
        .route(
            "/tables/{table_id}/seat",
            put(handler::seat).delete(handler::finish),
        )
}
