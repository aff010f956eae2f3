//! Reservation Server - 餐厅预订与桌台管理服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): 桌台、预订 RESTful 接口
//! - **入座流程** (`seating`): 有序校验链 + 事务内状态变更
//! - **预订规则** (`booking`, `reservations`): 营业时间、休息日、状态流转
//! - **数据库** (`db`): SQLite (sqlx)
//!
//! # 模块结构
//!
//! ```text
//! reservation-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── seating/       # 入座 / 离座校验链
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、时间、错误转换
//! └── db/            # 连接池、迁移、repository
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod middleware;
pub mod reservations;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use booking::BookingPolicy;
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   _____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / _ \
 / _, _/  __(__  )  __/ /   | |/ /  __/
/_/ |_|\___/____/\___/_/    |___/\___/
        reservation server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 不存在时忽略
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        anyhow::bail!("Failed to load .env: {e}");
    }

    // 配置错误直接返回，由 main 输出
    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    Ok(config)
}
