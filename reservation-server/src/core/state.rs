use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 所有请求共享
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 启动时加载的配置 (只读) |
/// | db | SQLite 连接池 |
/// | started_at | 启动时间，用于健康检查 |
///
/// Clone 只复制 Arc 和连接池句柄
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
            started_at: Instant::now(),
        }
    }

    /// 打开数据库并构建状态
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 内存数据库 + 测试配置
    pub async fn for_tests() -> Result<Self, AppError> {
        Self::initialize(&Config::for_tests()).await
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
