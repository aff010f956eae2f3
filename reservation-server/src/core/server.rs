use std::time::Duration;

use tokio::net::TcpListener;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP 服务器
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// 绑定端口并运行，直到收到 Ctrl+C
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        };

        self.serve(listener, shutdown).await
    }

    /// 在已绑定的 listener 上运行 (测试使用 127.0.0.1:0)
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr().map_err(anyhow::Error::from)?;
        tracing::info!(
            "🍽  Reservation server listening on http://{} ({})",
            local_addr,
            self.config.environment
        );

        let app = api::build_app(self.state.clone());
        let pool = self.state.db.pool.clone();
        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(anyhow::Error::from)?;

        // 等待连接池关闭，超时则放弃
        if tokio::time::timeout(timeout, pool.close()).await.is_err() {
            tracing::warn!("Database pool did not close within {:?}", timeout);
        }
        tracing::info!("Server stopped");
        Ok(())
    }
}
