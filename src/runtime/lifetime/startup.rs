use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 安装 TLS 加密后端，连接数据库并完成迁移
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // 重复安装时返回 Err，忽略即可
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_engine_is_fatal() {
        let mut config = AppConfig::get().clone();
        config.database.engine = String::new();
        config.database.url = String::new();

        let err = prepare_server_startup(&config).await.err().unwrap();
        assert_eq!(err.code(), "E001");
    }

    #[tokio::test]
    async fn test_sqlite_startup_runs_migrations() {
        let mut config = AppConfig::get().clone();
        config.database.engine = String::new();
        config.database.url = "sqlite::memory:".to_string();
        config.database.pool_size = 1;

        let ctx = prepare_server_startup(&config).await.unwrap();
        assert!(ctx.storage.list_students().await.unwrap().is_empty());
    }
}
