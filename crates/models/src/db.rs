use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Open a pooled connection using the `[database]` section of the app config.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// In-memory SQLite pinned to a single connection, so every query sees the same database.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    connect_with_config(&cfg).await
}
