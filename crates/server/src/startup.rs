use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::users::UserLookupClient;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Connect the database, optionally migrate, and serve until the listener fails.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let users = Arc::new(UserLookupClient::new(cfg.user_service.base_url.clone()));
    info!(base_url = %cfg.user_service.base_url, "user service configured");
    let state = ServerState::new(db, users);

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting product service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let server = ServerConfig { host: "127.0.0.1".into(), port: 5000, worker_threads: None };
        assert_eq!(bind_addr(&server).unwrap().port(), 5000);
        let bad = ServerConfig { host: "not a host".into(), port: 5000, worker_threads: None };
        assert!(bind_addr(&bad).is_err());
    }
}
