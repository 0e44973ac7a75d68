use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::product::{ProductService, SeaOrmProductRepository};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => { s.recv().await; }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutting down");
}

/// Public entry: connect the store, build the app and run the HTTP server.
/// Any startup failure (store unreachable, migration, bind) is returned to the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let repo = Arc::new(SeaOrmProductRepository::new(db));
    let state = ServerState::new(ProductService::new(repo, cfg.catalog));
    let app: Router = routes::build_router(state, build_cors(), cfg.server.body_limit_bytes);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, schema = ?cfg.catalog.schema, list_order = ?cfg.catalog.list_order, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 5050;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:5050");
    }

    #[test]
    fn bad_host_is_an_error() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
