use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use assetdesk_api::config::{DatabaseConfig, ServerConfig};
use assetdesk_api::router::build_app_router;
use assetdesk_api::state::AppState;
use assetdesk_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "assetdesk_api=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let db_config = DatabaseConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        cors_origins = ?config.cors_origins,
        "Loaded server configuration"
    );

    let pool = prepare_database(&db_config).await;

    let app = build_app_router(AppState::new(pool.clone()), &config);

    let host = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Asset desk API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    close_pool(pool, Duration::from_secs(config.shutdown_timeout_secs)).await;
    tracing::info!("Shutdown complete");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify and migrate. Any failure here is fatal.
async fn prepare_database(db_config: &DatabaseConfig) -> DbPool {
    let options = db_config
        .connect_options()
        .expect("DATABASE_URL is not a valid connection URL");
    let pool = assetdesk_db::create_pool(options, db_config.max_connections)
        .await
        .expect("Failed to connect to database");

    assetdesk_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    assetdesk_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        max_connections = db_config.max_connections,
        "Database ready, migrations applied"
    );
    pool
}

/// Close the pool once the server has stopped accepting requests, giving
/// in-flight queries at most `grace` to finish.
async fn close_pool(pool: DbPool, grace: Duration) {
    tracing::info!("Closing database pool");
    if tokio::time::timeout(grace, pool.close()).await.is_err() {
        tracing::warn!(
            grace_secs = grace.as_secs(),
            "Database pool did not close in time"
        );
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
