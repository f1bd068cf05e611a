//! Catalog Server: product catalog CRUD API with observability.
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    catalog_telemetry::logging::init(&config.logging, &config.telemetry);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CATALOG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting catalog server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + schema ─────────────────────
    let db = catalog_database::DatabasePool::connect(&config.database).await?;
    catalog_database::schema::ensure_schema(db.pool()).await?;

    // ── Step 2: Observability singletons ─────────────────────────
    let metrics = Arc::new(catalog_telemetry::HttpMetrics::new()?);
    let access_log = Arc::new(catalog_telemetry::AccessLogWriter::open(
        &config.logging.access_log,
    )?);

    // ── Step 3: Repositories ─────────────────────────────────────
    let product_repo = Arc::new(catalog_database::repositories::ProductRepository::new(
        db.pool().clone(),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = catalog_api::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        product_repo,
        metrics,
        access_log,
    };

    let app = catalog_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Catalog server listening on {}", addr);

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("Catalog server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
