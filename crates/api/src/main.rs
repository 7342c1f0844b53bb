use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mias_api::config::ServerConfig;
use mias_api::router::build_app_router;
use mias_api::state::AppState;
use mias_imaging::gemini::GeminiClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mias_api=debug,mias_db=info,mias_imaging=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        database_url = %config.database_url,
        static_dir = ?config.static_dir,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = mias_db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    tracing::info!("Database connection pool created");

    mias_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    let report = mias_db::initialize(&pool)
        .await
        .expect("Failed to create rotations table");
    if report.is_clean() {
        tracing::info!(
            applied = ?report.applied,
            skipped = report.skipped.len(),
            "Database schema ready"
        );
    } else {
        tracing::warn!(
            failed = ?report.failed,
            "Database schema ready with failed migrations; optional columns may be missing"
        );
    }

    // --- Image service ---
    if config.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; headshot transformations will fail");
    }
    let gemini = GeminiClient::with_client(
        reqwest::Client::new(),
        config.gemini.base_url.clone(),
        config.gemini.model.clone(),
        config.gemini.api_key.clone(),
    );

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        headshot_editor: Arc::new(gemini),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, closing database");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
