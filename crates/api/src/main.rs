use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saveit_api::config::ServerConfig;
use saveit_api::router::build_app_router;
use saveit_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saveit_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend_url = %config.backend_url,
        upstream_timeout_secs = config.upstream_timeout_secs,
        summaries_enabled = config.gemini.api_key.is_some(),
        "Loaded server configuration"
    );

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    // --- App state ---
    let state = AppState::from_config(config).expect("Failed to build HTTP client");
    tracing::info!(backend_url = state.backend.base_url(), "Backend client ready");

    // --- Router ---
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Proxy stopped");
}

/// Resolve on SIGINT or SIGTERM. In-flight proxy calls finish (bounded by
/// `REQUEST_TIMEOUT_SECS`) before `serve` returns.
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
            tracing::info!(signal = "SIGINT", "Draining proxy requests");
        }
        () = terminate => {
            tracing::info!(signal = "SIGTERM", "Draining proxy requests");
        }
    }
}
