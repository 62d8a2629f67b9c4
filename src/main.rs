use cart_api::cart::AppState;
use cart_api::config::ServerConfig;
use cart_api::router::create_app_router;
use cart_api::{logging, shutdown};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration from .env, environment and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        // Logging is not initialised yet
        eprintln!("Configuration error: {e}");
        process::exit(1);
    });

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logging error: {e}");
        process::exit(1);
    }

    // Initialize application state
    let state = Arc::new(AppState::in_memory());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            process::exit(1);
        }
    };

    info!("Server running on http://{addr}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::listen().await {
                error!("{e}");
                std::future::pending::<()>().await;
            }
        })
        .await;

    if let Err(e) = served {
        error!("server error: {e}");
        process::exit(1);
    }

    info!("Server stopped");
}
