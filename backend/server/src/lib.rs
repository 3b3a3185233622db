//! # Registration Server
//!
//! REST backend the registration form and summary screen talk to.
//!
//!
//!
//! # Routes
//! - `GET /` and `GET /registration/`: welcome text
//! - `POST /registration`: validate and store, answers `201` with `"Added Successfully"`
//! - `GET /registration/summary`: stored registrations, optional `startDate`, `endDate`, `city` query
//! - `GET /debug/registrations`: everything stored
//! - `POST /debug/registrations`: store without validation, answers the stored record
//!
//!
//!
//! # Environment
//! - `RUST_PORT`: listening port, default `8080`
//! - `REDIS_URL`: Redis connection, in-memory storage when unset
//! - `ALLOWED_ORIGIN`: CORS origin of the form, default `http://localhost:3000`
//! - `RUST_LOG`: tracing filter
//!
//!
//!
//! # Setup
//!
//! Run with Redis.
//! ```sh
//! REDIS_URL=redis://127.0.0.1/ RUST_LOG=info cargo run -p vaccine
//! ```
//!
//! Try it.
//! ```sh
//! curl http://localhost:8080/registration/summary?city=haifa
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use error::AppError;
use routes::{
    create_handler, debug_create_handler, debug_list_handler, home_handler, summary_handler,
};
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(home_handler))
        .route("/registration", post(create_handler))
        .route("/registration/", get(home_handler))
        .route("/registration/summary", get(summary_handler))
        .route(
            "/debug/registrations",
            get(debug_list_handler).post(debug_create_handler),
        )
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
