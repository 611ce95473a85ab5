//! HTTP JSON API for the member roster.
//!
//! All routes live below `/api/v2/members`:
//!
//! | Method | Path | Body | Success |
//! |---|---|---|---|
//! | GET | `/` | | 200 `{ members }` |
//! | POST | `/` | `email` | 201 `{ newMember }` |
//! | DELETE | `/` | `email` | 202 |
//! | PUT | `/subscribe` | `email`, `groups` | 202 `{ member }` |
//! | PUT | `/unsubscribe` | `email`, `groups` | 202 `{ member }` |
//! | PATCH | `/dues` | `email` | 202 `{ member }` |
//! | POST | `/reset` | | 200 `{ modified }` |
//!
//! Errors are answered with `{ err: { code, message } }`.
use std::time::Duration;

use anyhow::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod payload;
pub mod routes;
pub mod state;

use config::Config;
use roster_db::Connection;
use state::{AppState, SharedState};

/// The members router with CORS and request tracing
pub fn app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Open the database and serve the API until a shutdown
/// signal arrives.
pub async fn serve(config: Config) -> Result<()> {
    info!(members_db = %config.members_db, "opening database");
    let db = Connection::open(&config.members_db).await?;

    let app = app(AppState::new(db.clone()));

    let listener = TcpListener::bind(config.listen).await?;
    info!("Server running on {}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    if let Err(err) = db.close().await {
        warn!(%err, "database was not closed cleanly");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!(%err, "failed to install signal handler");
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
