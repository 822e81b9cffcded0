//! ModuTree Server — the HTTP JSON surface over the site registry and
//! sub-resource repositories.
//!
//! Handlers are stateless and reentrant; every request goes straight
//! to the document store, which is the sole source of truth. Store
//! calls are single attempts; a failure surfaces as a 500 with a
//! generic body, with the cause logged server-side.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use modutree_core::error::{ModuTreeError, ModuTreeResult};
use modutree_db::DbManager;
use surrealdb::Connection;
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::ServerConfig;
use state::AppState;

/// Build the API router over the given application state.
pub fn router<C: Connection>(state: Arc<AppState<C>>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/site/check-slug",
            get(routes::site::check_slug::<C>).post(routes::site::register_slug::<C>),
        )
        .route(
            "/api/site",
            get(routes::site::get_site::<C>).post(routes::site::create_site::<C>),
        )
        .route("/api/sites", get(routes::site::list_sites::<C>))
        .route(
            "/api/events",
            get(routes::events::list_events::<C>)
                .post(routes::events::create_event::<C>)
                .delete(routes::events::delete_event::<C>),
        )
        .route(
            "/api/guestbook",
            get(routes::guestbook::list_entries::<C>).post(routes::guestbook::create_entry::<C>),
        )
        .layer(cors)
        .with_state(state)
}

/// Connect to the store, run migrations, and serve the API until a
/// shutdown signal arrives.
pub async fn start_server() -> ModuTreeResult<()> {
    let config = ServerConfig::load();

    let manager = DbManager::connect(&config.db).await?;

    let state = AppState::new(manager.client().clone());
    let app = router(state);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ModuTreeError::Internal(e.to_string()))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ModuTreeError::Internal(e.to_string()))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
