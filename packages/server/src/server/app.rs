//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    create_donation, delete_donation, health_handler, list_donations, update_donation,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router.
///
/// All state lives in the database; the only shared in-process state is the
/// connection pool, passed to handlers via `Extension`.
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS configuration - the SPA client runs on a different port
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/donations", get(list_donations).post(create_donation))
        .route(
            "/api/donations/:id",
            put(update_donation).delete(delete_donation),
        )
        // Health check
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
