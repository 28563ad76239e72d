//! API Routes

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Evento routes
        .route(
            "/api/eventos",
            get(handlers::get_all_eventos)
                .post(handlers::add_evento)
                .put(handlers::update_evento)
                .delete(handlers::delete_evento),
        )
        .route("/api/eventos/:evento_id", get(handlers::get_evento_by_id))
        .route("/api/eventos/tema/:tema", get(handlers::get_eventos_by_tema))

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
