use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Welcome
        .route("/", get(handlers::index::index))

        // Date arithmetic
        .route("/between", post(handlers::dates::between))
        .route("/weekday", post(handlers::dates::weekday))

        // Request history
        .route(
            "/history",
            get(handlers::history::get_history).delete(handlers::history::clear_history),
        )

        // Add state
        .with_state(state)

        // Add tracing and CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
