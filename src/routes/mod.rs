pub mod client_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Router completo de la API REST
pub fn create_router(state: AppState, cors_origins: Option<Vec<String>>) -> Router {
    let cors = match cors_origins {
        Some(origins) => cors_middleware_with_origins(origins),
        None => cors_middleware(),
    };

    Router::new()
        .merge(client_routes::create_client_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
