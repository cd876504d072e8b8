use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::models::client::{Client, CreateClientRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// GET /clients y POST /clients
pub fn create_client_router() -> Router<AppState> {
    Router::new().route("/clients", get(list_clients).post(create_client))
}

async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = state.clients.list_clients().await?;
    Ok(Json(clients))
}

async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<Client>, AppError> {
    let client = state.clients.create_client(request).await?;
    Ok(Json(client))
}
