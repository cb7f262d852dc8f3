use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use crate::db::services::server_service;
use crate::web::models::ServerSummary;
use crate::web::{AppError, AppState};

pub fn create_server_router() -> Router<Arc<AppState>> {
    Router::new().route("/servers", get(get_servers_handler))
}

async fn get_servers_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServerSummary>>, AppError> {
    let servers = server_service::get_all_servers(&app_state.db_pool).await?;
    Ok(Json(servers.into_iter().map(ServerSummary::from).collect()))
}
