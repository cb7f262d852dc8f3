use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::db::services::{metric_service, server_service};
use crate::web::models::{ServerIdQuery, TrafficPoint, UsagePoint};
use crate::web::{AppError, AppState};

pub fn metrics_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/server/usage", get(get_server_usage_handler))
        .route("/network/traffic", get(get_network_traffic_handler))
}

/// Ids outside the `i32` key range cannot match a row, so they are reported
/// as not found rather than rejected.
async fn resolve_server_id(db: &DatabaseConnection, server_id: i64) -> Result<i32, AppError> {
    let not_found = || AppError::NotFound("Server not found".to_string());
    let server_id = i32::try_from(server_id).map_err(|_| not_found())?;
    match server_service::get_server_by_id(db, server_id).await? {
        Some(server) => Ok(server.id),
        None => Err(not_found()),
    }
}

async fn get_server_usage_handler(
    State(app_state): State<Arc<AppState>>,
    query: Result<Query<ServerIdQuery>, QueryRejection>,
) -> Result<Json<Vec<UsagePoint>>, AppError> {
    let Query(params) = query?;
    let server_id = resolve_server_id(&app_state.db_pool, params.server_id).await?;

    let metrics = metric_service::get_recent_metrics_for_server(&app_state.db_pool, server_id).await?;
    Ok(Json(metrics.iter().map(UsagePoint::from).collect()))
}

async fn get_network_traffic_handler(
    State(app_state): State<Arc<AppState>>,
    query: Result<Query<ServerIdQuery>, QueryRejection>,
) -> Result<Json<Vec<TrafficPoint>>, AppError> {
    let Query(params) = query?;
    let server_id = resolve_server_id(&app_state.db_pool, params.server_id).await?;

    let metrics = metric_service::get_recent_metrics_for_server(&app_state.db_pool, server_id).await?;
    Ok(Json(metrics.iter().map(TrafficPoint::from).collect()))
}
