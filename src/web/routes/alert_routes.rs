use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use crate::db::services::alert_service;
use crate::web::models::AlertCounts;
use crate::web::{AppError, AppState};

pub fn create_alert_router() -> Router<Arc<AppState>> {
    Router::new().route("/alerts", get(get_alert_counts_handler))
}

async fn get_alert_counts_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<AlertCounts>, AppError> {
    let counts = alert_service::count_alerts_by_severity(&app_state.db_pool).await?;
    Ok(Json(counts))
}
