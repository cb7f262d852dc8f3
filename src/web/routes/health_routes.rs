use axum::{Router, routing::get};
use std::sync::Arc;

use crate::web::AppState;

pub fn create_health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check_handler))
}

async fn health_check_handler() -> &'static str {
    "OK"
}
