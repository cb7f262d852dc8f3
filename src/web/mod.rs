use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    middleware::{self as axum_middleware, Next},
    response::Response,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{debug, warn};

use crate::server::config::ServerConfig;
use crate::web::routes::*;

pub use error::AppError;

pub mod error;
pub mod models;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabaseConnection,
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;
    debug!(%method, %path, status = response.status().as_u16(), "Handled request");
    response
}

/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard.
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin.");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_axum_router(db_pool: DatabaseConnection, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(&config.allowed_origins);
    let app_state = Arc::new(AppState { db_pool });

    let api_v1 = alert_routes::create_alert_router()
        .merge(server_routes::create_server_router())
        .merge(metrics_routes::metrics_router());

    Router::new()
        .nest("/api", health_routes::create_health_router().nest("/v1", api_v1))
        .with_state(app_state)
        .layer(axum_middleware::from_fn(log_request))
        .layer(cors)
}
