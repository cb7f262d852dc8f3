pub mod alert_routes;
pub mod health_routes;
pub mod metrics_routes;
pub mod server_routes;
