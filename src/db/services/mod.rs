//! Read-side queries over the monitoring tables.
//!
//! Each sub-module covers one entity; functions take a borrowed
//! `DatabaseConnection` and return sea-orm results for the web layer to map.

pub mod alert_service;
pub mod metric_service;
pub mod server_service;

pub use alert_service::*;
pub use metric_service::*;
pub use server_service::*;
