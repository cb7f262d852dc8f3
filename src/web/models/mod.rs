//! Response bodies for the monitoring API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::{metric, server};

pub use crate::db::services::AlertCounts;

/// Timestamps are rendered as RFC 3339 UTC with microsecond precision.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSummary {
    pub id: i32,
    pub name: String,
    pub ip_address: String,
    pub status: String,
}

impl From<server::Model> for ServerSummary {
    fn from(s: server::Model) -> Self {
        Self {
            id: s.id,
            name: s.name,
            ip_address: s.ip_address,
            status: s.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub disk_usage: f64,
    pub app_usage: f64,
    pub timestamp: String,
}

impl From<&metric::Model> for UsagePoint {
    fn from(m: &metric::Model) -> Self {
        Self {
            cpu_usage: m.cpu_usage,
            ram_usage: m.ram_usage,
            disk_usage: m.disk_usage,
            app_usage: m.app_usage,
            timestamp: format_timestamp(&m.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub network_traffic: f64,
    pub timestamp: String,
}

impl From<&metric::Model> for TrafficPoint {
    fn from(m: &metric::Model) -> Self {
        Self {
            network_traffic: m.network_traffic,
            timestamp: format_timestamp(&m.timestamp),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerIdQuery {
    pub server_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_metric() -> metric::Model {
        metric::Model {
            id: 9,
            server_id: 1,
            cpu_usage: 45.2,
            ram_usage: 67.8,
            disk_usage: 89.1,
            app_usage: 34.5,
            network_traffic: 500.7,
            timestamp: Utc.with_ymd_and_hms(2025, 4, 17, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_timestamp_is_iso_8601_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 4, 17, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-04-17T10:00:00.000000Z");
    }

    #[test]
    fn test_usage_point_projects_usage_fields_only() {
        let json = serde_json::to_value(UsagePoint::from(&sample_metric())).unwrap();

        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["app_usage", "cpu_usage", "disk_usage", "ram_usage", "timestamp"]);
        assert_eq!(json["cpu_usage"], 45.2);
        assert_eq!(json["timestamp"], "2025-04-17T10:00:00.000000Z");
    }

    #[test]
    fn test_traffic_point_projects_traffic_only() {
        let json = serde_json::to_value(TrafficPoint::from(&sample_metric())).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(json["network_traffic"], 500.7);
    }
}
