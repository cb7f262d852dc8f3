//! Synthetic data used to populate an empty database.
//!
//! The generator does not check whether the store already has rows; calling it
//! twice inserts a second full set. The emptiness guard lives in
//! [`crate::server::bootstrap::seed_if_empty`].

use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use tracing::info;

use crate::db::entities::{alert, metric, server};
use crate::db::enums::AlertSeverity;

pub const SERVER_COUNT: usize = 5;
pub const ALERTS_PER_SERVER: usize = 4;
pub const METRICS_PER_SERVER: usize = 20;

const MAX_ALERT_AGE_DAYS: i64 = 30;
const MAX_METRIC_AGE_HOURS: i64 = 720;
const MAX_USAGE_PERCENT: f64 = 100.0;
const MAX_NETWORK_TRAFFIC: f64 = 1000.0;

/// Row counts inserted by one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub servers: usize,
    pub alerts: usize,
    pub metrics: usize,
}

pub async fn generate_mock_data(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
    let mut rng = StdRng::from_os_rng();
    generate_mock_data_with_rng(db, &mut rng).await
}

/// Inserts servers, then alerts, then metrics, committing each batch separately.
/// Alerts and metrics reference the ids assigned by the server commit.
pub async fn generate_mock_data_with_rng<R>(
    db: &DatabaseConnection,
    rng: &mut R,
) -> Result<SeedSummary, DbErr>
where
    R: Rng + Send,
{
    info!("Generating mock data...");

    let txn = db.begin().await?;
    let mut server_ids = Vec::with_capacity(SERVER_COUNT);
    for i in 1..=SERVER_COUNT {
        let inserted = server::ActiveModel {
            name: Set(format!("Server-{i}")),
            ip_address: Set(format!("192.168.1.{i}")),
            status: Set("active".to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        server_ids.push(inserted.id);
    }
    txn.commit().await?;
    info!(count = server_ids.len(), "Added servers");

    let alerts = build_alerts(&server_ids, rng);
    let alert_count = alerts.len();
    let txn = db.begin().await?;
    alert::Entity::insert_many(alerts).exec(&txn).await?;
    txn.commit().await?;
    info!(count = alert_count, "Added alerts");

    let metrics = build_metrics(&server_ids, rng);
    let metric_count = metrics.len();
    let txn = db.begin().await?;
    metric::Entity::insert_many(metrics).exec(&txn).await?;
    txn.commit().await?;
    info!(count = metric_count, "Added metrics");

    Ok(SeedSummary {
        servers: server_ids.len(),
        alerts: alert_count,
        metrics: metric_count,
    })
}

fn build_alerts<R: Rng>(server_ids: &[i32], rng: &mut R) -> Vec<alert::ActiveModel> {
    let now = Utc::now();
    let mut alerts = Vec::with_capacity(server_ids.len() * ALERTS_PER_SERVER);
    for &server_id in server_ids {
        for _ in 0..ALERTS_PER_SERVER {
            let severity = *AlertSeverity::ALL
                .choose(rng)
                .unwrap_or(&AlertSeverity::Low);
            let age_days = rng.random_range(0..=MAX_ALERT_AGE_DAYS);
            alerts.push(alert::ActiveModel {
                server_id: Set(server_id),
                severity: Set(severity),
                message: Set(format!("Sample alert for Server-{server_id}")),
                timestamp: Set(now - Duration::days(age_days)),
                ..Default::default()
            });
        }
    }
    alerts
}

fn build_metrics<R: Rng>(server_ids: &[i32], rng: &mut R) -> Vec<metric::ActiveModel> {
    let now = Utc::now();
    let mut metrics = Vec::with_capacity(server_ids.len() * METRICS_PER_SERVER);
    for &server_id in server_ids {
        for _ in 0..METRICS_PER_SERVER {
            let age_hours = rng.random_range(0..=MAX_METRIC_AGE_HOURS);
            metrics.push(metric::ActiveModel {
                server_id: Set(server_id),
                cpu_usage: Set(rng.random_range(0.0..=MAX_USAGE_PERCENT)),
                ram_usage: Set(rng.random_range(0.0..=MAX_USAGE_PERCENT)),
                disk_usage: Set(rng.random_range(0.0..=MAX_USAGE_PERCENT)),
                app_usage: Set(rng.random_range(0.0..=MAX_USAGE_PERCENT)),
                network_traffic: Set(rng.random_range(0.0..=MAX_NETWORK_TRAFFIC)),
                timestamp: Set(now - Duration::hours(age_hours)),
                ..Default::default()
            });
        }
    }
    metrics
}
