use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, QuerySelect,
    sea_query::{Expr, Func},
};
use serde::{Deserialize, Serialize};

use crate::db::entities::alert;
use crate::db::enums::AlertSeverity;

/// Number of alerts per severity. Every severity is present, zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: u64,
    pub medium: u64,
    pub low: u64,
}

impl AlertCounts {
    fn add(&mut self, severity: AlertSeverity, count: u64) {
        match severity {
            AlertSeverity::Critical => self.critical += count,
            AlertSeverity::Medium => self.medium += count,
            AlertSeverity::Low => self.low += count,
        }
    }

    pub fn get(&self, severity: AlertSeverity) -> u64 {
        match severity {
            AlertSeverity::Critical => self.critical,
            AlertSeverity::Medium => self.medium,
            AlertSeverity::Low => self.low,
        }
    }

    pub fn total(&self) -> u64 {
        self.critical + self.medium + self.low
    }
}

/// Counts all alerts grouped by severity.
pub async fn count_alerts_by_severity(db: &DatabaseConnection) -> Result<AlertCounts, DbErr> {
    let rows: Vec<(AlertSeverity, i64)> = alert::Entity::find()
        .select_only()
        .column(alert::Column::Severity)
        .column_as(Expr::expr(Func::count(Expr::col(alert::Column::Id))), "count")
        .group_by(alert::Column::Severity)
        .into_tuple()
        .all(db)
        .await?;

    let mut counts = AlertCounts::default();
    for (severity, count) in rows {
        counts.add(severity, u64::try_from(count).unwrap_or_default());
    }
    Ok(counts)
}
