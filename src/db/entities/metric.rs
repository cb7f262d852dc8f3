use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One timestamped usage snapshot for a server.
///
/// Usage columns are percentages and `network_traffic` is a raw rate; neither
/// is range-checked by the store.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub server_id: i32,
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub disk_usage: f64,
    pub app_usage: f64,
    pub network_traffic: f64,
    #[sea_orm(indexed)]
    pub timestamp: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
