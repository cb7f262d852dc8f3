use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::db::entities::metric;

/// Upper bound on the number of samples returned per server.
pub const RECENT_METRICS_LIMIT: u64 = 50;

/// Most recent metric rows for a server, newest first.
pub async fn get_recent_metrics_for_server(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<Vec<metric::Model>, DbErr> {
    metric::Entity::find()
        .filter(metric::Column::ServerId.eq(server_id))
        .order_by_desc(metric::Column::Timestamp)
        .limit(RECENT_METRICS_LIMIT)
        .all(db)
        .await
}
