use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::db::entities::server;

/// All servers, in id (insertion) order.
pub async fn get_all_servers(db: &DatabaseConnection) -> Result<Vec<server::Model>, DbErr> {
    server::Entity::find()
        .order_by_asc(server::Column::Id)
        .all(db)
        .await
}

pub async fn get_server_by_id(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<Option<server::Model>, DbErr> {
    server::Entity::find_by_id(server_id).one(db).await
}
