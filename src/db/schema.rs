//! Idempotent schema creation.
//!
//! Tables and their indexes are derived from the entities and created with
//! `IF NOT EXISTS`, so running this against a populated database is a no-op.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::debug;

use crate::db::entities::{alert, metric, server};

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_absent(db, server::Entity).await?;
    create_table_if_absent(db, alert::Entity).await?;
    create_table_if_absent(db, metric::Entity).await?;
    Ok(())
}

async fn create_table_if_absent<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Copy,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    debug!(table = entity.table_name(), "Ensured table exists.");
    Ok(())
}
