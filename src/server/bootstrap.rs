//! Process bootstrap: connect, migrate, seed.
//!
//! Runs once before the HTTP listener is bound and never from a request path.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::db::entities::server;
use crate::db::mock_data::{self, SeedSummary};
use crate::db::schema;
use crate::server::config::ServerConfig;

pub async fn connect(config: &ServerConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.to_owned());
    opt.max_connections(config.max_connections)
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Runs the generator only when no server rows exist.
///
/// The count and the insert are not atomic; two processes starting against the
/// same empty database can both seed.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<Option<SeedSummary>, DbErr> {
    let server_count = server::Entity::find().count(db).await?;
    if server_count == 0 {
        info!("Database is empty. Generating mock data...");
        let summary = mock_data::generate_mock_data(db).await?;
        Ok(Some(summary))
    } else {
        info!(
            server_count,
            "Database already populated. Skipping mock data generation."
        );
        Ok(None)
    }
}

/// Creates any missing tables, then seeds an empty database.
pub async fn prepare_database(db: &DatabaseConnection) -> Result<Option<SeedSummary>, DbErr> {
    schema::ensure_schema(db).await?;
    seed_if_empty(db).await
}
