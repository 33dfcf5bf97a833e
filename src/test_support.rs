//! Shared fixtures for unit tests.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

/// Fresh in-memory SQLite database with every migration applied.
pub(crate) async fn memory_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub(crate) fn repos(db: DatabaseConnection) -> SeaOrmRepositoryProvider {
    SeaOrmRepositoryProvider::new(db)
}
