// src/db.rs
use crate::config::Config;
use crate::error::StorageError;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());

    // SQLite はファイル単位でロックされるため接続数は少なめにする
    opt.max_connections(4)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// 接続してからスキーマを最新にする
pub async fn connect_and_migrate(config: &Config) -> Result<DbPool, StorageError> {
    let pool = create_db_pool(config).await?;
    run_migrations(&pool).await?;
    tracing::debug!(database_url = %config.database_url, "Preference database ready");
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), StorageError> {
    Migrator::up(pool, None)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}
