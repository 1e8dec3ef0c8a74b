// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 設定ストア関連マイグレーション
mod m20250701_000001_create_preferences_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. キーバリュー形式の設定テーブル
            Box::new(m20250701_000001_create_preferences_table::Migration),
        ]
    }
}
