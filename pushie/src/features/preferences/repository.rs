// src/features/preferences/repository.rs

use crate::features::preferences::models::preference::{self, Entity as Preference};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

/// キーバリュー形式の設定テーブルへのアクセス
#[derive(Clone)]
pub struct PreferenceRepository {
    db: DatabaseConnection,
}

impl PreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, key: &str) -> Result<Option<preference::Model>, DbErr> {
        Preference::find_by_id(key.to_string()).one(&self.db).await
    }

    pub async fn get_value(&self, key: &str) -> Result<Option<i32>, DbErr> {
        Ok(self.find(key).await?.map(|record| record.value))
    }

    /// 既存行があれば値と更新日時を上書きする（1文で原子的に書き込む）
    pub async fn upsert(&self, key: &str, value: i32) -> Result<(), DbErr> {
        let model = preference::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now()),
        };

        Preference::insert(model)
            .on_conflict(
                OnConflict::column(preference::Column::Key)
                    .update_columns([preference::Column::Value, preference::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    /// 削除した行があれば true
    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = Preference::delete_by_id(key.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
