// src/features/preferences/store.rs

//! 閲覧回数のデフォルト値（`pwMaxViews`）を保持する永続セル
//!
//! 読み取りは [`PrefsStorage::observe_max_views`] のストリームで行う。購読直後に
//! 現在値が流れ、その後は書き込みのたびに最新値が流れる。書き込みは DB への
//! 保存が完了してから購読者へ通知される。

use crate::error::StorageError;
use crate::features::preferences::repository::PreferenceRepository;
use sea_orm::DatabaseConnection;
use tokio::sync::{watch, Mutex};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

pub const MAX_VIEWS_KEY: &str = "pwMaxViews";
pub const DEFAULT_MAX_VIEWS: i32 = 5;

pub struct PrefsStorage {
    repository: PreferenceRepository,
    max_views: watch::Sender<i32>,
    // DB への書き込みと通知の順序を揃える
    write_lock: Mutex<()>,
}

impl PrefsStorage {
    /// 保存済みの値を読み込んでストアを作成する
    ///
    /// 読み込みに失敗した場合はデフォルト値で代用せずエラーを返す。
    pub async fn new(db: DatabaseConnection) -> Result<Self, StorageError> {
        let repository = PreferenceRepository::new(db);
        let stored = repository.get_value(MAX_VIEWS_KEY).await?;

        debug!(key = MAX_VIEWS_KEY, stored = ?stored, "Loaded preference");

        let (max_views, _) = watch::channel(stored.unwrap_or(DEFAULT_MAX_VIEWS));

        Ok(Self {
            repository,
            max_views,
            write_lock: Mutex::new(()),
        })
    }

    /// 現在値
    pub fn max_views(&self) -> i32 {
        *self.max_views.borrow()
    }

    pub fn observe_max_views(&self) -> WatchStream<i32> {
        WatchStream::new(self.max_views.subscribe())
    }

    pub async fn set_max_views(&self, value: i32) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        self.repository.upsert(MAX_VIEWS_KEY, value).await?;
        let previous = self.max_views.send_replace(value);

        info!(key = MAX_VIEWS_KEY, previous, value, "Preference updated");
        Ok(())
    }

    /// 保存値を削除し、デフォルト値に戻す
    pub async fn clear_max_views(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let removed = self.repository.delete(MAX_VIEWS_KEY).await?;
        self.max_views.send_replace(DEFAULT_MAX_VIEWS);

        info!(key = MAX_VIEWS_KEY, removed, "Preference cleared");
        Ok(())
    }
}
