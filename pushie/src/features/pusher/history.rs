// src/features/pusher/history.rs

use crate::error::AppResult;
use crate::features::pusher::dto::PushedResource;
use async_trait::async_trait;

/// 作成したリンクの記録先
///
/// 送信成功時に呼ばれる拡張ポイント。履歴をローカルに保存する実装は
/// 現時点では提供しない。
#[async_trait]
pub trait PushHistory: Send + Sync {
    async fn record(&self, resource: &PushedResource) -> AppResult<()>;
}

/// 何も記録しないデフォルト実装
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHistory;

#[async_trait]
impl PushHistory for NoopHistory {
    async fn record(&self, _resource: &PushedResource) -> AppResult<()> {
        Ok(())
    }
}
