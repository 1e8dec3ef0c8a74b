// src/features/pusher/repository.rs

use crate::error::ApiError;
use crate::features::pusher::api::PusherApi;
use crate::features::pusher::dto::{PushedResource, SubmissionRequest};
use crate::features::pusher::history::{NoopHistory, PushHistory};
use crate::logging::SubmissionContext;
use std::sync::Arc;
use tracing::warn;

/// リモート API と、作成したリンクの記録先をまとめるリポジトリ
///
/// 呼び出し間で可変状態を共有しないため、並行して `submit` してよい。
#[derive(Clone)]
pub struct PwPushRepository {
    api: Arc<dyn PusherApi>,
    history: Arc<dyn PushHistory>,
}

impl PwPushRepository {
    pub fn new(api: Arc<dyn PusherApi>) -> Self {
        Self::with_history(api, Arc::new(NoopHistory))
    }

    pub fn with_history(api: Arc<dyn PusherApi>, history: Arc<dyn PushHistory>) -> Self {
        Self { api, history }
    }

    /// シークレットを送信し、作成されたリソースかエラー分類を返す
    ///
    /// 失敗は常に `Err` の値として返り、パニックはしない。
    pub async fn submit(
        &self,
        secret: &str,
        expiry_days: i32,
        expiry_views: i32,
    ) -> Result<PushedResource, ApiError> {
        let context = SubmissionContext::new(expiry_days, expiry_views);
        context.log_started();

        let result = match SubmissionRequest::new(secret, expiry_days, expiry_views) {
            Ok(request) => self.api.send_password(&request).await,
            Err(err) => Err(err),
        };

        context.log_completed(result.as_ref().map(|resource| resource.id.as_str()));

        if let Ok(resource) = &result {
            // 記録の失敗は送信結果に影響させない
            if let Err(err) = self.history.record(resource).await {
                warn!(
                    submission_id = %context.submission_id,
                    error = %err,
                    "Failed to record pushed resource"
                );
            }
        }

        result
    }
}
