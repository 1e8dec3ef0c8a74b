// src/features/pusher/api.rs

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::features::pusher::dto::{rejection_message, PushedResource, SubmissionRequest};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use tracing::debug;

/// パスワード共有サービスのリモート API
#[async_trait]
pub trait PusherApi: Send + Sync {
    /// 1回のリクエストでパスワードを送信する（リトライなし）
    async fn send_password(&self, request: &SubmissionRequest)
        -> Result<PushedResource, ApiError>;
}

/// Password Pusher の JSON API クライアント
#[derive(Clone)]
pub struct PwPushApi {
    client: Client,
    endpoint: String,
}

impl PwPushApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &Url) -> Self {
        let endpoint = format!("{}/p.json", base_url.as_str().trim_end_matches('/'));
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PusherApi for PwPushApi {
    async fn send_password(
        &self,
        request: &SubmissionRequest,
    ) -> Result<PushedResource, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&request.to_payload())
            .send()
            .await?;

        let status = response.status();
        // ボディの途中切断も到達不能として扱う
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkUnreachable(e.to_string()))?;

        debug!(status = status.as_u16(), body_len = body.len(), "pwpush responded");

        if !status.is_success() {
            return Err(ApiError::ServerRejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        PushedResource::from_slice(&body)
    }
}
