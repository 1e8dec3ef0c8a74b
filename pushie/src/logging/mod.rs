// src/logging/mod.rs

use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

pub const DEFAULT_FILTER: &str = "pushie=info";

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {
                tracing::trace!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
        }
    };
}

/// グローバルな tracing subscriber を初期化する
///
/// `RUST_LOG` が設定されていればそちらを優先する。二回目以降の呼び出しは
/// 何もせず `false` を返す。
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .try_init()
        .is_ok()
}

// 送信ごとのログコンテキスト（シークレットは含めない）
#[derive(Clone, Debug)]
pub struct SubmissionContext {
    pub submission_id: Uuid,
    pub expiry_days: i32,
    pub expiry_views: i32,
    started: Instant,
}

impl SubmissionContext {
    pub fn new(expiry_days: i32, expiry_views: i32) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            expiry_days,
            expiry_views,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn log_started(&self) {
        log_with_context!(
            tracing::Level::INFO,
            "Submission started",
            "submission_id" => self.submission_id,
            "expiry_days" => self.expiry_days,
            "expiry_views" => self.expiry_views,
        );
    }

    /// 結果に応じてログレベルを切り替える
    pub fn log_completed(&self, outcome: Result<&str, &crate::error::ApiError>) {
        let duration_ms = self.elapsed().as_millis();
        match outcome {
            Ok(resource_id) => log_with_context!(
                tracing::Level::INFO,
                "Submission completed",
                "submission_id" => self.submission_id,
                "resource_id" => resource_id,
                "duration_ms" => duration_ms,
            ),
            Err(err) => log_with_context!(
                match err {
                    crate::error::ApiError::InvalidRequest(_) => tracing::Level::WARN,
                    _ => tracing::Level::ERROR,
                },
                "Submission failed",
                "submission_id" => self.submission_id,
                "error_kind" => err.kind(),
                "error" => err.to_string(),
                "duration_ms" => duration_ms,
            ),
        }
    }
}
