// src/error.rs

use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// パスワード送信の失敗分類
///
/// 送信処理の失敗は必ずこの値として呼び出し元に返される。
/// リトライ状態は持たない（1回の呼び出しにつき1回の失敗）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Could not reach the password service: {0}")]
    NetworkUnreachable(String),

    #[error("Unexpected response from the password service: {0}")]
    InvalidResponse(String),

    #[error("Password service rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Invalid submission: {}", .0.join(", "))]
    InvalidRequest(Vec<String>),

    #[error("Unclassified error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// UI 側でエラー種別を出し分けるための短い識別子
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NetworkUnreachable(_) => "network_unreachable",
            ApiError::InvalidResponse(_) => "invalid_response",
            ApiError::ServerRejected { .. } => "server_rejected",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Unknown(_) => "unknown",
        }
    }
}

// reqwest のエラーを送信エラーへ分類する
//
// ステータスとボディは api.rs が自前で読むため、ここに来るのは送受信そのものの失敗だけ
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            return ApiError::NetworkUnreachable(err.to_string());
        }
        // リダイレクト上限・ビルダーなど
        ApiError::Unknown(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidRequest(crate::utils::validation::flatten_errors(&errors))
    }
}

/// 設定ストアの永続化エラー
///
/// 「未設定」とは区別して扱い、デフォルト値へのフォールバックはしない。
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Preference database error: {0}")]
    Database(#[from] DbErr),

    #[error("Preference schema migration failed: {0}")]
    Migration(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Storage(StorageError::Database(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
