// src/config.rs
use crate::error::{AppError, AppResult};
use dotenvy::dotenv;
use reqwest::Url;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://pwpush.com";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pushie.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    /// Password Pusher のベース URL
    pub base_url: Url,
    /// 設定ストアの接続先
    pub database_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let base_url =
            env::var("PWPUSH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let database_url =
            env::var("PUSHIE_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let user_agent = env::var("PUSHIE_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self::new(&base_url, database_url, user_agent)
    }

    pub fn new(base_url: &str, database_url: String, user_agent: String) -> AppResult<Self> {
        let base_url = parse_base_url(base_url)?;

        if database_url.trim().is_empty() {
            return Err(AppError::Config("database url must not be empty".to_string()));
        }

        Ok(Config {
            base_url,
            database_url,
            user_agent,
        })
    }
}

fn default_user_agent() -> String {
    format!("pushie/{}", env!("CARGO_PKG_VERSION"))
}

// 末尾スラッシュは取り除いてからパスを連結する
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| AppError::Config(format!("invalid PWPUSH_BASE_URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Config(format!(
            "unsupported scheme '{}' in PWPUSH_BASE_URL",
            other
        ))),
    }
}
