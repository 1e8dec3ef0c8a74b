// src/features/pusher/view_state.rs

//! 送信画面の状態
//!
//! 状態は不変の値として扱い、入力イベントを適用して次の状態を作る。
//! 描画側はこの値を受け取って表示するだけにする。

use crate::error::ApiError;
use crate::features::pusher::dto::PushedResource;
use crate::utils::validation::{clamp_days, clamp_views, expiry_days};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum PushOutcome {
    Created { id: String, url: String },
    Failed { kind: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub enum PusherEvent {
    PasswordChanged(String),
    ExpiryDaysChanged(i32),
    ExpiryViewsChanged(i32),
    /// 設定ストアから閲覧回数のデフォルト値が届いた
    MaxViewsLoaded(i32),
    SendRequested,
    SendFinished(Result<PushedResource, ApiError>),
}

/// 送信に使うパラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub secret: String,
    pub expiry_days: i32,
    pub expiry_views: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub password_text: String,
    pub expiry_days: i32,
    pub expiry_views: i32,
    pub is_loading: bool,
    pub outcome: Option<PushOutcome>,
    views_touched: bool,
}

impl ViewState {
    pub fn new(default_views: i32) -> Self {
        Self {
            password_text: String::new(),
            expiry_days: expiry_days::DEFAULT,
            expiry_views: clamp_views(default_views),
            is_loading: false,
            outcome: None,
            views_touched: false,
        }
    }

    /// 送信可能なら送信パラメータを返す
    pub fn submission(&self) -> Option<PendingSubmission> {
        if self.is_loading || self.password_text.is_empty() {
            return None;
        }
        Some(PendingSubmission {
            secret: self.password_text.clone(),
            expiry_days: self.expiry_days,
            expiry_views: self.expiry_views,
        })
    }

    /// イベントを適用した次の状態を返す
    ///
    /// `SendFinished` の成功時に共有リンクを組み立てるため、ベース URL を受け取る。
    pub fn apply(self, event: PusherEvent, base_url: &Url) -> Self {
        match event {
            PusherEvent::PasswordChanged(password_text) => Self {
                password_text,
                ..self
            },
            PusherEvent::ExpiryDaysChanged(days) => Self {
                expiry_days: clamp_days(days),
                ..self
            },
            PusherEvent::ExpiryViewsChanged(views) => Self {
                expiry_views: clamp_views(views),
                views_touched: true,
                ..self
            },
            // ユーザーが手で動かした後は上書きしない
            PusherEvent::MaxViewsLoaded(views) if !self.views_touched && !self.is_loading => {
                Self {
                    expiry_views: clamp_views(views),
                    ..self
                }
            }
            PusherEvent::MaxViewsLoaded(_) => self,
            PusherEvent::SendRequested => {
                if self.submission().is_none() {
                    return self;
                }
                Self {
                    is_loading: true,
                    outcome: None,
                    ..self
                }
            }
            PusherEvent::SendFinished(Ok(resource)) => Self {
                password_text: String::new(),
                is_loading: false,
                outcome: Some(PushOutcome::Created {
                    url: resource.share_url(base_url),
                    id: resource.id,
                }),
                ..self
            },
            PusherEvent::SendFinished(Err(err)) => Self {
                is_loading: false,
                outcome: Some(PushOutcome::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                }),
                ..self
            },
        }
    }
}
