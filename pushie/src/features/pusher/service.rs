// src/features/pusher/service.rs

use crate::features::preferences::PrefsStorage;
use crate::features::pusher::repository::PwPushRepository;
use crate::features::pusher::view_state::{PusherEvent, ViewState};
use reqwest::Url;
use std::sync::Arc;

/// 送信画面のユースケース
pub struct PusherService {
    repository: PwPushRepository,
    prefs: Arc<PrefsStorage>,
    base_url: Url,
}

impl PusherService {
    pub fn new(repository: PwPushRepository, prefs: Arc<PrefsStorage>, base_url: Url) -> Self {
        Self {
            repository,
            prefs,
            base_url,
        }
    }

    /// 保存済みの閲覧回数で初期状態を作る
    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.prefs.max_views())
    }

    pub fn reduce(&self, state: ViewState, event: PusherEvent) -> ViewState {
        state.apply(event, &self.base_url)
    }

    /// 送信して結果を反映した状態を返す
    ///
    /// 送信できない状態（読み込み中・パスワード未入力）ならそのまま返す。
    pub async fn send(&self, state: ViewState) -> ViewState {
        let Some(pending) = state.submission() else {
            return state;
        };

        let state = self.reduce(state, PusherEvent::SendRequested);
        let result = self
            .repository
            .submit(&pending.secret, pending.expiry_days, pending.expiry_views)
            .await;

        self.reduce(state, PusherEvent::SendFinished(result))
    }
}
