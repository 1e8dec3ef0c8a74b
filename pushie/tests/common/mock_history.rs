// tests/common/mock_history.rs

use async_trait::async_trait;
use pushie::error::AppResult;
use pushie::features::pusher::{PushHistory, PushedResource};
use std::sync::{Arc, Mutex};

/// テスト用の履歴記録（メモリ上に保持するだけ）
#[derive(Clone, Default)]
pub struct MockHistory {
    records: Arc<Mutex<Vec<PushedResource>>>,
}

impl MockHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|resource| resource.id.clone())
            .collect()
    }
}

#[async_trait]
impl PushHistory for MockHistory {
    async fn record(&self, resource: &PushedResource) -> AppResult<()> {
        self.records.lock().unwrap().push(resource.clone());
        Ok(())
    }
}
