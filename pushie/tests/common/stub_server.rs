// tests/common/stub_server.rs

//! Password Pusher の `POST /p.json` を真似るスタブサーバー

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use reqwest::Url;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum StubResponse {
    /// 固定のステータスとボディを返す
    Fixed(StatusCode, String),
    /// 受け取った payload を url_token として返す
    Echo,
    /// 指定時間待ってから成功レスポンスを返す
    Delayed(Duration),
    /// 毎回別の URL へ 307 で転送し続ける
    EndlessRedirect,
}

#[derive(Clone)]
struct StubState {
    response: StubResponse,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct StubServer {
    pub base_url: Url,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    pub async fn start(response: StubResponse) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            response,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/p.json", post(push_handler))
            .with_state(state);

        // テストサーバーを起動
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(addr).await.unwrap();
        let actual_addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .await
                .unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{}", actual_addr)).unwrap(),
            received,
        }
    }

    pub async fn fixed(status: StatusCode, body: &str) -> Self {
        Self::start(StubResponse::Fixed(status, body.to_string())).await
    }

    /// 受信したリクエストボディ
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn push_handler(State(state): State<StubState>, body: String) -> Response {
    let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let hops = {
        let mut received = state.received.lock().unwrap();
        received.push(parsed.clone());
        received.len()
    };

    let (status, body) = match state.response {
        StubResponse::Fixed(status, body) => (status, body),
        StubResponse::Echo => {
            let token = parsed["password"]["payload"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            (
                StatusCode::CREATED,
                json!({
                    "url_token": token,
                    "expire_after_days": parsed["password"]["expire_after_days"],
                    "expire_after_views": parsed["password"]["expire_after_views"],
                    "expired": false,
                    "deleted": false,
                })
                .to_string(),
            )
        }
        StubResponse::Delayed(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::CREATED, json!({ "url_token": "late" }).to_string())
        }
        StubResponse::EndlessRedirect => {
            let location = format!("/p.json?hop={}", hops);
            return (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response();
        }
    };

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// 何も待ち受けていないアドレス
pub async fn closed_base_url() -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}
