use crate::error::ApiError;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};

/// サービスが作成したプッシュ（共有リンク）の情報
///
/// 受信したフィールドは書き換えない。型が想定どおりの既知フィールドだけを
/// 取り出し、それ以外（想定外の型の値を含む）は `extra` にそのまま残る。
#[derive(Debug, Clone, PartialEq)]
pub struct PushedResource {
    /// pwpush の `url_token`。無い場合のみ文字列の `id`
    pub id: String,
    pub created_at: Option<String>,
    pub expire_after_days: Option<i32>,
    pub expire_after_views: Option<i32>,
    pub days_remaining: Option<i32>,
    pub views_remaining: Option<i32>,
    pub expired: Option<bool>,
    pub deleted: Option<bool>,
    pub extra: Map<String, Value>,
}

impl PushedResource {
    /// 成功レスポンスのボディを解析する
    ///
    /// 識別子が取れない場合だけ失敗する。メタデータの型違いでは失敗しない。
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        let mut fields: Map<String, Value> = serde_json::from_slice(body)
            .map_err(|e| ApiError::InvalidResponse(format!("unparsable body: {}", e)))?;

        let id = take_identifier(&mut fields).ok_or_else(|| {
            ApiError::InvalidResponse("response carried no identifier".to_string())
        })?;
        if id.trim().is_empty() {
            return Err(ApiError::InvalidResponse(
                "response carried an empty identifier".to_string(),
            ));
        }

        Ok(Self {
            id,
            created_at: take_as(&mut fields, "created_at", |v| v.as_str().map(str::to_string)),
            expire_after_days: take_as(&mut fields, "expire_after_days", as_i32),
            expire_after_views: take_as(&mut fields, "expire_after_views", as_i32),
            days_remaining: take_as(&mut fields, "days_remaining", as_i32),
            views_remaining: take_as(&mut fields, "views_remaining", as_i32),
            expired: take_as(&mut fields, "expired", Value::as_bool),
            deleted: take_as(&mut fields, "deleted", Value::as_bool),
            extra: fields,
        })
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// 共有リンク `{base_url}/p/{id}`
    ///
    /// `id` がすでに絶対 URL の場合はそのまま返す。
    pub fn share_url(&self, base_url: &Url) -> String {
        if self.id.starts_with("http://") || self.id.starts_with("https://") {
            return self.id.clone();
        }
        format!("{}/p/{}", base_url.as_str().trim_end_matches('/'), self.id)
    }
}

// url_token を優先し、無ければ文字列の id を使う。選ばれなかった方は extra に残る
fn take_identifier(fields: &mut Map<String, Value>) -> Option<String> {
    ["url_token", "id"]
        .into_iter()
        .find_map(|key| take_as(fields, key, |v| v.as_str().map(str::to_string)))
}

/// 変換できた場合だけ `fields` から取り除く
fn take_as<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let converted = fields.get(key).and_then(convert)?;
    fields.remove(key);
    Some(converted)
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

const MAX_MESSAGE_LEN: usize = 200;

/// エラーレスポンスから表示用メッセージを取り出す
pub fn rejection_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ServiceErrorBody>(body) {
        let error = match parsed.error {
            Some(Value::String(error)) => Some(error),
            Some(Value::Null) | None => None,
            Some(error) => Some(error.to_string()),
        };
        // 空文字は無いものとして次の候補へ
        if let Some(text) = [error, parsed.message]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
        {
            return text;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    text.chars().take(MAX_MESSAGE_LEN).collect()
}
