use crate::error::ApiError;
use crate::utils::validation::{expiry_days, expiry_views, required};
use serde::Serialize;
use std::fmt;
use validator::Validate;

/// パスワード送信リクエスト
///
/// 送信ごとに新しく作成し、永続化はしない。
#[derive(Clone, Validate)]
pub struct SubmissionRequest {
    #[validate(length(min = required::MIN_LENGTH, message = "Secret is required"))]
    pub secret: String,

    #[validate(range(
        min = expiry_days::MIN,
        max = expiry_days::MAX,
        message = "Expiry days must be between 1 and 90"
    ))]
    pub expiry_days: i32,

    #[validate(range(
        min = expiry_views::MIN,
        max = expiry_views::MAX,
        message = "Expiry views must be between 1 and 100"
    ))]
    pub expiry_views: i32,
}

impl SubmissionRequest {
    /// 範囲外の値は送信前に `ApiError::InvalidRequest` で拒否する
    pub fn new(
        secret: impl Into<String>,
        expiry_days: i32,
        expiry_views: i32,
    ) -> Result<Self, ApiError> {
        let request = Self {
            secret: secret.into(),
            expiry_days,
            expiry_views,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn to_payload(&self) -> PushPayload<'_> {
        PushPayload {
            password: PasswordPayload {
                payload: &self.secret,
                expire_after_days: self.expiry_days,
                expire_after_views: self.expiry_views,
            },
        }
    }
}

// シークレットはログに出さない
impl fmt::Debug for SubmissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionRequest")
            .field("secret", &"<redacted>")
            .field("expiry_days", &self.expiry_days)
            .field("expiry_views", &self.expiry_views)
            .finish()
    }
}

/// `POST /p.json` のリクエストボディ
#[derive(Serialize)]
pub struct PushPayload<'a> {
    pub password: PasswordPayload<'a>,
}

#[derive(Serialize)]
pub struct PasswordPayload<'a> {
    pub payload: &'a str,
    pub expire_after_days: i32,
    pub expire_after_views: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = SubmissionRequest::new("s3cr3t", 7, 5).unwrap();
        assert_eq!(request.secret, "s3cr3t");
        assert_eq!(request.expiry_days, 7);
        assert_eq!(request.expiry_views, 5);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SubmissionRequest::new("x", 1, 1).is_ok());
        assert!(SubmissionRequest::new("x", 90, 100).is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for (days, views) in [(0, 5), (91, 5), (7, 0), (7, 101), (-1, -1)] {
            let result = SubmissionRequest::new("x", days, views);
            assert!(
                matches!(result, Err(ApiError::InvalidRequest(_))),
                "days={} views={} should be rejected",
                days,
                views
            );
        }
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        match SubmissionRequest::new("", 7, 5) {
            Err(ApiError::InvalidRequest(errors)) => {
                assert_eq!(errors, vec!["secret: Secret is required".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_all_violations_are_reported() {
        match SubmissionRequest::new("", 0, 0) {
            Err(ApiError::InvalidRequest(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].starts_with("expiry_days:"));
                assert!(errors[1].starts_with("expiry_views:"));
                assert!(errors[2].starts_with("secret:"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let request = SubmissionRequest::new("hunter2", 7, 5).unwrap();
        let debug = format!("{:?}", request);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_payload_shape() {
        let request = SubmissionRequest::new("s3cr3t", 7, 5).unwrap();
        let json = serde_json::to_value(request.to_payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "password": {
                    "payload": "s3cr3t",
                    "expire_after_days": 7,
                    "expire_after_views": 5
                }
            })
        );
    }
}
