// pushie/src/utils/validation.rs

//! 送信パラメータのバリデーション定数とヘルパー
//!
//! スライダーの範囲とクライアント側の検証で同じ定数を使う。

use validator::ValidationErrors;

/// 有効期限（日数）の制約
pub mod expiry_days {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 90;
    pub const DEFAULT: i32 = 7;
}

/// 有効期限（閲覧回数）の制約
pub mod expiry_views {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 100;
}

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

/// 日数をスライダー範囲に収める
pub fn clamp_days(days: i32) -> i32 {
    days.clamp(expiry_days::MIN, expiry_days::MAX)
}

/// 閲覧回数をスライダー範囲に収める
pub fn clamp_views(views: i32) -> i32 {
    views.clamp(expiry_views::MIN, expiry_views::MAX)
}

/// validator のエラーを "field: message" 形式の一覧に変換する
///
/// フィールド名でソートして返す（HashMap の順序に依存しない）。
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| "Invalid value".to_string(), |cow| cow.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();
    messages
}
