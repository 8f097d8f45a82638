//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 入力バリデーション失敗。メッセージはそのままユーザーへ表示される
    #[error("{0}")]
    Validation(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_validation() {
        // バリデーションエラーはメッセージをそのまま表示する
        let error = Error::Validation("Enter valid Name and 12-digit Aadhaar".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Enter valid Name and 12-digit Aadhaar");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("テスト"));
    }
}
