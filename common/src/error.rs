//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Query error: {0}")]
    Query(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 画面状態に保持するためのエラー（Clone/比較可能）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FineError {
    pub message: String,
}

impl From<Error> for FineError {
    fn from(error: Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", error), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("storage_keyが空です".to_string());
        assert_eq!(format!("{}", error), "Config error: storage_keyが空です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_fine_error_keeps_message() {
        let error: FineError = Error::Query("timeout".to_string()).into();
        assert_eq!(error.message, "Query error: timeout");
        assert_eq!(error.clone(), error);
    }
}
