//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Storage corruption: {0}")]
    StorageCorruption(String),

    #[error("Title not found in the last search: {0}")]
    LookupMiss(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("API key is not set")]
    MissingApiKey,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lookup_miss() {
        let error = Error::LookupMiss("Dune".to_string());
        assert_eq!(format!("{}", error), "Title not found in the last search: Dune");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("HTTP 401".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("401"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_from_url() {
        let url_error = url::Url::parse("not a url").unwrap_err();
        let error: Error = url_error.into();
        assert!(matches!(error, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::StorageCorruption("expected value".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("StorageCorruption"));
        assert!(debug.contains("expected value"));
    }
}
