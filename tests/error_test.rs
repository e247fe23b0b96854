//! エラーケーステスト

use movie_watchlist::config::Config;
use movie_watchlist::error::WatchlistError;
use movie_watchlist_common::{Error, TitleIndex};

/// 索引にないタイトルはIDに解決できない
#[test]
fn test_lookup_miss_is_reported() {
    let index = TitleIndex::new();
    let err: WatchlistError = index.resolve("Never Searched").unwrap_err().into();
    assert!(matches!(err, WatchlistError::Core(Error::LookupMiss(_))));
    assert!(err.to_string().contains("Never Searched"));
}

/// APIキーなしでは接続設定を作れない
#[test]
fn test_missing_api_key() {
    std::env::remove_var("TMDB_API_KEY");
    let config = Config::default();
    assert!(matches!(config.api_config(), Err(WatchlistError::MissingApiKey)));
}

/// WatchlistErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        WatchlistError::Config("テスト設定エラー".to_string()),
        WatchlistError::NoResults("zzzz".to_string()),
        WatchlistError::Core(Error::Network("HTTP 500".to_string())),
        WatchlistError::MissingApiKey,
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty());
    }
}

#[test]
fn test_core_error_passthrough() {
    let err: WatchlistError = Error::StorageCorruption("expected value".to_string()).into();
    assert_eq!(err.to_string(), "Storage corruption: expected value");
}
