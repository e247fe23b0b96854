//! 映画メタデータAPI（TMDB v3）のリクエスト組み立てとレスポンス解析
//!
//! 通信そのものは各フロントエンド（CLI: reqwest / Web: fetch）が行う。

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{SearchResponse, SearchResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// API接続設定
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub api_key: String,
    pub language: String,
    pub base_url: String,
    pub include_adult: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            include_adult: false,
        }
    }
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    fn endpoint(&self, path: &str) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), path))
    }
}

/// タイトル検索URL
pub fn search_url(config: &ApiConfig, query: &str) -> Result<Url> {
    let endpoint = config.endpoint("search/movie")?;
    let include_adult = if config.include_adult { "true" } else { "false" };
    let url = Url::parse_with_params(
        &endpoint,
        &[
            ("api_key", config.api_key.as_str()),
            ("language", config.language.as_str()),
            ("query", query),
            ("page", "1"),
            ("include_adult", include_adult),
        ],
    )?;
    Ok(url)
}

/// 詳細取得URL
pub fn details_url(config: &ApiConfig, id: u64) -> Result<Url> {
    let endpoint = config.endpoint(&format!("movie/{}", id))?;
    let url = Url::parse_with_params(
        &endpoint,
        &[
            ("api_key", config.api_key.as_str()),
            ("language", config.language.as_str()),
        ],
    )?;
    Ok(url)
}

/// エラー応答の本文
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status_message: String,
}

/// HTTPステータスを検査（2xx以外は Network）
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.status_message)
        .unwrap_or_default();
    if message.is_empty() {
        Err(Error::Network(format!("HTTP {}", status)))
    } else {
        Err(Error::Network(format!("HTTP {}: {}", status, message)))
    }
}

/// 検索レスポンスを解析（絞り込みはしない）
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResult>> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.results)
        .map_err(|e| Error::MalformedResponse(e.to_string()))
}

/// 詳細レスポンスを解析
pub fn parse_details_response(body: &str) -> Result<SearchResult> {
    serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))
}
