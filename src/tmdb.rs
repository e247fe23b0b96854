//! TMDB API クライアント（reqwest）

use crate::error::Result;
use movie_watchlist_common::{
    check_status, details_url, parse_details_response, parse_search_response, search_url,
    ApiConfig, Error, SearchResult, TitleIndex,
};
use reqwest::Url;

pub struct TmdbClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl TmdbClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("movie-watchlist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// タイトル検索（絞り込みなしの生結果）
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = search_url(&self.config, query)?;
        let body = self.get_text(url).await?;
        Ok(parse_search_response(&body)?)
    }

    /// 詳細取得
    ///
    /// 索引にないタイトルはリクエストせずに LookupMiss を返す。
    pub async fn fetch_details(&self, index: &TitleIndex, title: &str) -> Result<SearchResult> {
        let id = index.resolve(title)?;
        let url = details_url(&self.config, id)?;
        let body = self.get_text(url).await?;
        Ok(parse_details_response(&body)?)
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        tracing::debug!(path = url.path(), "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

        check_status(status.as_u16(), &body)?;
        Ok(body)
    }
}
