//! TMDB API呼び出し（fetch）
//!
//! - search: タイトル検索（絞り込みなしの生結果）
//! - fetch_details: 直前の検索の索引でタイトルをIDに解決して詳細を取得

use movie_watchlist_common::{
    check_status, details_url, search_url, ApiConfig, Error, Result, SearchResponse, SearchResult,
    TitleIndex,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn network_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

/// GETしてJSONを型に変換（共通処理）
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        check_status(resp.status(), &body)?;
    }

    let json = JsFuture::from(resp.json().map_err(network_error)?)
        .await
        .map_err(|e| Error::MalformedResponse(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::MalformedResponse(e.to_string()))
}

/// タイトル検索
pub async fn search(config: &ApiConfig, query: &str) -> Result<Vec<SearchResult>> {
    let url = search_url(config, query)?;
    let response: SearchResponse = get_json(url.as_str()).await?;
    Ok(response.results)
}

/// 詳細取得
///
/// 索引にないタイトルはリクエストせずに LookupMiss を返す。
pub async fn fetch_details(config: &ApiConfig, index: &TitleIndex, title: &str) -> Result<SearchResult> {
    let id = index.resolve(title)?;
    let url = details_url(config, id)?;
    get_json(url.as_str()).await
}
