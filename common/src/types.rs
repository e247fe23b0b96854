//! 映画データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SearchResult: 検索結果・詳細取得の1件
//! - SearchResponse: 検索APIのレスポンス
//! - WatchListEntry: ウォッチリストに保存される1件

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::release_year;

/// `null` を既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 検索結果（詳細APIのレスポンスも同じ型で受ける）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,

    /// 検索APIでは返らない（詳細APIのみ）
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,

    /// 分。検索APIでは返らない
    #[serde(default, deserialize_with = "null_as_default")]
    pub runtime: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

/// 検索APIレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub results: Vec<SearchResult>,

    #[serde(default)]
    pub total_results: u64,
}

/// ウォッチリストの1件
///
/// 古い保存データ（フィールド欠落・余分なフィールド）も読めるよう全項目 default。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,

    #[serde(deserialize_with = "null_as_default")]
    pub vote_average: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub runtime: u32,

    #[serde(deserialize_with = "null_as_default")]
    pub revenue: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,

    #[serde(deserialize_with = "null_as_default")]
    pub popularity: f64,
}

impl WatchListEntry {
    /// 公開年（日付が読めなければNone）
    pub fn release_year(&self) -> Option<i32> {
        release_year(&self.release_date)
    }
}

impl From<SearchResult> for WatchListEntry {
    fn from(movie: SearchResult) -> Self {
        Self {
            id: Some(movie.id),
            title: movie.title,
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            runtime: movie.runtime,
            revenue: movie.revenue,
            overview: movie.overview,
            popularity: movie.popularity,
        }
    }
}
