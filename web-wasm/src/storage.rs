//! localStorage への保存

use gloo::storage::{LocalStorage, Storage};
use movie_watchlist_common::{Error, KeyValueStore, Result, WatchListStore};

/// APIキーの保存キー
const API_KEY_STORAGE_KEY: &str = "tmdb_api_key";

/// ブラウザの localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl KeyValueStore for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// ウォッチリストストア（状態を持たないので都度作ってよい）
pub fn watch_list() -> WatchListStore<LocalStorageBackend> {
    WatchListStore::new(LocalStorageBackend)
}

/// 保存済みAPIキー。なければビルド時の TMDB_API_KEY
pub fn load_api_key() -> String {
    LocalStorage::get::<String>(API_KEY_STORAGE_KEY)
        .ok()
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| option_env!("TMDB_API_KEY").unwrap_or_default().to_string())
}

pub fn save_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        LocalStorage::delete(API_KEY_STORAGE_KEY);
        return Ok(());
    }
    LocalStorage::set(API_KEY_STORAGE_KEY, api_key).map_err(|e| Error::Storage(e.to_string()))
}
