//! ウォッチリストの永続化
//!
//! 1つのキーにJSON配列として全件を保存する。更新は毎回
//! 全件読み込み → 変更 → 全件書き戻し。

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::WatchListEntry;

/// ウォッチリストの保存キー
pub const WATCHLIST_KEY: &str = "movies";

/// 文字列のキー・バリューストア（localStorage 相当）
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// ウォッチリストストア
#[derive(Debug, Clone)]
pub struct WatchListStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> WatchListStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, WATCHLIST_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// 全件取得（保存内容が壊れていれば StorageCorruption）
    pub fn try_list_all(&self) -> Result<Vec<WatchListEntry>> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::StorageCorruption(e.to_string())),
        }
    }

    /// 全件取得（読めない場合は空として扱う）
    pub fn list_all(&self) -> Vec<WatchListEntry> {
        match self.try_list_all() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "watch list unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// 更新前の読み込み
    ///
    /// 壊れた内容だけ空として扱い、読み込み自体の失敗はそのまま返す。
    fn load_for_update(&self) -> Result<Vec<WatchListEntry>> {
        match self.try_list_all() {
            Err(Error::StorageCorruption(e)) => {
                tracing::warn!(key = %self.key, error = %e, "overwriting corrupted watch list");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// 末尾に追加（重複チェックなし）
    pub fn append(&self, entry: WatchListEntry) -> Result<()> {
        let mut entries = self.load_for_update()?;
        entries.push(entry);
        self.write_all(&entries)
    }

    /// タイトルが一致するものを全件削除し、削除件数を返す
    pub fn remove_by_title(&self, title: &str) -> Result<usize> {
        let entries = self.load_for_update()?;
        let before = entries.len();
        let kept: Vec<WatchListEntry> = entries
            .into_iter()
            .filter(|entry| entry.title != title)
            .collect();
        let removed = before - kept.len();

        self.write_all(&kept)?;
        tracing::debug!(title, removed, "removed from watch list");
        Ok(removed)
    }

    fn write_all(&self, entries: &[WatchListEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.backend.set_item(&self.key, &json)
    }
}
