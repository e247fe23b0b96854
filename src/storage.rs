//! ファイルによるキー・バリューストア
//!
//! キーごとに `<dir>/<key>.json` を1ファイル持つ。ブラウザの localStorage と同じく
//! 値は文字列のまま保存し、解釈は呼び出し側（WatchListStore）が行う。

use movie_watchlist_common::{Error, KeyValueStore, Result, WatchListStore};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Storage(format!("{}: {}", self.dir.display(), e)))?;

        // 一時ファイルに書いてから置き換える
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|_| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                let _ = std::fs::remove_file(&tmp);
                Error::Storage(format!("{}: {}", path.display(), e))
            })
    }
}

/// データディレクトリ上のウォッチリスト
pub fn open_watch_list(dir: impl Into<PathBuf>) -> WatchListStore<FileStore> {
    WatchListStore::new(FileStore::new(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());
        assert_eq!(store.get_item("movies").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path().join("data"));

        store.set_item("movies", "[]").unwrap();
        assert_eq!(store.get_item("movies").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("data").join("movies.json").exists());
        assert!(!dir.path().join("data").join("movies.json.tmp").exists());
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        // 置き換え先がディレクトリだと rename は失敗する
        std::fs::create_dir(dir.path().join("movies.json")).unwrap();
        let store = FileStore::new(dir.path());

        let result = store.set_item("movies", "[]");

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(!dir.path().join("movies.json.tmp").exists());
    }

    #[test]
    fn test_overwrite() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());

        store.set_item("movies", "[1]").unwrap();
        store.set_item("movies", "[2]").unwrap();
        assert_eq!(store.get_item("movies").unwrap().as_deref(), Some("[2]"));
    }
}
