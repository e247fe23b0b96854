use crate::error::{Result, WatchlistError};
use movie_watchlist_common::api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub language: String,
    pub api_base_url: String,
    /// ウォッチリストの保存先（未指定ならデータディレクトリ）
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            language: DEFAULT_LANGUAGE.into(),
            api_base_url: DEFAULT_BASE_URL.into(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WatchlistError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("movie-watchlist").join("config.json"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| WatchlistError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("movie-watchlist"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(WatchlistError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn api_config(&self) -> Result<ApiConfig> {
        Ok(ApiConfig {
            api_key: self.get_api_key()?,
            language: self.language.clone(),
            base_url: self.api_base_url.clone(),
            include_adult: false,
        })
    }
}
