use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("{0}")]
    Core(#[from] movie_watchlist_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`movie-watchlist config --set-api-key YOUR_KEY` で設定するか TMDB_API_KEY を指定してください")]
    MissingApiKey,

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("選択エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("候補が{0}件あります。`--title` で追加するタイトルを指定してください")]
    TitleRequired(usize),

    #[error("該当する作品がありません: {0}")]
    NoResults(String),
}

pub type Result<T> = std::result::Result<T, WatchlistError>;
