//! Movie Watch List Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod api;
pub mod details;
pub mod error;
pub mod format;
pub mod search;
pub mod sequence;
pub mod store;
pub mod types;

pub use api::{ApiConfig, check_status, details_url, parse_details_response, parse_search_response, search_url};
pub use details::{DetailPanel, DetailPanels, RowState, Toggle};
pub use error::{Error, Result};
pub use format::{format_rating, format_revenue, format_runtime, format_year, release_year};
pub use search::{POPULARITY_THRESHOLD, SearchPage, TitleIndex, is_displayed};
pub use sequence::{RequestSequence, Ticket};
pub use store::{KeyValueStore, MemoryStore, WATCHLIST_KEY, WatchListStore};
pub use types::{SearchResponse, SearchResult, WatchListEntry};
