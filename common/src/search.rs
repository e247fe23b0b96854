//! 検索結果の絞り込みとタイトル索引
//!
//! 表示対象は人気度が閾値を超える結果のみ。表示したタイトルだけが
//! 索引に入り、詳細取得・ウォッチリスト追加はこの索引経由でIDを引く。
//! 索引は検索ごとに作り直され、次の検索まで有効。

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::SearchResult;

/// 人気度の閾値（これ以下は表示しない）
pub const POPULARITY_THRESHOLD: f64 = 10.0;

/// 表示対象か
pub fn is_displayed(result: &SearchResult) -> bool {
    result.popularity > POPULARITY_THRESHOLD
}

/// 表示タイトル → 映画ID
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleIndex {
    ids: HashMap<String, u64>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名タイトルは後から来た方で上書き
    pub fn insert(&mut self, title: impl Into<String>, id: u64) {
        self.ids.insert(title.into(), id);
    }

    pub fn get(&self, title: &str) -> Option<u64> {
        self.ids.get(title).copied()
    }

    /// タイトルをIDに解決（未登録なら LookupMiss）
    pub fn resolve(&self, title: &str) -> Result<u64> {
        self.get(title)
            .ok_or_else(|| Error::LookupMiss(title.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// 1回の検索で表示する行と、その行から作った索引
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    rows: Vec<SearchResult>,
    index: TitleIndex,
}

impl SearchPage {
    /// APIの生結果から表示行と索引を作る
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        let mut index = TitleIndex::new();
        let rows: Vec<SearchResult> = results
            .into_iter()
            .filter(is_displayed)
            .inspect(|row| index.insert(row.title.clone(), row.id))
            .collect();

        tracing::debug!(rows = rows.len(), titles = index.len(), "search page built");
        Self { rows, index }
    }

    pub fn rows(&self) -> &[SearchResult] {
        &self.rows
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u64, title: &str, popularity: f64) -> SearchResult {
        SearchResult {
            id,
            title: title.to_string(),
            popularity,
            ..Default::default()
        }
    }

    #[test]
    fn test_only_popular_results_are_shown() {
        let page = SearchPage::from_results(vec![
            result(1, "The Matrix Revisited", 8.0),
            result(603, "The Matrix", 15.0),
        ]);

        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.rows()[0].title, "The Matrix");
        assert_eq!(page.index().get("The Matrix"), Some(603));
    }

    #[test]
    fn test_filtered_titles_are_unresolvable() {
        let page = SearchPage::from_results(vec![result(1, "Obscure", 3.0)]);

        assert!(page.is_empty());
        let err = page.index().resolve("Obscure").unwrap_err();
        assert!(matches!(err, Error::LookupMiss(title) if title == "Obscure"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let page = SearchPage::from_results(vec![
            result(1, "Exactly Ten", 10.0),
            result(2, "Just Above", 10.01),
        ]);

        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.index().get("Exactly Ten"), None);
        assert_eq!(page.index().get("Just Above"), Some(2));
    }

    #[test]
    fn test_duplicate_titles_resolve_to_last() {
        let page = SearchPage::from_results(vec![
            result(10, "Dune", 40.0),
            result(20, "Dune", 30.0),
        ]);

        assert_eq!(page.rows().len(), 2);
        assert_eq!(page.index().len(), 1);
        assert_eq!(page.index().resolve("Dune").unwrap(), 20);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let page = SearchPage::from_results(vec![
            result(3, "C", 50.0),
            result(1, "A", 20.0),
            result(2, "B", 30.0),
        ]);

        let titles: Vec<&str> = page.rows().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }
}
