//! 検索結果行の詳細パネル
//!
//! 行ごとに Collapsed / Expanded の2状態を持つ。パネルは1行につき1つだけ作られ、
//! 折りたたみは非表示にするだけで削除しない。再展開では既存のパネルを使う。

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::types::SearchResult;

/// 行の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Collapsed,
    Expanded,
}

/// タイトルクリック時の遷移結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// 展開中だったので閉じた
    Collapsed,
    /// 既存パネルを再表示した
    Expanded,
    /// パネル未作成。詳細を取得して `attach` すること
    NeedsDetails,
}

/// 詳細パネル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanel {
    pub state: RowState,
    pub details: SearchResult,
}

impl DetailPanel {
    pub fn is_expanded(&self) -> bool {
        self.state == RowState::Expanded
    }
}

/// 映画ID → 詳細パネル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanels {
    panels: HashMap<u64, DetailPanel>,
}

impl DetailPanels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: u64) -> RowState {
        self.panels
            .get(&id)
            .map(|panel| panel.state)
            .unwrap_or_default()
    }

    pub fn panel(&self, id: u64) -> Option<&DetailPanel> {
        self.panels.get(&id)
    }

    pub fn toggle(&mut self, id: u64) -> Toggle {
        match self.panels.get_mut(&id) {
            Some(panel) if panel.is_expanded() => {
                panel.state = RowState::Collapsed;
                Toggle::Collapsed
            }
            Some(panel) => {
                panel.state = RowState::Expanded;
                Toggle::Expanded
            }
            None => Toggle::NeedsDetails,
        }
    }

    /// 取得した詳細でパネルを作って展開する
    ///
    /// 既にパネルがあれば作り直さずに展開だけ行い、falseを返す。
    pub fn attach(&mut self, id: u64, details: SearchResult) -> bool {
        match self.panels.entry(id) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().state = RowState::Expanded;
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(DetailPanel {
                    state: RowState::Expanded,
                    details,
                });
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(id: u64, title: &str) -> SearchResult {
        SearchResult {
            id,
            title: title.to_string(),
            runtime: 136,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_click_needs_details() {
        let mut panels = DetailPanels::new();
        assert_eq!(panels.toggle(603), Toggle::NeedsDetails);
        assert_eq!(panels.state(603), RowState::Collapsed);
        assert!(panels.is_empty());
    }

    #[test]
    fn test_expand_then_collapse_restores_state() {
        let mut panels = DetailPanels::new();
        assert!(panels.attach(603, details(603, "The Matrix")));
        assert_eq!(panels.state(603), RowState::Expanded);

        assert_eq!(panels.toggle(603), Toggle::Collapsed);
        assert_eq!(panels.state(603), RowState::Collapsed);
        // 非表示になるだけでパネルは残る
        assert_eq!(panels.len(), 1);
    }

    #[test]
    fn test_reexpand_reuses_panel() {
        let mut panels = DetailPanels::new();
        panels.attach(603, details(603, "The Matrix"));
        panels.toggle(603);

        assert_eq!(panels.toggle(603), Toggle::Expanded);
        assert_eq!(panels.len(), 1);
        assert_eq!(panels.panel(603).unwrap().details.title, "The Matrix");
    }

    #[test]
    fn test_double_attach_keeps_single_panel() {
        let mut panels = DetailPanels::new();
        assert!(panels.attach(603, details(603, "The Matrix")));
        assert!(!panels.attach(603, details(603, "Changed")));

        assert_eq!(panels.len(), 1);
        assert_eq!(panels.panel(603).unwrap().details.title, "The Matrix");
        assert!(panels.panel(603).unwrap().is_expanded());
    }

    #[test]
    fn test_rows_are_independent() {
        let mut panels = DetailPanels::new();
        panels.attach(1, details(1, "A"));
        panels.attach(2, details(2, "B"));
        panels.toggle(1);

        assert_eq!(panels.state(1), RowState::Collapsed);
        assert_eq!(panels.state(2), RowState::Expanded);
    }

    #[test]
    fn test_duplicate_titles_toggle_clicked_row() {
        use crate::search::SearchPage;

        let mut first = details(10, "Dune");
        first.popularity = 40.0;
        let mut second = details(20, "Dune");
        second.popularity = 30.0;
        let page = SearchPage::from_results(vec![first, second]);

        // 1行目をクリック: パネルは行IDで管理し、索引は詳細取得にだけ使う
        let clicked = &page.rows()[0];
        let mut panels = DetailPanels::new();
        assert_eq!(panels.toggle(clicked.id), Toggle::NeedsDetails);
        let fetched_id = page.index().resolve(&clicked.title).unwrap();
        panels.attach(clicked.id, details(fetched_id, "Dune"));

        assert_eq!(panels.state(10), RowState::Expanded);
        assert_eq!(panels.state(20), RowState::Collapsed);

        assert_eq!(panels.toggle(10), Toggle::Collapsed);
        assert_eq!(panels.toggle(20), Toggle::NeedsDetails);
    }

    #[test]
    fn test_clear() {
        let mut panels = DetailPanels::new();
        panels.attach(1, details(1, "A"));
        panels.clear();
        assert!(panels.is_empty());
        assert_eq!(panels.toggle(1), Toggle::NeedsDetails);
    }
}
