//! 端末向けの表示

use movie_watchlist_common::{
    format_rating, format_revenue, format_runtime, format_year, SearchPage, SearchResult,
    WatchListEntry,
};

/// 検索結果（表示対象の行のみ）
pub fn render_search_results(page: &SearchPage) -> String {
    if page.is_empty() {
        return "人気の作品は見つかりませんでした\n".to_string();
    }

    page.rows()
        .iter()
        .map(|row| format!("{} ({})\n", row.title, format_year(&row.release_date)))
        .collect()
}

/// 詳細パネル相当
pub fn render_details(details: &SearchResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", details.title));
    out.push_str(&format!(
        "  Year: {}  Rating: {}  Runtime: {}  Revenue: {}\n",
        format_year(&details.release_date),
        format_rating(details.vote_average),
        format_runtime(details.runtime),
        format_revenue(details.revenue),
    ));
    if !details.overview.is_empty() {
        out.push_str(&format!("  Overview: {}\n", details.overview));
    }
    out
}

/// ウォッチリスト表
pub fn render_watch_list(entries: &[WatchListEntry]) -> String {
    if entries.is_empty() {
        return "ウォッチリストは空です\n".to_string();
    }

    let width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let mut out = format!("{:<width$}  {:<4}  {:>8}  {}\n", "Title", "Year", "Runtime", "Rating");
    for entry in entries {
        let year = entry
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_default();
        let runtime = if entry.runtime > 0 {
            format_runtime(entry.runtime)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:<width$}  {:<4}  {:>8}  {}\n",
            entry.title,
            year,
            runtime,
            format_rating(entry.vote_average),
        ));
    }
    out
}
