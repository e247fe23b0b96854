//! 表示テスト

use movie_watchlist::render::{render_details, render_search_results, render_watch_list};
use movie_watchlist_common::{SearchPage, SearchResult, WatchListEntry};

fn result(id: u64, title: &str, popularity: f64, release_date: &str) -> SearchResult {
    SearchResult {
        id,
        title: title.to_string(),
        popularity,
        release_date: release_date.to_string(),
        ..Default::default()
    }
}

/// 人気度10以下の作品は表示されない
#[test]
fn test_search_output_hides_unpopular() {
    let page = SearchPage::from_results(vec![
        result(1, "The Matrix Reloaded Special", 8.0, "2003-05-15"),
        result(603, "The Matrix", 15.0, "1999-03-30"),
    ]);

    let output = render_search_results(&page);
    assert_eq!(output, "The Matrix (1999)\n");
}

#[test]
fn test_search_output_empty() {
    let page = SearchPage::from_results(vec![result(1, "Obscure", 1.0, "")]);
    assert!(render_search_results(&page).contains("見つかりませんでした"));
}

#[test]
fn test_details_output() {
    let details = SearchResult {
        id: 603,
        title: "The Matrix".to_string(),
        release_date: "1999-03-30".to_string(),
        vote_average: 8.2,
        runtime: 136,
        revenue: 463_517_383,
        overview: "A hacker learns the truth.".to_string(),
        ..Default::default()
    };

    let output = render_details(&details);
    assert!(output.contains("Year: 1999"));
    assert!(output.contains("Rating: 8.2"));
    assert!(output.contains("Runtime: 136 mins"));
    assert!(output.contains("Revenue: $463,517,383"));
    assert!(output.contains("Overview: A hacker learns the truth."));
}

/// 表に公開年が出る
#[test]
fn test_watch_list_shows_year() {
    let entries = vec![WatchListEntry {
        title: "Dune".to_string(),
        release_date: "2021-10-22".to_string(),
        vote_average: 7.8,
        ..Default::default()
    }];

    let output = render_watch_list(&entries);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Title"));
    assert!(lines[1].starts_with("Dune"));
    assert!(lines[1].contains("2021"));
    assert!(lines[1].ends_with("7.8"));
}

#[test]
fn test_watch_list_empty() {
    assert!(render_watch_list(&[]).contains("空"));
}
