//! 追加するタイトルの決定

use crate::error::{Result, WatchlistError};
use dialoguer::Select;
use movie_watchlist_common::SearchPage;

/// 追加するタイトルを決める
///
/// 指定があればそれを使う。候補が1件ならそれ、複数なら端末で選択させる。
/// 端末でなければ推測せずに `--title` の指定を求める。
pub fn choose_title(page: &SearchPage, title: Option<String>, interactive: bool) -> Result<String> {
    if let Some(title) = title {
        return Ok(title);
    }

    let titles: Vec<String> = page
        .rows()
        .iter()
        .map(|row| row.title.clone())
        .collect();
    match titles.as_slice() {
        [] => Err(WatchlistError::NoResults(String::new())),
        [only] => Ok(only.clone()),
        _ if !interactive => Err(WatchlistError::TitleRequired(titles.len())),
        _ => {
            let selection = Select::new()
                .with_prompt("追加する作品を選択")
                .items(&titles)
                .default(0)
                .interact()?;
            Ok(titles[selection].clone())
        }
    }
}
