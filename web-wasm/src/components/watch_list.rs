//! ウォッチリスト表コンポーネント

use leptos::prelude::*;
use movie_watchlist_common::{format_rating, format_runtime, WatchListEntry};

#[component]
pub fn WatchList<FD>(entries: ReadSignal<Vec<WatchListEntry>>, on_delete: FD) -> impl IntoView
where
    FD: Fn(String) + 'static + Clone + Send,
{
    view! {
        <table id="watchlist-table" class="u-full-width">
            <thead>
                <tr>
                    <th></th>
                    <th>"Title"</th>
                    <th>"Year"</th>
                    <th>"Runtime"</th>
                    <th>"Rating"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let on_delete = on_delete.clone();
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| view! { <WatchRow entry=entry on_delete=on_delete.clone() /> })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn WatchRow<FD>(entry: WatchListEntry, on_delete: FD) -> impl IntoView
where
    FD: Fn(String) + 'static + Clone + Send,
{
    let year = entry
        .release_year()
        .map(|year| year.to_string())
        .unwrap_or_default();
    let runtime = if entry.runtime > 0 {
        format_runtime(entry.runtime)
    } else {
        String::new()
    };

    view! {
        <tr>
            <td>
                <i
                    class="fa-solid fa-trash delete-icon"
                    title="Remove from watch list"
                    on:click={
                        let title = entry.title.clone();
                        move |_| on_delete(title.clone())
                    }
                ></i>
            </td>
            <td>{entry.title.clone()}</td>
            <td>{year}</td>
            <td>{runtime}</td>
            <td>{format_rating(entry.vote_average)}</td>
        </tr>
    }
}
