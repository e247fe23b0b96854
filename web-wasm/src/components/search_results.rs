//! 検索結果コンポーネント
//!
//! 人気度で絞り込んだ行だけを表示する。タイトルをクリックすると詳細パネルを
//! 開閉し、パネルは行ごとに1つだけ作られる（閉じると非表示になるだけ）。

use leptos::prelude::*;
use movie_watchlist_common::{
    format_rating, format_revenue, format_runtime, format_year, DetailPanels, RowState,
    SearchPage, SearchResult,
};

#[component]
pub fn SearchResults<FT, FA>(
    page: ReadSignal<Option<SearchPage>>,
    panels: ReadSignal<DetailPanels>,
    on_toggle: FT,
    on_add: FA,
) -> impl IntoView
where
    FT: Fn(u64, String) + 'static + Clone + Send,
    FA: Fn(String) + 'static + Clone + Send,
{
    let no_matches = move || page.with(|p| p.as_ref().is_some_and(|p| p.is_empty()));

    view! {
        <div id="results">
            <For
                each=move || page.with(|p| p.as_ref().map(|p| p.rows().to_vec()).unwrap_or_default())
                key=|row| row.id
                children=move |row: SearchResult| {
                    let on_toggle = on_toggle.clone();
                    let on_add = on_add.clone();
                    view! {
                        <ResultRow
                            row=row
                            panels=panels
                            on_toggle=on_toggle
                            on_add=on_add
                        />
                    }
                }
            />
            <Show when=no_matches>
                <p class="text-muted">"No popular titles match this search."</p>
            </Show>
        </div>
    }
}

#[component]
fn ResultRow<FT, FA>(
    row: SearchResult,
    panels: ReadSignal<DetailPanels>,
    on_toggle: FT,
    on_add: FA,
) -> impl IntoView
where
    FT: Fn(u64, String) + 'static + Clone + Send,
    FA: Fn(String) + 'static + Clone + Send,
{
    let id = row.id;
    let expanded = Memo::new(move |_| panels.with(|p| p.state(id) == RowState::Expanded));
    // 詳細が付いた時だけ変化する（開閉では作り直さない）
    let details = Memo::new(move |_| {
        panels.with(|p| p.panel(id).map(|panel| panel.details.clone()))
    });

    view! {
        <div class="result">
            <div class="row">
                <div class="ten columns">
                    <h5>
                        <a
                            href=""
                            class="m-result"
                            class:active=move || expanded.get()
                            on:click={
                                let title = row.title.clone();
                                move |ev| {
                                    ev.prevent_default();
                                    on_toggle(id, title.clone());
                                }
                            }
                        >
                            {row.title.clone()}
                        </a>
                    </h5>
                </div>
                <div class="two columns">
                    <button
                        class="button-primary add-to-list"
                        on:click={
                            let title = row.title.clone();
                            move |_| on_add(title.clone())
                        }
                    >
                        "Add to watch list"
                    </button>
                </div>
            </div>
            {move || details.get().map(|details| view! { <DetailPanel details=details expanded=expanded /> })}
        </div>
    }
}

#[component]
fn DetailPanel(details: SearchResult, expanded: Memo<bool>) -> impl IntoView {
    view! {
        <div
            class="movie-details"
            style=move || if expanded.get() { "display: block" } else { "display: none" }
        >
            <div class="row">
                <div class="three columns">
                    <strong>"Year: "</strong>{format_year(&details.release_date)}
                </div>
                <div class="three columns">
                    <strong>"Rating: "</strong>{format_rating(details.vote_average)}
                </div>
                <div class="three columns">
                    <strong>"Runtime: "</strong>{format_runtime(details.runtime)}
                </div>
                <div class="three columns">
                    <strong>"Revenue: "</strong>{format_revenue(details.revenue)}
                </div>
            </div>
            <p>
                <em>"Overview: "{details.overview.clone()}</em>
            </p>
        </div>
    }
}
