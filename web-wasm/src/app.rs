//! メインアプリケーションコンポーネント
//!
//! 入力・クリックを検索APIとウォッチリストに結びつける。
//! - 検索欄の入力: 空なら結果をクリア、それ以外は即検索（最新の検索の応答のみ反映）
//! - タイトルクリック: 詳細パネルの開閉（初回のみ詳細を取得）
//! - 追加ボタン: 詳細を取得して保存し、表に1行追加
//! - 削除アイコン: タイトル一致を全件削除して表を再描画

use std::sync::Arc;

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use movie_watchlist_common::{
    ApiConfig, DetailPanels, Error, RequestSequence, SearchPage, Toggle, WatchListEntry,
};

use crate::api::tmdb;
use crate::components::{
    header::Header, search_bar::SearchBar, search_results::SearchResults,
    settings_panel::SettingsPanel, status_line::StatusLine, watch_list::WatchList,
};
use crate::storage;

/// 画面下部のステータス
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Info(String),
    Failed(String),
}

impl Status {
    pub fn as_class(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Info(_) => "info",
            Status::Failed(_) => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Idle => "",
            Status::Info(message) | Status::Failed(message) => message,
        }
    }
}

fn failed(context: &str, err: &Error) -> Status {
    console::error!(format!("{}: {}", context, err));
    Status::Failed(format!("{}: {}", context, err))
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (api_key, set_api_key) = signal(storage::load_api_key());
    let (query, set_query) = signal(String::new());
    let (page, set_page) = signal(None::<SearchPage>);
    let (panels, set_panels) = signal(DetailPanels::new());
    let (entries, set_entries) = signal(storage::watch_list().list_all());
    let (status, set_status) = signal(Status::Idle);
    let sequence = Arc::new(RequestSequence::new());

    let api_config = move || ApiConfig::new(api_key.get_untracked());

    // APIキー保存ハンドラ
    let on_save_api_key = move |key: String| {
        let key = key.trim().to_string();
        match storage::save_api_key(&key) {
            Ok(()) => set_status.set(Status::Info("API key saved".to_string())),
            Err(err) => set_status.set(failed("Could not save API key", &err)),
        }
        set_api_key.set(key);
    };

    // 検索欄の入力ハンドラ
    let on_query = {
        let sequence = sequence.clone();
        move |text: String| {
            set_query.set(text.clone());

            if text.is_empty() {
                sequence.invalidate();
                set_page.set(None);
                set_panels.update(|p| p.clear());
                set_status.set(Status::Idle);
                return;
            }

            let ticket = sequence.begin();
            let sequence = sequence.clone();
            let config = api_config();
            spawn_local(async move {
                let outcome = tmdb::search(&config, &text).await;
                if !sequence.is_current(ticket) {
                    return;
                }
                match outcome {
                    Ok(results) => {
                        set_panels.update(|p| p.clear());
                        set_page.set(Some(SearchPage::from_results(results)));
                        set_status.set(Status::Idle);
                    }
                    Err(err) => {
                        set_page.set(None);
                        set_panels.update(|p| p.clear());
                        set_status.set(failed("Search failed", &err));
                    }
                }
            });
        }
    };

    // タイトルクリック（詳細の開閉）ハンドラ
    //
    // パネルはクリックされた行のIDで開閉し、タイトル索引は詳細取得にだけ使う。
    let on_toggle = {
        let sequence = sequence.clone();
        move |id: u64, title: String| {
            let Some(current) = page.get_untracked() else {
                return;
            };

            let mut transition = Toggle::Collapsed;
            set_panels.update(|p| transition = p.toggle(id));
            if transition != Toggle::NeedsDetails {
                return;
            }

            // 表示中の検索結果が変わっていたら反映しない
            let ticket = sequence.current();
            let sequence = sequence.clone();
            let config = api_config();
            spawn_local(async move {
                match tmdb::fetch_details(&config, current.index(), &title).await {
                    Ok(details) => {
                        if sequence.is_current(ticket) {
                            set_panels.update(|p| {
                                p.attach(id, details);
                            });
                        }
                    }
                    Err(err) => set_status.set(failed("Could not load details", &err)),
                }
            });
        }
    };

    // ウォッチリスト追加ハンドラ
    let on_add = move |title: String| {
        let Some(current) = page.get_untracked() else {
            return;
        };
        let config = api_config();
        spawn_local(async move {
            let details = match tmdb::fetch_details(&config, current.index(), &title).await {
                Ok(details) => details,
                Err(err) => {
                    set_status.set(failed("Could not add movie", &err));
                    return;
                }
            };

            let entry = WatchListEntry::from(details);
            match storage::watch_list().append(entry.clone()) {
                Ok(()) => {
                    set_entries.update(|list| list.push(entry));
                    set_status.set(Status::Info(format!("Added \"{}\" to your watch list", title)));
                }
                Err(err) => set_status.set(failed("Could not save watch list", &err)),
            }
        });
    };

    // ウォッチリスト削除ハンドラ
    let on_delete = move |title: String| {
        let store = storage::watch_list();
        if let Err(err) = store.remove_by_title(&title) {
            set_status.set(failed("Could not update watch list", &err));
        }
        set_entries.set(store.list_all());
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                on_save_api_key=on_save_api_key
            />

            <SearchBar query=query on_query=on_query />

            <StatusLine status=status />

            <SearchResults
                page=page
                panels=panels
                on_toggle=on_toggle
                on_add=on_add
            />

            <h4>"Watch List"</h4>
            <WatchList entries=entries on_delete=on_delete />
        </div>
    }
}
