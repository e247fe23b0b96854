use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use movie_watchlist::{cli, config, error, logging, render, select, storage, tmdb};
use movie_watchlist_common::{SearchPage, WatchListEntry};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, WatchlistError};
use std::io::IsTerminal;
use std::time::Duration;
use tmdb::TmdbClient;

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

async fn search_page(client: &TmdbClient, query: &str) -> Result<SearchPage> {
    let progress = spinner(&format!("\"{}\" を検索中...", query));
    let results = client.search(query).await;
    progress.finish_and_clear();
    Ok(SearchPage::from_results(results?))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, details } => {
            let client = TmdbClient::new(config.api_config()?)?;
            let page = search_page(&client, &query).await?;
            print!("{}", render::render_search_results(&page));

            if details {
                for row in page.rows() {
                    let details = client.fetch_details(page.index(), &row.title).await?;
                    println!();
                    print!("{}", render::render_details(&details));
                }
            }
        }

        Commands::Add { query, title } => {
            let client = TmdbClient::new(config.api_config()?)?;
            let page = search_page(&client, &query).await?;
            if page.is_empty() {
                return Err(WatchlistError::NoResults(query));
            }

            let title = select::choose_title(&page, title, std::io::stdin().is_terminal())?;
            let progress = spinner("詳細を取得中...");
            let details = client.fetch_details(page.index(), &title).await;
            progress.finish_and_clear();
            let details = details?;

            print!("{}", render::render_details(&details));
            let store = storage::open_watch_list(config.data_dir()?);
            store.append(WatchListEntry::from(details))?;
            println!("✔ ウォッチリストに追加: {}", title);
        }

        Commands::List => {
            let store = storage::open_watch_list(config.data_dir()?);
            print!("{}", render::render_watch_list(&store.list_all()));
        }

        Commands::Remove { title } => {
            let store = storage::open_watch_list(config.data_dir()?);
            let removed = store.remove_by_title(&title)?;
            if removed == 0 {
                println!("該当する作品はありません: {}", title);
            } else {
                println!("✔ {}件削除: {}", removed, title);
            }
            print!("{}", render::render_watch_list(&store.list_all()));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("保存先: {}", config.data_dir()?.display());
                println!("言語: {}", config.language);
                println!("API: {}", config.api_base_url);
                println!(
                    "APIキー: {}",
                    if config.get_api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
