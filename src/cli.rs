use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "movie-watchlist")]
#[command(about = "映画検索・ウォッチリスト管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// タイトルで映画を検索（人気の作品のみ表示）
    Search {
        /// 検索語
        #[arg(required = true)]
        query: String,

        /// 表示した各作品の詳細も取得
        #[arg(short, long)]
        details: bool,
    },

    /// 検索してウォッチリストに追加
    Add {
        /// 検索語
        #[arg(required = true)]
        query: String,

        /// 追加するタイトル（省略時は一覧から選択）
        #[arg(short, long)]
        title: Option<String>,
    },

    /// ウォッチリストを表示
    List,

    /// タイトルが一致する作品をすべて削除
    Remove {
        /// 削除するタイトル
        #[arg(required = true)]
        title: String,
    },

    /// 設定
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
