use crate::loader::DataSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "応募記録の検索・集計・HTML台帳生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 記録を読み込んでHTMLページを生成
    Export {
        /// データソース（ファイルパスまたはURL、省略時は設定値）
        source: Option<DataSource>,

        /// 出力HTMLファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// フリーテキスト検索（全フィールド部分一致）
        #[arg(short, long, default_value = "")]
        query: String,

        /// ステータスで絞り込み（完全一致）
        #[arg(short, long, default_value = "")]
        status: String,

        /// ページタイトル
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 絞り込み結果をターミナルに表示
    List {
        /// データソース（ファイルパスまたはURL、省略時は設定値）
        source: Option<DataSource>,

        /// フリーテキスト検索（全フィールド部分一致）
        #[arg(short, long, default_value = "")]
        query: String,

        /// ステータスで絞り込み（完全一致）
        #[arg(short, long, default_value = "")]
        status: String,
    },

    /// 対話式に検索・絞り込み
    Browse {
        /// データソース（ファイルパスまたはURL、省略時は設定値）
        source: Option<DataSource>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のデータソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// 既定の出力先を設定
        #[arg(long)]
        set_output: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
