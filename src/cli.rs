use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nature-gallery")]
#[command(about = "Pexels「nature」写真ギャラリー（ターミナル版）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真を取得して一覧表示
    Browse {
        /// 取得するページ数（初回ロード + 「もっと見る」の回数）
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// 取得結果をJSONで保存
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 指定番号（0始まり）の写真をライトボックスで開く
        #[arg(long)]
        open: Option<usize>,

        /// スピナーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
