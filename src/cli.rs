use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{activate, install};

#[derive(Debug, Parser)]
#[command(name = "wpp")]
#[command(about = "WordPress promoted-plugin browser", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全コマンド共通のフラグ（設定ファイル・環境変数より優先）
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// サイトのベースURL
    #[arg(long, global = true)]
    pub site: Option<String>,

    /// カタログJSONのパス
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// インストール用のCSRFトークン（そのまま送信される）
    #[arg(long, global = true)]
    pub nonce: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログを対話的にブラウズ
    Browse,

    /// プラグインをインストール
    Install(install::Args),

    /// インストール済みプラグインをアクティベート
    Activate(activate::Args),

    /// カタログ一覧をテーブル表示
    List,
}
