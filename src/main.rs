mod admin;
mod catalog;
mod cli;
mod commands;
mod config;
mod detail;
mod error;
mod logging;
mod output;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    // guard はプロセス終了までログのフラッシュを保証する
    let _guard = logging::init();

    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
