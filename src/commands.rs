//! コマンドディスパッチ

pub mod activate;
pub mod browse;
pub mod install;
pub mod list;

use crate::cli::{Cli, Command};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Browse => browse::run(&cli.global).await,
        Command::Install(args) => install::run(&cli.global, args).await,
        Command::Activate(args) => activate::run(&cli.global, args).await,
        Command::List => list::run(&cli.global),
    }
}
