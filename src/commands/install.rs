//! install コマンド

use crate::admin::{normalize_activate_url, AdminClient};
use crate::catalog::Catalog;
use crate::cli::GlobalArgs;
use crate::config::SiteConfig;
use crate::error::{Result, WppError};
use crate::output::ActionSummary;
use clap::Args as ClapArgs;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, ClapArgs)]
pub struct Args {
    /// カタログ内のスラッグ
    pub slug: String,
}

pub async fn run(global: &GlobalArgs, args: Args) -> Result<()> {
    let config = SiteConfig::resolve(
        global.site.as_deref(),
        global.nonce.as_deref(),
        global.catalog.as_deref(),
    )?;
    let nonce = config.require_nonce()?.to_string();
    let catalog = Catalog::load_from(&config.catalog)?;
    let record = catalog
        .find(&args.slug)
        .ok_or_else(|| WppError::PluginNotFound(args.slug.clone()))?;

    if record.activated {
        println!("{}", ActionSummary::skipped(&record.slug, "already activated"));
        return Ok(());
    }
    if record.installed {
        println!(
            "{}",
            ActionSummary::skipped(&record.slug, "already installed (use `wpp activate`)")
        );
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Installing {msg}...")
            .unwrap(),
    );
    pb.set_message(record.slug.clone());
    pb.enable_steady_tick(Duration::from_millis(100));

    let client = AdminClient::new(&config.site_url);
    let result = client.install(&record.slug, &nonce).await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => {
            tracing::info!(slug = %record.slug, "install succeeded");
            println!("{}", ActionSummary::installed(&record.slug));
            println!("  activate at: {}", normalize_activate_url(&outcome.activate_url));
            Ok(())
        }
        Err(err) => {
            tracing::error!(slug = %record.slug, error = %err, "install failed");
            Err(err)
        }
    }
}
