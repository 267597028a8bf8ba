//! activate コマンド

use crate::admin::{normalize_activate_url, AdminClient};
use crate::catalog::Catalog;
use crate::cli::GlobalArgs;
use crate::config::SiteConfig;
use crate::error::{Result, WppError};
use crate::output::ActionSummary;
use clap::Args as ClapArgs;

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
    let catalog = Catalog::load_from(&config.catalog)?;
    let record = catalog
        .find(&args.slug)
        .ok_or_else(|| WppError::PluginNotFound(args.slug.clone()))?;

    if record.activated {
        println!("{}", ActionSummary::skipped(&record.slug, "already activated"));
        return Ok(());
    }

    let raw = record.activate_url.as_deref().ok_or_else(|| {
        WppError::InvalidCatalog(format!("no activation target for '{}'", record.slug))
    })?;
    let target = normalize_activate_url(raw);

    // API呼び出しではなくナビゲーション相当のGET
    tracing::info!(slug = %record.slug, target = %target, "activation navigation");
    let client = AdminClient::new(&config.site_url);
    client.navigate(&target).await?;

    println!("{}", ActionSummary::activated(&record.slug));
    Ok(())
}
