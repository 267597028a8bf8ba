//! browse コマンド

use crate::admin::AdminClient;
use crate::catalog::Catalog;
use crate::cli::GlobalArgs;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::output::ActionSummary;
use crate::tui;

pub async fn run(global: &GlobalArgs) -> Result<()> {
    let config = SiteConfig::resolve(
        global.site.as_deref(),
        global.nonce.as_deref(),
        global.catalog.as_deref(),
    )?;
    let catalog = Catalog::load_from(&config.catalog)?;
    let client = AdminClient::new(&config.site_url);

    let navigation = tui::browser::run(
        client.clone(),
        catalog.into_records(),
        config.nonce.clone(),
    )
    .await?;

    // activate はビューから見ると終端アクション。
    // 実際のナビゲーション（GET）はビューを畳んでから行う。
    if let Some(target) = navigation {
        tracing::info!(target = %target, "activation navigation");
        client.navigate(&target).await?;
        println!("{}", ActionSummary::navigated(&target));
    }
    Ok(())
}
