//! list コマンド

use crate::catalog::{Catalog, Status};
use crate::cli::GlobalArgs;
use crate::config::SiteConfig;
use crate::error::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};

pub fn run(global: &GlobalArgs) -> Result<()> {
    let config = SiteConfig::resolve(
        global.site.as_deref(),
        global.nonce.as_deref(),
        global.catalog.as_deref(),
    )?;
    let catalog = Catalog::load_from(&config.catalog)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Slug", "Status", "Description"]);

    for record in catalog.records() {
        let status = Status::of(record);
        let color = match status {
            Status::Activated => Color::Green,
            Status::ActivateNow => Color::Cyan,
            Status::InstallNow => Color::White,
        };
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.slug),
            Cell::new(status.label()).fg(color),
            Cell::new(truncate(&record.description, 60)),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// 文字境界を壊さずに切り詰める
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}
