//! Asset diagnostics command.

use console::style;

use crate::assets::chart::{self, ChartStatus};
use crate::assets::{AssetRef, ResolvedAssets};
use crate::cli::icons::{dim_arrow, info, success, warn};
use crate::config::Settings;

/// Print how each site image resolves in the configured assets directory.
pub fn cmd_assets(settings: &Settings) -> anyhow::Result<()> {
    println!(
        "{} Assets directory: {}",
        info(),
        settings.assets_dir.display()
    );

    let assets = ResolvedAssets::resolve_all(&settings.assets_dir, None);
    let mut inlined = 0;

    for (entry, asset) in assets.entries() {
        match asset {
            AssetRef::Inline { mime, data } => {
                inlined += 1;
                println!(
                    "  {} {:<9} {} ({}, {} base64 chars)",
                    success(),
                    entry.name,
                    entry.file_name,
                    mime,
                    data.len()
                );
            }
            AssetRef::Placeholder(url) => {
                println!(
                    "  {} {:<9} {} missing",
                    warn(),
                    entry.name,
                    entry.file_name
                );
                println!("      {} {}", dim_arrow(), style(url).dim());
            }
        }
    }

    println!();
    println!("{} of {} images inlined", inlined, assets.entries().len());

    if chart::ensure_chart(&settings.assets_dir) == ChartStatus::Missing {
        println!(
            "{} Regime chart is missing; the model section shows a placeholder",
            warn()
        );
    }

    Ok(())
}
