// Static build entry point
//
// Usage: cargo run --bin build_site
// Environment: BASE_PATH, OUT_DIR, ASSETS_DIR (see config.rs)

use portfolio_site::{logging, SiteBuilder, SiteConfig, SiteContent};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = SiteConfig::from_env()?;
    config.log();

    let report = SiteBuilder::from_config(&config).build(&SiteContent::portfolio())?;

    tracing::info!(
        "Built {} ({} assets copied)",
        report.index_path.display(),
        report.assets_copied
    );
    tracing::info!("Page summary: {}", serde_json::to_string(&report.page)?);

    Ok(())
}
