// Preview server entry point
//
// Usage: cargo run --features server --bin serve
// Environment: BASE_PATH, PORT, ASSETS_DIR (see config.rs)

use portfolio_site::{create_router, logging, AppState, SiteConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    tracing::info!("Starting preview server...");

    let config = SiteConfig::from_env()?;
    config.log();

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Serving http://{}{}", addr, config.base_path);

    axum::serve(listener, app).await?;

    Ok(())
}
