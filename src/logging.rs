use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: info for this crate, debug for HTTP tracing, warn elsewhere.
pub const DEFAULT_FILTER: &str = "portfolio_site=info,tower_http=debug,axum=debug,warn";

/// Initialize structured logging, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
