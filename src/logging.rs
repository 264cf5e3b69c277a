use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::settings::InteractorSettings;

/// Initialize the tracing subscriber. `RUST_LOG` overrides the settings filter.
pub fn init(settings: &InteractorSettings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    let fmt_layer = fmt::layer().with_target(true).compact();

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "interactor-style logging ready");

    Ok(())
}
