//! Shared runtime pieces for the firewood daemon: configuration, error
//! types, and the published status value.

pub mod config;
pub mod error;
pub mod status;

pub use config::Config;
pub use error::ConfigError;
pub use status::StatusCell;

use anyhow::Result;

/// Initialize logging for the daemon.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("firewood core initialized");
    Ok(())
}
