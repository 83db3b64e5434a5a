//! Configuration error types.
//!
//! The daemon deliberately does not validate the presence of external
//! credentials at startup; a missing key surfaces as a failed request on
//! the next cycle. Only values the scheduler itself consumes (the daily
//! check time) are rejected here.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}
