//! Log setup for the feeder binary.
//!
//! Logs go to stderr; stdout is left alone.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Parse a filter such as `info` or `order_feeder=debug`.
pub fn filter(spec: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(spec).with_context(|| format!("invalid log filter {:?}", spec))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(spec: &str) -> Result<()> {
    let filter = filter(spec)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
