//! Log subscriber setup.

use eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `filter` is an `EnvFilter` directive such as `info` or
/// `daogen_catalog=debug,warn`. Logs go to stderr so `--dry-run` output on
/// stdout stays clean.
pub fn init(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).wrap_err_with(|| format!("invalid log filter '{}'", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {}", e))
}
