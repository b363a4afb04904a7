//! Logging setup for the `nestval` binary.
//!
//! Events go to stderr so stdout stays clean JSON. The filter comes from
//! `NESTVAL_LOG` (EnvFilter syntax, e.g. `nestval_core=trace`) and falls back
//! to `warn`, or `debug` with `--verbose`.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "NESTVAL_LOG";

pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = build_env_filter(verbose);

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    }
}
