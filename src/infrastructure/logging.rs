//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events. Test binaries that want
//! to see them call [`init`] once; `RUST_LOG` wins over the configured
//! level so a single run can be made noisier without touching config files.

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber configured from `settings`
///
/// Returns `Ok(false)` when another subscriber was already installed,
/// which is the normal case when several tests race to initialise logging.
pub fn init(settings: &LoggingSettings) -> Result<bool> {
    let filter = build_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer();

    let installed = match settings.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Full => builder.try_init(),
    };

    Ok(installed.is_ok())
}

fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|_| Error::invalid_input(format!("logging.level = {}", settings.level)))
}
