//! Log subscriber setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter.
pub const LOG_ENV: &str = "SIFT_LOG";

/// Default filter directive for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `SIFT_LOG` takes precedence over the verbosity flag when it holds a valid filter.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when running under a test harness
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}
