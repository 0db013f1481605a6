//! Logging setup for medicctl
//!
//! Logs go to stderr so JSON on stdout stays machine readable.
//! Filter comes from $MEDIC_LOG, e.g. `MEDIC_LOG=medic_common=debug`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MEDIC_LOG";

/// Filter used when $MEDIC_LOG is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
