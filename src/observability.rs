//! Tracing/logging initialization.
//!
//! Events go to stderr so stdout stays reserved for user-facing output.

use tracing_subscriber::EnvFilter;

/// Level used when `-v` is given once or more.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins over `level` when set. Safe to call more than once;
/// later calls are no-ops.
pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
    } else {
        builder.without_time().try_init()
    };
}
