//! Diagnostic logging setup shared by both binaries.
//!
//! User-facing messages go to explicit writers. The logger only carries
//! diagnostics: step boundaries, invocations and resolved paths. `RUST_LOG`
//! takes precedence over the verbosity flags.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Map CLI verbosity flags to a level filter.
///
/// Quiet wins over any verbosity. Without flags only warnings are shown.
#[must_use]
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the process-wide logger writing to stderr.
///
/// Calling this more than once keeps the first logger.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let default_filter = level_for(verbosity, quiet).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format_timestamp(None).target(Target::Stderr);
    if builder.try_init().is_err() {
        // A logger is already installed.
    }
}
