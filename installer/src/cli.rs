//! CLI argument definitions for `gcal-make` and `gcal-install`.
//!
//! Both commands work without any flags. The optional flags only control
//! this tool's own diagnostics, or preview and reproduce installer
//! behaviour; they never alter the cargo invocations.

use crate::path_check::PathCheck;
use crate::target::Target;
use clap::Parser;

/// Run a named build target for gcal-imp.
#[derive(Parser, Debug)]
#[command(name = "gcal-make")]
#[command(version, about)]
#[command(after_help = concat!(
    "TARGETS:\n",
    "  build         cargo build\n",
    "  prod-build    cargo build --release\n",
    "  test          cargo test\n",
    "  run           cargo run\n",
    "  clean         cargo clean\n",
    "  check         cargo check\n",
    "  fmt           cargo fmt\n",
    "  lint          cargo clippy -- -D warnings\n",
    "  help          print the target list\n\n",
    "The exit code is cargo's exit code.",
))]
pub struct MakeCli {
    /// Target to run.
    #[arg(value_enum, default_value_t = Target::Help)]
    pub target: Target,

    /// Increase diagnostic log output (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

/// Build gcal-imp in release mode and install it as `gcal`.
#[derive(Parser, Debug)]
#[command(name = "gcal-install")]
#[command(version, about)]
#[command(long_about = concat!(
    "Build gcal-imp in release mode and install it as `gcal`.\n\n",
    "The release binary is copied to ~/.local/bin/gcal on Linux and macOS, ",
    "or %USERPROFILE%\\bin\\gcal.exe on Windows. The directory is created when ",
    "missing and an existing install is overwritten. Every step stops the ",
    "install on failure.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Build and install:\n",
    "    $ gcal-install\n\n",
    "  Preview without building:\n",
    "    $ gcal-install --dry-run\n\n",
    "  Reproduce the historical substring PATH check:\n",
    "    $ gcal-install --path-check substring",
))]
pub struct InstallCli {
    /// Show the install plan and exit without building or copying.
    #[arg(long)]
    pub dry_run: bool,

    /// How to test whether the install directory is on PATH.
    #[arg(long, value_enum, default_value_t = PathCheck::Segment)]
    pub path_check: PathCheck,

    /// Increase diagnostic log output (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
