//! Build and install tooling for the gcal-imp terminal calendar.
//!
//! This crate provides the named-target build driver used by `gcal-make` and
//! the install workflow used by `gcal-install`. Both delegate compilation to
//! cargo through a [`executor::CommandExecutor`], so the orchestration can be
//! exercised without spawning real processes.
//!
//! # Modules
//!
//! - [`artifact`] - Cargo output locations keyed by build profile
//! - [`cli`] - Command-line argument definitions
//! - [`dirs`] - Home directory resolution abstraction
//! - [`driver`] - Named-target dispatch to cargo
//! - [`error`] - Error types and exit code mapping
//! - [`executor`] - External command execution
//! - [`installer`] - The build, copy and announce install workflow
//! - [`layout`] - Fixed per-platform install locations
//! - [`logging`] - Diagnostic logger setup
//! - [`output`] - User-facing messages
//! - [`path_check`] - PATH membership check and advisory
//! - [`target`] - Driver targets and their cargo invocations

pub mod artifact;
pub mod cli;
pub mod dirs;
pub mod driver;
pub mod error;
pub mod executor;
pub mod installer;
pub mod layout;
pub mod logging;
pub mod output;
pub mod path_check;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
