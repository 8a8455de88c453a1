//! Error types for the gcal build and install tooling.
//!
//! Every failure is fatal to the current invocation. Errors carry enough
//! context (target name, path, OS message) to be printed once by the binary,
//! and [`InstallerError::exit_code`] maps each variant to the process exit
//! code the caller's shell observes.

use crate::target::Target;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Exit code reported when a child process cannot be spawned.
///
/// Matches the shell convention for "command not found".
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Errors that can occur while driving cargo or installing the binary.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// A cargo subcommand exited unsuccessfully.
    #[error("{target} failed: {program} exited with code {code}")]
    ToolchainFailed {
        /// The driver target that was being executed.
        target: Target,
        /// The program that was invoked.
        program: String,
        /// The child's exit code, propagated verbatim.
        code: i32,
    },

    /// The toolchain program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// The program that could not be spawned.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The release artifact was not found after a successful build.
    #[error("release artifact not found at {path}")]
    ArtifactMissing {
        /// Where the artifact was expected.
        path: Utf8PathBuf,
    },

    /// The install directory could not be created.
    #[error("failed to create install directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Copying the artifact into the install directory failed.
    #[error("failed to copy {from} to {to}: {source}")]
    CopyFailed {
        /// The release artifact.
        from: Utf8PathBuf,
        /// The install destination.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The user's home directory could not be determined.
    #[error("could not determine the home directory; set {variable}")]
    HomeDirUnavailable {
        /// The environment variable that normally provides it.
        variable: &'static str,
    },

    /// A path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },

    /// Cargo could not describe the workspace.
    #[error("workspace not found: {reason}")]
    WorkspaceNotFound {
        /// Description of why the workspace lookup failed.
        reason: String,
    },

    /// Failed to write user-facing output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

impl InstallerError {
    /// Return the process exit code this error should terminate with.
    ///
    /// Toolchain failures propagate the child's own exit code. Spawn
    /// failures use 127. Everything else exits with 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcal_installer::error::InstallerError;
    /// use gcal_installer::target::Target;
    ///
    /// let err = InstallerError::ToolchainFailed {
    ///     target: Target::Test,
    ///     program: "cargo".to_owned(),
    ///     code: 101,
    /// };
    /// assert_eq!(err.exit_code(), 101);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolchainFailed { code, .. } => *code,
            Self::Spawn { .. } => SPAWN_FAILURE_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
