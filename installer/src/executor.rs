//! External command execution.
//!
//! Cargo is always invoked through [`CommandExecutor`] so the driver and the
//! installer can be exercised without spawning real processes. The system
//! executor lets the child inherit the terminal, which keeps cargo's own
//! diagnostics and colour output intact and lets `run` stay in the
//! foreground.

use crate::error::{InstallerError, Result};
use log::debug;
use std::fmt;
use std::process::{Command, ExitStatus};

/// A single external program invocation with a fixed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcal_installer::executor::Invocation;
    ///
    /// let invocation = Invocation::new("cargo", ["build", "--release"]);
    /// assert_eq!(invocation.to_string(), "cargo build --release");
    /// ```
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The program to run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program, in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor {
    /// Runs the invocation to completion and returns its exit code.
    ///
    /// A non-zero code is not an error at this level; callers decide how to
    /// treat it.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::Spawn`] if the program cannot be started.
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Executes commands on the host system with inherited standard streams.
///
/// # Examples
///
/// ```no_run
/// use gcal_installer::executor::{CommandExecutor, Invocation, SystemCommandExecutor};
///
/// let executor = SystemCommandExecutor;
/// let code = executor.run(&Invocation::new("cargo", ["--version"]))?;
/// assert_eq!(code, 0);
/// # Ok::<(), gcal_installer::error::InstallerError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        debug!("running {invocation}");
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .status()
            .map_err(|source| InstallerError::Spawn {
                program: invocation.program().to_owned(),
                source,
            })?;
        let code = exit_code_of(status);
        debug!("{invocation} exited with code {code}");
        Ok(code)
    }
}

/// Translate an [`ExitStatus`] into the code a shell would report.
///
/// Signal-terminated children on Unix map to `128 + signal`.
#[must_use]
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_joins_arguments() {
        let invocation = Invocation::new("cargo", ["clippy", "--", "-D", "warnings"]);
        assert_eq!(invocation.to_string(), "cargo clippy -- -D warnings");
    }

    #[test]
    fn invocation_without_arguments_displays_program_only() {
        let invocation = Invocation::new("cargo", Vec::<String>::new());
        assert_eq!(invocation.to_string(), "cargo");
        assert!(invocation.args().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn system_executor_propagates_exact_exit_code() {
        let executor = SystemCommandExecutor;
        let code = executor
            .run(&Invocation::new("sh", ["-c", "exit 42"]))
            .expect("sh should be spawnable");
        assert_eq!(code, 42);
    }

    #[cfg(unix)]
    #[test]
    fn system_executor_reports_success() {
        let executor = SystemCommandExecutor;
        let code = executor
            .run(&Invocation::new("true", Vec::<String>::new()))
            .expect("true should be spawnable");
        assert_eq!(code, 0);
    }

    #[test]
    fn system_executor_reports_spawn_failure() {
        let executor = SystemCommandExecutor;
        let err = executor
            .run(&Invocation::new(
                "gcal-definitely-not-a-real-program",
                Vec::<String>::new(),
            ))
            .expect_err("spawning a missing program should fail");
        assert!(matches!(err, InstallerError::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[cfg(unix)]
    #[test]
    fn signal_termination_maps_to_shell_convention() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status for a child killed by SIGKILL (9).
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code_of(status), 137);
    }
}
