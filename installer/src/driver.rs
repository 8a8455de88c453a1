//! Named-target dispatch to cargo.
//!
//! The driver performs no configuration branching and no output
//! post-processing: a target either prints the usage text or runs its single
//! cargo invocation and reports the exit code unchanged.

use crate::error::{InstallerError, Result};
use crate::executor::CommandExecutor;
use crate::target::{Target, usage_text};
use log::info;
use std::io::Write;

/// Dispatches build driver targets through a [`CommandExecutor`].
pub struct BuildDriver<'a> {
    executor: &'a dyn CommandExecutor,
}

impl<'a> BuildDriver<'a> {
    /// Create a driver that runs commands through `executor`.
    #[must_use]
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Run a single target.
    ///
    /// `help` writes the usage text to `stdout`. Every other target runs its
    /// cargo invocation with inherited streams.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::ToolchainFailed`] carrying the child's exit
    /// code when cargo exits unsuccessfully, [`InstallerError::Spawn`] when
    /// cargo cannot be started, and [`InstallerError::WriteFailed`] when the
    /// usage text cannot be written.
    pub fn dispatch(&self, target: Target, stdout: &mut dyn Write) -> Result<()> {
        let Some(invocation) = target.invocation() else {
            return writeln!(stdout, "{}", usage_text())
                .map_err(|source| InstallerError::WriteFailed { source });
        };

        info!("{target}: {invocation}");
        let code = self.executor.run(&invocation)?;
        if code == 0 {
            return Ok(());
        }

        Err(InstallerError::ToolchainFailed {
            target,
            program: invocation.program().to_owned(),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::MockCommandExecutor;
    use rstest::rstest;

    fn expect_single_run(target: Target, code: i32) -> MockCommandExecutor {
        let expected = target.invocation().expect("target should invoke cargo");
        let mut executor = MockCommandExecutor::new();
        executor
            .expect_run()
            .withf(move |invocation| *invocation == expected)
            .times(1)
            .returning(move |_| Ok(code));
        executor
    }

    #[rstest]
    #[case::build(Target::Build)]
    #[case::prod_build(Target::ProdBuild)]
    #[case::test(Target::Test)]
    #[case::run(Target::Run)]
    #[case::clean(Target::Clean)]
    #[case::check(Target::Check)]
    #[case::fmt(Target::Fmt)]
    #[case::lint(Target::Lint)]
    fn dispatch_runs_mapped_invocation_once(#[case] target: Target) {
        let executor = expect_single_run(target, 0);
        let mut stdout = Vec::new();

        BuildDriver::new(&executor)
            .dispatch(target, &mut stdout)
            .expect("successful cargo run should succeed");

        assert!(stdout.is_empty(), "driver must not add output");
    }

    #[rstest]
    #[case::test_failure(Target::Test, 101)]
    #[case::lint_warning(Target::Lint, 1)]
    #[case::odd_code(Target::Build, 42)]
    fn dispatch_propagates_exact_exit_code(#[case] target: Target, #[case] code: i32) {
        let executor = expect_single_run(target, code);
        let mut stdout = Vec::new();

        let err = BuildDriver::new(&executor)
            .dispatch(target, &mut stdout)
            .expect_err("non-zero exit should fail");

        assert!(matches!(
            err,
            InstallerError::ToolchainFailed { target: t, code: c, .. } if t == target && c == code
        ));
        assert_eq!(err.exit_code(), code);
    }

    #[test]
    fn help_prints_usage_without_running_anything() {
        let mut executor = MockCommandExecutor::new();
        executor.expect_run().never();
        let mut stdout = Vec::new();

        BuildDriver::new(&executor)
            .dispatch(Target::Help, &mut stdout)
            .expect("help should succeed");

        let text = String::from_utf8(stdout).expect("usage should be UTF-8");
        assert!(text.contains("prod-build"));
        assert!(text.contains("lint"));
    }

    #[test]
    fn spawn_failure_is_not_retried() {
        let mut executor = MockCommandExecutor::new();
        executor.expect_run().times(1).returning(|invocation| {
            Err(InstallerError::Spawn {
                program: invocation.program().to_owned(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        });
        let mut stdout = Vec::new();

        let err = BuildDriver::new(&executor)
            .dispatch(Target::Check, &mut stdout)
            .expect_err("spawn failure should propagate");

        assert!(matches!(err, InstallerError::Spawn { .. }));
    }
}
