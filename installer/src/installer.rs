//! The install workflow.
//!
//! One portable sequence runs on every platform and stops at the first
//! failing step:
//!
//! 1. build the release artifact (`prod-build`)
//! 2. create the install directory if it is missing
//! 3. copy the artifact to its fixed name, overwriting any previous install
//! 4. print the completion message
//! 5. on POSIX layouts, advise when the directory is not on `PATH`
//!
//! Nothing is rolled back. A directory created in step 2 stays if step 3
//! fails.

use crate::artifact::BuildArtifact;
use crate::driver::BuildDriver;
use crate::error::{InstallerError, Result};
use crate::executor::CommandExecutor;
use crate::layout::InstallLayout;
use crate::output::completion_message;
use crate::path_check::{PathCheck, is_on_path, path_advisory};
use crate::target::Target;
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::io::Write;

/// A single step of the install workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    /// Run the `prod-build` driver target.
    Build,
    /// Create the install directory if absent.
    CreateDir,
    /// Copy the release artifact into place.
    Copy,
    /// Print the completion message.
    Announce,
    /// Check `PATH` for the install directory.
    CheckPath,
}

impl InstallStep {
    /// Short human-readable description of the step.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Build => "build release artifact",
            Self::CreateDir => "create install directory if missing",
            Self::Copy => "copy release artifact to install directory",
            Self::Announce => "print completion message",
            Self::CheckPath => "check install directory is on PATH",
        }
    }
}

/// Configuration for an install run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// The release artifact produced by the build step.
    pub artifact: BuildArtifact,
    /// Where the binary is installed.
    pub layout: InstallLayout,
    /// How `PATH` membership is tested.
    pub path_check: PathCheck,
    /// The `PATH` value inspected by the advisory check.
    pub path_var: Option<OsString>,
}

/// Outcome of a successful install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Full path of the installed binary.
    pub destination: Utf8PathBuf,
    /// Whether this run created the install directory.
    pub created_dir: bool,
    /// The PATH advisory, if one was printed.
    pub advisory: Option<String>,
}

/// Runs the install workflow.
pub struct Installer<'a> {
    config: InstallConfig,
    executor: &'a dyn CommandExecutor,
}

impl<'a> Installer<'a> {
    /// Create an installer that builds through `executor`.
    #[must_use]
    pub fn new(config: InstallConfig, executor: &'a dyn CommandExecutor) -> Self {
        Self { config, executor }
    }

    /// The steps a run performs, in order.
    #[must_use]
    pub fn plan(&self) -> Vec<InstallStep> {
        let mut steps = vec![
            InstallStep::Build,
            InstallStep::CreateDir,
            InstallStep::Copy,
            InstallStep::Announce,
        ];
        if self.config.layout.path_advisory() {
            steps.push(InstallStep::CheckPath);
        }
        steps
    }

    /// The configuration this installer runs with.
    #[must_use]
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Run every step, stopping at the first failure.
    ///
    /// The completion message and advisory are written to `stdout`.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error: a toolchain failure from the
    /// build, or a filesystem error from directory creation or the copy.
    pub fn run(&self, stdout: &mut dyn Write) -> Result<InstallReport> {
        let mut report = InstallReport {
            destination: self.config.layout.destination(),
            created_dir: false,
            advisory: None,
        };

        for step in self.plan() {
            debug!("install step: {}", step.description());
            match step {
                InstallStep::Build => self.build(stdout)?,
                InstallStep::CreateDir => report.created_dir = self.create_dir()?,
                InstallStep::Copy => self.copy(&report.destination)?,
                InstallStep::Announce => announce(stdout, &report.destination)?,
                InstallStep::CheckPath => report.advisory = self.check_path(stdout)?,
            }
        }

        Ok(report)
    }

    fn build(&self, stdout: &mut dyn Write) -> Result<()> {
        BuildDriver::new(self.executor).dispatch(Target::ProdBuild, stdout)
    }

    fn create_dir(&self) -> Result<bool> {
        let dir = self.config.layout.bin_dir();
        if dir.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(dir).map_err(|source| InstallerError::CreateDir {
            path: dir.to_owned(),
            source,
        })?;
        info!("created {dir}");
        Ok(true)
    }

    fn copy(&self, destination: &Utf8Path) -> Result<()> {
        let source = self.config.artifact.require()?;

        fs::copy(source, destination).map_err(|err| InstallerError::CopyFailed {
            from: source.to_owned(),
            to: destination.to_owned(),
            source: err,
        })?;
        make_executable(source, destination)?;
        info!("copied {source} to {destination}");
        Ok(())
    }

    fn check_path(&self, stdout: &mut dyn Write) -> Result<Option<String>> {
        let layout = &self.config.layout;
        let path_var = self.config.path_var.as_deref();
        if is_on_path(self.config.path_check, layout, path_var) {
            return Ok(None);
        }

        let advisory = path_advisory(layout.bin_dir());
        writeln!(stdout, "\n{advisory}").map_err(|source| InstallerError::WriteFailed { source })?;
        Ok(Some(advisory))
    }
}

fn announce(stdout: &mut dyn Write, destination: &Utf8Path) -> Result<()> {
    writeln!(stdout, "{}", completion_message(destination))
        .map_err(|source| InstallerError::WriteFailed { source })
}

/// Mark the installed copy `rwxr-xr-x`.
#[cfg(unix)]
fn make_executable(source: &Utf8Path, destination: &Utf8Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let to_copy_error = |err| InstallerError::CopyFailed {
        from: source.to_owned(),
        to: destination.to_owned(),
        source: err,
    };
    let mut perms = fs::metadata(destination)
        .map_err(to_copy_error)?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(destination, perms).map_err(to_copy_error)
}

#[cfg(not(unix))]
fn make_executable(_source: &Utf8Path, _destination: &Utf8Path) -> Result<()> {
    Ok(())
}
