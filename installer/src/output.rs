//! User-facing messages for the installer and the build driver.

use crate::installer::InstallStep;
use crate::target::Target;
use camino::Utf8Path;
use std::io::Write;

/// Completion message printed after the binary is copied.
#[must_use]
pub fn completion_message(destination: &Utf8Path) -> String {
    format!("Installed gcal to {destination}")
}

/// Configuration information for dry-run output.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use gcal_installer::installer::InstallStep;
/// use gcal_installer::output::DryRunInfo;
///
/// let info = DryRunInfo {
///     artifact: Utf8Path::new("/work/target/release/gcal-imp"),
///     destination: Utf8Path::new("/home/user/.local/bin/gcal"),
///     path_check: "segment",
///     steps: &[InstallStep::Build, InstallStep::Copy],
/// };
///
/// let output = info.display_text();
/// assert!(output.contains("Dry run"));
/// assert!(output.contains("cargo build --release"));
/// ```
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Release artifact that would be copied.
    pub artifact: &'a Utf8Path,
    /// Where the binary would be installed.
    pub destination: &'a Utf8Path,
    /// Name of the PATH check mode.
    pub path_check: &'a str,
    /// Steps that would run, in order.
    pub steps: &'a [InstallStep],
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut lines = vec![
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Release artifact: {}", self.artifact),
            format!("Destination: {}", self.destination),
            format!("PATH check: {}", self.path_check),
            String::new(),
            "Steps:".to_owned(),
        ];

        for (index, step) in self.steps.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, step_text(*step)));
        }

        lines.join("\n")
    }
}

/// Step description, naming the cargo invocation for the build step.
fn step_text(step: InstallStep) -> String {
    match (step, Target::ProdBuild.invocation()) {
        (InstallStep::Build, Some(invocation)) => {
            format!("{} ({invocation})", step.description())
        }
        _ => step.description().to_owned(),
    }
}

/// Write a line to `out`, ignoring failures.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}
