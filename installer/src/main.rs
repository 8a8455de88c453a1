//! gcal installer CLI entrypoint.
//!
//! Builds gcal-imp in release mode and installs the binary as `gcal` in the
//! user-local bin directory. The same steps run on every platform and the
//! first failure ends the run with that step's exit code.

use camino::Utf8PathBuf;
use clap::Parser;
use gcal_installer::artifact::{BuildArtifact, locate_target_dir};
use gcal_installer::cli::InstallCli;
use gcal_installer::dirs::{BaseDirs, SystemBaseDirs};
use gcal_installer::error::{InstallerError, Result};
use gcal_installer::executor::{CommandExecutor, SystemCommandExecutor};
use gcal_installer::installer::{InstallConfig, Installer};
use gcal_installer::layout::InstallLayout;
use gcal_installer::logging::init_logging;
use gcal_installer::output::{DryRunInfo, write_line};
use std::io::Write;

fn main() {
    let cli = InstallCli::parse();
    init_logging(cli.verbosity, cli.quiet);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &SystemCommandExecutor, &SystemBaseDirs, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(
    cli: &InstallCli,
    executor: &dyn CommandExecutor,
    dirs: &dyn BaseDirs,
    stdout: &mut dyn Write,
) -> Result<()> {
    let cwd = current_dir_utf8()?;
    let target_dir = locate_target_dir(&cwd)?;
    let config = InstallConfig {
        artifact: BuildArtifact::release(&target_dir),
        layout: InstallLayout::for_host(dirs)?,
        path_check: cli.path_check,
        path_var: std::env::var_os("PATH"),
    };
    let installer = Installer::new(config, executor);

    if cli.dry_run {
        print_dry_run_info(&installer, stdout);
        return Ok(());
    }

    installer.run(stdout)?;
    Ok(())
}

/// Prints the install plan without side effects.
fn print_dry_run_info(installer: &Installer<'_>, stdout: &mut dyn Write) {
    let config = installer.config();
    let destination = config.layout.destination();
    let steps = installer.plan();
    let info = DryRunInfo {
        artifact: config.artifact.path(),
        destination: &destination,
        path_check: config.path_check.name(),
        steps: &steps,
    };
    write_line(stdout, info.display_text());
}

/// Gets the current directory as a UTF-8 path.
fn current_dir_utf8() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::try_from(cwd).map_err(|e| InstallerError::NonUtf8Path {
        path: e.as_path().to_string_lossy().into_owned(),
    })
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, format!("gcal-install: {err}"));
            err.exit_code()
        }
    }
}
