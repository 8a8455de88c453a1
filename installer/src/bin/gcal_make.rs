//! Build driver CLI entrypoint.
//!
//! Forwards one named target to its cargo subcommand and exits with cargo's
//! exit code.

use clap::Parser;
use gcal_installer::cli::MakeCli;
use gcal_installer::driver::BuildDriver;
use gcal_installer::error::Result;
use gcal_installer::executor::{CommandExecutor, SystemCommandExecutor};
use gcal_installer::logging::init_logging;
use gcal_installer::output::write_line;
use gcal_installer::target::Target;
use std::io::Write;

fn main() {
    let cli = MakeCli::parse();
    init_logging(cli.verbosity, cli.quiet);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let result = run(cli.target, &SystemCommandExecutor, &mut stdout);
    let exit_code = exit_code_for_run_result(result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(target: Target, executor: &dyn CommandExecutor, stdout: &mut dyn Write) -> Result<()> {
    BuildDriver::new(executor).dispatch(target, stdout)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, format!("gcal-make: {err}"));
            err.exit_code()
        }
    }
}
