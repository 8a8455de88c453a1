//! Tests for CLI parsing and default behaviours.

use super::*;
use rstest::rstest;

#[test]
fn make_cli_defaults_to_help() {
    let cli = MakeCli::parse_from(["gcal-make"]);
    assert_eq!(cli.target, Target::Help);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
}

#[rstest]
#[case::build("build", Target::Build)]
#[case::prod_build("prod-build", Target::ProdBuild)]
#[case::test("test", Target::Test)]
#[case::run("run", Target::Run)]
#[case::clean("clean", Target::Clean)]
#[case::check("check", Target::Check)]
#[case::fmt("fmt", Target::Fmt)]
#[case::lint("lint", Target::Lint)]
#[case::help("help", Target::Help)]
fn make_cli_parses_every_target(#[case] arg: &str, #[case] expected: Target) {
    let cli = MakeCli::parse_from(["gcal-make", arg]);
    assert_eq!(cli.target, expected);
}

#[test]
fn make_cli_rejects_unknown_target() {
    let result = MakeCli::try_parse_from(["gcal-make", "install"]);
    assert!(result.is_err());
}

#[test]
fn make_cli_rejects_extra_arguments() {
    let result = MakeCli::try_parse_from(["gcal-make", "build", "--release"]);
    assert!(result.is_err());
}

#[test]
fn install_cli_parses_defaults() {
    let cli = InstallCli::parse_from(["gcal-install"]);
    assert!(!cli.dry_run);
    assert_eq!(cli.path_check, PathCheck::Segment);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
}

#[test]
fn install_cli_parses_substring_path_check() {
    let cli = InstallCli::parse_from(["gcal-install", "--path-check", "substring"]);
    assert_eq!(cli.path_check, PathCheck::Substring);
}

#[test]
fn install_cli_counts_verbosity() {
    let cli = InstallCli::parse_from(["gcal-install", "-vv", "--dry-run"]);
    assert_eq!(cli.verbosity, 2);
    assert!(cli.dry_run);
}

#[test]
fn install_cli_rejects_quiet_with_verbose() {
    let result = InstallCli::try_parse_from(["gcal-install", "-q", "-v"]);
    assert!(result.is_err());
}

#[test]
fn install_cli_rejects_positional_arguments() {
    let result = InstallCli::try_parse_from(["gcal-install", "somewhere"]);
    assert!(result.is_err());
}
