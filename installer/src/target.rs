//! Build driver targets and their cargo invocations.
//!
//! Each target maps to exactly one cargo subcommand with a fixed argument
//! list. `help` is the only target that runs nothing.

use crate::executor::Invocation;
use std::fmt;
use std::str::FromStr;

/// The toolchain program every target delegates to.
pub const TOOLCHAIN_PROGRAM: &str = "cargo";

/// A named build driver target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Target {
    /// Debug compile.
    Build,
    /// Optimised release compile.
    ProdBuild,
    /// Run the test suite.
    Test,
    /// Compile if needed and run the application in the foreground.
    Run,
    /// Remove build outputs.
    Clean,
    /// Type and borrow check without code generation.
    Check,
    /// Reformat sources in place.
    Fmt,
    /// Static analysis with warnings treated as errors.
    Lint,
    /// Print usage text.
    Help,
}

impl Target {
    /// Every target, in the order they are listed in the usage text.
    pub const ALL: [Self; 9] = [
        Self::Build,
        Self::ProdBuild,
        Self::Test,
        Self::Run,
        Self::Clean,
        Self::Check,
        Self::Fmt,
        Self::Lint,
        Self::Help,
    ];

    /// The name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::ProdBuild => "prod-build",
            Self::Test => "test",
            Self::Run => "run",
            Self::Clean => "clean",
            Self::Check => "check",
            Self::Fmt => "fmt",
            Self::Lint => "lint",
            Self::Help => "help",
        }
    }

    /// One-line description shown in the usage text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Build => "Build the project in debug mode",
            Self::ProdBuild => "Build the project in release mode",
            Self::Test => "Run the test suite",
            Self::Run => "Build and run the application",
            Self::Clean => "Remove build artifacts",
            Self::Check => "Check the project compiles without building",
            Self::Fmt => "Format the source code",
            Self::Lint => "Run clippy with warnings denied",
            Self::Help => "Show this help message",
        }
    }

    /// The cargo arguments this target runs with.
    #[must_use]
    pub const fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Self::Build => &["build"],
            Self::ProdBuild => &["build", "--release"],
            Self::Test => &["test"],
            Self::Run => &["run"],
            Self::Clean => &["clean"],
            Self::Check => &["check"],
            Self::Fmt => &["fmt"],
            Self::Lint => &["clippy", "--", "-D", "warnings"],
            Self::Help => &[],
        }
    }

    /// The single external invocation for this target, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcal_installer::target::Target;
    ///
    /// let invocation = Target::ProdBuild.invocation().expect("prod-build runs cargo");
    /// assert_eq!(invocation.to_string(), "cargo build --release");
    /// assert!(Target::Help.invocation().is_none());
    /// ```
    #[must_use]
    pub fn invocation(self) -> Option<Invocation> {
        match self {
            Self::Help => None,
            _ => Some(Invocation::new(
                TOOLCHAIN_PROGRAM,
                self.cargo_args().iter().copied(),
            )),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown target name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target '{0}'")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| UnknownTarget(s.to_owned()))
    }
}

/// Render the usage text printed by the `help` target.
#[must_use]
pub fn usage_text() -> String {
    let mut lines = vec!["Available targets:".to_owned()];
    for target in Target::ALL {
        lines.push(format!("  {:<12}- {}", target.name(), target.description()));
    }
    lines.join("\n")
}
