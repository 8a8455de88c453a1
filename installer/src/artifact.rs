//! Build artifact locations.
//!
//! Cargo owns the output layout: artifacts live under
//! `<target-dir>/<profile>/`, where the target directory is whatever cargo
//! reports for the workspace (honouring `CARGO_TARGET_DIR` and
//! `build.target-dir`).

use crate::error::{InstallerError, Result};
use crate::target::TOOLCHAIN_PROGRAM;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::io::ErrorKind;

/// Name of the application binary produced by the workspace.
pub const APP_BINARY: &str = "gcal-imp";

/// Cargo build profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Unoptimised development build.
    Debug,
    /// Optimised release build.
    Release,
}

impl Profile {
    /// Sub-directory of the target directory holding this profile's output.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

/// A compiled binary at its cargo-defined output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    profile: Profile,
    path: Utf8PathBuf,
}

impl BuildArtifact {
    /// Locate `binary` for `profile` under `target_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use gcal_installer::artifact::{BuildArtifact, Profile};
    ///
    /// let artifact = BuildArtifact::new(Utf8Path::new("/work/target"), Profile::Release, "gcal-imp");
    /// assert!(artifact.path().starts_with("/work/target/release"));
    /// ```
    #[must_use]
    pub fn new(target_dir: &Utf8Path, profile: Profile, binary: &str) -> Self {
        let file_name = format!("{binary}{}", std::env::consts::EXE_SUFFIX);
        Self {
            profile,
            path: target_dir.join(profile.dir_name()).join(file_name),
        }
    }

    /// The application's release binary under `target_dir`.
    #[must_use]
    pub fn release(target_dir: &Utf8Path) -> Self {
        Self::new(target_dir, Profile::Release, APP_BINARY)
    }

    /// The profile that produces this artifact.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Full path to the binary.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Return the path if the artifact exists as a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::ArtifactMissing`] otherwise.
    pub fn require(&self) -> Result<&Utf8Path> {
        if self.path.is_file() {
            Ok(&self.path)
        } else {
            Err(InstallerError::ArtifactMissing {
                path: self.path.clone(),
            })
        }
    }
}

/// Ask cargo for the target directory of the workspace containing `dir`.
///
/// # Errors
///
/// Returns [`InstallerError::Spawn`] when cargo itself cannot be started and
/// [`InstallerError::WorkspaceNotFound`] when `cargo metadata` fails, for
/// example because no manifest exists above `dir`.
pub fn locate_target_dir(dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let metadata = cargo_metadata::MetadataCommand::new()
        .current_dir(dir)
        .no_deps()
        .exec()
        .map_err(metadata_error)?;
    debug!("cargo target directory: {}", metadata.target_directory);
    Ok(metadata.target_directory)
}

fn metadata_error(err: cargo_metadata::Error) -> InstallerError {
    match err {
        cargo_metadata::Error::Io(source) if source.kind() == ErrorKind::NotFound => {
            InstallerError::Spawn {
                program: TOOLCHAIN_PROGRAM.to_owned(),
                source,
            }
        }
        other => InstallerError::WorkspaceNotFound {
            reason: other.to_string(),
        },
    }
}
