//! Fixed install locations per platform.
//!
//! - POSIX: `~/.local/bin/gcal`, with a PATH advisory after install
//! - Windows: `%USERPROFILE%\bin\gcal.exe`, no advisory

use crate::dirs::{BaseDirs, home_variable};
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Installed binary name on POSIX hosts.
pub const POSIX_BINARY_NAME: &str = "gcal";

/// Installed binary name on Windows hosts.
pub const WINDOWS_BINARY_NAME: &str = "gcal.exe";

/// Where the release binary is installed and how the install is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    home: Utf8PathBuf,
    bin_dir: Utf8PathBuf,
    binary_name: &'static str,
    path_advisory: bool,
}

impl InstallLayout {
    /// Layout used by the POSIX installer: `<home>/.local/bin/gcal`.
    #[must_use]
    pub fn posix(home: &Utf8Path) -> Self {
        Self {
            home: home.to_owned(),
            bin_dir: home.join(".local").join("bin"),
            binary_name: POSIX_BINARY_NAME,
            path_advisory: true,
        }
    }

    /// Layout used by the Windows installer: `<profile>\bin\gcal.exe`.
    #[must_use]
    pub fn windows(profile: &Utf8Path) -> Self {
        Self {
            home: profile.to_owned(),
            bin_dir: profile.join("bin"),
            binary_name: WINDOWS_BINARY_NAME,
            path_advisory: false,
        }
    }

    /// Layout for the host platform, rooted at the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::HomeDirUnavailable`] if no home directory is
    /// known, or [`InstallerError::NonUtf8Path`] if it is not valid UTF-8.
    pub fn for_host(dirs: &dyn BaseDirs) -> Result<Self> {
        let home = dirs
            .home_dir()
            .ok_or(InstallerError::HomeDirUnavailable {
                variable: home_variable(),
            })?;
        let home = Utf8PathBuf::try_from(home).map_err(|err| InstallerError::NonUtf8Path {
            path: err.as_path().to_string_lossy().into_owned(),
        })?;

        if cfg!(windows) {
            Ok(Self::windows(&home))
        } else {
            Ok(Self::posix(&home))
        }
    }

    /// The user's home directory the layout is rooted at.
    #[must_use]
    pub fn home(&self) -> &Utf8Path {
        &self.home
    }

    /// The install directory.
    #[must_use]
    pub fn bin_dir(&self) -> &Utf8Path {
        &self.bin_dir
    }

    /// The fixed file name of the installed binary.
    #[must_use]
    pub const fn binary_name(&self) -> &'static str {
        self.binary_name
    }

    /// Whether the PATH advisory runs after installing.
    #[must_use]
    pub const fn path_advisory(&self) -> bool {
        self.path_advisory
    }

    /// Full path of the installed binary.
    #[must_use]
    pub fn destination(&self) -> Utf8PathBuf {
        self.bin_dir.join(self.binary_name)
    }
}
