//! Home directory resolution behind a mockable trait.

use std::path::PathBuf;

/// Supplies the per-user directories the installer depends on.
#[cfg_attr(test, mockall::automock)]
pub trait BaseDirs {
    /// The user's home directory (`HOME` on Unix, the profile directory on
    /// Windows).
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Resolves directories from the running system via `directories-next`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn home_dir(&self) -> Option<PathBuf> {
        directories_next::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// The environment variable that normally provides the home directory.
#[must_use]
pub const fn home_variable() -> &'static str {
    if cfg!(windows) { "USERPROFILE" } else { "HOME" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn system_home_dir_follows_home_variable() {
        let temp = tempfile::TempDir::new().expect("failed to create temp dir");
        let home = temp.path().to_path_buf();

        let resolved = temp_env::with_var("HOME", Some(&home), || SystemBaseDirs.home_dir());

        assert_eq!(resolved, Some(home));
    }

    #[test]
    fn home_variable_matches_platform() {
        #[cfg(unix)]
        assert_eq!(home_variable(), "HOME");
        #[cfg(windows)]
        assert_eq!(home_variable(), "USERPROFILE");
    }
}
