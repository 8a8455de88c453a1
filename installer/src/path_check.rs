//! PATH membership check run after a POSIX install.
//!
//! The historical shell installer tested membership with a substring match
//! against the raw `PATH` string, so an unrelated entry such as
//! `/opt/.local/bin` suppressed the advisory. [`PathCheck::Substring`]
//! reproduces that behaviour; [`PathCheck::Segment`] compares whole entries.

use crate::layout::InstallLayout;
use camino::Utf8Path;
use std::ffi::OsStr;
use std::path::Path;

/// How the install directory is looked up in `PATH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PathCheck {
    /// Compare each `PATH` entry against the install directory.
    #[default]
    Segment,
    /// Search the raw `PATH` string for the home-relative install directory.
    Substring,
}

impl PathCheck {
    /// The name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Substring => "substring",
        }
    }
}

/// Check whether the layout's install directory is on `path_var`.
///
/// An unset `PATH` contains nothing.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use gcal_installer::layout::InstallLayout;
/// use gcal_installer::path_check::{PathCheck, is_on_path};
/// use std::ffi::OsStr;
///
/// let layout = InstallLayout::posix(Utf8Path::new("/home/user"));
/// let path = OsStr::new("/opt/.local/bin:/usr/bin");
///
/// assert!(!is_on_path(PathCheck::Segment, &layout, Some(path)));
/// assert!(is_on_path(PathCheck::Substring, &layout, Some(path)));
/// ```
#[must_use]
pub fn is_on_path(mode: PathCheck, layout: &InstallLayout, path_var: Option<&OsStr>) -> bool {
    let Some(path_var) = path_var else {
        return false;
    };

    match mode {
        PathCheck::Segment => std::env::split_paths(path_var)
            .any(|entry| same_directory(&entry, layout.bin_dir().as_std_path())),
        PathCheck::Substring => {
            let needle = home_relative(layout.bin_dir(), layout.home());
            path_var.to_string_lossy().contains(needle.as_str())
        }
    }
}

/// Component-wise comparison, so trailing separators do not matter.
fn same_directory(entry: &Path, dir: &Path) -> bool {
    entry.components().eq(dir.components())
}

/// The install directory relative to home, or the full path if unrelated.
fn home_relative<'a>(dir: &'a Utf8Path, home: &Utf8Path) -> &'a Utf8Path {
    dir.strip_prefix(home).unwrap_or(dir)
}

/// Advisory printed when the install directory is missing from `PATH`.
#[must_use]
pub fn path_advisory(bin_dir: &Utf8Path) -> String {
    format!(
        concat!(
            "Note: {dir} is not in your PATH.\n",
            "Add the following to your shell profile (~/.bashrc or ~/.zshrc):\n",
            "  export PATH=\"{dir}:$PATH\""
        ),
        dir = bin_dir
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::ffi::OsString;

    #[fixture]
    fn layout() -> InstallLayout {
        InstallLayout::posix(Utf8Path::new("/home/user"))
    }

    fn joined(entries: &[&str]) -> OsString {
        std::env::join_paths(entries).expect("entries should join")
    }

    #[rstest]
    #[case::present(&["/usr/bin", "/home/user/.local/bin"], true)]
    #[case::trailing_separator(&["/home/user/.local/bin/", "/usr/bin"], true)]
    #[case::absent(&["/usr/bin", "/bin"], false)]
    #[case::unrelated_longer_entry(&["/opt/.local/bin", "/usr/bin"], false)]
    #[case::prefix_only(&["/home/user/.local/bin2"], false)]
    fn segment_mode_matches_whole_entries(
        layout: InstallLayout,
        #[case] entries: &[&str],
        #[case] expected: bool,
    ) {
        let path = joined(entries);
        assert_eq!(
            is_on_path(PathCheck::Segment, &layout, Some(&path)),
            expected
        );
    }

    #[rstest]
    #[case::present(&["/usr/bin", "/home/user/.local/bin"], true)]
    #[case::absent(&["/usr/bin", "/bin"], false)]
    #[case::unrelated_longer_entry(&["/opt/.local/bin", "/usr/bin"], true)]
    fn substring_mode_reproduces_raw_containment(
        layout: InstallLayout,
        #[case] entries: &[&str],
        #[case] expected: bool,
    ) {
        let path = joined(entries);
        assert_eq!(
            is_on_path(PathCheck::Substring, &layout, Some(&path)),
            expected
        );
    }

    #[rstest]
    #[case::segment(PathCheck::Segment)]
    #[case::substring(PathCheck::Substring)]
    fn unset_path_contains_nothing(layout: InstallLayout, #[case] mode: PathCheck) {
        assert!(!is_on_path(mode, &layout, None));
    }

    #[test]
    fn segment_is_the_default_mode() {
        assert_eq!(PathCheck::default(), PathCheck::Segment);
    }

    #[test]
    fn advisory_names_directory_and_export_line() {
        let text = path_advisory(Utf8Path::new("/home/user/.local/bin"));
        assert!(text.contains("/home/user/.local/bin is not in your PATH"));
        assert!(text.contains("export PATH=\"/home/user/.local/bin:$PATH\""));
    }
}
