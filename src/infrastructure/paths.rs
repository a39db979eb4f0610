//! Path utilities for locating Spotfinder's data.
//!
//! The data directory holds the location file and the log file. It is
//! resolved from, in order:
//!
//! 1. `SPOTFINDER_DATA_DIR`
//! 2. `$HOME/.local/share/spotfinder`
//! 3. `./.spotfinder` when no home directory is known

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SPOTFINDER_DATA_DIR";

/// Returns the default data directory.
///
/// # Examples
///
/// ```no_run
/// use spotfinder::infrastructure::get_data_dir;
///
/// // With HOME=/home/ada and no override:
/// assert_eq!(get_data_dir().to_str(), Some("/home/ada/.local/share/spotfinder"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    home_dir().map_or_else(
        || PathBuf::from(".spotfinder"),
        |home| home.join(".local").join("share").join("spotfinder"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or any path when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use spotfinder::infrastructure::expand_tilde;
///
/// // With HOME=/home/ada:
/// assert_eq!(expand_tilde("~/maps"), std::path::PathBuf::from("/home/ada/maps"));
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
