//! Path utilities for the data directory and user-supplied paths.
//!
//! The data directory holds `storage.json` (the key-value store backing the
//! liked set) and the OTLP trace files.

use std::env;
use std::path::{Path, PathBuf};

/// File name of the key-value store inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Returns the data directory for fisheye storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/fisheye`
/// 2. `$HOME/.local/share/fisheye`
/// 3. `./.fisheye`
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(env::var_os("XDG_DATA_HOME").map(PathBuf::from), env::var_os("HOME").map(PathBuf::from))
}

fn resolve_data_dir(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.is_absolute()) {
        return xdg.join("fisheye");
    }
    if let Some(home) = home.filter(|p| !p.as_os_str().is_empty()) {
        return home.join(".local").join("share").join("fisheye");
    }
    PathBuf::from(".fisheye")
}

/// Location of the key-value store file inside `data_dir`.
#[must_use]
pub fn storage_file(data_dir: &Path) -> PathBuf {
    data_dir.join(STORAGE_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or a tilde when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use fisheye::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("data/catalog.json"), "data/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match (path, home) {
        ("~", Some(home)) => home.to_string(),
        (p, Some(home)) if p.starts_with("~/") => p.replacen('~', home, 1),
        (p, _) => p.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_prefers_xdg_then_home() {
        assert_eq!(
            resolve_data_dir(Some("/xdg".into()), Some("/home/ada".into())),
            PathBuf::from("/xdg/fisheye")
        );
        assert_eq!(
            resolve_data_dir(Some("relative".into()), Some("/home/ada".into())),
            PathBuf::from("/home/ada/.local/share/fisheye")
        );
        assert_eq!(resolve_data_dir(None, None), PathBuf::from(".fisheye"));
    }

    #[test]
    fn tilde_expands_only_at_start() {
        assert_eq!(expand_tilde_with("~/photos", Some("/home/ada")), "/home/ada/photos");
        assert_eq!(expand_tilde_with("~", Some("/home/ada")), "/home/ada");
        assert_eq!(expand_tilde_with("a/~/b", Some("/home/ada")), "a/~/b");
        assert_eq!(expand_tilde_with("~/photos", None), "~/photos");
    }

    #[test]
    fn storage_file_lives_in_data_dir() {
        assert_eq!(storage_file(Path::new("/d")), PathBuf::from("/d/storage.json"));
    }
}
