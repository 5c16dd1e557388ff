//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! which points at the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

/// Returns the data directory holding zatlas trace files.
///
/// Resolves to `/host/.local/share/zellij/zatlas` inside the sandbox.
///
/// # Examples
///
/// ```
/// use zatlas::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zatlas"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zatlas")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option, which users write relative to home.
///
/// # Examples
///
/// ```
/// use zatlas::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zatlas.toml"), "/etc/zatlas.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
