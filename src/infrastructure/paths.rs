//! Path utilities for the Zellij sandbox environment.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin
//! sandbox. These helpers translate between user-facing paths (tilde
//! prefixed, host absolute) and their sandbox equivalents, and locate the
//! plugin's data directory for log output.

use std::path::PathBuf;

/// Returns the data directory used for plugin logs.
///
/// Resolves to `/host/.local/share/zellij/zitemizer` inside the sandbox,
/// which typically maps to `~/.local/share/zellij/zitemizer` when Zellij is
/// started from the user's home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zitemizer")
}

/// Expands tilde paths to the `/host` sandbox prefix.
///
/// Image paths typed into the add-item form go through this before a media
/// handle is acquired for them.
///
/// # Examples
///
/// ```
/// use zitemizer::infrastructure::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("~/photos/shirt.jpg"), "/host/photos/shirt.jpg");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path.png"), "/absolute/path.png");
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

/// Removes the `/host` prefix from sandbox paths for display.
///
/// # Examples
///
/// ```
/// use zitemizer::infrastructure::paths::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/photos/shirt.jpg"), "/photos/shirt.jpg");
/// assert_eq!(strip_host_prefix("/absolute/path.png"), "/absolute/path.png");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion_round_trips_through_display_stripping() {
        let expanded = expand_tilde("~/photos/shirt.jpg");
        assert_eq!(strip_host_prefix(&expanded), "/photos/shirt.jpg");
    }
}
