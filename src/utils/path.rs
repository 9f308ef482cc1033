//! Path utilities: expand ~ and resolve the export directory.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory CSV exports go to: the configured path, else the user's
/// download directory, else the current directory.
pub fn resolve_download_dir(configured: &str) -> PathBuf {
    if !configured.trim().is_empty() {
        return expand_tilde(configured.trim());
    }
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
