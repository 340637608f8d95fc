//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/event-palette/`, `~/.cache/event-palette/`
//! - macOS: `~/Library/Application Support/event-palette/`, `~/Library/Caches/event-palette/`
//! - Windows: `%APPDATA%\event-palette\`, `%LOCALAPPDATA%\event-palette\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "event-palette";

fn app_dir(base: &Path) -> PathBuf {
    base.join(APP_NAME)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = app_dir(&base);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Path of the config file inside the config directory, if it can be determined
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| app_dir(&base).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir() {
        let dir = app_dir(Path::new("/tmp/base"));
        assert_eq!(dir, PathBuf::from("/tmp/base/event-palette"));
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_global_config_path_file_name() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("event-palette/config.toml"));
        }
    }
}
