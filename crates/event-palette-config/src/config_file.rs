use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".event-palette.toml";

/// Load config file content from CWD first, then home, then the config directory
///
/// Searches for the config in:
/// 1. `.event-palette.toml` in the current working directory
/// 2. `~/.event-palette.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let candidates = [
        Some(PathBuf::from(CONFIG_FILE)),
        get_home_config_path(),
        crate::paths::global_config_path(),
    ];
    read_first(candidates.into_iter().flatten())
}

/// Read the first candidate path that exists and is readable
fn read_first(candidates: impl IntoIterator<Item = PathBuf>) -> Option<String> {
    for path in candidates {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }
    None
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.event-palette.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
