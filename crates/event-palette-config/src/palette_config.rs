//! Palette configuration
//!
//! Configuration loaded from .event-palette.toml file.

use anyhow::{Context, Result};
use event_palette::{
    ActionRegistry, PaletteOptions, ScriptSubject, StringTable, TrimLines,
    DEFAULT_CLOSE_GRACE_PERIOD,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Palette configuration loaded from .event-palette.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// How long the palette stays open after the search field loses focus
    #[serde(default = "default_close_grace_period_ms")]
    pub close_grace_period_ms: u64,

    /// Keep at most this many lines of a free-text submission
    #[serde(default)]
    pub free_text_max_lines: Option<usize>,

    /// Truncate each line of a free-text submission to this many characters
    #[serde(default)]
    pub free_text_max_line_length: Option<usize>,

    /// TOML file with `[[event]]` definitions (built-in catalog if unset)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// TOML string table with localized event names
    #[serde(default)]
    pub locale_path: Option<PathBuf>,

    /// Subject whose script is edited at startup
    #[serde(default)]
    pub subject: ScriptSubject,
}

fn default_close_grace_period_ms() -> u64 {
    DEFAULT_CLOSE_GRACE_PERIOD.as_millis() as u64
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            close_grace_period_ms: default_close_grace_period_ms(),
            free_text_max_lines: None,
            free_text_max_line_length: None,
            catalog_path: None,
            locale_path: None,
            subject: ScriptSubject::default(),
        }
    }
}

impl PaletteConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded palette config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default palette config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid palette config")
    }

    /// Options for the palette state
    pub fn options(&self) -> PaletteOptions {
        PaletteOptions {
            close_grace_period: Duration::from_millis(self.close_grace_period_ms),
        }
    }

    /// Normalizer for free-text submissions
    pub fn normalizer(&self) -> TrimLines {
        TrimLines::new(self.free_text_max_lines, self.free_text_max_line_length)
    }

    /// Load the configured event registry, if a catalog path is set
    pub fn load_registry(&self) -> Result<Option<ActionRegistry>> {
        let Some(path) = &self.catalog_path else {
            return Ok(None);
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event catalog {}", path.display()))?;
        let registry = ActionRegistry::from_toml_str(&content)
            .with_context(|| format!("Invalid event catalog {}", path.display()))?;

        log::info!(
            "Loaded {} event definitions from {}",
            registry.len(),
            path.display()
        );
        Ok(Some(registry))
    }

    /// Load the configured string table, or an empty one
    pub fn load_strings(&self) -> Result<StringTable> {
        let Some(path) = &self.locale_path else {
            return Ok(StringTable::new());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read string table {}", path.display()))?;
        StringTable::from_toml_str(&content)
            .with_context(|| format!("Invalid string table {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert_eq!(config.close_grace_period_ms, 500);
        assert_eq!(config.options().close_grace_period, Duration::from_millis(500));
        assert_eq!(config.normalizer(), TrimLines::default());
        assert_eq!(config.subject, ScriptSubject::Actor);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            close_grace_period_ms = 250
            free_text_max_lines = 2
            free_text_max_line_length = 18
            subject = "trigger"
        "#;
        let config = PaletteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.options().close_grace_period, Duration::from_millis(250));
        assert_eq!(config.normalizer(), TrimLines::new(Some(2), Some(18)));
        assert_eq!(config.subject, ScriptSubject::Trigger);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = PaletteConfig::from_toml_str(r#"subject = "scene""#).unwrap();
        assert_eq!(config.subject, ScriptSubject::Scene);
        // Other fields should use defaults
        assert_eq!(config.close_grace_period_ms, 500);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_config_invalid() {
        assert!(PaletteConfig::from_toml_str("close_grace_period_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_load_registry_and_strings() {
        let dir = std::env::temp_dir().join(format!("event-palette-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let catalog = dir.join("events.toml");
        let locale = dir.join("en.toml");
        std::fs::write(&catalog, "[[event]]\nid = \"EVENT_WAIT\"\nname = \"Wait\"\n").unwrap();
        std::fs::write(&locale, "EVENT_WAIT = \"Pause\"\n").unwrap();

        let config = PaletteConfig {
            catalog_path: Some(catalog),
            locale_path: Some(locale),
            ..PaletteConfig::default()
        };

        let registry = config.load_registry().unwrap().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(config.load_strings().unwrap().len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = PaletteConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/events.toml")),
            ..PaletteConfig::default()
        };
        assert!(config.load_registry().is_err());
        assert!(PaletteConfig::default().load_registry().unwrap().is_none());
    }
}
