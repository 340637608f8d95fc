//! Trait for resolving localized event names.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when loading a string table.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The string table is not a flat TOML table of strings.
    #[error("Failed to parse string table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Looks up the localized label for a key (usually an event id).
///
/// Implement this trait to connect the palette to the host's translation
/// system. Returning `None` makes the catalog fall back to the definition's
/// built-in name and then to its id.
///
/// # Example
///
/// ```ignore
/// struct Fluent(FluentBundle<FluentResource>);
///
/// impl Localizer for Fluent {
///     fn localize(&self, key: &str) -> Option<&str> {
///         self.0.get_message(key)?.value().and_then(pattern_as_str)
///     }
/// }
/// ```
pub trait Localizer {
    /// Localized label for `key`, if one exists.
    fn localize(&self, key: &str) -> Option<&str>;
}

/// A localizer that never has a translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl Localizer for NoLocalization {
    fn localize(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// In-memory key → label table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat TOML table (`EVENT_WAIT = "Wait"`).
    pub fn from_toml_str(content: &str) -> Result<Self, LocaleError> {
        let table: StringTable = toml::from_str(content)?;
        log::debug!("Loaded string table with {} entries", table.len());
        Ok(table)
    }

    /// Add or replace a label.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.strings.insert(key.into(), label.into());
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if the table has no labels.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for StringTable {
    fn localize(&self, key: &str) -> Option<&str> {
        // An empty label is treated as missing
        self.strings
            .get(key)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
