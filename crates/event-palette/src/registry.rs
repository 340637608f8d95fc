//! Read-only registry of script event definitions.
//!
//! The registry is built once by the host and handed to the
//! [`CandidateCatalog`](crate::CandidateCatalog) by reference. Iteration order
//! is insertion order, which is also the order of the unfiltered palette list.

use crate::model::ActionDefinition;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A definition has an empty id.
    #[error("Event definition #{0} has an empty id")]
    EmptyId(usize),

    /// Two definitions share an id.
    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    /// The registry document is not valid TOML.
    #[error("Failed to parse event registry: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk shape of a registry document.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    event: Vec<ActionDefinition>,
}

/// Ordered, immutable set of [`ActionDefinition`]s keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    definitions: Vec<ActionDefinition>,
}

impl ActionRegistry {
    /// Build a registry, rejecting empty and duplicate ids.
    pub fn new(definitions: Vec<ActionDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if definition.id.is_empty() {
                return Err(RegistryError::EmptyId(index));
            }
            if !seen.insert(definition.id.as_str()) {
                return Err(RegistryError::DuplicateId(definition.id.clone()));
            }
        }

        log::debug!("Event registry built with {} definitions", definitions.len());
        Ok(Self { definitions })
    }

    /// Parse a registry from a TOML document of `[[event]]` tables.
    ///
    /// ```toml
    /// [[event]]
    /// id = "EVENT_ACTOR_MOVE_TO"
    /// name = "Actor Move To"
    /// actor_only = true
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content)?;
        Self::new(file.event)
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &str) -> Option<&ActionDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    /// Iterate definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.definitions.iter()
    }

    /// Number of definitions, including deprecated ones.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
