//! Search candidates derived from action definitions.

use super::ActionDefinition;

/// An [`ActionDefinition`] that is eligible in the current context, with its
/// display name resolved and a precomputed search key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    /// Unique key of the underlying definition.
    pub id: String,
    /// Localized name, falling back to the built-in name, then to `id`.
    pub display_name: String,
    /// Only offered while editing an actor's script.
    pub actor_only: bool,
    /// Always `false` for candidates produced by the catalog.
    pub deprecated: bool,
    /// Category label, if any.
    pub group: Option<String>,
    /// `"{DISPLAY_NAME} {ID}"`, uppercased.
    pub search_key: String,
}

impl SearchCandidate {
    /// Build a candidate from a definition and its resolved display name.
    pub fn new(definition: &ActionDefinition, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let search_key = format!(
            "{} {}",
            display_name.to_uppercase(),
            definition.id.to_uppercase()
        );

        Self {
            id: definition.id.clone(),
            display_name,
            actor_only: definition.actor_only,
            deprecated: definition.deprecated,
            group: definition.group.clone(),
            search_key,
        }
    }

    /// True if every word occurs somewhere in the search key.
    ///
    /// Words are expected to be uppercased already.
    pub fn matches_all(&self, words: &[String]) -> bool {
        words.iter().all(|word| self.search_key.contains(word.as_str()))
    }

    /// Smallest index at which any of the words first occurs in the search key.
    ///
    /// Words that never occur are ignored. Returns `None` if none occur.
    pub fn earliest_match(&self, words: &[String]) -> Option<usize> {
        words
            .iter()
            .filter_map(|word| self.search_key.find(word.as_str()))
            .min()
    }
}
