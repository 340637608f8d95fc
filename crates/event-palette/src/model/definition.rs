//! Static description of one kind of script event.

use serde::Deserialize;

/// A script event that can be added through the palette.
///
/// Definitions are owned by the [`ActionRegistry`](crate::ActionRegistry) and
/// never change after the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionDefinition {
    /// Unique key, e.g. `"EVENT_ACTOR_MOVE_TO"`.
    pub id: String,
    /// Built-in name used when the string table has no entry for `id`.
    #[serde(default)]
    pub name: Option<String>,
    /// Only offered while editing an actor's script.
    #[serde(default)]
    pub actor_only: bool,
    /// Kept for old projects, never offered for new scripts.
    #[serde(default)]
    pub deprecated: bool,
    /// Category shown next to the name.
    #[serde(default)]
    pub group: Option<String>,
}

impl ActionDefinition {
    /// Create a definition with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            actor_only: false,
            deprecated: false,
            group: None,
        }
    }

    /// Set the built-in display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict the definition to actor scripts.
    pub fn actor_only(mut self) -> Self {
        self.actor_only = true;
        self
    }

    /// Mark the definition as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Set the category label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let def = ActionDefinition::new("EVENT_WAIT")
            .with_name("Wait")
            .with_group("Timing");
        assert_eq!(def.id, "EVENT_WAIT");
        assert_eq!(def.name.as_deref(), Some("Wait"));
        assert_eq!(def.group.as_deref(), Some("Timing"));
        assert!(!def.actor_only);
        assert!(!def.deprecated);

        let def = ActionDefinition::new("EVENT_ACTOR_HIDE").actor_only().deprecated();
        assert!(def.actor_only);
        assert!(def.deprecated);
    }

    #[test]
    fn test_deserialize_defaults() {
        let def: ActionDefinition = toml::from_str(r#"id = "EVENT_END""#).unwrap();
        assert_eq!(def, ActionDefinition::new("EVENT_END"));
    }
}
