//! The kind of entity whose script is being edited.

use serde::Deserialize;
use std::fmt;

/// The scriptable entity the palette adds events to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSubject {
    #[default]
    Actor,
    Trigger,
    Scene,
}

impl ScriptSubject {
    /// Actor-only events are offered only when this is true.
    pub fn is_actor(self) -> bool {
        self == ScriptSubject::Actor
    }

    /// Cycle to the next subject kind.
    pub fn next(self) -> Self {
        match self {
            ScriptSubject::Actor => ScriptSubject::Trigger,
            ScriptSubject::Trigger => ScriptSubject::Scene,
            ScriptSubject::Scene => ScriptSubject::Actor,
        }
    }
}

impl From<bool> for ScriptSubject {
    /// `true` means "editing an actor". Any other subject behaves the same
    /// for filtering purposes, so `false` maps to [`ScriptSubject::Scene`].
    fn from(is_actor: bool) -> Self {
        if is_actor {
            ScriptSubject::Actor
        } else {
            ScriptSubject::Scene
        }
    }
}

impl fmt::Display for ScriptSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScriptSubject::Actor => "actor",
            ScriptSubject::Trigger => "trigger",
            ScriptSubject::Scene => "scene",
        };
        f.write_str(label)
    }
}
