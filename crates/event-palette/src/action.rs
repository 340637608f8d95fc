//! Palette Actions
//!
//! Tagged actions the palette state understands. The host maps its own input
//! events (key presses, clicks, focus changes, timer ticks) to these and
//! dispatches them to [`PaletteState`](crate::PaletteState).

use crate::key::PaletteKey;
use std::time::Instant;

/// Actions that can be performed on the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    // === Open / close ===
    /// Trigger pressed: open with an empty query
    Open,
    /// Focus left the search field at this instant: close after the grace period
    RequestClose(Instant),
    /// Drop a scheduled close, if any
    CancelPendingClose,
    /// Close without adding anything
    Escape,
    /// Time has advanced; fires a scheduled close once it is due
    Tick(Instant),
    /// The host is tearing the palette down
    Unmount,

    // === Query editing ===
    /// Replace the whole query
    TypeQuery(String),
    /// Append a character to the query
    InsertChar(char),
    /// Remove the last character of the query
    Backspace,
    /// Empty the query, keep the palette open
    ClearQuery,

    // === Navigation ===
    /// Pointer moved over a row
    Hover(usize),
    /// Highlight the next row
    MoveDown,
    /// Highlight the previous row
    MoveUp,

    // === Commit ===
    /// Add the highlighted candidate
    CommitHighlighted,
    /// Add the candidate in this row (pointer click)
    Commit(usize),
    /// Add the query as a text event when nothing matches
    CommitFreeText,

    // === Keyboard ===
    /// A key pressed in the search field
    Key(PaletteKey),
}

impl PaletteAction {
    /// Actions that are handled even while the palette is closed.
    pub fn applies_when_closed(&self) -> bool {
        matches!(
            self,
            PaletteAction::Open
                | PaletteAction::CancelPendingClose
                | PaletteAction::Tick(_)
                | PaletteAction::Unmount
        )
    }

    /// Check if this action edits the query
    pub fn is_query_edit(&self) -> bool {
        matches!(
            self,
            PaletteAction::TypeQuery(_)
                | PaletteAction::InsertChar(_)
                | PaletteAction::Backspace
                | PaletteAction::ClearQuery
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_when_closed() {
        assert!(PaletteAction::Open.applies_when_closed());
        assert!(PaletteAction::Tick(Instant::now()).applies_when_closed());
        assert!(PaletteAction::Unmount.applies_when_closed());
        assert!(!PaletteAction::MoveDown.applies_when_closed());
        assert!(!PaletteAction::CommitHighlighted.applies_when_closed());
    }

    #[test]
    fn test_is_query_edit() {
        assert!(PaletteAction::InsertChar('a').is_query_edit());
        assert!(PaletteAction::TypeQuery("move".into()).is_query_edit());
        assert!(!PaletteAction::Hover(2).is_query_edit());
    }
}
