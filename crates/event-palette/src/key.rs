//! Keys the palette reacts to while its search field has focus.

use ratatui::crossterm::event::KeyCode;

/// A key press in the search field, reduced to what the palette cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    /// Commit the highlighted candidate, or the query as text
    Enter,
    /// Close without committing
    Escape,
    /// Highlight the next row
    ArrowDown,
    /// Highlight the previous row
    ArrowUp,
    /// Anything else; only re-validates the highlight
    Other,
}

impl From<KeyCode> for PaletteKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter => PaletteKey::Enter,
            KeyCode::Esc => PaletteKey::Escape,
            KeyCode::Down => PaletteKey::ArrowDown,
            KeyCode::Up => PaletteKey::ArrowUp,
            _ => PaletteKey::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_code() {
        assert_eq!(PaletteKey::from(KeyCode::Enter), PaletteKey::Enter);
        assert_eq!(PaletteKey::from(KeyCode::Esc), PaletteKey::Escape);
        assert_eq!(PaletteKey::from(KeyCode::Down), PaletteKey::ArrowDown);
        assert_eq!(PaletteKey::from(KeyCode::Up), PaletteKey::ArrowUp);
        assert_eq!(PaletteKey::from(KeyCode::Char('j')), PaletteKey::Other);
        assert_eq!(PaletteKey::from(KeyCode::Tab), PaletteKey::Other);
    }
}
