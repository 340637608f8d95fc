//! Ratatui widgets for the palette.

mod palette;

pub use palette::PaletteWidget;
