//! State management for the palette widget.

mod close_timer;
mod palette_state;

pub use close_timer::{PaletteOptions, PendingClose, DEFAULT_CLOSE_GRACE_PERIOD};
pub use palette_state::PaletteState;
