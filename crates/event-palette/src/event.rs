//! Events emitted by the palette for the host to handle.

use crate::model::AddRequest;

/// Events emitted by [`PaletteState::handle_action`](crate::PaletteState::handle_action).
///
/// The palette never adds anything to a script itself. The host reacts to
/// [`PaletteEvent::Added`], which is emitted exactly once per successful
/// commit and never for escape, focus loss or teardown.
///
/// # Example
///
/// ```ignore
/// for event in state.handle_action(action, &catalog, subject) {
///     match event {
///         PaletteEvent::Added(AddRequest::Regular(id)) => script.push_event(&id),
///         PaletteEvent::Added(AddRequest::FreeText(text)) => script.push_text(&text),
///         PaletteEvent::Opened | PaletteEvent::Closed(_) => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// The palette opened.
    Opened,
    /// The user committed an event.
    Added(AddRequest),
    /// The palette closed.
    Closed(CloseReason),
}

/// Why the palette closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// An event was added.
    Committed,
    /// The user pressed Escape.
    Escaped,
    /// The grace period after losing focus ran out.
    FocusLost,
    /// The host tore the palette down.
    Unmounted,
}

impl PaletteEvent {
    /// The add request, if this is an `Added` event.
    pub fn as_added(&self) -> Option<&AddRequest> {
        match self {
            PaletteEvent::Added(request) => Some(request),
            _ => None,
        }
    }
}
