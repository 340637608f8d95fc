//! Trait for receiving committed events.

use crate::model::AddRequest;

/// Receives the event the user committed in the palette.
///
/// This is the callback shape hosts usually already have: an event id plus
/// an optional text payload. [`dispatch_add`] bridges an [`AddRequest`] to it.
///
/// # Example
///
/// ```ignore
/// let mut script = Vec::new();
/// let mut handler = |id: &str, text: Option<&str>| {
///     script.push(ScriptEvent::new(id, text));
/// };
///
/// for event in state.handle_action(action, &catalog, subject) {
///     if let PaletteEvent::Added(request) = event {
///         dispatch_add(&mut handler, &request);
///     }
/// }
/// ```
pub trait AddHandler {
    /// Add the event `event_id`, carrying `text` for free-text events.
    fn on_add(&mut self, event_id: &str, text: Option<&str>);
}

impl<F> AddHandler for F
where
    F: FnMut(&str, Option<&str>),
{
    fn on_add(&mut self, event_id: &str, text: Option<&str>) {
        self(event_id, text)
    }
}

/// Forward a commit to a handler.
pub fn dispatch_add<H: AddHandler + ?Sized>(handler: &mut H, request: &AddRequest) {
    log::debug!("Adding event {}", request.event_id());
    handler.on_add(request.event_id(), request.text());
}
