//! # event-palette
//!
//! A standalone "add event" palette for a visual scripting editor. A trigger
//! opens a searchable list of the script events that are valid for the
//! current subject; the user filters by free text, moves through the ranked
//! results with the keyboard and either picks an event or, when nothing
//! matches, submits the query itself as a text event.
//!
//! ## Design Principles
//!
//! The palette is **instrumented**: it never touches the script it is adding
//! to. The orchestrating application owns the [`ActionRegistry`] and the
//! "add" side effect, feeds [`PaletteAction`]s into [`PaletteState`] and
//! reacts to the [`PaletteEvent`]s it gets back.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use event_palette::{
//!     ActionRegistry, CandidateCatalog, NoLocalization, PaletteAction, PaletteEvent,
//!     PaletteState, ScriptSubject,
//! };
//!
//! let registry = ActionRegistry::from_toml_str(catalog_toml)?;
//! let catalog = CandidateCatalog::new(&registry, &NoLocalization);
//! let mut state = PaletteState::default();
//!
//! state.handle_action(PaletteAction::Open, &catalog, ScriptSubject::Actor);
//! state.handle_action(PaletteAction::TypeQuery("move".into()), &catalog, ScriptSubject::Actor);
//! for event in state.handle_action(PaletteAction::CommitHighlighted, &catalog, ScriptSubject::Actor) {
//!     if let PaletteEvent::Added(request) = event {
//!         script.push(request);
//!     }
//! }
//! ```

pub mod action;
pub mod catalog;
pub mod event;
pub mod highlight;
pub mod key;
pub mod model;
pub mod registry;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::PaletteAction;
pub use catalog::{search_words, CandidateCatalog};
pub use event::{CloseReason, PaletteEvent};
pub use highlight::{highlight_segments, Segment};
pub use key::PaletteKey;
pub use model::{ActionDefinition, AddRequest, ScriptSubject, SearchCandidate, FREE_TEXT_EVENT};
pub use registry::{ActionRegistry, RegistryError};
pub use state::{PaletteOptions, PaletteState, PendingClose, DEFAULT_CLOSE_GRACE_PERIOD};
pub use traits::{
    dispatch_add, AddHandler, LocaleError, Localizer, NoLocalization, StringTable,
    TextNormalizer, TrimLines,
};
pub use widget::PaletteWidget;
