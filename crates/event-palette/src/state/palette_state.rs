//! Main state for the palette widget.

use super::{PaletteOptions, PendingClose};
use crate::action::PaletteAction;
use crate::catalog::CandidateCatalog;
use crate::event::{CloseReason, PaletteEvent};
use crate::key::PaletteKey;
use crate::model::{AddRequest, ScriptSubject, SearchCandidate};
use crate::traits::{TextNormalizer, TrimLines};
use std::time::Instant;

/// Transient state of one palette instance.
///
/// `highlighted_index` always lies in `[0, max(0, len - 1)]` of the filtered
/// list after any action that can change the list's length.
#[derive(Debug, Clone)]
pub struct PaletteState<N = TrimLines> {
    /// Current search text.
    pub query: String,
    /// Whether the candidate list is shown.
    pub is_open: bool,
    /// Row of the filtered list that Enter would commit.
    pub highlighted_index: usize,
    /// Scheduled close, if focus was lost.
    pending_close: Option<PendingClose>,
    options: PaletteOptions,
    normalizer: N,
}

impl Default for PaletteState<TrimLines> {
    fn default() -> Self {
        Self::new(PaletteOptions::default())
    }
}

impl PaletteState<TrimLines> {
    /// Create a closed palette using the default free-text normalizer.
    pub fn new(options: PaletteOptions) -> Self {
        Self::with_normalizer(options, TrimLines::default())
    }
}

impl<N: TextNormalizer> PaletteState<N> {
    /// Create a closed palette with a custom free-text normalizer.
    pub fn with_normalizer(options: PaletteOptions, normalizer: N) -> Self {
        Self {
            query: String::new(),
            is_open: false,
            highlighted_index: 0,
            pending_close: None,
            options,
            normalizer,
        }
    }

    /// The scheduled close, if any.
    pub fn pending_close(&self) -> Option<&PendingClose> {
        self.pending_close.as_ref()
    }

    /// Options this palette was created with.
    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    /// Candidates for the current query.
    pub fn filtered(
        &self,
        catalog: &CandidateCatalog<'_>,
        subject: impl Into<ScriptSubject>,
    ) -> Vec<SearchCandidate> {
        catalog.filtered_list(&self.query, subject)
    }

    /// The candidate Enter would commit right now.
    pub fn highlighted(
        &self,
        catalog: &CandidateCatalog<'_>,
        subject: impl Into<ScriptSubject>,
    ) -> Option<SearchCandidate> {
        self.filtered(catalog, subject)
            .into_iter()
            .nth(self.highlighted_index)
    }

    /// Process an action and return the events it produced.
    ///
    /// Actions other than `Open`, `CancelPendingClose`, `Tick` and `Unmount`
    /// are ignored while the palette is closed.
    pub fn handle_action(
        &mut self,
        action: PaletteAction,
        catalog: &CandidateCatalog<'_>,
        subject: impl Into<ScriptSubject>,
    ) -> Vec<PaletteEvent> {
        let subject = subject.into();
        let mut events = Vec::new();

        if !self.is_open && !action.applies_when_closed() {
            log::trace!("Palette closed, ignoring {:?}", action);
            return events;
        }

        match action {
            PaletteAction::Open => {
                self.cancel_pending_close();
                self.query.clear();
                self.highlighted_index = 0;
                if !self.is_open {
                    self.is_open = true;
                    log::debug!("Palette opened for {}", subject);
                    events.push(PaletteEvent::Opened);
                }
            }
            PaletteAction::CancelPendingClose => self.cancel_pending_close(),
            PaletteAction::Tick(now) => {
                if let Some(event) = self.fire_pending_close(now) {
                    events.push(event);
                }
            }
            PaletteAction::Unmount => {
                self.cancel_pending_close();
                if self.is_open {
                    self.is_open = false;
                    events.push(PaletteEvent::Closed(CloseReason::Unmounted));
                }
            }
            action => self.handle_open_action(action, catalog, subject, &mut events),
        }

        events
    }

    /// Handle actions while the palette is open.
    fn handle_open_action(
        &mut self,
        action: PaletteAction,
        catalog: &CandidateCatalog<'_>,
        subject: ScriptSubject,
        events: &mut Vec<PaletteEvent>,
    ) {
        // The subject may differ from the last call, so the list may have shrunk
        self.clamp_highlight(catalog, subject);
        let edits_query = action.is_query_edit();

        match action {
            PaletteAction::RequestClose(now) => {
                // Keep the earliest deadline if focus is lost twice
                if self.pending_close.is_none() {
                    self.pending_close =
                        Some(PendingClose::new(now, self.options.close_grace_period));
                    log::debug!(
                        "Palette close scheduled in {:?}",
                        self.options.close_grace_period
                    );
                }
            }
            PaletteAction::Escape => {
                self.cancel_pending_close();
                self.is_open = false;
                events.push(PaletteEvent::Closed(CloseReason::Escaped));
            }

            // === Query editing ===
            PaletteAction::TypeQuery(text) => self.query = text,
            PaletteAction::InsertChar(c) => self.query.push(c),
            PaletteAction::Backspace => {
                self.query.pop();
            }
            PaletteAction::ClearQuery => self.query.clear(),

            // === Navigation ===
            PaletteAction::Hover(index) => {
                if index < self.filtered(catalog, subject).len() {
                    self.highlighted_index = index;
                }
            }
            PaletteAction::MoveDown => {
                let last = self.filtered(catalog, subject).len().saturating_sub(1);
                self.highlighted_index = (self.highlighted_index + 1).min(last);
            }
            PaletteAction::MoveUp => {
                self.highlighted_index = self.highlighted_index.saturating_sub(1);
            }

            // === Commit ===
            PaletteAction::CommitHighlighted => {
                self.commit_row(self.highlighted_index, catalog, subject, events);
            }
            PaletteAction::Commit(index) => self.commit_row(index, catalog, subject, events),
            PaletteAction::CommitFreeText => self.commit_free_text(catalog, subject, events),

            PaletteAction::Key(key) => self.handle_key(key, catalog, subject, events),

            PaletteAction::Open
            | PaletteAction::CancelPendingClose
            | PaletteAction::Tick(_)
            | PaletteAction::Unmount => {}
        }

        if edits_query {
            self.clamp_highlight(catalog, subject);
        }
    }

    /// Keyboard dispatch policy for the search field.
    fn handle_key(
        &mut self,
        key: PaletteKey,
        catalog: &CandidateCatalog<'_>,
        subject: ScriptSubject,
        events: &mut Vec<PaletteEvent>,
    ) {
        match key {
            PaletteKey::Enter => {
                if self.highlighted_index < self.filtered(catalog, subject).len() {
                    self.commit_row(self.highlighted_index, catalog, subject, events);
                } else if !self.query.is_empty() {
                    self.commit_free_text(catalog, subject, events);
                }
            }
            PaletteKey::Escape => {
                self.handle_open_action(PaletteAction::Escape, catalog, subject, events)
            }
            PaletteKey::ArrowDown => {
                self.handle_open_action(PaletteAction::MoveDown, catalog, subject, events)
            }
            PaletteKey::ArrowUp => {
                self.handle_open_action(PaletteAction::MoveUp, catalog, subject, events)
            }
            // Already re-clamped on entry
            PaletteKey::Other => {}
        }
    }

    /// Commit the candidate in `index` of the filtered list, if it exists.
    fn commit_row(
        &mut self,
        index: usize,
        catalog: &CandidateCatalog<'_>,
        subject: ScriptSubject,
        events: &mut Vec<PaletteEvent>,
    ) {
        let Some(candidate) = self.filtered(catalog, subject).into_iter().nth(index) else {
            return;
        };

        log::debug!("Palette committing {}", candidate.id);
        self.cancel_pending_close();
        self.is_open = false;
        self.query.clear();
        // Reopening shows the added event highlighted
        self.highlighted_index = catalog
            .full_list_position(&candidate.id, subject)
            .unwrap_or(0);

        events.push(PaletteEvent::Added(AddRequest::Regular(candidate.id)));
        events.push(PaletteEvent::Closed(CloseReason::Committed));
    }

    /// Commit the query as a text event when no candidate matches.
    fn commit_free_text(
        &mut self,
        catalog: &CandidateCatalog<'_>,
        subject: ScriptSubject,
        events: &mut Vec<PaletteEvent>,
    ) {
        if self.query.is_empty() || !self.filtered(catalog, subject).is_empty() {
            return;
        }

        let text = self.normalizer.normalize(&self.query);
        log::debug!("Palette committing free text ({} chars)", text.len());
        self.cancel_pending_close();
        self.is_open = false;
        self.query.clear();
        self.highlighted_index = 0;

        events.push(PaletteEvent::Added(AddRequest::FreeText(text)));
        events.push(PaletteEvent::Closed(CloseReason::Committed));
    }

    /// Close if a scheduled close is due at `now`.
    fn fire_pending_close(&mut self, now: Instant) -> Option<PaletteEvent> {
        let pending = self.pending_close?;
        if !pending.is_due(now) {
            return None;
        }

        self.pending_close = None;
        if !self.is_open {
            return None;
        }

        log::debug!("Palette closed after losing focus");
        self.is_open = false;
        Some(PaletteEvent::Closed(CloseReason::FocusLost))
    }

    fn cancel_pending_close(&mut self) {
        if self.pending_close.take().is_some() {
            log::trace!("Palette close cancelled");
        }
    }

    fn clamp_highlight(&mut self, catalog: &CandidateCatalog<'_>, subject: ScriptSubject) {
        let last = self.filtered(catalog, subject).len().saturating_sub(1);
        self.highlighted_index = self.highlighted_index.min(last);
    }
}
