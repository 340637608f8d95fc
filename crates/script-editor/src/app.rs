//! Editor state and key handling.

use anyhow::{Context, Result};
use event_palette::{
    dispatch_add, ActionRegistry, AddRequest, CandidateCatalog, Localizer, PaletteAction,
    PaletteEvent, PaletteKey, PaletteState, ScriptSubject, SearchCandidate, StringTable,
    FREE_TEXT_EVENT,
};
use event_palette_config::PaletteConfig;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Catalog used when the config names no catalog file
const BUILTIN_EVENTS: &str = include_str!("../assets/events.toml");

/// Build the registry shipped with the editor
pub fn builtin_registry() -> Result<ActionRegistry> {
    ActionRegistry::from_toml_str(BUILTIN_EVENTS).context("Built-in event catalog is invalid")
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The "Add Event" button; the palette is closed
    #[default]
    Trigger,
    /// The search field of the open palette
    Search,
    /// The candidate list; the palette closes unless focus returns in time
    List,
}

/// One event appended to the script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub event_id: String,
    pub text: Option<String>,
}

/// Application state
pub struct App {
    registry: ActionRegistry,
    strings: StringTable,
    pub palette: PaletteState,
    pub subject: ScriptSubject,
    pub focus: Focus,
    pub script: Vec<ScriptLine>,
    pub status: String,
    pub running: bool,
}

impl App {
    /// Build the editor from config, loading catalog and strings it names
    pub fn new(config: &PaletteConfig) -> Result<Self> {
        let registry = match config.load_registry()? {
            Some(registry) => registry,
            None => builtin_registry()?,
        };
        let strings = config.load_strings()?;
        let palette = PaletteState::with_normalizer(config.options(), config.normalizer());

        Ok(Self::from_parts(registry, strings, palette, config.subject))
    }

    pub fn from_parts(
        registry: ActionRegistry,
        strings: StringTable,
        palette: PaletteState,
        subject: ScriptSubject,
    ) -> Self {
        Self {
            registry,
            strings,
            palette,
            subject,
            focus: Focus::Trigger,
            script: Vec::new(),
            status: String::new(),
            running: true,
        }
    }

    /// Candidates for the palette's current query
    pub fn candidates(&self) -> Vec<SearchCandidate> {
        let catalog = CandidateCatalog::new(&self.registry, &self.strings);
        self.palette.filtered(&catalog, self.subject)
    }

    /// Display name of an event id: localized, then built-in, then the id
    pub fn event_label<'a>(&'a self, event_id: &'a str) -> &'a str {
        self.strings
            .localize(event_id)
            .or_else(|| {
                self.registry
                    .get(event_id)
                    .and_then(|def| def.name.as_deref())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or(event_id)
    }

    /// Label of the free-text row in the palette
    pub fn free_text_label(&self) -> &str {
        self.event_label(FREE_TEXT_EVENT)
    }

    /// Text shown for a script line
    pub fn line_label(&self, line: &ScriptLine) -> String {
        let label = self.event_label(&line.event_id);
        match &line.text {
            Some(text) => format!("{} \"{}\"", label, text.replace('\n', " / ")),
            None => label.to_string(),
        }
    }

    /// Advance the palette's close timer
    pub fn tick(&mut self, now: Instant) {
        self.dispatch(PaletteAction::Tick(now));
    }

    /// Stop the editor, cancelling any scheduled palette close
    pub fn quit(&mut self) {
        self.dispatch(PaletteAction::Unmount);
        self.running = false;
    }

    /// Translate a key press into palette actions
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.focus {
            Focus::Trigger => self.handle_trigger_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_trigger_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') | KeyCode::Enter => {
                self.focus = Focus::Search;
                self.dispatch(PaletteAction::Open);
            }
            KeyCode::Char('s') => {
                self.subject = self.subject.next();
                self.status = format!("Editing {} script", self.subject);
                log::info!("Switched to {} script", self.subject);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let action = match key.code {
            KeyCode::Tab => {
                self.focus = Focus::List;
                PaletteAction::RequestClose(Instant::now())
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PaletteAction::ClearQuery
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                PaletteAction::InsertChar(c)
            }
            KeyCode::Backspace => PaletteAction::Backspace,
            code => PaletteAction::Key(PaletteKey::from(code)),
        };
        self.dispatch(action);
    }

    /// Keys while the search field has lost focus and the close is pending
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::BackTab => {
                self.focus = Focus::Search;
                self.dispatch(PaletteAction::CancelPendingClose);
            }
            KeyCode::Enter => self.dispatch(PaletteAction::CommitHighlighted),
            KeyCode::Esc => self.dispatch(PaletteAction::Escape),
            _ => {}
        }
    }

    /// Run an action through the palette and apply the events it produced
    fn dispatch(&mut self, action: PaletteAction) {
        let catalog = CandidateCatalog::new(&self.registry, &self.strings);
        let events = self.palette.handle_action(action, &catalog, self.subject);

        for event in events {
            match event {
                PaletteEvent::Added(request) => self.add_to_script(&request),
                PaletteEvent::Closed(reason) => log::debug!("Palette closed: {:?}", reason),
                PaletteEvent::Opened => {}
            }
        }

        if !self.palette.is_open {
            self.focus = Focus::Trigger;
        }
    }

    fn add_to_script(&mut self, request: &AddRequest) {
        let script = &mut self.script;
        let mut append = |event_id: &str, text: Option<&str>| {
            script.push(ScriptLine {
                event_id: event_id.to_string(),
                text: text.map(str::to_string),
            });
        };
        dispatch_add(&mut append, request);

        self.status = format!("Added {}", self.event_label(request.event_id()));
        log::info!("Added {} to {} script", request.event_id(), self.subject);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn app() -> App {
        App::new(&PaletteConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_builtin_registry_loads() {
        let registry = builtin_registry().unwrap();
        assert!(registry.get(FREE_TEXT_EVENT).is_some());
        assert!(registry.get("EVENT_ACTOR_PUSH").unwrap().actor_only);
    }

    #[test]
    fn test_open_search_and_commit() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::Search);
        assert!(app.palette.is_open);

        type_text(&mut app, "shake");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.script,
            vec![ScriptLine {
                event_id: "EVENT_CAMERA_SHAKE".to_string(),
                text: None,
            }]
        );
        assert_eq!(app.focus, Focus::Trigger);
        assert_eq!(app.status, "Added Camera Shake");
    }

    #[test]
    fn test_free_text_commit() {
        let mut app = app();

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "zq hello");
        assert!(app.candidates().is_empty());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.script.len(), 1);
        assert_eq!(app.script[0].event_id, FREE_TEXT_EVENT);
        assert_eq!(app.line_label(&app.script[0]), "Display Dialogue \"zq hello\"");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "wait");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.palette.query, "wai");

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.palette.query.is_empty());
    }

    #[test]
    fn test_escape_closes_without_adding() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "wait");
        press(&mut app, KeyCode::Esc);

        assert!(!app.palette.is_open);
        assert!(app.script.is_empty());
        assert_eq!(app.focus, Focus::Trigger);
        assert!(app.running);
    }

    #[test]
    fn test_tab_closes_after_grace_period() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        assert!(app.palette.is_open);

        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(!app.palette.is_open);
        assert_eq!(app.focus, Focus::Trigger);
    }

    #[test]
    fn test_back_tab_keeps_palette_open() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Search);

        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(app.palette.is_open);
    }

    #[test]
    fn test_commit_from_list_during_grace_period() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "music");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        app.tick(Instant::now() + Duration::from_secs(1));

        assert_eq!(app.script.len(), 1);
        assert_eq!(app.script[0].event_id, "EVENT_MUSIC_STOP");
    }

    #[test]
    fn test_subject_cycles_and_filters() {
        let mut app = app();
        let has_push = |app: &App| {
            app.candidates()
                .iter()
                .any(|candidate| candidate.id == "EVENT_ACTOR_PUSH")
        };

        press(&mut app, KeyCode::Char('a'));
        assert!(has_push(&app));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.subject, ScriptSubject::Trigger);
        press(&mut app, KeyCode::Char('a'));
        assert!(!has_push(&app));
    }

    #[test]
    fn test_quit_only_from_trigger() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.palette.query, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_unmounts_open_palette() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!app.running);
        assert!(!app.palette.is_open);
        assert!(app.palette.pending_close().is_none());
    }

    #[test]
    fn test_deprecated_events_hidden() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "relative");
        assert!(app.candidates().is_empty());
    }
}
