//! Trigger button and candidate list widget.

use crate::highlight::highlight_segments;
use crate::model::SearchCandidate;
use crate::state::PaletteState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};

/// Renders the palette: just the trigger while closed, the search field and
/// ranked candidates while open.
///
/// The widget only draws; the candidates must be the filtered list for the
/// state's current query.
pub struct PaletteWidget<'a> {
    query: &'a str,
    is_open: bool,
    highlighted_index: usize,
    candidates: &'a [SearchCandidate],
    trigger_label: &'a str,
    placeholder: &'a str,
    free_text_label: &'a str,
}

impl<'a> PaletteWidget<'a> {
    /// Create a widget for `state` showing `candidates`.
    pub fn new<N>(state: &'a PaletteState<N>, candidates: &'a [SearchCandidate]) -> Self {
        Self {
            query: &state.query,
            is_open: state.is_open,
            highlighted_index: state.highlighted_index,
            candidates,
            trigger_label: "Add Event",
            placeholder: "Search...",
            free_text_label: "Text",
        }
    }

    /// Label of the trigger button.
    pub fn trigger_label(mut self, label: &'a str) -> Self {
        self.trigger_label = label;
        self
    }

    /// Placeholder shown while the query is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Label of the free-text row, e.g. the localized name of the text event.
    pub fn free_text_label(mut self, label: &'a str) -> Self {
        self.free_text_label = label;
        self
    }

    fn highlighted_line(&self, text: &str, is_selected: bool) -> Line<'static> {
        let base = if is_selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_selected { "> " } else { "  " };

        let mut spans = vec![Span::styled(marker.to_string(), base)];
        for segment in highlight_segments(text, self.query.split(char::is_whitespace)) {
            let style = if segment.highlighted {
                base.fg(if is_selected { Color::Black } else { Color::Yellow })
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(segment.text.to_string(), style));
        }
        Line::from(spans)
    }

    fn render_trigger(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.is_open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        buf.set_string(area.x, area.y, format!("[ + {} ]", self.trigger_label), style);
    }
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        self.render_trigger(area, buf);
        if !self.is_open || area.height < 4 {
            return;
        }

        let menu_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        Clear.render(menu_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(menu_area);
        block.render(menu_area, buf);
        if inner.height == 0 {
            return;
        }

        // Search field
        let input = if self.query.is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Green)),
                Span::styled(self.placeholder, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Green)),
                Span::raw(self.query),
            ])
        };
        buf.set_line(inner.x, inner.y, &input, inner.width);

        let list_top = inner.y + 1;
        let visible = inner.height.saturating_sub(1) as usize;
        if visible == 0 {
            return;
        }

        if self.candidates.is_empty() {
            if !self.query.is_empty() {
                let label = format!("{} \"{}\"", self.free_text_label, self.query);
                let line = self.highlighted_line(&label, true);
                buf.set_line(inner.x, list_top, &line, inner.width);
            }
            return;
        }

        // Keep the highlighted row on screen
        let offset = self.highlighted_index.saturating_sub(visible - 1);
        for (row, (index, candidate)) in self
            .candidates
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = list_top + row as u16;
            let line = self.highlighted_line(&candidate.display_name, index == self.highlighted_index);
            buf.set_line(inner.x, y, &line, inner.width);

            if let Some(group) = &candidate.group {
                let label = format!("[{}]", group);
                let width = label.chars().count() as u16;
                if width + 2 < inner.width {
                    buf.set_string(
                        inner.x + inner.width - width,
                        y,
                        &label,
                        Style::default().fg(Color::DarkGray),
                    );
                }
            }
        }

        log::trace!("Rendered palette with {} candidates", self.candidates.len());
    }
}
