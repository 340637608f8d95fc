use crate::app::{App, Focus};
use event_palette::PaletteWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the entire application UI
pub fn render(app: &App, area: Rect, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, rows[0], f);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_script(app, columns[0], f);
    render_palette(app, columns[1], f);
    render_footer(app, rows[2], f);
}

fn render_header(app: &App, area: Rect, f: &mut Frame) {
    let header = Line::from(vec![
        Span::styled(" script-editor ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("editing {} script", app.subject),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn render_script(app: &App, area: Rect, f: &mut Frame) {
    let block = Block::default()
        .title(" Script ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.script.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No events yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .script
        .iter()
        .enumerate()
        .map(|(index, line)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(app.line_label(line)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_palette(app: &App, area: Rect, f: &mut Frame) {
    let candidates = app.candidates();
    let widget = PaletteWidget::new(&app.palette, &candidates).free_text_label(app.free_text_label());
    f.render_widget(widget, area);
}

fn render_footer(app: &App, area: Rect, f: &mut Frame) {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Trigger => &[("a/Enter", "add event"), ("s", "switch subject"), ("q", "quit")],
        Focus::Search => &[
            ("↑/↓", "navigate"),
            ("Enter", "add"),
            ("Tab", "leave search"),
            ("Esc", "close"),
        ],
        Focus::List => &[("Enter", "add"), ("Shift+Tab", "back to search"), ("Esc", "close")],
    };

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (key, description) in hints {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(
            format!("{} ", description),
            Style::default().fg(Color::Gray),
        ));
    }
    if !app.status.is_empty() {
        spans.push(Span::styled(
            format!("| {}", app.status),
            Style::default().fg(Color::Green),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
