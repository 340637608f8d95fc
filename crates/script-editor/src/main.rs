use anyhow::Result;
use event_palette_config::PaletteConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

mod app;
mod logger;
mod view;

use app::App;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting script-editor, logging to {}", log_file.display());

    let config = PaletteConfig::load();
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting script-editor with {} events", app.script.len());
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            view::render(app, area, frame);
        })?;

        // Check if we should quit
        if !app.running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Fire a scheduled palette close once its deadline passes
        app.tick(Instant::now());
    }

    Ok(())
}
