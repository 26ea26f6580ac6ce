//! Terminal setup and the main event loop

use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use super::app::App;
use super::ui;

/// Run the interactive walkthrough, optionally seeded with input text
pub fn run_viewer(initial_text: Option<String>) -> io::Result<()> {
    // An llmwalk.toml next to the working directory can override defaults
    let config = llmwalk_config::Loader::new()
        .with_optional_file("llmwalk.toml")
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let tick = Duration::from_millis(config.viewer.tick_ms);
    let mut app = App::new(config, initial_text);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Poll for events with timeout
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    let _ = app.handle_key(key);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration re-renders
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}
