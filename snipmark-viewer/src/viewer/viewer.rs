//! Viewer entry point and terminal event loop

use super::app::App;
use super::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use snipmark_parser::snipmark::file_type::FileType;
use snipmark_parser::snipmark::loader::SnippetLoader;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Run the viewer for the given snippet source file
pub fn run_viewer(file_path: PathBuf, file_type: Option<FileType>) -> io::Result<()> {
    // Load the file and run extraction
    let loader = SnippetLoader::from_path(&file_path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let loader = match file_type {
        Some(file_type) => loader.with_file_type(file_type),
        None => loader,
    };

    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    let mut app = App::new(loader.file_type(), loader.extract());

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &file_name);

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
    file_name: &str,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app, file_name);
        })?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(key, app) {
                        return Ok(());
                    }
                }
                // On terminal resize, the next loop iteration will re-render with new dimensions
                Event::Resize(_, _) => {
                    // Terminal resize event - the next draw() call will use the new dimensions
                    // No explicit action needed, just continue the loop
                }
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Esc => true,
        KeyCode::Tab => {
            app.toggle_tab();
            false
        }
        _ => {
            // Delegate to app's key handler
            let _ = app.handle_key(key);
            false
        }
    }
}
