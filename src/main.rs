mod app;
use app::{App, Category, Config, CurrentScreen};

mod ui;

use std::error::Error;
use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::prelude::{Backend, CrosstermBackend};
use ratatui_image::picker::Picker;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let config = Config::load();

    // setup terminal
    enable_raw_mode()?;
    let picker = Picker::from_query_stdio().ok();
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(config, picker);
    app.start();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Logs go to a file; stdout and stderr belong to the terminal UI. Skipped
/// silently when the log file cannot be created.
fn init_logging() {
    let Some(path) = Config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = fs::File::create(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>>
where
    <B as Backend>::Error: 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply completions from the fetch worker threads
        app.poll_messages();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                // Handle search input when searching is active
                if app.searching {
                    match key.code {
                        KeyCode::Char(c) => {
                            app.search_term.push(c);
                        }
                        KeyCode::Backspace => {
                            app.search_term.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_search();
                        }
                        KeyCode::Esc => {
                            app.searching = false;
                            app.search_term.clear();
                        }
                        _ => {}
                    }
                    continue;
                }

                match app.current_screen {
                    CurrentScreen::Grid => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('/') => {
                            app.searching = true;
                        }
                        KeyCode::Char('t') => app.load_trending(),
                        KeyCode::Char('p') => app.load_discover(Category::Popular),
                        KeyCode::Char('r') => app.load_discover(Category::TopRated),
                        KeyCode::Char('u') => app.load_discover(Category::Upcoming),
                        KeyCode::Char('s') => app.cycle_sort(),
                        KeyCode::Char('g') => app.cycle_genre(),
                        KeyCode::Down | KeyCode::Char('j') => app.next_movie(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous_movie(),
                        KeyCode::Enter => app.open_detail(),
                        _ => {}
                    },
                    CurrentScreen::Detail => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc | KeyCode::Char('b') => app.close_detail(),
                        _ => {}
                    },
                }
            }
        }
    }
}
