use crate::app::{App, CurrentScreen, GridStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::detail::render_detail;
use super::footer::render_footer;
use super::grid::render_grid;
use super::header::render_header;
use super::loading::render_loading;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.current_screen {
        CurrentScreen::Detail => {
            render_detail(frame, app, chunks[1]);
        }
        CurrentScreen::Grid => {
            if let GridStatus::Loading(caption) = &app.grid_status {
                render_loading(frame, caption, chunks[1]);
            } else {
                render_grid(frame, app, chunks[1]);
            }
        }
    }

    render_footer(frame, app, chunks[2]);
}
