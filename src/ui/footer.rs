use crate::app::{App, CurrentScreen, GridStatus};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn instruction_text(app: &App) -> String {
    if app.searching {
        return "(Enter) to search, (Esc) to cancel".to_string();
    }
    match app.current_screen {
        CurrentScreen::Detail => "(Esc/b) back, (q) quit".to_string(),
        CurrentScreen::Grid => match app.grid_status {
            GridStatus::Loading(_) => "Loading... (q) to quit".to_string(),
            GridStatus::MissingKey => "(q) to quit".to_string(),
            _ => format!(
                "(t)rending (p)opular top-(r)ated (u)pcoming | (/) search (s)ort: {} (g)enre: {} | (Enter) details (q) quit",
                app.sort_key.label(),
                app.genre_filter_label()
            ),
        },
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default().borders(Borders::ALL).style(Style::default());

    let bottom =
        Paragraph::new(Text::styled(instruction_text(app), Style::default())).block(bottom_block);

    frame.render_widget(bottom, area);
}
