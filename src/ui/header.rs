use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title bar; doubles as the search input line while the user
/// is typing a query.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default().borders(Borders::ALL).style(Style::default());

    let line = if app.searching {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                app.search_term.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "Movie Discovery",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  sort: {} | genre: {}",
                    app.sort_key.label(),
                    app.genre_filter_label()
                ),
                Style::default().fg(Color::Gray),
            ),
        ])
    };

    let title = Paragraph::new(line).block(title_block);
    frame.render_widget(title, area);
}
