use chrono::Utc;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Current frame of the spinner animation (simple rotating character).
pub fn spinner() -> char {
    let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let spinner_idx = (Utc::now().timestamp_millis() / 100) as usize % spinner_chars.len();
    spinner_chars[spinner_idx]
}

/// Renders the loading placeholder shown while a fetch is in flight.
pub fn render_loading(frame: &mut Frame, caption: &str, area: Rect) {
    let loading_block = Block::default()
        .title("Movies")
        .borders(Borders::ALL)
        .style(Style::default());

    let loading_text = vec![
        Line::from(""),
        Line::from(format!("{} {}", spinner(), caption)),
    ];

    let loading_paragraph = Paragraph::new(loading_text)
        .block(loading_block)
        .wrap(Wrap { trim: true });

    frame.render_widget(loading_paragraph, area);
}
