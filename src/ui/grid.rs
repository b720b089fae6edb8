use crate::app::{App, Config, GridStatus, MovieCard, movie_card};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Renders the grid surface: the card list, or whichever notice has
/// replaced it.
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.grid_status {
        GridStatus::Results => render_cards(frame, app, area),
        GridStatus::Notice(text) => render_message(frame, area, text, Color::Gray),
        GridStatus::Error(text) => render_message(frame, area, text, Color::Red),
        GridStatus::MissingKey => render_missing_key(frame, area),
        // Loading is routed to the loading placeholder before we get here.
        GridStatus::Loading(_) => {}
    }
}

fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let cards: Vec<MovieCard> = app
        .displayed
        .iter()
        .map(|movie| movie_card(movie, &app.genres))
        .collect();

    let title = format!(
        "Movies ({} - Use ↑↓ or j/k to scroll, Enter for details)",
        cards.len()
    );

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let content = vec![
                Line::from(Span::styled(
                    card.title.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  ⭐ {}   Released: {}   Popularity: {}",
                        card.rating, card.year, card.popularity
                    ),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("  Genres: {}", card.genres),
                    Style::default().fg(Color::DarkGray),
                )),
            ];

            ListItem::new(content)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// One-line notice or error filling the content area.
fn render_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let block = Block::default()
        .title("Movies")
        .borders(Borders::ALL)
        .style(Style::default());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(color))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Full-screen setup instructions shown when no credential is configured.
fn render_missing_key(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(5),    // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["API KEY".into(), "REQUIRED!".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let config_path = Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "the config file".to_string());

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please set your TMDB API key to browse movies",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1. Get a free key at: https://www.themoviedb.org/settings/api",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "2. Set environment variable: export TMDB_API_KEY=your_key_here",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("   or put {{\"api_key\": \"your_key_here\"}} in {config_path}"),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "3. Restart the application",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (q) to quit",
            Style::default().fg(Color::Gray),
        )),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL).style(Style::default()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}
