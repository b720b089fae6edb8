use crate::app::{App, DetailStatus, DetailView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::spinner;

/// Renders the movie detail screen
pub fn render_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = match &app.detail_status {
        DetailStatus::Loading => {
            render_loading_state(frame, area);
            return;
        }
        DetailStatus::Error(message) => {
            render_error_state(frame, area, message);
            return;
        }
        DetailStatus::Ready(view) => view.clone(),
    };

    render_movie_info(frame, area, app, &view);
}

/// Renders loading state with spinner
fn render_loading_state(frame: &mut Frame, area: Rect) {
    let loading_block = Block::default()
        .title("Movie Details")
        .borders(Borders::ALL)
        .style(Style::default());

    let loading_text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Loading movie details...", spinner()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let loading_paragraph = Paragraph::new(loading_text)
        .block(loading_block)
        .alignment(Alignment::Center);

    frame.render_widget(loading_paragraph, area);
}

/// Renders error state
fn render_error_state(frame: &mut Frame, area: Rect, error: &str) {
    let error_block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .style(Style::default());

    let error_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to fetch movie details",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "This might happen if:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "- Network connection issues",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "- API rate limit reached",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (Esc) or (b) to go back",
            Style::default().fg(Color::Gray),
        )),
    ];

    let error_paragraph = Paragraph::new(error_text)
        .block(error_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

/// Renders movie information
fn render_movie_info(frame: &mut Frame, area: Rect, app: &mut App, view: &DetailView) {
    let outer_block = Block::default()
        .title(format!("Movie Details - {}", view.title))
        .borders(Borders::ALL)
        .style(Style::default());

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(20), // Poster section
            Constraint::Length(3),  // Title info
            Constraint::Min(8),     // Content
            Constraint::Length(1),  // Footer
        ])
        .split(inner_area);

    render_poster_section(frame, chunks[0], app, view);
    render_title_section(frame, chunks[1], view);
    render_content_section(frame, chunks[2], view);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press (Esc) or (b) to go back, (q) to quit",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App, view: &DetailView) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    if app.loading_poster {
        let loading_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Downloading poster...", spinner()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ];

        let loading_paragraph = Paragraph::new(loading_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(loading_paragraph, area);
    } else if let Some(protocol) = &mut app.poster {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        let placeholder_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No poster available",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                view.poster_url.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(placeholder_paragraph, area);
    }
}

/// Renders the title section with the tagline underneath
fn render_title_section(frame: &mut Frame, area: Rect, view: &DetailView) {
    let title_info = vec![
        Line::from(Span::styled(
            view.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.tagline.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let title_paragraph = Paragraph::new(title_info);
    frame.render_widget(title_paragraph, area);
}

/// Renders the main content section
fn render_content_section(frame: &mut Frame, area: Rect, view: &DetailView) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(Color::White);

    let content = vec![
        Line::from(Span::styled(view.rating.as_str(), value)),
        Line::from(vec![
            Span::styled("Runtime: ", label),
            Span::styled(view.runtime.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Release Date: ", label),
            Span::styled(view.release_date.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Budget: ", label),
            Span::styled(view.budget.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Revenue: ", label),
            Span::styled(view.revenue.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled("Genres: ", label),
            Span::styled(view.genres.as_str(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Overview:", label)),
        Line::from(Span::styled(view.overview.as_str(), value)),
    ];

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });

    frame.render_widget(content_paragraph, area);
}
