//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " signup ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.accepted().is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "● accepted",
            Style::default().fg(Color::Green),
        ));
    }

    if app.config.mask_passwords() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "passwords hidden",
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
