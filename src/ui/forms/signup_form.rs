//! Signup form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Form, FormButton, StatusLine};
use crate::strength::StrengthTier;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup form with its action panel
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Strength indicator
            Constraint::Length(3), // Confirm password
            Constraint::Length(1), // Error message
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let mask = app.config.mask_passwords();
    let field_areas = [chunks[0], chunks[1], chunks[2], chunks[3], chunks[5]];
    for (index, field_area) in field_areas.into_iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                field_area,
                field,
                form.active_field() == index,
                mask,
            );
        }
    }

    draw_strength(frame, chunks[4], app.state.strength.tier());
    draw_error(frame, chunks[6], &app.state.status);
    draw_help_text(
        frame,
        chunks[8],
        &format!("Tab: next field | {SUBMIT_SHORTCUT}: sign up | {CLEAR_SHORTCUT}: clear | Esc: quit"),
    );
}

fn strength_color(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::Weak => Color::Red,
        StrengthTier::Medium => Color::Yellow,
        StrengthTier::Strong => Color::Green,
    }
}

fn draw_strength(frame: &mut Frame, area: Rect, tier: Option<StrengthTier>) {
    let Some(tier) = tier else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(" Strength: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            tier.label(),
            Style::default()
                .fg(strength_color(tier))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_error(frame: &mut Frame, area: Rect, status: &StatusLine) {
    if status.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!(" {}", status.message()),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn button_color(button: FormButton) -> Color {
    match button {
        FormButton::Submit => Color::Green,
        FormButton::Clear => Color::Yellow,
        FormButton::Quit => Color::Gray,
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();
    let selected = form.selected_button();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (button, chunk) in FormButton::ALL.into_iter().zip(button_chunks.iter()) {
        render_action_button(
            frame,
            *chunk,
            button.label(),
            is_focused && selected == button,
            button_color(button),
        );
    }
}
