//! Submission accepted dialog

use super::base::{render_dialog, DialogConfig};
use crate::controller::SignupFields;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Summary lines for the accepted (sanitized) profile
fn summary(fields: &SignupFields) -> String {
    format!(
        "Name: {} {}\nEmail: {}",
        fields.first_name, fields.last_name, fields.email
    )
}

/// Render the acceptance dialog overlay centered on the screen
pub fn render_accepted_dialog(frame: &mut Frame, fields: &SignupFields) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ];

    let message = summary(fields);
    render_dialog(
        frame,
        DialogConfig {
            title: "Signup accepted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
