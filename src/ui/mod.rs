//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal overlay last so it sits on top
    if app.state.show_accepted_dialog {
        if let Some(fields) = app.accepted() {
            components::render_accepted_dialog(frame, fields);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignupConfig;
    use crate::state::{Form, PASSWORD_FIELD};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_field_labels() {
        let app = App::new(SignupConfig::default());
        let screen = render(&app);
        for label in ["First name", "Last name", "Email", "Confirm password", "Sign up"] {
            assert!(screen.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_renders_error_message() {
        let mut app = App::new(SignupConfig::default());
        app.submit();
        assert!(render(&app).contains("All fields are required."));
    }

    #[test]
    fn test_renders_strength_and_masks_password() {
        let mut app = App::new(SignupConfig::default());
        app.state.form.set_active_field(PASSWORD_FIELD);
        for c in "abc12345xyz".chars() {
            app.state.form_input_char(c);
        }
        let screen = render(&app);
        assert!(screen.contains("Strong"));
        assert!(!screen.contains("abc12345xyz"));
    }

    #[test]
    fn test_unmasked_password_when_configured() {
        let mut app = App::new(SignupConfig {
            mask_passwords: Some(false),
            ..Default::default()
        });
        app.state.form.set_active_field(PASSWORD_FIELD);
        for c in "abc123".chars() {
            app.state.form_input_char(c);
        }
        assert!(render(&app).contains("abc123"));
    }

    #[test]
    fn test_renders_accepted_dialog() {
        let mut app = App::new(SignupConfig::default());
        app.state.form.first_name.set_text("John".to_string());
        app.state.form.last_name.set_text("Doe".to_string());
        app.state.form.email.set_text("j@x.com".to_string());
        app.state.form.password.set_text("abc12345".to_string());
        app.state.form.confirm_password.set_text("abc12345".to_string());
        assert!(app.submit());
        let screen = render(&app);
        assert!(screen.contains("Signup accepted"));
        assert!(screen.contains("Name: John Doe"));
    }
}
