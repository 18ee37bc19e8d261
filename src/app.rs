//! Application state and core logic

use crate::config::SignupConfig;
use crate::controller::{FormController, SignupFields};
use crate::state::{AppState, Form, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: SignupConfig,
    controller: FormController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: SignupConfig) -> Self {
        Self {
            state: AppState::default(),
            controller: FormController::new(config.sql_escape_mode()),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Sanitized values of the last accepted submission, if any
    pub fn accepted(&self) -> Option<&SignupFields> {
        self.state.accepted.as_ref()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Acceptance dialog is modal
        if self.state.show_accepted_dialog {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_accepted_dialog();
            }
            return Ok(());
        }

        let on_buttons = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Down if !on_buttons => self.state.form.next_field(),
            KeyCode::Up if !on_buttons => self.state.form.prev_field(),
            // Button navigation on the actions row
            KeyCode::Up | KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Right if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => self.press(self.state.form.selected_button()),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('l') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.state.clear_form();
            }
            KeyCode::Esc => self.quit(),
            // Field input (only when not on the actions row)
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c)
                if !on_buttons
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace if !on_buttons => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    fn press(&mut self, button: FormButton) {
        match button {
            FormButton::Submit => {
                self.submit();
            }
            FormButton::Clear => self.state.clear_form(),
            FormButton::Quit => self.quit(),
        }
    }

    /// Run the submit handler over the current form values.
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        let values = self.state.form.values();
        match self.controller.submit(&values, &mut self.state.status) {
            Ok(sanitized) => {
                tracing::info!("Signup accepted");
                self.state.accepted = Some(sanitized);
                self.state.show_accepted_dialog = true;
                true
            }
            Err(_) => false,
        }
    }
}
