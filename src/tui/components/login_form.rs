//! # Login Form
//!
//! Email + password, a root-level error line under the fields and a hint
//! for switching to signup.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LoginFormState` lives in `TuiState`
//! - `LoginForm` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::auth::LoginCredentials;
use crate::core::validation::FieldError;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_box;
use crate::tui::components::form::{FormEvent, FormField, FormState};
use crate::tui::event::TuiEvent;

pub struct LoginFormState {
    pub form: FormState,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text("email", "Email"),
                FormField::secret("password", "Password"),
            ]),
        }
    }

    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.form.value("email").to_string(),
            password: self.form.value("password").to_string(),
        }
    }
}

/// Events emitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Submit(LoginCredentials),
    GoToSignup,
}

impl EventHandler for LoginFormState {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LoginEvent> {
        if matches!(event, TuiEvent::SwitchAuthScreen) {
            return Some(LoginEvent::GoToSignup);
        }
        match self.form.handle_event(event)? {
            FormEvent::Submit => Some(LoginEvent::Submit(self.credentials())),
            FormEvent::Cancel | FormEvent::Changed => None,
        }
    }
}

/// Transient render wrapper.
pub struct LoginForm<'a> {
    pub state: &'a LoginFormState,
    pub errors: &'a [FieldError],
    pub root_error: Option<&'a str>,
    pub is_submitting: bool,
}

impl Component for LoginForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // title (2) + fields + root error (1) + button/hint (2) + borders/padding (4)
        let height = self.state.form.required_height() + 9;
        let panel = centered_box(50, height, area);
        frame.render_widget(Clear, panel);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::new(2, 2, 1, 1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [title_area, fields_area, error_area, button_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(self.state.form.required_height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let title = Paragraph::new(Line::styled(
            "Welcome Back",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        self.state.form.render(frame, fields_area, self.errors);

        if let Some(message) = self.root_error {
            let error = Paragraph::new(Line::styled(message, Style::default().fg(Color::Red)))
                .alignment(Alignment::Center);
            frame.render_widget(error, error_area);
        }

        let button = if self.is_submitting { "Signing in..." } else { "[ Enter: Sign In ]" };
        frame.render_widget(
            Paragraph::new(button)
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center),
            button_area,
        );
        frame.render_widget(
            Paragraph::new("Don't have an account? Ctrl+N to sign up")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}
