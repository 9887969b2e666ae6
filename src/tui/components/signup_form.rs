//! # Signup Form
//!
//! Account creation: credentials, personal details and a gender choice.
//! Field keys line up with `validate_signup` so its errors land under the
//! right inputs.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::validation::{FieldError, SignupForm as SignupValues};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_box;
use crate::tui::components::form::{FIELD_HEIGHT, FormEvent, FormField, FormState};
use crate::tui::event::TuiEvent;

const GENDER_OPTIONS: &[&str] = &["", "male", "female", "other"];

pub struct SignupFormState {
    pub form: FormState,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFormState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text("username", "Username"),
                FormField::text("email", "Email"),
                FormField::secret("password", "Password"),
                FormField::secret("confirm_password", "Confirm Password"),
                FormField::text("first_name", "First Name"),
                FormField::text("last_name", "Last Name"),
                FormField::text("phone_number", "Phone Number"),
                FormField::text("date_of_birth", "Date of Birth (YYYY-MM-DD)"),
                FormField::choice("gender", "Gender", GENDER_OPTIONS),
            ]),
        }
    }

    pub fn values(&self) -> SignupValues {
        let v = |key: &str| self.form.value(key).to_string();
        SignupValues {
            username: v("username"),
            email: v("email"),
            password: v("password"),
            confirm_password: v("confirm_password"),
            first_name: v("first_name"),
            last_name: v("last_name"),
            phone_number: v("phone_number"),
            date_of_birth: v("date_of_birth"),
            gender: v("gender"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    Submit(SignupValues),
    GoToLogin,
}

impl EventHandler for SignupFormState {
    type Event = SignupEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SignupEvent> {
        if matches!(event, TuiEvent::SwitchAuthScreen) {
            return Some(SignupEvent::GoToLogin);
        }
        match self.form.handle_event(event)? {
            FormEvent::Submit => Some(SignupEvent::Submit(self.values())),
            FormEvent::Cancel => Some(SignupEvent::GoToLogin),
            FormEvent::Changed => None,
        }
    }
}

/// Transient render wrapper.
pub struct SignupForm<'a> {
    pub state: &'a SignupFormState,
    pub errors: &'a [FieldError],
    pub root_error: Option<&'a str>,
    pub is_submitting: bool,
}

impl Component for SignupForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = centered_box(70, area.height, area);
        frame.render_widget(Clear, panel);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(2));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [title_area, fields_area, error_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Create an Account",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            title_area,
        );

        // Nine fields rarely fit; show a window that keeps the focused one visible
        let visible = (fields_area.height / FIELD_HEIGHT).max(1) as usize;
        let first = (self.state.form.focused + 1).saturating_sub(visible);
        let window = FormState {
            fields: self
                .state
                .form
                .fields
                .iter()
                .skip(first)
                .take(visible)
                .cloned()
                .collect(),
            focused: self.state.form.focused - first,
        };
        window.render(frame, fields_area, self.errors);

        if let Some(message) = self.root_error {
            frame.render_widget(
                Paragraph::new(Line::styled(message, Style::default().fg(Color::Red)))
                    .alignment(Alignment::Center),
                error_area,
            );
        }

        let footer = if self.is_submitting {
            "Creating account...".to_string()
        } else {
            format!(
                "Field {}/{}  Enter Sign Up  Esc Back",
                self.state.form.focused + 1,
                self.state.form.fields.len()
            )
        };
        frame.render_widget(
            Paragraph::new(footer)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            footer_area,
        );
    }
}
