//! # Form
//!
//! A vertical stack of labelled fields with one focused at a time. The login,
//! signup and todo forms are all built from this.
//!
//! Keys: Tab / Shift+Tab / Up / Down move focus, Left / Right cycle choice
//! fields, Enter submits, Esc cancels. Everything else goes to the focused
//! text field.
//!
//! Validation happens in core; the form only displays the `FieldError`s it
//! is handed at render time.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::validation::{FieldError, message_for};
use crate::tui::component::EventHandler;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

/// Rows taken by one field: bordered input (3) + error line (1).
pub const FIELD_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    /// Fixed options cycled with Left/Right. The first one may be "" for "unset".
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone)]
pub struct FormField {
    /// Matches `FieldError::field`.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub input: TextField,
}

impl FormField {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            input: TextField::new(),
        }
    }

    pub fn secret(key: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Secret,
            ..Self::text(key, label)
        }
    }

    pub fn choice(key: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        let mut field = Self {
            kind: FieldKind::Choice(options),
            ..Self::text(key, label)
        };
        field.input.set_value(options.first().copied().unwrap_or(""));
        field
    }

    fn cycle_choice(&mut self, step: isize) -> bool {
        let FieldKind::Choice(options) = self.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let current = options
            .iter()
            .position(|o| *o == self.input.value())
            .unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.input.set_value(options[next]);
        true
    }
}

/// High-level events emitted by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Changed,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.input.value())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.input.set_value(value);
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Moves focus to the first field that has an error.
    pub fn focus_first_error(&mut self, errors: &[FieldError]) {
        if let Some(idx) = self
            .fields
            .iter()
            .position(|f| message_for(errors, f.key).is_some())
        {
            self.focused = idx;
        }
    }

    /// Height needed to show every field.
    pub fn required_height(&self) -> u16 {
        self.fields.len() as u16 * FIELD_HEIGHT
    }

    /// Renders fields top to bottom, each with its error line underneath.
    pub fn render(&self, frame: &mut Frame, area: Rect, errors: &[FieldError]) {
        let constraints = self
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT));
        let rows = Layout::vertical(constraints).split(area);

        for (idx, (field, row)) in self.fields.iter().zip(rows.iter()).enumerate() {
            let [input_area, error_area] =
                Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(*row);

            let focused = idx == self.focused;
            let title = match field.kind {
                FieldKind::Choice(_) => format!("{} (←/→)", field.label),
                _ => field.label.to_string(),
            };
            let masked = field.kind == FieldKind::Secret;
            field.input.render(frame, input_area, &title, focused, masked);

            if let Some(message) = message_for(errors, field.key) {
                let line = Line::styled(format!(" {}", message), Style::default().fg(Color::Red));
                frame.render_widget(Paragraph::new(line), error_area);
            }
        }
    }
}

impl EventHandler for FormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Submit => Some(FormEvent::Submit),
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus_next();
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus_prev();
                None
            }
            _ => {
                let field = self.fields.get_mut(self.focused)?;
                let is_choice = matches!(field.kind, FieldKind::Choice(_));
                let changed = match (is_choice, event) {
                    (true, TuiEvent::CursorRight | TuiEvent::InputChar(' ')) => field.cycle_choice(1),
                    (true, TuiEvent::CursorLeft) => field.cycle_choice(-1),
                    (true, _) => false,
                    (false, _) => field.input.handle_event(event),
                };
                changed.then_some(FormEvent::Changed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["", "a", "b"];

    fn form() -> FormState {
        FormState::new(vec![
            FormField::text("name", "Name"),
            FormField::secret("pw", "Password"),
            FormField::choice("pick", "Pick", OPTIONS),
        ])
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut f = form();
        f.handle_event(&TuiEvent::InputChar('x'));
        f.handle_event(&TuiEvent::NextField);
        f.handle_event(&TuiEvent::InputChar('y'));
        assert_eq!(f.value("name"), "x");
        assert_eq!(f.value("pw"), "y");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut f = form();
        f.handle_event(&TuiEvent::PrevField);
        assert_eq!(f.focused, 2);
        f.handle_event(&TuiEvent::NextField);
        assert_eq!(f.focused, 0);
    }

    #[test]
    fn test_choice_cycles_and_ignores_typing() {
        let mut f = form();
        f.focused = 2;
        assert_eq!(f.value("pick"), "");
        assert_eq!(f.handle_event(&TuiEvent::CursorRight), Some(FormEvent::Changed));
        assert_eq!(f.value("pick"), "a");
        f.handle_event(&TuiEvent::CursorLeft);
        f.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(f.value("pick"), "b");
        assert_eq!(f.handle_event(&TuiEvent::InputChar(' ')), Some(FormEvent::Changed));
        assert_eq!(f.value("pick"), "");
        assert_eq!(f.handle_event(&TuiEvent::InputChar('z')), None);
        assert_eq!(f.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(f.value("pick"), "");
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut f = form();
        assert_eq!(f.handle_event(&TuiEvent::Submit), Some(FormEvent::Submit));
        assert_eq!(f.handle_event(&TuiEvent::Escape), Some(FormEvent::Cancel));
    }

    #[test]
    fn test_focus_first_error() {
        let mut f = form();
        let errors = vec![FieldError {
            field: "pw",
            message: "Password is required",
        }];
        f.focus_first_error(&errors);
        assert_eq!(f.focused, 1);
    }
}
