//! # Todo Form
//!
//! Centered overlay used both to add a todo and to edit one. Opened from the
//! list with `a` or `e`, dismissed with Esc or when the store accepts the
//! draft.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding};

use crate::core::todo::{Todo, TodoDraft, TodoStatus};
use crate::core::validation::FieldError;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_box;
use crate::tui::components::form::{FormEvent, FormField, FormState};
use crate::tui::event::TuiEvent;

const STATUS_OPTIONS: &[&str] = &["TODO", "IN_PROGRESS", "DONE"];

pub struct TodoFormState {
    pub form: FormState,
    /// `Some` when editing an existing todo.
    pub editing_id: Option<String>,
}

impl TodoFormState {
    pub fn for_new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text("title", "Title"),
                FormField::text("description", "Description"),
                FormField::text("deadline", "Deadline (YYYY-MM-DD)"),
                FormField::choice("status", "Status", STATUS_OPTIONS),
            ]),
            editing_id: None,
        }
    }

    pub fn for_edit(todo: &Todo) -> Self {
        let mut state = Self::for_new();
        state.form.set_value("title", &todo.title);
        state.form.set_value("description", &todo.description);
        state.form.set_value("deadline", &todo.deadline);
        state.form.set_value("status", todo.status.as_str());
        state.editing_id = Some(todo.id.clone());
        state
    }

    pub fn draft(&self) -> TodoDraft {
        TodoDraft {
            title: self.form.value("title").to_string(),
            description: self.form.value("description").to_string(),
            deadline: self.form.value("deadline").to_string(),
            status: TodoStatus::parse(self.form.value("status")).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFormEvent {
    Submit(TodoDraft),
    Cancel,
}

impl EventHandler for TodoFormState {
    type Event = TodoFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TodoFormEvent> {
        match self.form.handle_event(event)? {
            FormEvent::Submit => Some(TodoFormEvent::Submit(self.draft())),
            FormEvent::Cancel => Some(TodoFormEvent::Cancel),
            FormEvent::Changed => None,
        }
    }
}

/// Transient render wrapper.
pub struct TodoForm<'a> {
    pub state: &'a TodoFormState,
    pub errors: &'a [FieldError],
}

impl Component for TodoForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.state.form.required_height() + 2;
        let overlay = centered_box(60, height, area);
        frame.render_widget(Clear, overlay);

        let title = if self.state.editing_id.is_some() {
            " Edit Todo "
        } else {
            " Add Todo "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(" Enter Save  Tab Next  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        self.state.form.render(frame, inner, self.errors);
    }
}
