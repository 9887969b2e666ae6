//! # Todo List Component
//!
//! The main view: the filtered todos, one card per item, with a selection
//! cursor and single-key commands.
//!
//! The list only ever sees the *visible* todos. It hands ids (not indices)
//! back to the parent, which maps them to store positions before reordering,
//! so moving an item under an active filter swaps it with its visible
//! neighbour.
//!
//! ## Keys
//!
//! ```text
//! ↑/↓           select          a        add
//! Shift+↑/↓     move item       e/Enter  edit
//! space         cycle status    d d      delete (press twice)
//! 1 / 2 / 3     set status      /        search
//! f             cycle filter    q        quit
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::todo::{Todo, TodoStatus};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent list state. `ids` mirrors the visible todos of the last sync.
#[derive(Debug, Default)]
pub struct TodoListState {
    ids: Vec<String>,
    pub selected: usize,
    pub confirm_delete: bool,
    pub list_state: ListState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoListEvent {
    Add,
    Edit(String),
    Delete(String),
    CycleStatus(String),
    SetStatus { id: String, status: TodoStatus },
    /// Move `id` to where `neighbor` currently is.
    Move { id: String, neighbor: String },
    FocusSearch,
    CycleFilter,
    Quit,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh from the visible todos, keeping the selection in range.
    pub fn sync(&mut self, visible: &[Todo]) {
        self.ids = visible.iter().map(|t| t.id.clone()).collect();
        if self.ids.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.ids.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Select the visible todo with this id, if present.
    pub fn select_id(&mut self, id: &str) {
        if let Some(idx) = self.ids.iter().position(|i| i == id) {
            self.selected = idx;
            self.list_state.select(Some(idx));
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.ids.get(self.selected).map(String::as_str)
    }

    fn select(&mut self, idx: usize) {
        self.selected = idx;
        self.list_state.select(Some(idx));
    }

    fn move_event(&mut self, up: bool) -> Option<TodoListEvent> {
        let target = if up {
            self.selected.checked_sub(1)?
        } else {
            self.selected + 1
        };
        let neighbor = self.ids.get(target)?.clone();
        let id = self.ids.get(self.selected)?.clone();
        self.select(target);
        Some(TodoListEvent::Move { id, neighbor })
    }
}

impl EventHandler for TodoListState {
    type Event = TodoListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TodoListEvent> {
        let is_delete_key = matches!(event, TuiEvent::InputChar('d'));
        if !is_delete_key {
            self.confirm_delete = false;
        }

        let selected = self.selected_id().map(str::to_string);
        match event {
            TuiEvent::CursorUp => {
                if !self.ids.is_empty() {
                    self.select(self.selected.saturating_sub(1));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.ids.is_empty() {
                    self.select((self.selected + 1).min(self.ids.len() - 1));
                }
                None
            }
            TuiEvent::CursorHome => {
                if !self.ids.is_empty() {
                    self.select(0);
                }
                None
            }
            TuiEvent::CursorEnd => {
                if !self.ids.is_empty() {
                    self.select(self.ids.len() - 1);
                }
                None
            }
            TuiEvent::MoveItemUp => self.move_event(true),
            TuiEvent::MoveItemDown => self.move_event(false),
            TuiEvent::InputChar('a') => Some(TodoListEvent::Add),
            TuiEvent::InputChar('e') | TuiEvent::Submit => selected.map(TodoListEvent::Edit),
            TuiEvent::InputChar(' ') => selected.map(TodoListEvent::CycleStatus),
            TuiEvent::InputChar(c @ '1'..='3') => {
                let status = TodoStatus::ALL[(*c as u8 - b'1') as usize];
                selected.map(|id| TodoListEvent::SetStatus { id, status })
            }
            TuiEvent::InputChar('d') => {
                let id = selected?;
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(TodoListEvent::Delete(id))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            TuiEvent::InputChar('/') => Some(TodoListEvent::FocusSearch),
            TuiEvent::InputChar('f') => Some(TodoListEvent::CycleFilter),
            TuiEvent::InputChar('q') => Some(TodoListEvent::Quit),
            _ => None,
        }
    }
}

pub fn status_color(status: TodoStatus) -> Color {
    match status {
        TodoStatus::Todo => Color::Yellow,
        TodoStatus::InProgress => Color::Blue,
        TodoStatus::Done => Color::Green,
    }
}

/// Transient render wrapper.
pub struct TodoList<'a> {
    pub state: &'a mut TodoListState,
    pub todos: &'a [Todo],
    /// True when search or status filter is narrowing the list.
    pub filtered: bool,
    pub focused: bool,
}

impl TodoList<'_> {
    fn card(&self, index: usize, todo: &Todo, width: u16) -> ListItem<'static> {
        let is_selected = self.focused && index == self.state.selected;
        let badge_style = Style::default()
            .fg(Color::Black)
            .bg(status_color(todo.status))
            .add_modifier(Modifier::BOLD);
        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if todo.status == TodoStatus::Done {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let marker = if is_selected { "▌ " } else { "  " };
        let mut lines = vec![Line::from(vec![
            Span::raw(marker),
            Span::styled(format!(" {} ", todo.status.label()), badge_style),
            Span::raw(" "),
            Span::styled(todo.title.clone(), title_style),
        ])];

        if !todo.description.is_empty() {
            let wrap_width = width.saturating_sub(4).max(1) as usize;
            for line in textwrap::wrap(&todo.description, wrap_width) {
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(line.into_owned(), Style::default().fg(Color::Gray)),
                ]));
            }
        }
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("Due {}", todo.deadline),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::raw(""));

        let item = ListItem::new(lines);
        match (is_selected, self.state.confirm_delete) {
            (true, true) => item.style(Style::default().fg(Color::Red)),
            (true, false) => item.style(Style::default().bg(Color::Rgb(40, 40, 48))),
            _ => item,
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help = if self.state.confirm_delete {
            " Press d again to confirm delete "
        } else {
            " a Add  e Edit  d Delete  space Status  Shift+↑/↓ Move "
        };
        let border = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" Todos ({}) ", self.todos.len()))
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));

        if self.todos.is_empty() {
            let message = if self.filtered {
                "No todos match the current search or filter."
            } else {
                "No todos yet. Press a to add one."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = block.inner(area).width;
        let items: Vec<ListItem> = self
            .todos
            .iter()
            .enumerate()
            .map(|(i, todo)| self.card(i, todo, width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
