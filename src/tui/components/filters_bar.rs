//! # Filters Bar
//!
//! Search box plus the active status filter. The search text is pushed to
//! core on every keystroke so the list narrows as you type.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::filter::StatusFilter;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::components::todo_list::status_color;
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct SearchState {
    pub input: TextField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
    /// Leave the search box and return to the list.
    Done,
}

impl EventHandler for SearchState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Submit
            | TuiEvent::Escape
            | TuiEvent::NextField
            | TuiEvent::PrevField
            | TuiEvent::CursorDown => Some(SearchEvent::Done),
            _ => self
                .input
                .handle_event(event)
                .then(|| SearchEvent::Changed(self.input.value().to_string())),
        }
    }
}

/// Transient render wrapper.
pub struct FiltersBar<'a> {
    pub search: &'a SearchState,
    pub status_filter: StatusFilter,
    pub focused: bool,
}

impl Component for FiltersBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, filter_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(22)]).areas(area);

        let title = if self.focused {
            "Search (Enter to finish)"
        } else {
            "Search (/)"
        };
        self.search
            .input
            .render(frame, search_area, title, self.focused, false);

        let label_style = match self.status_filter {
            StatusFilter::All => Style::default().fg(Color::White),
            StatusFilter::Only(status) => Style::default().fg(status_color(status)),
        };
        let filter = Paragraph::new(Line::from(vec![Span::styled(
            self.status_filter.label(),
            label_style.add_modifier(Modifier::BOLD),
        )]))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Status (f)"),
        );
        frame.render_widget(filter, filter_area);
    }
}
