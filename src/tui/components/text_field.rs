//! # TextField Component
//!
//! Single-line editable text with a byte-offset cursor. Used by every form
//! field and by the search box.
//!
//! The buffer is internal state; `masked` and the border title are props.
//! When the text is wider than the field, the view scrolls so the cursor
//! stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

/// Border consumed on each side of the content.
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let mut field = Self::new();
        field.set_value(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.buffer = value.replace(['\n', '\r'], " ");
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Applies an editing event. Returns `true` if the text changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let single_line = text.replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &single_line);
                self.cursor += single_line.len();
                !single_line.is_empty()
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                true
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                true
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                false
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                false
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                false
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                false
            }
            _ => false,
        }
    }

    /// Text as displayed: bullets instead of characters when masked.
    fn display_text(&self, masked: bool) -> (String, usize) {
        if masked {
            let chars_before = self.buffer[..self.cursor].chars().count();
            ("•".repeat(self.buffer.chars().count()), chars_before)
        } else {
            let before = self.buffer[..self.cursor].width();
            (self.buffer.clone(), before)
        }
    }

    /// Renders the field in a bordered block and, if focused, places the cursor.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool, masked: bool) {
        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2) as usize;
        let (text, cursor_col) = self.display_text(masked);

        // Scroll horizontally so the cursor stays inside the box
        let skip_cols = (cursor_col + 1).saturating_sub(inner_width);
        let mut skipped = 0;
        let visible: String = text
            .chars()
            .skip_while(|c| {
                if skipped >= skip_cols {
                    return false;
                }
                skipped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0);
                true
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title.to_string());

        frame.render_widget(Paragraph::new(visible).block(block), area);

        if focused {
            let x = area.x + BORDER_OFFSET + (cursor_col - skipped.min(cursor_col)) as u16;
            let x = x.min(area.x + area.width.saturating_sub(BORDER_OFFSET + 1));
            frame.set_cursor_position((x, area.y + BORDER_OFFSET));
        }
    }
}
