//! # TitleBar Component
//!
//! Top status bar: app name, who is signed in, which auth backend is in use
//! and the latest status message.
//!
//! Stateless. Every field is a prop, so the bar renders exactly what it is
//! given:
//!
//! 1. **Signed in**: `"Taskdeck | Demo User (remote) | Added \"Milk\""`
//! 2. **Anonymous**: `"Taskdeck (remote) | Welcome to Taskdeck!"`
//! 3. **No status**: the status segment is dropped.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Display name of the signed-in user, if any
    pub user_name: Option<String>,
    /// Auth backend name ("remote" / "demo")
    pub backend_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(user_name: Option<String>, backend_name: String, status_message: String) -> Self {
        Self {
            user_name,
            backend_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        let who = match &self.user_name {
            Some(name) => format!("Taskdeck | {} ({})", name, self.backend_name),
            None => format!("Taskdeck ({})", self.backend_name),
        };
        if self.status_message.is_empty() {
            who
        } else {
            format!("{} | {}", who, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_signed_in() {
        let text = rendered(TitleBar::new(
            Some("Demo User".to_string()),
            "demo".to_string(),
            "Added \"Milk\"".to_string(),
        ));
        assert!(text.contains("Taskdeck | Demo User (demo)"));
        assert!(text.contains("Added \"Milk\""));
    }

    #[test]
    fn test_title_bar_anonymous() {
        let text = rendered(TitleBar::new(
            None,
            "remote".to_string(),
            "Welcome to Taskdeck!".to_string(),
        ));
        assert!(text.contains("Taskdeck (remote) | Welcome to Taskdeck!"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let title_bar = TitleBar::new(None, "remote".to_string(), String::new());
        assert_eq!(title_bar.text(), "Taskdeck (remote)");
        assert!(!rendered(title_bar).contains('|'));
    }
}
