use ratatui::layout::Rect;
use ratatui::Frame;

use crate::tui::event::TuiEvent;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow their
/// persistent state mutably, and render into a `Rect` of the frame.
///
/// `render` takes `&mut self` so a component can update presentation state
/// (list selection offsets, cursor placement) while drawing, the same way
/// ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Consume a terminal event. Returns a component event when the parent
    /// needs to act on it.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
