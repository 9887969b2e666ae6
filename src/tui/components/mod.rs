//! # TUI Components
//!
//! Every piece of the terminal interface lives here.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top bar with user, backend and status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame to render. The state type implements `EventHandler` and emits a
//! component-level event the parent turns into core `Action`s:
//! - `LoginFormState` / `LoginForm`
//! - `SignupFormState` / `SignupForm`
//! - `TodoListState` / `TodoList`
//! - `TodoFormState` / `TodoForm` (overlay)
//! - `SearchState` / `FiltersBar`
//!
//! The forms share `FormState`, which in turn is a stack of `TextField`s.
//!
//! ## Props-Based Data Flow
//!
//! Components get external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TodoList { state: &mut tui.list, todos: &visible, filtered, focused }.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! todo_list.render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file, plus overlay geometry helpers)
//! ├── title_bar.rs    (top bar)
//! ├── text_field.rs   (single-line input)
//! ├── form.rs         (labelled field stack with errors)
//! ├── login_form.rs
//! ├── signup_form.rs
//! ├── todo_form.rs    (add / edit overlay)
//! ├── todo_list.rs
//! └── filters_bar.rs  (search + status filter)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod filters_bar;
pub mod form;
pub mod login_form;
pub mod signup_form;
pub mod text_field;
pub mod todo_form;
pub mod todo_list;
mod title_bar;

pub use filters_bar::{FiltersBar, SearchEvent, SearchState};
pub use login_form::{LoginEvent, LoginForm, LoginFormState};
pub use signup_form::{SignupEvent, SignupForm, SignupFormState};
pub use title_bar::TitleBar;
pub use todo_form::{TodoForm, TodoFormEvent, TodoFormState};
pub use todo_list::{TodoList, TodoListEvent, TodoListState};

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
/// Both dimensions are clamped to `outer`.
pub fn centered_box(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Percentage(percent_x.min(100))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
