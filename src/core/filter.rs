//! # Filter / Search
//!
//! Pure view derivation. The result is never stored; callers recompute it
//! whenever the collection, the search text or the status filter changes.

use crate::core::todo::{Todo, TodoStatus};

/// Status selector for the list view. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TodoStatus),
}

impl StatusFilter {
    /// All → TODO → IN_PROGRESS → DONE → All
    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(TodoStatus::Todo),
            StatusFilter::Only(TodoStatus::Done) => StatusFilter::All,
            StatusFilter::Only(status) => StatusFilter::Only(status.next()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(&self, status: TodoStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Case-insensitive substring match against title or description.
/// An empty query matches everything.
pub fn matches_search(todo: &Todo, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    todo.title.to_lowercase().contains(&needle) || todo.description.to_lowercase().contains(&needle)
}

/// Returns the todos that pass both predicates, in input order.
pub fn filter(todos: &[Todo], search_text: &str, status_filter: StatusFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| matches_search(todo, search_text) && status_filter.matches(todo.status))
        .cloned()
        .collect()
}
