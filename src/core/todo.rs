//! # Todo Entity
//!
//! ```text
//! Todo
//! ├── id: String            // uuid v4, immutable after creation
//! ├── title: String         // non-empty
//! ├── description: String   // may be empty
//! ├── deadline: String      // ISO date, "YYYY-MM-DD"
//! └── status: TodoStatus    // TODO | IN_PROGRESS | DONE
//! ```
//!
//! The store never interprets `deadline`; only the form validates it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Done];

    /// Wire spelling, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "TODO",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Done => "DONE",
        }
    }

    /// Human label used by the list and the form.
    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "To Do",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Done => "Done",
        }
    }

    /// Cycles TODO → IN_PROGRESS → DONE → TODO.
    pub fn next(&self) -> Self {
        match self {
            TodoStatus::Todo => TodoStatus::InProgress,
            TodoStatus::InProgress => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Todo,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        TodoStatus::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: TodoStatus,
}

impl Todo {
    pub fn from_draft(id: String, draft: TodoDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
            status: draft.status,
        }
    }

    /// Overwrites every field the patch carries. `id` is never touched.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// A todo before the store has assigned it an id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: TodoStatus,
}

impl From<&Todo> for TodoDraft {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            deadline: todo.deadline.clone(),
            status: todo.status,
        }
    }
}

/// Partial update. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<TodoDraft> for TodoPatch {
    fn from(draft: TodoDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            deadline: Some(draft.deadline),
            status: Some(draft.status),
        }
    }
}

/// The two records the app starts with when seeding is enabled.
pub fn demo_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: "1".to_string(),
            title: "Complete Project Proposal".to_string(),
            description: "Write and submit the project proposal for the new client".to_string(),
            deadline: "2024-03-20".to_string(),
            status: TodoStatus::Todo,
        },
        Todo {
            id: "2".to_string(),
            title: "Review Code".to_string(),
            description: "Review pull requests and merge approved changes".to_string(),
            deadline: "2024-03-15".to_string(),
            status: TodoStatus::InProgress,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_wire_spelling() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let parsed: TodoStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(parsed, TodoStatus::Done);
    }

    #[test]
    fn test_status_cycle_wraps() {
        assert_eq!(TodoStatus::Todo.next(), TodoStatus::InProgress);
        assert_eq!(TodoStatus::InProgress.next(), TodoStatus::Done);
        assert_eq!(TodoStatus::Done.next(), TodoStatus::Todo);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TodoStatus::parse("TODO"), Some(TodoStatus::Todo));
        assert_eq!(TodoStatus::parse("todo"), None);
    }

    #[test]
    fn test_apply_patch_only_touches_given_fields() {
        let mut todo = demo_todos().remove(0);
        todo.apply(TodoPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });
        assert_eq!(todo.id, "1");
        assert_eq!(todo.title, "Renamed");
        assert_eq!(todo.deadline, "2024-03-20");
        assert_eq!(todo.status, TodoStatus::Todo);
    }

    #[test]
    fn test_demo_todos_have_unique_ids() {
        let todos = demo_todos();
        assert_eq!(todos.len(), 2);
        assert_ne!(todos[0].id, todos[1].id);
    }
}
