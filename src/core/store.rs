//! # Todo Store
//!
//! The authoritative, ordered collection of todos. Order is display order:
//! new todos go to the front and `reorder` moves one record at a time.
//!
//! Lookups by an unknown id are benign: the operation does nothing and
//! reports it through its return value.

use log::debug;

use crate::core::reorder::{ReorderError, move_item};
use crate::core::todo::{Todo, TodoDraft, TodoPatch, TodoStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records. Later duplicates of an id are dropped.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let mut unique: Vec<Todo> = Vec::with_capacity(todos.len());
        for todo in todos {
            if unique.iter().any(|t| t.id == todo.id) {
                debug!("Dropping duplicate todo id {}", todo.id);
                continue;
            }
            unique.push(todo);
        }
        Self { todos: unique }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// Prepends a new todo with a fresh id and returns that id.
    pub fn add(&mut self, draft: TodoDraft) -> String {
        let mut id = uuid::Uuid::new_v4().to_string();
        while self.get(&id).is_some() {
            id = uuid::Uuid::new_v4().to_string();
        }
        debug!("Adding todo {} ({:?})", id, draft.title);
        self.todos.insert(0, Todo::from_draft(id.clone(), draft));
        id
    }

    /// Applies `patch` to the matching record in place. Returns `false` if absent.
    pub fn update(&mut self, id: &str, patch: TodoPatch) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                let mut updated = todo.clone();
                updated.apply(patch);
                *todo = updated;
                true
            }
            None => {
                debug!("update: no todo with id {}", id);
                false
            }
        }
    }

    /// Full-field edit, keeping id and position.
    pub fn replace(&mut self, id: &str, draft: TodoDraft) -> bool {
        self.update(id, TodoPatch::from(draft))
    }

    pub fn set_status(&mut self, id: &str, status: TodoStatus) -> bool {
        self.update(id, TodoPatch::status(status))
    }

    /// Removes and returns the matching record, if any.
    pub fn remove(&mut self, id: &str) -> Option<Todo> {
        let Some(index) = self.position(id) else {
            debug!("remove: no todo with id {}", id);
            return None;
        };
        Some(self.todos.remove(index))
    }

    /// Moves the record at `old_index` to `new_index` (post-removal indexing).
    /// On error the collection is unchanged.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), ReorderError> {
        self.todos = move_item(&self.todos, old_index, new_index)?;
        Ok(())
    }
}
