//! # Reorder
//!
//! Single-element extract-and-reinsert, the semantics drag-and-drop lists use:
//! remove the element at `from`, then insert it at `to` in the shortened
//! sequence. `to` therefore indexes the post-removal sequence.
//!
//! ```text
//! [A, B, C]  move(0, 2)  →  remove A → [B, C]  →  insert at 2 → [B, C, A]
//! ```
//!
//! Out-of-range indices are rejected; the input is never touched.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    OutOfBounds { from: usize, to: usize, len: usize },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderError::OutOfBounds { from, to, len } => {
                write!(f, "cannot move {from} -> {to} in a list of {len}")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Returns a new sequence with the element at `from` moved to `to`.
pub fn move_item<T: Clone>(sequence: &[T], from: usize, to: usize) -> Result<Vec<T>, ReorderError> {
    let len = sequence.len();
    if from >= len || to >= len {
        return Err(ReorderError::OutOfBounds { from, to, len });
    }

    let mut items = sequence.to_vec();
    let item = items.remove(from);
    items.insert(to, item);
    Ok(items)
}
