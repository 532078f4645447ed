//! Actions - what can happen to the todo state
//!
//! Ids are never assigned by the store. Callers take them from a
//! [`TodoIdAllocator`] (or supply their own) when building `AddTodo`.

use serde::{Deserialize, Serialize};
use todo_dispatch::{Action, ActionSummary};

use crate::error::{Result, TodoError};
use crate::state::{TodoId, VisibilityFilter};

/// Every state change the todo app understands
///
/// Serialized with a `type` tag, e.g. `{"type":"TOGGLE_TODO","id":0}`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[action(predicates)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new, not yet completed todo
    #[action(category = "todos")]
    AddTodo { id: TodoId, text: String },

    /// Flip `completed` on the todo with this id
    #[action(category = "todos")]
    ToggleTodo { id: TodoId },

    #[action(category = "filter")]
    SetVisibilityFilter { filter: VisibilityFilter },
}

impl TodoAction {
    pub fn add_todo(id: TodoId, text: impl Into<String>) -> Self {
        TodoAction::AddTodo {
            id,
            text: text.into(),
        }
    }

    pub fn toggle_todo(id: TodoId) -> Self {
        TodoAction::ToggleTodo { id }
    }

    pub fn set_visibility_filter(filter: VisibilityFilter) -> Self {
        TodoAction::SetVisibilityFilter { filter }
    }
}

impl ActionSummary for TodoAction {
    fn summary(&self) -> String {
        match self {
            TodoAction::AddTodo { id, text } => format!("AddTodo #{id} {text:?}"),
            TodoAction::ToggleTodo { id } => format!("ToggleTodo #{id}"),
            TodoAction::SetVisibilityFilter { filter } => format!("SetVisibilityFilter {filter}"),
        }
    }
}

/// Hands out todo ids, starting at 0 and incrementing once per todo
///
/// `TodoId::MAX` is never handed out; reaching it exhausts the allocator.
#[derive(Debug, Clone, Default)]
pub struct TodoIdAllocator {
    next: TodoId,
}

impl TodoIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume allocation from a known id
    pub fn starting_at(next: TodoId) -> Self {
        Self { next }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> Result<TodoId> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        Ok(id)
    }

    /// The id the next call to [`next_id`](Self::next_id) returns
    pub fn peek(&self) -> TodoId {
        self.next
    }

    /// Make sure future ids never collide with one assigned elsewhere
    pub fn observe(&mut self, id: TodoId) {
        self.next = self.next.max(id.saturating_add(1));
    }

    /// Build an `AddTodo` with a freshly allocated id
    pub fn add_todo(&mut self, text: impl Into<String>) -> Result<TodoAction> {
        Ok(TodoAction::add_todo(self.next_id()?, text))
    }
}
