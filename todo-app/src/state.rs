//! Application state - single source of truth
//!
//! The store hands out snapshots of [`AppState`]; only the reducers produce
//! new ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Caller-assigned todo identifier
pub type TodoId = u64;

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Which subset of todos the view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    pub const ALL: [VisibilityFilter; 3] = [
        VisibilityFilter::ShowAll,
        VisibilityFilter::ShowActive,
        VisibilityFilter::ShowCompleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "SHOW_ALL",
            VisibilityFilter::ShowActive => "SHOW_ACTIVE",
            VisibilityFilter::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Whether a todo belongs to this filter's subset
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| TodoError::ParseFilter(s.to_string()))
    }
}

/// Application state: the todo list plus the active filter
///
/// `AppState::default()` is the initial state: no todos, `SHOW_ALL`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Todos in insertion order
    pub todos: Vec<Todo>,
    pub visibility_filter: VisibilityFilter,
}
