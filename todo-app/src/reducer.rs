//! Reducers - pure functions: (state, action) -> state
//!
//! Each reducer owns one slice of [`AppState`] and matches every
//! [`TodoAction`] variant. Variants that do not concern a slice hand it
//! back untouched, so the value (and its allocation) passes straight through.

use crate::action::TodoAction;
use crate::state::{AppState, Todo, VisibilityFilter};

/// Reducer for a single todo
///
/// `AddTodo` ignores its input and builds a fresh todo. `ToggleTodo` flips
/// `completed` only when the id matches.
pub fn todo(todo: Option<Todo>, action: &TodoAction) -> Option<Todo> {
    match action {
        TodoAction::AddTodo { id, text } => Some(Todo {
            id: *id,
            text: text.clone(),
            completed: false,
        }),
        TodoAction::ToggleTodo { id } => todo.map(|current| {
            if current.id != *id {
                return current;
            }
            Todo {
                completed: !current.completed,
                ..current
            }
        }),
        TodoAction::SetVisibilityFilter { .. } => todo,
    }
}

/// Reducer for the todo list
pub fn todos(mut list: Vec<Todo>, action: &TodoAction) -> Vec<Todo> {
    match action {
        TodoAction::AddTodo { .. } => {
            list.extend(todo(None, action));
            list
        }
        // `todo` maps `Some` to `Some` for toggles, so no element is dropped.
        TodoAction::ToggleTodo { .. } => list
            .into_iter()
            .filter_map(|item| todo(Some(item), action))
            .collect(),
        TodoAction::SetVisibilityFilter { .. } => list,
    }
}

/// Reducer for the visibility filter
pub fn visibility_filter(filter: VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => *filter,
        TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } => filter,
    }
}

/// Root reducer: runs every slice reducer on every action
pub fn todo_app(state: AppState, action: &TodoAction) -> AppState {
    AppState {
        todos: todos(state.todos, action),
        visibility_filter: visibility_filter(state.visibility_filter, action),
    }
}
