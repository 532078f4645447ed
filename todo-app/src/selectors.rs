//! Derived views over the state

use crate::state::{AppState, Todo, VisibilityFilter};

/// Todos selected by `filter`, in list order
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).collect()
}

/// Todos selected by the state's own filter
pub fn visible_in(state: &AppState) -> Vec<&Todo> {
    visible_todos(&state.todos, state.visibility_filter)
}

/// Number of todos not yet completed
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}
