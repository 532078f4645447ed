//! Todo list state core
//!
//! - State: [`AppState`] holds the todos and the visibility filter
//! - Actions: [`TodoAction`] describes every change, [`TodoIdAllocator`] hands out ids
//! - Reducers: [`reducer::todo_app`] composes the slice reducers
//! - Store: [`create_store`] wires the root reducer into a [`Store`]
//! - Replay: [`replay::run`] drives a logged store from a parsed script
//!
//! ```
//! use todo_app::{create_store, TodoAction, TodoIdAllocator};
//!
//! let store = create_store();
//! let mut ids = TodoIdAllocator::new();
//!
//! store.dispatch(ids.add_todo("Learn Redux")?);
//! let state = store.dispatch(TodoAction::toggle_todo(0));
//! assert!(state.todos[0].completed);
//! # Ok::<(), todo_app::TodoError>(())
//! ```

pub mod action;
pub mod error;
pub mod reducer;
pub mod replay;
pub mod script;
pub mod selectors;
pub mod state;

pub use action::{TodoAction, TodoIdAllocator};
pub use error::{Result, TodoError};
pub use state::{AppState, Todo, TodoId, VisibilityFilter};

use todo_dispatch::{ActionLoggerMiddleware, Store, StoreWithMiddleware};

/// Store holding the todo app state
pub type TodoStore = Store<AppState, TodoAction>;

/// Todo store with an action logger in front of the reducer
pub type LoggedTodoStore = StoreWithMiddleware<AppState, TodoAction, ActionLoggerMiddleware>;

/// Create the store with the initial state (no todos, `SHOW_ALL`)
pub fn create_store() -> TodoStore {
    Store::with_default(reducer::todo_app)
}

/// Create the store with an action logger middleware
pub fn create_logged_store(logger: ActionLoggerMiddleware) -> LoggedTodoStore {
    StoreWithMiddleware::new(AppState::default(), reducer::todo_app, logger)
}

/// Render any serializable state value as pretty JSON
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
