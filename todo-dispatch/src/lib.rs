//! todo-dispatch: reducer-driven state management
//!
//! Like Redux/Elm: state lives in a [`Store`], every change goes through a
//! dispatched action and a pure reducer, and listeners are told after each
//! dispatch so they can read the new state.
//!
//! # Example
//! ```
//! use todo_dispatch::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum MyAction {
//!     NextItem,
//!     PrevItem,
//! }
//!
//! fn reducer(selected: usize, action: &MyAction) -> usize {
//!     match action {
//!         MyAction::NextItem => selected + 1,
//!         MyAction::PrevItem => selected.saturating_sub(1),
//!     }
//! }
//!
//! let store = Store::new(0, reducer);
//! store.dispatch(MyAction::NextItem);
//! assert_eq!(*store.state(), 1);
//! assert_eq!(MyAction::PrevItem.name(), "PrevItem");
//! ```

// Re-export everything from core
pub use todo_dispatch_core::*;

// Re-export derive macros
pub use todo_dispatch_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use todo_dispatch_core::{Action, ActionCategory, ActionSummary};

    // Store
    pub use todo_dispatch_core::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware, Subscription,
    };

    // Logging
    pub use todo_dispatch_core::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};

    // Derive macros
    pub use todo_dispatch_macros::Action;
}
