//! Core traits and types for todo-dispatch
//!
//! This crate provides the foundational abstractions for reducer-driven
//! state management, following a Redux/Elm-inspired architecture.
//!
//! # Core Concepts
//!
//! - **Action**: Values that describe an intended state change
//! - **Reducer**: Pure `fn(S, &A) -> S` computing the next state
//! - **Store**: Owns the current state, applies the reducer, notifies listeners
//! - **Middleware**: Observes actions before and after each dispatch
//!
//! # Basic Example
//!
//! ```
//! use todo_dispatch_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         "Increment"
//!     }
//! }
//!
//! fn reducer(count: i32, action: &CounterAction) -> i32 {
//!     match action {
//!         CounterAction::Increment => count + 1,
//!     }
//! }
//!
//! let store = Store::new(0, reducer);
//! let subscription = store.subscribe(|| println!("changed"));
//! store.dispatch(CounterAction::Increment);
//! subscription.unsubscribe();
//! assert_eq!(*store.state(), 1);
//! ```
//!
//! The store is a plain value: build it once at startup and hand it (or an
//! `Rc` of it) to whatever needs to read state or dispatch.

pub mod action;
pub mod action_logger;
pub mod listener;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory, ActionSummary};

// Store exports
pub use listener::{Listener, Subscription};
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
    StoreWithMiddleware,
};

// Logging exports
pub use action_logger::{
    glob_match, ActionLog, ActionLogConfig, ActionLogEntry, ActionLoggerConfig,
    ActionLoggerMiddleware,
};

// Testing exports
pub use testing::{ListenerProbe, RecordingMiddleware};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::action_logger::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};
    pub use crate::listener::Subscription;
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware,
    };
}
