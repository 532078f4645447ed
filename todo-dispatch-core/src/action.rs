//! Action trait for type-safe state transitions

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged, recorded, or replayed
/// - Debug: For debugging and logging
/// - 'static: Stored by middleware and test recorders
///
/// Use `#[derive(Action)]` from `todo-dispatch-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Actions grouped into named categories
///
/// Generated by `#[derive(Action)]` when any variant carries
/// `#[action(category = "...")]`.
pub trait ActionCategory: Action {
    /// Category of this action, if it has one
    fn category(&self) -> Option<&'static str>;
}

/// Human-readable one-line representation used by the action log
///
/// The default falls back to the `Debug` output.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
