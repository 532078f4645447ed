//! Test utilities for stores built with todo-dispatch
//!
//! - [`ListenerProbe`]: hand out labelled listeners and check who was called, in order
//! - [`RecordingMiddleware`]: capture every action passing through a store
//! - Assertion macros for verifying recorded actions
//!
//! # Example
//!
//! ```
//! use todo_dispatch_core::testing::ListenerProbe;
//! use todo_dispatch_core::{Action, Store};
//!
//! #[derive(Clone, Debug)]
//! struct Bump;
//!
//! impl Action for Bump {
//!     fn name(&self) -> &'static str {
//!         "Bump"
//!     }
//! }
//!
//! fn reducer(count: u32, _: &Bump) -> u32 {
//!     count + 1
//! }
//!
//! let store = Store::new(0, reducer);
//! let probe = ListenerProbe::new();
//! store.subscribe(probe.listener("view"));
//!
//! store.dispatch(Bump);
//! assert_eq!(probe.calls(), vec!["view"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::Middleware;
use crate::Action;

/// Records calls made to the listeners it hands out.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct ListenerProbe {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl ListenerProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records `label` each time it is called
    pub fn listener(&self, label: &'static str) -> impl Fn() + 'static {
        let calls = Rc::clone(&self.calls);
        move || calls.borrow_mut().push(label)
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// How many times the listener with `label` was called
    pub fn count(&self, label: &str) -> usize {
        self.calls.borrow().iter().filter(|l| **l == label).count()
    }

    /// Total number of recorded calls
    pub fn total(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Middleware that keeps a copy of every action it sees.
///
/// # Example
///
/// ```
/// use todo_dispatch_core::testing::RecordingMiddleware;
/// use todo_dispatch_core::{assert_dispatched, Action, StoreWithMiddleware};
///
/// #[derive(Clone, Debug)]
/// enum MyAction {
///     Add { amount: u32 },
/// }
///
/// impl Action for MyAction {
///     fn name(&self) -> &'static str {
///         "Add"
///     }
/// }
///
/// fn reducer(total: u32, action: &MyAction) -> u32 {
///     match action {
///         MyAction::Add { amount } => total + amount,
///     }
/// }
///
/// let store = StoreWithMiddleware::new(0, reducer, RecordingMiddleware::new());
/// store.dispatch(MyAction::Add { amount: 2 });
/// let actions = store.middleware_mut().drain();
/// assert_dispatched!(actions, MyAction::Add { .. });
/// assert_eq!(*store.state(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingMiddleware<A: Action> {
    actions: Vec<A>,
    notifications: Vec<usize>,
}

impl<A: Action> Default for RecordingMiddleware<A> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            notifications: Vec::new(),
        }
    }
}

impl<A: Action> RecordingMiddleware<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, in dispatch order
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Listener counts reported after each completed dispatch
    pub fn notifications(&self) -> &[usize] {
        &self.notifications
    }

    /// Take the recorded actions, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<A> {
        self.notifications.clear();
        std::mem::take(&mut self.actions)
    }
}

impl<A: Action> Middleware<A> for RecordingMiddleware<A> {
    fn before(&mut self, action: &A) {
        self.actions.push(action.clone());
    }

    fn after(&mut self, _action: &A, listeners_notified: usize) {
        self.notifications.push(listeners_notified);
    }
}

/// Assert that an action matching the pattern was recorded.
///
/// # Example
///
/// ```
/// use todo_dispatch_core::{assert_dispatched, assert_not_dispatched, count_dispatched};
///
/// #[derive(Debug)]
/// enum TodoAction {
///     AddTodo { id: u64 },
///     ToggleTodo { id: u64 },
/// }
///
/// let actions = vec![TodoAction::AddTodo { id: 0 }, TodoAction::ToggleTodo { id: 0 }];
/// assert_dispatched!(actions, TodoAction::AddTodo { .. });
/// assert_dispatched!(actions, TodoAction::ToggleTodo { id } if *id == 0);
/// assert_not_dispatched!(actions, TodoAction::ToggleTodo { id } if *id == 1);
/// assert_eq!(count_dispatched!(actions, TodoAction::AddTodo { .. }), 1);
/// ```
#[macro_export]
macro_rules! assert_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be dispatched, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was recorded.
#[macro_export]
macro_rules! assert_not_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be dispatched, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count recorded actions matching the pattern.
#[macro_export]
macro_rules! count_dispatched {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Store, StoreWithMiddleware};

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Push(u8),
        Pop,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Push(_) => "Push",
                TestAction::Pop => "Pop",
            }
        }
    }

    fn reducer(mut stack: Vec<u8>, action: &TestAction) -> Vec<u8> {
        match action {
            TestAction::Push(value) => {
                stack.push(*value);
                stack
            }
            TestAction::Pop => {
                stack.pop();
                stack
            }
        }
    }

    #[test]
    fn test_probe_records_order_and_counts() {
        let store = Store::new(Vec::new(), reducer);
        let probe = ListenerProbe::new();
        store.subscribe(probe.listener("a"));
        store.subscribe(probe.listener("b"));

        store.dispatch(TestAction::Push(1));
        store.dispatch(TestAction::Pop);

        assert_eq!(probe.calls(), vec!["a", "b", "a", "b"]);
        assert_eq!(probe.count("a"), 2);
        assert_eq!(probe.total(), 4);

        probe.clear();
        assert_eq!(probe.total(), 0);
    }

    #[test]
    fn test_recording_middleware() {
        let store = StoreWithMiddleware::new(Vec::new(), reducer, RecordingMiddleware::new());
        let probe = ListenerProbe::new();
        store.subscribe(probe.listener("view"));

        store.dispatch(TestAction::Push(7));
        store.dispatch(TestAction::Push(8));
        store.dispatch(TestAction::Pop);

        assert_eq!(store.middleware().notifications(), &[1, 1, 1]);

        let actions = store.middleware_mut().drain();
        assert_eq!(actions.len(), 3);
        assert_dispatched!(actions, TestAction::Push(7));
        assert_dispatched!(actions, TestAction::Push(n) if *n > 7);
        assert_not_dispatched!(actions, TestAction::Push(9));
        assert_eq!(count_dispatched!(actions, TestAction::Push(_)), 2);

        assert!(store.middleware().actions().is_empty());
        assert_eq!(*store.state(), vec![7]);
    }
}
