//! Centralized state store with reducer pattern

use crate::listener::{Listeners, Subscription};
use crate::Action;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A reducer function that computes the next state from the current one
///
/// Takes the state by value and the action by reference. Slices the action
/// does not concern should be returned as they came in.
pub type Reducer<S, A> = fn(S, &A) -> S;

/// Centralized state store with Redux-like reducer pattern
///
/// The store holds the application state and provides a single point
/// for state transitions through the `dispatch` method. Every dispatch is
/// followed by a notification pass over the registered listeners.
///
/// All methods take `&self`, so a listener may capture a handle to the
/// store (for example an `Rc<Store<..>>` or a `Weak` of it) and read the
/// new state from inside its callback. Dispatching from inside a listener
/// is not supported.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
///
/// # Example
/// ```
/// use todo_dispatch_core::{Action, Store};
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: i32,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn name(&self) -> &'static str {
///         match self {
///             CounterAction::Increment => "Increment",
///             CounterAction::Decrement => "Decrement",
///         }
///     }
/// }
///
/// fn reducer(state: AppState, action: &CounterAction) -> AppState {
///     match action {
///         CounterAction::Increment => AppState { counter: state.counter + 1 },
///         CounterAction::Decrement => AppState { counter: state.counter - 1 },
///     }
/// }
///
/// let store = Store::new(AppState::default(), reducer);
/// store.dispatch(CounterAction::Increment);
/// assert_eq!(store.state().counter, 1);
/// ```
pub struct Store<S, A: Action> {
    state: RefCell<Rc<S>>,
    reducer: Reducer<S, A>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: Default, A: Action> Store<S, A> {
    /// Create a store whose initial state is `S::default()`
    pub fn with_default(reducer: Reducer<S, A>) -> Self {
        Self::new(S::default(), reducer)
    }
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: RefCell::new(Rc::new(state)),
            reducer,
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Get the current state snapshot
    ///
    /// The snapshot is never changed by later dispatches; each dispatch
    /// installs a new one.
    pub fn state(&self) -> Rc<S> {
        Rc::clone(&self.state.borrow())
    }

    /// Register a listener called after every dispatch
    ///
    /// Listeners run in registration order.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));
        tracing::trace!(listener = id, "listener added");
        Subscription::new(id, &self.listeners)
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Call every listener registered at this moment, returning how many ran
    fn notify(&self) -> usize {
        let listeners = self.listeners.borrow().snapshot();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }
}

impl<S: Clone + Default, A: Action> Store<S, A> {
    /// Dispatch an action to the store
    ///
    /// Runs the reducer, installs the new state, then notifies listeners.
    /// Returns the new state snapshot.
    pub fn dispatch(&self, action: A) -> Rc<S> {
        self.dispatch_counted(&action).0
    }

    /// Dispatch and also report how many listeners were notified
    fn dispatch_counted(&self, action: &A) -> (Rc<S>, usize) {
        self.apply(action);
        let notified = self.notify();
        tracing::trace!(action = %action.name(), notified, "dispatched");
        (self.state(), notified)
    }

    fn apply(&self, action: &A) {
        let mut slot = self.state.borrow_mut();
        // Clones only when a caller still holds the current snapshot.
        let state = Rc::make_mut(&mut slot);
        let current = std::mem::take(state);
        *state = (self.reducer)(current, action);
    }
}

/// Store with middleware support
///
/// Wraps a `Store` and allows middleware to intercept actions
/// before and after they are processed by the reducer.
pub struct StoreWithMiddleware<S, A: Action, M: Middleware<A>> {
    store: Store<S, A>,
    middleware: RefCell<M>,
}

impl<S, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Create a new store with middleware
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware: RefCell::new(middleware),
        }
    }

    /// Get the current state snapshot
    pub fn state(&self) -> Rc<S> {
        self.store.state()
    }

    /// Register a listener called after every dispatch
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Get the wrapped store
    pub fn store(&self) -> &Store<S, A> {
        &self.store
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> Ref<'_, M> {
        self.middleware.borrow()
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&self) -> RefMut<'_, M> {
        self.middleware.borrow_mut()
    }
}

impl<S: Clone + Default, A: Action, M: Middleware<A>> StoreWithMiddleware<S, A, M> {
    /// Dispatch an action through middleware and store
    pub fn dispatch(&self, action: A) -> Rc<S> {
        self.middleware.borrow_mut().before(&action);
        let (state, notified) = self.store.dispatch_counted(&action);
        self.middleware.borrow_mut().after(&action, notified);
        state
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging, recording, or other
/// cross-cutting concerns to your store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran and listeners were notified
    fn after(&mut self, action: &A, listeners_notified: usize);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _listeners_notified: usize) {}
}

/// Middleware that logs actions (for debugging)
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Create a new logging middleware with default settings (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, listeners_notified: usize) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                listeners_notified,
                "Action processed"
            );
        }
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    /// Create a new composed middleware
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, listeners_notified: usize) {
        // Reverse order for proper nesting
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, listeners_notified);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i32,
        history: Vec<i32>,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Decrement => "Decrement",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    fn test_reducer(mut state: TestState, action: &TestAction) -> TestState {
        match action {
            TestAction::Increment => {
                state.counter += 1;
                state.history.push(state.counter);
                state
            }
            TestAction::Decrement => {
                state.counter -= 1;
                state.history.push(state.counter);
                state
            }
            TestAction::NoOp => state,
        }
    }

    #[test]
    fn test_store_dispatch() {
        let store = Store::new(TestState::default(), test_reducer);

        assert_eq!(store.dispatch(TestAction::Increment).counter, 1);
        assert_eq!(store.dispatch(TestAction::Increment).counter, 2);
        assert_eq!(store.dispatch(TestAction::Decrement).counter, 1);
        assert_eq!(store.state().history, vec![1, 2, 1]);
    }

    #[test]
    fn test_store_noop() {
        let store = Store::<TestState, TestAction>::with_default(test_reducer);

        store.dispatch(TestAction::NoOp);
        assert_eq!(*store.state(), TestState::default());
    }

    #[test]
    fn test_held_snapshot_is_not_mutated() {
        let store = Store::new(TestState::default(), test_reducer);
        store.dispatch(TestAction::Increment);

        let before = store.state();
        store.dispatch(TestAction::Increment);

        assert_eq!(before.counter, 1);
        assert_eq!(before.history, vec![1]);
        assert_eq!(store.state().counter, 2);
    }

    #[test]
    fn test_unshared_state_keeps_allocation() {
        let store = Store::new(TestState::default(), test_reducer);
        store.dispatch(TestAction::Increment);

        let ptr = store.state().history.as_ptr();
        // No snapshot held here, so the reducer receives the stored value itself.
        store.dispatch(TestAction::NoOp);
        assert_eq!(store.state().history.as_ptr(), ptr);
    }

    #[test]
    fn test_listener_sees_new_state() {
        let store = Rc::new(Store::new(TestState::default(), test_reducer));
        let seen = Rc::new(Cell::new(0));

        let handle = Rc::downgrade(&store);
        let seen_in_listener = Rc::clone(&seen);
        store.subscribe(move || {
            if let Some(store) = handle.upgrade() {
                seen_in_listener.set(store.state().counter);
            }
        });

        store.dispatch(TestAction::Increment);
        assert_eq!(seen.get(), 1);
        store.dispatch(TestAction::Increment);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_listeners_notified_in_order() {
        let store = Store::new(TestState::default(), test_reducer);
        let calls = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            store.subscribe(move || calls.borrow_mut().push(label));
        }

        store.dispatch(TestAction::NoOp);
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = Store::new(TestState::default(), test_reducer);
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        let first = store.subscribe(move || counter.set(counter.get() + 1));
        let counter = Rc::clone(&count);
        let _second = store.subscribe(move || counter.set(counter.get() + 10));

        first.unsubscribe();
        first.unsubscribe();
        assert!(!first.is_active());
        assert_eq!(store.listener_count(), 1);

        store.dispatch(TestAction::Increment);
        assert_eq!(count.get(), 10);
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn test_unsubscribe_during_notification_keeps_current_pass() {
        let store = Rc::new(Store::new(TestState::default(), test_reducer));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&later);
        let log = Rc::clone(&calls);
        store.subscribe(move || {
            log.borrow_mut().push("remover");
            if let Some(subscription) = slot.borrow().as_ref() {
                subscription.unsubscribe();
            }
        });

        let log = Rc::clone(&calls);
        *later.borrow_mut() = Some(store.subscribe(move || log.borrow_mut().push("removed")));

        store.dispatch(TestAction::NoOp);
        assert_eq!(*calls.borrow(), vec!["remover", "removed"]);

        store.dispatch(TestAction::NoOp);
        assert_eq!(*calls.borrow(), vec!["remover", "removed", "remover"]);
    }

    #[test]
    fn test_subscribe_during_notification_waits_for_next_pass() {
        let store = Rc::new(Store::new(TestState::default(), test_reducer));
        let late_calls = Rc::new(Cell::new(0));
        let added = Rc::new(Cell::new(false));

        let handle = Rc::downgrade(&store);
        let late = Rc::clone(&late_calls);
        let added_flag = Rc::clone(&added);
        store.subscribe(move || {
            if added_flag.replace(true) {
                return;
            }
            if let Some(store) = handle.upgrade() {
                let late = Rc::clone(&late);
                store.subscribe(move || late.set(late.get() + 1));
            }
        });

        store.dispatch(TestAction::NoOp);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(store.listener_count(), 2);

        store.dispatch(TestAction::NoOp);
        assert_eq!(late_calls.get(), 1);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_count: usize,
        last_notified: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, listeners_notified: usize) {
            self.after_count += 1;
            self.last_notified = listeners_notified;
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let store = StoreWithMiddleware::new(
            TestState::default(),
            test_reducer,
            CountingMiddleware::default(),
        );
        let _subscription = store.subscribe(|| {});

        store.dispatch(TestAction::Increment);
        store.dispatch(TestAction::Increment);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_count, 2);
        assert_eq!(store.middleware().last_notified, 1);
        assert_eq!(store.state().counter, 2);
    }

    #[test]
    fn test_composed_middleware_runs_all() {
        let mut composed = ComposedMiddleware::new();
        composed.add(LoggingMiddleware::verbose());
        composed.add(NoopMiddleware);

        let store = StoreWithMiddleware::new(TestState::default(), test_reducer, composed);
        store.dispatch(TestAction::Decrement);
        assert_eq!(store.state().counter, -1);
    }
}
