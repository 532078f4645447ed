//! Replaying a parsed script through a logged store
//!
//! State JSON goes to one writer, the action log to another, so the
//! binary can keep stdout machine-readable.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use todo_dispatch::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};

use crate::action::TodoAction;
use crate::error::Result;
use crate::state::AppState;
use crate::{create_logged_store, selectors, to_json};

/// What a replay prints besides the final state
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Print the state after every dispatch
    pub trace: bool,
    /// Print only the visible todos instead of the whole final state
    pub visible: bool,
    /// Include globs for the action log; `None` turns the logger off
    pub log_actions: Option<String>,
}

/// Dispatch `actions` in order and return the final state
///
/// `out` receives one JSON document per dispatch when tracing, then the
/// final one. `log_out` receives one line per logged action.
pub fn run<W: Write, L: Write>(
    actions: Vec<TodoAction>,
    options: &ReplayOptions,
    out: &mut W,
    log_out: &mut L,
) -> Result<Rc<AppState>> {
    let filter = ActionLoggerConfig::new(options.log_actions.as_deref(), None);
    let logger = ActionLoggerMiddleware::with_log(ActionLogConfig::new(actions.len(), filter))
        .active(options.log_actions.is_some());
    let store = Rc::new(create_logged_store(logger));

    let traced: Rc<RefCell<Vec<String>>> = Rc::default();
    let _trace = options.trace.then(|| {
        let handle = Rc::downgrade(&store);
        let traced = Rc::clone(&traced);
        store.subscribe(move || {
            let Some(store) = handle.upgrade() else {
                return;
            };
            match to_json(&*store.state()) {
                Ok(json) => traced.borrow_mut().push(json),
                Err(e) => tracing::error!(error = %e, "failed to render state"),
            }
        })
    });

    for action in actions {
        store.dispatch(action);
    }

    for json in traced.borrow().iter() {
        writeln!(out, "{json}")?;
    }

    if options.log_actions.is_some() {
        let middleware = store.middleware();
        for entry in middleware.log().into_iter().flat_map(|log| log.entries()) {
            writeln!(
                log_out,
                "#{} {} (notified {})",
                entry.sequence,
                entry.summary,
                entry.listeners_notified.unwrap_or_default()
            )?;
        }
    }

    let state = store.state();
    let output = if options.visible {
        to_json(&selectors::visible_in(&state))?
    } else {
        to_json(&*state)?
    };
    writeln!(out, "{output}")?;

    tracing::info!(
        todos = state.todos.len(),
        active = selectors::active_count(&state.todos),
        "replay finished"
    );
    Ok(state)
}
