//! Action logging with pattern-based filtering and in-memory storage
//!
//! Actions passing through a [`StoreWithMiddleware`](crate::StoreWithMiddleware)
//! can be written to `tracing` and, optionally, kept in a bounded ring
//! buffer for later inspection.
//!
//! # Example
//!
//! ```
//! use todo_dispatch_core::action_logger::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};
//!
//! // Only log toggles, tracing output only
//! let middleware = ActionLoggerMiddleware::new(ActionLoggerConfig::new(Some("Toggle*"), None));
//! assert!(middleware.log().is_none());
//!
//! // Keep the last 20 actions in memory as well
//! let middleware = ActionLoggerMiddleware::with_log(ActionLogConfig::with_capacity(20));
//! assert!(middleware.log().is_some_and(|log| log.is_empty()));
//! ```

use crate::action::ActionSummary;
use crate::store::Middleware;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Include/exclude filter over action names.
///
/// Patterns support:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Literal text matches exactly
///
/// # Examples
///
/// - `Add*` matches AddTodo
/// - `*Todo` matches AddTodo and ToggleTodo
/// - `Set?isibility*` matches SetVisibilityFilter
#[derive(Debug, Clone, Default)]
pub struct ActionLoggerConfig {
    /// If non-empty, only log actions matching these patterns
    pub include_patterns: Vec<String>,
    /// Exclude actions matching these patterns (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl ActionLoggerConfig {
    /// Create a config from comma-separated pattern strings
    ///
    /// `None` means no patterns for that side, so `new(None, None)` logs everything.
    ///
    /// ```
    /// use todo_dispatch_core::action_logger::ActionLoggerConfig;
    ///
    /// let config = ActionLoggerConfig::new(Some("*Todo"), Some("Toggle*"));
    /// assert!(config.should_log("AddTodo"));
    /// assert!(!config.should_log("ToggleTodo"));
    /// assert!(!config.should_log("SetVisibilityFilter"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include_patterns: include.map(split_patterns).unwrap_or_default(),
            exclude_patterns: exclude.map(split_patterns).unwrap_or_default(),
        }
    }

    /// Create a config with specific pattern vectors
    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// Check if an action name should be logged based on include/exclude patterns
    pub fn should_log(&self, action_name: &str) -> bool {
        if !self.include_patterns.is_empty()
            && !self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, action_name))
        {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| glob_match(p, action_name))
    }
}

fn split_patterns(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// In-Memory Action Log
// ============================================================================

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct ActionLogEntry {
    /// Action name (from Action::name())
    pub name: &'static str,
    /// Summary representation (from ActionSummary::summary())
    pub summary: String,
    /// When the action was logged
    pub timestamp: Instant,
    /// Sequence number for ordering
    pub sequence: u64,
    /// Listeners notified by the dispatch (set after it completes)
    pub listeners_notified: Option<usize>,
}

impl ActionLogEntry {
    pub fn new(name: &'static str, summary: String, sequence: u64) -> Self {
        Self {
            name,
            summary,
            timestamp: Instant::now(),
            sequence,
            listeners_notified: None,
        }
    }

    /// Time since this action was logged
    pub fn elapsed(&self) -> Duration {
        self.timestamp.elapsed()
    }

    /// Format the elapsed time for display (e.g., "2.3s", "150ms")
    pub fn elapsed_display(&self) -> String {
        let elapsed = self.elapsed();
        if elapsed.as_secs() >= 1 {
            format!("{:.1}s", elapsed.as_secs_f64())
        } else {
            format!("{}ms", elapsed.as_millis())
        }
    }
}

/// Configuration for the action log ring buffer
#[derive(Debug, Clone)]
pub struct ActionLogConfig {
    /// Maximum number of entries to keep
    pub capacity: usize,
    pub filter: ActionLoggerConfig,
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            filter: ActionLoggerConfig::default(),
        }
    }
}

impl ActionLogConfig {
    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Create with custom capacity and filter
    pub fn new(capacity: usize, filter: ActionLoggerConfig) -> Self {
        Self { capacity, filter }
    }
}

/// Bounded buffer of recent actions
///
/// Oldest entries are discarded once capacity is reached.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    config: ActionLogConfig,
    next_sequence: u64,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(ActionLogConfig::default())
    }
}

impl ActionLog {
    pub fn new(config: ActionLogConfig) -> Self {
        Self {
            entries: VecDeque::with_capacity(config.capacity),
            config,
            next_sequence: 0,
        }
    }

    /// Log an action (if it passes the filter)
    ///
    /// Returns the entry if it was logged, None if filtered out.
    pub fn log<A: ActionSummary>(&mut self, action: &A) -> Option<&ActionLogEntry> {
        let name = action.name();
        if self.config.capacity == 0 || !self.config.filter.should_log(name) {
            return None;
        }

        let entry = ActionLogEntry::new(name, action.summary(), self.next_sequence);
        self.next_sequence += 1;

        if self.entries.len() >= self.config.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(entry);
        self.entries.back()
    }

    /// Record the notification count on the newest entry
    pub fn update_last_notified(&mut self, listeners_notified: usize) {
        if let Some(entry) = self.entries.back_mut() {
            entry.listeners_notified = Some(listeners_notified);
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// The most recent N entries, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn config(&self) -> &ActionLogConfig {
        &self.config
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Middleware that logs actions with configurable pattern filtering.
///
/// Supports two modes:
/// - **Tracing only** (default): logs via `tracing::debug!()`
/// - **With storage**: also keeps an [`ActionLog`] of recent actions
#[derive(Debug, Clone)]
pub struct ActionLoggerMiddleware {
    config: ActionLoggerConfig,
    log: Option<ActionLog>,
    /// Whether the last action made it into the log
    last_action_logged: bool,
    active: bool,
}

impl ActionLoggerMiddleware {
    /// Tracing only, no in-memory storage
    pub fn new(config: ActionLoggerConfig) -> Self {
        Self {
            config,
            log: None,
            last_action_logged: false,
            active: true,
        }
    }

    /// Tracing plus in-memory storage
    pub fn with_log(config: ActionLogConfig) -> Self {
        Self {
            config: config.filter.clone(),
            log: Some(ActionLog::new(config)),
            last_action_logged: false,
            active: true,
        }
    }

    /// No filtering, tracing only
    pub fn log_all() -> Self {
        Self::new(ActionLoggerConfig::default())
    }

    /// Set whether the middleware processes actions at all.
    ///
    /// ```
    /// use todo_dispatch_core::action_logger::ActionLoggerMiddleware;
    ///
    /// let verbose = false;
    /// let middleware = ActionLoggerMiddleware::log_all().active(verbose);
    /// assert!(!middleware.is_active());
    /// ```
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the action log (if storage is enabled)
    pub fn log(&self) -> Option<&ActionLog> {
        self.log.as_ref()
    }

    pub fn log_mut(&mut self) -> Option<&mut ActionLog> {
        self.log.as_mut()
    }

    pub fn config(&self) -> &ActionLoggerConfig {
        &self.config
    }
}

impl<A: ActionSummary> Middleware<A> for ActionLoggerMiddleware {
    fn before(&mut self, action: &A) {
        if !self.active {
            return;
        }

        let name = action.name();
        if self.config.should_log(name) {
            tracing::debug!(action = %name, summary = %action.summary(), "action");
        }

        self.last_action_logged = self
            .log
            .as_mut()
            .is_some_and(|log| log.log(action).is_some());
    }

    fn after(&mut self, _action: &A, listeners_notified: usize) {
        if !self.active || !self.last_action_logged {
            return;
        }
        if let Some(log) = self.log.as_mut() {
            log.update_last_notified(listeners_notified);
        }
    }
}

/// Simple glob pattern matching supporting `*` and `?`.
///
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut pi = 0;
    let mut ti = 0;
    let mut star: Option<(usize, usize)> = None;

    while ti < text.len() {
        match pattern.get(pi) {
            Some('?') => {
                pi += 1;
                ti += 1;
            }
            Some('*') => {
                star = Some((pi, ti));
                pi += 1;
            }
            Some(c) if *c == text[ti] => {
                pi += 1;
                ti += 1;
            }
            _ => match star {
                // Let the last star swallow one more character and retry.
                Some((star_pi, star_ti)) => {
                    pi = star_pi + 1;
                    ti = star_ti + 1;
                    star = Some((star_pi, star_ti + 1));
                }
                None => return false,
            },
        }
    }

    pattern[pi..].iter().all(|c| *c == '*')
}
