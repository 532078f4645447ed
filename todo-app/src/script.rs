//! Line-oriented action scripts
//!
//! Each non-blank line is one action:
//!
//! ```text
//! # comments and blank lines are skipped
//! add Learn Redux
//! toggle 0
//! filter SHOW_COMPLETED
//! {"type":"ADD_TODO","id":7,"text":"From JSON"}
//! ```
//!
//! `add` takes its id from the allocator. JSON lines carry their own id;
//! the allocator is moved past it so later `add` lines stay unique.

use std::path::Path;

use crate::action::{TodoAction, TodoIdAllocator};
use crate::error::{Result, TodoError};
use crate::state::VisibilityFilter;

/// Parse every line of a script, numbering lines from 1
pub fn parse_script(source: &str, ids: &mut TodoIdAllocator) -> Result<Vec<TodoAction>> {
    let mut actions = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(action) = parse_line(index + 1, text, ids)? {
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Read and parse a script file
pub fn load_script(path: &Path, ids: &mut TodoIdAllocator) -> Result<Vec<TodoAction>> {
    let source = std::fs::read_to_string(path)?;
    parse_script(&source, ids)
}

/// Parse one script line; `Ok(None)` for blank and comment lines
pub fn parse_line(
    line: usize,
    text: &str,
    ids: &mut TodoIdAllocator,
) -> Result<Option<TodoAction>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let fail = |message: String| TodoError::ParseCommand { line, message };

    if text.starts_with('{') {
        let action: TodoAction = serde_json::from_str(text)
            .map_err(|e| fail(format!("invalid action JSON: {e}")))?;
        if let TodoAction::AddTodo { id, .. } = &action {
            ids.observe(*id);
        }
        return Ok(Some(action));
    }

    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };

    let action = match command {
        "add" => {
            if rest.is_empty() {
                return Err(fail("`add` needs the todo text".to_string()));
            }
            ids.add_todo(rest).map_err(|e| fail(e.to_string()))?
        }
        "toggle" => {
            let id = rest
                .parse()
                .map_err(|_| fail(format!("`toggle` needs a numeric id, got {rest:?}")))?;
            TodoAction::toggle_todo(id)
        }
        "filter" => {
            let filter: VisibilityFilter = rest.parse().map_err(|e| fail(format!("{e}")))?;
            TodoAction::set_visibility_filter(filter)
        }
        other => return Err(fail(format!("unknown command `{other}`"))),
    };

    Ok(Some(action))
}
