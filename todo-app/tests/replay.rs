//! The replay loop behind `todo-replay`

use serde_json::Value;
use todo_app::replay::{run, ReplayOptions};
use todo_app::script::parse_script;
use todo_app::{TodoAction, TodoIdAllocator, VisibilityFilter};

const SCRIPT: &str = "\
# two todos, finish the first, hide it
add Learn Redux
add Go shopping
toggle 0
filter SHOW_ACTIVE
";

fn actions() -> Vec<TodoAction> {
    parse_script(SCRIPT, &mut TodoIdAllocator::new()).unwrap()
}

fn replay(options: &ReplayOptions) -> (Vec<Value>, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut log: Vec<u8> = Vec::new();
    run(actions(), options, &mut out, &mut log).unwrap();

    let documents = serde_json::Deserializer::from_slice(&out)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    (documents, String::from_utf8(log).unwrap())
}

#[test]
fn test_prints_final_state_only_by_default() {
    let (documents, log) = replay(&ReplayOptions::default());

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["visibilityFilter"], "SHOW_ACTIVE");
    assert_eq!(documents[0]["todos"].as_array().unwrap().len(), 2);
    assert_eq!(documents[0]["todos"][0]["completed"], true);
    assert!(log.is_empty());
}

#[test]
fn test_visible_prints_filtered_todos() {
    let (documents, _) = replay(&ReplayOptions {
        visible: true,
        ..Default::default()
    });

    let visible = documents[0].as_array().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0]["text"], "Go shopping");
}

#[test]
fn test_trace_prints_state_per_dispatch() {
    let (documents, _) = replay(&ReplayOptions {
        trace: true,
        ..Default::default()
    });

    assert_eq!(documents.len(), actions().len() + 1);
    assert_eq!(documents[0]["todos"].as_array().unwrap().len(), 1);
    assert_eq!(documents[2]["todos"][0]["completed"], true);
    assert_eq!(documents[3], documents[4]);
}

#[test]
fn test_log_actions_writes_matching_entries_without_verbose() {
    let (documents, log) = replay(&ReplayOptions {
        log_actions: Some("*Todo".to_string()),
        ..Default::default()
    });

    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3, "{log}");
    assert!(lines[0].contains("AddTodo #0 \"Learn Redux\""));
    assert!(lines[1].contains("AddTodo #1 \"Go shopping\""));
    assert!(lines[2].contains("ToggleTodo #0"));
    assert!(!log.contains("SetVisibilityFilter"));
    assert_eq!(documents.len(), 1);
}

#[test]
fn test_returns_final_state() {
    let mut out: Vec<u8> = Vec::new();
    let mut log: Vec<u8> = Vec::new();
    let state = run(actions(), &ReplayOptions::default(), &mut out, &mut log).unwrap();
    assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
    assert_eq!(state.todos.len(), 2);
}
