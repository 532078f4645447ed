//! todo-replay - run a script of todo actions through the store
//!
//! Prints the final state as JSON. See `todo_app::script` for the script format.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use todo_app::replay::{self, ReplayOptions};
use todo_app::script::{load_script, parse_script};
use todo_app::{TodoAction, TodoIdAllocator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todo-replay")]
#[command(version)]
#[command(about = "Replay a todo action script and print the resulting state")]
struct Cli {
    /// Script file (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Print the state after every dispatch
    #[arg(long)]
    trace: bool,

    /// Print only the todos selected by the visibility filter
    #[arg(long)]
    visible: bool,

    /// Log dispatched actions whose names match these comma-separated globs (e.g. "*Todo")
    #[arg(long, value_name = "PATTERNS")]
    log_actions: Option<String>,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool, log_actions: bool) {
    let default_level = match (verbose, log_actions) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_actions(
    path: Option<&PathBuf>,
    ids: &mut TodoIdAllocator,
) -> anyhow::Result<Vec<TodoAction>> {
    match path {
        Some(path) => load_script(path, ids)
            .with_context(|| format!("failed to load script {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read script from stdin")?;
            Ok(parse_script(&source, ids)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_actions.is_some());

    let mut ids = TodoIdAllocator::new();
    let actions = read_actions(cli.script.as_ref(), &mut ids)?;
    tracing::info!(actions = actions.len(), next_id = ids.peek(), "script parsed");

    let options = ReplayOptions {
        trace: cli.trace,
        visible: cli.visible,
        log_actions: cli.log_actions,
    };
    replay::run(actions, &options, &mut io::stdout().lock(), &mut io::stderr())?;

    Ok(())
}
