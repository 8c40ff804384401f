//! TaskFlow CLI
//!
//! Add, list, toggle, edit, and delete tasks with priorities and categories,
//! persisted locally between runs.

use anyhow::Result;
use clap::Parser;
use taskflow::cli::{Cli, Command};
use taskflow::config::Config;
use taskflow::format::{self, OutputFormat, short_id};
use taskflow::logging;
use taskflow::query::{self, Query};
use taskflow::storage::Storage;
use taskflow::store::TaskStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    logging::init(&cli.log, cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref())?;

    // Override paths from CLI arguments
    if let Some(db_path) = &cli.database {
        config.db_path = db_path.clone();
    }

    let storage = Storage::open(&config.db_path)?;
    let mut store = TaskStore::open(storage);

    match cli.command {
        Command::Add {
            text,
            priority,
            category,
        } => {
            let priority = priority.unwrap_or(config.default_priority);
            let category = category.unwrap_or(config.default_category);
            match store.add(&text, priority, category) {
                Some(task) => println!("Added `{}`: {}", short_id(&task.id), task.text),
                None => println!("Nothing to add: task text is empty."),
            }
        }

        Command::List {
            filter,
            search,
            sort,
            format: output,
        } => {
            let query = Query {
                filter,
                search,
                sort,
            };
            let tasks = query::run(store.all(), &query);
            match output {
                OutputFormat::Table => print!("{}", format::format_tasks_text(&tasks)),
                OutputFormat::Json => println!("{}", format::format_tasks_json(&tasks)?),
            }
        }

        Command::Toggle { id } => match resolve_id(&store, &id) {
            Some(full) if store.toggle_completed(&full) => {
                println!("Toggled `{}`.", short_id(&full));
            }
            _ => println!("No task found for id `{id}`."),
        },

        Command::Edit { id, text } => match resolve_id(&store, &id) {
            Some(full) if store.edit(&full, &text) => {
                println!("Updated `{}`.", short_id(&full));
            }
            _ => println!("No change: unknown id or empty text."),
        },

        Command::Remove { id } => match resolve_id(&store, &id) {
            Some(full) if store.remove(&full) => {
                println!("Removed `{}`.", short_id(&full));
            }
            _ => println!("No task found for id `{id}`."),
        },

        Command::Stats { format: output } => {
            let stats = store.stats();
            match output {
                OutputFormat::Table => print!("{}", format::format_stats_text(&stats)),
                OutputFormat::Json => println!("{}", format::format_stats_json(&stats)?),
            }
        }
    }

    Ok(())
}

/// Expand a unique id prefix (as shown in listings) to the full task id.
///
/// Returns `None` when no task matches or the prefix is ambiguous; the
/// caller reports that as a no-op, matching the store's unknown-id behavior.
fn resolve_id(store: &TaskStore, id: &str) -> Option<String> {
    let mut matches = store.all().iter().filter(|t| t.id.starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Some(task.id.clone()),
        (Some(_), Some(_)) => {
            tracing::debug!(id, "id prefix is ambiguous");
            None
        }
        _ => None,
    }
}
