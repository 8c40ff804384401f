//! Output formatting utilities for text and JSON.

use crate::error::Result;
use crate::types::{Priority, Stats, Task};
use clap::ValueEnum;

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// The id prefix shown in listings.
pub fn short_id(id: &str) -> &str {
    &id[..8.min(id.len())]
}

/// Format a list of tasks in short text form, one line per task.
pub fn format_tasks_text(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks.\n".to_string();
    }

    let mut out = String::new();
    for task in tasks {
        out.push_str(&format_task_line(task));
    }
    out
}

/// Format a task in short form for lists.
fn format_task_line(task: &Task) -> String {
    let done = if task.completed { "x" } else { " " };
    let priority_marker = match task.priority {
        Priority::High => "!!! ",
        Priority::Medium | Priority::Low => "",
    };

    format!(
        "[{}] {}{} `{}` #{}\n",
        done,
        priority_marker,
        task.text,
        short_id(&task.id),
        task.category.as_str(),
    )
}

/// Format tasks as pretty-printed JSON, in the persisted record layout.
pub fn format_tasks_json(tasks: &[&Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Format statistics in text form.
pub fn format_stats_text(stats: &Stats) -> String {
    let mut out = format!(
        "Tasks: {} total, {} completed, {} remaining ({:.0}%)\n",
        stats.total, stats.completed, stats.remaining, stats.progress_percent
    );

    out.push_str("\nBy category:\n");
    for entry in &stats.by_category {
        out.push_str(&format!(
            "  {:<10} {}/{}\n",
            entry.category.display_name(),
            entry.completed,
            entry.total,
        ));
    }
    out
}

/// Format statistics as pretty-printed JSON.
pub fn format_stats_json(stats: &Stats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
