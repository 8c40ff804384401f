//! The query pipeline: filter, search, and sort over the task collection.
//!
//! Pure derivation. The engine never mutates the collection, holds no state
//! of its own, and produces identical output for identical inputs. Stages
//! compose strictly in order: filter, then search, then sort.

use crate::types::{Priority, Task};
use clap::ValueEnum;

/// Which subset of tasks to show. Modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Completed,
    /// High-priority tasks, regardless of completion state.
    High,
    /// Tasks due on the current calendar day. Tasks carry no due date, so
    /// this never matches anything; the mode stays defined rather than
    /// being removed.
    Today,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
            FilterMode::High => "high",
            FilterMode::Today => "today",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering applied after filter and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// High priority first; ties keep their relative order.
    Priority,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Priority => "priority",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A full query: filter mode, search text, sort mode.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: FilterMode,
    pub search: String,
    pub sort: SortMode,
}

/// Derive the display sequence for a query.
pub fn run<'a>(tasks: &'a [Task], query: &Query) -> Vec<&'a Task> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<&Task> = tasks
        .iter()
        .filter(|task| matches_filter(task, query.filter))
        .filter(|task| matches_search(task, &needle))
        .collect();

    // sort_by is stable, which the priority mode relies on for ties
    match query.sort {
        SortMode::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Priority => matched.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }

    matched
}

fn matches_filter(task: &Task, filter: FilterMode) -> bool {
    match filter {
        FilterMode::All => true,
        FilterMode::Active => !task.completed,
        FilterMode::Completed => task.completed,
        FilterMode::High => task.priority == Priority::High,
        FilterMode::Today => false,
    }
}

/// Case-insensitive substring match against the task text and the category
/// display name. An empty search matches everything.
fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(needle)
        || task.category.display_name().to_lowercase().contains(needle)
}
