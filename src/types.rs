//! Core types for the TaskFlow task tracker.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task priority. Variant order is the priority rank, so `High > Medium > Low`
/// under the derived ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task category. Every task belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Learning,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Shopping,
        Category::Health,
        Category::Learning,
    ];

    /// Stable identifier used in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Learning => "learning",
        }
    }

    /// Human-readable name, also matched by search.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Learning => "Learning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "personal" => Some(Category::Personal),
            "work" => Some(Category::Work),
            "shopping" => Some(Category::Shopping),
            "health" => Some(Category::Health),
            "learning" => Some(Category::Learning),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single task.
///
/// Serialized as `{id, text, completed, priority, category, createdAt, notes}`
/// with `createdAt` as an ISO-8601 timestamp; this is the record layout the
/// storage layer persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, assigned at creation, never reused.
    pub id: String,
    /// Non-empty user-entered text.
    pub text: String,
    pub completed: bool,
    /// Set at creation, immutable afterwards.
    pub priority: Priority,
    /// Set at creation, immutable afterwards.
    pub category: Category,
    /// Creation time; used only for ordering.
    pub created_at: DateTime<Utc>,
    /// Free-text notes. No entry point populates these yet, so they are
    /// empty in practice; tolerated as absent in stored data.
    #[serde(default)]
    pub notes: String,
}

/// Aggregate completion statistics over the full collection.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// Share of completed tasks, 0.0 to 100.0. Zero when there are no tasks.
    pub progress_percent: f64,
    /// One entry per category, zero counts included.
    pub by_category: Vec<CategoryStats>,
}

/// Per-category task counts.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub total: usize,
    pub completed: usize,
}
