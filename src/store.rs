//! The task store: in-memory collection with write-through persistence.
//!
//! All mutation funnels through [`TaskStore`]; nothing else touches the
//! collection. Every successful mutation is written back to durable storage
//! immediately. A failed write is reported as a warning and the in-memory
//! collection stays authoritative for the rest of the session.

use crate::clock::{Clock, IdSource, SystemClock, UuidSource};
use crate::storage::Storage;
use crate::types::{Category, CategoryStats, Priority, Stats, Task};
use tracing::{debug, warn};

/// Owner of the task collection. Newest tasks sit at the front.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl TaskStore {
    /// Open a store on the given storage, loading any previously saved tasks.
    pub fn open(storage: Storage) -> Self {
        Self::with_sources(storage, Box::new(SystemClock), Box::new(UuidSource))
    }

    /// Open a store with explicit time and id sources.
    ///
    /// Unreadable saved data falls back to an empty collection with a
    /// warning (malformed data is already tolerated one layer down, in
    /// [`Storage::load_tasks`]); startup never fails on bad data.
    pub fn with_sources(storage: Storage, clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        let tasks = match storage.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "failed to load saved tasks, starting with an empty list");
                Vec::new()
            }
        };

        Self {
            tasks,
            storage,
            clock,
            ids,
        }
    }

    /// Add a task at the front of the collection and return it.
    ///
    /// Text that is empty after trimming is rejected as a no-op; the stored
    /// text is the trimmed value.
    pub fn add(&mut self, text: &str, priority: Priority, category: Category) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring add with empty text");
            return None;
        }

        let task = Task {
            id: self.ids.next_id(),
            text: text.to_string(),
            completed: false,
            priority,
            category,
            created_at: self.clock.now(),
            notes: String::new(),
        };
        self.tasks.insert(0, task);
        self.persist();
        self.tasks.first()
    }

    /// Flip the completion state of a task. Unknown ids are a no-op.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
                true
            }
            None => {
                debug!(id, "toggle on unknown task id ignored");
                false
            }
        }
    }

    /// Replace the text of a task with the trimmed new value.
    ///
    /// Unknown ids are a no-op. So is replacement text that is empty after
    /// trimming: the edit is rejected and the prior text kept.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            debug!(id, "ignoring edit with empty text");
            return false;
        }

        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = new_text.to_string();
                self.persist();
                true
            }
            None => {
                debug!(id, "edit on unknown task id ignored");
                false
            }
        }
    }

    /// Delete a task permanently. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(id, "remove on unknown task id ignored");
            return false;
        }
        self.persist();
        true
    }

    /// The current collection, newest first.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Aggregate completion statistics over the full collection.
    ///
    /// Every category gets an entry, including ones with no tasks.
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let progress_percent = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let by_category = Category::ALL
            .iter()
            .map(|&category| {
                let mut cat_total = 0;
                let mut cat_completed = 0;
                for task in self.tasks.iter().filter(|t| t.category == category) {
                    cat_total += 1;
                    if task.completed {
                        cat_completed += 1;
                    }
                }
                CategoryStats {
                    category,
                    total: cat_total,
                    completed: cat_completed,
                }
            })
            .collect();

        Stats {
            total,
            completed,
            remaining: total - completed,
            progress_percent,
            by_category,
        }
    }

    /// Write the full collection to durable storage.
    fn persist(&self) {
        if let Err(err) = self.storage.save_tasks(&self.tasks) {
            warn!(error = %err, "failed to save tasks; changes are kept in memory only");
        }
    }
}
