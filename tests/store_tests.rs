//! Integration tests for the task store.
//!
//! These tests drive the store against an in-memory database, with the
//! persistence round-trip cases using a real file via tempfile. Time and id
//! sources are deterministic so assertions never depend on wall time.

use chrono::{DateTime, TimeZone, Utc};
use std::cell::Cell;
use taskflow::clock::{Clock, IdSource};
use taskflow::storage::{Storage, TASKS_KEY};
use taskflow::store::TaskStore;
use taskflow::types::{Category, Priority};

/// Clock that advances one minute per reading.
struct StepClock {
    next: Cell<i64>,
}

impl StepClock {
    fn starting_at(epoch_secs: i64) -> Self {
        Self {
            next: Cell::new(epoch_secs),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.next.get();
        self.next.set(secs + 60);
        Utc.timestamp_opt(secs, 0).unwrap()
    }
}

/// Sequential ids: task-001, task-002, ...
struct SeqIds(Cell<u32>);

impl SeqIds {
    fn new() -> Self {
        Self(Cell::new(0))
    }
}

impl IdSource for SeqIds {
    fn next_id(&self) -> String {
        let n = self.0.get() + 1;
        self.0.set(n);
        format!("task-{n:03}")
    }
}

/// Helper to create a store over a fresh in-memory database.
fn setup_store() -> TaskStore {
    let storage = Storage::open_in_memory().expect("Failed to create in-memory database");
    store_on(storage)
}

/// Helper to attach a deterministic store to existing storage.
fn store_on(storage: Storage) -> TaskStore {
    TaskStore::with_sources(
        storage,
        Box::new(StepClock::starting_at(1_770_000_000)),
        Box::new(SeqIds::new()),
    )
}

mod add_tests {
    use super::*;

    #[test]
    fn add_creates_an_incomplete_task_at_the_front() {
        let mut store = setup_store();

        store.add("first", Priority::Low, Category::Work);
        let added = store
            .add("second", Priority::High, Category::Shopping)
            .expect("add should succeed")
            .clone();

        assert_eq!(store.all().len(), 2);
        assert_eq!(store.all()[0], added);
        assert_eq!(added.text, "second");
        assert_eq!(added.priority, Priority::High);
        assert_eq!(added.category, Category::Shopping);
        assert!(!added.completed);
        assert!(added.notes.is_empty());
    }

    #[test]
    fn add_with_blank_text_leaves_the_collection_unchanged() {
        let mut store = setup_store();

        for text in ["", "   ", "\t\n  "] {
            assert!(store.add(text, Priority::Medium, Category::Personal).is_none());
        }
        assert!(store.all().is_empty());
    }

    #[test]
    fn add_stores_trimmed_text() {
        let mut store = setup_store();
        let task = store
            .add("  water the plants  ", Priority::Medium, Category::Personal)
            .unwrap();
        assert_eq!(task.text, "water the plants");
    }

    #[test]
    fn add_assigns_unique_ids_and_non_decreasing_timestamps() {
        let mut store = setup_store();
        for i in 0..5 {
            store.add(&format!("task {i}"), Priority::Medium, Category::Work);
        }

        let tasks = store.all();
        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        // newest-first order means created_at decreases front to back
        for pair in tasks.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

mod toggle_tests {
    use super::*;

    #[test]
    fn toggle_flips_completion() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        assert!(store.toggle_completed(&id));
        assert!(store.all()[0].completed);
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        store.toggle_completed(&id);
        store.toggle_completed(&id);
        assert!(!store.all()[0].completed);
    }

    #[test]
    fn toggle_with_unknown_id_is_a_noop() {
        let mut store = setup_store();
        store.add("buy milk", Priority::Medium, Category::Shopping);

        assert!(!store.toggle_completed("task-999"));
        assert!(!store.all()[0].completed);
        assert_eq!(store.all().len(), 1);
    }
}

mod edit_tests {
    use super::*;

    #[test]
    fn edit_replaces_the_text() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        assert!(store.edit(&id, "buy oat milk"));
        assert_eq!(store.all()[0].text, "buy oat milk");
    }

    #[test]
    fn edit_with_blank_text_keeps_the_prior_text() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        assert!(!store.edit(&id, "   "));
        assert_eq!(store.all()[0].text, "buy milk");
    }

    #[test]
    fn edit_trims_the_replacement_text() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        assert!(store.edit(&id, "  buy bread  "));
        assert_eq!(store.all()[0].text, "buy bread");
    }

    #[test]
    fn edit_with_unknown_id_is_a_noop() {
        let mut store = setup_store();
        store.add("buy milk", Priority::Medium, Category::Shopping);

        assert!(!store.edit("task-999", "something else"));
        assert_eq!(store.all()[0].text, "buy milk");
    }

    #[test]
    fn edit_does_not_change_other_fields() {
        let mut store = setup_store();
        let before = store
            .add("buy milk", Priority::High, Category::Shopping)
            .unwrap()
            .clone();

        store.edit(&before.id, "buy bread");
        let after = &store.all()[0];
        assert_eq!(after.id, before.id);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.category, before.category);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.completed, before.completed);
    }
}

mod remove_tests {
    use super::*;

    #[test]
    fn remove_deletes_the_task() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();
        store.add("call dentist", Priority::Medium, Category::Health);

        assert!(store.remove(&id));
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].text, "call dentist");
    }

    #[test]
    fn remove_with_unknown_id_is_a_noop() {
        let mut store = setup_store();
        store.add("buy milk", Priority::Medium, Category::Shopping);

        assert!(!store.remove("task-999"));
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn removed_ids_stay_gone() {
        let mut store = setup_store();
        let id = store
            .add("buy milk", Priority::Medium, Category::Shopping)
            .unwrap()
            .id
            .clone();

        assert!(store.remove(&id));

        // later operations on the dead id are no-ops and nothing reappears
        assert!(!store.toggle_completed(&id));
        assert!(!store.edit(&id, "resurrected?"));
        assert!(!store.remove(&id));
        assert!(store.all().is_empty());
    }
}

mod persistence_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn mutations_survive_a_reopen() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("tasks.db");

        let saved = {
            let mut store = store_on(Storage::open(&db_path).unwrap());
            store.add("oldest", Priority::Low, Category::Personal);
            store.add("middle", Priority::Medium, Category::Work);
            let id = store
                .add("newest", Priority::High, Category::Learning)
                .unwrap()
                .id
                .clone();
            store.toggle_completed(&id);
            store.all().to_vec()
        };

        let reopened = TaskStore::open(Storage::open(&db_path).unwrap());
        assert_eq!(reopened.all(), saved.as_slice());
    }

    #[test]
    fn removals_survive_a_reopen() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("tasks.db");

        {
            let mut store = store_on(Storage::open(&db_path).unwrap());
            let id = store
                .add("short-lived", Priority::Medium, Category::Personal)
                .unwrap()
                .id
                .clone();
            store.add("survivor", Priority::Medium, Category::Personal);
            store.remove(&id);
        }

        let reopened = TaskStore::open(Storage::open(&db_path).unwrap());
        assert_eq!(reopened.all().len(), 1);
        assert_eq!(reopened.all()[0].text, "survivor");
    }

    #[test]
    fn missing_stored_data_opens_an_empty_store() {
        let store = setup_store();
        assert!(store.all().is_empty());
    }

    #[test]
    fn corrupt_stored_data_opens_an_empty_store() {
        let storage = Storage::open_in_memory().unwrap();
        storage.write(TASKS_KEY, "][ definitely not json").unwrap();

        let mut store = store_on(storage);
        assert!(store.all().is_empty());

        // the store is still usable, and the next save replaces the junk
        store.add("fresh start", Priority::Medium, Category::Personal);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn stored_payload_uses_the_documented_record_layout() {
        let storage = Storage::open_in_memory().unwrap();
        let mut store = store_on(storage.clone());
        store.add("buy milk", Priority::High, Category::Shopping);

        let raw = storage.read(TASKS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];

        assert_eq!(record["id"], "task-001");
        assert_eq!(record["text"], "buy milk");
        assert_eq!(record["completed"], false);
        assert_eq!(record["priority"], "high");
        assert_eq!(record["category"], "shopping");
        assert_eq!(record["notes"], "");
        assert!(record["createdAt"].is_string());
    }
}

mod stats_tests {
    use super::*;

    #[test]
    fn stats_count_totals_and_progress() {
        let mut store = setup_store();
        let done = store
            .add("done", Priority::Medium, Category::Work)
            .unwrap()
            .id
            .clone();
        store.add("open one", Priority::Medium, Category::Work);
        store.add("open two", Priority::Medium, Category::Personal);
        store.add("open three", Priority::Medium, Category::Health);
        store.toggle_completed(&done);

        let stats = store.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.remaining, 3);
        assert!((stats.progress_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn stats_include_every_category_even_when_empty() {
        let mut store = setup_store();
        store.add("only work", Priority::Medium, Category::Work);

        let stats = store.stats();
        assert_eq!(stats.by_category.len(), 5);

        let work = stats
            .by_category
            .iter()
            .find(|c| c.category == Category::Work)
            .unwrap();
        assert_eq!((work.total, work.completed), (1, 0));

        let learning = stats
            .by_category
            .iter()
            .find(|c| c.category == Category::Learning)
            .unwrap();
        assert_eq!((learning.total, learning.completed), (0, 0));
    }

    #[test]
    fn stats_on_an_empty_store_report_zero_progress() {
        let store = setup_store();
        let stats = store.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress_percent, 0.0);
    }
}
