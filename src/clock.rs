//! Injectable time and id sources.
//!
//! The store never reads the wall clock or generates ids directly; it goes
//! through these traits so tests can supply deterministic values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh task ids. Ids must be unique and are never reused.
pub trait IdSource {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
