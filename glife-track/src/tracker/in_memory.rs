// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::sync::{Mutex, MutexGuard};

use crate::Id;
use crate::tracker::{EntityManager, Track};

/// A tracker that keeps every event as a line of text in memory.
///
/// Used by tests to check what was emitted, see
/// [`check_and_clear`](crate::test_helpers::check_and_clear).
pub struct InMemoryTracker {
    entity_manager: EntityManager,
    lines: Mutex<Vec<String>>,
}

impl InMemoryTracker {
    /// Create a new [`InMemoryTracker`] with an [`EntityManager`].
    #[must_use]
    pub fn new(entity_manager: EntityManager) -> Self {
        Self {
            entity_manager,
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Access the lines recorded so far.
    pub fn lines(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn add_line(&self, line: String) {
        self.lines().push(line);
    }
}

impl Track for InMemoryTracker {
    fn unique_id(&self) -> Id {
        self.entity_manager.unique_id()
    }

    fn is_entity_enabled(&self, id: Id, level: log::Level) -> bool {
        self.entity_manager.is_log_enabled_at_level(id, level)
    }

    fn add_entity(&self, id: Id, entity_name: &str) {
        self.entity_manager.add_entity(id, entity_name);
    }

    fn create(&self, created_by: Id, id: Id, name: &str) {
        self.add_line(format!("{created_by}: created {id}, {name}"));
    }

    fn destroy(&self, destroyed_by: Id, id: Id) {
        self.add_line(format!("{destroyed_by}: destroyed {id}"));
    }

    fn value(&self, id: Id, value: f64) {
        self.add_line(format!("{id}: value {value}"));
    }

    fn log(&self, id: Id, level: log::Level, msg: std::fmt::Arguments) {
        self.add_line(format!("{id}:{level}: {msg}"));
    }

    fn shutdown(&self) {}
}
