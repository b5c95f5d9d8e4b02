// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! This module provides helper functions for testing logging output
//!
//! *Note:* [`create_tracker`] writes to a file named after the test source
//! file, so all tests in one file share the same log.

use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use crate::tracker::{EntityManager, InMemoryTracker, TextTracker};
use crate::{Tracker, Writer};

/// Create a [`Tracker`] for a test that logs everything to
/// `logs/<test file stem>.log`.
///
/// Falls back to a tracker that discards output if the file cannot be
/// created.
#[must_use]
pub fn create_tracker(full_filepath: &str) -> Tracker {
    // Place all log files in one folder
    const FOLDER: &str = "logs";

    let filename_only = Path::new(full_filepath)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("test");

    let writer: Writer = match fs::create_dir_all(FOLDER)
        .and_then(|()| fs::File::create(format!("{FOLDER}/{filename_only}.log")))
    {
        Ok(file) => Box::new(BufWriter::new(file)),
        Err(_) => Box::new(std::io::sink()),
    };

    let entity_manager = EntityManager::new(log::Level::Trace);
    let tracker: Tracker = Arc::new(TextTracker::new(entity_manager, writer));
    tracker
}

/// Initialise an in-memory tracker for tests
///
/// Returns both the concrete [`InMemoryTracker`] (for checking) and the same
/// object as a [`Tracker`] (for passing to the code under test).
///
/// # Examples
///
/// ```
/// use glife_track::entity::toplevel;
/// use glife_track::{info, test_helpers};
///
/// let (test_tracker, tracker) = glife_track::test_init!(glife_track::log::Level::Info);
/// let top = toplevel(&tracker, "top");
/// info!(top ; "hello");
/// test_helpers::check_and_clear(&test_tracker, &["2:INFO: hello"]);
/// ```
#[macro_export]
macro_rules! test_init {
    ($level:expr) => {{
        let test_tracker = std::sync::Arc::new($crate::tracker::InMemoryTracker::new(
            $crate::tracker::EntityManager::new($level),
        ));
        let tracker: $crate::Tracker = test_tracker.clone();
        (test_tracker, tracker)
    }};
}

/// Check and clear the _log_ output
///
/// This function asserts that the lines seen since the start or the last time
/// this function was called match the `expected` regular expressions, in
/// order. It then clears the lines recorded so far.
pub fn check_and_clear(tracker: &InMemoryTracker, expected: &[&str]) {
    let mut lines = tracker.lines();

    println!("Checking {:?} matches {:?}", expected, *lines);

    assert_eq!(expected.len(), lines.len());
    for (i, (log_expect, actual)) in expected.iter().zip(lines.iter()).enumerate() {
        let re = Regex::new(log_expect).unwrap();
        println!("Checking {i}: {log_expect:?} matches {actual:?}");
        assert!(re.is_match(actual));
    }

    lines.clear();
}

/// Return true if any recorded line matches the regular expression.
pub fn contains_match(tracker: &InMemoryTracker, expected: &str) -> bool {
    let re = Regex::new(expected).unwrap();
    tracker.lines().iter().any(|line| re.is_match(line))
}
