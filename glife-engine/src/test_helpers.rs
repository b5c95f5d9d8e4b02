// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use glife_track::Tracker;
use glife_track::test_helpers::create_tracker;

#[must_use]
pub fn start_test(full_filepath: &str) -> Tracker {
    create_tracker(full_filepath)
}

/// A writer that keeps everything written to it so that a test can inspect
/// the printed grid afterwards.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
