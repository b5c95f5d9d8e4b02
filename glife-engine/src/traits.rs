// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Traits implemented by users of the engine.

/// Observer of simulation progress.
///
/// Only worker 0 reports progress, once per committed generation, so an
/// implementation sees each generation exactly once and in order.
pub trait Progress: Send + Sync {
    /// Called after `generation` (counting from 1) has been committed.
    fn generation_complete(&self, generation: usize);

    /// Called once the last generation has been committed.
    fn finish(&self) {}
}
