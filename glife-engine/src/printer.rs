// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Partition dumps in worker order.
//!
//! The workers form a pipeline: worker 0 prints straight away and passes a
//! token to worker 1, which waits for it, prints and passes it on, and so on
//! up to the last worker. The output therefore always appears in worker
//! order even though the workers run concurrently. A single worker prints
//! without any signalling.

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::sync::{Arc, Mutex};

use glife_track::Writer;

use crate::grid::Grid;
use crate::types::{LifeError, LifeResult};

/// Written by worker 0 between the initial and the final dump.
pub const SEPARATOR: &str = "-----------------------";

/// The destination shared by all workers.
pub type SharedOutput = Arc<Mutex<Writer>>;

pub struct OrderedPrinter {
    igo: usize,
    wait_for: Option<Receiver<()>>,
    pass_to: Option<SyncSender<()>>,
    output: SharedOutput,
}

impl OrderedPrinter {
    /// Create the printers of `num_workers` workers, indexed by worker.
    #[must_use]
    pub fn build(num_workers: usize, output: &SharedOutput) -> Vec<OrderedPrinter> {
        let mut printers: Vec<OrderedPrinter> = (0..num_workers)
            .map(|igo| OrderedPrinter {
                igo,
                wait_for: None,
                pass_to: None,
                output: output.clone(),
            })
            .collect();

        for igo in 1..num_workers {
            let (tx, rx) = sync_channel(0);
            printers[igo - 1].pass_to = Some(tx);
            printers[igo].wait_for = Some(rx);
        }
        printers
    }

    /// Print the real rows of `grid` once every lower-indexed worker has
    /// printed, preceded by `header` if given.
    pub fn print(&self, grid: &Grid, header: Option<&str>) -> LifeResult<()> {
        if let Some(wait_for) = &self.wait_for {
            wait_for.recv().map_err(|_| {
                LifeError::Internal(format!(
                    "worker {} lost its left neighbour while waiting to print",
                    self.igo
                ))
            })?;
        }

        {
            let mut output = self
                .output
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            self.write_partition(&mut **output, grid, header)
                .map_err(|e| {
                    LifeError::Internal(format!("worker {} unable to print: {e}", self.igo))
                })?;
        }

        if let Some(pass_to) = &self.pass_to {
            pass_to.send(()).map_err(|_| {
                LifeError::Internal(format!(
                    "worker {} lost its right neighbour while printing",
                    self.igo
                ))
            })?;
        }
        Ok(())
    }

    fn write_partition(
        &self,
        output: &mut dyn Write,
        grid: &Grid,
        header: Option<&str>,
    ) -> io::Result<()> {
        if let Some(header) = header {
            writeln!(output, "{header}")?;
        }
        grid.write_rows(output, self.igo)?;
        output.flush()
    }
}
