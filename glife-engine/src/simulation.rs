// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Run a whole simulation.
//!
//! The orchestrator validates the configuration, builds every worker (the
//! channel ring, the barrier and the print pipeline included) and only then
//! starts one thread per worker. Any configuration or seeding problem is
//! therefore reported before a single thread exists.
//!
//! # Example
//!
//! ```rust
//! use glife_engine::simulation::{SimulationConfig, run_simulation};
//! use glife_track::tracker::dev_null_tracker;
//!
//! let config = SimulationConfig::new(10, 8, 16, 2);
//! let summary = run_simulation(&config, &dev_null_tracker()).unwrap();
//!
//! // The glider has moved 4 cells down and 4 cells right.
//! assert_eq!(summary.cell(6, 5), Some(1));
//! assert_eq!(summary.live_cells(), 5);
//! ```

use std::any::Any;
use std::io;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use glife_track::entity::{Entity, toplevel};
use glife_track::{Tracker, Writer, debug, error, info};

use crate::grid::Grid;
use crate::halo::HaloExchange;
use crate::pattern::Seed;
use crate::printer::{OrderedPrinter, SharedOutput};
use crate::ring::Ring;
use crate::traits::Progress;
use crate::types::{Cell, LifeError, LifeResult};
use crate::worker::{Partition, Worker, WorkerLinks};

/// Everything needed to run one simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows, split evenly between the workers.
    pub height: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Number of workers: 1 or a positive even number.
    pub workers: usize,

    /// Dump the grid before and after the run.
    pub print: bool,

    /// Measure the wall-clock time of the run.
    pub timer: bool,

    /// Initial state, placed in partition 0.
    pub seed: Seed,
}

impl SimulationConfig {
    /// A configuration with printing and timing disabled and the default
    /// [`Seed`].
    #[must_use]
    pub fn new(width: usize, height: usize, generations: usize, workers: usize) -> Self {
        Self {
            width,
            height,
            generations,
            workers,
            print: false,
            timer: false,
            seed: Seed::default(),
        }
    }

    #[must_use]
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    #[must_use]
    pub fn with_timer(mut self, timer: bool) -> Self {
        self.timer = timer;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub workers: usize,

    /// The final grid in row-major order.
    pub cells: Vec<Cell>,

    /// Wall-clock time of the run, if timing was enabled.
    pub elapsed: Option<Duration>,
}

impl SimulationSummary {
    /// Read a cell of the final grid, `None` if outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c != 0).count()
    }
}

/// Run a simulation, printing to stdout if enabled.
pub fn run_simulation(config: &SimulationConfig, tracker: &Tracker) -> LifeResult<SimulationSummary> {
    Simulation::new(config, tracker).run()
}

/// A simulation with optional output destination and progress observer.
pub struct Simulation<'a> {
    config: &'a SimulationConfig,
    tracker: &'a Tracker,
    output: Option<Writer>,
    progress: Option<&'a dyn Progress>,
}

impl<'a> Simulation<'a> {
    #[must_use]
    pub fn new(config: &'a SimulationConfig, tracker: &'a Tracker) -> Self {
        Self {
            config,
            tracker,
            output: None,
            progress: None,
        }
    }

    /// Print to `output` instead of stdout.
    #[must_use]
    pub fn with_output(mut self, output: Writer) -> Self {
        self.output = Some(output);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Validate, run every worker to completion and assemble the result.
    pub fn run(self) -> LifeResult<SimulationSummary> {
        let config = self.config;
        let progress = self.progress;
        let top = toplevel(self.tracker, "top");
        let sim = Arc::new(Entity::new(&top, "sim"));

        info!(sim ; "start game of life on {} x {}, {} generations with {} workers",
            config.width, config.height, config.generations, config.workers);
        let start = Instant::now();

        let workers = self.build_workers(&sim).inspect_err(|e| {
            error!(sim ; "{e}");
        })?;
        let num_workers = workers.len();
        debug!(sim ; "starting {num_workers} workers");

        let generations = config.generations;
        let results: Vec<LifeResult<Grid>> = thread::scope(|s| {
            let handles: Vec<_> = workers
                .into_iter()
                .map(|worker| {
                    let progress = if worker.partition().igo == 0 {
                        progress
                    } else {
                        None
                    };
                    s.spawn(move || worker.run(generations, progress))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(igo, handle)| {
                    handle.join().unwrap_or_else(|panic| {
                        Err(LifeError::Internal(format!(
                            "worker {igo} panicked: {}",
                            panic_message(panic.as_ref())
                        )))
                    })
                })
                .collect()
        });

        let mut cells = Vec::with_capacity(config.width * config.height);
        for result in results {
            let grid = result.inspect_err(|e| {
                error!(sim ; "{e}");
            })?;
            cells.extend_from_slice(grid.cells());
        }

        let elapsed = config.timer.then(|| start.elapsed());
        if let Some(elapsed) = elapsed {
            info!(sim ; "time elapsed {elapsed:?}");
        }

        Ok(SimulationSummary {
            width: config.width,
            height: config.height,
            generations: config.generations,
            workers: num_workers,
            cells,
            elapsed,
        })
    }

    fn build_workers(self, sim: &Arc<Entity>) -> LifeResult<Vec<Worker>> {
        let config = self.config;
        let ring = Ring::new(config.workers)?;
        let ny = ring.partition_height(config.height)?;
        let num_workers = ring.num_workers();

        let halos = HaloExchange::build(&ring);
        let printers: Vec<Option<OrderedPrinter>> = if config.print {
            let output: SharedOutput = Arc::new(Mutex::new(
                self.output.unwrap_or_else(|| Box::new(io::stdout())),
            ));
            OrderedPrinter::build(num_workers, &output)
                .into_iter()
                .map(Some)
                .collect()
        } else {
            (0..num_workers).map(|_| None).collect()
        };
        let barrier = Arc::new(Barrier::new(num_workers));

        halos
            .into_iter()
            .zip(printers)
            .enumerate()
            .map(|(igo, (halo, printer))| {
                let partition = Partition {
                    igo,
                    nx: config.width,
                    ny,
                };
                let seed = (igo == 0).then_some(&config.seed);
                let links = WorkerLinks {
                    halo,
                    printer,
                    barrier: barrier.clone(),
                };
                Worker::new(sim, partition, seed, links)
            })
            .collect()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        String::from("unknown panic")
    }
}
