// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

#![doc(test(attr(warn(unused))))]

//! A toroidal Game of Life split across ring-connected workers.
//!
//! The grid of `width` x `height` cells wraps at every edge. It is cut into
//! one horizontal strip per worker and every worker runs on its own thread:
//!
//! ```text
//!   +-----------------+
//!   | worker 0        |  <- halo rows travel between neighbours,
//!   +-----------------+     including between the last and first
//!   | worker 1        |     worker
//!   +-----------------+
//!   | ...             |
//!   +-----------------+
//! ```
//!
//! Each [partition](crate::grid::Grid) carries a copy of its neighbours'
//! edge rows (the _halos_), refreshed every generation by the
//! [halo exchange](crate::halo). The workers move from one generation to
//! the next in lockstep by meeting at a barrier before computing and again
//! before committing (see [worker](crate::worker)).
//!
//! The whole thing is driven by [`run_simulation`](crate::simulation::run_simulation):
//!
//! ```rust
//! use glife_engine::reference::ReferenceUniverse;
//! use glife_engine::simulation::{SimulationConfig, run_simulation};
//! use glife_track::tracker::dev_null_tracker;
//!
//! let config = SimulationConfig::new(16, 16, 20, 4);
//! let summary = run_simulation(&config, &dev_null_tracker()).unwrap();
//!
//! let mut reference = ReferenceUniverse::from_config(&config).unwrap();
//! reference.run(config.generations);
//! assert_eq!(summary.cells, reference.cells());
//! ```

pub mod grid;
pub mod halo;
pub mod pattern;
pub mod printer;
pub mod reference;
pub mod ring;
pub mod simulation;
pub mod test_helpers;
pub mod traits;
pub mod types;
pub mod worker;
