// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! One worker: a partition of the grid advanced in lockstep with the others.
//!
//! Every generation a worker:
//!  - exchanges halo rows with its neighbours,
//!  - waits at barrier A so that nobody computes before every halo is fresh,
//!  - computes the next state of its real rows into a second grid,
//!  - waits at barrier B so that nobody commits while a neighbour may still
//!    be reading,
//!  - commits the next state into its current grid.

use std::sync::{Arc, Barrier};

use glife_track::entity::Entity;
use glife_track::{debug, info, trace, value};

use crate::grid::Grid;
use crate::halo::HaloExchange;
use crate::pattern::Seed;
use crate::printer::{OrderedPrinter, SEPARATOR};
use crate::traits::Progress;
use crate::types::LifeResult;

/// Where a worker sits in the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Index of the worker in the ring.
    pub igo: usize,

    /// Number of columns.
    pub nx: usize,

    /// Number of real rows owned by the worker.
    pub ny: usize,
}

impl Partition {
    /// Index of the first global row owned by this partition.
    #[must_use]
    pub fn first_global_row(&self) -> usize {
        self.igo * self.ny
    }
}

/// The shared plumbing handed to a worker when it is set up.
pub struct WorkerLinks {
    pub halo: HaloExchange,
    pub printer: Option<OrderedPrinter>,
    pub barrier: Arc<Barrier>,
}

pub struct Worker {
    entity: Entity,
    partition: Partition,
    current: Grid,
    next: Grid,
    links: WorkerLinks,
}

impl Worker {
    /// Allocate the partition and place `seed` in it, if any.
    ///
    /// All failures happen here so that they can be reported before any
    /// worker starts running.
    pub fn new(
        parent: &Arc<Entity>,
        partition: Partition,
        seed: Option<&Seed>,
        links: WorkerLinks,
    ) -> LifeResult<Self> {
        let entity = Entity::new(parent, &format!("worker{}", partition.igo));
        let mut current = Grid::new(partition.nx, partition.ny)?;
        let next = Grid::new(partition.nx, partition.ny)?;

        if let Some(seed) = seed {
            current.set_pattern_at(&seed.pattern, seed.row, seed.col)?;
            debug!(entity ; "seeded {} at ({}, {})", seed.pattern, seed.row, seed.col);
        }

        Ok(Self {
            entity,
            partition,
            current,
            next,
            links,
        })
    }

    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Run `generations` generations and return the final partition.
    pub fn run(
        mut self,
        generations: usize,
        progress: Option<&dyn Progress>,
    ) -> LifeResult<Grid> {
        info!(self.entity ; "rows {}..{}",
            self.partition.first_global_row(),
            self.partition.first_global_row() + self.partition.ny);

        if let Some(printer) = &self.links.printer {
            printer.print(&self.current, None)?;
        }

        for generation in 1..=generations {
            self.links.halo.exchange(&mut self.current, &self.entity)?;
            self.links.barrier.wait();

            self.current.evolve_one_generation_to(&mut self.next);
            self.links.barrier.wait();

            self.next.copy_cells_to(&mut self.current);
            trace!(self.entity ; "committed generation {generation}");
            value!(self.entity ; self.current.live_cells());

            if let Some(progress) = progress {
                progress.generation_complete(generation);
            }
        }

        if let Some(progress) = progress {
            progress.finish();
        }

        if let Some(printer) = &self.links.printer {
            let header = (self.partition.igo == 0).then_some(SEPARATOR);
            printer.print(&self.current, header)?;
        }

        debug!(self.entity ; "done, {} live cells", self.current.live_cells());
        Ok(self.current)
    }
}
