// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Halo exchange between ring neighbours.
//!
//! Once per generation, before computing, every worker sends a copy of its
//! first real row to its left neighbour and a copy of its last real row to
//! its right neighbour, and receives the corresponding rows into its own
//! halo rows. Rows are always copied, so no worker ever holds a reference
//! into another worker's cells.
//!
//! The channels are rendezvous channels (capacity 0) wired up as follows,
//! for `n` workers:
//!
//! ```text
//!  i        0     1     0      at the ends the channels wrap around
//!  left:   <- * -<- * -<       send to left  (receive from right)
//!  right:  >- * ->- * ->       send to right (receive from left)
//! ```
//!
//! Worker `i` sends left on `left[i]` and right on `right[i + 1]`, and
//! receives from the right on `left[i + 1]` and from the left on `right[i]`.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

use glife_track::entity::Entity;
use glife_track::trace;

use crate::grid::Grid;
use crate::ring::{HaloStep, LinkRole, Ring};
use crate::types::{Cell, LifeError, LifeResult};

/// A copy of one row of cells in flight between two workers.
pub type Row = Vec<Cell>;

/// The four channel endpoints of one worker.
pub struct HaloLinks {
    role: LinkRole,
    send_left: SyncSender<Row>,
    receive_right: Receiver<Row>,
    send_right: SyncSender<Row>,
    receive_left: Receiver<Row>,
}

/// How a worker refreshes its halo rows.
pub enum HaloExchange {
    /// The only worker: halos are copied from its own opposite edges.
    SelfWrapped,

    /// One worker of a ring of two or more.
    Linked(HaloLinks),
}

impl HaloExchange {
    /// Create the halo exchange of every worker in `ring`, indexed by worker.
    #[must_use]
    pub fn build(ring: &Ring) -> Vec<HaloExchange> {
        if ring.is_self_wrapped() {
            return vec![HaloExchange::SelfWrapped];
        }

        let n = ring.num_workers();
        let (left_tx, mut left_rx): (Vec<_>, Vec<_>) = (0..n).map(|_| sync_channel(0)).unzip();
        let (mut right_tx, right_rx): (Vec<_>, Vec<_>) = (0..n).map(|_| sync_channel(0)).unzip();

        // Worker i receives from the right on left[i + 1] and sends right on
        // right[i + 1].
        left_rx.rotate_left(1);
        right_tx.rotate_left(1);

        left_tx
            .into_iter()
            .zip(left_rx)
            .zip(right_tx.into_iter().zip(right_rx))
            .enumerate()
            .map(
                |(igo, ((send_left, receive_right), (send_right, receive_left)))| {
                    HaloExchange::Linked(HaloLinks {
                        role: ring.role_of(igo),
                        send_left,
                        receive_right,
                        send_right,
                        receive_left,
                    })
                },
            )
            .collect()
    }

    /// Refresh both halo rows of `grid` from the neighbours' edge rows.
    ///
    /// Blocks until both neighbours have taken part.
    pub fn exchange(&self, grid: &mut Grid, entity: &Entity) -> LifeResult<()> {
        match self {
            HaloExchange::SelfWrapped => {
                grid.wrap_halos_from_self();
                Ok(())
            }
            HaloExchange::Linked(links) => links.exchange(grid, entity),
        }
    }
}

impl HaloLinks {
    fn exchange(&self, grid: &mut Grid, entity: &Entity) -> LifeResult<()> {
        for step in self.role.schedule() {
            trace!(entity ; "halo {step:?}");
            match step {
                HaloStep::SendLeft => self
                    .send_left
                    .send(grid.first_row().to_vec())
                    .map_err(|_| disconnected(entity, step))?,
                HaloStep::ReceiveRight => {
                    let row = self
                        .receive_right
                        .recv()
                        .map_err(|_| disconnected(entity, step))?;
                    grid.set_bottom_halo(&row)?;
                }
                HaloStep::SendRight => self
                    .send_right
                    .send(grid.last_row().to_vec())
                    .map_err(|_| disconnected(entity, step))?,
                HaloStep::ReceiveLeft => {
                    let row = self
                        .receive_left
                        .recv()
                        .map_err(|_| disconnected(entity, step))?;
                    grid.set_top_halo(&row)?;
                }
            }
        }
        Ok(())
    }
}

fn disconnected(entity: &Entity, step: HaloStep) -> LifeError {
    LifeError::Internal(format!("{entity}: neighbour disconnected during {step:?}"))
}
