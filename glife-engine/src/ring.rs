// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The 1-D ring connecting the workers.
//!
//! Worker `i` has worker `i - 1` to its left and worker `i + 1` to its right,
//! wrapping at both ends. Since partitions are horizontal strips, "left" is
//! the strip above and "right" the strip below.
//!
//! Every link is a rendezvous: a send blocks until the neighbour receives.
//! To avoid a circular wait each worker is given a [`LinkRole`] when the ring
//! is built, which fixes the order of its four halo operations:
//!
//! ```text
//!   SendFirst    (even): send-left,     receive-right, send-right,   receive-left
//!   ReceiveFirst (odd):  receive-right, send-left,     receive-left, send-right
//! ```
//!
//! For any adjacent pair one side is always sending while the other is
//! receiving, which only works out around the whole ring when the number of
//! workers is even (or there is a single worker with no links at all).

use crate::config_error;
use crate::types::LifeResult;

/// One step of the halo handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaloStep {
    SendLeft,
    ReceiveRight,
    SendRight,
    ReceiveLeft,
}

/// Who goes first on each link, decided when the ring is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    SendFirst,
    ReceiveFirst,
}

impl LinkRole {
    /// The order in which a worker with this role performs its halo steps.
    #[must_use]
    pub fn schedule(&self) -> [HaloStep; 4] {
        match self {
            LinkRole::SendFirst => [
                HaloStep::SendLeft,
                HaloStep::ReceiveRight,
                HaloStep::SendRight,
                HaloStep::ReceiveLeft,
            ],
            LinkRole::ReceiveFirst => [
                HaloStep::ReceiveRight,
                HaloStep::SendLeft,
                HaloStep::ReceiveLeft,
                HaloStep::SendRight,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    num_workers: usize,
}

impl Ring {
    /// Build a ring of `num_workers`, which must be 1 or a positive even
    /// number.
    pub fn new(num_workers: usize) -> LifeResult<Self> {
        if num_workers == 0 {
            return config_error!("the number of workers must be at least 1");
        }
        if num_workers > 1 && num_workers % 2 != 0 {
            return config_error!(format!(
                "the number of workers must be 1 or divisible by 2 (got {num_workers})"
            ));
        }
        Ok(Self { num_workers })
    }

    #[must_use]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// A single worker wraps its halos from its own edges and has no links.
    #[must_use]
    pub fn is_self_wrapped(&self) -> bool {
        self.num_workers == 1
    }

    #[must_use]
    pub fn left_of(&self, igo: usize) -> usize {
        (igo + self.num_workers - 1) % self.num_workers
    }

    #[must_use]
    pub fn right_of(&self, igo: usize) -> usize {
        (igo + 1) % self.num_workers
    }

    #[must_use]
    pub fn role_of(&self, igo: usize) -> LinkRole {
        if igo % 2 == 0 {
            LinkRole::SendFirst
        } else {
            LinkRole::ReceiveFirst
        }
    }

    /// Check that `height` rows can be split evenly between the workers and
    /// return the height of each partition.
    pub fn partition_height(&self, height: usize) -> LifeResult<usize> {
        if height % self.num_workers != 0 {
            return config_error!(format!(
                "the grid height ({height}) must be divisible by the number of workers ({})",
                self.num_workers
            ));
        }
        Ok(height / self.num_workers)
    }
}
