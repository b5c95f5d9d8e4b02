// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::error::Error;
use std::fmt;

#[macro_export]
/// Build a configuration [LifeError] from a message that supports `to_string`
macro_rules! config_error {
    ($msg:expr) => {
        Err($crate::types::LifeError::Configuration($msg.to_string()))
    };
}

/// The `LifeError` is what should be returned in the case of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Invalid worker count, grid size or other setting. Always reported
    /// before any worker is started.
    Configuration(String),

    /// A pattern whose footprint does not fit inside the partition.
    OutOfRange {
        /// Partition-relative row of the top-left corner of the footprint.
        row: usize,
        /// Column of the top-left corner of the footprint.
        col: usize,
        /// Number of real rows in the partition.
        rows: usize,
        /// Number of columns in the partition.
        cols: usize,
    },

    /// A worker panicked or one of its channels was disconnected.
    Internal(String),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LifeError::Configuration(msg) => write!(f, "Error: {msg}"),
            LifeError::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Error: pattern at ({row}, {col}) does not fit in a {rows}x{cols} partition"
            ),
            LifeError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl Error for LifeError {}

/// The LifeResult is the return type for most fallible functions
pub type LifeResult<T> = Result<T, LifeError>;

/// A single cell state: 0 is dead, 1 is alive.
pub type Cell = u8;

/// Value stored for a dead cell.
pub const DEAD: Cell = 0;

/// Value stored for a live cell.
pub const ALIVE: Cell = 1;
