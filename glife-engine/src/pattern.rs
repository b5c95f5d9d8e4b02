// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Initial patterns.
//!
//! A [`Seed`] is handed explicitly to the setup of partition 0; no other
//! partition is seeded.

use std::fmt;

/// A fixed set of live cells relative to the top-left corner of its
/// footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// A glider moves one cell diagonally (down and right) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Period 2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

/// Still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, BLOCK];

impl Pattern {
    /// Look up one of the [`PATTERNS`] by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Number of rows covered by the footprint.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.iter().map(|(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Number of columns covered by the footprint.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.iter().map(|(_, c)| c + 1).max().unwrap_or(0)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The initial state of a simulation: one pattern placed in partition 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub pattern: Pattern,
    pub row: usize,
    pub col: usize,
}

impl Seed {
    #[must_use]
    pub fn new(pattern: Pattern, row: usize, col: usize) -> Self {
        Self { pattern, row, col }
    }
}

impl Default for Seed {
    /// A glider in the top-left corner.
    fn default() -> Self {
        Self::new(GLIDER, 0, 0)
    }
}
