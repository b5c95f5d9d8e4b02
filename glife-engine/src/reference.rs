// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! A single, unpartitioned universe.
//!
//! Both axes wrap directly through modular indexing, with no halo rows and
//! no workers. Any partitioned run must end in exactly the same state as
//! this one.

use std::io::{self, Write};

use crate::pattern::Pattern;
use crate::simulation::SimulationConfig;
use crate::types::{ALIVE, Cell, DEAD, LifeError, LifeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceUniverse {
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    width: usize,
    height: usize,
}

impl ReferenceUniverse {
    pub fn new(width: usize, height: usize) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return crate::config_error!(format!(
                "grid must have at least one row and column (got {width}x{height})"
            ));
        }
        Ok(Self {
            cells: vec![DEAD; width * height],
            scratch: vec![DEAD; width * height],
            width,
            height,
        })
    }

    /// Build the universe described by `config`, seed included.
    pub fn from_config(config: &SimulationConfig) -> LifeResult<Self> {
        let mut universe = Self::new(config.width, config.height)?;
        universe.set_pattern_at(&config.seed.pattern, config.seed.row, config.seed.col)?;
        Ok(universe)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Place `pattern` with the top-left of its footprint at (`row`, `col`).
    pub fn set_pattern_at(&mut self, pattern: &Pattern, row: usize, col: usize) -> LifeResult<()> {
        let fits_rows = row
            .checked_add(pattern.height())
            .is_some_and(|end| end <= self.height);
        let fits_cols = col
            .checked_add(pattern.width())
            .is_some_and(|end| end <= self.width);
        if !(fits_rows && fits_cols) {
            return Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.height,
                cols: self.width,
            });
        }
        for (r, c) in pattern.cells {
            self.cells[(row + r) * self.width + col + c] = ALIVE;
        }
        Ok(())
    }

    /// Advance by one generation.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for i in 0..h {
            for j in 0..w {
                let mut n: u8 = 0;
                for di in [h - 1, 0, 1] {
                    for dj in [w - 1, 0, 1] {
                        n += self.cells[((i + di) % h) * w + (j + dj) % w];
                    }
                }
                let cell = self.cells[i * w + j];
                n -= cell;
                self.scratch[i * w + j] = if n == 3 || (n == 2 && cell > 0) {
                    ALIVE
                } else {
                    DEAD
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Advance by `generations` generations.
    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// The whole grid in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c != DEAD).count()
    }

    /// Dump every row in the form `[0 1 0 0]`.
    pub fn write_rows(&self, writer: &mut dyn Write) -> io::Result<()> {
        for row in self.cells.chunks(self.width) {
            let values: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(writer, "[{}]", values.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{BLINKER, BLOCK};

    #[test]
    fn blinker_oscillates() {
        let mut universe = ReferenceUniverse::new(5, 5).unwrap();
        universe.set_pattern_at(&BLINKER, 1, 1).unwrap();
        let start = universe.cells().to_vec();

        universe.step();
        assert_ne!(universe.cells(), start.as_slice());
        assert_eq!(universe.get(1, 2), Some(ALIVE));
        assert_eq!(universe.get(2, 2), Some(ALIVE));
        assert_eq!(universe.get(3, 2), Some(ALIVE));

        universe.step();
        assert_eq!(universe.cells(), start.as_slice());
    }

    #[test]
    fn block_is_still() {
        let mut universe = ReferenceUniverse::new(6, 6).unwrap();
        universe.set_pattern_at(&BLOCK, 2, 3).unwrap();
        let start = universe.cells().to_vec();
        universe.run(5);
        assert_eq!(universe.cells(), start.as_slice());
    }

    #[test]
    fn pattern_must_fit() {
        let mut universe = ReferenceUniverse::new(4, 4).unwrap();
        assert_eq!(
            universe.set_pattern_at(&BLOCK, 3, 0),
            Err(LifeError::OutOfRange {
                row: 3,
                col: 0,
                rows: 4,
                cols: 4
            })
        );
        assert_eq!(universe.live_cells(), 0);
    }
}
