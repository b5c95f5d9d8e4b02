// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The cells of one partition.
//!
//! A [`Grid`] holds `ny` real rows of `nx` cells plus two halo rows:
//!
//! ```text
//!   row 0        top halo     (copy of the last real row of the left neighbour)
//!   row 1        first real row
//!   ...
//!   row ny       last real row
//!   row ny + 1   bottom halo  (copy of the first real row of the right neighbour)
//! ```
//!
//! All public row/column arguments are partition-relative and refer to real
//! rows, i.e. row `0` is physical row `1`. Columns wrap around inside
//! [`Grid::evolve_one_generation_to`]; rows only wrap through the halos.

use std::io::{self, Write};

use crate::pattern::{GLIDER, Pattern};
use crate::types::{ALIVE, Cell, DEAD, LifeError, LifeResult};

/// Offset of the first real row in the physical storage.
const OFFSET: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    nx: usize,
    ny: usize,
}

impl Grid {
    /// Allocate a zeroed grid of `ny` real rows (plus two halo rows) by `nx`
    /// columns.
    pub fn new(nx: usize, ny: usize) -> LifeResult<Self> {
        if nx == 0 || ny == 0 {
            return crate::config_error!(format!(
                "grid must have at least one row and column (got {nx}x{ny})"
            ));
        }
        Ok(Self {
            cells: vec![DEAD; (ny + 2) * nx],
            nx,
            ny,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of real rows.
    #[must_use]
    pub fn ny(&self) -> usize {
        self.ny
    }

    fn physical_row(&self, i: usize) -> &[Cell] {
        &self.cells[i * self.nx..(i + 1) * self.nx]
    }

    fn physical_row_mut(&mut self, i: usize) -> &mut [Cell] {
        &mut self.cells[i * self.nx..(i + 1) * self.nx]
    }

    fn check_in_range(&self, row: usize, col: usize, rows: usize, cols: usize) -> LifeResult<()> {
        let fits_rows = row.checked_add(rows).is_some_and(|end| end <= self.ny);
        let fits_cols = col.checked_add(cols).is_some_and(|end| end <= self.nx);
        if fits_rows && fits_cols {
            Ok(())
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.ny,
                cols: self.nx,
            })
        }
    }

    /// Read a real cell, `None` if outside the partition.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.ny && col < self.nx {
            Some(self.cells[(row + OFFSET) * self.nx + col])
        } else {
            None
        }
    }

    /// Write a real cell.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<()> {
        self.check_in_range(row, col, 1, 1)?;
        self.cells[(row + OFFSET) * self.nx + col] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Place `pattern` with the top-left of its footprint at (`row`, `col`).
    ///
    /// Nothing is written unless the whole footprint fits in the partition.
    pub fn set_pattern_at(&mut self, pattern: &Pattern, row: usize, col: usize) -> LifeResult<()> {
        self.check_in_range(row, col, pattern.height(), pattern.width())?;
        for (r, c) in pattern.cells {
            self.cells[(row + r + OFFSET) * self.nx + col + c] = ALIVE;
        }
        Ok(())
    }

    /// Place a [`GLIDER`] with its 3x3 footprint starting at (`row`, `col`).
    pub fn set_glider_at(&mut self, row: usize, col: usize) -> LifeResult<()> {
        self.set_pattern_at(&GLIDER, row, col)
    }

    /// Apply one generation of the rules, writing the real rows of `dst`.
    ///
    /// The halo rows of `self` supply the neighbours of the first and last
    /// real rows; they must be up to date. The halo rows of `dst` are left
    /// untouched.
    pub fn evolve_one_generation_to(&self, dst: &mut Grid) {
        assert_eq!(
            (self.nx, self.ny),
            (dst.nx, dst.ny),
            "evolving into a grid of a different shape"
        );

        let nx = self.nx;
        for i in OFFSET..self.ny + OFFSET {
            let above = self.physical_row(i - 1);
            let middle = self.physical_row(i);
            let below = self.physical_row(i + 1);
            let out = &mut dst.cells[i * nx..(i + 1) * nx];

            for j in 0..nx {
                let mut n: u8 = 0;
                // Column offsets -1, 0 and +1 taken modulo nx.
                for dj in [nx - 1, 0, 1] {
                    let j1 = (j + dj) % nx;
                    n += above[j1] + middle[j1] + below[j1];
                }
                let cell = middle[j];
                n -= cell;
                out[j] = if n == 3 || (n == 2 && cell > 0) {
                    ALIVE
                } else {
                    DEAD
                };
            }
        }
    }

    /// Copy the real rows (never the halos) into `dst`.
    pub fn copy_cells_to(&self, dst: &mut Grid) {
        assert_eq!(
            (self.nx, self.ny),
            (dst.nx, dst.ny),
            "copying into a grid of a different shape"
        );
        let real = self.nx * OFFSET..self.nx * (self.ny + OFFSET);
        dst.cells[real.clone()].copy_from_slice(&self.cells[real]);
    }

    /// A real row, `None` if outside the partition.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[Cell]> {
        (i < self.ny).then(|| self.physical_row(i + OFFSET))
    }

    /// The first real row, sent to the left neighbour.
    #[must_use]
    pub fn first_row(&self) -> &[Cell] {
        self.physical_row(OFFSET)
    }

    /// The last real row, sent to the right neighbour.
    #[must_use]
    pub fn last_row(&self) -> &[Cell] {
        self.physical_row(self.ny)
    }

    #[must_use]
    pub fn top_halo(&self) -> &[Cell] {
        self.physical_row(0)
    }

    #[must_use]
    pub fn bottom_halo(&self) -> &[Cell] {
        self.physical_row(self.ny + 1)
    }

    /// Overwrite the top halo with a row received from the left neighbour.
    pub fn set_top_halo(&mut self, row: &[Cell]) -> LifeResult<()> {
        self.check_halo_len(row)?;
        self.physical_row_mut(0).copy_from_slice(row);
        Ok(())
    }

    /// Overwrite the bottom halo with a row received from the right
    /// neighbour.
    pub fn set_bottom_halo(&mut self, row: &[Cell]) -> LifeResult<()> {
        self.check_halo_len(row)?;
        let ny = self.ny;
        self.physical_row_mut(ny + 1).copy_from_slice(row);
        Ok(())
    }

    fn check_halo_len(&self, row: &[Cell]) -> LifeResult<()> {
        if row.len() == self.nx {
            Ok(())
        } else {
            Err(LifeError::Internal(format!(
                "received a halo row of {} cells, expected {}",
                row.len(),
                self.nx
            )))
        }
    }

    /// Fill both halos from this grid's own opposite edges.
    ///
    /// Used when a single worker owns the whole grid.
    pub fn wrap_halos_from_self(&mut self) {
        let nx = self.nx;
        let ny = self.ny;
        // top halo <- last real row
        self.cells.copy_within(ny * nx..(ny + 1) * nx, 0);
        // bottom halo <- first real row
        self.cells.copy_within(nx..2 * nx, (ny + 1) * nx);
    }

    /// The real rows in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[self.nx * OFFSET..self.nx * (self.ny + OFFSET)]
    }

    /// Number of live cells in the real rows.
    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.cells().iter().filter(|c| **c != DEAD).count()
    }

    /// Dump the real rows, each prefixed by the worker index, in the form
    /// `2 [0 1 0 0]`.
    pub fn write_rows(&self, writer: &mut dyn Write, igo: usize) -> io::Result<()> {
        for row in self.cells().chunks(self.nx) {
            let values: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(writer, "{igo} [{}]", values.join(" "))?;
        }
        Ok(())
    }
}
