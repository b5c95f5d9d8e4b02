// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use glife_engine::grid::Grid;
use glife_engine::pattern::{BLINKER, GLIDER};
use glife_engine::types::{ALIVE, DEAD, LifeError};

fn live_positions(grid: &Grid) -> Vec<(usize, usize)> {
    let mut live = Vec::new();
    for row in 0..grid.ny() {
        for col in 0..grid.nx() {
            if grid.get(row, col) == Some(ALIVE) {
                live.push((row, col));
            }
        }
    }
    live
}

fn step_alone(grid: &mut Grid) {
    let mut next = Grid::new(grid.nx(), grid.ny()).unwrap();
    grid.wrap_halos_from_self();
    grid.evolve_one_generation_to(&mut next);
    next.copy_cells_to(grid);
}

#[test]
fn new_grid_is_dead() {
    let grid = Grid::new(10, 4).unwrap();
    assert_eq!(grid.nx(), 10);
    assert_eq!(grid.ny(), 4);
    assert_eq!(grid.cells().len(), 40);
    assert_eq!(grid.live_cells(), 0);
    assert!(grid.top_halo().iter().all(|c| *c == DEAD));
    assert!(grid.bottom_halo().iter().all(|c| *c == DEAD));
}

#[test]
fn empty_grid_rejected() {
    assert!(matches!(Grid::new(0, 4), Err(LifeError::Configuration(_))));
    assert!(matches!(Grid::new(4, 0), Err(LifeError::Configuration(_))));
}

#[test]
fn glider_placement() {
    let mut grid = Grid::new(10, 4).unwrap();
    grid.set_glider_at(1, 2).unwrap();
    assert_eq!(
        live_positions(&grid),
        vec![(1, 3), (2, 4), (3, 2), (3, 3), (3, 4)]
    );
}

#[test]
fn glider_must_fit_in_partition() {
    let mut grid = Grid::new(10, 4).unwrap();
    assert_eq!(
        grid.set_glider_at(2, 0),
        Err(LifeError::OutOfRange {
            row: 2,
            col: 0,
            rows: 4,
            cols: 10
        })
    );
    assert_eq!(
        grid.set_glider_at(0, 8),
        Err(LifeError::OutOfRange {
            row: 0,
            col: 8,
            rows: 4,
            cols: 10
        })
    );
    assert_eq!(grid.live_cells(), 0);

    // The last position at which the footprint still fits.
    grid.set_glider_at(1, 7).unwrap();
    assert_eq!(grid.live_cells(), 5);
}

#[test]
fn single_cells() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(2, 2, true).unwrap();
    assert_eq!(grid.get(2, 2), Some(ALIVE));
    grid.set(2, 2, false).unwrap();
    assert_eq!(grid.get(2, 2), Some(DEAD));
    assert_eq!(grid.get(3, 0), None);
    assert!(matches!(
        grid.set(0, 3, true),
        Err(LifeError::OutOfRange { .. })
    ));
}

#[test]
fn copy_is_idempotent() {
    let mut src = Grid::new(6, 3).unwrap();
    src.set_glider_at(0, 1).unwrap();
    let mut dst = Grid::new(6, 3).unwrap();

    src.copy_cells_to(&mut dst);
    let once = dst.clone();
    src.copy_cells_to(&mut dst);
    assert_eq!(dst, once);
    assert_eq!(dst.cells(), src.cells());
}

#[test]
fn copy_leaves_halos_alone() {
    let mut src = Grid::new(4, 2).unwrap();
    src.set(0, 0, true).unwrap();
    src.set(1, 3, true).unwrap();
    src.wrap_halos_from_self();

    let mut dst = Grid::new(4, 2).unwrap();
    src.copy_cells_to(&mut dst);
    assert_eq!(dst.cells(), src.cells());
    assert!(dst.top_halo().iter().all(|c| *c == DEAD));
    assert!(dst.bottom_halo().iter().all(|c| *c == DEAD));
}

#[test]
fn self_wrapped_halos() {
    let mut grid = Grid::new(4, 3).unwrap();
    grid.set(0, 1, true).unwrap();
    grid.set(2, 3, true).unwrap();
    grid.wrap_halos_from_self();

    assert_eq!(grid.top_halo(), grid.last_row());
    assert_eq!(grid.bottom_halo(), grid.first_row());
    assert_eq!(grid.row(2), Some(grid.last_row()));
    assert_eq!(grid.row(3), None);
    assert_eq!(grid.top_halo(), &[DEAD, DEAD, DEAD, ALIVE]);
    assert_eq!(grid.bottom_halo(), &[DEAD, ALIVE, DEAD, DEAD]);
}

#[test]
fn halo_rows_of_wrong_length_rejected() {
    let mut grid = Grid::new(4, 3).unwrap();
    assert!(matches!(
        grid.set_top_halo(&[ALIVE; 3]),
        Err(LifeError::Internal(_))
    ));
    assert!(matches!(
        grid.set_bottom_halo(&[ALIVE; 5]),
        Err(LifeError::Internal(_))
    ));
    grid.set_top_halo(&[ALIVE; 4]).unwrap();
    assert_eq!(grid.top_halo(), &[ALIVE; 4]);
}

#[test]
fn halos_feed_edge_rows() {
    // A horizontal bar in the top halo gives birth to a cell in the first
    // real row.
    let mut grid = Grid::new(5, 3).unwrap();
    grid.set_top_halo(&[DEAD, ALIVE, ALIVE, ALIVE, DEAD]).unwrap();
    let mut next = Grid::new(5, 3).unwrap();
    grid.evolve_one_generation_to(&mut next);
    assert_eq!(live_positions(&next), vec![(0, 2)]);
}

#[test]
fn blinker_wraps_horizontally() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set(2, 4, true).unwrap();
    grid.set(2, 0, true).unwrap();
    grid.set(2, 1, true).unwrap();

    step_alone(&mut grid);
    assert_eq!(live_positions(&grid), vec![(1, 0), (2, 0), (3, 0)]);

    step_alone(&mut grid);
    assert_eq!(live_positions(&grid), vec![(2, 0), (2, 1), (2, 4)]);
}

#[test]
fn blinker_wraps_vertically() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set(4, 2, true).unwrap();
    grid.set(0, 2, true).unwrap();
    grid.set(1, 2, true).unwrap();

    step_alone(&mut grid);
    assert_eq!(live_positions(&grid), vec![(0, 1), (0, 2), (0, 3)]);
}

#[test]
fn blinker_oscillates() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set_pattern_at(&BLINKER, 1, 1).unwrap();
    let start = grid.clone();

    step_alone(&mut grid);
    assert_eq!(live_positions(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    step_alone(&mut grid);
    assert_eq!(grid.cells(), start.cells());
}

#[test]
fn glider_moves_diagonally() {
    let mut grid = Grid::new(8, 8).unwrap();
    grid.set_pattern_at(&GLIDER, 0, 0).unwrap();
    for _ in 0..4 {
        step_alone(&mut grid);
    }
    assert_eq!(
        live_positions(&grid),
        vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
    );
}

#[test]
fn write_rows_format() {
    let mut grid = Grid::new(4, 2).unwrap();
    grid.set(0, 1, true).unwrap();
    grid.set(1, 3, true).unwrap();

    let mut out = Vec::new();
    grid.write_rows(&mut out, 3).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "3 [0 1 0 0]\n3 [0 0 0 1]\n"
    );
}
