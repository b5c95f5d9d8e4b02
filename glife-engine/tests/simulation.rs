// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use glife_engine::pattern::{BLINKER, GLIDER, Seed};
use glife_engine::reference::ReferenceUniverse;
use glife_engine::simulation::{Simulation, SimulationConfig, SimulationSummary, run_simulation};
use glife_engine::test_helpers::{CapturedOutput, start_test};
use glife_engine::traits::Progress;
use glife_track::test_helpers::contains_match;
use glife_track::test_init;
use glife_track::tracker::dev_null_tracker;
use log::Level;

fn live_positions(summary: &SimulationSummary) -> Vec<(usize, usize)> {
    let mut live = Vec::new();
    for row in 0..summary.height {
        for col in 0..summary.width {
            if summary.cell(row, col) == Some(1) {
                live.push((row, col));
            }
        }
    }
    live
}

/// Glider cells after it has moved `shift` cells down and right.
fn glider_at(shift: usize, width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = GLIDER
        .cells
        .iter()
        .map(|(r, c)| ((r + shift) % height, (c + shift) % width))
        .collect();
    cells.sort_unstable();
    cells
}

fn reference_cells(config: &SimulationConfig) -> Vec<u8> {
    let mut reference = ReferenceUniverse::from_config(config).unwrap();
    reference.run(config.generations);
    reference.cells().to_vec()
}

#[test]
fn small_universe_scenario() {
    let tracker = start_test(file!());
    for workers in [1, 2] {
        let config = SimulationConfig::new(10, 8, 16, workers);
        let summary = run_simulation(&config, &tracker).unwrap();
        assert_eq!(summary.workers, workers);
        assert_eq!(summary.live_cells(), 5);
        assert_eq!(live_positions(&summary), glider_at(4, 10, 8));
        assert_eq!(summary.elapsed, None);
    }
}

#[test]
fn same_result_for_every_worker_count() {
    let tracker = start_test(file!());
    let expected = reference_cells(&SimulationConfig::new(20, 32, 37, 1));
    for workers in [1, 2, 4, 8] {
        let config = SimulationConfig::new(20, 32, 37, workers);
        let summary = run_simulation(&config, &tracker).unwrap();
        assert_eq!(summary.cells, expected, "{workers} workers");
    }
}

#[test]
fn glider_invariant() {
    let tracker = dev_null_tracker();
    for workers in [1, 2, 4] {
        for k in 0..6 {
            let config = SimulationConfig::new(12, 12, 4 * k, workers);
            let summary = run_simulation(&config, &tracker).unwrap();
            assert_eq!(
                live_positions(&summary),
                glider_at(k, 12, 12),
                "{workers} workers, {k} moves"
            );
        }
    }
}

#[test]
fn glider_crosses_every_edge() {
    // After 4 * 8 generations the glider has travelled once around an 8x8
    // torus in both directions.
    let tracker = dev_null_tracker();
    for workers in [1, 2] {
        let config = SimulationConfig::new(8, 8, 32, workers);
        let summary = run_simulation(&config, &tracker).unwrap();
        assert_eq!(live_positions(&summary), glider_at(0, 8, 8));

        let halfway = SimulationConfig::new(8, 8, 24, workers);
        let summary = run_simulation(&halfway, &tracker).unwrap();
        assert_eq!(live_positions(&summary), glider_at(6, 8, 8));
    }
}

#[test]
fn zero_generations_returns_seed() {
    let config = SimulationConfig::new(6, 8, 0, 2).with_seed(Seed::new(BLINKER, 1, 2));
    let summary = run_simulation(&config, &dev_null_tracker()).unwrap();
    assert_eq!(live_positions(&summary), vec![(2, 2), (2, 3), (2, 4)]);
}

#[test]
fn other_seeds_match_reference() {
    let tracker = dev_null_tracker();
    let config = SimulationConfig::new(9, 12, 11, 4).with_seed(Seed::new(BLINKER, 1, 6));
    let summary = run_simulation(&config, &tracker).unwrap();
    assert_eq!(summary.cells, reference_cells(&config));
}

#[test]
fn no_deadlock() {
    const GENERATIONS: usize = 100;
    let (tx, rx) = mpsc::channel();

    for workers in [1, 2, 4, 6, 8, 10, 12, 14, 16] {
        let tx = tx.clone();
        thread::spawn(move || {
            let config = SimulationConfig::new(10, 4 * workers, GENERATIONS, workers);
            let result = run_simulation(&config, &dev_null_tracker()).map(|s| s.cells);
            let _ = tx.send((workers, config, result));
        });
    }
    drop(tx);

    for _ in 0..9 {
        let (workers, config, result) = rx
            .recv_timeout(Duration::from_secs(120))
            .expect("simulation did not complete in time");
        assert_eq!(result.unwrap(), reference_cells(&config), "{workers} workers");
    }
}

#[test]
fn printed_in_worker_order() {
    let output = CapturedOutput::new();
    let config = SimulationConfig::new(10, 8, 16, 2).with_print(true);
    Simulation::new(&config, &dev_null_tracker())
        .with_output(Box::new(output.clone()))
        .run()
        .unwrap();

    let contents = output.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 8 + 1 + 8);

    assert_eq!(lines[0], "0 [0 1 0 0 0 0 0 0 0 0]");
    assert_eq!(lines[1], "0 [0 0 1 0 0 0 0 0 0 0]");
    assert_eq!(lines[2], "0 [1 1 1 0 0 0 0 0 0 0]");
    for line in &lines[0..4] {
        assert!(line.starts_with("0 ["));
    }
    for line in &lines[4..8] {
        assert_eq!(*line, "1 [0 0 0 0 0 0 0 0 0 0]");
    }

    assert_eq!(lines[8], "-----------------------");

    for line in &lines[9..13] {
        assert!(line.starts_with("0 ["));
    }
    assert_eq!(lines[13], "1 [0 0 0 0 0 1 0 0 0 0]");
    assert_eq!(lines[14], "1 [0 0 0 0 0 0 1 0 0 0]");
    assert_eq!(lines[15], "1 [0 0 0 0 1 1 1 0 0 0]");
    assert_eq!(lines[16], "1 [0 0 0 0 0 0 0 0 0 0]");
}

#[test]
fn single_worker_prints() {
    let output = CapturedOutput::new();
    let config = SimulationConfig::new(4, 4, 1, 1)
        .with_print(true)
        .with_seed(Seed::new(BLINKER, 0, 0));
    Simulation::new(&config, &dev_null_tracker())
        .with_output(Box::new(output.clone()))
        .run()
        .unwrap();

    let expected = "\
0 [0 0 0 0]
0 [1 1 1 0]
0 [0 0 0 0]
0 [0 0 0 0]
-----------------------
0 [0 1 0 0]
0 [0 1 0 0]
0 [0 1 0 0]
0 [0 0 0 0]
";
    assert_eq!(output.contents(), expected);
}

#[test]
fn nothing_printed_unless_enabled() {
    let output = CapturedOutput::new();
    let config = SimulationConfig::new(10, 8, 4, 2);
    Simulation::new(&config, &dev_null_tracker())
        .with_output(Box::new(output.clone()))
        .run()
        .unwrap();
    assert!(output.contents().is_empty());
}

#[test]
fn timer() {
    let tracker = dev_null_tracker();
    let config = SimulationConfig::new(10, 8, 4, 2).with_timer(true);
    let summary = run_simulation(&config, &tracker).unwrap();
    assert!(summary.elapsed.is_some());

    let config = config.with_timer(false);
    let summary = run_simulation(&config, &tracker).unwrap();
    assert!(summary.elapsed.is_none());
}

#[derive(Default)]
struct Counter {
    generations: AtomicUsize,
    last: AtomicUsize,
    finished: AtomicBool,
}

impl Progress for Counter {
    fn generation_complete(&self, generation: usize) {
        self.generations.fetch_add(1, Ordering::SeqCst);
        self.last.store(generation, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}

#[test]
fn progress_reported_once_per_generation() {
    let counter = Counter::default();
    let config = SimulationConfig::new(10, 8, 12, 4);
    Simulation::new(&config, &dev_null_tracker())
        .with_progress(&counter)
        .run()
        .unwrap();

    assert_eq!(counter.generations.load(Ordering::SeqCst), 12);
    assert_eq!(counter.last.load(Ordering::SeqCst), 12);
    assert!(counter.finished.load(Ordering::SeqCst));
}

#[test]
fn start_banner_logged() {
    let (test_tracker, tracker) = test_init!(Level::Info);
    let config = SimulationConfig::new(10, 8, 16, 2).with_timer(true);
    run_simulation(&config, &tracker).unwrap();

    assert!(contains_match(
        &test_tracker,
        "INFO: start game of life on 10 x 8, 16 generations with 2 workers$"
    ));
    assert!(contains_match(&test_tracker, "INFO: rows 4..8$"));
    assert!(contains_match(&test_tracker, "INFO: time elapsed "));
}
