// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The demonstration scenarios.
//!
//! A small universe of 10x8 cells run for 16 generations (4 moves of the
//! glider) with 1 and then 2 workers, printed. Then a larger universe of
//! 1000x1000 cells run for 10 generations with 1, 2 and 4 workers, timed.

use glife_engine::simulation::SimulationConfig;

/// The scenarios, in the order they are run.
#[must_use]
pub fn scenarios() -> Vec<SimulationConfig> {
    let small = [1, 2]
        .into_iter()
        .map(|workers| SimulationConfig::new(10, 8, 16, workers).with_print(true));
    let large = [1, 2, 4]
        .into_iter()
        .map(|workers| SimulationConfig::new(1000, 1000, 10, workers).with_timer(true));
    small.chain(large).collect()
}

#[cfg(test)]
mod tests {
    use glife_engine::simulation::{Simulation, run_simulation};
    use glife_engine::test_helpers::CapturedOutput;
    use glife_track::tracker::dev_null_tracker;

    use super::*;

    #[test]
    fn scenario_list() {
        let all = scenarios();
        assert_eq!(all.len(), 5);
        assert!(all[..2].iter().all(|c| c.print && !c.timer));
        assert!(all[2..].iter().all(|c| c.timer && !c.print));
        let workers: Vec<usize> = all.iter().map(|c| c.workers).collect();
        assert_eq!(workers, vec![1, 2, 1, 2, 4]);
    }

    #[test]
    fn small_scenarios_agree() {
        let tracker = dev_null_tracker();
        let mut dumps = Vec::new();
        for config in &scenarios()[..2] {
            let output = CapturedOutput::new();
            let summary = Simulation::new(config, &tracker)
                .with_output(Box::new(output.clone()))
                .run()
                .unwrap();
            assert_eq!(summary.live_cells(), 5);
            dumps.push(summary.cells);
        }
        assert_eq!(dumps[0], dumps[1]);

        let again = run_simulation(&scenarios()[1].clone().with_print(false), &tracker).unwrap();
        assert_eq!(again.cells, dumps[1]);
    }
}
