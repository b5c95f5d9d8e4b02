// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Run the partitioned Game of Life.
//!
//! See `lib.rs` for details.

use glife_engine::simulation::{Simulation, SimulationConfig};
use glife_engine::traits::Progress;
use glife_engine::types::LifeResult;
use glife_sim::config::Config;
use glife_sim::scenarios::scenarios;
use glife_track::entity::toplevel;
use glife_track::{Track, Tracker, error, info};
use indicatif::ProgressBar;

/// Advance a progress bar once per committed generation.
struct GenerationBar(ProgressBar);

impl Progress for GenerationBar {
    fn generation_complete(&self, _generation: usize) {
        self.0.inc(1);
    }

    fn finish(&self) {
        self.0.finish();
    }
}

fn run(config: &SimulationConfig, tracker: &Tracker, show_progress: bool) -> LifeResult<()> {
    let bar = GenerationBar(ProgressBar::new(config.generations as u64));
    let simulation = Simulation::new(config, tracker);
    let summary = if show_progress {
        simulation.with_progress(&bar).run()?
    } else {
        simulation.run()?
    };

    if let Some(elapsed) = summary.elapsed {
        println!("{elapsed:?}");
    }
    Ok(())
}

fn main() -> LifeResult<()> {
    let config = Config::parse_all_sources()?;
    let tracker = config.setup_trackers()?;
    let top = toplevel(&tracker, "glife-sim");

    let to_run = if config.scenarios_enabled() {
        scenarios()
    } else {
        vec![config.to_simulation_config()?]
    };

    for sim_config in &to_run {
        if let Err(e) = run(sim_config, &tracker, config.progress_enabled()) {
            error!(top ; "{e}");
            tracker.shutdown();
            return Err(e);
        }
    }

    info!(top ; "Pass ({} simulations)", to_run.len());
    tracker.shutdown();
    Ok(())
}
