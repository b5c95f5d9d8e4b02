// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Configuration gathered from multiple sources.
//!
//! Every field is optional so that each source only needs to provide the
//! values it wants to change. Sources are merged in this order, later ones
//! taking priority:
//!  - [`Config::default`]
//!  - the TOML file named by `--conf-file`, if any
//!  - environment variables prefixed with `GLIFE_` (e.g. `GLIFE_WORKERS=4`)
//!  - command-line arguments

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use glife_engine::config_error;
use glife_engine::pattern::{PATTERNS, Pattern, Seed};
use glife_engine::simulation::SimulationConfig;
use glife_engine::types::{LifeError, LifeResult};
use glife_track::Tracker;
use glife_track::builder::{TrackerConfig, TrackersConfig, setup_trackers};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`Config::resolve`].
pub const ENV_PREFIX: &str = "GLIFE_";

/// Command-line arguments.
#[derive(Parser, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[command(about = "Game of Life on a torus split across ring-connected workers")]
pub struct Config {
    /// Number of columns in the grid.
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of rows in the grid. Must be divisible by the number of workers.
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of generations to run.
    #[arg(long)]
    pub generations: Option<usize>,

    /// Number of workers. Must be 1 or even.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Print the grid before and after the run.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub print: Option<bool>,

    /// Report the wall-clock time of the run.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub timer: Option<bool>,

    /// Initial pattern placed in the first partition (glider, blinker or
    /// block).
    #[arg(long)]
    pub pattern: Option<String>,

    /// Row of the top-left corner of the initial pattern.
    #[arg(long)]
    pub seed_row: Option<usize>,

    /// Column of the top-left corner of the initial pattern.
    #[arg(long)]
    pub seed_col: Option<usize>,

    /// Run the demonstration scenarios instead of a single simulation.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub scenarios: Option<bool>,

    /// Show a progress bar of the committed generations.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub progress: Option<bool>,

    /// Enable logging to the console.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub stdout: Option<bool>,

    /// Level of log message to display.
    #[arg(long)]
    pub stdout_level: Option<String>,

    /// Set a regular expression for which entities should have logging level
    /// set to `--stdout-level`. Others will have level set to `Error`.
    #[arg(long)]
    pub stdout_filter_regex: Option<String>,

    /// Write the log to this file as well. Left empty, no file is written.
    #[arg(long)]
    pub log_file: Option<String>,

    /// Path to an additional configuration file
    ///
    /// This configuration file must contain TOML, and set values for
    /// fields of this struct.
    #[arg(long)]
    pub conf_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Some(10),
            height: Some(8),
            generations: Some(16),
            workers: Some(2),
            print: Some(false),
            timer: Some(false),
            pattern: Some(String::from("glider")),
            seed_row: Some(0),
            seed_col: Some(0),
            scenarios: Some(false),
            progress: Some(false),
            stdout: Some(false),
            stdout_level: Some(String::from("Info")),
            stdout_filter_regex: Some(String::new()),
            log_file: Some(String::new()),
            conf_file: Some(PathBuf::new()),
        }
    }
}

impl Config {
    /// Parse the command line and merge it with every other source.
    pub fn parse_all_sources() -> LifeResult<Self> {
        Self::resolve(Self::parse())
    }

    /// Merge already parsed command-line arguments with every other source.
    pub fn resolve(cli: Config) -> LifeResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(conf_file) = &cli.conf_file {
            figment = Self::conf_file_merge(figment, conf_file)?;
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment
            .extract()
            .map_err(|e| LifeError::Configuration(e.to_string()))?;
        Ok(config.clap_merge(cli))
    }

    fn conf_file_merge(figment: Figment, conf_file: &Path) -> LifeResult<Figment> {
        if conf_file.as_os_str().is_empty() {
            return Ok(figment);
        }
        if conf_file.is_dir() {
            return config_error!(format!("{} is not a file path", conf_file.display()));
        }
        if !conf_file.exists() {
            return config_error!(format!("{} not found", conf_file.display()));
        }
        Ok(figment.merge(Toml::file(conf_file)))
    }

    /// Override with every value given on the command line.
    fn clap_merge(mut self, cli: Config) -> Self {
        macro_rules! merge {
            ($($field:ident),+) => {
                $(
                    if cli.$field.is_some() {
                        self.$field = cli.$field;
                    }
                )+
            };
        }
        merge!(
            width,
            height,
            generations,
            workers,
            print,
            timer,
            pattern,
            seed_row,
            seed_col,
            scenarios,
            progress,
            stdout,
            stdout_level,
            stdout_filter_regex,
            log_file,
            conf_file
        );
        self
    }

    fn flag(value: Option<bool>) -> bool {
        value.unwrap_or(false)
    }

    #[must_use]
    pub fn scenarios_enabled(&self) -> bool {
        Self::flag(self.scenarios)
    }

    #[must_use]
    pub fn progress_enabled(&self) -> bool {
        Self::flag(self.progress)
    }

    /// The pattern named by `--pattern`.
    pub fn seed_pattern(&self) -> LifeResult<Pattern> {
        let name = self.pattern.as_deref().unwrap_or("glider");
        match Pattern::by_name(name) {
            Some(pattern) => Ok(pattern),
            None => {
                let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
                config_error!(format!(
                    "unknown pattern '{name}' (expected one of {})",
                    known.join(", ")
                ))
            }
        }
    }

    /// Build the configuration of a single simulation.
    pub fn to_simulation_config(&self) -> LifeResult<SimulationConfig> {
        let defaults = Config::default();
        let pick = |value: Option<usize>, default: Option<usize>| value.or(default).unwrap_or(0);

        let seed = Seed::new(
            self.seed_pattern()?,
            pick(self.seed_row, defaults.seed_row),
            pick(self.seed_col, defaults.seed_col),
        );
        Ok(SimulationConfig::new(
            pick(self.width, defaults.width),
            pick(self.height, defaults.height),
            pick(self.generations, defaults.generations),
            pick(self.workers, defaults.workers),
        )
        .with_print(Self::flag(self.print))
        .with_timer(Self::flag(self.timer))
        .with_seed(seed))
    }

    /// The level given by `--stdout-level`.
    pub fn stdout_level(&self) -> LifeResult<log::Level> {
        let level = self.stdout_level.as_deref().unwrap_or("Info");
        log::Level::from_str(level)
            .map_err(|_| LifeError::Configuration(format!("unknown log level '{level}'")))
    }

    /// Set up stdout/file trackers as requested.
    pub fn setup_trackers(&self) -> LifeResult<Tracker> {
        let level = self.stdout_level()?;
        let filter_regex = self.stdout_filter_regex.as_deref().unwrap_or("");
        let log_file = self.log_file.as_deref().unwrap_or("");

        let config = TrackersConfig {
            stdout: TrackerConfig {
                enable: Self::flag(self.stdout),
                level,
                filter_regex,
                file: None,
            },
            log_file: TrackerConfig {
                enable: !log_file.is_empty(),
                level,
                filter_regex,
                file: Some(log_file),
            },
        };
        setup_trackers(&config).map_err(|e| LifeError::Configuration(e.to_string()))
    }
}
