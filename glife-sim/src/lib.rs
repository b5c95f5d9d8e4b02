// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Run the partitioned Game of Life from the command line.
//!
//! A single simulation is described by a [`Config`](crate::config::Config)
//! gathered from defaults, an optional TOML file, `GLIFE_` environment
//! variables and the command line, in increasing order of priority.
//!
//! # Examples
//!
//! The small universe (a glider on a 10x8 torus) with two workers, printing
//! the grid before and after:
//! ```txt
//! cargo run --bin glife-sim --release -- --width 10 --height 8 --generations 16 --workers 2 --print
//! ```
//!
//! A larger universe with timing and a progress bar:
//! ```txt
//! cargo run --bin glife-sim --release -- --width 1000 --height 1000 --generations 10 --workers 4 --timer --progress
//! ```
//!
//! The demonstration scenarios:
//! ```txt
//! cargo run --bin glife-sim --release -- --scenarios
//! ```

pub mod config;
pub mod scenarios;
