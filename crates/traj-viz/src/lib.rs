//! Command-line front ends for trajectory plotting.
//!
//! - `trajplot`: animate the entities of a results CSV
//! - `trajdemo`: echo a CSV and draw a synthetic helix plot

pub mod cli;
pub mod demo;
pub mod logging;
pub mod plot;

pub use cli::{DemoArgs, PlotArgs};
pub use demo::run_demo;
pub use logging::init_tracing;
pub use plot::{run_plot, PlotSummary};
