//! Trajectory Animation
//!
//! Run with: cargo run -p traj-viz --bin trajplot
//!
//! Examples:
//!   cargo run -p traj-viz --bin trajplot -- -s
//!   cargo run -p traj-viz --bin trajplot -- --input runs/cw.csv --config plot.toml

use clap::Parser;
use traj_viz::{init_tracing, run_plot, PlotArgs};

fn main() {
    init_tracing();
    let args = PlotArgs::parse();

    if let Err(e) = run_plot(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
