//! Synthetic 3D demo plot
//!
//! Run with: cargo run -p traj-viz --bin trajdemo -- --input test.csv

use clap::Parser;
use traj_viz::{init_tracing, run_demo, DemoArgs};

fn main() {
    init_tracing();
    let args = DemoArgs::parse();

    if let Err(e) = run_demo(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
