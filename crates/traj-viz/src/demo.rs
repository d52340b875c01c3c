//! The `trajdemo` pipeline: echo the CSV, then draw the helix demo.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};

use traj_data::echo_rows;
use traj_render::{render_demo, DemoScene};

use crate::cli::DemoArgs;

/// Echoes `args.input` to stdout and renders the demo plot.
///
/// The echoed data does not feed the plot. Fails before plotting anything
/// when the input cannot be opened. Returns the number of rows echoed.
pub fn run_demo(args: &DemoArgs) -> Result<usize, Box<dyn Error>> {
    let config = args.resolve_config()?;

    println!("plotting trajectory in world frame");

    let file = File::open(&args.input).map_err(|e| {
        tracing::error!("Could not open {:?}: {}", args.input, e);
        e
    })?;
    let stdout = io::stdout();
    let rows = echo_rows(BufReader::new(file), stdout.lock())?;
    tracing::debug!("Echoed {} rows from {:?}", rows, args.input);

    let scene = DemoScene::generate(args.seed);
    render_demo(&scene, &args.output, &config)?;
    println!("wrote {}", args.output.display());

    Ok(rows)
}
