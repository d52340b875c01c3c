//! The `trajplot` pipeline: load, build the scene, animate.

use std::error::Error;
use std::path::PathBuf;

use traj_data::TrajectoryTable;
use traj_render::{Animator, GifSink, PreviewSink, Scene};

use crate::cli::PlotArgs;

/// What a plot run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    pub entities: usize,
    pub frames: usize,
    pub output: PathBuf,
    pub saved_animation: bool,
}

/// Runs the whole pipeline for `args`.
pub fn run_plot(args: &PlotArgs) -> Result<PlotSummary, Box<dyn Error>> {
    let config = args.resolve_config()?;

    println!("reading data...");
    let table = TrajectoryTable::from_path(&config.data.input)?;
    tracing::info!(
        "Read {} rows from {:?}",
        table.row_count(),
        config.data.input
    );

    println!("plotting...");
    let scene = Scene::from_table(&table, &config)?;
    for track in scene.trajectories().tracks() {
        tracing::debug!("Entity {} ({} points)", track.name, track.len());
    }

    let animator = Animator::new(&config);
    let (frames, output) = if args.save {
        println!("saving...this may take a while");
        let mut sink = GifSink::new(&config.animation.output, &config);
        let frames = animator.run(&scene, &mut sink)?;
        (frames, sink.path().to_path_buf())
    } else {
        let mut sink = PreviewSink::new(&config.animation.preview_output, &config);
        let frames = animator.run(&scene, &mut sink)?;
        (frames, sink.path().to_path_buf())
    };

    println!("wrote {}", output.display());

    Ok(PlotSummary {
        entities: scene.entity_count(),
        frames,
        output,
        saved_animation: args.save,
    })
}
