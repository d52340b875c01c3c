//! Trajectory rendering: 3D charts, animations and previews.
//!
//! Sits between the data layer and the command-line tools. A [`Scene`] is
//! built from a trajectory table, then an [`Animator`] pushes it frame by
//! frame into a [`FrameSink`].
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐  TrajectoryTable  ┌───────┐   Frame   ┌───────────┐
//! │ traj-data │ ────────────────▶ │ Scene │ ────────▶ │ FrameSink │ ──▶ .gif / .png
//! └───────────┘                   └───────┘  Animator └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: TOML plot configuration
//! - [`scene`]: entity tracks plus axis bounds
//! - [`sink`]: the frame sink trait and the animation driver
//! - [`gif`]: animated GIF output
//! - [`preview`]: still PNG of the full run
//! - [`demo`]: synthetic helix scatter plot

mod chart;
pub mod config;
pub mod demo;
pub mod gif;
pub mod preview;
pub mod scene;
pub mod sink;

pub use config::{
    default_config_toml, AnimationConfig, CanvasConfig, ConfigError, DataConfig, PlotConfig,
    StyleConfig,
};
pub use demo::{render_demo, DemoScene};
pub use gif::GifSink;
pub use preview::PreviewSink;
pub use scene::{to_chart_coords, AxisLabels, Scene};
pub use sink::{Animator, FrameSink};

use traj_data::TableError;

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The trajectory table could not be turned into a scene
    #[error("Table error: {0}")]
    Table(#[from] TableError),
    /// The plotting backend failed
    #[error("Drawing error: {0}")]
    Drawing(String),
    /// I/O error preparing the output location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Nothing to draw
    #[error("nothing to plot: {entities} entities over {frames} frames")]
    EmptyScene { entities: usize, frames: usize },
    /// A frame arrived before the sink was started
    #[error("frame sink used before begin()")]
    NotStarted,
}
