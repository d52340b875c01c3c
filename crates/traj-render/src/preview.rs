//! Still preview of a whole run.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use traj_data::Frame;

use crate::chart::{draw_chart, drawing_error};
use crate::config::PlotConfig;
use crate::scene::{to_chart_coords, Scene};
use crate::sink::FrameSink;
use crate::RenderError;

/// Renders one PNG with every entity's full history.
///
/// Each track is drawn as a line, its initial state as a marker in the
/// initial color, and the position at the last frame seen as a marker in the
/// entity color.
pub struct PreviewSink {
    path: PathBuf,
    config: PlotConfig,
    last_frame: Option<usize>,
}

impl PreviewSink {
    pub fn new(path: impl Into<PathBuf>, config: &PlotConfig) -> Self {
        Self {
            path: path.into(),
            config: config.clone(),
            last_frame: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for PreviewSink {
    fn begin(&mut self, _scene: &Scene) -> Result<(), RenderError> {
        self.last_frame = None;
        Ok(())
    }

    fn draw_frame(&mut self, _scene: &Scene, frame: &Frame<'_>) -> Result<(), RenderError> {
        self.last_frame = Some(frame.index);
        Ok(())
    }

    fn finish(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let last = self.last_frame.ok_or(RenderError::NotStarted)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let size = (self.config.canvas.width, self.config.canvas.height);
        let root = BitMapBackend::new(&self.path, size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let style = &self.config.style;
        let color = style.entity_color();
        let initial = style.initial_marker_color().filled();
        let current = color.filled();
        let marker_size = style.marker_size as i32;

        draw_chart(
            &root,
            scene.bounds(),
            &scene.labels,
            &self.config,
            style.caption.as_deref(),
            |chart| {
                let tracks = scene.trajectories().tracks();
                for track in tracks {
                    chart
                        .draw_series(LineSeries::new(
                            track.points.iter().map(|p| to_chart_coords(*p)),
                            &color,
                        ))
                        .map_err(drawing_error)?;
                }

                chart
                    .draw_series(tracks.iter().filter_map(|t| t.initial()).map(|p| {
                        Circle::new(to_chart_coords(p), marker_size, initial)
                    }))
                    .map_err(drawing_error)?;

                if let Some(frame) = scene.frame(last) {
                    chart
                        .draw_series(frame.positions.iter().map(|(_, p)| {
                            Circle::new(to_chart_coords(*p), marker_size, current)
                        }))
                        .map_err(drawing_error)?;
                }
                Ok(())
            },
        )?;

        root.present().map_err(drawing_error)?;
        tracing::info!("Saved preview to {:?}", self.path);
        Ok(())
    }
}
