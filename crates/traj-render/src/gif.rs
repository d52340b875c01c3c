//! Animated GIF output.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use traj_data::Frame;

use crate::chart::{draw_chart, drawing_error, frame_caption};
use crate::config::PlotConfig;
use crate::scene::{to_chart_coords, Scene};
use crate::sink::FrameSink;
use crate::RenderError;

/// Writes each frame as one image of an animated GIF.
///
/// Frames show the current position of every entity only, not the path
/// leading up to it.
pub struct GifSink {
    path: PathBuf,
    config: PlotConfig,
    area: Option<DrawingArea<BitMapBackend<'static>, Shift>>,
    frames_written: usize,
}

impl GifSink {
    pub fn new(path: impl Into<PathBuf>, config: &PlotConfig) -> Self {
        Self {
            path: path.into(),
            config: config.clone(),
            area: None,
            frames_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, _scene: &Scene) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let size = (self.config.canvas.width, self.config.canvas.height);
        let backend = BitMapBackend::gif(&self.path, size, self.config.frame_delay_ms())
            .map_err(drawing_error)?;

        tracing::debug!(
            "Writing {:?} at {} ms per frame",
            self.path,
            self.config.frame_delay_ms()
        );

        self.area = Some(backend.into_drawing_area());
        self.frames_written = 0;
        Ok(())
    }

    fn draw_frame(&mut self, scene: &Scene, frame: &Frame<'_>) -> Result<(), RenderError> {
        let area = self.area.as_ref().ok_or(RenderError::NotStarted)?;

        area.fill(&WHITE).map_err(drawing_error)?;

        let caption = frame_caption(&self.config, frame.time);
        let marker = self.config.style.entity_color().filled();
        let size = self.config.style.marker_size as i32;

        draw_chart(
            area,
            scene.bounds(),
            &scene.labels,
            &self.config,
            caption.as_deref(),
            |chart| {
                chart
                    .draw_series(
                        frame
                            .positions
                            .iter()
                            .map(|(_, p)| Circle::new(to_chart_coords(*p), size, marker)),
                    )
                    .map_err(drawing_error)?;
                Ok(())
            },
        )?;

        area.present().map_err(drawing_error)?;
        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self, _scene: &Scene) -> Result<(), RenderError> {
        // Dropping the backend writes the GIF trailer.
        if self.area.take().is_none() {
            return Err(RenderError::NotStarted);
        }
        tracing::info!("Saved {} frames to {:?}", self.frames_written, self.path);
        Ok(())
    }
}
