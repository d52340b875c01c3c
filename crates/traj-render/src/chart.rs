//! Shared 3D chart setup for every renderer.

use plotters::coord::cartesian::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use traj_data::{Bounds3, Point3};

use crate::config::PlotConfig;
use crate::scene::{to_chart_coords, AxisLabels};
use crate::RenderError;

pub(crate) type Chart3d<'a, DB> =
    ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

const FONT: &str = "sans-serif";

/// Converts any backend error into a [`RenderError`].
pub(crate) fn drawing_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Builds a 3D chart over `bounds` on `root` and hands it to `content`.
///
/// Axes, grid and axis labels are drawn first when enabled; `content` draws
/// the series on top.
pub(crate) fn draw_chart<DB, F>(
    root: &DrawingArea<DB, Shift>,
    bounds: &Bounds3,
    labels: &AxisLabels,
    config: &PlotConfig,
    caption: Option<&str>,
    content: F,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    F: FnOnce(&mut Chart3d<'_, DB>) -> Result<(), RenderError>,
{
    let mut builder = ChartBuilder::on(root);
    builder.margin(10);
    if let Some(text) = caption {
        builder.caption(text, (FONT, 20));
    }

    // Chart axes are (x, height, y).
    let mut chart = builder
        .build_cartesian_3d(bounds.x_range(), bounds.z_range(), bounds.y_range())
        .map_err(drawing_error)?;

    let canvas = &config.canvas;
    chart.with_projection(|mut pb| {
        pb.yaw = canvas.yaw;
        pb.pitch = canvas.pitch;
        pb.scale = canvas.scale;
        pb.into_matrix()
    });

    if config.style.show_axes {
        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.15))
            .max_light_lines(3)
            .draw()
            .map_err(drawing_error)?;

        let label_style = (FONT, 16).into_font().color(&BLACK);
        let corner = bounds.min;
        let ends = [
            (labels.x.as_str(), Point3::new(bounds.max.x, corner.y, corner.z)),
            (labels.y.as_str(), Point3::new(corner.x, bounds.max.y, corner.z)),
            (labels.z.as_str(), Point3::new(corner.x, corner.y, bounds.max.z)),
        ];
        chart
            .draw_series(ends.iter().map(|(text, at)| {
                Text::new(text.to_string(), to_chart_coords(*at), label_style.clone())
            }))
            .map_err(drawing_error)?;
    }

    content(&mut chart)
}

/// Frame caption: the fixed caption and/or the simulation time.
pub(crate) fn frame_caption(config: &PlotConfig, time: Option<f64>) -> Option<String> {
    let time = time.filter(|_| config.style.show_time);
    match (&config.style.caption, time) {
        (Some(caption), Some(t)) => Some(format!("{}  t = {:.2}", caption, t)),
        (Some(caption), None) => Some(caption.clone()),
        (None, Some(t)) => Some(format!("t = {:.2}", t)),
        (None, None) => None,
    }
}
