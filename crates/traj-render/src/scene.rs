//! Plottable scene built from a trajectory table.

use traj_data::{Bounds3, Frame, Point3, Trajectories, TrajectoryTable};

use crate::config::PlotConfig;
use crate::RenderError;

/// Axis label text.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            z: "z".to_string(),
        }
    }
}

/// Entity trajectories plus the axis box they are drawn in.
#[derive(Debug, Clone)]
pub struct Scene {
    trajectories: Trajectories,
    bounds: Bounds3,
    pub labels: AxisLabels,
}

impl Scene {
    /// Creates a scene, sizing the axes to fit every track.
    pub fn new(trajectories: Trajectories) -> Self {
        let bounds = trajectories.bounds();
        Self {
            trajectories,
            bounds,
            labels: AxisLabels::default(),
        }
    }

    /// Discovers entities in `table` using the configured naming rules.
    pub fn from_table(table: &TrajectoryTable, config: &PlotConfig) -> Result<Self, RenderError> {
        let trajectories = table.trajectories(
            &config.data.entity_pattern,
            Some(config.data.time_column.as_str()),
        )?;
        Ok(Self::new(trajectories))
    }

    pub fn trajectories(&self) -> &Trajectories {
        &self.trajectories
    }

    pub fn bounds(&self) -> &Bounds3 {
        &self.bounds
    }

    pub fn entity_count(&self) -> usize {
        self.trajectories.entity_count()
    }

    pub fn frame_count(&self) -> usize {
        self.trajectories.frame_count()
    }

    pub fn frame(&self, k: usize) -> Option<Frame<'_>> {
        self.trajectories.frame(k)
    }

    /// Fails with [`RenderError::EmptyScene`] when there is nothing to draw.
    pub fn ensure_renderable(&self) -> Result<(), RenderError> {
        if self.entity_count() == 0 || self.frame_count() == 0 {
            return Err(RenderError::EmptyScene {
                entities: self.entity_count(),
                frames: self.frame_count(),
            });
        }
        Ok(())
    }
}

/// Maps a simulation point into chart coordinates.
///
/// The chart's vertical axis is its second coordinate, while simulation
/// data keeps height in `z`.
pub fn to_chart_coords(p: Point3) -> (f64, f64, f64) {
    (p.x, p.z, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use traj_data::fixtures;

    #[test]
    fn test_scene_from_sample_table() {
        let scene = Scene::from_table(&fixtures::sample_table(), &PlotConfig::default()).unwrap();

        assert_eq!(scene.entity_count(), 2);
        assert_eq!(scene.frame_count(), 5);
        assert_eq!(scene.frame(2).unwrap().time, Some(0.2));
        assert_eq!(scene.bounds().x_range(), 0.0..10.0);
        assert!(scene.ensure_renderable().is_ok());
    }

    #[test]
    fn test_scene_without_entities_is_empty() {
        let mut config = PlotConfig::default();
        config.data.entity_pattern = "Missile".to_string();

        let scene = Scene::from_table(&fixtures::sample_table(), &config).unwrap();
        let err = scene.ensure_renderable().unwrap_err();
        assert!(matches!(
            err,
            RenderError::EmptyScene {
                entities: 0,
                frames: 5
            }
        ));
    }

    #[test]
    fn test_height_is_chart_vertical() {
        assert_eq!(to_chart_coords(Point3::new(1.0, 2.0, 3.0)), (1.0, 3.0, 2.0));
    }

    #[test]
    fn test_default_labels() {
        let labels = AxisLabels::default();
        assert_eq!((labels.x.as_str(), labels.y.as_str(), labels.z.as_str()), ("x", "y", "z"));
    }
}
