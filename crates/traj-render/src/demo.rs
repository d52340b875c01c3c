//! Synthetic helix demo plot.
//!
//! A gray helix `x = sin z, y = cos z` for `z` in `[0, 15]`, plus a cloud of
//! points scattered around it and shaded by height.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use traj_data::{Bounds3, Point3};

use crate::chart::{draw_chart, drawing_error};
use crate::config::PlotConfig;
use crate::scene::{to_chart_coords, AxisLabels};
use crate::RenderError;

/// Number of samples along the helix line.
pub const HELIX_SAMPLES: usize = 1000;

/// Number of scattered points.
pub const SCATTER_POINTS: usize = 100;

/// Height of the helix.
pub const HELIX_HEIGHT: f64 = 15.0;

/// Standard deviation of the horizontal scatter noise.
pub const SCATTER_NOISE: f64 = 0.1;

const HELIX_GRAY: RGBColor = RGBColor(128, 128, 128);

/// Generated helix and scatter points.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoScene {
    pub helix: Vec<Point3>,
    pub scatter: Vec<Point3>,
}

impl DemoScene {
    /// Generates the demo data; the same seed always yields the same scene.
    pub fn generate(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let helix = linspace(0.0, HELIX_HEIGHT, HELIX_SAMPLES)
            .map(|z| Point3::new(z.sin(), z.cos(), z))
            .collect();

        let scatter = (0..SCATTER_POINTS)
            .map(|_| {
                let z = HELIX_HEIGHT * rng.gen::<f64>();
                let dx: f64 = rng.sample(StandardNormal);
                let dy: f64 = rng.sample(StandardNormal);
                Point3::new(z.sin() + SCATTER_NOISE * dx, z.cos() + SCATTER_NOISE * dy, z)
            })
            .collect();

        Self { helix, scatter }
    }

    /// Bounds over the helix and the scatter cloud.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(&self.helix).union(&self.scatter_bounds())
    }

    /// Bounds of the scatter cloud alone; its heights set the shading range.
    pub fn scatter_bounds(&self) -> Bounds3 {
        Bounds3::from_points(&self.scatter)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

/// Light-to-dark green ramp; `t` is clamped to `[0, 1]`.
pub fn greens(t: f64) -> RGBColor {
    const LIGHT: (f64, f64, f64) = (247.0, 252.0, 245.0);
    const DARK: (f64, f64, f64) = (0.0, 68.0, 27.0);

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(
        lerp(LIGHT.0, DARK.0),
        lerp(LIGHT.1, DARK.1),
        lerp(LIGHT.2, DARK.2),
    )
}

/// Draws the demo scene to a PNG at `path`.
pub fn render_demo(scene: &DemoScene, path: &Path, config: &PlotConfig) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let bounds = scene.bounds();
    let size = (config.canvas.width, config.canvas.height);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let marker_size = config.style.marker_size as i32;
    let shading = scene.scatter_bounds();
    let (z_min, z_max) = (shading.min.z, shading.max.z);

    draw_chart(
        &root,
        &bounds,
        &AxisLabels::default(),
        config,
        config.style.caption.as_deref(),
        |chart| {
            chart
                .draw_series(LineSeries::new(
                    scene.helix.iter().map(|p| to_chart_coords(*p)),
                    &HELIX_GRAY,
                ))
                .map_err(drawing_error)?;

            chart
                .draw_series(scene.scatter.iter().map(|p| {
                    let shade = greens((p.z - z_min) / (z_max - z_min));
                    Circle::new(to_chart_coords(*p), marker_size, shade.filled())
                }))
                .map_err(drawing_error)?;
            Ok(())
        },
    )?;

    root.present().map_err(drawing_error)?;
    tracing::info!(
        "Saved demo plot ({} helix samples, {} points) to {:?}",
        scene.helix.len(),
        scene.scatter.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = linspace(0.0, 15.0, 1000).collect();

        assert_eq!(values.len(), 1000);
        assert_eq!(values[0], 0.0);
        assert!((values[999] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_single_sample() {
        let values: Vec<f64> = linspace(2.0, 5.0, 1).collect();
        assert_eq!(values, vec![2.0]);
    }

    #[test]
    fn test_helix_lies_on_unit_cylinder() {
        let scene = DemoScene::generate(42);

        assert_eq!(scene.helix.len(), HELIX_SAMPLES);
        assert!(scene
            .helix
            .iter()
            .all(|p| ((p.x * p.x + p.y * p.y) - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_scatter_stays_near_helix() {
        let scene = DemoScene::generate(42);

        assert_eq!(scene.scatter.len(), SCATTER_POINTS);
        for p in &scene.scatter {
            assert!((0.0..HELIX_HEIGHT).contains(&p.z));
            // Ten standard deviations is far outside 100 normal draws.
            assert!((p.x - p.z.sin()).abs() < 10.0 * SCATTER_NOISE);
            assert!((p.y - p.z.cos()).abs() < 10.0 * SCATTER_NOISE);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(DemoScene::generate(7), DemoScene::generate(7));
        assert_ne!(DemoScene::generate(7).scatter, DemoScene::generate(8).scatter);
    }

    #[test]
    fn test_bounds_cover_helix_and_scatter() {
        let scene = DemoScene::generate(42);
        let bounds = scene.bounds();
        let scatter = scene.scatter_bounds();

        assert_eq!(bounds.min.z, 0.0);
        assert!((bounds.max.z - HELIX_HEIGHT).abs() < 1e-12);
        assert!(bounds.min.x <= scatter.min.x && scatter.max.x <= bounds.max.x);
        assert!(bounds.min.y <= scatter.min.y && scatter.max.y <= bounds.max.y);
    }

    #[test]
    fn test_shading_uses_scatter_heights_only() {
        let scene = DemoScene::generate(42);
        let scatter = scene.scatter_bounds();
        let lowest = scene.scatter.iter().map(|p| p.z).fold(f64::INFINITY, f64::min);
        let highest = scene.scatter.iter().map(|p| p.z).fold(f64::NEG_INFINITY, f64::max);

        assert_eq!(scatter.min.z, lowest);
        assert_eq!(scatter.max.z, highest);
        assert!(scatter.min.z > scene.bounds().min.z);
    }

    #[test]
    fn test_greens_ramp() {
        assert_eq!(greens(0.0), RGBColor(247, 252, 245));
        assert_eq!(greens(1.0), RGBColor(0, 68, 27));
        assert_eq!(greens(-3.0), greens(0.0));
        assert_eq!(greens(f64::NAN), greens(0.0));

        let mid = greens(0.5);
        assert!(mid.1 < 252 && mid.1 > 68);
    }
}
