//! Frame sinks and the animation driver.

use traj_data::Frame;

use crate::config::PlotConfig;
use crate::scene::Scene;
use crate::RenderError;

/// Destination for rendered animation frames.
///
/// [`Animator::run`] calls `begin` once, `draw_frame` once per time step in
/// order, then `finish` once.
pub trait FrameSink {
    /// Prepares the sink for a scene.
    fn begin(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let _ = scene;
        Ok(())
    }

    /// Draws one time step.
    fn draw_frame(&mut self, scene: &Scene, frame: &Frame<'_>) -> Result<(), RenderError>;

    /// Flushes whatever the sink buffered.
    fn finish(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let _ = scene;
        Ok(())
    }
}

/// Drives a scene frame by frame into a [`FrameSink`].
#[derive(Debug, Clone)]
pub struct Animator {
    progress_every: usize,
}

impl Animator {
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            progress_every: config.animation.progress_every.max(1),
        }
    }

    /// Renders every frame of `scene` into `sink`.
    ///
    /// Returns the number of frames drawn, which equals the scene's row
    /// count.
    pub fn run<S: FrameSink + ?Sized>(
        &self,
        scene: &Scene,
        sink: &mut S,
    ) -> Result<usize, RenderError> {
        scene.ensure_renderable()?;

        let total = scene.frame_count();
        tracing::info!(
            "Animating {} entities over {} frames",
            scene.entity_count(),
            total
        );

        sink.begin(scene)?;

        let mut drawn = 0;
        for frame in scene.trajectories().frames() {
            sink.draw_frame(scene, &frame)?;
            drawn += 1;
            if self.reports_progress(drawn) {
                tracing::info!("Rendered frame {} / {}", drawn, total);
            }
        }

        sink.finish(scene)?;
        tracing::debug!("Animation complete ({} frames)", drawn);

        Ok(drawn)
    }

    /// Whether a progress line is logged after `drawn` frames.
    fn reports_progress(&self, drawn: usize) -> bool {
        drawn > 0 && drawn % self.progress_every == 0
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(&PlotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traj_data::fixtures;

    /// Counts calls and fails on a chosen frame.
    #[derive(Default)]
    struct CountingSink {
        began: usize,
        drawn: Vec<usize>,
        finished: usize,
        fail_at: Option<usize>,
    }

    impl FrameSink for CountingSink {
        fn begin(&mut self, _scene: &Scene) -> Result<(), RenderError> {
            self.began += 1;
            Ok(())
        }

        fn draw_frame(&mut self, _scene: &Scene, frame: &Frame<'_>) -> Result<(), RenderError> {
            if self.fail_at == Some(frame.index) {
                return Err(RenderError::Drawing("backend closed".to_string()));
            }
            self.drawn.push(frame.index);
            Ok(())
        }

        fn finish(&mut self, _scene: &Scene) -> Result<(), RenderError> {
            self.finished += 1;
            Ok(())
        }
    }

    fn animator(progress_every: usize) -> Animator {
        let mut config = PlotConfig::default();
        config.animation.progress_every = progress_every;
        Animator::new(&config)
    }

    fn sample_scene() -> Scene {
        Scene::from_table(&fixtures::sample_table(), &PlotConfig::default()).unwrap()
    }

    #[test]
    fn test_progress_cadence() {
        let every_two = animator(2);
        let reported: Vec<usize> = (1..=7).filter(|&n| every_two.reports_progress(n)).collect();
        assert_eq!(reported, vec![2, 4, 6]);
        assert!(!every_two.reports_progress(0));
    }

    #[test]
    fn test_zero_progress_interval_reports_every_frame() {
        let every = animator(0);
        assert!((1..=5).all(|n| every.reports_progress(n)));
    }

    #[test]
    fn test_default_reports_every_hundred_frames() {
        let animator = Animator::default();
        assert!(!animator.reports_progress(99));
        assert!(animator.reports_progress(100));
        assert!(animator.reports_progress(200));
    }

    #[test]
    fn test_run_calls_sink_in_order() {
        let scene = sample_scene();
        let mut sink = CountingSink::default();

        let drawn = animator(2).run(&scene, &mut sink).unwrap();

        assert_eq!(drawn, scene.frame_count());
        assert_eq!(sink.began, 1);
        assert_eq!(sink.drawn, (0..scene.frame_count()).collect::<Vec<_>>());
        assert_eq!(sink.finished, 1);
    }

    #[test]
    fn test_sink_error_stops_before_finish() {
        let scene = sample_scene();
        let mut sink = CountingSink {
            fail_at: Some(2),
            ..Default::default()
        };

        let err = Animator::default().run(&scene, &mut sink).unwrap_err();

        assert!(matches!(err, RenderError::Drawing(_)));
        assert_eq!(sink.drawn, vec![0, 1]);
        assert_eq!(sink.finished, 0);
    }
}
