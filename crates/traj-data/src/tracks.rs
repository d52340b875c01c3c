//! Per-entity tracks and per-step frames.

use crate::point::{Bounds3, Point3};

/// Position history of one entity, one point per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTrack {
    pub name: String,
    pub points: Vec<Point3>,
}

impl EntityTrack {
    /// Creates a new track.
    pub fn new(name: impl Into<String>, points: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position at the first time step.
    pub fn initial(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Position at the last time step.
    pub fn last(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    /// Position at step `k`.
    pub fn position(&self, k: usize) -> Option<Point3> {
        self.points.get(k).copied()
    }
}

/// Positions of every entity at a single time step.
///
/// Only the current step is carried, not the history leading up to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// Row index in the table
    pub index: usize,
    /// Simulation time of this row, when the table has a time column
    pub time: Option<f64>,
    /// Entity name and position, in discovery order
    pub positions: Vec<(&'a str, Point3)>,
}

impl Frame<'_> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// All entity tracks of a run, framed over the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectories {
    tracks: Vec<EntityTrack>,
    time: Option<Vec<f64>>,
    frames: usize,
}

impl Trajectories {
    /// Creates trajectories spanning `frames` time steps.
    pub fn new(tracks: Vec<EntityTrack>, time: Option<Vec<f64>>, frames: usize) -> Self {
        Self {
            tracks,
            time,
            frames,
        }
    }

    pub fn tracks(&self) -> &[EntityTrack] {
        &self.tracks
    }

    pub fn entity_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of frames, one per table row.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn time(&self) -> Option<&[f64]> {
        self.time.as_deref()
    }

    /// Positions of every entity at step `k`.
    pub fn frame(&self, k: usize) -> Option<Frame<'_>> {
        if k >= self.frames {
            return None;
        }

        let positions = self
            .tracks
            .iter()
            .filter_map(|t| t.position(k).map(|p| (t.name.as_str(), p)))
            .collect();

        Some(Frame {
            index: k,
            time: self.time.as_ref().and_then(|t| t.get(k).copied()),
            positions,
        })
    }

    /// Iterates over every frame in time order.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> + '_ {
        (0..self.frames).filter_map(move |k| self.frame(k))
    }

    /// Bounds of every point of every track.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_tracks(&self.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entities() -> Trajectories {
        let a = EntityTrack::new(
            "Entity0",
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
        );
        let b = EntityTrack::new(
            "Entity1",
            vec![
                Point3::new(0.0, 5.0, 1.0),
                Point3::new(0.0, 4.0, 1.0),
                Point3::new(0.0, 3.0, 1.0),
            ],
        );
        Trajectories::new(vec![a, b], Some(vec![0.0, 0.5, 1.0]), 3)
    }

    #[test]
    fn test_frame_holds_current_positions_only() {
        let trajectories = two_entities();
        let frame = trajectories.frame(1).unwrap();

        assert_eq!(frame.index, 1);
        assert_eq!(frame.time, Some(0.5));
        assert_eq!(frame.len(), 2);
        assert_eq!(
            frame.positions,
            vec![
                ("Entity0", Point3::new(1.0, 0.0, 0.0)),
                ("Entity1", Point3::new(0.0, 4.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_frames_cover_every_row() {
        let trajectories = two_entities();
        let frames: Vec<_> = trajectories.frames().collect();

        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| f.len() == 2));
        assert_eq!(
            frames.iter().map(|f| f.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_frame_out_of_range() {
        assert!(two_entities().frame(3).is_none());
    }

    #[test]
    fn test_track_endpoints() {
        let trajectories = two_entities();
        let track = &trajectories.tracks()[1];

        assert_eq!(track.initial(), Some(Point3::new(0.0, 5.0, 1.0)));
        assert_eq!(track.last(), Some(Point3::new(0.0, 3.0, 1.0)));
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn test_bounds() {
        let bounds = two_entities().bounds();

        assert_eq!(bounds.x_range(), 0.0..2.0);
        assert_eq!(bounds.y_range(), 0.0..5.0);
        assert_eq!(bounds.z_range(), 0.0..1.0);
    }

    #[test]
    fn test_untimed_frames() {
        let track = EntityTrack::new("Entity0", vec![Point3::default()]);
        let trajectories = Trajectories::new(vec![track], None, 1);

        assert_eq!(trajectories.frame(0).unwrap().time, None);
    }
}
