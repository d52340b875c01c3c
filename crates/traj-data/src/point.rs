//! Positions and axis-aligned bounds.

use std::ops::Range;

use crate::tracks::EntityTrack;

/// A position in simulation space. `z` is the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Axis-aligned box enclosing a set of points.
///
/// Every axis is guaranteed to have a non-empty range, so the bounds can be
/// handed straight to a chart builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    /// The box from (-1, -1, -1) to (1, 1, 1).
    pub fn unit() -> Self {
        Self {
            min: Point3::new(-1.0, -1.0, -1.0),
            max: Point3::new(1.0, 1.0, 1.0),
        }
    }

    /// Computes the bounds of the finite points in `points`.
    ///
    /// Returns [`Bounds3::unit`] when there are no finite points. Axes where
    /// every point shares one value are widened on each side by 1, or by a
    /// relative margin once 1 is below the value's precision.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut finite = points.into_iter().filter(|p| p.is_finite());
        let Some(first) = finite.next() else {
            return Self::unit();
        };

        let (min, max) = finite.fold((*first, *first), |(lo, hi), p| {
            (
                Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });

        let (min_x, max_x) = widen(min.x, max.x);
        let (min_y, max_y) = widen(min.y, max.y);
        let (min_z, max_z) = widen(min.z, max.z);

        Self {
            min: Point3::new(min_x, min_y, min_z),
            max: Point3::new(max_x, max_y, max_z),
        }
    }

    /// Computes the bounds over every point of every track.
    pub fn from_tracks(tracks: &[EntityTrack]) -> Self {
        Self::from_points(tracks.iter().flat_map(|t| t.points.iter()))
    }

    /// Merges two bounds into the smallest box containing both.
    pub fn union(&self, other: &Bounds3) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    pub fn x_range(&self) -> Range<f64> {
        self.min.x..self.max.x
    }

    pub fn y_range(&self) -> Range<f64> {
        self.min.y..self.max.y
    }

    pub fn z_range(&self) -> Range<f64> {
        self.min.z..self.max.z
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::unit()
    }
}

/// Smallest relative margin used around a degenerate axis.
const RELATIVE_PAD: f64 = 1e-9;

fn widen(min: f64, max: f64) -> (f64, f64) {
    if min < max {
        return (min, max);
    }
    let pad = 1.0_f64.max(min.abs() * RELATIVE_PAD);
    let (lo, hi) = (min - pad, max + pad);
    if lo < hi && lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        // Near f64::MAX the pad overflows; fall back to the next float.
        (next_down(min), next_up(max))
    }
}

fn next_up(v: f64) -> f64 {
    if v == f64::MAX {
        return v;
    }
    let bits = v.to_bits();
    if v == 0.0 {
        f64::from_bits(1)
    } else if v > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

fn next_down(v: f64) -> f64 {
    -next_up(-v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = [
            Point3::new(0.0, -2.0, 1.0),
            Point3::new(4.0, 3.0, -1.0),
            Point3::new(2.0, 0.0, 0.5),
        ];
        let bounds = Bounds3::from_points(points.iter());

        assert_eq!(bounds.min, Point3::new(0.0, -2.0, -1.0));
        assert_eq!(bounds.max, Point3::new(4.0, 3.0, 1.0));
    }

    #[test]
    fn test_degenerate_axis_is_widened() {
        let points = [Point3::new(1.0, 5.0, 2.0), Point3::new(3.0, 5.0, 2.0)];
        let bounds = Bounds3::from_points(points.iter());

        assert_eq!(bounds.x_range(), 1.0..3.0);
        assert_eq!(bounds.y_range(), 4.0..6.0);
        assert_eq!(bounds.z_range(), 1.0..3.0);
    }

    #[test]
    fn test_large_constant_axis_is_still_widened() {
        let points = [Point3::new(1e17, 0.0, 0.0), Point3::new(1e17, 1.0, 1.0)];
        let bounds = Bounds3::from_points(points.iter());

        let x = bounds.x_range();
        assert!(x.start < x.end, "{:?}", x);
        assert!(x.start < 1e17 && 1e17 < x.end);
        assert_eq!(bounds.y_range(), 0.0..1.0);
    }

    #[test]
    fn test_extreme_constant_axis_stays_finite() {
        let points = [Point3::new(f64::MAX, -f64::MAX, 0.0)];
        let bounds = Bounds3::from_points(points.iter());

        assert!(bounds.min.x < bounds.max.x);
        assert!(bounds.min.y < bounds.max.y);
        assert!(bounds.min.is_finite() && bounds.max.is_finite());
    }

    #[test]
    fn test_empty_points_give_unit_box() {
        let bounds = Bounds3::from_points(std::iter::empty());
        assert_eq!(bounds, Bounds3::unit());
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let points = [
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, f64::INFINITY, 3.0),
            Point3::new(-1.0, -1.0, -1.0),
        ];
        let bounds = Bounds3::from_points(points.iter());

        assert_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_union() {
        let a = Bounds3 {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(1.0, 1.0, 1.0),
        };
        let b = Bounds3 {
            min: Point3::new(-1.0, 0.5, 0.0),
            max: Point3::new(0.5, 2.0, 3.0),
        };
        let merged = a.union(&b);

        assert_eq!(merged.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(merged.max, Point3::new(1.0, 2.0, 3.0));
    }
}
