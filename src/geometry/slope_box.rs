//! Two-point boxes that remember their direction
//!
//! A blade is stored as the pair (wrist, tip). Read as a box the pair spans
//! an axis-aligned region; read as a line it carries the blade's slope. The
//! two corners are never reordered into min/max, since that would throw the
//! slope away.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Slope perturbation used when two blade lines are parallel
pub const PARALLEL_NUDGE: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SlopeBox {
    pub start: Vec3,
    pub end: Vec3,
}

impl SlopeBox {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Signed X extent (end minus start)
    pub fn width(&self) -> f32 {
        self.end.x - self.start.x
    }

    /// Signed Y extent (end minus start)
    pub fn height(&self) -> f32 {
        self.end.y - self.start.y
    }

    /// Slope of the line through both corners. Infinite for a vertical box.
    pub fn slope(&self) -> f32 {
        self.height() / self.width()
    }

    /// Y where the line through both corners crosses X = 0
    pub fn intercept(&self) -> f32 {
        self.start.y - self.start.x * self.slope()
    }

    /// Point midway between the corners
    pub fn midpoint(&self) -> Vec3 {
        self.start.lerp(self.end, 0.5)
    }

    /// Does the box cover `v` in X and Y? Z is ignored.
    ///
    /// Bounds are taken from both corners, so either ordering works. NaN
    /// coordinates are never contained.
    pub fn contains(&self, v: Vec3) -> bool {
        let x_range = self.start.x.min(self.end.x)..=self.start.x.max(self.end.x);
        let y_range = self.start.y.min(self.end.y)..=self.start.y.max(self.end.y);
        x_range.contains(&v.x) && y_range.contains(&v.y)
    }
}

/// Intersection of the infinite lines through two boxes, nudging the second
/// slope by `nudge` when the slopes are equal.
///
/// The nudge keeps the division finite; truly parallel lines therefore
/// "meet" very far away rather than nowhere.
pub fn line_intersection_nudged(a: &SlopeBox, b: &SlopeBox, nudge: f32) -> Vec3 {
    let a_slope = a.slope();
    let a_intercept = a.intercept();
    let mut b_slope = b.slope();
    let b_intercept = b.intercept();
    if a_slope - b_slope == 0.0 {
        b_slope += nudge;
    }
    let x = (b_intercept - a_intercept) / (a_slope - b_slope);
    let y = a_slope * x + a_intercept;
    Vec3::new(x, y, 0.0)
}

/// Intersection of the infinite lines through two boxes
pub fn line_intersection(a: &SlopeBox, b: &SlopeBox) -> Vec3 {
    line_intersection_nudged(a, b, PARALLEL_NUDGE)
}

/// Where two finite segments cross, if they do
pub fn segment_intersection_nudged(a: &SlopeBox, b: &SlopeBox, nudge: f32) -> Option<Vec3> {
    let point = line_intersection_nudged(a, b, nudge);
    if a.contains(point) && b.contains(point) {
        Some(point)
    } else {
        None
    }
}

/// Where two finite segments cross, if they do
pub fn segment_intersection(a: &SlopeBox, b: &SlopeBox) -> Option<Vec3> {
    segment_intersection_nudged(a, b, PARALLEL_NUDGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> SlopeBox {
        SlopeBox::new(Vec3::new(x0, y0, 0.0), Vec3::new(x1, y1, 0.0))
    }

    #[test]
    fn test_slope_keeps_direction() {
        let rising = seg(0.0, 0.0, 10.0, 5.0);
        let falling = seg(0.0, 5.0, 10.0, 0.0);
        assert_eq!(rising.slope(), 0.5);
        assert_eq!(falling.slope(), -0.5);
        assert_eq!(falling.intercept(), 5.0);
    }

    #[test]
    fn test_contains_unordered_corners() {
        let b = seg(10.0, 10.0, 0.0, 0.0);
        assert!(b.contains(Vec3::new(5.0, 5.0, 99.0)));
        assert!(b.contains(Vec3::new(0.0, 10.0, 0.0)));
        assert!(!b.contains(Vec3::new(-1.0, 5.0, 0.0)));
        assert!(!b.contains(Vec3::new(f32::NAN, 5.0, 0.0)));
    }

    #[test]
    fn test_crossing_segments() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        let hit = segment_intersection(&a, &b).expect("segments cross");
        assert!((hit.x - 5.0).abs() < 1e-4);
        assert!((hit.y - 5.0).abs() < 1e-4);
        assert_eq!(hit.z, 0.0);
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // Lines meet at (5, 5) but neither segment reaches it
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(10.0, 0.0, 8.0, 2.0);
        assert!(segment_intersection(&a, &b).is_none());
    }

    #[test]
    fn test_parallel_segments_do_not_cross() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 1.0, 10.0, 11.0);
        assert!(segment_intersection(&a, &b).is_none());
        // The nudged lines meet far away
        let far = line_intersection(&a, &b);
        assert!(far.x.abs() > 1000.0);
    }

    #[test]
    fn test_vertical_blade_never_crosses() {
        let vertical = seg(5.0, 0.0, 5.0, 10.0);
        let other = seg(0.0, 5.0, 10.0, 5.0);
        assert!(segment_intersection(&vertical, &other).is_none());
    }

    #[test]
    fn test_midpoint() {
        let b = seg(0.0, 0.0, 10.0, -4.0);
        assert_eq!(b.midpoint(), Vec3::new(5.0, -2.0, 0.0));
    }
}
