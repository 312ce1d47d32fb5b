//! Point, line and angle helpers

use glam::{Vec2, Vec3};

/// Signed double-area of triangle `a`,`b`,`c` in the XY plane.
///
/// Positive or negative depending on which side of the line a->b point `c`
/// lies; zero when collinear.
pub fn side(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// -1, 0 or +1. Unlike `f32::signum`, zero (and NaN) map to 0.
fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Is `p` strictly inside the quad whose corners are given in order?
///
/// Every edge must see `p` on the same side. A point on an edge, or a
/// self-intersecting quad, answers false.
pub fn point_in_quad(p: Vec3, c1: Vec3, c2: Vec3, c3: Vec3, c4: Vec3) -> bool {
    let total = sign(side(c1, c2, p))
        + sign(side(c2, c3, p))
        + sign(side(c3, c4, p))
        + sign(side(c4, c1, p));
    total.abs() == 4
}

/// Angle in degrees of the vector `from` -> `to`.
///
/// `atan` of the slope, moved by 180 degrees into the left half-plane when
/// the target lies left of and above/below `from`, then wrapped once by 360.
/// A target directly to the left (dy == 0) keeps the unshifted angle.
pub fn angle_from(from: Vec3, to: Vec3) -> f32 {
    let mut angle = ((from.y - to.y) / (from.x - to.x)).atan().to_degrees();
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx < 0.0 && dy > 0.0 {
        angle += 180.0;
    } else if dx < 0.0 && dy < 0.0 {
        angle -= 180.0;
    }

    if angle > 359.5 {
        angle -= 360.0;
    } else if angle < -359.5 {
        angle += 360.0;
    }
    angle
}

/// Stretch a stick vector so diagonals reach full deflection.
///
/// A round thumbstick gate only reaches ~0.7 on each axis at a diagonal;
/// this rescales so the larger axis carries the (boosted) Euclidean length.
pub fn clamp_radial(v: Vec2) -> Vec2 {
    let reach = (v.length() * 1.25).min(1.0);
    let dominant = v.x.abs().max(v.y.abs()).max(0.01);
    v * (reach / dominant)
}

/// Linear interpolation; `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec3 {
        Vec3::new(x, y, 0.0)
    }

    #[test]
    fn test_side_sign() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);
        assert!(side(a, b, p(5.0, 3.0)) > 0.0);
        assert!(side(a, b, p(5.0, -3.0)) < 0.0);
        assert_eq!(side(a, b, p(20.0, 0.0)), 0.0);
    }

    #[test]
    fn test_side_ignores_z() {
        let a = Vec3::new(0.0, 0.0, 100.0);
        let b = Vec3::new(10.0, 0.0, -50.0);
        assert_eq!(side(a, b, Vec3::new(5.0, 3.0, 7.0)), side(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 3.0)));
    }

    #[test]
    fn test_point_in_quad() {
        let (c1, c2, c3, c4) = (p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0));
        assert!(point_in_quad(p(5.0, 5.0), c1, c2, c3, c4));
        // Winding does not matter, only consistency
        assert!(point_in_quad(p(5.0, 5.0), c4, c3, c2, c1));
        assert!(!point_in_quad(p(15.0, 5.0), c1, c2, c3, c4));
        // On an edge is not strictly inside
        assert!(!point_in_quad(p(5.0, 0.0), c1, c2, c3, c4));
    }

    #[test]
    fn test_point_in_degenerate_quad() {
        // All corners collinear: every side is zero
        let q = p(0.0, 0.0);
        assert!(!point_in_quad(p(1.0, 1.0), q, q, q, q));
    }

    #[test]
    fn test_angle_quadrants() {
        let o = p(0.0, 0.0);
        assert!((angle_from(o, p(1.0, 1.0)) - 45.0).abs() < 1e-4);
        assert!((angle_from(o, p(1.0, -1.0)) + 45.0).abs() < 1e-4);
        assert!((angle_from(o, p(-1.0, 1.0)) - 135.0).abs() < 1e-4);
        assert!((angle_from(o, p(-1.0, -1.0)) + 135.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_straight_left_is_not_shifted() {
        let angle = angle_from(p(0.0, 0.0), p(-5.0, 0.0));
        assert!(angle.abs() < 1e-4);
    }

    #[test]
    fn test_clamp_radial_diagonal_reaches_full() {
        let d = std::f32::consts::FRAC_1_SQRT_2;
        let v = clamp_radial(Vec2::new(d, d));
        assert!((v.x - 1.0).abs() < 1e-5);
        assert!((v.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_radial_small_and_zero() {
        let v = clamp_radial(Vec2::new(0.4, 0.0));
        assert!((v.x - 0.5).abs() < 1e-5);
        assert_eq!(clamp_radial(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    }
}
