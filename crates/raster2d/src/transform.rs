//! Planar affine maps for editing point lists.
//!
//! `Affine2` is `x ↦ M x + t`. The editor operations (move, rotate, scale)
//! act about a chosen center, usually the [`centroid`] of the selection.

use nalgebra::{Matrix2, Vector2};

use crate::types::Point;

/// Smallest accepted scale factor; smaller requests are clamped.
pub const MIN_SCALE: f64 = 0.01;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }

    /// Counter-clockwise rotation by `degrees` about `center`.
    pub fn rotation_about(degrees: f64, center: Point) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::about(Matrix2::new(c, -s, s, c), center)
    }

    /// Axis scaling about `center`; factors below `MIN_SCALE` are clamped.
    pub fn scaling_about(sx: f64, sy: f64, center: Point) -> Self {
        let m = Matrix2::new(sx.max(MIN_SCALE), 0.0, 0.0, sy.max(MIN_SCALE));
        Self::about(m, center)
    }

    /// `x ↦ M (x − c) + c`.
    #[inline]
    fn about(m: Matrix2<f64>, center: Point) -> Self {
        Self {
            m,
            t: center - m * center,
        }
    }

    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

/// Arithmetic mean of the points; the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::zeros();
    }
    points.iter().sum::<Point>() / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn rotation_about_center_keeps_center_fixed() {
        let c = Point::new(3.0, 4.0);
        let r = Affine2::rotation_about(90.0, c);
        assert!(close(r.apply(c), c));
        assert!(close(r.apply(Point::new(4.0, 4.0)), Point::new(3.0, 5.0)));
    }

    #[test]
    fn scaling_clamps_tiny_factors() {
        let s = Affine2::scaling_about(0.0, -2.0, Point::zeros());
        assert_eq!(s.m[(0, 0)], MIN_SCALE);
        assert_eq!(s.m[(1, 1)], MIN_SCALE);
        let s2 = Affine2::scaling_about(2.0, 3.0, Point::new(1.0, 1.0));
        assert!(close(s2.apply(Point::new(2.0, 2.0)), Point::new(3.0, 4.0)));
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let t = Affine2::translation(5.0, 0.0);
        let r = Affine2::rotation_about(90.0, Point::zeros());
        let p = Point::new(1.0, 0.0);
        // translate, then rotate
        assert!(close(r.compose(&t).apply(p), Point::new(0.0, 6.0)));
        // rotate, then translate
        assert!(close(t.compose(&r).apply(p), Point::new(5.0, 1.0)));
    }

    #[test]
    fn inverse_round_trips_and_detects_singular() {
        let f = Affine2::rotation_about(33.0, Point::new(-2.0, 7.0))
            .compose(&Affine2::scaling_about(1.5, 0.5, Point::new(1.0, 1.0)));
        let inv = f.inverse().unwrap();
        let p = Point::new(9.0, -4.0);
        assert!(close(inv.apply(f.apply(p)), p));
        let singular = Affine2 {
            m: Matrix2::zeros(),
            t: Vector2::zeros(),
        };
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn centroid_of_square_and_empty() {
        let sq = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&sq), Point::new(2.0, 1.0));
        assert_eq!(centroid(&[]), Point::zeros());
        let moved = Affine2::translation(1.0, -1.0).apply_all(&sq);
        assert_eq!(centroid(&moved), Point::new(3.0, 0.0));
    }
}
