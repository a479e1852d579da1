//! Cubic parametric curves sampled into polylines.
//!
//! `C(t) = T · M · G` with `T = [t³, t², t, 1]`, `M` the family's basis matrix
//! and `G` the 4×2 geometry built from the control points. Output is a
//! polyline, not pixels; callers rasterize it at whatever resolution they draw.
//!
//! Geometry per family
//! - Hermite: `[P0, P3, P1, P2]`: the inner control points are the tangent
//!   vectors at `P0` and `P3` themselves, not positions.
//! - Bézier: `[P0, P1, P2, P3]`.
//! - Uniform cubic B-spline: `[P0, P1, P2, P3]`, basis scaled by 1/6; the curve
//!   approximates rather than interpolates the control points.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix4, Matrix4x2, RowVector2, RowVector4};

use crate::types::Point;
use crate::KernelError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Hermite,
    Bezier,
    BSpline,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Hermite, CurveKind::Bezier, CurveKind::BSpline];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Hermite => "hermite",
            CurveKind::Bezier => "bezier",
            CurveKind::BSpline => "bspline",
        }
    }

    /// Basis matrix `M`.
    pub fn basis(self) -> Matrix4<f64> {
        match self {
            CurveKind::Hermite => Matrix4::new(
                2.0, -2.0, 1.0, 1.0, //
                -3.0, 3.0, -2.0, -1.0, //
                0.0, 0.0, 1.0, 0.0, //
                1.0, 0.0, 0.0, 0.0,
            ),
            CurveKind::Bezier => Matrix4::new(
                -1.0, 3.0, -3.0, 1.0, //
                3.0, -6.0, 3.0, 0.0, //
                -3.0, 3.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 0.0,
            ),
            CurveKind::BSpline => {
                Matrix4::new(
                    -1.0, 3.0, -3.0, 1.0, //
                    3.0, -6.0, 3.0, 0.0, //
                    -3.0, 0.0, 3.0, 0.0, //
                    1.0, 4.0, 1.0, 0.0,
                ) / 6.0
            }
        }
    }

    /// Geometry matrix `G` (one control row per basis column).
    pub fn geometry(self, p: &[Point; 4]) -> Matrix4x2<f64> {
        let row = |v: Point| RowVector2::new(v.x, v.y);
        let rows = match self {
            CurveKind::Hermite => [row(p[0]), row(p[3]), row(p[1]), row(p[2])],
            CurveKind::Bezier | CurveKind::BSpline => [row(p[0]), row(p[1]), row(p[2]), row(p[3])],
        };
        Matrix4x2::from_rows(&rows)
    }

    #[inline]
    pub fn sample(self, control: &[Point], steps: usize) -> Vec<Point> {
        sample(self, control, steps)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}

/// Sample `steps + 1` points for `t = 0, 1/steps, …, 1` (`steps` clamped to ≥ 1).
///
/// Uses the first four control points; fewer than four yields an empty polyline.
pub fn sample(kind: CurveKind, control: &[Point], steps: usize) -> Vec<Point> {
    let Some(quad) = control.first_chunk::<4>() else {
        tracing::debug!(
            kind = kind.name(),
            got = control.len(),
            "cubic curve needs 4 control points"
        );
        return Vec::new();
    };
    let coeffs = kind.basis() * kind.geometry(quad);
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let tv = RowVector4::new(t * t * t, t * t, t, 1.0);
            let c = tv * coeffs;
            Point::new(c[0], c[1])
        })
        .collect()
}

/// Uniform cubic B-spline over `n ≥ 4` control points: `n − 3` segments of
/// `steps` intervals each, shared joints emitted once.
pub fn sample_bspline_chain(control: &[Point], steps: usize) -> Vec<Point> {
    if control.len() < 4 {
        tracing::debug!(got = control.len(), "b-spline chain needs 4 control points");
        return Vec::new();
    }
    let mut out = Vec::with_capacity((control.len() - 3) * steps.max(1) + 1);
    for (i, window) in control.windows(4).enumerate() {
        let seg = sample(CurveKind::BSpline, window, steps);
        let skip = usize::from(i > 0);
        out.extend(seg.into_iter().skip(skip));
    }
    out
}
