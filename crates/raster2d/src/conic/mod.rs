//! Second-order curve rasterizers (circle, ellipse, hyperbola, parabola).
//!
//! Each rasterizer takes the points that define the curve and derives the
//! center, radius or axes itself:
//! - circle: `center`, a point on the circle;
//! - ellipse / hyperbola: `center`, `p2` (x semi-axis from `|p2.x - center.x|`),
//!   `p3` (y semi-axis from `|p3.y - center.y|`);
//! - parabola: vertex, focus (focal distance and opening direction along y),
//!   optional `p3` whose x offset from the vertex bounds the drawn half-width.
//!
//! All use integer midpoint decision variables derived from the implicit
//! equation and plot symmetric images (coinciding images are not deduplicated).
//! A zero radius or axis plots nothing, and so does one longer than
//! `cfg::MAX_CONIC_AXIS`. The open curves stop at `ConicCfg::max_extent` pixels
//! from the center.

mod circle;
mod ellipse;
mod hyperbola;
mod parabola;

use std::fmt;
use std::str::FromStr;

use crate::cfg::MAX_CONIC_AXIS;
use crate::types::{PixelSink, Point};
use crate::KernelError;

pub use circle::circle;
pub use ellipse::ellipse;
pub use hyperbola::hyperbola;
pub use parabola::parabola;

/// Bounds for curves that do not close on themselves.
#[derive(Clone, Copy, Debug)]
pub struct ConicCfg {
    /// Maximum distance (pixels, per axis) from the center that open curves reach.
    pub max_extent: i64,
}

impl Default for ConicCfg {
    fn default() -> Self {
        Self { max_extent: 1000 }
    }
}

impl ConicCfg {
    /// `max_extent` clamped to `[0, MAX_CONIC_AXIS]`.
    pub fn extent(&self) -> i64 {
        self.max_extent.clamp(0, MAX_CONIC_AXIS)
    }
}

pub type ConicFn = fn(Point, Point, Option<Point>, &ConicCfg, &mut dyn PixelSink);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConicKind {
    Circle,
    Ellipse,
    Hyperbola,
    Parabola,
}

impl ConicKind {
    pub const ALL: [ConicKind; 4] = [
        ConicKind::Circle,
        ConicKind::Ellipse,
        ConicKind::Hyperbola,
        ConicKind::Parabola,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConicKind::Circle => "circle",
            ConicKind::Ellipse => "ellipse",
            ConicKind::Hyperbola => "hyperbola",
            ConicKind::Parabola => "parabola",
        }
    }

    /// Number of defining points the curve needs (the parabola's third is optional).
    pub fn required_points(self) -> usize {
        match self {
            ConicKind::Circle | ConicKind::Parabola => 2,
            ConicKind::Ellipse | ConicKind::Hyperbola => 3,
        }
    }

    pub fn rasterizer(self) -> ConicFn {
        match self {
            ConicKind::Circle => |c, p2, _p3, _cfg, sink| circle(c, p2, sink),
            ConicKind::Ellipse => |c, p2, p3, _cfg, sink| match p3 {
                Some(p3) => ellipse(c, p2, p3, sink),
                None => tracing::debug!("ellipse needs a third defining point"),
            },
            ConicKind::Hyperbola => |c, p2, p3, cfg, sink| match p3 {
                Some(p3) => hyperbola(c, p2, p3, cfg, sink),
                None => tracing::debug!("hyperbola needs a third defining point"),
            },
            ConicKind::Parabola => |c, focus, p3, cfg, sink| parabola(c, focus, p3, cfg, sink),
        }
    }

    #[inline]
    pub fn rasterize(
        self,
        center: Point,
        p2: Point,
        p3: Option<Point>,
        cfg: &ConicCfg,
        sink: &mut dyn PixelSink,
    ) {
        (self.rasterizer())(center, p2, p3, cfg, sink)
    }
}

impl fmt::Display for ConicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConicKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConicKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}

/// Rounded absolute length, or `None` when it is zero or above `MAX_CONIC_AXIS`.
pub(crate) fn axis_len(v: f64) -> Option<i64> {
    let r = v.abs().round();
    (r >= 1.0 && r <= MAX_CONIC_AXIS as f64).then_some(r as i64)
}

/// Nearest integer pixel of a real point.
#[inline]
pub(crate) fn pixel(p: Point) -> (i64, i64) {
    (p.x.round() as i64, p.y.round() as i64)
}

#[inline]
pub(crate) fn put<S: PixelSink + ?Sized>(sink: &mut S, x: i64, y: i64) {
    sink.plot(x as i32, y as i32, 1.0);
}

#[cfg(test)]
mod tests;
