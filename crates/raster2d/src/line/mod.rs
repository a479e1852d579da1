//! Straight-segment rasterizers.
//!
//! - `dda`: floating-point digital differential analyzer.
//! - `bresenham`: integer decision variable, all eight octants.
//! - `wu`: anti-aliased, two complementary pixels per major-axis step.
//!
//! All three write through `PixelSink`, so drawing, recording and counting
//! callers share one implementation. `LineAlgo` is the closed set of choices.

mod bresenham;
mod dda;
mod wu;

use std::fmt;
use std::str::FromStr;

use crate::types::{PixelSink, Point};
use crate::KernelError;

pub use bresenham::bresenham;
pub use dda::dda;
pub use wu::wu;

/// Rasterizer entry point shared by all line algorithms.
pub type LineFn = fn(Point, Point, &mut dyn PixelSink);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineAlgo {
    Dda,
    Bresenham,
    Wu,
}

impl LineAlgo {
    pub const ALL: [LineAlgo; 3] = [LineAlgo::Dda, LineAlgo::Bresenham, LineAlgo::Wu];

    pub fn name(self) -> &'static str {
        match self {
            LineAlgo::Dda => "dda",
            LineAlgo::Bresenham => "bresenham",
            LineAlgo::Wu => "wu",
        }
    }

    pub fn rasterizer(self) -> LineFn {
        match self {
            LineAlgo::Dda => |a, b, sink| dda(a, b, sink),
            LineAlgo::Bresenham => |a, b, sink| bresenham(a, b, sink),
            LineAlgo::Wu => |a, b, sink| wu(a, b, sink),
        }
    }

    #[inline]
    pub fn rasterize(self, a: Point, b: Point, sink: &mut dyn PixelSink) {
        (self.rasterizer())(a, b, sink)
    }
}

impl fmt::Display for LineAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgo {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineAlgo::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
