//! Convex hulls of planar point sets.
//!
//! Both builders return the hull vertices in counter-clockwise order without
//! collinear boundary points, or an empty `Vec` when the input has fewer than
//! three points or is entirely collinear. For the same input they produce the
//! same vertex set; only the starting vertex differs (Jarvis starts at the
//! leftmost point, Graham at the lowest).
//!
//! The `*_traced` variants additionally record `HullEvent` snapshots so a
//! presentation layer can replay the construction step by step.

mod graham;
mod jarvis;

use std::fmt;
use std::str::FromStr;

use crate::types::{Point, Tracer};
use crate::KernelError;

pub use graham::{graham_scan, graham_scan_traced};
pub use jarvis::{jarvis_march, jarvis_march_traced};

/// One observable step of hull construction.
#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    /// Jarvis: `vertex` appended to the hull.
    Vertex(Point),
    /// Jarvis: `candidate` is now the best next vertex after `from`.
    Candidate { from: Point, candidate: Point },
    /// Graham: points in scan order after sorting and collapsing collinear rays.
    Sorted { pivot: Point, order: Vec<Point> },
    /// Graham: point pushed on the stack.
    Push(Point),
    /// Graham: point popped because it was not a strict left turn.
    Pop(Point),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullAlgo {
    Jarvis,
    Graham,
}

impl HullAlgo {
    pub const ALL: [HullAlgo; 2] = [HullAlgo::Jarvis, HullAlgo::Graham];

    pub fn name(self) -> &'static str {
        match self {
            HullAlgo::Jarvis => "jarvis",
            HullAlgo::Graham => "graham",
        }
    }

    pub fn build(self, points: &[Point]) -> Vec<Point> {
        self.build_traced(points, &mut ())
    }

    pub fn build_traced<T: Tracer<HullEvent> + ?Sized>(
        self,
        points: &[Point],
        trace: &mut T,
    ) -> Vec<Point> {
        match self {
            HullAlgo::Jarvis => jarvis_march_traced(points, trace),
            HullAlgo::Graham => graham_scan_traced(points, trace),
        }
    }
}

impl fmt::Display for HullAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HullAlgo {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HullAlgo::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
