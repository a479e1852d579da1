//! 2D rasterization and computational-geometry kernel.
//!
//! Every component is a stateless algorithm over explicit inputs:
//! - rasterizers (`line`, `conic`) and the polygon filler (`fill::scanline`)
//!   emit pixels through a [`PixelSink`];
//! - seed fillers (`fill::seed`) mutate a caller-supplied [`RasterBuffer`];
//! - `hull`, `curve`, `analysis` and `transform` return plain values.
//!
//! Conventions
//! - Coordinates are math-oriented: positive cross product means a
//!   counter-clockwise turn. Screen callers with a downward y axis see the
//!   mirrored winding.
//! - Degenerate geometry (too few points, zero axes, collinear sets) yields an
//!   empty result, never an error. `KernelError` is reserved for contract
//!   violations such as non-finite input or a seed outside the buffer.

pub mod analysis;
pub mod cfg;
pub mod conic;
pub mod curve;
pub mod error;
pub mod fill;
pub mod hull;
pub mod line;
pub mod rand;
pub mod transform;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::KernelError;
pub use fill::{Grid, RasterBuffer};
pub use types::{
    BufferSink, NullSink, PixelSink, PixelTrace, Plot, Point, Polygon, Tracer,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        inner_normals, is_convex, orientation, point_in_polygon, segment_intersects_polygon,
        InnerNormal, Location, Orientation,
    };
    pub use crate::conic::{ConicCfg, ConicKind};
    pub use crate::curve::{sample, sample_bspline_chain, CurveKind};
    pub use crate::fill::{
        fill_polygon, flood_fill, scanline_seed_fill, FillOutcome, Grid, RasterBuffer, SeedAlgo,
        SeedFillCfg,
    };
    pub use crate::hull::{graham_scan, jarvis_march, HullAlgo};
    pub use crate::line::LineAlgo;
    pub use crate::transform::{centroid, Affine2};
    pub use crate::types::{
        BufferSink, NullSink, PixelSink, PixelTrace, Plot, Point, Polygon, Tracer,
    };
    pub use crate::KernelError;
    pub use nalgebra::Vector2 as Vec2;
}
