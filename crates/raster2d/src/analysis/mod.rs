//! Polygon predicates: orientation, convexity, inner normals, point location
//! and segment–polygon intersection.
//!
//! Polygons are vertex slices, implicitly closed. Fewer than three vertices is
//! degenerate: not convex, no normals, every point `Outside`, no intersections.

mod intersect;
mod polygon;
mod predicates;

pub use intersect::{intersect_segments, segment_intersects_polygon};
pub use polygon::{inner_normals, is_convex, point_in_polygon, InnerNormal, Location};
pub use predicates::{cross, dist_sq, on_segment, orientation, Orientation};
