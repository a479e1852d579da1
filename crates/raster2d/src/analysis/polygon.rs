use nalgebra::Vector2;

use super::predicates::{on_segment, orientation, Orientation};
use crate::cfg::EPS_LENGTH;
use crate::types::{edges, Point};

/// Convex iff every non-collinear vertex triplet turns the same way.
/// All-collinear (and < 3 vertices) counts as not convex.
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut turn: Option<Orientation> = None;
    for i in 0..n {
        let o = orientation(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]);
        if o == Orientation::Collinear {
            continue;
        }
        match turn {
            None => turn = Some(o),
            Some(t) if t != o => return false,
            Some(_) => {}
        }
    }
    turn.is_some()
}

/// Unit inward normal of one edge, anchored at the edge midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InnerNormal {
    pub midpoint: Point,
    pub normal: Vector2<f64>,
}

/// Inner normals of a convex polygon, one per edge.
///
/// Winding is checked at the lowest (then leftmost) vertex; a clockwise
/// polygon is reversed first, so edges are reported in counter-clockwise order
/// and the left-rotated edge `(-dy, dx)` points inward. Edges shorter than
/// `EPS_LENGTH` get a zero normal.
pub fn inner_normals(polygon: &[Point]) -> Vec<InnerNormal> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }

    let lowest = (0..n)
        .min_by(|&a, &b| {
            let (pa, pb) = (polygon[a], polygon[b]);
            pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
        })
        .unwrap_or(0);
    let prev = polygon[(lowest + n - 1) % n];
    let next = polygon[(lowest + 1) % n];

    let mut ccw = polygon.to_vec();
    if orientation(prev, polygon[lowest], next) == Orientation::Clockwise {
        tracing::debug!("inner_normals: clockwise polygon, reversing");
        ccw.reverse();
    }

    edges(&ccw)
        .map(|(p1, p2)| {
            let e = p2 - p1;
            let len = e.norm();
            let normal = if len > EPS_LENGTH {
                Vector2::new(-e.y, e.x) / len
            } else {
                Vector2::zeros()
            };
            InnerNormal {
                midpoint: (p1 + p2) / 2.0,
                normal,
            }
        })
        .collect()
}

/// Where a point lies relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Outside,
    Boundary,
}

/// Boundary test on every edge first, then even–odd ray casting to +x.
///
/// An edge counts as crossed when `y` is in its half-open span
/// `[min(y1, y2), max(y1, y2))`, so a vertex shared by two edges is counted
/// once and horizontal edges never count.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> Location {
    if polygon.len() < 3 {
        return Location::Outside;
    }

    let on_boundary = edges(polygon).any(|(p1, p2)| {
        orientation(p1, p2, point) == Orientation::Collinear && on_segment(p1, point, p2)
    });
    if on_boundary {
        return Location::Boundary;
    }

    let (x, y) = (point.x, point.y);
    let mut inside = false;
    for (p1, p2) in edges(polygon) {
        let spans = (p1.y <= y && y < p2.y) || (p2.y <= y && y < p1.y);
        if spans && x < (p2.x - p1.x) * (y - p1.y) / (p2.y - p1.y) + p1.x {
            inside = !inside;
        }
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}
