use super::predicates::{on_segment, orientation, Orientation};
use crate::cfg::{DEDUP_TOL, EPS_DENOM};
use crate::types::{edges, Point};

/// Intersection points of segments `p1q1` and `p2q2`.
///
/// Proper and touching crossings (the four orientation tests disagree
/// pairwise) are solved parametrically; a near-zero denominator is treated as
/// parallel. Collinear configurations report every endpoint of one segment
/// that lies on the other, so an overlap yields its two ends.
pub fn intersect_segments(p1: Point, q1: Point, p2: Point, q2: Point) -> Vec<Point> {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        let (d1, d2) = (q1 - p1, q2 - p2);
        let denom = d1.x * d2.y - d1.y * d2.x;
        if denom.abs() >= EPS_DENOM {
            let w = p2 - p1;
            let t = (w.x * d2.y - w.y * d2.x) / denom;
            let u = (w.x * d1.y - w.y * d1.x) / denom;
            let eps = 1e-9;
            if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
                return vec![p1 + d1 * t];
            }
            return Vec::new();
        }
    }

    let mut out = Vec::new();
    let col = Orientation::Collinear;
    if o1 == col && on_segment(p1, p2, q1) {
        out.push(p2);
    }
    if o2 == col && on_segment(p1, q2, q1) {
        out.push(q2);
    }
    if o3 == col && on_segment(p2, p1, q2) {
        out.push(p1);
    }
    if o4 == col && on_segment(p2, q1, q2) {
        out.push(q1);
    }
    dedup_points(&mut out);
    out
}

/// All points where segment `ab` meets the polygon boundary, deduplicated
/// within `DEDUP_TOL` per coordinate, in edge order.
pub fn segment_intersects_polygon(a: Point, b: Point, polygon: &[Point]) -> Vec<Point> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    let mut out: Vec<Point> = edges(polygon)
        .flat_map(|(p, q)| intersect_segments(a, b, p, q))
        .collect();
    dedup_points(&mut out);
    out
}

fn dedup_points(points: &mut Vec<Point>) {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points.iter() {
        let dup = kept
            .iter()
            .any(|k| (k.x - p.x).abs() <= DEDUP_TOL && (k.y - p.y).abs() <= DEDUP_TOL);
        if !dup {
            kept.push(p);
        }
    }
    *points = kept;
}
