use crate::cfg::EPS_COLLINEAR;
use crate::types::Point;

/// Turn direction of the ordered triplet `(p, q, r)` (y axis up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// `(q − p) × (r − p)`; positive for a counter-clockwise turn.
#[inline]
pub fn cross(p: Point, q: Point, r: Point) -> f64 {
    let (a, b) = (q - p, r - p);
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let c = cross(p, q, r);
    if c.abs() <= EPS_COLLINEAR {
        Orientation::Collinear
    } else if c > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[inline]
pub fn dist_sq(a: Point, b: Point) -> f64 {
    (b - a).norm_squared()
}

/// Whether `q` lies inside the bounding box of segment `pr`. Combined with a
/// collinearity test this is "q on segment pr".
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) + EPS_COLLINEAR
        && q.x >= p.x.min(r.x) - EPS_COLLINEAR
        && q.y <= p.y.max(r.y) + EPS_COLLINEAR
        && q.y >= p.y.min(r.y) - EPS_COLLINEAR
}
