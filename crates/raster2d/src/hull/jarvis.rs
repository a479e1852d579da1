use crate::analysis::{dist_sq, orientation, Orientation};
use crate::cfg::EPS_LENGTH;
use crate::types::{Point, Tracer};

use super::HullEvent;

pub fn jarvis_march(points: &[Point]) -> Vec<Point> {
    jarvis_march_traced(points, &mut ())
}

/// Gift wrapping, O(n·h).
///
/// Starts at the leftmost point (lowest on ties). From the current vertex `p`,
/// a candidate `q` is replaced by any `i` with `q` to the left of `p → i`; on a
/// collinear tie the farther point wins, which drops collinear boundary points.
/// Stops when the wrap returns to the start position.
pub fn jarvis_march_traced<T: Tracer<HullEvent> + ?Sized>(
    points: &[Point],
    trace: &mut T,
) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        tracing::debug!(n, "jarvis: fewer than 3 points, empty hull");
        return Vec::new();
    }

    let start = (0..n)
        .min_by(|&a, &b| {
            let (pa, pb) = (points[a], points[b]);
            pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
        })
        .unwrap_or(0);

    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(points[p]);
        trace.record(HullEvent::Vertex(points[p]));
        if hull.len() > n {
            // cannot happen with consistent predicates; bail out instead of spinning
            tracing::debug!(n, "jarvis: wrap did not close, empty hull");
            return Vec::new();
        }

        let mut q = (p + 1) % n;
        for i in 0..n {
            let better = match orientation(points[p], points[i], points[q]) {
                Orientation::CounterClockwise => true,
                Orientation::Collinear => {
                    dist_sq(points[p], points[i]) > dist_sq(points[p], points[q])
                }
                Orientation::Clockwise => false,
            };
            if better {
                q = i;
                if trace.enabled() {
                    trace.record(HullEvent::Candidate {
                        from: points[p],
                        candidate: points[q],
                    });
                }
            }
        }

        p = q;
        if (points[p] - points[start]).norm() <= EPS_LENGTH {
            break;
        }
    }

    if hull.len() < 3 {
        tracing::debug!(n, "jarvis: collinear input, empty hull");
        return Vec::new();
    }
    tracing::trace!(n, h = hull.len(), "jarvis hull");
    hull
}
