use crate::analysis::{dist_sq, orientation, Orientation};
use crate::cfg::EPS_LENGTH;
use crate::types::{Point, Tracer};

use super::HullEvent;

pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    graham_scan_traced(points, &mut ())
}

/// Graham scan, O(n log n).
///
/// Pivot is the lowest point (leftmost on ties). The remaining points are
/// sorted by a `(polar angle, squared distance)` key computed against the
/// pivot; every pivot ray then keeps only its farthest point. The scan pops
/// while the top two stack entries and the next point fail to make a strict
/// left turn.
pub fn graham_scan_traced<T: Tracer<HullEvent> + ?Sized>(
    points: &[Point],
    trace: &mut T,
) -> Vec<Point> {
    if points.len() < 3 {
        tracing::debug!(n = points.len(), "graham: fewer than 3 points, empty hull");
        return Vec::new();
    }

    let Some(pivot) = points
        .iter()
        .copied()
        .min_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
    else {
        return Vec::new();
    };

    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .filter(|p| (**p - pivot).norm() > EPS_LENGTH)
        .map(|&p| {
            let d = p - pivot;
            (d.y.atan2(d.x), dist_sq(pivot, p), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut order: Vec<Point> = Vec::with_capacity(keyed.len() + 1);
    order.push(pivot);
    for (_, d, p) in keyed {
        if order.len() > 1 {
            let last = order[order.len() - 1];
            if orientation(pivot, last, p) == Orientation::Collinear {
                if d > dist_sq(pivot, last) {
                    if let Some(slot) = order.last_mut() {
                        *slot = p;
                    }
                }
                continue;
            }
        }
        order.push(p);
    }

    if order.len() < 3 {
        tracing::debug!(n = points.len(), "graham: collinear input, empty hull");
        return Vec::new();
    }
    if trace.enabled() {
        trace.record(HullEvent::Sorted {
            pivot,
            order: order.clone(),
        });
    }

    let mut stack: Vec<Point> = Vec::with_capacity(order.len());
    stack.extend_from_slice(&order[..2]);
    for &next in &order[2..] {
        while stack.len() > 1
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], next)
                != Orientation::CounterClockwise
        {
            if let Some(popped) = stack.pop() {
                trace.record(HullEvent::Pop(popped));
            }
        }
        stack.push(next);
        trace.record(HullEvent::Push(next));
    }

    tracing::trace!(n = points.len(), h = stack.len(), "graham hull");
    stack
}
