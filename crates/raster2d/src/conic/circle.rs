use super::{axis_len, pixel, put};
use crate::types::{PixelSink, Point};

/// Midpoint circle through `on_circle`, centered at `center`.
///
/// Radius is the rounded Euclidean distance. Decision variable starts at
/// `3 - 2r`; each step plots the eight octant images of `(x, y)`.
pub fn circle<S: PixelSink + ?Sized>(center: Point, on_circle: Point, sink: &mut S) {
    let Some(r) = axis_len((on_circle - center).norm()) else {
        tracing::debug!("circle radius zero or too long, nothing to plot");
        return;
    };
    let (cx, cy) = pixel(center);

    let (mut x, mut y) = (0i64, r);
    let mut d = 3 - 2 * r;
    while x <= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            put(sink, px, py);
        }
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}
