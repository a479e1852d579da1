use crate::cfg::EPS_LENGTH;
use crate::types::{PixelSink, Point};

#[inline]
fn step_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// DDA: `max(|dx|, |dy|)` steps of `(dx, dy) / length`, starting half a pixel
/// toward the direction of travel, each sample floored. Consecutive repeats of
/// the same pixel are emitted once; a zero-length segment emits one pixel.
pub fn dda<S: PixelSink + ?Sized>(a: Point, b: Point, sink: &mut S) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = dx.abs().max(dy.abs());
    if length <= EPS_LENGTH {
        sink.plot(a.x.floor() as i32, a.y.floor() as i32, 1.0);
        return;
    }

    let x_inc = dx / length;
    let y_inc = dy / length;
    let mut x = a.x + 0.5 * step_sign(dx);
    let mut y = a.y + 0.5 * step_sign(dy);

    let mut last = (x.floor() as i32, y.floor() as i32);
    sink.plot(last.0, last.1, 1.0);
    for _ in 0..(length.floor() as usize) {
        x += x_inc;
        y += y_inc;
        let px = (x.floor() as i32, y.floor() as i32);
        if px != last {
            sink.plot(px.0, px.1, 1.0);
            last = px;
        }
    }
}
