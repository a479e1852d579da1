use crate::types::{PixelSink, Point};

/// Bresenham with an integer error term. Endpoints are floored to pixels.
///
/// The dominant axis is chosen by `dx > dy`; `sx`/`sy` carry the direction so
/// one loop per dominant axis covers all eight octants. Emits exactly
/// `max(|dx|, |dy|) + 1` pixels, first and last pixel included.
pub fn bresenham<S: PixelSink + ?Sized>(a: Point, b: Point, sink: &mut S) {
    let (mut x, mut y) = (a.x.floor() as i64, a.y.floor() as i64);
    let (x2, y2) = (b.x.floor() as i64, b.y.floor() as i64);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };

    sink.plot(x as i32, y as i32, 1.0);

    if dx > dy {
        let mut e = 2 * dy - dx;
        while x != x2 {
            if e >= 0 {
                y += sy;
                e -= 2 * dx;
            }
            x += sx;
            e += 2 * dy;
            sink.plot(x as i32, y as i32, 1.0);
        }
    } else {
        let mut e = 2 * dx - dy;
        while y != y2 {
            if e >= 0 {
                x += sx;
                e -= 2 * dy;
            }
            y += sy;
            e += 2 * dx;
            sink.plot(x as i32, y as i32, 1.0);
        }
    }
}
