use super::{axis_len, pixel, put};
use crate::types::{PixelSink, Point};

#[inline]
fn plot4<S: PixelSink + ?Sized>(sink: &mut S, cx: i64, cy: i64, x: i128, y: i128) {
    let (x, y) = (x as i64, y as i64);
    put(sink, cx + x, cy + y);
    put(sink, cx - x, cy + y);
    put(sink, cx + x, cy - y);
    put(sink, cx - x, cy - y);
}

/// Two-region midpoint ellipse, axis aligned.
///
/// `rx = |x_axis.x - center.x|`, `ry = |y_axis.y - center.y|`. Region 1 steps x
/// while the slope magnitude is below one (`ry²x < rx²y`), region 2 steps y down
/// to zero. Both decision variables are kept at four times their textbook
/// value so the quarter terms stay integral; they are `i128` since `4·rx²·ry`
/// outgrows `i64` for semi-axes in the millions.
pub fn ellipse<S: PixelSink + ?Sized>(center: Point, x_axis: Point, y_axis: Point, sink: &mut S) {
    let rx = axis_len(x_axis.x - center.x);
    let ry = axis_len(y_axis.y - center.y);
    let (Some(rx), Some(ry)) = (rx, ry) else {
        tracing::debug!(?rx, ?ry, "ellipse semi-axis zero or too long, nothing to plot");
        return;
    };
    let (cx, cy) = pixel(center);
    let (rx, ry) = (rx as i128, ry as i128);
    let (rx2, ry2) = (rx * rx, ry * ry);

    let (mut x, mut y) = (0i128, ry);
    let mut d1 = 4 * ry2 - 4 * rx2 * ry + rx2;
    while ry2 * x < rx2 * y {
        plot4(sink, cx, cy, x, y);
        if d1 < 0 {
            d1 += 4 * (2 * ry2 * (x + 1) + ry2);
        } else {
            d1 += 4 * (2 * ry2 * (x + 1) - 2 * rx2 * (y - 1) + ry2);
            y -= 1;
        }
        x += 1;
    }

    let mut d2 = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
    while y >= 0 {
        plot4(sink, cx, cy, x, y);
        if d2 > 0 {
            d2 += 4 * rx2 * (3 - 2 * y);
        } else {
            d2 += 4 * (2 * ry2 * (x + 1) + rx2 * (3 - 2 * y));
            x += 1;
        }
        y -= 1;
    }
}
