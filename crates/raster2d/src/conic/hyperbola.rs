use super::{axis_len, pixel, put, ConicCfg};
use crate::types::{PixelSink, Point};

#[inline]
fn plot4<S: PixelSink + ?Sized>(sink: &mut S, cx: i64, cy: i64, x: i128, y: i128) {
    let (x, y) = (x as i64, y as i64);
    put(sink, cx + x, cy + y);
    put(sink, cx - x, cy + y);
    put(sink, cx + x, cy - y);
    put(sink, cx - x, cy - y);
}

/// Both branches of `x²/a² - y²/b² = 1` around `center`.
///
/// `a = |x_axis.x - center.x|`, `b = |y_axis.y - center.y|`. With
/// `F(x, y) = b²x² - a²y² - a²b²`, starting at the vertex `(a, 0)`:
/// - region 1 (`b²x > a²y`, steeper than 45°) steps y and tests
///   `4F(x + ½, y + 1)`: negative means the curve passes right of the midpoint;
/// - region 2 steps x and tests `4F(x + 1, y + ½)`: positive means the curve
///   passes above the midpoint.
///
/// Region 2 is never entered when `b > a` (asymptote steeper than 45°).
/// A vertex beyond `max_extent` plots nothing.
pub fn hyperbola<S: PixelSink + ?Sized>(
    center: Point,
    x_axis: Point,
    y_axis: Point,
    cfg: &ConicCfg,
    sink: &mut S,
) {
    let a = axis_len(x_axis.x - center.x);
    let b = axis_len(y_axis.y - center.y);
    let (Some(a), Some(b)) = (a, b) else {
        tracing::debug!(?a, ?b, "hyperbola semi-axis zero or too long, nothing to plot");
        return;
    };
    let ext = cfg.extent();
    if a > ext {
        tracing::debug!(a, ext, "hyperbola vertex beyond max extent, nothing to plot");
        return;
    }
    let (cx, cy) = pixel(center);
    let (a, b, ext) = (a as i128, b as i128, ext as i128);
    let (a2, b2) = (a * a, b * b);

    let (mut x, mut y) = (a, 0i128);
    let mut d = b2 * (2 * x + 1) * (2 * x + 1) - 4 * a2 * (y + 1) * (y + 1) - 4 * a2 * b2;
    while b2 * x > a2 * y && x <= ext && y <= ext {
        plot4(sink, cx, cy, x, y);
        if d < 0 {
            d += 8 * b2 * (x + 1);
            x += 1;
        }
        d -= 4 * a2 * (2 * y + 3);
        y += 1;
    }

    let mut d = 4 * b2 * (x + 1) * (x + 1) - a2 * (2 * y + 1) * (2 * y + 1) - 4 * a2 * b2;
    while x <= ext && y <= ext {
        plot4(sink, cx, cy, x, y);
        if d > 0 {
            d -= 8 * a2 * (y + 1);
            y += 1;
        }
        d += 4 * b2 * (2 * x + 3);
        x += 1;
    }
}
