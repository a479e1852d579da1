use super::{axis_len, pixel, put, ConicCfg};
use crate::types::{PixelSink, Point};

#[inline]
fn plot2<S: PixelSink + ?Sized>(sink: &mut S, cx: i64, cy: i64, dir: i64, x: i64, y: i64) {
    put(sink, cx + x, cy + dir * y);
    put(sink, cx - x, cy + dir * y);
}

/// Parabola `x² = 4p·y` with its vertex at `vertex`, opening toward `focus`.
///
/// `p = |focus.y - vertex.y|`. The drawn half-width is `|p3.x - vertex.x|` when
/// a non-degenerate third point is given, `cfg.max_extent` otherwise; both
/// half-width and depth are capped at `cfg.max_extent`. With `F(x, y) = x² - 4p·y`:
/// - region 1 (`x < 2p`, slope below one) steps x and tests `F(x + 1, y + ½)`;
/// - region 2 steps y and tests `4F(x + ½, y + 1)`.
pub fn parabola<S: PixelSink + ?Sized>(
    vertex: Point,
    focus: Point,
    p3: Option<Point>,
    cfg: &ConicCfg,
    sink: &mut S,
) {
    let Some(p) = axis_len(focus.y - vertex.y) else {
        tracing::debug!("parabola focal distance zero or too long, nothing to plot");
        return;
    };
    let dir: i64 = if focus.y > vertex.y { 1 } else { -1 };
    let ext = cfg.extent();
    let half_width = p3
        .and_then(|q| axis_len(q.x - vertex.x))
        .map_or(ext, |w| w.min(ext));
    let (cx, cy) = pixel(vertex);

    let (mut x, mut y) = (0i64, 0i64);
    let mut d = 1 - 2 * p;
    while x < 2 * p && x <= half_width && y <= ext {
        plot2(sink, cx, cy, dir, x, y);
        if d > 0 {
            d -= 4 * p;
            y += 1;
        }
        d += 2 * x + 3;
        x += 1;
    }

    let mut d = (2 * x + 1) * (2 * x + 1) - 16 * p * (y + 1);
    while x <= half_width && y <= ext {
        plot2(sink, cx, cy, dir, x, y);
        if d < 0 {
            d += 8 * x + 8;
            x += 1;
        }
        d -= 16 * p;
        y += 1;
    }
}
