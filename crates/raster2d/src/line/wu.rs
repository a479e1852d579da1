use crate::types::{PixelSink, Point};

#[inline]
fn fpart(v: f64) -> f64 {
    v - v.floor()
}

#[inline]
fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}

/// Plot in the un-swapped frame, clamping intensity into `[0, 1]`.
#[inline]
fn plot<S: PixelSink + ?Sized>(sink: &mut S, steep: bool, u: i64, v: i64, intensity: f64) {
    let intensity = intensity.clamp(0.0, 1.0);
    if steep {
        sink.plot(v as i32, u as i32, intensity);
    } else {
        sink.plot(u as i32, v as i32, intensity);
    }
}

/// Xiaolin Wu's anti-aliased line.
///
/// Emission order: first cap pair, interior pairs, last cap pair. Each interior
/// pair covers one major-axis step with intensities `1 - frac` and `frac`
/// (sum 1). Cap pairs are additionally weighted by `xgap`, the coverage of the
/// end pixel along the major axis. Points, vertical and horizontal segments
/// bypass the interpolation and plot full-intensity runs.
pub fn wu<S: PixelSink + ?Sized>(a: Point, b: Point, sink: &mut S) {
    let (mut x1, mut y1, mut x2, mut y2) = (a.x, a.y, b.x, b.y);
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0.0 && dy == 0.0 {
        sink.plot(x1.floor() as i32, y1.floor() as i32, 1.0);
        return;
    }
    if dx == 0.0 {
        let x = x1.floor() as i32;
        let (lo, hi) = (y1.min(y2).floor() as i32, y1.max(y2).floor() as i32);
        for y in lo..=hi {
            sink.plot(x, y, 1.0);
        }
        return;
    }
    if dy == 0.0 {
        let y = y1.floor() as i32;
        let (lo, hi) = (x1.min(x2).floor() as i32, x1.max(x2).floor() as i32);
        for x in lo..=hi {
            sink.plot(x, y, 1.0);
        }
        return;
    }

    let steep = dy.abs() > dx.abs();
    if steep {
        std::mem::swap(&mut x1, &mut y1);
        std::mem::swap(&mut x2, &mut y2);
    }
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }
    let gradient = (y2 - y1) / (x2 - x1);

    // first endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = rfpart(x1 + 0.5);
    let xpxl1 = xend as i64;
    let ypxl1 = yend.floor() as i64;
    plot(sink, steep, xpxl1, ypxl1, rfpart(yend) * xgap);
    plot(sink, steep, xpxl1, ypxl1 + 1, fpart(yend) * xgap);
    let mut intery = yend + gradient;

    // second endpoint, emitted after the interior
    let xend = x2.round();
    let yend2 = y2 + gradient * (xend - x2);
    let xgap2 = fpart(x2 + 0.5);
    let xpxl2 = xend as i64;
    let ypxl2 = yend2.floor() as i64;

    for u in (xpxl1 + 1)..xpxl2 {
        let v = intery.floor() as i64;
        plot(sink, steep, u, v, rfpart(intery));
        plot(sink, steep, u, v + 1, fpart(intery));
        intery += gradient;
    }

    plot(sink, steep, xpxl2, ypxl2, rfpart(yend2) * xgap2);
    plot(sink, steep, xpxl2, ypxl2 + 1, fpart(yend2) * xgap2);
}
