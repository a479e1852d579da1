use std::collections::BTreeMap;

use crate::cfg::EPS_SPAN;
use crate::types::{edges, PixelSink, Point, Tracer};

/// One non-horizontal polygon edge, normalized so `y_min < y_max`.
///
/// Covers the integer scanlines `y_min..y_max` (half-open); `x` is the
/// edge's abscissa on the current scanline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeTableEntry {
    pub y_min: i64,
    pub y_max: i64,
    pub x: f64,
    pub inv_slope: f64,
}

impl EdgeTableEntry {
    /// `None` for horizontal edges and edges that cross no integer scanline.
    pub fn from_edge(a: Point, b: Point) -> Option<Self> {
        let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
        let dy = hi.y - lo.y;
        if dy <= EPS_SPAN {
            return None;
        }
        let y_min = (lo.y - EPS_SPAN).ceil() as i64;
        let y_max = (hi.y - EPS_SPAN).ceil() as i64;
        if y_min >= y_max {
            return None;
        }
        let inv_slope = (hi.x - lo.x) / dy;
        Some(Self {
            y_min,
            y_max,
            x: lo.x + (y_min as f64 - lo.y) * inv_slope,
            inv_slope,
        })
    }
}

/// Edge table: entries bucketed by the first scanline they cover.
pub fn edge_table(polygon: &[Point]) -> BTreeMap<i64, Vec<EdgeTableEntry>> {
    let mut table: BTreeMap<i64, Vec<EdgeTableEntry>> = BTreeMap::new();
    for (a, b) in edges(polygon) {
        if let Some(e) = EdgeTableEntry::from_edge(a, b) {
            table.entry(e.y_min).or_default().push(e);
        }
    }
    table
}

/// One scanline of the fill, as seen by a tracer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanEvent {
    pub y: i64,
    /// Active edge abscissas after sorting.
    pub active: Vec<f64>,
    /// Filled `[x_left, x_right]` pixel ranges (inclusive).
    pub spans: Vec<(i64, i64)>,
}

pub fn fill_polygon<S: PixelSink + ?Sized>(polygon: &[Point], sink: &mut S) -> usize {
    fill_polygon_traced(polygon, sink, &mut ())
}

/// Even–odd scanline fill with an edge table and an active edge list.
///
/// Scanline `y` is inside an edge when `ceil(y_lo) <= y < ceil(y_hi)`, so a
/// shared vertex is counted by exactly one of its edges. On each row the
/// sorted abscissas pair up into spans `ceil(x_i) ..= floor(x_{i+1})`; an
/// unmatched trailing abscissa is ignored. Returns the number of plotted pixels.
pub fn fill_polygon_traced<S, T>(polygon: &[Point], sink: &mut S, trace: &mut T) -> usize
where
    S: PixelSink + ?Sized,
    T: Tracer<ScanEvent> + ?Sized,
{
    if polygon.len() < 3 {
        tracing::debug!(n = polygon.len(), "scanline fill: fewer than 3 vertices");
        return 0;
    }

    let mut table = edge_table(polygon);
    let Some(mut y) = table.keys().next().copied() else {
        tracing::debug!("scanline fill: no edge crosses a scanline");
        return 0;
    };

    let mut active: Vec<EdgeTableEntry> = Vec::new();
    let mut painted = 0usize;
    loop {
        active.retain(|e| e.y_max > y);
        if let Some(entries) = table.remove(&y) {
            active.extend(entries);
        }
        if active.is_empty() && table.is_empty() {
            break;
        }
        active.sort_by(|a, b| a.x.total_cmp(&b.x));

        let xs: Vec<f64> = active.iter().map(|e| e.x).collect();
        let spans = row_spans(&xs);
        if xs.len() % 2 == 1 {
            tracing::trace!(y, n = xs.len(), "scanline fill: odd active edge count");
        }
        for &(x0, x1) in &spans {
            for x in x0..=x1 {
                sink.plot(x as i32, y as i32, 1.0);
            }
            painted += (x1 - x0 + 1) as usize;
        }
        if trace.enabled() {
            trace.record(ScanEvent {
                y,
                active: xs,
                spans,
            });
        }

        for e in &mut active {
            e.x += e.inv_slope;
        }
        y += 1;
    }

    tracing::debug!(n = polygon.len(), painted, "scanline fill");
    painted
}

/// Pair sorted abscissas into inclusive pixel spans; empty spans are dropped.
pub(crate) fn row_spans(xs: &[f64]) -> Vec<(i64, i64)> {
    xs.chunks_exact(2)
        .filter_map(|pair| {
            let x0 = (pair[0] - EPS_SPAN).ceil() as i64;
            let x1 = (pair[1] + EPS_SPAN).floor() as i64;
            (x0 <= x1).then_some((x0, x1))
        })
        .collect()
}
