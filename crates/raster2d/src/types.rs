//! Shared value types and the two output capabilities of the kernel.
//!
//! - `Point`: real-valued canvas coordinate (`nalgebra::Vector2<f64>`).
//! - `PixelSink`: where rasterizers and the scanline filler send pixels.
//! - `Tracer`: optional ordered record of algorithm state for step-by-step
//!   presentation; `()` discards, `Vec<E>` records.
//! - `Polygon`: validated, implicitly closed vertex list.

use std::ops::Deref;

use nalgebra::Vector2;

use crate::cfg::EPS_LENGTH;
use crate::fill::RasterBuffer;
use crate::KernelError;

pub type Point = Vector2<f64>;

/// One emitted pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub x: i32,
    pub y: i32,
    pub intensity: f64,
}

/// Pixel output capability. Intensity is in `[0, 1]`; non-antialiased
/// algorithms always pass `1.0`.
pub trait PixelSink {
    fn plot(&mut self, x: i32, y: i32, intensity: f64);
}

impl<F: FnMut(i32, i32, f64)> PixelSink for F {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, intensity: f64) {
        self(x, y, intensity)
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PixelSink for NullSink {
    #[inline]
    fn plot(&mut self, _x: i32, _y: i32, _intensity: f64) {}
}

/// Records plots in emission order.
#[derive(Clone, Debug, Default)]
pub struct PixelTrace {
    pub plots: Vec<Plot>,
}

impl PixelTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Pixel coordinates in emission order (duplicates kept).
    pub fn coords(&self) -> Vec<(i32, i32)> {
        self.plots.iter().map(|p| (p.x, p.y)).collect()
    }
}

impl PixelSink for PixelTrace {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, intensity: f64) {
        self.plots.push(Plot { x, y, intensity });
    }
}

/// Paints into a raster buffer: plots with intensity `>= 0.5` set `color`,
/// out-of-bounds plots are dropped.
pub struct BufferSink<'a, B: RasterBuffer> {
    buffer: &'a mut B,
    color: B::Color,
}

impl<'a, B: RasterBuffer> BufferSink<'a, B> {
    pub fn new(buffer: &'a mut B, color: B::Color) -> Self {
        Self { buffer, color }
    }
}

impl<B: RasterBuffer> PixelSink for BufferSink<'_, B> {
    fn plot(&mut self, x: i32, y: i32, intensity: f64) {
        if intensity >= 0.5 {
            self.buffer.set(x, y, self.color);
        }
    }
}

/// Ordered record of algorithm snapshots.
pub trait Tracer<E> {
    fn record(&mut self, event: E);

    /// False when events are discarded; lets callers skip building snapshots.
    #[inline]
    fn enabled(&self) -> bool {
        true
    }
}

impl<E> Tracer<E> for () {
    #[inline]
    fn record(&mut self, _event: E) {}

    #[inline]
    fn enabled(&self) -> bool {
        false
    }
}

impl<E> Tracer<E> for Vec<E> {
    #[inline]
    fn record(&mut self, event: E) {
        self.push(event);
    }
}

/// Reject point lists containing NaN or infinite coordinates.
pub fn validate_points(points: &[Point]) -> Result<(), KernelError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(KernelError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Consecutive vertex pairs of an implicitly closed polygon, last → first included.
pub fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Ordered vertex list with at least 3 finite points and no explicit closing vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn new(mut vertices: Vec<Point>) -> Result<Self, KernelError> {
        validate_points(&vertices)?;
        if vertices.len() > 1 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if (last - first).norm() <= EPS_LENGTH {
                vertices.pop();
            }
        }
        if vertices.len() < 3 {
            return Err(KernelError::TooFewVertices {
                got: vertices.len(),
            });
        }
        Ok(Self(vertices))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = KernelError;

    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}
