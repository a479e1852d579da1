//! Reproducible random inputs (point clouds and convex polygons).
//!
//! Purpose
//! - Deterministic inputs for property tests, benchmarks and the demo, keyed
//!   by a replay token `(seed, index)` so any single draw can be regenerated.
//!
//! Model
//! - `scatter_points`: uniform in an axis-aligned box.
//! - `radial_polygon`: `n` equally spaced angles with bounded angular and
//!   radial jitter around a center, then the convex hull (CCW).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::graham_scan;
use crate::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw of the same stream.
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min: min.inf(&max),
            max: min.sup(&max),
        }
    }

    /// `[0, width] × [0, height]`.
    pub fn canvas(width: f64, height: f64) -> Self {
        Self::new(Point::zeros(), Point::new(width, height))
    }
}

/// `n` points uniform in `bounds`.
pub fn scatter_points(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let span = bounds.max - bounds.min;
    (0..n)
        .map(|_| {
            let u = Vector2::new(rng.gen::<f64>(), rng.gen::<f64>());
            bounds.min + span.component_mul(&u)
        })
        .collect()
}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter polygon configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: Point,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 50.0,
            center: Point::new(64.0, 64.0),
            random_phase: true,
        }
    }
}

/// Convex polygon in counter-clockwise order. Jitter can make some sampled
/// points non-extreme, so the result may have fewer than `n` vertices.
pub fn radial_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.radius.max(1e-6);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            cfg.center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect();
    graham_scan(&pts)
}
