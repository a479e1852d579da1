//! JSON shapes printed on stdout.

use raster2d::analysis::{InnerNormal, Location};
use raster2d::hull::HullEvent;
use raster2d::{Plot, Point};
use serde::Serialize;

pub fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

pub fn xys(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|&p| xy(p)).collect()
}

#[derive(Debug, Serialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub intensity: f64,
}

impl From<Plot> for Pixel {
    fn from(p: Plot) -> Self {
        Self {
            x: p.x,
            y: p.y,
            intensity: p.intensity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Raster {
    pub algo: String,
    pub count: usize,
    pub pixels: Vec<Pixel>,
}

impl Raster {
    pub fn new(algo: impl Into<String>, plots: Vec<Plot>) -> Self {
        Self {
            algo: algo.into(),
            count: plots.len(),
            pixels: plots.into_iter().map(Pixel::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Polyline {
    pub kind: String,
    pub points: Vec<[f64; 2]>,
}

/// Hull construction step, tagged by `step`.
#[derive(Debug, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum HullStep {
    Vertex { at: [f64; 2] },
    Candidate { from: [f64; 2], candidate: [f64; 2] },
    Sorted { pivot: [f64; 2], order: Vec<[f64; 2]> },
    Push { at: [f64; 2] },
    Pop { at: [f64; 2] },
}

impl From<&HullEvent> for HullStep {
    fn from(e: &HullEvent) -> Self {
        match e {
            HullEvent::Vertex(p) => HullStep::Vertex { at: xy(*p) },
            HullEvent::Candidate { from, candidate } => HullStep::Candidate {
                from: xy(*from),
                candidate: xy(*candidate),
            },
            HullEvent::Sorted { pivot, order } => HullStep::Sorted {
                pivot: xy(*pivot),
                order: xys(order),
            },
            HullEvent::Push(p) => HullStep::Push { at: xy(*p) },
            HullEvent::Pop(p) => HullStep::Pop { at: xy(*p) },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Hull {
    pub algo: String,
    pub hull: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<HullStep>>,
}

#[derive(Debug, Serialize)]
pub struct Normal {
    pub midpoint: [f64; 2],
    pub normal: [f64; 2],
}

impl From<&InnerNormal> for Normal {
    fn from(n: &InnerNormal) -> Self {
        Self {
            midpoint: xy(n.midpoint),
            normal: [n.normal.x, n.normal.y],
        }
    }
}

pub fn location_name(loc: Location) -> &'static str {
    match loc {
        Location::Inside => "inside",
        Location::Outside => "outside",
        Location::Boundary => "boundary",
    }
}

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub convex: bool,
    pub inner_normals: Vec<Normal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersections: Option<Vec<[f64; 2]>>,
}
