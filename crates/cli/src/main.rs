use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use raster2d::analysis::{inner_normals, is_convex, point_in_polygon, segment_intersects_polygon};
use raster2d::conic::{ConicCfg, ConicKind};
use raster2d::curve::{sample, sample_bspline_chain, CurveKind};
use raster2d::fill::{fill_polygon, Grid, SeedAlgo, SeedFillCfg};
use raster2d::hull::{HullAlgo, HullEvent};
use raster2d::line::LineAlgo;
use raster2d::transform::{centroid, Affine2};
use raster2d::types::edges;
use raster2d::{BufferSink, PixelTrace, Point};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;

use input::{load_points, load_polygon, parse_pixel, parse_point, parse_segment, Segment};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Rasterize lines, conics and curves; build hulls; fill and analyze polygons")]
struct Cmd {
    /// Log verbosity on stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rasterize a segment
    Line {
        #[arg(long, default_value = "bresenham")]
        algo: LineAlgo,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
    /// Rasterize a conic from its defining points
    Conic {
        #[arg(long)]
        kind: ConicKind,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p2: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p3: Option<Point>,
        /// Bound for the open conics (parabola, hyperbola)
        #[arg(long, default_value_t = ConicCfg::default().max_extent)]
        max_extent: i64,
    },
    /// Sample a cubic curve into a polyline
    Curve {
        #[arg(long)]
        kind: CurveKind,
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = raster2d::cfg::DEFAULT_CURVE_STEPS)]
        steps: usize,
    },
    /// Convex hull of a point set
    Hull {
        #[arg(long, default_value = "graham")]
        algo: HullAlgo,
        #[arg(long)]
        input: PathBuf,
        /// Include the construction steps
        #[arg(long)]
        trace: bool,
    },
    /// Scanline-fill a polygon
    Fill {
        #[arg(long)]
        input: PathBuf,
    },
    /// Outline a polygon into a grid and seed-fill from a pixel; prints ASCII
    SeedFill {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_pixel, allow_hyphen_values = true)]
        seed: (i32, i32),
        #[arg(long, default_value_t = 64)]
        width: i32,
        #[arg(long, default_value_t = 32)]
        height: i32,
        #[arg(long, default_value = "scanline")]
        algo: SeedAlgo,
    },
    /// Convexity and inner normals, optionally a point and a segment test
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point>,
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        segment: Option<Segment>,
    },
    /// Move, rotate or scale a point list about its centroid
    #[command(group(ArgGroup::new("op").required(true).args(["translate", "rotate", "scale"])))]
    Transform {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        translate: Option<Point>,
        /// Degrees, counter-clockwise
        #[arg(long, allow_hyphen_values = true)]
        rotate: Option<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        scale: Option<Point>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    let out = execute(cmd.action)?;
    println!("{out}");
    Ok(())
}

/// Run one subcommand and return what goes to stdout.
fn execute(action: Action) -> Result<String> {
    match action {
        Action::Line { algo, from, to } => line(algo, from, to),
        Action::Conic {
            kind,
            center,
            p2,
            p3,
            max_extent,
        } => conic(kind, center, p2, p3, ConicCfg { max_extent }),
        Action::Curve { kind, input, steps } => curve(kind, input, steps),
        Action::Hull { algo, input, trace } => hull(algo, input, trace),
        Action::Fill { input } => fill(input),
        Action::SeedFill {
            input,
            seed,
            width,
            height,
            algo,
        } => seed_fill(input, seed, width, height, algo),
        Action::Analyze {
            input,
            point,
            segment,
        } => analyze(input, point, segment),
        Action::Transform {
            input,
            translate,
            rotate,
            scale,
        } => transform(input, translate, rotate, scale),
    }
}

fn line(algo: LineAlgo, from: Point, to: Point) -> Result<String> {
    tracing::info!(%algo, ?from, ?to, "line");
    let mut trace = PixelTrace::new();
    algo.rasterize(from, to, &mut trace);
    let raster = output::Raster::new(algo.name(), trace.plots);
    Ok(serde_json::to_string_pretty(&raster)?)
}

fn conic(
    kind: ConicKind,
    center: Point,
    p2: Point,
    p3: Option<Point>,
    cfg: ConicCfg,
) -> Result<String> {
    tracing::info!(%kind, ?center, ?p2, ?p3, "conic");
    if p3.is_none() && kind.required_points() > 2 {
        tracing::warn!(%kind, "no --p3 given; nothing will be plotted");
    }
    let mut trace = PixelTrace::new();
    kind.rasterize(center, p2, p3, &cfg, &mut trace);
    let raster = output::Raster::new(kind.name(), trace.plots);
    Ok(serde_json::to_string_pretty(&raster)?)
}

fn curve(kind: CurveKind, input: PathBuf, steps: usize) -> Result<String> {
    let control = load_points(&input)?;
    tracing::info!(%kind, n = control.len(), steps, "curve");
    let points = match kind {
        CurveKind::BSpline if control.len() > 4 => sample_bspline_chain(&control, steps),
        _ => sample(kind, &control, steps),
    };
    let polyline = output::Polyline {
        kind: kind.name().to_string(),
        points: output::xys(&points),
    };
    Ok(serde_json::to_string_pretty(&polyline)?)
}

fn hull(algo: HullAlgo, input: PathBuf, trace: bool) -> Result<String> {
    let points = load_points(&input)?;
    tracing::info!(%algo, n = points.len(), trace, "hull");
    let mut events: Vec<HullEvent> = Vec::new();
    let vertices = if trace {
        algo.build_traced(&points, &mut events)
    } else {
        algo.build(&points)
    };
    let out = output::Hull {
        algo: algo.name().to_string(),
        hull: output::xys(&vertices),
        trace: trace.then(|| events.iter().map(output::HullStep::from).collect()),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn fill(input: PathBuf) -> Result<String> {
    let polygon = load_polygon(&input)?;
    let mut trace = PixelTrace::new();
    let painted = fill_polygon(&polygon, &mut trace);
    tracing::info!(n = polygon.len(), painted, "fill");
    let raster = output::Raster::new("scanline", trace.plots);
    Ok(serde_json::to_string_pretty(&raster)?)
}

const EMPTY: u8 = 0;
const OUTLINE: u8 = 1;
const FILLED: u8 = 2;

fn seed_fill(
    input: PathBuf,
    seed: (i32, i32),
    width: i32,
    height: i32,
    algo: SeedAlgo,
) -> Result<String> {
    let polygon = load_polygon(&input)?;
    let mut grid = Grid::new(width, height, EMPTY);
    {
        let mut sink = BufferSink::new(&mut grid, OUTLINE);
        for (a, b) in edges(&polygon) {
            LineAlgo::Bresenham.rasterize(a, b, &mut sink);
        }
    }
    let outcome = algo.fill(&mut grid, seed, FILLED, &SeedFillCfg::default(), || false)?;
    tracing::info!(%algo, painted = outcome.painted(), "seed fill");
    Ok(grid.render(|c| match c {
        OUTLINE => '#',
        FILLED => '*',
        _ => '.',
    }))
}

fn analyze(input: PathBuf, point: Option<Point>, segment: Option<Segment>) -> Result<String> {
    let polygon = load_polygon(&input)?;
    tracing::info!(n = polygon.len(), "analyze");
    let out = output::Analysis {
        convex: is_convex(&polygon),
        inner_normals: inner_normals(&polygon)
            .iter()
            .map(output::Normal::from)
            .collect(),
        location: point.map(|p| output::location_name(point_in_polygon(p, &polygon))),
        intersections: segment
            .map(|s| output::xys(&segment_intersects_polygon(s.a, s.b, &polygon))),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn transform(
    input: PathBuf,
    translate: Option<Point>,
    rotate: Option<f64>,
    scale: Option<Point>,
) -> Result<String> {
    let points = load_points(&input)?;
    let center = centroid(&points);
    let map = match (translate, rotate, scale) {
        (Some(d), None, None) => Affine2::translation(d.x, d.y),
        (None, Some(deg), None) => Affine2::rotation_about(deg, center),
        (None, None, Some(s)) => Affine2::scaling_about(s.x, s.y, center),
        _ => anyhow::bail!("exactly one of --translate, --rotate, --scale is required"),
    };
    tracing::info!(n = points.len(), ?center, "transform");
    let moved = map.apply_all(&points);
    Ok(serde_json::to_string_pretty(&output::xys(&moved))?)
}
