//! Draws every kernel component into one ASCII canvas.
//!
//! Run with `cargo run -p raster2d --example ascii_canvas`.

use raster2d::prelude::*;
use raster2d::rand::{scatter_points, Bounds2, ReplayToken};

const W: i32 = 72;
const H: i32 = 36;

fn main() {
    let mut canvas = Grid::new(W, H, ' ');

    // random cloud and its hull, filled with the scanline filler
    let bounds = Bounds2::new(Vec2::new(4.0, 4.0), Vec2::new(30.0, 30.0));
    let cloud = scatter_points(24, bounds, ReplayToken::new(7, 0));
    let hull = HullAlgo::Graham.build(&cloud);
    fill_polygon(&hull, &mut BufferSink::new(&mut canvas, '.'));
    for (a, b) in raster2d::types::edges(&hull) {
        LineAlgo::Bresenham.rasterize(a, b, &mut BufferSink::new(&mut canvas, '#'));
    }
    for p in &cloud {
        canvas.set(p.x.floor() as i32, p.y.floor() as i32, 'o');
    }

    // a circle and an ellipse
    let cfg = ConicCfg::default();
    ConicKind::Circle.rasterize(
        Vec2::new(50.0, 24.0),
        Vec2::new(58.0, 24.0),
        None,
        &cfg,
        &mut BufferSink::new(&mut canvas, '*'),
    );
    ConicKind::Ellipse.rasterize(
        Vec2::new(50.0, 24.0),
        Vec2::new(64.0, 0.0),
        Some(Vec2::new(0.0, 29.0)),
        &cfg,
        &mut BufferSink::new(&mut canvas, '+'),
    );

    // a Bézier curve, drawn as a polyline
    let ctrl = [
        Vec2::new(36.0, 2.0),
        Vec2::new(44.0, 14.0),
        Vec2::new(60.0, -4.0),
        Vec2::new(70.0, 8.0),
    ];
    let poly = sample(CurveKind::Bezier, &ctrl, 24);
    for w in poly.windows(2) {
        LineAlgo::Dda.rasterize(w[0], w[1], &mut BufferSink::new(&mut canvas, '~'));
    }

    // flood the inside of the circle
    let outcome = flood_fill(&mut canvas, (50, 24), ':', &SeedFillCfg::default(), || false);

    println!("{}", canvas.render(|c| c));
    println!();
    println!("hull: {} vertices, convex = {}", hull.len(), is_convex(&hull));
    match outcome {
        Ok(o) => println!("flood fill painted {} pixels", o.painted()),
        Err(e) => println!("flood fill failed: {e}"),
    }
    let query = Vec2::new(17.0, 17.0);
    println!("{query:?} is {:?} the hull", point_in_polygon(query, &hull));
}
