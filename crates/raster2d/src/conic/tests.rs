use super::*;
use crate::types::PixelTrace;
use std::collections::HashSet;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn run(kind: ConicKind, c: Point, p2: Point, p3: Option<Point>, cfg: ConicCfg) -> PixelTrace {
    let mut trace = PixelTrace::new();
    kind.rasterize(c, p2, p3, &cfg, &mut trace);
    trace
}

/// Pixels relative to the center, first quadrant folded.
fn folded(trace: &PixelTrace, cx: i32, cy: i32) -> Vec<(f64, f64)> {
    trace
        .plots
        .iter()
        .map(|p| (((p.x - cx).abs()) as f64, ((p.y - cy).abs()) as f64))
        .collect()
}

#[test]
fn circle_pixels_lie_on_true_circle() {
    let t = run(
        ConicKind::Circle,
        pt(50.0, 50.0),
        pt(60.0, 50.0),
        None,
        ConicCfg::default(),
    );
    assert!(!t.is_empty());
    for (x, y) in folded(&t, 50, 50) {
        let r = (x * x + y * y).sqrt();
        assert!((r - 10.0).abs() <= 1.0, "({x},{y}) at distance {r}");
    }
    let set: HashSet<_> = t.coords().into_iter().collect();
    for p in [(60, 50), (40, 50), (50, 60), (50, 40)] {
        assert!(set.contains(&p), "missing extreme {p:?}");
    }
    // mirror symmetric about both axes and the diagonal
    for &(x, y) in &set {
        let (dx, dy) = (x - 50, y - 50);
        assert!(set.contains(&(50 - dx, 50 + dy)));
        assert!(set.contains(&(50 + dx, 50 - dy)));
        assert!(set.contains(&(50 + dy, 50 + dx)));
    }
}

#[test]
fn circle_radius_from_diagonal_point() {
    // distance 5 from (3,4)
    let t = run(
        ConicKind::Circle,
        pt(0.0, 0.0),
        pt(3.0, 4.0),
        None,
        ConicCfg::default(),
    );
    let set: HashSet<_> = t.coords().into_iter().collect();
    assert!(set.contains(&(5, 0)) && set.contains(&(0, -5)));
}

#[test]
fn zero_radius_and_axes_plot_nothing() {
    let cfg = ConicCfg::default();
    let c = pt(10.0, 10.0);
    assert!(run(ConicKind::Circle, c, c, None, cfg).is_empty());
    assert!(run(ConicKind::Ellipse, c, pt(10.0, 30.0), Some(pt(20.0, 15.0)), cfg).is_empty());
    assert!(run(ConicKind::Hyperbola, c, pt(15.0, 0.0), Some(pt(0.0, 10.0)), cfg).is_empty());
    assert!(run(ConicKind::Parabola, c, pt(40.0, 10.0), None, cfg).is_empty());
    // missing third point for the two-axis curves
    assert!(run(ConicKind::Ellipse, c, pt(20.0, 10.0), None, cfg).is_empty());
    assert!(run(ConicKind::Hyperbola, c, pt(20.0, 10.0), None, cfg).is_empty());
}

#[test]
fn ellipse_pixels_lie_on_true_ellipse() {
    let (rx, ry) = (20.0f64, 9.0f64);
    let t = run(
        ConicKind::Ellipse,
        pt(0.0, 0.0),
        pt(rx, 3.0),
        Some(pt(-4.0, -ry)),
        ConicCfg::default(),
    );
    assert!(!t.is_empty());
    for (x, y) in folded(&t, 0, 0) {
        let xc = rx * (1.0 - (y / ry).powi(2)).max(0.0).sqrt();
        let yc = ry * (1.0 - (x / rx).powi(2)).max(0.0).sqrt();
        assert!(
            (x - xc).abs() <= 1.0 || (y - yc).abs() <= 1.0,
            "({x},{y}) too far from the ellipse"
        );
    }
    let set: HashSet<_> = t.coords().into_iter().collect();
    for p in [(20, 0), (-20, 0), (0, 9), (0, -9)] {
        assert!(set.contains(&p), "missing extreme {p:?}");
    }
}

#[test]
fn hyperbola_pixels_lie_on_true_curve() {
    for (a, b) in [(10.0f64, 5.0f64), (5.0, 20.0), (12.0, 12.0)] {
        let cfg = ConicCfg { max_extent: 80 };
        let t = run(
            ConicKind::Hyperbola,
            pt(100.0, 100.0),
            pt(100.0 + a, 0.0),
            Some(pt(0.0, 100.0 - b)),
            cfg,
        );
        assert!(!t.is_empty());
        for (x, y) in folded(&t, 100, 100) {
            assert!(x <= 80.0 && y <= 80.0);
            let xc = a * (1.0 + (y / b).powi(2)).sqrt();
            let yc = b * ((x / a).powi(2) - 1.0).max(0.0).sqrt();
            assert!(
                (x - xc).abs() <= 1.0 || (y - yc).abs() <= 1.0,
                "a={a} b={b}: ({x},{y}) too far from the hyperbola"
            );
        }
        let set: HashSet<_> = t.coords().into_iter().collect();
        let ai = a as i32;
        assert!(set.contains(&(100 + ai, 100)) && set.contains(&(100 - ai, 100)));
    }
}

#[test]
fn parabola_pixels_lie_on_true_curve() {
    let cfg = ConicCfg { max_extent: 200 };
    // focus above the vertex in y, half-width 30 from the third point
    let t = run(
        ConicKind::Parabola,
        pt(0.0, 0.0),
        pt(2.0, -6.0),
        Some(pt(30.0, 0.0)),
        cfg,
    );
    assert!(!t.is_empty());
    let p = 6.0;
    for plot in &t.plots {
        assert!(plot.y <= 0, "opens toward the focus");
        assert!(plot.x.abs() <= 30);
        let (x, y) = (plot.x.abs() as f64, (-plot.y) as f64);
        let yc = x * x / (4.0 * p);
        let xc = (4.0 * p * y).sqrt();
        assert!(
            (y - yc).abs() <= 1.0 || (x - xc).abs() <= 1.0,
            "({x},{y}) too far from the parabola"
        );
    }
    assert!(t.coords().contains(&(0, 0)));
}

#[test]
fn parabola_without_third_point_uses_extent() {
    let cfg = ConicCfg { max_extent: 40 };
    let t = run(ConicKind::Parabola, pt(0.0, 0.0), pt(0.0, 10.0), None, cfg);
    assert!(!t.is_empty());
    assert!(t.plots.iter().all(|p| p.x.abs() <= 40 && (0..=40).contains(&p.y)));
}

#[test]
fn large_axes_stay_in_range() {
    let cfg = ConicCfg::default();
    let o = pt(0.0, 0.0);
    // vertex past max_extent
    let t = run(ConicKind::Hyperbola, o, pt(50_000.0, 0.0), Some(pt(0.0, 50_000.0)), cfg);
    assert!(t.is_empty());
    // b² (2x + 1)² is past i64 here
    let wide = ConicCfg { max_extent: 5000 };
    let t = run(ConicKind::Hyperbola, o, pt(3000.0, 0.0), Some(pt(0.0, 2e6)), wide);
    assert!(t.coords().contains(&(3000, 0)));
    assert!(t.plots.iter().all(|p| p.x.abs() <= 5000 && p.y.abs() <= 5000));
    // beyond the accepted axis length
    let far = ConicCfg { max_extent: i64::MAX };
    assert!(run(ConicKind::Circle, o, pt(1e300, 0.0), None, cfg).is_empty());
    assert!(run(ConicKind::Ellipse, o, pt(1e12, 0.0), Some(pt(0.0, 1e12)), cfg).is_empty());
    assert!(run(ConicKind::Hyperbola, o, pt(1e12, 0.0), Some(pt(0.0, 5.0)), far).is_empty());
    assert!(run(ConicKind::Parabola, o, pt(0.0, 1e12), None, far).is_empty());
    assert!(!run(ConicKind::Parabola, o, pt(0.0, 1e7), None, cfg).is_empty());
}

#[test]
fn ellipse_with_million_pixel_axes() {
    let r = 2_500_000;
    let (mut n, mut max_x, mut max_y) = (0usize, 0i32, 0i32);
    let mut sink = |x: i32, y: i32, _: f64| {
        n += 1;
        max_x = max_x.max(x.abs());
        max_y = max_y.max(y.abs());
    };
    ConicKind::Ellipse.rasterize(
        pt(0.0, 0.0),
        pt(r as f64, 0.0),
        Some(pt(0.0, r as f64)),
        &ConicCfg::default(),
        &mut sink,
    );
    assert!(n > 4 * r as usize);
    assert_eq!((max_x, max_y), (r, r));
}

#[test]
fn kinds_parse_and_report_arity() {
    for k in ConicKind::ALL {
        assert_eq!(k.name().parse::<ConicKind>(), Ok(k));
    }
    assert_eq!(ConicKind::Circle.required_points(), 2);
    assert_eq!(ConicKind::Hyperbola.required_points(), 3);
    assert!("spiral".parse::<ConicKind>().is_err());
}
