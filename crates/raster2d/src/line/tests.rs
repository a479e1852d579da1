use super::*;
use crate::types::PixelTrace;

fn trace_of(algo: LineAlgo, a: (f64, f64), b: (f64, f64)) -> PixelTrace {
    let mut trace = PixelTrace::new();
    algo.rasterize(Point::new(a.0, a.1), Point::new(b.0, b.1), &mut trace);
    trace
}

#[test]
fn bresenham_shallow_segment() {
    let t = trace_of(LineAlgo::Bresenham, (0.0, 0.0), (5.0, 2.0));
    let px = t.coords();
    assert_eq!(px.len(), 6);
    assert_eq!(px.first(), Some(&(0, 0)));
    assert_eq!(px.last(), Some(&(5, 2)));
    for (i, w) in px.windows(2).enumerate() {
        assert_eq!(w[1].0, w[0].0 + 1, "x must step by one at {i}");
        assert!(w[1].1 >= w[0].1, "y must not decrease at {i}");
    }
}

#[test]
fn bresenham_all_octants_hit_endpoints() {
    let ends: [(i32, i32); 12] = [
        (7, 3),
        (3, 7),
        (-3, 7),
        (-7, 3),
        (-7, -3),
        (-3, -7),
        (3, -7),
        (7, -3),
        (5, 5),
        (-4, 4),
        (0, 6),
        (6, 0),
    ];
    for (ex, ey) in ends {
        let t = trace_of(LineAlgo::Bresenham, (0.0, 0.0), (ex as f64, ey as f64));
        let px = t.coords();
        let major = ex.abs().max(ey.abs()) as usize;
        assert_eq!(px.len(), major + 1, "count for ({ex},{ey})");
        assert_eq!(px[0], (0, 0));
        assert_eq!(*px.last().unwrap(), (ex, ey));
        // monotone along the dominant axis, 8-connected
        for w in px.windows(2) {
            let (ddx, ddy) = (w[1].0 - w[0].0, w[1].1 - w[0].1);
            assert!(ddx.abs() <= 1 && ddy.abs() <= 1);
            if ex.abs() > ey.abs() {
                assert_eq!(ddx, ex.signum());
            } else {
                assert_eq!(ddy, ey.signum());
            }
        }
    }
}

#[test]
fn bresenham_single_point() {
    let t = trace_of(LineAlgo::Bresenham, (3.2, 4.9), (3.7, 4.1));
    assert_eq!(t.coords(), vec![(3, 4)]);
}

#[test]
fn dda_matches_expected_pixels() {
    let t = trace_of(LineAlgo::Dda, (0.0, 0.0), (5.0, 2.0));
    assert_eq!(
        t.coords(),
        vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
    );
    assert!(t.plots.iter().all(|p| p.intensity == 1.0));
}

#[test]
fn dda_zero_length_and_vertical() {
    let t = trace_of(LineAlgo::Dda, (2.0, 2.0), (2.0, 2.0));
    assert_eq!(t.coords(), vec![(2, 2)]);

    let v = trace_of(LineAlgo::Dda, (2.0, 0.0), (2.0, 4.0));
    assert_eq!(v.coords(), vec![(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
}

#[test]
fn wu_interior_pairs_sum_to_one() {
    for (a, b) in [
        ((0.0, 0.0), (10.0, 3.0)),
        ((1.3, 2.7), (17.9, 9.1)),
        ((0.0, 0.0), (4.0, 13.0)),
        ((20.0, 5.0), (2.0, 1.5)),
    ] {
        let t = trace_of(LineAlgo::Wu, a, b);
        assert!(t.len() >= 4);
        assert_eq!(t.len() % 2, 0);
        let interior = &t.plots[2..t.len() - 2];
        for pair in interior.chunks(2) {
            let sum = pair[0].intensity + pair[1].intensity;
            assert!((sum - 1.0).abs() < 1e-9, "pair {pair:?} sums to {sum}");
            // the pair shares the major-axis coordinate and straddles the minor one
            let same_x = pair[0].x == pair[1].x && pair[1].y == pair[0].y + 1;
            let same_y = pair[0].y == pair[1].y && pair[1].x == pair[0].x + 1;
            assert!(same_x || same_y);
        }
    }
}

#[test]
fn wu_pair_count_and_caps() {
    let t = trace_of(LineAlgo::Wu, (0.0, 0.0), (10.0, 3.0));
    // two caps plus one pair per interior column 1..=9
    assert_eq!(t.len(), 2 + 2 * 9 + 2);
    let cap = t.plots[0].intensity + t.plots[1].intensity;
    assert!((cap - 0.5).abs() < 1e-9, "first cap weighted by xgap");
    assert!(t.plots.iter().all(|p| (0.0..=1.0).contains(&p.intensity)));
}

#[test]
fn wu_degenerate_cases_bypass_interpolation() {
    assert_eq!(trace_of(LineAlgo::Wu, (3.0, 3.0), (3.0, 3.0)).coords(), vec![(3, 3)]);
    let v = trace_of(LineAlgo::Wu, (1.0, 5.0), (1.0, 2.0));
    assert_eq!(v.coords(), vec![(1, 2), (1, 3), (1, 4), (1, 5)]);
    let h = trace_of(LineAlgo::Wu, (0.0, 7.0), (3.0, 7.0));
    assert_eq!(h.coords(), vec![(0, 7), (1, 7), (2, 7), (3, 7)]);
    assert!(h.plots.iter().all(|p| p.intensity == 1.0));
}

#[test]
fn algo_names_round_trip_through_from_str() {
    for algo in LineAlgo::ALL {
        assert_eq!(algo.name().parse::<LineAlgo>(), Ok(algo));
    }
    assert_eq!("Bresenham".parse::<LineAlgo>(), Ok(LineAlgo::Bresenham));
    assert!(matches!(
        "spline".parse::<LineAlgo>(),
        Err(KernelError::UnknownAlgorithm(_))
    ));
}

#[test]
fn dispatch_table_drives_any_sink() {
    let mut n = 0usize;
    let mut count = |_x: i32, _y: i32, _i: f64| n += 1;
    let f = LineAlgo::Bresenham.rasterizer();
    f(Point::new(0.0, 0.0), Point::new(9.0, 4.0), &mut count);
    assert_eq!(n, 10);
}
