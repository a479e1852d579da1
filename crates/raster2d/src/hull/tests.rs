use super::*;
use crate::analysis::{is_convex, point_in_polygon, Location};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn sorted(v: Vec<Point>) -> Vec<(f64, f64)> {
    let mut out: Vec<(f64, f64)> = v.into_iter().map(|p| (p.x, p.y)).collect();
    out.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    out
}

fn signed_area(hull: &[Point]) -> f64 {
    crate::types::edges(hull)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

fn square_with_clutter() -> Vec<Point> {
    pts(&[
        (5.0, 5.0),
        (0.0, 0.0),
        (2.0, 7.0),
        (10.0, 0.0),
        (5.0, 0.0), // on the bottom edge
        (10.0, 10.0),
        (3.0, 3.0),
        (0.0, 10.0),
        (0.0, 4.0), // on the left edge
        (9.0, 1.0),
    ])
}

#[test]
fn square_hull_drops_interior_and_edge_points() {
    let expected = sorted(pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
    for algo in HullAlgo::ALL {
        let hull = algo.build(&square_with_clutter());
        assert_eq!(hull.len(), 4, "{algo}");
        assert!(signed_area(&hull) > 0.0, "{algo} must be counter-clockwise");
        assert_eq!(sorted(hull), expected, "{algo}");
    }
}

#[test]
fn starting_vertices() {
    let p = pts(&[(3.0, -1.0), (0.0, 2.0), (4.0, 4.0), (-1.0, 5.0), (2.0, 2.0)]);
    assert_eq!(jarvis_march(&p)[0], Point::new(-1.0, 5.0));
    assert_eq!(graham_scan(&p)[0], Point::new(3.0, -1.0));
}

#[test]
fn degenerate_inputs_yield_empty_hull() {
    let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let line = pts(&[(0.0, 0.0), (3.0, 3.0), (1.0, 1.0), (2.0, 2.0), (-4.0, -4.0)]);
    let same = pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
    for algo in HullAlgo::ALL {
        assert!(algo.build(&[]).is_empty());
        assert!(algo.build(&two).is_empty());
        assert!(algo.build(&line).is_empty(), "{algo} on collinear input");
        assert!(algo.build(&same).is_empty(), "{algo} on coincident input");
    }
}

#[test]
fn duplicates_do_not_repeat_vertices() {
    let p = pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 0.0),
        (3.0, 5.0),
        (3.0, 5.0),
        (3.0, 1.0),
    ]);
    for algo in HullAlgo::ALL {
        let hull = algo.build(&p);
        assert_eq!(hull.len(), 3, "{algo}: {hull:?}");
    }
}

#[test]
fn graham_trace_records_sort_then_stack_operations() {
    let mut events: Vec<HullEvent> = Vec::new();
    let hull = HullAlgo::Graham.build_traced(&square_with_clutter(), &mut events);
    match events.first() {
        Some(HullEvent::Sorted { pivot, order }) => {
            assert_eq!(*pivot, Point::new(0.0, 0.0));
            assert_eq!(order[0], *pivot);
        }
        other => panic!("expected Sorted first, got {other:?}"),
    }
    let pushes = events
        .iter()
        .filter(|e| matches!(e, HullEvent::Push(_)))
        .count();
    let pops = events
        .iter()
        .filter(|e| matches!(e, HullEvent::Pop(_)))
        .count();
    // two seed entries go on the stack without a Push event
    assert_eq!(2 + pushes - pops, hull.len());
    assert!(pops > 0, "the interior points must be popped");
}

#[test]
fn jarvis_trace_lists_vertices_in_order() {
    let mut events: Vec<HullEvent> = Vec::new();
    let hull = jarvis_march_traced(&square_with_clutter(), &mut events);
    let vertices: Vec<Point> = events
        .iter()
        .filter_map(|e| match e {
            HullEvent::Vertex(v) => Some(*v),
            _ => None,
        })
        .collect();
    assert_eq!(vertices, hull);
    assert!(events
        .iter()
        .any(|e| matches!(e, HullEvent::Candidate { .. })));
}

#[test]
fn algo_parses_case_insensitively() {
    assert_eq!("Graham".parse::<HullAlgo>(), Ok(HullAlgo::Graham));
    assert_eq!("jarvis".parse::<HullAlgo>(), Ok(HullAlgo::Jarvis));
    assert!("quickhull".parse::<HullAlgo>().is_err());
}

// Integer coordinates keep every orientation test exact, so both builders
// must agree bit for bit on the vertex set.
fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    #[test]
    fn builders_agree_on_vertex_set(points in grid_points()) {
        let j = jarvis_march(&points);
        let g = graham_scan(&points);
        prop_assert_eq!(sorted(j), sorted(g));
    }

    #[test]
    fn hull_is_convex_ccw_and_contains_input(points in grid_points()) {
        for algo in HullAlgo::ALL {
            let hull = algo.build(&points);
            if hull.is_empty() {
                continue;
            }
            prop_assert!(hull.len() >= 3);
            prop_assert!(is_convex(&hull));
            prop_assert!(signed_area(&hull) > 0.0);
            for p in &points {
                prop_assert_ne!(point_in_polygon(*p, &hull), Location::Outside);
            }
        }
    }

    #[test]
    fn hull_of_hull_is_itself(points in grid_points()) {
        for algo in HullAlgo::ALL {
            let hull = algo.build(&points);
            let again = algo.build(&hull);
            prop_assert_eq!(sorted(hull), sorted(again));
        }
    }
}
