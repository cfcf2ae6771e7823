use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn short_inputs_pass_through() {
    assert!(filter_parallel_points(&[]).is_empty());
    assert_eq!(filter_parallel_points(&[p(1.0, 1.0)]), vec![p(1.0, 1.0)]);
    assert_eq!(
        filter_parallel_points(&[p(0.0, 0.0), p(1.0, 1.0)]),
        vec![p(0.0, 0.0), p(1.0, 1.0)]
    );
}

#[test]
fn collinear_runs_collapse_to_endpoints() {
    let pts = [p(0.0, 0.0), p(500.0, 0.0), p(1000.0, 0.0)];
    assert_eq!(filter_parallel_points(&pts), vec![p(0.0, 0.0), p(1000.0, 0.0)]);

    let pts = [
        p(0.0, 0.0),
        p(1.0, 1.0),
        p(2.0, 2.0),
        p(3.0, 3.0),
        p(3.0, 10.0),
        p(3.0, 20.0),
    ];
    assert_eq!(
        filter_parallel_points(&pts),
        vec![p(0.0, 0.0), p(3.0, 3.0), p(3.0, 20.0)]
    );
}

#[test]
fn duplicates_are_removed() {
    let pts = [p(0.0, 0.0), p(0.0, 0.0), p(5.0, 5.0), p(5.0, 5.0), p(5.0, 9.0)];
    assert_eq!(
        filter_parallel_points(&pts),
        vec![p(0.0, 0.0), p(5.0, 5.0), p(5.0, 9.0)]
    );
}

#[test]
fn corners_and_reversals_are_kept() {
    let corner = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
    assert_eq!(filter_parallel_points(&corner), corner.to_vec());

    let reversal = [p(0.0, 0.0), p(10.0, 0.0), p(4.0, 0.0)];
    assert_eq!(filter_parallel_points(&reversal), reversal.to_vec());
}

#[test]
fn near_collinear_within_tolerance_collapses() {
    let pts = [p(0.0, 0.0), p(500.0, 1e-10), p(1000.0, 0.0)];
    assert_eq!(filter_parallel_points(&pts), vec![p(0.0, 0.0), p(1000.0, 0.0)]);
}

#[test]
fn filtering_is_idempotent() {
    let inputs: Vec<Vec<Point>> = vec![
        vec![p(0.0, 0.0), p(500.0, 0.0), p(1000.0, 0.0)],
        vec![p(0.0, 0.0), p(0.0, 0.0), p(2.0, 1.0), p(4.0, 2.0), p(4.0, 8.0), p(1.0, 8.0)],
        vec![p(10.0, 10.0), p(20.0, 5.0), p(30.0, 0.0), p(30.0, 0.0), p(25.0, 0.0)],
    ];
    for pts in inputs {
        let once = filter_parallel_points(&pts);
        let twice = filter_parallel_points(&once);
        assert_eq!(once, twice);
    }
}
