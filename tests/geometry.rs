use ninja_star::geometry::{
    circle_outline, flatten, star_outline, MIN_CIRCLE_RESOLUTION, STAR_VERTEX_COUNT,
};
use ninja_star::Error;
use rstest::rstest;
use std::f32::consts::TAU;

const EPS: f32 = 1e-5;

#[test]
fn star_is_fixed_ten_point_fan() {
    let star = star_outline();
    assert_eq!(star.len(), STAR_VERTEX_COUNT);
    assert_eq!(star[0].to_array(), [0.0, 0.0]);
    // Last rim vertex repeats the first to close the fan.
    assert_eq!(star[1], star[9]);
    assert_eq!(star, star_outline());
}

#[test]
fn default_circle_has_seventy_unit_points() {
    let circle = circle_outline(72).unwrap();
    assert_eq!(circle.len(), 70);
    for p in &circle {
        assert!((p.length() - 1.0).abs() < EPS, "{p:?} is off the unit circle");
    }
    assert!((circle[0].x - 1.0).abs() < EPS && circle[0].y.abs() < EPS);
}

#[test]
fn circle_points_are_evenly_spaced_and_ordered() {
    let circle = circle_outline(72).unwrap();
    let step = TAU / 70.0;
    let mut prev = -1.0;
    for (i, p) in circle.iter().enumerate() {
        let angle = p.y.atan2(p.x).rem_euclid(TAU);
        assert!(angle > prev, "point {i} breaks the ordering");
        assert!((angle - step * i as f32).abs() < 1e-4);
        prev = angle;
    }
    // The gap from the last point back to the first is one more step.
    let last = circle[69];
    let last_angle = last.y.atan2(last.x).rem_euclid(TAU);
    assert!((TAU - last_angle - step).abs() < 1e-4);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn circle_rejects_degenerate_resolution(#[case] resolution: usize) {
    assert_eq!(circle_outline(resolution), Err(Error::InvalidResolution(resolution)));
}

#[rstest]
#[case(5, 3)]
#[case(6, 4)]
#[case(72, 70)]
fn circle_point_count(#[case] resolution: usize, #[case] expected: usize) {
    assert_eq!(circle_outline(resolution).unwrap().len(), expected);
}

#[test]
fn smallest_circle_is_a_triangle() {
    let tri = circle_outline(MIN_CIRCLE_RESOLUTION).unwrap();
    assert_eq!(tri.len(), 3);
    // Three distinct rim points enclose a non-zero area.
    let area = (tri[1] - tri[0]).perp_dot(tri[2] - tri[0]) / 2.0;
    assert!(area > 1.0, "area {area}");
}

#[test]
fn flatten_interleaves_xy() {
    let star = star_outline();
    let flat = flatten(&star[..3]);
    assert_eq!(flat, vec![0.0, 0.0, 0.5, 0.0, 1.0, 1.0]);
    assert_eq!(flatten(&star).len(), 2 * STAR_VERTEX_COUNT);
}
