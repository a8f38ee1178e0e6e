// tests/skeleton_golden_tests.rs
//! Equilateral triangle straight-skeleton bisectors against golden values.

use pga_engine::prelude::*;

const EPS: f64 = 1e-9;

const A: (f64, f64) = (1.0, 1.7320508075688772);
const B: (f64, f64) = (0.0, 0.0);
const C: (f64, f64) = (2.0, 0.0);

// Golden bisector coefficients (a, b, c), kept verbatim including rounding.
const ADA: (f64, f64, f64) = (-1.0, 0.0, 1.0);
const ADB: (f64, f64, f64) = (0.5000000000000001, -0.8660254037844387, 0.0);
const ADC: (f64, f64, f64) = (0.5000000000000001, 0.8660254037844387, -1.0000000000000002);

fn assert_line(pga: &Pga2, line: &Multivector, golden: (f64, f64, f64)) {
    let (a, b, c) = pga.line_coefficients(line);
    assert!(
        (a - golden.0).abs() < EPS && (b - golden.1).abs() < EPS && (c - golden.2).abs() < EPS,
        "got ({}, {}, {}), expected {:?}",
        a,
        b,
        c,
        golden
    );
}

fn triangle(pga: &Pga2) -> Polygon {
    Polygon::new(pga, &[A, B, C]).unwrap()
}

#[test]
fn vertices_round_trip() {
    let pga = Pga2::new();
    let tri = triangle(&pga);
    for (v, expected) in tri.vertices().iter().zip([A, B, C]) {
        let (x, y) = pga.point_coordinates(v).unwrap();
        assert!((x - expected.0).abs() < EPS && (y - expected.1).abs() < EPS);
    }
}

#[test]
fn edges_pass_through_their_endpoints() {
    let pga = Pga2::new();
    let tri = triangle(&pga);
    let coords = [A, B, C];
    for (i, edge) in tri.edges().iter().enumerate() {
        for &(x, y) in &[coords[i], coords[(i + 1) % 3]] {
            let d = pga.signed_distance(edge, &pga.point(x, y)).unwrap();
            assert!(d.abs() < EPS, "edge {} misses ({}, {})", i, x, y);
        }
    }
    // B–C lies on the x axis
    assert_line(&pga, &pga.normalize_line(&tri.edges()[1]), (0.0, 1.0, 0.0));
}

#[test]
fn bisectors_match_golden() {
    let pga = Pga2::new();
    let bisectors = triangle(&pga).bisectors();
    assert_eq!(bisectors.len(), 3);
    assert_line(&pga, &bisectors[0], ADA);
    assert_line(&pga, &bisectors[1], ADB);
    assert_line(&pga, &bisectors[2], ADC);
}

#[test]
fn golden_lines_built_directly_agree() {
    let pga = Pga2::new();
    let bisectors = triangle(&pga).bisectors();
    for (computed, golden) in bisectors.iter().zip([ADA, ADB, ADC]) {
        let direct = pga.line(golden.0, golden.1, golden.2);
        assert!(computed.approx_eq(&direct, EPS));
    }
}

#[test]
fn bisectors_meet_at_the_incentre() {
    let pga = Pga2::new();
    let b = triangle(&pga).bisectors();
    let centre = (1.0, 1.7320508075688772 / 3.0);
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let (x, y) = pga.point_coordinates(&pga.meet(&b[i], &b[j])).unwrap();
        assert!((x - centre.0).abs() < EPS && (y - centre.1).abs() < EPS);
    }
}

#[test]
fn apex_bisector_is_perpendicular_bisector_of_base() {
    let pga = Pga2::new();
    let ada = &triangle(&pga).bisectors()[0];
    let midpoint = pga.point(1.0, 0.0);
    assert!(pga.signed_distance(ada, &midpoint).unwrap().abs() < EPS);
    // and it is normalised
    let (a, b, _) = pga.line_coefficients(ada);
    assert!((a * a + b * b - 1.0).abs() < EPS);
}
