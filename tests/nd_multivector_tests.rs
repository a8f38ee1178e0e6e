// tests/nd_multivector_tests.rs

use pga_engine::nd::algebra::Algebra;
use pga_engine::nd::multivector::Multivector;
use pga_engine::nd::signature::Signature;
use pga_engine::nd::types::Scalar;

/// Helper to build a Cl(2,0,0) multivector from its 4 components:
/// [scalar, e0, e1, e01]
fn mv2(data: [Scalar; 4]) -> Multivector {
    Multivector::new(data.to_vec())
}

fn euclid2() -> Algebra {
    Algebra::new(Signature::new(2, 0, 0).unwrap())
}

#[test]
fn basis_blade_products_2d() {
    let alg = euclid2();
    let s = mv2([1.0, 0.0, 0.0, 0.0]);
    let e0 = mv2([0.0, 1.0, 0.0, 0.0]);
    let e1 = mv2([0.0, 0.0, 1.0, 0.0]);
    let e01 = mv2([0.0, 0.0, 0.0, 1.0]);

    // 1 * anything = itself
    assert_eq!(alg.geometric_product(&s, &e0).data, e0.data);
    assert_eq!(alg.geometric_product(&e1, &s).data, e1.data);

    // e0*e0 = e1*e1 = +1
    assert_eq!(alg.geometric_product(&e0, &e0).data, s.data);
    assert_eq!(alg.geometric_product(&e1, &e1).data, s.data);

    // e0 e1 = e01, e1 e0 = -e01
    assert_eq!(alg.geometric_product(&e0, &e1).data, e01.data);
    assert_eq!(alg.geometric_product(&e1, &e0), -e01.clone());

    // pseudoscalar square = -1
    assert_eq!(alg.geometric_product(&e01, &e01), -s);
}

#[test]
fn mixed_dot_and_wedge_2d() {
    // (a e0 + b e1) * (c e0 + d e1) = (ac+bd) + (ad−bc) e01
    let alg = euclid2();
    let a = mv2([0.0, 2.0, 3.0, 0.0]);
    let b = mv2([0.0, 5.0, 7.0, 0.0]);

    let prod = alg.geometric_product(&a, &b);
    assert!((prod.data[0] - 31.0).abs() < 1e-12);
    assert!((prod.data[3] + 1.0).abs() < 1e-12);
    assert_eq!(prod.data[1], 0.0);
    assert_eq!(prod.data[2], 0.0);

    // the outer product keeps only the e01 part
    let wedge = alg.outer_product(&a, &b);
    assert_eq!(wedge.data, vec![0.0, 0.0, 0.0, -1.0]);
}

#[test]
fn geometric_product_is_associative_in_pga() {
    let alg = Algebra::new(Signature::pga2d());
    let a = Multivector::new(vec![0.5, 1.0, -2.0, 0.25, 3.0, -1.0, 0.75, 2.0]);
    let b = Multivector::new(vec![1.0, -0.5, 0.0, 2.0, 1.5, 0.5, -1.0, 0.0]);
    let c = Multivector::new(vec![-1.0, 0.0, 1.0, 0.5, -0.25, 2.0, 1.0, -0.5]);

    let left = alg.geometric_product(&alg.geometric_product(&a, &b), &c);
    let right = alg.geometric_product(&a, &alg.geometric_product(&b, &c));
    assert!(left.approx_eq(&right, 1e-12));
}

#[test]
fn reverse_is_an_anti_automorphism() {
    let alg = Algebra::new(Signature::new(3, 0, 1).unwrap());
    let a = Multivector::new((0..16).map(|i| (i as Scalar) * 0.5 - 3.0).collect());
    let b = Multivector::new((0..16).map(|i| ((i * 7) % 5) as Scalar - 2.0).collect());

    let lhs = alg.reverse(&alg.geometric_product(&a, &b));
    let rhs = alg.geometric_product(&alg.reverse(&b), &alg.reverse(&a));
    assert!(lhs.approx_eq(&rhs, 1e-12));
}

#[test]
fn norm_of_euclidean_vector() {
    let alg = Algebra::new(Signature::new(3, 0, 0).unwrap());
    let v = alg.from_terms(&[(0b001, 1.0), (0b010, 2.0), (0b100, 2.0)]);
    assert_eq!(alg.norm_squared(&v), 9.0);
    assert_eq!(alg.norm(&v), 3.0);
}

#[test]
fn batch_matches_sequential() {
    let alg = Algebra::new(Signature::pga2d());
    let pairs: Vec<(Multivector, Multivector)> = (0..64)
        .map(|i| {
            let x = i as Scalar;
            (
                Multivector::new(vec![x, 1.0, -x, 0.5, 2.0, x * 0.25, -1.0, 0.0]),
                Multivector::new(vec![1.0, x, 0.0, -2.0, 0.5, 1.0, x, 3.0]),
            )
        })
        .collect();
    let batched = alg.gp_batch(&pairs);
    for ((a, b), got) in pairs.iter().zip(&batched) {
        assert_eq!(&alg.geometric_product(a, b), got);
    }
}
