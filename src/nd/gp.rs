//! Product-table builder for arbitrary signatures.
//!
//! For blades `i`, `j` the geometric product is a single signed blade
//! `sign · e_(i ^ j)`. The sign is the reordering parity times the squares
//! of the shared basis vectors, so any shared null vector zeroes the entry.

use crate::nd::blade::{grade, reorder_sign};
use crate::nd::signature::Signature;
use crate::nd::types::{BladeMask, Scalar};

/// Build the full geometric-product table for `sig`.
///
/// Returns a `Vec` of length `(2ⁿ)*(2ⁿ)`, indexed by `i*m + j`.
pub fn make_gp_table(sig: &Signature) -> Vec<(Scalar, BladeMask)> {
    let metrics = sig.metrics();
    let m = sig.blade_count() as BladeMask;
    let mut table = Vec::with_capacity((m * m) as usize);
    for i in 0..m {
        for j in 0..m {
            table.push(sign_and_index(i, j, &metrics));
        }
    }
    table
}

/// Outer-product table: the geometric table restricted to disjoint pairs.
pub fn make_outer_table(sig: &Signature) -> Vec<(Scalar, BladeMask)> {
    let m = sig.blade_count() as BladeMask;
    let mut table = Vec::with_capacity((m * m) as usize);
    for i in 0..m {
        for j in 0..m {
            let sign = if i & j == 0 { reorder_sign(i, j) } else { 0.0 };
            table.push((sign, i ^ j));
        }
    }
    table
}

/// Right-complement signs: `e_i ∧ (s_i · e_(!i)) = I` for every blade `i`.
pub fn make_dual_signs(sig: &Signature) -> Vec<Scalar> {
    let full = (sig.blade_count() - 1) as BladeMask;
    (0..=full).map(|i| reorder_sign(i, full ^ i)).collect()
}

/// Left-complement signs: `(s_i · e_(!i)) ∧ e_i = I`; inverts the right complement.
pub fn make_undual_signs(sig: &Signature) -> Vec<Scalar> {
    let full = (sig.blade_count() - 1) as BladeMask;
    (0..=full).map(|i| reorder_sign(full ^ i, i)).collect()
}

/// Grade of every blade, cached so hot loops avoid popcounts.
pub fn make_grades(sig: &Signature) -> Vec<usize> {
    (0..sig.blade_count() as BladeMask).map(grade).collect()
}

/// Sign and output blade for blade `i` × blade `j` under `metrics`.
fn sign_and_index(i: BladeMask, j: BladeMask, metrics: &[Scalar]) -> (Scalar, BladeMask) {
    let k = i ^ j;
    let mut sign = reorder_sign(i, j);
    let mut shared = i & j;
    let mut bit = 0usize;
    while shared != 0 {
        if shared & 1 != 0 {
            sign *= metrics[bit];
        }
        shared >>= 1;
        bit += 1;
    }
    // -0.0 from a null metric would print oddly; keep zero entries positive
    if sign == 0.0 {
        sign = 0.0;
    }
    (sign, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_vector_squares_to_zero() {
        let sig = Signature::pga2d();
        let table = make_gp_table(&sig);
        // e0*e0 = 0
        assert_eq!(table[1 * 8 + 1], (0.0, 0));
        // e01*e01 = e0 e1 e0 e1 = -e0 e0 = 0
        assert_eq!(table[3 * 8 + 3].0, 0.0);
        // e12*e12 = -1
        assert_eq!(table[6 * 8 + 6], (-1.0, 0));
    }

    #[test]
    fn dual_and_undual_signs_are_inverse() {
        for sig in [
            Signature::pga2d(),
            Signature::new(3, 0, 1).unwrap(),
            Signature::new(2, 2, 0).unwrap(),
        ] {
            let dual = make_dual_signs(&sig);
            let undual = make_undual_signs(&sig);
            let full = (sig.blade_count() - 1) as usize;
            for i in 0..=full {
                assert_eq!(dual[i] * undual[full ^ i], 1.0, "{} blade {}", sig, i);
            }
        }
    }
}
