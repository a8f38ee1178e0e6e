// src/nd/blade.rs
//! Basis blades as bitmasks.
//!
//! Blade `mask` is the ordered product of the basis vectors whose bits are
//! set, lowest index first: `0b101` is `e0 e2 = e02`.

use crate::nd::types::{BladeMask, Scalar};

/// Grade of a blade (number of basis-vector factors).
#[inline(always)]
pub fn grade(mask: BladeMask) -> usize {
    mask.count_ones() as usize
}

/// Sign (±1) of reordering the concatenation `i ‖ j` into canonical order.
///
/// For each factor of `i`, counts the factors of `j` with a lower index that
/// must be swapped past it; the parity of the total is the sign.
#[inline(always)]
pub fn reorder_sign(i: BladeMask, j: BladeMask) -> Scalar {
    let mut swaps = 0u32;
    let mut mi = i >> 1;
    while mi != 0 {
        swaps += (mi & j).count_ones();
        mi >>= 1;
    }
    if swaps & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// `(-1)^{k(k-1)/2}`: the reverse sign of a grade-`k` blade.
#[inline(always)]
pub fn reverse_sign(grade: usize) -> Scalar {
    if (grade / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// `(-1)^k`: the grade-involution sign of a grade-`k` blade.
#[inline(always)]
pub fn involution_sign(grade: usize) -> Scalar {
    if grade % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Human-readable blade name: `"1"`, `"e0"`, `"e12"`, `"e012"`.
///
/// Indices past 9 are separated with underscores (`"e3_10"`).
pub fn blade_name(mask: BladeMask) -> String {
    if mask == 0 {
        return "1".to_string();
    }
    let indices: Vec<String> = (0..BladeMask::BITS)
        .filter(|bit| (mask >> bit) & 1 != 0)
        .map(|bit| bit.to_string())
        .collect();
    if indices.iter().all(|s| s.len() == 1) {
        format!("e{}", indices.concat())
    } else {
        format!("e{}", indices.join("_"))
    }
}
