// src/nd/algebra.rs
//! An algebra instance: one signature plus its build-once product tables.
//!
//! Every operation is a pure function of its operands. The tables are never
//! written after [`Algebra::new`] returns, so one `Arc<Algebra>` can serve
//! any number of threads without locking.

use crate::error::Result;
use crate::nd::blade::{blade_name, involution_sign, reverse_sign};
use crate::nd::gp::{make_dual_signs, make_gp_table, make_grades, make_outer_table, make_undual_signs};
use crate::nd::multivector::Multivector;
use crate::nd::signature::Signature;
use crate::nd::types::{BladeMask, Scalar};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Algebra {
    signature: Signature,
    blades: usize,
    /// Geometric product, `i*blades + j → (sign, k)`
    gp_table: Vec<(Scalar, BladeMask)>,
    /// Outer product, zero sign wherever blades share a factor
    outer_table: Vec<(Scalar, BladeMask)>,
    dual_signs: Vec<Scalar>,
    undual_signs: Vec<Scalar>,
    grades: Vec<usize>,
}

impl Algebra {
    /// Build the tables for `signature`.
    pub fn new(signature: Signature) -> Self {
        let blades = signature.blade_count();
        let algebra = Self {
            signature,
            blades,
            gp_table: make_gp_table(&signature),
            outer_table: make_outer_table(&signature),
            dual_signs: make_dual_signs(&signature),
            undual_signs: make_undual_signs(&signature),
            grades: make_grades(&signature),
        };
        debug!(
            signature = %signature,
            blades,
            table_entries = algebra.gp_table.len(),
            "built blade product tables"
        );
        algebra
    }

    /// Validate `(p, q, r)` and build a shareable algebra.
    pub fn with_signature(p: usize, q: usize, r: usize) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(Signature::new(p, q, r)?)))
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Number of basis vectors.
    pub fn dimension(&self) -> usize {
        self.signature.dimension()
    }

    /// Number of basis blades, `2ⁿ`.
    pub fn blade_count(&self) -> usize {
        self.blades
    }

    /// Grade of blade `mask`.
    pub fn blade_grade(&self, mask: BladeMask) -> usize {
        self.grades[mask as usize]
    }

    /// `(sign, k)` with `e_i * e_j = sign · e_k`.
    pub fn blade_product(&self, i: BladeMask, j: BladeMask) -> (Scalar, BladeMask) {
        self.gp_table[i as usize * self.blades + j as usize]
    }

    pub fn blade_name(&self, mask: BladeMask) -> String {
        blade_name(mask)
    }

    // --- constructors ---

    pub fn zero(&self) -> Multivector {
        Multivector::zero(self.blades)
    }

    pub fn scalar(&self, s: Scalar) -> Multivector {
        self.blade(0, s)
    }

    /// `coeff · e_mask`.
    pub fn blade(&self, mask: BladeMask, coeff: Scalar) -> Multivector {
        assert!((mask as usize) < self.blades, "blade {:#b} out of range", mask);
        let mut m = self.zero();
        m.data[mask as usize] = coeff;
        m
    }

    /// Basis vector `e_index`.
    pub fn basis_vector(&self, index: usize) -> Multivector {
        assert!(index < self.dimension(), "basis index {} out of range", index);
        self.blade(1 << index, 1.0)
    }

    /// Unit pseudoscalar `I = e_0 e_1 … e_(n-1)`.
    pub fn pseudoscalar(&self) -> Multivector {
        self.blade((self.blades - 1) as BladeMask, 1.0)
    }

    /// Build a multivector from `(mask, coeff)` terms; repeated masks accumulate.
    pub fn from_terms(&self, terms: &[(BladeMask, Scalar)]) -> Multivector {
        let mut m = self.zero();
        for &(mask, coeff) in terms {
            assert!((mask as usize) < self.blades, "blade {:#b} out of range", mask);
            m.data[mask as usize] += coeff;
        }
        m
    }

    // --- products ---

    /// Geometric product `a * b`.
    pub fn geometric_product(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.table_product(&self.gp_table, a, b)
    }

    /// Outer (wedge) product `a ∧ b`.
    pub fn outer_product(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.table_product(&self.outer_table, a, b)
    }

    /// Regressive (vee) product `a ∨ b = undual(dual(a) ∧ dual(b))`.
    pub fn regressive_product(&self, a: &Multivector, b: &Multivector) -> Multivector {
        self.undual(&self.outer_product(&self.dual(a), &self.dual(b)))
    }

    /// Evaluate many geometric products in parallel against the shared table.
    pub fn gp_batch(&self, pairs: &[(Multivector, Multivector)]) -> Vec<Multivector> {
        pairs
            .par_iter()
            .map(|(a, b)| self.geometric_product(a, b))
            .collect()
    }

    fn table_product(
        &self,
        table: &[(Scalar, BladeMask)],
        a: &Multivector,
        b: &Multivector,
    ) -> Multivector {
        self.check(a);
        self.check(b);
        let m = self.blades;
        let mut out = vec![0.0 as Scalar; m];
        for (i, &x) in a.data.iter().enumerate() {
            if x == 0.0 {
                continue;
            }
            let row = &table[i * m..(i + 1) * m];
            for (j, &y) in b.data.iter().enumerate() {
                if y == 0.0 {
                    continue;
                }
                let (sign, k) = row[j];
                if sign != 0.0 {
                    out[k as usize] += sign * x * y;
                }
            }
        }
        Multivector { data: out }
    }

    // --- unary operators ---

    /// Poincaré dual (right complement): `e_i ∧ dual(e_i) = I`.
    ///
    /// Metric-free, so it stays invertible in degenerate signatures.
    /// `dual(dual(m)) = (-1)^{k(n-k)} m` per grade `k`; in odd dimension
    /// that is the identity.
    pub fn dual(&self, m: &Multivector) -> Multivector {
        self.complement(m, &self.dual_signs)
    }

    /// Left complement, the exact inverse of [`Algebra::dual`].
    pub fn undual(&self, m: &Multivector) -> Multivector {
        self.complement(m, &self.undual_signs)
    }

    fn complement(&self, m: &Multivector, signs: &[Scalar]) -> Multivector {
        self.check(m);
        let full = self.blades - 1;
        let mut out = vec![0.0 as Scalar; self.blades];
        for (i, &x) in m.data.iter().enumerate() {
            out[full ^ i] = signs[i] * x;
        }
        Multivector { data: out }
    }

    /// Reverse: `(-1)^{k(k-1)/2}` on grade `k`.
    pub fn reverse(&self, m: &Multivector) -> Multivector {
        self.grade_map(m, reverse_sign)
    }

    /// Grade involution: `(-1)^k` on grade `k`.
    pub fn grade_involution(&self, m: &Multivector) -> Multivector {
        self.grade_map(m, involution_sign)
    }

    /// Clifford conjugate: reverse of the grade involution.
    pub fn conjugate(&self, m: &Multivector) -> Multivector {
        self.grade_map(m, |k| reverse_sign(k) * involution_sign(k))
    }

    fn grade_map(&self, m: &Multivector, sign: impl Fn(usize) -> Scalar) -> Multivector {
        self.check(m);
        let data = m
            .data
            .iter()
            .zip(&self.grades)
            .map(|(&x, &k)| sign(k) * x)
            .collect();
        Multivector { data }
    }

    /// Grade-`k` part of `m`; every other blade becomes exactly zero.
    pub fn grade(&self, m: &Multivector, k: usize) -> Multivector {
        self.check(m);
        let data = m
            .data
            .iter()
            .zip(&self.grades)
            .map(|(&x, &g)| if g == k { x } else { 0.0 })
            .collect();
        Multivector { data }
    }

    /// Grades carrying a nonzero coefficient, ascending.
    pub fn grades_present(&self, m: &Multivector) -> Vec<usize> {
        self.check(m);
        let mut present: Vec<usize> = m
            .data
            .iter()
            .zip(&self.grades)
            .filter(|(&x, _)| x != 0.0)
            .map(|(_, &g)| g)
            .collect();
        present.sort_unstable();
        present.dedup();
        present
    }

    /// `⟨m · reverse(m)⟩₀`.
    pub fn norm_squared(&self, m: &Multivector) -> Scalar {
        self.geometric_product(m, &self.reverse(m)).scalar_part()
    }

    /// `sqrt(|⟨m · reverse(m)⟩₀|)`.
    pub fn norm(&self, m: &Multivector) -> Scalar {
        self.norm_squared(m).abs().sqrt()
    }

    /// Nonzero terms rendered with blade names, e.g. `"1e12 + 2e20"`-style.
    pub fn format(&self, m: &Multivector) -> String {
        self.check(m);
        let terms: Vec<String> = m
            .data
            .iter()
            .enumerate()
            .filter(|(_, &x)| x != 0.0)
            .map(|(i, &x)| format!("{}{}", x, blade_name(i as BladeMask)))
            .collect();
        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }

    #[inline(always)]
    fn check(&self, m: &Multivector) {
        assert_eq!(
            m.data.len(),
            self.blades,
            "multivector has {} components, {} expects {}",
            m.data.len(),
            self.signature,
            self.blades
        );
    }
}
