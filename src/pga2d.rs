//! 2D projective geometric algebra, signature (2,0,1).
//!
//! Basis: `e0` (null, index 0), `e1`, `e2`. Blade masks:
//! `[1, e0, e1, e01, e2, e02, e12, e012]`.
//!
//! Lines are vectors `a·e1 + b·e2 + c·e0` (the line `ax + by + c = 0`).
//! Points are bivectors `dual(e0 + x·e1 + y·e2) = w·e12 + x·e20 + y·e01`,
//! with `e20 = -e02`. Joining points is the regressive product, meeting
//! lines is the outer product.

use crate::nd::algebra::Algebra;
use crate::nd::multivector::Multivector;
use crate::nd::signature::Signature;
use crate::nd::types::{BladeMask, Scalar};
use std::sync::Arc;
use tracing::trace;

pub const E0: BladeMask = 0b001;
pub const E1: BladeMask = 0b010;
pub const E2: BladeMask = 0b100;
pub const E01: BladeMask = 0b011;
pub const E02: BladeMask = 0b101;
pub const E12: BladeMask = 0b110;
pub const E012: BladeMask = 0b111;

/// Entry point for 2D PGA: an (2,0,1) algebra plus point/line helpers.
#[derive(Debug, Clone)]
pub struct Pga2 {
    algebra: Arc<Algebra>,
}

impl Default for Pga2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Pga2 {
    pub fn new() -> Self {
        Self {
            algebra: Arc::new(Algebra::new(Signature::pga2d())),
        }
    }

    /// Underlying algebra, for the generic operations.
    pub fn algebra(&self) -> &Arc<Algebra> {
        &self.algebra
    }

    /// The line `a·x + b·y + c = 0` as `a·e1 + b·e2 + c·e0`.
    pub fn line(&self, a: Scalar, b: Scalar, c: Scalar) -> Multivector {
        self.algebra.from_terms(&[(E1, a), (E2, b), (E0, c)])
    }

    /// The point `(x, y)` as `dual(e0 + x·e1 + y·e2)`.
    pub fn point(&self, x: Scalar, y: Scalar) -> Multivector {
        self.algebra.dual(&self.line(x, y, 1.0))
    }

    pub fn dual(&self, m: &Multivector) -> Multivector {
        self.algebra.dual(m)
    }

    /// Line through two points (regressive product).
    ///
    /// Oriented from `p` towards `q`; coincident points give the zero line.
    pub fn join(&self, p: &Multivector, q: &Multivector) -> Multivector {
        self.algebra.regressive_product(p, q)
    }

    /// Intersection of two lines (outer product).
    ///
    /// Parallel lines meet in an ideal point (weight 0), identical lines in zero.
    pub fn meet(&self, l1: &Multivector, l2: &Multivector) -> Multivector {
        let p = self.algebra.outer_product(l1, l2);
        if self.is_ideal(&p) {
            trace!(point = %self.algebra.format(&p), "lines meet at infinity");
        }
        p
    }

    /// `(a, b, c)` of a line `a·e1 + b·e2 + c·e0`.
    pub fn line_coefficients(&self, l: &Multivector) -> (Scalar, Scalar, Scalar) {
        (l.get(E1), l.get(E2), l.get(E0))
    }

    /// Homogeneous `(x, y, w)` of a point `w·e12 + x·e20 + y·e01`.
    pub fn point_homogeneous(&self, p: &Multivector) -> (Scalar, Scalar, Scalar) {
        (-p.get(E02), p.get(E01), p.get(E12))
    }

    /// Euclidean `(x, y)`, or `None` for an ideal point.
    pub fn point_coordinates(&self, p: &Multivector) -> Option<(Scalar, Scalar)> {
        let (x, y, w) = self.point_homogeneous(p);
        if w == 0.0 {
            None
        } else {
            Some((x / w, y / w))
        }
    }

    /// Weight (`e12` coefficient) is exactly zero.
    pub fn is_ideal(&self, p: &Multivector) -> bool {
        p.get(E12) == 0.0
    }

    /// Scale a line so `a² + b² = 1`. The line at infinity is returned as is.
    pub fn normalize_line(&self, l: &Multivector) -> Multivector {
        let (a, b, c) = self.line_coefficients(l);
        let n = a.hypot(b);
        if n == 0.0 {
            return l.clone();
        }
        self.line(a / n, b / n, c / n)
    }

    /// Scale a finite point to weight 1. Ideal points are returned as is.
    pub fn normalize_point(&self, p: &Multivector) -> Multivector {
        match self.point_coordinates(p) {
            Some((x, y)) => self.point(x, y),
            None => p.clone(),
        }
    }

    /// Signed distance from a normalised line to a finite point.
    pub fn signed_distance(&self, l: &Multivector, p: &Multivector) -> Option<Scalar> {
        let (a, b, c) = self.line_coefficients(&self.normalize_line(l));
        self.point_coordinates(p).map(|(x, y)| a * x + b * y + c)
    }
}
