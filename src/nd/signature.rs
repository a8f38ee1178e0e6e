// src/nd/signature.rs
//! Algebra signature `(p, q, r)`.
//!
//! Basis vectors are ordered degenerate first, then positive, then
//! negative: indices `0..r` square to 0, `r..r+p` to +1 and `r+p..n`
//! to -1. For 2D PGA, `(2, 0, 1)` gives `e0` (null), `e1`, `e2`.

use crate::error::{GaError, Result};
use crate::nd::types::Scalar;
use std::fmt;

/// Largest supported `p + q + r`. The product table has `4^n` entries.
pub const MAX_DIMENSION: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    p: usize,
    q: usize,
    r: usize,
}

impl Signature {
    /// Validate and build a signature.
    pub fn new(p: usize, q: usize, r: usize) -> Result<Self> {
        // counts past i64::MAX are reported as i64::MAX
        let count = |c: usize| i64::try_from(c).unwrap_or(i64::MAX);
        let reject = |reason| GaError::InvalidSignature {
            p: count(p),
            q: count(q),
            r: count(r),
            reason,
        };
        let n = p
            .checked_add(q)
            .and_then(|pq| pq.checked_add(r))
            .ok_or_else(|| reject("dimension overflows"))?;
        if n == 0 {
            return Err(reject("p + q + r must be at least 1"));
        }
        if n > MAX_DIMENSION {
            return Err(reject("dimension exceeds MAX_DIMENSION"));
        }
        Ok(Self { p, q, r })
    }

    /// Build from signed counts, rejecting negative values.
    pub fn from_counts(p: i64, q: i64, r: i64) -> Result<Self> {
        if p < 0 || q < 0 || r < 0 {
            return Err(GaError::InvalidSignature {
                p,
                q,
                r,
                reason: "counts must be non-negative",
            });
        }
        let count = |c: i64| usize::try_from(c).unwrap_or(usize::MAX);
        Self::new(count(p), count(q), count(r))
    }

    /// 2D projective geometric algebra, `(2, 0, 1)`.
    pub fn pga2d() -> Self {
        Self { p: 2, q: 0, r: 1 }
    }

    pub fn p(&self) -> usize {
        self.p
    }

    pub fn q(&self) -> usize {
        self.q
    }

    pub fn r(&self) -> usize {
        self.r
    }

    /// Number of basis vectors.
    pub fn dimension(&self) -> usize {
        self.p + self.q + self.r
    }

    /// Number of basis blades, `2^n`.
    pub fn blade_count(&self) -> usize {
        1 << self.dimension()
    }

    /// Square of basis vector `e_index`: 0, +1 or -1.
    pub fn metric(&self, index: usize) -> Scalar {
        assert!(index < self.dimension(), "basis index {} out of range", index);
        if index < self.r {
            0.0
        } else if index < self.r + self.p {
            1.0
        } else {
            -1.0
        }
    }

    /// All basis-vector squares in index order.
    pub fn metrics(&self) -> Vec<Scalar> {
        (0..self.dimension()).map(|i| self.metric(i)).collect()
    }

    /// True when some basis vector squares to zero.
    pub fn is_degenerate(&self) -> bool {
        self.r > 0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cl({},{},{})", self.p, self.q, self.r)
    }
}
