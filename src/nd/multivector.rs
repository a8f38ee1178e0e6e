//! Multivector values.
//!
//! A multivector over an `n`-dimensional algebra has `2^n` components, one
//! per basis blade, indexed by blade bitmask. Products live on
//! [`Algebra`](crate::nd::algebra::Algebra), which owns the tables; this
//! type only carries coefficients and the linear operations.

use crate::error::{GaError, Result};
use crate::nd::types::{BladeMask, Scalar};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A dense multivector: `data[mask]` is the coefficient of blade `mask`.
/// `data[0]` is the scalar part; `data[len-1]` is the pseudoscalar.
///
/// Deserialisation goes through [`Multivector::try_new`], so a decoded
/// value always has `2^n` components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMultivector")]
pub struct Multivector {
    /// Raw components `[c_0, c_1, …, c_{2^n-1}]`
    pub data: Vec<Scalar>,
}

/// Wire shape of [`Multivector`] before the length check.
#[derive(Deserialize)]
struct RawMultivector {
    data: Vec<Scalar>,
}

impl TryFrom<RawMultivector> for Multivector {
    type Error = GaError;

    fn try_from(raw: RawMultivector) -> Result<Self> {
        Self::try_new(raw.data)
    }
}

impl Multivector {
    /// Construct from a raw component Vec (length must be a power of two).
    pub fn new(data: Vec<Scalar>) -> Self {
        match Self::try_new(data) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [`Multivector::new`], but reports a bad length as an error.
    pub fn try_new(data: Vec<Scalar>) -> Result<Self> {
        if !data.len().is_power_of_two() {
            return Err(GaError::InvalidMultivector(data.len()));
        }
        Ok(Self { data })
    }

    /// The zero multivector with `blades` components.
    pub fn zero(blades: usize) -> Self {
        Self::new(vec![0.0 as Scalar; blades])
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: even a one-blade algebra has the scalar component.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coefficient of blade `mask`.
    #[inline(always)]
    pub fn get(&self, mask: BladeMask) -> Scalar {
        self.data[mask as usize]
    }

    /// Grade-0 coefficient.
    #[inline(always)]
    pub fn scalar_part(&self) -> Scalar {
        self.data[0]
    }

    /// True when every coefficient is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// True when every coefficient is within `eps` of zero.
    pub fn is_approx_zero(&self, eps: Scalar) -> bool {
        self.data.iter().all(|x| x.abs() <= eps)
    }

    /// Componentwise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: Scalar) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Largest absolute coefficient.
    pub fn max_abs(&self) -> Scalar {
        self.data.iter().fold(0.0, |acc: Scalar, x| acc.max(x.abs()))
    }

    /// Nonzero `(mask, coeff)` terms in blade order.
    pub fn terms(&self) -> Vec<(BladeMask, Scalar)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &x)| x != 0.0)
            .map(|(i, &x)| (i as BladeMask, x))
            .collect()
    }

    /// True when any coefficient is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        self.data.iter().any(|x| !x.is_finite())
    }
}

impl Add for Multivector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        assert_eq!(self.data.len(), rhs.data.len(), "dimension mismatch in add");
        let data = self
            .data
            .into_iter()
            .zip(rhs.data)
            .map(|(a, b)| a + b)
            .collect();
        Multivector { data }
    }
}

impl Sub for Multivector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        assert_eq!(self.data.len(), rhs.data.len(), "dimension mismatch in sub");
        let data = self
            .data
            .into_iter()
            .zip(rhs.data)
            .map(|(a, b)| a - b)
            .collect();
        Multivector { data }
    }
}

impl<'a> Add<&'a Multivector> for &'a Multivector {
    type Output = Multivector;
    fn add(self, rhs: &'a Multivector) -> Multivector {
        self.clone() + rhs.clone()
    }
}

impl<'a> Sub<&'a Multivector> for &'a Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &'a Multivector) -> Multivector {
        self.clone() - rhs.clone()
    }
}

impl Mul<Scalar> for Multivector {
    type Output = Self;
    fn mul(self, s: Scalar) -> Self {
        let data = self.data.into_iter().map(|v| v * s).collect();
        Multivector { data }
    }
}

impl Mul<Multivector> for Scalar {
    type Output = Multivector;
    fn mul(self, m: Multivector) -> Multivector {
        m * self
    }
}

impl Neg for Multivector {
    type Output = Self;
    fn neg(self) -> Self {
        let data = self.data.into_iter().map(|v| -v).collect();
        Multivector { data }
    }
}
