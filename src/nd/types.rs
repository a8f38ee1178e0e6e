// src/nd/types.rs
#![allow(dead_code)]

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Basis-blade bitmask. Bit `i` set means `e_i` is a factor of the blade.
pub type BladeMask = u32;

// the signature is a runtime value, so the blade count is not hard-coded here
