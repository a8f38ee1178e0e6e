// src/prelude.rs
//! The “everything” import for the engine.
//!
//! Brings you the most commonly used types with one glob:
//! ```rust
//! use pga_engine::prelude::*;
//! ```

// core data types
pub use crate::nd::algebra::Algebra;
pub use crate::nd::multivector::Multivector;
pub use crate::nd::signature::Signature;
pub use crate::nd::types::Scalar;

// 2D PGA and its consumers
pub use crate::pga2d::Pga2;
pub use crate::scene::{Color, DrawInstruction, GraphOptions, Scene};
pub use crate::skeleton::Polygon;

pub use crate::error::{GaError, Result};
