//! # PGA Engine Quickstart
//!
//! ```rust
//! use pga_engine::prelude::*;
//!
//! // Intersect x = 1 with the line through (0,0) and (2,2)
//! let pga = Pga2::new();
//! let diagonal = pga.join(&pga.point(0.0, 0.0), &pga.point(2.0, 2.0));
//! let vertical = pga.line(1.0, 0.0, -1.0);
//! let p = pga.meet(&vertical, &diagonal);
//!
//! const EPS: f64 = 1e-12;
//! let (x, y) = pga.point_coordinates(&p).unwrap();
//! assert!((x - 1.0).abs() < EPS);
//! assert!((y - 1.0).abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod prelude;
pub mod scene;
pub mod skeleton;

// Generic-signature GA kernel
pub mod nd;

// 2D projective specialisation
pub mod pga2d;

// --- Public API exports ---

pub use error::{GaError, Result};
pub use nd::algebra::Algebra;
pub use nd::multivector::Multivector;
pub use nd::signature::Signature;
pub use nd::types::{BladeMask, Scalar};
pub use pga2d::Pga2;
pub use scene::{Color, DrawInstruction, GraphOptions, Scene};
pub use skeleton::Polygon;
