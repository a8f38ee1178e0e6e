//! Generic-signature GA support (Signature, blades, product tables, Algebra, Multivector).

pub mod types;
pub mod signature;
pub mod blade;
pub mod gp;
pub mod algebra;
pub mod multivector;
