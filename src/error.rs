//! Error types for algebra construction and scene configuration.
//!
//! Arithmetic itself never fails: degenerate results (a point joined with
//! itself, the meet of two parallel lines) are ordinary multivectors.

/// Error types for the engine
#[derive(Debug, Clone, PartialEq)]
pub enum GaError {
    /// Signature rejected before any table was built
    InvalidSignature {
        p: i64,
        q: i64,
        r: i64,
        reason: &'static str,
    },
    /// Component count is not a power of two
    InvalidMultivector(usize),
    /// Polygon helpers need at least three vertices
    DegeneratePolygon(usize),
    /// Renderer options out of range or unparsable
    InvalidOptions(String),
    /// Scene could not be encoded
    Serialization(String),
}

impl std::fmt::Display for GaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GaError::InvalidSignature { p, q, r, reason } => {
                write!(f, "Invalid signature ({}, {}, {}): {}", p, q, r, reason)
            }
            GaError::InvalidMultivector(len) => {
                write!(f, "Multivector requires 2^n components, got {}", len)
            }
            GaError::DegeneratePolygon(n) => {
                write!(f, "Polygon needs at least 3 vertices, got {}", n)
            }
            GaError::InvalidOptions(msg) => write!(f, "Invalid graph options: {}", msg),
            GaError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for GaError {}

pub type Result<T> = std::result::Result<T, GaError>;
