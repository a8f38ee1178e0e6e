//! Polygon edges and vertex bisectors for straight-skeleton construction.
//!
//! Only the first step of a skeleton is covered: for every vertex, the
//! angle bisector of its incoming and outgoing edge lines. Vertices are
//! taken counter-clockwise or clockwise; the bisector orientation follows
//! the winding.
//!
//! Edge lines are built in a frame rescaled by a power of two so that the
//! `x·y` terms of the join stay representable for very large or very small
//! coordinates. The rescale is exact and is undone on the constant term.

use crate::error::{GaError, Result};
use crate::nd::multivector::Multivector;
use crate::nd::types::Scalar;
use crate::pga2d::Pga2;

/// A closed polygon stored as PGA points.
#[derive(Debug, Clone)]
pub struct Polygon {
    pga: Pga2,
    vertices: Vec<Multivector>,
    /// Vertices divided by `frame`
    framed: Vec<Multivector>,
    frame: Scalar,
}

impl Polygon {
    /// Build from Euclidean vertex coordinates.
    pub fn new(pga: &Pga2, coords: &[(Scalar, Scalar)]) -> Result<Self> {
        if coords.len() < 3 {
            return Err(GaError::DegeneratePolygon(coords.len()));
        }
        let vertices = coords.iter().map(|&(x, y)| pga.point(x, y)).collect();
        let frame = frame_scale(coords);
        let framed = coords
            .iter()
            .map(|&(x, y)| pga.point(x / frame, y / frame))
            .collect();
        Ok(Self {
            pga: pga.clone(),
            vertices,
            framed,
            frame,
        })
    }

    pub fn vertices(&self) -> &[Multivector] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Endpoint pairs `(v_i, v_{i+1})`, wrapping around.
    pub fn edge_endpoints(&self) -> Vec<(Multivector, Multivector)> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (self.vertices[i].clone(), self.vertices[(i + 1) % n].clone()))
            .collect()
    }

    /// Edge lines through `v_i` and `v_{i+1}`, wrapping around. Each is a
    /// positive multiple of `join(v_i, v_{i+1})`, so orientation is kept.
    pub fn edges(&self) -> Vec<Multivector> {
        let n = self.framed.len();
        (0..n)
            .map(|i| {
                let l = self.pga.join(&self.framed[i], &self.framed[(i + 1) % n]);
                self.unframe(&l)
            })
            .collect()
    }

    /// Unit bisector at each vertex: `normalize(ê_in - ê_out)` where `ê` are
    /// the normalised incoming and outgoing edge lines.
    pub fn bisectors(&self) -> Vec<Multivector> {
        let n = self.framed.len();
        let edges: Vec<Multivector> = (0..n)
            .map(|i| {
                let l = self.pga.join(&self.framed[i], &self.framed[(i + 1) % n]);
                self.pga.normalize_line(&l)
            })
            .collect();
        (0..n)
            .map(|i| {
                let incoming = &edges[(i + n - 1) % n];
                let outgoing = &edges[i];
                let bisector = self.pga.normalize_line(&(incoming - outgoing));
                self.unframe(&bisector)
            })
            .collect()
    }

    /// Map a line from the rescaled frame back to vertex coordinates.
    fn unframe(&self, l: &Multivector) -> Multivector {
        let (a, b, c) = self.pga.line_coefficients(l);
        self.pga.line(a, b, c * self.frame)
    }
}

/// Power of two at or above the largest coordinate magnitude, so dividing
/// by it is exact. Falls back to 1 when there is nothing to rescale.
fn frame_scale(coords: &[(Scalar, Scalar)]) -> Scalar {
    let largest = coords
        .iter()
        .flat_map(|&(x, y)| [x.abs(), y.abs()])
        .fold(0.0, Scalar::max);
    if largest == 0.0 || !largest.is_finite() {
        return 1.0;
    }
    let exp = (largest.log2().ceil() as i32).clamp(Scalar::MIN_EXP, Scalar::MAX_EXP - 1);
    (2.0 as Scalar).powi(exp)
}
