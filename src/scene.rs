//! Draw instructions handed to an external renderer.
//!
//! The renderer itself lives elsewhere; this module only fixes the shape of
//! what it consumes: an ordered list of tagged instructions plus one
//! [`GraphOptions`] record.

use crate::error::{GaError, Result};
use crate::nd::multivector::Multivector;
use crate::skeleton::Polygon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 24-bit RGB style token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Edge colour used by the skeleton scene.
    pub const EDGE: Color = Color(0x882288);
    /// Vertex and label colour used by the skeleton scene.
    pub const VERTEX: Color = Color(0x00AA88);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawInstruction {
    /// Style applied to every following instruction
    SetStyle(Color),
    /// Segment between two points
    Edge(Multivector, Multivector),
    /// Point or line with a text label
    LabeledPoint(Multivector, String),
}

/// Renderer options. Field names serialise in camelCase (`lineWidth`, ...).
///
/// Deserialising fills missing fields with defaults and then runs
/// [`GraphOptions::validate`], here and inside a [`Scene`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGraphOptions")]
pub struct GraphOptions {
    /// Draw background grid
    pub grid: bool,
    /// Draw text labels
    pub labels: bool,
    pub line_width: f64,
    pub point_radius: f64,
    pub font_size: f64,
    /// Global scale factor
    pub scale: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            grid: true,
            labels: true,
            line_width: 3.0,
            point_radius: 1.0,
            font_size: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawGraphOptions {
    grid: bool,
    labels: bool,
    line_width: f64,
    point_radius: f64,
    font_size: f64,
    scale: f64,
}

impl Default for RawGraphOptions {
    fn default() -> Self {
        let d = GraphOptions::default();
        Self {
            grid: d.grid,
            labels: d.labels,
            line_width: d.line_width,
            point_radius: d.point_radius,
            font_size: d.font_size,
            scale: d.scale,
        }
    }
}

impl TryFrom<RawGraphOptions> for GraphOptions {
    type Error = GaError;

    fn try_from(raw: RawGraphOptions) -> Result<Self> {
        let options = Self {
            grid: raw.grid,
            labels: raw.labels,
            line_width: raw.line_width,
            point_radius: raw.point_radius,
            font_size: raw.font_size,
            scale: raw.scale,
        };
        options.validate()?;
        Ok(options)
    }
}

impl GraphOptions {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawGraphOptions =
            serde_json::from_str(json).map_err(|e| GaError::InvalidOptions(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Every numeric option must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        let numeric = [
            ("lineWidth", self.line_width),
            ("pointRadius", self.point_radius),
            ("fontSize", self.font_size),
            ("scale", self.scale),
        ];
        for (name, value) in numeric {
            if !value.is_finite() || value <= 0.0 {
                return Err(GaError::InvalidOptions(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Ordered instructions plus their options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    instructions: Vec<DrawInstruction>,
    options: GraphOptions,
}

impl Scene {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            instructions: Vec::new(),
            options,
        }
    }

    pub fn style(&mut self, color: Color) -> &mut Self {
        self.instructions.push(DrawInstruction::SetStyle(color));
        self
    }

    pub fn edge(&mut self, a: Multivector, b: Multivector) -> &mut Self {
        self.instructions.push(DrawInstruction::Edge(a, b));
        self
    }

    pub fn labeled(&mut self, entity: Multivector, label: impl Into<String>) -> &mut Self {
        self.instructions
            .push(DrawInstruction::LabeledPoint(entity, label.into()));
        self
    }

    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Polygon edges, their labelled endpoints, then the labelled bisectors.
    ///
    /// Edge `i` is drawn in [`Color::EDGE`]; its endpoints are labelled
    /// `"a{e}a"` / `"a{e}b"` (`e` = `a`, `b`, ..., `z`, `aa`, `ab`, ...) in
    /// [`Color::VERTEX`]. Bisectors follow as `"ada"`, `"adb"`, ... in the
    /// vertex colour, grouped under the tag after the last edge. Labels are
    /// unique for any vertex count.
    pub fn straight_skeleton(polygon: &Polygon, options: GraphOptions) -> Self {
        let mut scene = Self::new(options);
        for (i, (start, end)) in polygon.edge_endpoints().into_iter().enumerate() {
            let tag = edge_tag(i);
            scene
                .style(Color::EDGE)
                .edge(start.clone(), end.clone())
                .style(Color::VERTEX)
                .labeled(start, format!("a{}a", tag))
                .labeled(end, format!("a{}b", tag));
        }
        let group = edge_tag(polygon.len());
        for (i, bisector) in polygon.bisectors().into_iter().enumerate() {
            scene.labeled(bisector, format!("a{}{}", group, edge_tag(i)));
        }
        scene
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GaError::Serialization(e.to_string()))
    }
}

/// Bijective base-26 letters: `0 → "a"`, `25 → "z"`, `26 → "aa"`, `27 → "ab"`.
fn edge_tag(i: usize) -> String {
    let mut letters = Vec::new();
    let mut n = i + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display() {
        assert_eq!(Color::EDGE.to_string(), "#882288");
        assert_eq!(Color::VERTEX.to_string(), "#00AA88");
    }

    #[test]
    fn edge_tags_grow_past_z() {
        let tags: Vec<String> = [0, 3, 25, 26, 27, 51, 52, 701, 702].iter().map(|&i| edge_tag(i)).collect();
        assert_eq!(tags, ["a", "d", "z", "aa", "ab", "az", "ba", "zz", "aaa"]);
    }

    #[test]
    fn builder_keeps_order() {
        let mut scene = Scene::default();
        let p = Multivector::zero(8);
        scene.style(Color(1)).labeled(p.clone(), "p").edge(p.clone(), p);
        let kinds: Vec<&str> = scene
            .instructions()
            .iter()
            .map(|i| match i {
                DrawInstruction::SetStyle(_) => "style",
                DrawInstruction::Edge(..) => "edge",
                DrawInstruction::LabeledPoint(..) => "label",
            })
            .collect();
        assert_eq!(kinds, vec!["style", "label", "edge"]);
    }
}
