//! Pen strokes: the geometry handed to the downstream vector renderer
//!
//! A stroke is one continuous pen movement. Pressure is normalized to
//! [0, 1]; the device mapping to actual nib width happens outside this
//! engine.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// One sampled point of a pen stroke
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,

    /// Normalized pen pressure in [0, 1]
    pub pressure: f32,
}

impl StrokePoint {
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }
}

/// Semantic pen selection; the external renderer maps these to device brushes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PenKind {
    Fineliner,
    Ballpoint,
    Marker,
    Highlighter,
}

/// One continuous polyline of pen samples
///
/// Invariant: `points` is never empty. Single-point strokes are legal (the
/// fallback dot glyph is one).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
    pub pen: PenKind,
    pub color: Rgb,
}

impl Stroke {
    pub fn new(points: Vec<StrokePoint>, pen: PenKind, color: Rgb) -> Self {
        assert!(!points.is_empty(), "a stroke must contain at least one point");
        Self { points, pen, color }
    }

    /// Translate every point by (dx, dy)
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
        self
    }
}
