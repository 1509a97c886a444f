//! Drawing program handed to the external vector renderer
//!
//! This module defines the output structure of the page compiler. Each page
//! carries an ordered list of renderer-agnostic primitives with all
//! positions pre-calculated; the downstream vector-to-device compiler
//! consumes these without any layout knowledge of its own.

use serde::{Deserialize, Serialize};

use crate::models::{PageMetadata, Rgb, Stroke};

/// One low-level drawing instruction
///
/// The vocabulary is fixed: background fill, rectangle, stroke group,
/// text run. Nothing here is specific to any particular output device.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    /// Fill the whole page with one color; always first on a page
    BackgroundFill { color: Rgb },

    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        filled: bool,
    },

    /// A group of pen strokes sharing one origin (one glyph, one grid, ...)
    StrokeGroup { strokes: Vec<Stroke> },

    /// Positioned text; `y` is the text baseline
    TextRun {
        x: f32,
        y: f32,
        text: String,
        color: Rgb,
        font_size: f32,
    },
}

/// The complete drawing program for one page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageProgram {
    /// 1-based page number, strictly increasing across the document
    pub page_number: usize,

    /// Ordered primitives; rendering them in order reproduces the page
    pub primitives: Vec<DrawPrimitive>,

    pub metadata: Option<PageMetadata>,
}

impl PageProgram {
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number,
            primitives: Vec::new(),
            metadata: None,
        }
    }
}
