//! Renderers module: layout, page compilation, and stroke synthesis
//!
//! This module contains the logic that turns a scanned token stream into
//! the per-page drawing programs consumed by the external vector renderer.

pub mod display_list;
pub mod glyph_strokes;
pub mod layout_engine;
pub mod page_compiler;
pub mod stroke_synth;

// Re-export commonly used types
pub use display_list::{DrawPrimitive, PageProgram};
pub use glyph_strokes::{
    glyph_paths, supported_characters, GLYPH_CELL_ASCENT, GLYPH_CELL_DESCENT, GLYPH_CELL_HEIGHT,
    GLYPH_CELL_WIDTH,
};
pub use layout_engine::LayoutEngine;
pub use page_compiler::PageCompiler;
pub use stroke_synth::StrokeSynthesizer;
