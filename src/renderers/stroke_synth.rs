//! Stroke synthesis: characters to positioned pen strokes
//!
//! Translates the glyph table's design-grid polylines to absolute page
//! coordinates, anchored so the glyph cell's baseline-left corner sits at
//! the requested position. Pressure follows a deterministic touch-down /
//! lift taper, so identical input always yields identical strokes.

use crate::models::{PenKind, Rgb, Stroke, StrokePoint};

use super::glyph_strokes::{
    glyph_paths, GLYPH_CELL_ASCENT, GLYPH_CELL_HEIGHT, GLYPH_CELL_WIDTH,
};

/// Pen pressure at the first and last sample of a stroke
const PRESSURE_EDGE: f32 = 0.45;

/// Pen pressure mid-stroke
const PRESSURE_PEAK: f32 = 0.70;

/// Pressure of the single-point fallback dot
const PRESSURE_DOT: f32 = 0.6;

/// Vertical step per line break, in design units (cell plus leading)
const LINE_STEP: f32 = GLYPH_CELL_HEIGHT + 4.0;

/// Synthesizes handwriting-like strokes from the static glyph table
#[derive(Debug, Clone)]
pub struct StrokeSynthesizer {
    pen: PenKind,
}

impl StrokeSynthesizer {
    pub fn new() -> Self {
        Self {
            pen: PenKind::Fineliner,
        }
    }

    pub fn with_pen(pen: PenKind) -> Self {
        Self { pen }
    }

    /// Strokes for one character at design scale, baseline-left at (x, y),
    /// drawn in black. Whitespace yields no strokes; an unsupported
    /// character yields the fallback dot.
    pub fn synthesize(&self, ch: char, x: f32, y: f32) -> Vec<Stroke> {
        self.synthesize_scaled(ch, x, y, 1.0, Rgb::new(0, 0, 0))
    }

    /// Strokes for one character with an explicit cell scale and color
    pub fn synthesize_scaled(&self, ch: char, x: f32, y: f32, scale: f32, color: Rgb) -> Vec<Stroke> {
        if ch.is_whitespace() {
            return Vec::new();
        }

        let Some(paths) = glyph_paths(ch) else {
            log::debug!("no glyph for '{}', substituting dot", ch);
            return vec![self.dot(x, y, scale, color)];
        };

        paths
            .iter()
            .map(|path| {
                let points = path
                    .iter()
                    .enumerate()
                    .map(|(i, &(gx, gy))| {
                        StrokePoint::new(
                            x + gx * scale,
                            y + (gy - GLYPH_CELL_ASCENT) * scale,
                            taper(i, path.len()),
                        )
                    })
                    .collect();
                Stroke::new(points, self.pen, color)
            })
            .collect()
    }

    /// Strokes for a whole string at design scale. The cursor advances one
    /// cell width per character (four for a tab) and one line step per
    /// `\n`; whitespace advances without emitting.
    pub fn synthesize_text(&self, text: &str, x: f32, y: f32) -> Vec<Stroke> {
        let mut strokes = Vec::new();
        let mut cx = x;
        let mut cy = y;
        for ch in text.chars() {
            match ch {
                '\n' => {
                    cx = x;
                    cy += LINE_STEP;
                }
                '\t' => cx += GLYPH_CELL_WIDTH * 4.0,
                c if c.is_whitespace() => cx += GLYPH_CELL_WIDTH,
                c => {
                    strokes.extend(self.synthesize(c, cx, cy));
                    cx += GLYPH_CELL_WIDTH;
                }
            }
        }
        strokes
    }

    /// Visually distinct placeholder for characters outside the table:
    /// a single firm point at the cell's baseline center
    fn dot(&self, x: f32, y: f32, scale: f32, color: Rgb) -> Stroke {
        Stroke::new(
            vec![StrokePoint::new(
                x + GLYPH_CELL_WIDTH / 2.0 * scale,
                y,
                PRESSURE_DOT,
            )],
            self.pen,
            color,
        )
    }
}

impl Default for StrokeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Touch-down/lift pressure profile: edges light, middle firm
fn taper(index: usize, len: usize) -> f32 {
    if len <= 1 {
        return PRESSURE_DOT;
    }
    let half = (len - 1) as f32 / 2.0;
    let from_edge = index.min(len - 1 - index) as f32;
    PRESSURE_EDGE + (PRESSURE_PEAK - PRESSURE_EDGE) * (from_edge / half).min(1.0)
}
