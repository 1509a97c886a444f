//! Render configuration for one compile call
//!
//! `RenderOptions` is a plain value passed per invocation; the engine never
//! holds one. Geometry is in device pixels of the target page.

use serde::{Deserialize, Serialize};

/// Page geometry preset
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    /// reMarkable 2 panel, 1404x1872
    Remarkable2,
    /// A4 at ~150 dpi, 1240x1754
    A4,
    /// US Letter at 150 dpi, 1275x1650
    Letter,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// (width, height) in device pixels
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Remarkable2 => (1404.0, 1872.0),
            PageSize::A4 => (1240.0, 1754.0),
            PageSize::Letter => (1275.0, 1650.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Page margins in device pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(m: f32) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(72.0)
    }
}

/// Monospace font metrics driving all width and height math
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Nominal glyph height in device pixels
    pub size: f32,

    /// Line height as a multiple of `size`
    pub line_height: f32,

    /// Horizontal advance per character as a fraction of `size`
    pub char_width: f32,
}

impl FontMetrics {
    /// Rendered height of one text line
    pub fn line_height_px(&self) -> f32 {
        self.size * self.line_height
    }

    /// Horizontal advance of one character. Tabs advance as four spaces;
    /// line breaks have no horizontal extent.
    pub fn advance(&self, ch: char) -> f32 {
        match ch {
            '\n' | '\r' => 0.0,
            '\t' => self.size * self.char_width * 4.0,
            _ => self.size * self.char_width,
        }
    }

    /// Rendered width of a string (sum of per-character advances)
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().map(|c| self.advance(c)).sum()
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            size: 28.0,
            line_height: 1.4,
            char_width: 0.6,
        }
    }
}

/// Whether token primitives are text runs or synthesized pen strokes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Text,
    Strokes,
}

/// Caller-supplied configuration for one compile call
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub page_size: PageSize,
    pub margins: Margins,
    pub font: FontMetrics,
    pub render_mode: RenderMode,

    /// Emit a left-gutter line number for each non-continuation line
    pub show_line_numbers: bool,

    /// Render a visible metadata header on page 1
    pub show_metadata: bool,

    /// Embed a machine-parseable metadata primitive on page 1
    pub embed_metadata: bool,

    /// Overlay an alignment grid on every page
    pub debug_mode: bool,

    /// When false, empty source text is rejected as a caller-input error
    pub allow_empty: bool,
}

impl RenderOptions {
    /// Usable content width between the left and right margins
    pub fn content_width(&self) -> f32 {
        let (w, _) = self.page_size.dimensions();
        w - self.margins.left - self.margins.right
    }

    /// Usable content height between the top and bottom margins
    pub fn content_height(&self) -> f32 {
        let (_, h) = self.page_size.dimensions();
        h - self.margins.top - self.margins.bottom
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Remarkable2,
            margins: Margins::default(),
            font: FontMetrics::default(),
            render_mode: RenderMode::Text,
            show_line_numbers: false,
            show_metadata: false,
            embed_metadata: false,
            debug_mode: false,
            allow_empty: true,
        }
    }
}
