//! Page compiler: laid-out tokens to per-page drawing programs
//!
//! Walks each laid-out line left to right with a horizontal cursor,
//! resolves every token's display color from the theme, and emits one
//! drawing primitive per visible token — a text run, or a stroke group
//! when stroke mode is selected. Page furniture (background, metadata
//! header, line-number gutter, debug grid) is emitted around the content
//! in a fixed order so output is deterministic.

use serde::Serialize;

use crate::models::{
    PageMetadata, RenderMode, RenderOptions, Rgb, SourceMetadata, Token, TokenType,
};
use crate::scan::{Grammar, GrammarDispatcher};
use crate::themes::ThemeColors;

use super::display_list::{DrawPrimitive, PageProgram};
use super::glyph_strokes::GLYPH_CELL_HEIGHT;
use super::layout_engine::{
    grid_legend_height, gutter_width, metadata_header_height, LayoutEngine, LINE_NUMBER_DIGITS,
};
use super::stroke_synth::StrokeSynthesizer;

/// Spacing of the debug alignment grid, in device pixels
const DEBUG_GRID_SPACING: f32 = 40.0;

/// Pressure used for grid lines (uniform; the grid is not handwriting)
const GRID_PRESSURE: f32 = 0.3;

/// Prefix of the machine-parseable embedded metadata text run
const EMBEDDED_METADATA_PREFIX: &str = "meta:";

/// Fraction of the font size used for the text baseline within a line box
const BASELINE_RATIO: f32 = 0.8;

#[derive(Serialize)]
struct EmbeddedMetadata<'a> {
    filename: Option<&'a str>,
    language: &'a str,
    author: Option<&'a str>,
    tags: &'a [String],
}

/// Compiles token streams into ordered page drawing programs
pub struct PageCompiler {
    layout: LayoutEngine,
    synth: StrokeSynthesizer,
}

impl PageCompiler {
    pub fn new() -> Self {
        Self {
            layout: LayoutEngine::new(),
            synth: StrokeSynthesizer::new(),
        }
    }

    /// Compile a scanned token stream into one drawing program per page
    pub fn compile(
        &self,
        tokens: &[Token],
        language: &str,
        metadata: Option<&SourceMetadata>,
        options: &RenderOptions,
        theme: &ThemeColors,
    ) -> Vec<PageProgram> {
        let dispatcher = GrammarDispatcher::new();
        let grammar = dispatcher.handler_for(language);
        let pages = self.layout.layout(tokens, options);

        let mut programs = Vec::with_capacity(pages.len());
        // Lookback for function/class-name coloring runs over the whole
        // document, so it survives wrap and page boundaries
        let mut prev_visible: Option<Token> = None;

        for page in &pages {
            let mut program = PageProgram::new(page.page_number);
            program.primitives.push(DrawPrimitive::BackgroundFill {
                color: theme.background,
            });

            if page.page_number == 1 {
                if options.embed_metadata {
                    program
                        .primitives
                        .push(self.embedded_metadata(language, metadata, options, theme));
                }
                if options.show_metadata {
                    self.metadata_header(metadata, options, theme, &mut program.primitives);
                }
            }
            if options.debug_mode {
                program.primitives.push(self.debug_grid(options, theme));
                if page.page_number == 1 {
                    // Legend for the grid, in the strip reserved by layout
                    program.primitives.push(DrawPrimitive::TextRun {
                        x: options.margins.left,
                        y: page_content_top(options, 1) - options.font.line_height_px() * 0.3,
                        text: format!("grid {:.0}px", DEBUG_GRID_SPACING),
                        color: theme.comment,
                        font_size: options.font.size * 0.5,
                    });
                }
            }

            let line_height = options.font.line_height_px();
            let content_top = page_content_top(options, page.page_number);
            let content_left = options.margins.left;

            for (row, line) in page.lines.iter().enumerate() {
                let baseline = content_top
                    + row as f32 * line_height
                    + options.font.size * BASELINE_RATIO;

                if options.show_line_numbers && !line.wrapped {
                    program.primitives.push(DrawPrimitive::TextRun {
                        x: content_left,
                        y: baseline,
                        text: format!("{:>width$}", line.source_line, width = LINE_NUMBER_DIGITS),
                        color: theme.comment,
                        font_size: options.font.size * 0.75,
                    });
                }

                let mut x = content_left + gutter_width(options);
                for token in &line.tokens {
                    let width = options.font.measure(&token.value);
                    if token.is_visible() {
                        let color = color_for(token, prev_visible.as_ref(), grammar, theme);
                        program.primitives.push(self.token_primitive(
                            token, x, baseline, color, options,
                        ));
                        prev_visible = Some(token.clone());
                    }
                    x += width;
                }
            }

            program.metadata = page
                .metadata
                .clone()
                .map(|m| enrich_metadata(m, language, metadata));
            programs.push(program);
        }

        programs
    }

    /// One primitive for a visible token at the cursor position
    fn token_primitive(
        &self,
        token: &Token,
        x: f32,
        baseline: f32,
        color: Rgb,
        options: &RenderOptions,
    ) -> DrawPrimitive {
        match options.render_mode {
            RenderMode::Text => DrawPrimitive::TextRun {
                x,
                y: baseline,
                text: token.value.clone(),
                color,
                font_size: options.font.size,
            },
            RenderMode::Strokes => {
                let scale = options.font.size / GLYPH_CELL_HEIGHT;
                let mut strokes = Vec::new();
                let mut cx = x;
                for ch in token.value.chars() {
                    strokes.extend(self.synth.synthesize_scaled(ch, cx, baseline, scale, color));
                    cx += options.font.advance(ch);
                }
                DrawPrimitive::StrokeGroup { strokes }
            }
        }
    }

    /// Machine-parseable metadata primitive at the top of page 1
    fn embedded_metadata(
        &self,
        language: &str,
        metadata: Option<&SourceMetadata>,
        options: &RenderOptions,
        theme: &ThemeColors,
    ) -> DrawPrimitive {
        let empty = SourceMetadata::default();
        let meta = metadata.unwrap_or(&empty);
        let record = EmbeddedMetadata {
            filename: meta.filename.as_deref(),
            language: meta.language_label.as_deref().unwrap_or(language),
            author: meta.author.as_deref(),
            tags: &meta.tags,
        };
        let json = serde_json::to_string(&record)
            .expect("embedded metadata record serializes");
        DrawPrimitive::TextRun {
            x: options.margins.left,
            y: options.margins.top + options.font.size * 0.5,
            text: format!("{}{}", EMBEDDED_METADATA_PREFIX, json),
            color: theme.comment,
            font_size: options.font.size * 0.5,
        }
    }

    /// Visible header on page 1: one title line plus a separator rule
    fn metadata_header(
        &self,
        metadata: Option<&SourceMetadata>,
        options: &RenderOptions,
        theme: &ThemeColors,
        out: &mut Vec<DrawPrimitive>,
    ) {
        let empty = SourceMetadata::default();
        let meta = metadata.unwrap_or(&empty);
        let mut parts: Vec<String> = Vec::new();
        if let Some(filename) = &meta.filename {
            parts.push(filename.clone());
        }
        if let Some(language) = &meta.language_label {
            parts.push(language.clone());
        }
        if let Some(author) = &meta.author {
            parts.push(author.clone());
        }
        if !meta.tags.is_empty() {
            parts.push(meta.tags.join(", "));
        }
        if let (Some(start), Some(end)) = (meta.line_start, meta.line_end) {
            parts.push(format!("lines {}-{}", start, end));
        }
        let text = if parts.is_empty() {
            "untitled".to_string()
        } else {
            parts.join(" · ")
        };

        let header_bottom = options.margins.top + metadata_header_height(options);
        out.push(DrawPrimitive::TextRun {
            x: options.margins.left,
            y: options.margins.top + options.font.line_height_px(),
            text,
            color: theme.foreground,
            font_size: options.font.size,
        });
        out.push(DrawPrimitive::Rect {
            x: options.margins.left,
            y: header_bottom - 2.0,
            width: options.content_width(),
            height: 1.5,
            color: theme.comment,
            filled: true,
        });
    }

    /// Full-page alignment grid for layout QA
    fn debug_grid(&self, options: &RenderOptions, theme: &ThemeColors) -> DrawPrimitive {
        use crate::models::{PenKind, Stroke, StrokePoint};

        let (page_w, page_h) = options.page_size.dimensions();
        let left = options.margins.left;
        let right = page_w - options.margins.right;
        let top = options.margins.top;
        let bottom = page_h - options.margins.bottom;

        let mut strokes = Vec::new();
        let mut x = left;
        while x <= right {
            strokes.push(Stroke::new(
                vec![
                    StrokePoint::new(x, top, GRID_PRESSURE),
                    StrokePoint::new(x, bottom, GRID_PRESSURE),
                ],
                PenKind::Fineliner,
                theme.comment,
            ));
            x += DEBUG_GRID_SPACING;
        }
        let mut y = top;
        while y <= bottom {
            strokes.push(Stroke::new(
                vec![
                    StrokePoint::new(left, y, GRID_PRESSURE),
                    StrokePoint::new(right, y, GRID_PRESSURE),
                ],
                PenKind::Fineliner,
                theme.comment,
            ));
            y += DEBUG_GRID_SPACING;
        }
        DrawPrimitive::StrokeGroup { strokes }
    }
}

impl Default for PageCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Top edge of the text content area on a given page
fn page_content_top(options: &RenderOptions, page_number: usize) -> f32 {
    let mut top = options.margins.top;
    if page_number == 1 {
        if options.show_metadata || options.embed_metadata {
            top += metadata_header_height(options);
        }
        if options.debug_mode {
            top += grid_legend_height(options);
        }
    }
    top
}

/// Display color for a visible token
fn color_for(
    token: &Token,
    prev_visible: Option<&Token>,
    grammar: &dyn Grammar,
    theme: &ThemeColors,
) -> Rgb {
    match token.token_type {
        TokenType::Keyword => theme.keyword,
        TokenType::String => theme.string,
        TokenType::Comment => theme.comment,
        TokenType::Number => theme.number,
        TokenType::Operator => theme.operator,
        TokenType::Builtin => theme.function_name,
        TokenType::Punctuation => theme.foreground,
        TokenType::Whitespace => theme.foreground,
        TokenType::Identifier => {
            if let Some(prev) = prev_visible {
                if prev.token_type == TokenType::Keyword {
                    if grammar.function_keywords().iter().any(|k| *k == prev.value) {
                        return theme.function_name;
                    }
                    if grammar.type_keywords().iter().any(|k| *k == prev.value) {
                        return theme.class_name;
                    }
                }
            }
            theme.identifier
        }
    }
}

/// Fill layout metadata with the caller-supplied source description
fn enrich_metadata(
    mut page_meta: PageMetadata,
    language: &str,
    source: Option<&SourceMetadata>,
) -> PageMetadata {
    if let Some(meta) = source {
        page_meta.filename = meta.filename.clone();
        page_meta.author = meta.author.clone();
        page_meta.tags = meta.tags.clone();
        page_meta.language = Some(
            meta.language_label
                .clone()
                .unwrap_or_else(|| language.to_string()),
        );
    } else {
        page_meta.language = Some(language.to_string());
    }
    page_meta
}
