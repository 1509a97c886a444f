//! Layout engine: token stream to ordered pages
//!
//! Groups tokens by source line, wraps over-wide lines at token boundaries,
//! and paginates against the page's content height. All width and height
//! math flows from the caller's font metrics; nothing here is measured
//! against a real font.

use crate::models::{FontMetrics, LaidOutLine, Page, PageMetadata, RenderOptions, Token};

/// Digits reserved for the line-number gutter (plus one cell of padding)
pub const LINE_NUMBER_DIGITS: usize = 4;

/// Width of the line-number gutter, zero when line numbers are off
pub fn gutter_width(options: &RenderOptions) -> f32 {
    if options.show_line_numbers {
        options.font.advance('0') * (LINE_NUMBER_DIGITS as f32 + 1.0)
    } else {
        0.0
    }
}

/// Height reserved on page 1 for the visible/embedded metadata header
pub fn metadata_header_height(options: &RenderOptions) -> f32 {
    options.font.line_height_px() * 2.0
}

/// Height reserved on page 1 for the debug grid legend strip
pub fn grid_legend_height(options: &RenderOptions) -> f32 {
    options.font.line_height_px()
}

/// Main layout engine for pagination and line wrapping
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Lay a token stream out into ordered pages.
    ///
    /// An empty token stream yields exactly one page with zero content
    /// lines. Tokens are never split, dropped, or reordered: every token
    /// lands on exactly one laid-out line of exactly one page.
    pub fn layout(&self, tokens: &[Token], options: &RenderOptions) -> Vec<Page> {
        let max_width = options.content_width() - gutter_width(options);
        assert!(
            max_width > 0.0,
            "content width {} leaves no room for text",
            max_width
        );

        let mut lines = Vec::new();
        for (source_line, line_tokens) in group_by_source_line(tokens) {
            wrap_line(source_line, line_tokens, max_width, &options.font, &mut lines);
        }

        let line_total = lines.len();
        let pages = paginate(lines, options);

        assert!(!pages.is_empty(), "layout produced zero pages");
        let placed: usize = pages.iter().map(|p| p.lines.len()).sum();
        assert_eq!(
            placed, line_total,
            "pagination dropped or duplicated lines ({} of {})",
            placed, line_total
        );

        pages
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Group tokens by their 1-based source line, preserving order
fn group_by_source_line(tokens: &[Token]) -> Vec<(usize, Vec<Token>)> {
    let mut groups: Vec<(usize, Vec<Token>)> = Vec::new();
    for token in tokens {
        match groups.last_mut() {
            Some((line, group)) if *line == token.line => group.push(token.clone()),
            _ => groups.push((token.line, vec![token.clone()])),
        }
    }
    groups
}

/// Split one source line into width-bounded segments at token boundaries.
///
/// A single token wider than `max_width` gets its own (overflowing) line
/// rather than being split or truncated.
fn wrap_line(
    source_line: usize,
    tokens: Vec<Token>,
    max_width: f32,
    font: &FontMetrics,
    out: &mut Vec<LaidOutLine>,
) {
    let mut current: Vec<Token> = Vec::new();
    let mut width = 0.0f32;
    let mut wrapped = false;

    for token in tokens {
        let token_width = font.measure(&token.value);
        assert!(
            token_width >= 0.0,
            "negative rendered width for token at byte {}",
            token.start
        );
        if !current.is_empty() && width + token_width > max_width {
            out.push(LaidOutLine::new(source_line, std::mem::take(&mut current), wrapped));
            wrapped = true;
            width = 0.0;
        }
        width += token_width;
        current.push(token);
    }

    // Blank source lines still occupy a rendered line
    if !current.is_empty() || !wrapped {
        out.push(LaidOutLine::new(source_line, current, wrapped));
    }
}

/// Accumulate lines into pages, starting a new page when the next line
/// would exceed the available content height
fn paginate(lines: Vec<LaidOutLine>, options: &RenderOptions) -> Vec<Page> {
    let line_height = options.font.line_height_px();
    let mut pages: Vec<Page> = Vec::new();
    let mut page = Page::new(1);
    let mut used = 0.0f32;
    let mut available = available_height(options, 1);

    for line in lines {
        if !page.lines.is_empty() && used + line_height > available {
            let next_number = page.page_number + 1;
            pages.push(page);
            page = Page::new(next_number);
            used = 0.0;
            available = available_height(options, next_number);
        }
        page.lines.push(line);
        used += line_height;
    }
    pages.push(page);

    if options.show_metadata {
        for page in &mut pages {
            page.metadata = Some(PageMetadata {
                line_count: page.source_line_count(),
                ..Default::default()
            });
        }
    }

    pages
}

/// Content height available on a given page, after page-1 reserves
fn available_height(options: &RenderOptions, page_number: usize) -> f32 {
    let mut height = options.content_height();
    if page_number == 1 {
        if options.show_metadata || options.embed_metadata {
            height -= metadata_header_height(options);
        }
        if options.debug_mode {
            height -= grid_legend_height(options);
        }
    }
    height
}
