//! Wrapping and pagination behavior over the public API

use inkpress::scan::scan;
use inkpress::{
    FontMetrics, LayoutEngine, Margins, PageSize, RenderOptions,
};

/// Options giving an exact character grid: `cols` characters per line,
/// `rows` lines per page
fn grid_options(cols: usize, rows: usize) -> RenderOptions {
    RenderOptions {
        page_size: PageSize::Custom {
            width: cols as f32 * 10.0,
            height: rows as f32 * 10.0,
        },
        margins: Margins::uniform(0.0),
        font: FontMetrics {
            size: 10.0,
            line_height: 1.0,
            char_width: 1.0,
        },
        ..Default::default()
    }
}

#[test]
fn test_five_hundred_char_line_wraps_to_ceil_of_per_line() {
    // 500 characters of single-character tokens on one source line
    let source = "m ".repeat(250);
    let tokens = scan(&source, "plain");
    let options = grid_options(80, 1000);
    let pages = LayoutEngine::new().layout(&tokens, &options);

    let lines: Vec<_> = pages.iter().flat_map(|p| p.lines.iter()).collect();
    assert_eq!(lines.len(), 500_usize.div_ceil(80));
    assert!(lines.iter().all(|l| l.source_line == 1));
    assert!(!lines[0].wrapped);
    assert!(lines[1..].iter().all(|l| l.wrapped));

    // Zero characters dropped
    let kept: usize = lines
        .iter()
        .flat_map(|l| l.tokens.iter())
        .map(|t| t.value.len())
        .sum();
    assert_eq!(kept, source.len());
}

#[test]
fn test_no_emitted_line_exceeds_content_width() {
    let source = "alpha beta gamma delta epsilon zeta eta theta ".repeat(20);
    let tokens = scan(source.trim_end(), "plain");
    let options = grid_options(30, 1000);
    let pages = LayoutEngine::new().layout(&tokens, &options);

    for page in &pages {
        for line in &page.lines {
            let width: f32 = line
                .tokens
                .iter()
                .map(|t| options.font.measure(&t.value))
                .sum();
            assert!(width <= options.content_width() + f32::EPSILON);
        }
    }
}

#[test]
fn test_tokens_never_split_across_wrap_boundaries() {
    let source = "longword ".repeat(100);
    let tokens = scan(source.trim_end(), "plain");
    let original: Vec<String> = tokens.iter().map(|t| t.value.clone()).collect();

    let options = grid_options(25, 1000);
    let pages = LayoutEngine::new().layout(&tokens, &options);
    let laid_out: Vec<String> = pages
        .iter()
        .flat_map(|p| p.lines.iter())
        .flat_map(|l| l.tokens.iter())
        .map(|t| t.value.clone())
        .collect();
    assert_eq!(laid_out, original);
}

#[test]
fn test_overwide_single_token_overflows_alone() {
    let source = "m".repeat(200);
    let tokens = scan(&source, "plain");
    assert_eq!(tokens.len(), 1, "an unbroken run scans as one token");

    let options = grid_options(80, 1000);
    let pages = LayoutEngine::new().layout(&tokens, &options);
    let lines: Vec<_> = pages.iter().flat_map(|p| p.lines.iter()).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].tokens[0].value.len(), 200);
}

#[test]
fn test_multi_page_document_keeps_source_order() {
    let source: String = (1..=100).map(|i| format!("line{}\n", i)).collect();
    let tokens = scan(&source, "plain");
    let options = grid_options(40, 12);
    let pages = LayoutEngine::new().layout(&tokens, &options);
    assert!(pages.len() >= 8);

    let mut last = 0;
    for page in &pages {
        assert!(page.lines.len() <= 12);
        for line in &page.lines {
            assert!(line.source_line > last || line.wrapped);
            if !line.wrapped {
                assert_eq!(line.source_line, last + 1);
                last = line.source_line;
            }
        }
    }
    assert_eq!(last, 100, "every source line paginated exactly once");
}

#[test]
fn test_page_height_never_exceeded() {
    let source: String = (1..=60).map(|i| format!("row {}\n", i)).collect();
    let tokens = scan(&source, "plain");
    let options = grid_options(40, 9);
    let pages = LayoutEngine::new().layout(&tokens, &options);

    let line_height = options.font.line_height_px();
    for page in &pages {
        let content_height = page.lines.len() as f32 * line_height;
        assert!(content_height <= options.content_height() + f32::EPSILON);
    }
}

#[test]
fn test_metadata_header_reserve_applies_to_first_page_only() {
    let source: String = (1..=40).map(|i| format!("r{}\n", i)).collect();
    let tokens = scan(&source, "plain");

    let options = RenderOptions {
        show_metadata: true,
        ..grid_options(40, 10)
    };
    let pages = LayoutEngine::new().layout(&tokens, &options);
    assert!(pages[0].lines.len() < pages[1].lines.len());

    let counts: usize = pages
        .iter()
        .map(|p| p.metadata.as_ref().unwrap().line_count)
        .sum();
    assert_eq!(counts, 40);
}
