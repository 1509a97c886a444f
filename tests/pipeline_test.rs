//! End-to-end pipeline tests over the public API
//!
//! Covers the engine-level properties: full token coverage, page coverage,
//! determinism, empty-input handling, and theme resolution errors.

use inkpress::{
    CompileError, CompileRequest, DrawPrimitive, Engine, InMemoryThemeProvider, RenderOptions,
    SourceMetadata, TokenType,
};
use inkpress::scan::scan;

const SAMPLE: &str = r#"def greet(name):
    # say hello
    message = "hi, " + name
    return message
"#;

#[test]
fn test_token_stream_reconstructs_source_exactly() {
    for language in ["python", "rust", "javascript", "go", "unknown-lang"] {
        let tokens = scan(SAMPLE, language);
        let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(joined, SAMPLE, "coverage broken for {}", language);
    }
}

#[test]
fn test_def_scenario_token_types_and_single_page() {
    let source = "def f():\n    return 1";
    let tokens = scan(source, "python");

    let of_type = |tt: TokenType| -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| t.token_type == tt)
            .map(|t| t.value.as_str())
            .collect()
    };
    assert_eq!(of_type(TokenType::Keyword), vec!["def", "return"]);
    assert_eq!(of_type(TokenType::Identifier), vec!["f"]);
    assert_eq!(of_type(TokenType::Number), vec!["1"]);
    assert_eq!(of_type(TokenType::Punctuation), vec!["(", ")", ":"]);

    let engine = Engine::with_builtin_themes();
    let pages = engine.compile(&CompileRequest::new(source, "python")).unwrap();
    assert_eq!(pages.len(), 1);
}

#[test]
fn test_every_token_rendered_exactly_once_in_order() {
    let engine = Engine::with_builtin_themes();
    let source: String = (0..120).map(|i| format!("item{} = {}\n", i, i)).collect();
    let mut request = CompileRequest::new(source.clone(), "python");
    request.options = RenderOptions {
        font: inkpress::FontMetrics {
            size: 40.0,
            line_height: 1.5,
            char_width: 0.6,
        },
        ..Default::default()
    };
    let pages = engine.compile(&request).unwrap();
    assert!(pages.len() > 1, "expected a multi-page document");

    // Page numbers strictly increase from 1
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i + 1);
    }

    // Concatenating rendered text runs in order reproduces the visible
    // token sequence with nothing duplicated or dropped
    let rendered: Vec<String> = pages
        .iter()
        .flat_map(|p| p.primitives.iter())
        .filter_map(|p| match p {
            DrawPrimitive::TextRun { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    let expected: Vec<String> = scan(&source, "python")
        .iter()
        .filter(|t| t.is_visible())
        .map(|t| t.value.clone())
        .collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_identical_input_yields_byte_identical_output() {
    let engine = Engine::with_builtin_themes();
    let mut request = CompileRequest::new(SAMPLE, "python");
    request.options.show_line_numbers = true;
    request.options.embed_metadata = true;
    request.metadata = Some(SourceMetadata {
        filename: Some("greet.py".to_string()),
        ..Default::default()
    });

    let a = serde_json::to_vec(&engine.compile(&request).unwrap()).unwrap();
    let b = serde_json::to_vec(&engine.compile(&request).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_input_yields_one_page_with_zero_lines() {
    let engine = Engine::with_builtin_themes();
    let mut request = CompileRequest::new("", "python");
    request.options.show_metadata = true;
    let pages = engine.compile(&request).unwrap();
    assert_eq!(pages.len(), 1);
    // Background, header furniture only; line_count reports zero
    assert_eq!(pages[0].metadata.as_ref().unwrap().line_count, 0);
}

#[test]
fn test_missing_custom_theme_is_an_error() {
    let engine = Engine::with_builtin_themes();
    let mut request = CompileRequest::new("x = 1", "python");
    request.theme_name = "not-a-real-theme".to_string();
    let err = engine.compile(&request).unwrap_err();
    assert_eq!(
        err,
        CompileError::ThemeNotFound {
            name: "not-a-real-theme".to_string()
        }
    );
}

#[test]
fn test_custom_theme_from_provider_is_used() {
    let mut provider = InMemoryThemeProvider::new();
    provider
        .insert_json(
            "inverted",
            r##"{
                "background": "#000000", "foreground": "#ffffff",
                "keyword": "#ffffff", "string": "#ffffff", "comment": "#ffffff",
                "number": "#ffffff", "operator": "#ffffff", "identifier": "#ffffff",
                "function_name": "#ffffff", "class_name": "#ffffff"
            }"##,
        )
        .unwrap();
    let engine = Engine::new(Box::new(provider));
    let mut request = CompileRequest::new("x", "python");
    request.theme_name = "inverted".to_string();
    let pages = engine.compile(&request).unwrap();
    assert_eq!(
        pages[0].primitives[0],
        DrawPrimitive::BackgroundFill {
            color: inkpress::Rgb::new(0, 0, 0)
        }
    );
}

#[test]
fn test_unknown_language_still_renders_every_page() {
    let engine = Engine::with_builtin_themes();
    let request = CompileRequest::new("some plain prose, nothing else.", "prose");
    let pages = engine.compile(&request).unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages[0]
        .primitives
        .iter()
        .any(|p| matches!(p, DrawPrimitive::TextRun { .. })));
}

#[test]
fn test_output_serializes_for_the_downstream_renderer() {
    let engine = Engine::with_builtin_themes();
    let pages = engine
        .compile(&CompileRequest::new(SAMPLE, "python"))
        .unwrap();
    let json = serde_json::to_string(&pages).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["page_number"], 1);
    assert_eq!(value[0]["primitives"][0]["kind"], "background_fill");
}
