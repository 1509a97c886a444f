//! Code-to-ink pagination and stroke synthesis engine
//!
//! Turns source code or plain text into per-page drawing programs for an
//! e-ink notebook renderer: tokenize, lay out across fixed-size pages with
//! wrapping and overflow, resolve per-token colors from a theme, and emit
//! either positioned text runs or synthesized handwriting-like pen strokes.
//!
//! The whole pipeline is a pure function of its inputs; an [`Engine`] holds
//! only immutable tables and is safe to share across threads.

pub mod engine;
pub mod error;
pub mod models;
pub mod renderers;
pub mod scan;
pub mod themes;

// Re-export commonly used types
pub use engine::{CompileRequest, Engine};
pub use error::CompileError;
pub use models::{
    FontMetrics, LaidOutLine, Margins, Page, PageMetadata, PageSize, PenKind, RenderMode,
    RenderOptions, Rgb, SourceMetadata, Stroke, StrokePoint, Token, TokenType,
};
pub use renderers::{DrawPrimitive, LayoutEngine, PageCompiler, PageProgram, StrokeSynthesizer};
pub use themes::{InMemoryThemeProvider, ThemeColors, ThemeProvider, ThemeResolver};
