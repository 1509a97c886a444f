//! Top-level compile facade
//!
//! An [`Engine`] holds only immutable configuration (the theme resolver and
//! the stroke synthesizer's static glyph table), so one instance can serve
//! arbitrarily many compile calls, including concurrently across threads.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;
use crate::models::{RenderOptions, SourceMetadata};
use crate::renderers::{PageCompiler, PageProgram};
use crate::scan::{scan, GrammarDispatcher};
use crate::themes::{ThemeProvider, ThemeResolver};

/// Everything one compile call needs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompileRequest {
    pub source_text: String,

    /// Language name or alias; unknown names degrade to the plain grammar
    pub language: String,

    pub options: RenderOptions,

    /// Built-in name or a name resolved by the injected theme provider
    pub theme_name: String,

    pub metadata: Option<SourceMetadata>,
}

impl CompileRequest {
    pub fn new(source_text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            language: language.into(),
            options: RenderOptions::default(),
            theme_name: "classic".to_string(),
            metadata: None,
        }
    }
}

/// The code-to-ink engine: scanner, layout, theming, and stroke synthesis
/// behind one compile entry point
pub struct Engine {
    themes: ThemeResolver,
    compiler: PageCompiler,
}

impl Engine {
    /// Engine with custom themes served by `provider`
    pub fn new(provider: Box<dyn ThemeProvider>) -> Self {
        Self {
            themes: ThemeResolver::new(provider),
            compiler: PageCompiler::new(),
        }
    }

    /// Engine that resolves only the built-in themes
    pub fn with_builtin_themes() -> Self {
        Self {
            themes: ThemeResolver::builtin_only(),
            compiler: PageCompiler::new(),
        }
    }

    /// Compile source text into ordered per-page drawing programs.
    ///
    /// Caller-input problems (unknown theme, disallowed empty input) come
    /// back as a [`CompileError`] with no partial page list; content-level
    /// anomalies degrade internally and still render every page.
    pub fn compile(&self, request: &CompileRequest) -> Result<Vec<PageProgram>, CompileError> {
        if request.source_text.is_empty() && !request.options.allow_empty {
            return Err(CompileError::EmptySource);
        }
        let theme = self.themes.resolve(&request.theme_name)?;
        let tokens = scan(&request.source_text, &request.language);
        Ok(self.compiler.compile(
            &tokens,
            &request.language,
            request.metadata.as_ref(),
            &request.options,
            &theme,
        ))
    }

    /// Canonical names of the languages with a real grammar
    pub fn supported_languages(&self) -> Vec<&'static str> {
        GrammarDispatcher::new().supported_languages()
    }
}
