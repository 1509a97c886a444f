//! Paginated layout output
//!
//! The layout engine turns a token stream into ordered pages of laid-out
//! lines. Pages reference tokens by value; no indices back into the source
//! stream survive layout.

use serde::{Deserialize, Serialize};

use super::token::Token;

/// One rendered line on a page
///
/// A source line that is wider than the content box is split at token
/// boundaries into several `LaidOutLine`s; all segments after the first
/// carry `wrapped = true` and the same `source_line`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LaidOutLine {
    /// 1-based physical line number in the original source
    pub source_line: usize,

    /// Tokens rendered on this line, in source order
    pub tokens: Vec<Token>,

    /// True for continuation segments of a wrapped source line
    pub wrapped: bool,
}

impl LaidOutLine {
    pub fn new(source_line: usize, tokens: Vec<Token>, wrapped: bool) -> Self {
        Self {
            source_line,
            tokens,
            wrapped,
        }
    }
}

/// Caller-supplied description of the source being rendered
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SourceMetadata {
    pub filename: Option<String>,
    pub language_label: Option<String>,
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// First source line of the excerpt, when rendering a slice of a file
    pub line_start: Option<usize>,
    pub line_end: Option<usize>,
}

/// Document metadata attached to pages when requested
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PageMetadata {
    pub filename: Option<String>,
    pub language: Option<String>,
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Number of non-continuation source lines rendered on this page
    pub line_count: usize,
}

/// One bounded-geometry unit of paginated output
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page {
    /// 1-based page number, strictly increasing across the document
    pub page_number: usize,

    pub lines: Vec<LaidOutLine>,

    pub metadata: Option<PageMetadata>,
}

impl Page {
    pub fn new(page_number: usize) -> Self {
        assert!(page_number >= 1, "page numbers are 1-based");
        Self {
            page_number,
            lines: Vec::new(),
            metadata: None,
        }
    }

    /// Count of non-continuation lines on this page
    pub fn source_line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.wrapped).count()
    }
}
