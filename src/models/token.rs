//! Lexical tokens produced by the scanner
//!
//! Every byte of the source text belongs to exactly one token, including
//! whitespace and newlines, so that concatenating token values reconstructs
//! the input.

use serde::{Deserialize, Serialize};

/// Semantic classification of a scanned token
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Keyword,
    Identifier,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Whitespace,
    Builtin,
}

/// A classified slice of source text with its position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Token {
    pub token_type: TokenType,

    /// Exact text of the token, byte-for-byte as it appears in the source
    pub value: String,

    /// Byte offset of the first byte of this token in the source
    pub start: usize,

    /// Byte offset one past the last byte of this token
    pub end: usize,

    /// 1-based physical source line the token starts on
    pub line: usize,

    /// 1-based column (in characters) within that line
    pub column: usize,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        value: impl Into<String>,
        start: usize,
        line: usize,
        column: usize,
    ) -> Self {
        let value = value.into();
        let end = start + value.len();
        Self {
            token_type,
            value,
            start,
            end,
            line,
            column,
        }
    }

    /// Whether this token renders as visible ink (whitespace only advances)
    pub fn is_visible(&self) -> bool {
        self.token_type != TokenType::Whitespace
    }
}
