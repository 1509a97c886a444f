//! Language grammar trait and implementations
//!
//! This module provides the lookup tables for token classification across
//! the supported source languages. Each grammar contributes its keyword,
//! builtin, and operator sets; the shared rule engine in `scanner.rs` does
//! the actual cursor work.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Trait for language grammar implementations
///
/// A grammar only supplies classification tables; it holds no state.
pub trait Grammar: Send + Sync {
    /// Canonical language name
    fn name(&self) -> &'static str;

    fn keywords(&self) -> &'static HashSet<&'static str>;

    fn builtins(&self) -> &'static HashSet<&'static str>;

    /// All operators, any length; the scanner greedy-matches 3-, 2-, then
    /// 1-character candidates against this set
    fn operators(&self) -> &'static [&'static str];

    /// Line comment prefix, if the language has line comments
    fn comment_prefix(&self) -> Option<&'static str>;

    /// Characters that open (and close) a quoted string
    fn string_delimiters(&self) -> &'static [char];

    /// Keywords that introduce a function name (`def`, `fn`, ...)
    fn function_keywords(&self) -> &'static [&'static str] {
        &[]
    }

    /// Keywords that introduce a type/class name (`class`, `struct`, ...)
    fn type_keywords(&self) -> &'static [&'static str] {
        &[]
    }

    fn is_keyword(&self, word: &str) -> bool {
        self.keywords().contains(word)
    }

    fn is_builtin(&self, word: &str) -> bool {
        self.builtins().contains(word)
    }

    fn is_operator(&self, candidate: &str) -> bool {
        self.operators().iter().any(|op| *op == candidate)
    }
}

// ============================================================================
// Python
// ============================================================================

static PYTHON_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ]
    .into_iter()
    .collect()
});

static PYTHON_BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "print", "len", "range", "str", "int", "float", "list", "dict", "set", "tuple", "bool",
        "type", "input", "open", "abs", "min", "max", "sum", "sorted", "reversed", "enumerate",
        "zip", "map", "filter", "isinstance", "super", "repr", "hash", "id", "any", "all",
    ]
    .into_iter()
    .collect()
});

const PYTHON_OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "**", "//", "==", "!=", ">=", "<=", "->", ":=", "+=", "-=", "*=",
    "/=", "%=", "&=", "|=", "^=", ">>", "<<", "+", "-", "*", "/", "%", "=", "<", ">", "&", "|",
    "^", "~", "@",
];

#[derive(Debug, Clone)]
pub struct PythonGrammar;

impl Grammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn keywords(&self) -> &'static HashSet<&'static str> {
        &PYTHON_KEYWORDS
    }

    fn builtins(&self) -> &'static HashSet<&'static str> {
        &PYTHON_BUILTINS
    }

    fn operators(&self) -> &'static [&'static str] {
        PYTHON_OPERATORS
    }

    fn comment_prefix(&self) -> Option<&'static str> {
        Some("#")
    }

    fn string_delimiters(&self) -> &'static [char] {
        &['"', '\'']
    }

    fn function_keywords(&self) -> &'static [&'static str] {
        &["def", "lambda"]
    }

    fn type_keywords(&self) -> &'static [&'static str] {
        &["class"]
    }
}

// ============================================================================
// Rust
// ============================================================================

static RUST_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ]
    .into_iter()
    .collect()
});

static RUST_BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
        "f32", "f64", "bool", "char", "str", "String", "Vec", "Option", "Some", "None", "Result",
        "Ok", "Err", "Box", "Rc", "Arc",
    ]
    .into_iter()
    .collect()
});

const RUST_OPERATORS: &[&str] = &[
    "..=", "<<=", ">>=", "::", "->", "=>", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=",
    "/=", "%=", "^=", "&=", "|=", "<<", ">>", "..", "+", "-", "*", "/", "%", "=", "<", ">", "!",
    "&", "|", "^", "?", "@",
];

#[derive(Debug, Clone)]
pub struct RustGrammar;

impl Grammar for RustGrammar {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn keywords(&self) -> &'static HashSet<&'static str> {
        &RUST_KEYWORDS
    }

    fn builtins(&self) -> &'static HashSet<&'static str> {
        &RUST_BUILTINS
    }

    fn operators(&self) -> &'static [&'static str] {
        RUST_OPERATORS
    }

    fn comment_prefix(&self) -> Option<&'static str> {
        Some("//")
    }

    fn string_delimiters(&self) -> &'static [char] {
        &['"']
    }

    fn function_keywords(&self) -> &'static [&'static str] {
        &["fn"]
    }

    fn type_keywords(&self) -> &'static [&'static str] {
        &["struct", "enum", "trait", "type"]
    }
}

// ============================================================================
// JavaScript (also covers TypeScript sources)
// ============================================================================

static JAVASCRIPT_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
        "instanceof", "let", "new", "of", "return", "static", "super", "switch", "this", "throw",
        "try", "typeof", "var", "void", "while", "with", "yield", "async", "await", "true",
        "false", "null", "undefined",
    ]
    .into_iter()
    .collect()
});

static JAVASCRIPT_BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "console", "Math", "JSON", "Object", "Array", "String", "Number", "Boolean", "Promise",
        "Map", "Set", "Symbol", "Error", "Date", "RegExp", "parseInt", "parseFloat", "isNaN",
        "window", "document", "require", "module",
    ]
    .into_iter()
    .collect()
});

const JAVASCRIPT_OPERATORS: &[&str] = &[
    "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==", "!=", "<=", ">=",
    "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", "%=", "**", "<<", ">>", "&=", "|=",
    "^=", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
];

#[derive(Debug, Clone)]
pub struct JavaScriptGrammar;

impl Grammar for JavaScriptGrammar {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn keywords(&self) -> &'static HashSet<&'static str> {
        &JAVASCRIPT_KEYWORDS
    }

    fn builtins(&self) -> &'static HashSet<&'static str> {
        &JAVASCRIPT_BUILTINS
    }

    fn operators(&self) -> &'static [&'static str] {
        JAVASCRIPT_OPERATORS
    }

    fn comment_prefix(&self) -> Option<&'static str> {
        Some("//")
    }

    fn string_delimiters(&self) -> &'static [char] {
        &['"', '\'', '`']
    }

    fn function_keywords(&self) -> &'static [&'static str] {
        &["function"]
    }

    fn type_keywords(&self) -> &'static [&'static str] {
        &["class"]
    }
}

// ============================================================================
// Go
// ============================================================================

static GO_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ]
    .into_iter()
    .collect()
});

static GO_BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "append", "cap", "close", "copy", "delete", "len", "make", "new", "panic", "print",
        "println", "recover", "bool", "byte", "error", "float32", "float64", "int", "int8",
        "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "true", "false", "iota", "nil",
    ]
    .into_iter()
    .collect()
});

const GO_OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "...", ":=", "==", "!=", "<=", ">=", "&&", "||", "<-", "++", "--", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%", "=",
    "<", ">", "!", "&", "|", "^",
];

#[derive(Debug, Clone)]
pub struct GoGrammar;

impl Grammar for GoGrammar {
    fn name(&self) -> &'static str {
        "go"
    }

    fn keywords(&self) -> &'static HashSet<&'static str> {
        &GO_KEYWORDS
    }

    fn builtins(&self) -> &'static HashSet<&'static str> {
        &GO_BUILTINS
    }

    fn operators(&self) -> &'static [&'static str] {
        GO_OPERATORS
    }

    fn comment_prefix(&self) -> Option<&'static str> {
        Some("//")
    }

    fn string_delimiters(&self) -> &'static [char] {
        &['"', '`']
    }

    fn function_keywords(&self) -> &'static [&'static str] {
        &["func"]
    }

    fn type_keywords(&self) -> &'static [&'static str] {
        &["type"]
    }
}

// ============================================================================
// Plain fallback
// ============================================================================

static EMPTY_SET: Lazy<HashSet<&'static str>> = Lazy::new(HashSet::new);

const PLAIN_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "->", "+", "-", "*", "/", "%", "=", "<", ">", "&", "|",
];

/// Fallback grammar for unrecognized languages
///
/// Applies the same rule order as every other grammar but with empty
/// keyword/builtin sets, so it only ever produces identifier, operator,
/// punctuation, string, number, and whitespace tokens.
#[derive(Debug, Clone)]
pub struct PlainGrammar;

impl Grammar for PlainGrammar {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn keywords(&self) -> &'static HashSet<&'static str> {
        &EMPTY_SET
    }

    fn builtins(&self) -> &'static HashSet<&'static str> {
        &EMPTY_SET
    }

    fn operators(&self) -> &'static [&'static str] {
        PLAIN_OPERATORS
    }

    fn comment_prefix(&self) -> Option<&'static str> {
        None
    }

    fn string_delimiters(&self) -> &'static [char] {
        &['"']
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Dispatcher that routes a language name to its grammar
#[derive(Debug, Clone)]
pub struct GrammarDispatcher {
    python: PythonGrammar,
    rust: RustGrammar,
    javascript: JavaScriptGrammar,
    go: GoGrammar,
    plain: PlainGrammar,
}

impl GrammarDispatcher {
    pub fn new() -> Self {
        Self {
            python: PythonGrammar,
            rust: RustGrammar,
            javascript: JavaScriptGrammar,
            go: GoGrammar,
            plain: PlainGrammar,
        }
    }

    /// Get the grammar for a language name, accepting common aliases and
    /// file-extension spellings. Unknown names fall back to [`PlainGrammar`].
    pub fn handler_for(&self, language: &str) -> &dyn Grammar {
        match language.trim().to_ascii_lowercase().as_str() {
            "python" | "python3" | "py" => &self.python,
            "rust" | "rs" => &self.rust,
            "javascript" | "js" | "jsx" | "typescript" | "ts" | "tsx" => &self.javascript,
            "go" | "golang" => &self.go,
            other => {
                log::debug!("no grammar for language '{}', using plain fallback", other);
                &self.plain
            }
        }
    }

    /// Whether a language name resolves to a real grammar (not the fallback)
    pub fn is_supported(&self, language: &str) -> bool {
        self.handler_for(language).name() != "plain"
    }

    /// Canonical names of all supported grammars
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec![
            self.python.name(),
            self.rust.name(),
            self.javascript.name(),
            self.go.name(),
        ]
    }
}

impl Default for GrammarDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_alias() {
        let d = GrammarDispatcher::new();
        assert_eq!(d.handler_for("py").name(), "python");
        assert_eq!(d.handler_for("RS").name(), "rust");
        assert_eq!(d.handler_for("ts").name(), "javascript");
        assert_eq!(d.handler_for("golang").name(), "go");
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let d = GrammarDispatcher::new();
        let g = d.handler_for("cobol");
        assert_eq!(g.name(), "plain");
        assert!(g.keywords().is_empty());
        assert!(g.builtins().is_empty());
        assert!(!d.is_supported("cobol"));
    }

    #[test]
    fn test_keyword_and_builtin_classification() {
        let d = GrammarDispatcher::new();
        let py = d.handler_for("python");
        assert!(py.is_keyword("def"));
        assert!(py.is_builtin("print"));
        assert!(!py.is_keyword("print"));

        let rs = d.handler_for("rust");
        assert!(rs.is_keyword("fn"));
        assert!(rs.is_builtin("Vec"));
    }

    #[test]
    fn test_operator_membership_by_length() {
        let d = GrammarDispatcher::new();
        let js = d.handler_for("javascript");
        assert!(js.is_operator("==="));
        assert!(js.is_operator("=>"));
        assert!(js.is_operator("+"));
        assert!(!js.is_operator(";"));
    }
}
