//! Error types for the Ferrow parser
//!
//! Every failure the scanner or parser can produce is surfaced as a single
//! [`Error`] value. The variants only classify *why* the source was rejected;
//! callers that just want a message and a position can use [`Error::message`]
//! and [`Error::location`] without matching.

use std::fmt;
use thiserror::Error;

/// Source location of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (0-indexed, in characters)
    pub column: u32,
    /// Byte offset in source
    pub offset: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl SourceLocation {
    /// Compute the location of a byte offset by walking the source.
    ///
    /// Used for diagnostics raised after the scanner has moved on (pattern
    /// reinterpretation, retroactive strict-mode checks), so the cost of the
    /// walk is only paid on the error path.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1;
        let mut column = 0;
        let mut chars = source[..offset].chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() != Some(&'\n') {
                        line += 1;
                        column = 0;
                    }
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    line += 1;
                    column = 0;
                }
                _ => column += 1,
            }
        }
        SourceLocation {
            line,
            column,
            offset,
        }
    }
}

/// Format a source context with caret pointer for errors
pub fn format_error_context(source: &str, location: &SourceLocation) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let line_idx = (location.line.saturating_sub(1)) as usize;

    if line_idx >= lines.len() {
        return String::new();
    }

    let mut result = String::new();
    let line_num_width = format!("{}", location.line + 1).len().max(3);

    if line_idx > 0 {
        result.push_str(&format!(
            "{:>width$} | {}\n",
            location.line - 1,
            lines[line_idx - 1],
            width = line_num_width
        ));
    }

    result.push_str(&format!(
        "{:>width$} | {}\n",
        location.line,
        lines[line_idx],
        width = line_num_width
    ));

    result.push_str(&format!(
        "{:>width$} | {}^\n",
        "",
        " ".repeat(location.column as usize),
        width = line_num_width
    ));

    result
}

/// Main error type for Ferrow
#[derive(Error, Debug, Clone, PartialEq)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// Malformed token: unterminated literal, bad escape, bad numeric literal
    #[error("SyntaxError: {message} ({location}){}", if source_context.is_empty() { String::new() } else { format!("\n{}", source_context) })]
    LexicalError {
        message: String,
        location: SourceLocation,
        source_context: String,
    },

    /// The token stream does not match any production
    #[error("SyntaxError: {message} ({location}){}", if source_context.is_empty() { String::new() } else { format!("\n{}", source_context) })]
    SyntaxError {
        message: String,
        location: SourceLocation,
        source_context: String,
    },

    /// Static-semantics violation in an otherwise well-formed token stream
    #[error("SyntaxError: {message} ({location}){}", if source_context.is_empty() { String::new() } else { format!("\n{}", source_context) })]
    EarlyError {
        message: String,
        location: SourceLocation,
        source_context: String,
    },

    /// Input nests deeper than the configured limit
    #[error("ResourceLimitError: {kind}: {message} ({location})")]
    ResourceLimitError {
        kind: ResourceLimitKind,
        message: String,
        location: SourceLocation,
    },
}

/// Resource limit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLimitKind {
    /// Statement/expression nesting exceeded `max_depth`
    NestingDepth,
}

impl fmt::Display for ResourceLimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLimitKind::NestingDepth => write!(f, "NestingDepth"),
        }
    }
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Early,
    ResourceLimit,
}

impl Error {
    /// Create a new lexical error with source context
    pub fn lexical_error_with_context(
        message: impl Into<String>,
        location: SourceLocation,
        source: &str,
    ) -> Self {
        Error::LexicalError {
            message: message.into(),
            source_context: format_error_context(source, &location),
            location,
        }
    }

    /// Create a new syntax error with source context
    pub fn syntax_error_with_context(
        message: impl Into<String>,
        location: SourceLocation,
        source: &str,
    ) -> Self {
        Error::SyntaxError {
            message: message.into(),
            source_context: format_error_context(source, &location),
            location,
        }
    }

    /// Create a new early error with source context
    pub fn early_error_with_context(
        message: impl Into<String>,
        location: SourceLocation,
        source: &str,
    ) -> Self {
        Error::EarlyError {
            message: message.into(),
            source_context: format_error_context(source, &location),
            location,
        }
    }

    /// Create a nesting depth error
    pub fn nesting_depth_exceeded(limit: usize, location: SourceLocation) -> Self {
        Error::ResourceLimitError {
            kind: ResourceLimitKind::NestingDepth,
            message: format!("Maximum nesting depth of {} exceeded", limit),
            location,
        }
    }

    /// Human-readable message without position or context
    pub fn message(&self) -> &str {
        match self {
            Error::LexicalError { message, .. }
            | Error::SyntaxError { message, .. }
            | Error::EarlyError { message, .. }
            | Error::ResourceLimitError { message, .. } => message,
        }
    }

    /// Position of the offending input
    pub fn location(&self) -> SourceLocation {
        match self {
            Error::LexicalError { location, .. }
            | Error::SyntaxError { location, .. }
            | Error::EarlyError { location, .. }
            | Error::ResourceLimitError { location, .. } => *location,
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LexicalError { .. } => ErrorKind::Lexical,
            Error::SyntaxError { .. } => ErrorKind::Syntax,
            Error::EarlyError { .. } => ErrorKind::Early,
            Error::ResourceLimitError { .. } => ErrorKind::ResourceLimit,
        }
    }
}

/// Result type for Ferrow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic messages shared by the scanner and parser
pub mod messages {
    pub const UNEXPECTED_TOKEN: &str = "Unexpected token";
    pub const UNEXPECTED_END: &str = "Unexpected end of input";
    pub const UNTERMINATED_STRING: &str = "Unterminated string literal";
    pub const UNTERMINATED_TEMPLATE: &str = "Unterminated template literal";
    pub const UNTERMINATED_REGEXP: &str = "Unterminated regular expression";
    pub const UNTERMINATED_COMMENT: &str = "Unterminated comment";
    pub const INVALID_LEFT_HAND_SIDE: &str = "Invalid left-hand side in assignment";
    pub const INVALID_DESTRUCTURING_TARGET: &str = "Invalid destructuring assignment target";
    pub const STRICT_OCTAL_LITERAL: &str = "Octal literals are not allowed in strict mode";
    pub const STRICT_OCTAL_ESCAPE: &str = "Octal escape sequences are not allowed in strict mode";
    pub const STRICT_EVAL_ARGUMENTS: &str = "Unexpected eval or arguments in strict mode";
    pub const STRICT_RESERVED_WORD: &str = "Unexpected strict mode reserved word";
    pub const DUPLICATE_PARAMETER: &str = "Duplicate parameter name not allowed in this context";
    pub const ESCAPED_KEYWORD: &str = "Keyword must not contain escaped characters";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let loc = SourceLocation::from_offset("ab\ncd\r\nef", 8);
        assert_eq!(loc.line, 3);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.offset, 8);
    }

    #[test]
    fn test_display_includes_position_and_caret() {
        let source = "let x = ;";
        let location = SourceLocation::from_offset(source, 8);
        let err = Error::syntax_error_with_context("Unexpected token ';'", location, source);
        let text = err.to_string();
        assert!(text.starts_with("SyntaxError: Unexpected token ';' (1:8)"));
        assert!(text.contains("let x = ;"));
        assert!(text.contains("        ^"));
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}
