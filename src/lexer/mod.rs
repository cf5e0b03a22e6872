//! ECMAScript scanner
//!
//! The scanner is pull-based: the parser asks for one token at a time and,
//! where the grammar makes a character sequence ambiguous, asks for the same
//! input to be read again under a different lexical goal:
//!
//! - [`Lexer::rescan_regexp`] turns a `/` or `/=` token into a regular
//!   expression literal when the parser is at the start of an expression.
//! - [`Lexer::rescan_template_continuation`] reads the template piece that
//!   follows a substitution's closing `}`.
//! - [`Lexer::next_jsx_tag_token`] and [`Lexer::next_jsx_child_token`] (in
//!   `jsx.rs`) read JSX names, attribute strings and text runs.
//!
//! The scanner never decides strict-mode legality. Tokens carry
//! [`TokenFlags`] describing legacy octal literals, octal escapes and
//! escaped keywords, and the parser rejects them once it knows the context.

mod jsx;
mod token;

pub use token::{Keyword, Token, TokenFlags, TokenKind, TokenValue};

use crate::ast::SourceType;
use crate::chars;
use crate::error::{messages, Error, Result, SourceLocation};
use num_bigint::BigUint;

/// Saved scanner position
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: u32,
    column: u32,
}

/// Result of decoding one escape sequence
enum Escape {
    Valid,
    /// Legacy octal escape or `\8` / `\9`
    Octal,
    /// Malformed; fatal in strings, makes a template piece's cooked value null
    Invalid(&'static str),
}

/// A scanner over ECMAScript source code
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// Source code being lexed
    source: &'src str,
    /// Source as bytes for faster access
    bytes: &'src [u8],
    /// Current position in bytes
    pos: usize,
    /// Current line number (1-indexed)
    line: u32,
    /// Current column number (0-indexed)
    column: u32,
    /// Module goal: HTML-like comments are not recognized
    module: bool,
    /// Start of the token being scanned
    token_start: Mark,
    /// A line terminator preceded the token being scanned
    newline_before: bool,
    /// Flags collected while scanning the current token
    flags: TokenFlags,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'src str, source_type: SourceType) -> Self {
        let start = Mark {
            pos: 0,
            line: 1,
            column: 0,
        };
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 0,
            module: source_type == SourceType::Module,
            token_start: start,
            newline_before: false,
            flags: TokenFlags::empty(),
        }
    }

    /// The full source text
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Tokenize the whole input in the default goal, without regex or
    /// template-continuation rescans. Useful for tooling that only needs a
    /// flat token stream of simple code.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.column = mark.column;
    }

    /// Move back to the start of `token` so it can be read under another goal
    fn rewind(&mut self, token: &Token<'_>) {
        self.reset(Mark {
            pos: token.start as usize,
            line: token.line,
            column: token.column,
        });
        self.newline_before = token.newline_before;
        self.begin_token();
    }

    fn begin_token(&mut self) {
        self.token_start = self.mark();
        self.flags = TokenFlags::empty();
    }

    fn location_of(&self, mark: Mark) -> SourceLocation {
        SourceLocation {
            line: mark.line,
            column: mark.column,
            offset: mark.pos,
        }
    }

    /// Create a lexical error at an earlier position
    fn error_at(&self, message: impl Into<String>, mark: Mark) -> Error {
        Error::lexical_error_with_context(message, self.location_of(mark), self.source)
    }

    /// Create a lexical error at the current position
    fn error(&self, message: impl Into<String>) -> Error {
        self.error_at(message, self.mark())
    }

    /// Build the token that spans from `token_start` to the current position
    fn finish(&self, kind: TokenKind, value: TokenValue) -> Token<'src> {
        let start = self.token_start;
        Token {
            kind,
            start: start.pos as u32,
            end: self.pos as u32,
            line: start.line,
            column: start.column,
            end_line: self.line,
            end_column: self.column,
            value,
            newline_before: self.newline_before,
            flags: self.flags,
            raw: &self.source[start.pos..self.pos],
        }
    }

    /// Check if we've reached the end of input
    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        match self.bytes.get(self.pos) {
            None => None,
            Some(&b) if b < 0x80 => Some(b as char),
            Some(_) => self.source[self.pos..].chars().next(),
        }
    }

    /// Peek at next character (one ahead)
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.source[self.pos..].starts_with(s)
    }

    /// Advance and return current character
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        match c {
            '\n' | '\u{2028}' | '\u{2029}' => {
                self.line += 1;
                self.column = 0;
            }
            '\r' if self.peek() != Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip to the end of the current line
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if chars::is_line_terminator(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip whitespace and comments, noting whether a line terminator was crossed
    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        self.newline_before = false;
        let at_input_start = self.pos == 0;

        if at_input_start && self.starts_with("#!") {
            self.skip_line_comment();
        }

        loop {
            let Some(c) = self.peek() else { break };
            if chars::is_line_terminator(c) {
                self.newline_before = true;
                self.advance();
            } else if chars::is_white_space(c) {
                self.advance();
            } else if c == '/' && self.peek_next() == Some('/') {
                self.skip_line_comment();
            } else if c == '/' && self.peek_next() == Some('*') {
                let start = self.mark();
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        None => return Err(self.error_at(messages::UNTERMINATED_COMMENT, start)),
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(c) if chars::is_line_terminator(c) => self.newline_before = true,
                        Some(_) => {}
                    }
                }
            } else if !self.module && c == '<' && self.starts_with("<!--") {
                self.skip_line_comment();
            } else if !self.module
                && c == '-'
                && (self.newline_before || at_input_start)
                && self.starts_with("-->")
            {
                self.skip_line_comment();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Decode a `\u` escape after the backslash and `u` have been consumed.
    /// Returns `None` when the escape is malformed.
    fn scan_unicode_escape(&mut self) -> Option<u32> {
        if self.eat('{') {
            let mut value: u32 = 0;
            let mut digits = 0;
            while let Some(d) = self.peek().and_then(|c| c.to_digit(16)) {
                self.advance();
                value = value.saturating_mul(16).saturating_add(d);
                digits += 1;
            }
            if digits == 0 || value > 0x10FFFF || !self.eat('}') {
                return None;
            }
            Some(value)
        } else {
            self.scan_hex_digits(4)
        }
    }

    fn scan_hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut value = 0;
        for _ in 0..count {
            let d = self.peek()?.to_digit(16)?;
            self.advance();
            value = value * 16 + d;
        }
        Some(value)
    }

    /// Decode an identifier `\u` escape, which must name a character that is
    /// legal at this point of the identifier
    fn scan_identifier_escape(&mut self, start: bool) -> Result<char> {
        let at = self.mark();
        self.advance(); // backslash
        if !self.eat('u') {
            return Err(self.error_at("Invalid Unicode escape sequence", at));
        }
        let c = self
            .scan_unicode_escape()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error_at("Invalid Unicode escape sequence", at))?;
        let valid = if start {
            chars::is_identifier_start(c)
        } else {
            chars::is_identifier_part(c)
        };
        if !valid {
            return Err(self.error_at("Invalid Unicode escape sequence", at));
        }
        self.flags |= TokenFlags::ESCAPED;
        Ok(c)
    }

    /// Scan an IdentifierName, decoding escapes
    fn scan_identifier_name(&mut self) -> Result<String> {
        let start = self.pos;
        let mut name = String::new();
        let mut escaped = false;

        if self.peek() == Some('\\') {
            name.push(self.scan_identifier_escape(true)?);
            escaped = true;
        } else {
            self.advance();
        }

        loop {
            match self.peek() {
                Some('\\') => {
                    if !escaped {
                        name.push_str(&self.source[start..self.pos]);
                        escaped = true;
                    }
                    name.push(self.scan_identifier_escape(false)?);
                }
                Some(c) if chars::is_identifier_part(c) => {
                    self.advance();
                    if escaped {
                        name.push(c);
                    }
                }
                _ => break,
            }
        }

        if escaped {
            Ok(name)
        } else {
            Ok(self.source[start..self.pos].to_string())
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Result<Token<'src>> {
        let name = self.scan_identifier_name()?;
        let kind = match Keyword::lookup(&name) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        Ok(self.finish(kind, TokenValue::String(name)))
    }

    /// Scan `#name`
    fn scan_private_name(&mut self) -> Result<Token<'src>> {
        self.advance(); // #
        match self.peek() {
            Some(c) if c == '\\' || chars::is_identifier_start(c) => {}
            _ => return Err(self.error("Invalid or unexpected token")),
        }
        let name = self.scan_identifier_name()?;
        Ok(self.finish(TokenKind::PrivateName, TokenValue::String(name)))
    }

    /// Scan digits of `radix`, allowing single `_` separators between digits.
    /// Returns the digits with separators removed.
    fn scan_digits(&mut self, radix: u32, allow_separators: bool) -> Result<String> {
        let mut digits = String::new();
        let mut last_was_digit = false;
        loop {
            match self.peek() {
                Some('_') if allow_separators => {
                    let next_is_digit = self.peek_next().is_some_and(|c| c.is_digit(radix));
                    if !last_was_digit || !next_is_digit {
                        return Err(self.error("Numeric separators are not allowed here"));
                    }
                    self.advance();
                    last_was_digit = false;
                }
                Some('_') => return Err(self.error("Numeric separators are not allowed here")),
                Some(c) if c.is_digit(radix) => {
                    self.advance();
                    digits.push(c);
                    last_was_digit = true;
                }
                _ => break,
            }
        }
        Ok(digits)
    }

    /// Reject an identifier or digit glued to the end of a numeric literal
    fn check_numeric_end(&self) -> Result<()> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '\\' || chars::is_identifier_start(c) => {
                Err(self.error("Identifier starts immediately after numeric literal"))
            }
            _ => Ok(()),
        }
    }

    fn radix_value(&self, digits: &str, radix: u32) -> f64 {
        match u64::from_str_radix(digits, radix) {
            Ok(value) => value as f64,
            Err(_) => digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * radix as f64 + d as f64),
        }
    }

    fn bigint_value(&self, digits: &str, radix: u32) -> String {
        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "0".to_string())
    }

    /// Scan a numeric literal
    fn scan_number(&mut self) -> Result<Token<'src>> {
        let start = self.mark();

        // Hex, binary, octal
        if self.peek() == Some('0') {
            let radix = match self.peek_next() {
                Some('x') | Some('X') => Some(16),
                Some('o') | Some('O') => Some(8),
                Some('b') | Some('B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.advance();
                self.advance();
                let digits = self.scan_digits(radix, true)?;
                if digits.is_empty() {
                    return Err(self.error_at("Invalid or unexpected token", start));
                }
                if self.eat('n') {
                    self.check_numeric_end()?;
                    let value = self.bigint_value(&digits, radix);
                    return Ok(self.finish(TokenKind::BigIntLiteral, TokenValue::BigInt(value)));
                }
                self.check_numeric_end()?;
                let value = self.radix_value(&digits, radix);
                return Ok(self.finish(TokenKind::NumberLiteral, TokenValue::Number(value)));
            }

            // Legacy octal (017) or non-octal decimal (089)
            if self.peek_next().is_some_and(|c| c.is_ascii_digit() || c == '_') {
                self.advance();
                self.flags |= TokenFlags::LEGACY_OCTAL;
                let digits = self.scan_digits(10, false)?;
                if digits.bytes().all(|b| b < b'8') {
                    if self.peek() == Some('n') {
                        return Err(self.error("Invalid BigInt syntax"));
                    }
                    self.check_numeric_end()?;
                    let value = self.radix_value(&digits, 8);
                    return Ok(self.finish(TokenKind::NumberLiteral, TokenValue::Number(value)));
                }
                return self.scan_decimal_tail(start, digits);
            }
        }

        let integer = if self.peek() == Some('.') {
            String::new()
        } else {
            self.scan_digits(10, true)?
        };

        if self.peek() == Some('n') {
            self.advance();
            self.check_numeric_end()?;
            let value = self.bigint_value(&integer, 10);
            return Ok(self.finish(TokenKind::BigIntLiteral, TokenValue::BigInt(value)));
        }

        self.scan_decimal_tail(start, integer)
    }

    /// Scan the optional fraction and exponent of a decimal literal whose
    /// integer digits have been consumed
    fn scan_decimal_tail(&mut self, start: Mark, integer: String) -> Result<Token<'src>> {
        let mut text = if integer.is_empty() {
            "0".to_string()
        } else {
            integer
        };

        if self.eat('.') {
            if self.peek() == Some('_') {
                return Err(self.error("Numeric separators are not allowed here"));
            }
            let fraction = self.scan_digits(10, true)?;
            if !fraction.is_empty() {
                text.push('.');
                text.push_str(&fraction);
            }
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            self.advance();
            text.push('e');
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.advance();
                text.push(sign);
            }
            let exponent = self.scan_digits(10, true)?;
            if exponent.is_empty() {
                return Err(self.error_at("Invalid or unexpected token", start));
            }
            text.push_str(&exponent);
        }

        if self.peek() == Some('n') {
            return Err(self.error("Invalid BigInt syntax"));
        }
        self.check_numeric_end()?;

        let value = lexical_core::parse::<f64>(text.as_bytes())
            .map_err(|_| self.error_at("Invalid number", start))?;
        Ok(self.finish(TokenKind::NumberLiteral, TokenValue::Number(value)))
    }

    /// Decode one escape sequence after its backslash, appending the result
    /// to `out`. Line continuations append nothing.
    fn scan_escape(&mut self, out: &mut String, in_template: bool) -> Escape {
        let Some(c) = self.advance() else {
            return Escape::Invalid(messages::UNTERMINATED_STRING);
        };
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{C}'),
            'v' => out.push('\u{B}'),
            '\r' => {
                self.eat('\n');
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            '0'..='7' => {
                if in_template {
                    return Escape::Invalid("Octal escape sequences are not allowed in template strings");
                }
                let mut value = c.to_digit(8).unwrap_or(0);
                let max_len = if c <= '3' { 3 } else { 2 };
                for _ in 1..max_len {
                    match self.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            self.advance();
                            value = value * 8 + d;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
                return Escape::Octal;
            }
            '8' | '9' => {
                if in_template {
                    return Escape::Invalid("\\8 and \\9 are not allowed in template strings");
                }
                out.push(c);
                return Escape::Octal;
            }
            'x' => match self.scan_hex_digits(2) {
                Some(value) => out.push(char::from_u32(value).unwrap_or('\u{FFFD}')),
                None => return Escape::Invalid("Invalid hexadecimal escape sequence"),
            },
            'u' => {
                let Some(code) = self.scan_unicode_escape() else {
                    return Escape::Invalid("Invalid Unicode escape sequence");
                };
                if chars::is_lead_surrogate(code) && self.starts_with("\\u") {
                    let save = self.mark();
                    self.advance();
                    self.advance();
                    match self.scan_unicode_escape() {
                        Some(trail) if chars::is_trail_surrogate(trail) => {
                            let combined = chars::from_surrogate_pair(code, trail);
                            out.push(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                            return Escape::Valid;
                        }
                        _ => self.reset(save),
                    }
                }
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            other => out.push(other),
        }
        Escape::Valid
    }

    /// Scan a string literal
    fn scan_string(&mut self, quote: char) -> Result<Token<'src>> {
        let start = self.mark();
        self.advance(); // Opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.error_at(messages::UNTERMINATED_STRING, start));
                }
                Some('\\') => {
                    let escape_start = self.mark();
                    self.advance();
                    match self.scan_escape(&mut value, false) {
                        Escape::Valid => {}
                        Escape::Octal => self.flags |= TokenFlags::OCTAL_ESCAPE,
                        Escape::Invalid(message) => return Err(self.error_at(message, escape_start)),
                    }
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        Ok(self.finish(TokenKind::StringLiteral, TokenValue::String(value)))
    }

    /// Scan template characters up to and including the closing `` ` `` or
    /// the `${` of the next substitution. Returns whether a substitution follows.
    fn scan_template_piece(&mut self) -> Result<(bool, TokenValue)> {
        let start = self.token_start;
        let mut cooked = Some(String::new());
        let mut raw = String::new();

        let has_substitution = loop {
            let piece_start = self.pos;
            match self.peek() {
                None => return Err(self.error_at(messages::UNTERMINATED_TEMPLATE, start)),
                Some('`') => {
                    self.advance();
                    break false;
                }
                Some('$') if self.peek_next() == Some('{') => {
                    self.advance();
                    self.advance();
                    break true;
                }
                Some('\\') => {
                    self.advance();
                    let mut decoded = String::new();
                    match self.scan_escape(&mut decoded, true) {
                        Escape::Valid => {
                            if let Some(cooked) = cooked.as_mut() {
                                cooked.push_str(&decoded);
                            }
                        }
                        Escape::Octal | Escape::Invalid(_) => cooked = None,
                    }
                    raw.push_str(&self.source[piece_start..self.pos].replace("\r\n", "\n").replace('\r', "\n"));
                }
                Some('\r') => {
                    self.advance();
                    self.eat('\n');
                    raw.push('\n');
                    if let Some(cooked) = cooked.as_mut() {
                        cooked.push('\n');
                    }
                }
                Some(c) => {
                    self.advance();
                    raw.push(c);
                    if let Some(cooked) = cooked.as_mut() {
                        cooked.push(c);
                    }
                }
            }
        };

        Ok((has_substitution, TokenValue::Template { cooked, raw }))
    }

    /// Scan a template literal starting at its opening backtick
    fn scan_template(&mut self) -> Result<Token<'src>> {
        self.advance(); // Opening backtick
        let (has_substitution, value) = self.scan_template_piece()?;
        let kind = if has_substitution {
            TokenKind::TemplateHead
        } else {
            TokenKind::TemplateLiteral
        };
        Ok(self.finish(kind, value))
    }

    /// Continue scanning a template literal after the `}` that closes a
    /// substitution. `brace` is the `}` token the parser is holding.
    pub fn rescan_template_continuation(&mut self, brace: &Token<'_>) -> Result<Token<'src>> {
        tracing::trace!(offset = brace.start, "rescan as template continuation");
        self.rewind(brace);
        self.advance(); // }
        let (has_substitution, value) = self.scan_template_piece()?;
        let kind = if has_substitution {
            TokenKind::TemplateMiddle
        } else {
            TokenKind::TemplateTail
        };
        Ok(self.finish(kind, value))
    }

    /// Re-read a `/` or `/=` token as the start of a regular expression literal
    pub fn rescan_regexp(&mut self, slash: &Token<'_>) -> Result<Token<'src>> {
        tracing::trace!(offset = slash.start, "rescan as regular expression");
        self.rewind(slash);
        let start = self.mark();
        self.advance(); // /

        let mut in_class = false;
        let body_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error_at(messages::UNTERMINATED_REGEXP, start)),
                Some(c) if chars::is_line_terminator(c) => {
                    return Err(self.error_at(messages::UNTERMINATED_REGEXP, start));
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c) if !chars::is_line_terminator(c) => {
                            self.advance();
                        }
                        _ => return Err(self.error_at(messages::UNTERMINATED_REGEXP, start)),
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.advance();
                }
                Some('/') if !in_class => break,
                Some(_) => {
                    self.advance();
                }
            }
        }
        let pattern = self.source[body_start..self.pos].to_string();
        self.advance(); // closing /

        let flags_start = self.mark();
        let mut flags = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                return Err(self.error("Invalid regular expression flags"));
            }
            if !chars::is_identifier_part(c) {
                break;
            }
            if !"dgimsuy".contains(c) || flags.contains(c) {
                return Err(self.error_at("Invalid regular expression flags", flags_start));
            }
            self.advance();
            flags.push(c);
        }

        Ok(self.finish(
            TokenKind::RegexLiteral,
            TokenValue::RegExp { pattern, flags },
        ))
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Result<Token<'src>> {
        self.skip_whitespace_and_comments()?;
        self.begin_token();

        let Some(c) = self.peek() else {
            return Ok(self.finish(TokenKind::Eof, TokenValue::None));
        };

        // Identifiers and keywords
        if c == '\\' || chars::is_identifier_start(c) {
            return self.scan_identifier();
        }

        // Numbers
        if c.is_ascii_digit() || (c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit())) {
            return self.scan_number();
        }

        match c {
            '"' | '\'' => return self.scan_string(c),
            '`' => return self.scan_template(),
            '#' => return self.scan_private_name(),
            _ => {}
        }

        let kind = self.scan_punctuator(c)?;
        Ok(self.finish(kind, TokenValue::None))
    }

    /// Scan the longest punctuator starting with `c`
    fn scan_punctuator(&mut self, c: char) -> Result<TokenKind> {
        self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '~' => TokenKind::Tilde,
            '?' => {
                if self.peek() == Some('.') && !self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                    TokenKind::QuestionDot
                } else if self.eat('?') {
                    if self.eat('=') {
                        TokenKind::QuestionQuestionEquals
                    } else {
                        TokenKind::QuestionQuestion
                    }
                } else {
                    TokenKind::Question
                }
            }
            '.' => {
                if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    TokenKind::DotDotDot
                } else {
                    TokenKind::Dot
                }
            }
            '+' => {
                if self.eat('+') {
                    TokenKind::PlusPlus
                } else if self.eat('=') {
                    TokenKind::PlusEquals
                } else {
                    TokenKind::Plus
                }
            }
            // `--` never absorbs a following `>`: `x-->y` is `x -- > y`
            '-' => {
                if self.eat('-') {
                    TokenKind::MinusMinus
                } else if self.eat('=') {
                    TokenKind::MinusEquals
                } else {
                    TokenKind::Minus
                }
            }
            '*' => {
                if self.eat('*') {
                    if self.eat('=') {
                        TokenKind::StarStarEquals
                    } else {
                        TokenKind::StarStar
                    }
                } else if self.eat('=') {
                    TokenKind::StarEquals
                } else {
                    TokenKind::Star
                }
            }
            '/' => {
                if self.eat('=') {
                    TokenKind::SlashEquals
                } else {
                    TokenKind::Slash
                }
            }
            '%' => {
                if self.eat('=') {
                    TokenKind::PercentEquals
                } else {
                    TokenKind::Percent
                }
            }
            '<' => {
                if self.eat('<') {
                    if self.eat('=') {
                        TokenKind::LessLessEquals
                    } else {
                        TokenKind::LessLess
                    }
                } else if self.eat('=') {
                    TokenKind::LessEquals
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.eat('>') {
                    if self.eat('>') {
                        if self.eat('=') {
                            TokenKind::GreaterGreaterGreaterEquals
                        } else {
                            TokenKind::GreaterGreaterGreater
                        }
                    } else if self.eat('=') {
                        TokenKind::GreaterGreaterEquals
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.eat('=') {
                    TokenKind::GreaterEquals
                } else {
                    TokenKind::Greater
                }
            }
            '=' => {
                if self.eat('=') {
                    if self.eat('=') {
                        TokenKind::EqualsEqualsEquals
                    } else {
                        TokenKind::EqualsEquals
                    }
                } else if self.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Equals
                }
            }
            '!' => {
                if self.eat('=') {
                    if self.eat('=') {
                        TokenKind::BangEqualsEquals
                    } else {
                        TokenKind::BangEquals
                    }
                } else {
                    TokenKind::Bang
                }
            }
            '&' => {
                if self.eat('&') {
                    if self.eat('=') {
                        TokenKind::AmpersandAmpersandEquals
                    } else {
                        TokenKind::AmpersandAmpersand
                    }
                } else if self.eat('=') {
                    TokenKind::AmpersandEquals
                } else {
                    TokenKind::Ampersand
                }
            }
            '|' => {
                if self.eat('|') {
                    if self.eat('=') {
                        TokenKind::PipePipeEquals
                    } else {
                        TokenKind::PipePipe
                    }
                } else if self.eat('=') {
                    TokenKind::PipeEquals
                } else {
                    TokenKind::Pipe
                }
            }
            '^' => {
                if self.eat('=') {
                    TokenKind::CaretEquals
                } else {
                    TokenKind::Caret
                }
            }
            _ => {
                return Err(self.error_at(
                    format!("Invalid or unexpected token '{}'", c),
                    self.token_start,
                ));
            }
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source, SourceType::Script).tokenize().unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty() {
        let mut lexer = Lexer::new("", SourceType::Script);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_numbers() {
        let cases: &[(&str, f64)] = &[
            ("42", 42.0),
            ("3.14", 3.14),
            (".5", 0.5),
            ("5.", 5.0),
            ("1e3", 1000.0),
            ("1.5E-2", 0.015),
            ("0xFF", 255.0),
            ("0b1010", 10.0),
            ("0o17", 15.0),
            ("017", 15.0),
            ("089", 89.0),
            ("1_000_000", 1_000_000.0),
        ];
        for (source, expected) in cases {
            let token = Lexer::new(source, SourceType::Script).next_token().unwrap();
            assert_eq!(token.kind, TokenKind::NumberLiteral, "{}", source);
            assert_eq!(token.value, TokenValue::Number(*expected), "{}", source);
        }
    }

    #[test]
    fn test_legacy_octal_flag() {
        let token = Lexer::new("017", SourceType::Script).next_token().unwrap();
        assert!(token.flags.contains(TokenFlags::LEGACY_OCTAL));
        let token = Lexer::new("17", SourceType::Script).next_token().unwrap();
        assert!(!token.flags.contains(TokenFlags::LEGACY_OCTAL));
    }

    #[test]
    fn test_bigint() {
        let token = Lexer::new("0x1Fn", SourceType::Script).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::BigIntLiteral);
        assert_eq!(token.value, TokenValue::BigInt("31".to_string()));
        assert!(Lexer::new("1.5n", SourceType::Script).next_token().is_err());
        assert!(Lexer::new("017n", SourceType::Script).next_token().is_err());
    }

    #[test]
    fn test_invalid_numbers() {
        for source in ["1__0", "1_", "0x", "3in", "1e", "0_1"] {
            assert!(
                Lexer::new(source, SourceType::Script).next_token().is_err(),
                "{} should not lex",
                source
            );
        }
    }

    #[test]
    fn test_string_escapes() {
        let token = Lexer::new(r#""a\n\x41B\u{43}\u{1F600}""#, SourceType::Script)
            .next_token()
            .unwrap();
        assert_eq!(token.value, TokenValue::String("a\nABC\u{1F600}".to_string()));

        let token = Lexer::new(r#""😀""#, SourceType::Script).next_token().unwrap();
        assert_eq!(token.value, TokenValue::String("\u{1F600}".to_string()));

        let token = Lexer::new(r#""\uD800""#, SourceType::Script).next_token().unwrap();
        assert_eq!(token.value, TokenValue::String("\u{FFFD}".to_string()));
    }

    #[test]
    fn test_string_octal_escape() {
        let token = Lexer::new(r#"'\012'"#, SourceType::Script).next_token().unwrap();
        assert_eq!(token.value, TokenValue::String("\n".to_string()));
        assert!(token.flags.contains(TokenFlags::OCTAL_ESCAPE));

        let token = Lexer::new(r#"'\0'"#, SourceType::Script).next_token().unwrap();
        assert!(!token.flags.contains(TokenFlags::OCTAL_ESCAPE));
    }

    #[test]
    fn test_string_line_continuation() {
        let token = Lexer::new("'a\\\nb'", SourceType::Script).next_token().unwrap();
        assert_eq!(token.value, TokenValue::String("ab".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("'abc\n'", SourceType::Script).next_token().unwrap_err();
        assert_eq!(err.message(), messages::UNTERMINATED_STRING);
        assert!(Lexer::new(r#""\x4""#, SourceType::Script).next_token().is_err());
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let tokens = lex("let foo = async");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Let));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].name(), Some("foo"));
        assert_eq!(tokens[3].kind, TokenKind::Keyword(Keyword::Async));
    }

    #[test]
    fn test_escaped_identifier() {
        let token = Lexer::new(r"ab\u{63}", SourceType::Script).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.name(), Some("abc"));
        assert!(token.flags.contains(TokenFlags::ESCAPED));

        let token = Lexer::new(r"v\u0061r", SourceType::Script).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Keyword(Keyword::Var));
        assert!(!token.is_keyword(Keyword::Var));

        assert!(Lexer::new(r"1a", SourceType::Script).next_token().is_err());
    }

    #[test]
    fn test_punctuators() {
        assert_eq!(
            kinds("a?.b ?? c ??= d"),
            vec![
                TokenKind::Identifier,
                TokenKind::QuestionDot,
                TokenKind::Identifier,
                TokenKind::QuestionQuestion,
                TokenKind::Identifier,
                TokenKind::QuestionQuestionEquals,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(
            kinds("x ? .5 : 1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Question,
                TokenKind::NumberLiteral,
                TokenKind::Colon,
                TokenKind::NumberLiteral,
            ]
        );
        assert_eq!(kinds(">>>="), vec![TokenKind::GreaterGreaterGreaterEquals]);
        assert_eq!(kinds("**="), vec![TokenKind::StarStarEquals]);
    }

    #[test]
    fn test_decrement_before_greater() {
        assert_eq!(
            kinds("y-->10"),
            vec![
                TokenKind::Identifier,
                TokenKind::MinusMinus,
                TokenKind::Greater,
                TokenKind::NumberLiteral,
            ]
        );
    }

    #[test]
    fn test_html_comments() {
        assert_eq!(kinds("a\n--> comment\nb"), vec![TokenKind::Identifier, TokenKind::Identifier]);
        assert_eq!(kinds("a <!-- comment\nb"), vec![TokenKind::Identifier, TokenKind::Identifier]);
        assert_eq!(kinds("--> at start"), vec![]);

        let tokens = Lexer::new("a\n--> b", SourceType::Module).tokenize().unwrap();
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_newline_before() {
        let tokens = lex("a /* \n */ b // c\nd e");
        assert!(!tokens[0].newline_before);
        assert!(tokens[1].newline_before);
        assert!(tokens[2].newline_before);
        assert!(!tokens[3].newline_before);
    }

    #[test]
    fn test_positions() {
        let tokens = lex("ab\r\n  cd\u{2028}e");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 2));
        assert_eq!((tokens[1].start, tokens[1].end), (6, 8));
        assert_eq!((tokens[2].line, tokens[2].column), (3, 0));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = Lexer::new("/* abc", SourceType::Script).next_token().unwrap_err();
        assert_eq!(err.message(), messages::UNTERMINATED_COMMENT);
    }

    #[test]
    fn test_template() {
        let mut lexer = Lexer::new("`a${b}c\\u{`", SourceType::Script);
        let head = lexer.next_token().unwrap();
        assert_eq!(head.kind, TokenKind::TemplateHead);
        assert_eq!(
            head.value,
            TokenValue::Template {
                cooked: Some("a".to_string()),
                raw: "a".to_string()
            }
        );
        let b = lexer.next_token().unwrap();
        assert_eq!(b.name(), Some("b"));
        let brace = lexer.next_token().unwrap();
        assert_eq!(brace.kind, TokenKind::RightBrace);
        let tail = lexer.rescan_template_continuation(&brace).unwrap();
        assert_eq!(tail.kind, TokenKind::TemplateTail);
        assert_eq!(
            tail.value,
            TokenValue::Template {
                cooked: None,
                raw: "c\\u{".to_string()
            }
        );
    }

    #[test]
    fn test_regexp_rescan() {
        let mut lexer = Lexer::new("/[/]\\//gi.source", SourceType::Script);
        let slash = lexer.next_token().unwrap();
        assert_eq!(slash.kind, TokenKind::Slash);
        let regex = lexer.rescan_regexp(&slash).unwrap();
        assert_eq!(regex.kind, TokenKind::RegexLiteral);
        assert_eq!(
            regex.value,
            TokenValue::RegExp {
                pattern: "[/]\\/".to_string(),
                flags: "gi".to_string()
            }
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    }

    #[test]
    fn test_regexp_invalid_flags() {
        for source in ["/a/gg", "/a/x", "/a\n/"] {
            let mut lexer = Lexer::new(source, SourceType::Script);
            let slash = lexer.next_token().unwrap();
            assert!(lexer.rescan_regexp(&slash).is_err(), "{}", source);
        }
    }

    #[test]
    fn test_private_name() {
        let token = Lexer::new("#secret", SourceType::Script).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::PrivateName);
        assert_eq!(token.value, TokenValue::String("secret".to_string()));
    }

    #[test]
    fn test_hashbang() {
        assert_eq!(kinds("#!/usr/bin/env node\nx"), vec![TokenKind::Identifier]);
    }
}
