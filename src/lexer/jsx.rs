//! JSX lexical modes
//!
//! Inside a tag the scanner recognizes dashed names, quoted attribute values
//! without escape processing, and the handful of punctuators a tag can
//! contain. Between tags it reads raw text up to the next `<` or `{`.

use super::{Lexer, Token, TokenKind, TokenValue};
use crate::chars;
use crate::error::Result;

impl<'src> Lexer<'src> {
    /// Scan the next token inside a JSX opening or closing tag
    pub fn next_jsx_tag_token(&mut self) -> Result<Token<'src>> {
        self.skip_whitespace_and_comments()?;
        self.begin_token();

        let Some(c) = self.peek() else {
            return Ok(self.finish(TokenKind::Eof, TokenValue::None));
        };

        if chars::is_identifier_start(c) {
            return Ok(self.scan_jsx_identifier());
        }

        let kind = match c {
            '"' | '\'' => return self.scan_jsx_string(c),
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Equals,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ':' => TokenKind::Colon,
            '.' if self.peek_next() != Some('.') => TokenKind::Dot,
            // Anything else is scanned normally so the parser can report it
            _ => return self.next_token(),
        };
        self.advance();
        Ok(self.finish(kind, TokenValue::None))
    }

    /// JSX names may contain `-` after the first character; escapes are not allowed
    fn scan_jsx_identifier(&mut self) -> Token<'src> {
        let start = self.pos;
        self.advance();
        while let Some(c) = self.peek() {
            if c == '-' || chars::is_identifier_part(c) {
                self.advance();
            } else {
                break;
            }
        }
        let name = self.source[start..self.pos].to_string();
        self.finish(TokenKind::JsxIdentifier, TokenValue::String(name))
    }

    /// Quoted attribute value; may span lines, backslashes are literal
    fn scan_jsx_string(&mut self, quote: char) -> Result<Token<'src>> {
        let start = self.mark();
        self.advance();
        let body_start = self.pos;
        loop {
            match self.advance() {
                None => return Err(self.error_at("Unterminated string constant", start)),
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        let body_end = self.pos - quote.len_utf8();
        Ok(self.finish(
            TokenKind::JsxString,
            TokenValue::RawSlice(body_start as u32, body_end as u32),
        ))
    }

    /// Scan the next child of a JSX element: a text run, `<` or `{`
    pub fn next_jsx_child_token(&mut self) -> Result<Token<'src>> {
        tracing::trace!(offset = self.pos, "scan JSX child");
        self.newline_before = false;
        self.begin_token();

        if self.is_eof() {
            return Ok(self.finish(TokenKind::Eof, TokenValue::None));
        }

        match self.peek() {
            Some('<') => {
                self.advance();
                Ok(self.finish(TokenKind::Less, TokenValue::None))
            }
            Some('{') => {
                self.advance();
                Ok(self.finish(TokenKind::LeftBrace, TokenValue::None))
            }
            _ => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == '<' || c == '{' {
                        break;
                    }
                    self.advance();
                }
                Ok(self.finish(
                    TokenKind::JsxText,
                    TokenValue::RawSlice(start as u32, self.pos as u32),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SourceType;

    #[test]
    fn test_jsx_tag_tokens() {
        let mut lexer = Lexer::new("data-foo='a\\b' />", SourceType::Script);
        let name = lexer.next_jsx_tag_token().unwrap();
        assert_eq!(name.kind, TokenKind::JsxIdentifier);
        assert_eq!(name.value, TokenValue::String("data-foo".to_string()));
        assert_eq!(lexer.next_jsx_tag_token().unwrap().kind, TokenKind::Equals);
        let value = lexer.next_jsx_tag_token().unwrap();
        assert_eq!(value.kind, TokenKind::JsxString);
        assert_eq!(value.value, TokenValue::RawSlice(10, 13));
        assert_eq!(lexer.next_jsx_tag_token().unwrap().kind, TokenKind::Slash);
        assert_eq!(lexer.next_jsx_tag_token().unwrap().kind, TokenKind::Greater);
    }

    #[test]
    fn test_jsx_keywords_are_names() {
        let mut lexer = Lexer::new("this", SourceType::Script);
        assert_eq!(lexer.next_jsx_tag_token().unwrap().kind, TokenKind::JsxIdentifier);
    }

    #[test]
    fn test_jsx_unterminated_attribute_string() {
        let mut lexer = Lexer::new("\"abc", SourceType::Script);
        assert!(lexer.next_jsx_tag_token().is_err());
    }

    #[test]
    fn test_jsx_text() {
        let mut lexer = Lexer::new(" a > b; } <x/>", SourceType::Script);
        let text = lexer.next_jsx_child_token().unwrap();
        assert_eq!(text.kind, TokenKind::JsxText);
        assert_eq!(text.raw, " a > b; } ");
        assert_eq!(lexer.next_jsx_child_token().unwrap().kind, TokenKind::Less);
    }

    #[test]
    fn test_jsx_digit_name_is_not_identifier() {
        let mut lexer = Lexer::new("1", SourceType::Script);
        assert_eq!(lexer.next_jsx_tag_token().unwrap().kind, TokenKind::NumberLiteral);
    }
}
