//! ECMAScript and JSX parser
//!
//! A recursive descent parser over a pull-based [`Lexer`]. The parser holds
//! exactly one current token; the lexer always sits just past it, so a
//! different lexical goal (regular expression, template continuation, JSX
//! text) can be applied by rescanning from the current token. Lookahead
//! clones the lexer, which is a handful of integers and borrowed slices.
//!
//! Cover grammars are handled by parsing once and converting afterwards:
//! object and array literals and parenthesized lists are built as
//! expressions and turned into patterns by [`pattern::expression_to_pattern`]
//! once the following token shows what they were.
//!
//! The parser is organized by grammar area:
//! - `statement`: statements, declarations, ASI and labels
//! - `expression`: operators, primaries and the cover grammar
//! - `function`: functions, arrows, classes and binding patterns
//! - `module`: import and export declarations
//! - `jsx`: JSX elements, attributes and children

mod context;
mod expression;
mod function;
mod jsx;
mod module;
mod pattern;
mod scope;
mod statement;

use rustc_hash::FxHashSet;

use crate::ast::*;
use crate::error::{messages, Error, Result, SourceLocation};
use crate::lexer::{Keyword, Lexer, Token, TokenFlags, TokenKind, TokenValue};
use crate::options::ParseOptions;

use context::{Context, StatementContext};
use pattern::{PatternContext, PatternError, PatternMode};
use scope::{BindingKind, PrivateKind, PrivateNameStack, ScopeKind, ScopeStack};

/// A source position a node starts or ends at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker {
    offset: u32,
    line: u32,
    column: u32,
}

/// An active statement label
#[derive(Debug, Clone)]
struct Label {
    name: String,
    /// The label is attached to an iteration statement, so `continue` may target it
    is_loop: bool,
}

/// Errors an object or array literal carries until it is known whether it
/// is an expression or a pattern
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CoverErrors {
    /// `{a = 1}`: only valid once reinterpreted as a pattern
    shorthand_assign: Option<u32>,
    /// Second `__proto__: value` in one literal: only valid in a pattern
    double_proto: Option<u32>,
}

impl CoverErrors {
    /// Forget errors raised at or after `start`: the literal there became a pattern
    fn discard_from(&mut self, start: u32) {
        if self.shorthand_assign.is_some_and(|offset| offset >= start) {
            self.shorthand_assign = None;
        }
        if self.double_proto.is_some_and(|offset| offset >= start) {
            self.double_proto = None;
        }
    }
}

/// Which lexical goal to read the token after a JSX `>` or `}` with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexMode {
    Normal,
    JsxTag,
    JsxChild,
}

/// A recursive descent parser for ECMAScript and JSX
pub struct Parser<'src> {
    source: &'src str,
    lexer: Lexer<'src>,
    /// Current token
    token: Token<'src>,
    /// End of the last consumed token
    prev_end: Marker,
    options: ParseOptions,
    source_type: SourceType,
    ctx: Context,
    /// Current statement/expression nesting
    depth: usize,
    scopes: ScopeStack,
    private_names: PrivateNameStack,
    labels: Vec<Label>,
    /// (start, end) of expressions written in parentheses
    parenthesized: FxHashSet<(u32, u32)>,
    /// Offset of the latest legacy octal literal or octal escape seen in
    /// sloppy code, re-checked when a directive prologue turns strict mode on
    last_octal: Option<u32>,
    /// Offset of the latest `yield` or `await` expression, used to reject
    /// them inside parameter lists
    last_yield_or_await: Option<u32>,
    /// Names exported so far
    exported_names: FxHashSet<String>,
    /// Local bindings referenced by `export { ... }` without `from`
    exported_locals: Vec<Identifier>,
}

impl<'src> Parser<'src> {
    /// Create a parser for `source` with the given goal symbol
    pub fn new(source: &'src str, options: ParseOptions, source_type: SourceType) -> Result<Self> {
        let mut lexer = Lexer::new(source, source_type);
        let token = lexer.next_token()?;
        let ctx = match source_type {
            SourceType::Script => Context::default(),
            SourceType::Module => Context::default() | Context::STRICT | Context::MODULE | Context::AWAIT,
        };
        Ok(Self {
            source,
            lexer,
            token,
            prev_end: Marker {
                offset: 0,
                line: 1,
                column: 0,
            },
            options,
            source_type,
            ctx,
            depth: 0,
            scopes: ScopeStack::default(),
            private_names: PrivateNameStack::default(),
            labels: Vec::new(),
            parenthesized: FxHashSet::default(),
            last_octal: None,
            last_yield_or_await: None,
            exported_names: FxHashSet::default(),
            exported_locals: Vec::new(),
        })
    }

    /// Parse the whole input
    pub fn parse_program(mut self) -> Result<Program> {
        self.scopes.push(ScopeKind::Function);
        let mut body = Vec::new();
        if self.source_type == SourceType::Script {
            self.parse_directives(&mut body, 0)?;
        }
        while !self.at(TokenKind::Eof) {
            body.push(self.parse_statement_list_item(StatementContext::TopLevel)?);
        }
        if self.source_type == SourceType::Module {
            self.check_exported_locals()?;
        }
        self.scopes.pop();

        let end = Marker {
            offset: self.source.len() as u32,
            line: self.token.end_line,
            column: self.token.end_column,
        };
        let start = Marker {
            offset: 0,
            line: 1,
            column: 0,
        };
        Ok(Program {
            body,
            source_type: self.source_type,
            strict: self.ctx.is_strict(),
            span: self.span_between(start, end),
        })
    }

    // ========== Token Access ==========

    fn at(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Current token is the keyword, spelled without escapes
    fn at_keyword(&self, keyword: Keyword) -> bool {
        self.token.is_keyword(keyword)
    }

    /// Consume the current token and read the next one in the default goal
    fn advance(&mut self) -> Result<Token<'src>> {
        self.advance_with(LexMode::Normal)
    }

    /// Consume the current token and read the next one in `mode`
    fn advance_with(&mut self, mode: LexMode) -> Result<Token<'src>> {
        let next = match mode {
            LexMode::Normal => self.lexer.next_token()?,
            LexMode::JsxTag => self.lexer.next_jsx_tag_token()?,
            LexMode::JsxChild => self.lexer.next_jsx_child_token()?,
        };
        let previous = std::mem::replace(&mut self.token, next);
        self.prev_end = Marker {
            offset: previous.end,
            line: previous.end_line,
            column: previous.end_column,
        };
        Ok(previous)
    }

    /// The token after the current one, in the default goal
    fn peek(&self) -> Result<Token<'src>> {
        self.lexer.clone().next_token()
    }

    fn eat(&mut self, kind: TokenKind) -> Result<bool> {
        if self.at(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> Result<bool> {
        if self.at_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>> {
        if self.at(kind) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token<'src>> {
        if self.at_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Automatic semicolon insertion: a `;` may be omitted before `}`, at
    /// the end of input, or when a line terminator precedes the next token
    fn can_insert_semicolon(&self) -> bool {
        self.at(TokenKind::Eof) || self.at(TokenKind::RightBrace) || self.token.newline_before
    }

    fn expect_semicolon(&mut self) -> Result<()> {
        if self.eat(TokenKind::Semicolon)? || self.can_insert_semicolon() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    // ========== Node Builder ==========

    /// Start position of the current token
    fn start(&self) -> Marker {
        Marker {
            offset: self.token.start,
            line: self.token.line,
            column: self.token.column,
        }
    }

    /// Span from `start` to the end of the last consumed token
    fn finish(&self, start: Marker) -> Span {
        self.span_between(start, self.prev_end)
    }

    fn span_between(&self, start: Marker, end: Marker) -> Span {
        let loc = self.options.locations.then_some(Location {
            start: Position {
                line: start.line,
                column: start.column,
            },
            end: Position {
                line: end.line,
                column: end.column,
            },
        });
        Span {
            start: start.offset,
            end: end.offset,
            loc,
            with_range: self.options.ranges,
        }
    }

    /// Span of the current token
    fn token_span(&self) -> Span {
        let end = Marker {
            offset: self.token.end,
            line: self.token.end_line,
            column: self.token.end_column,
        };
        self.span_between(self.start(), end)
    }

    /// Start position of an already built node
    fn marker_of(span: Span) -> Marker {
        let (line, column) = span.loc.map_or((0, 0), |loc| (loc.start.line, loc.start.column));
        Marker {
            offset: span.start,
            line,
            column,
        }
    }

    /// End position of an already built node
    fn end_marker_of(span: Span) -> Marker {
        let (line, column) = span.loc.map_or((0, 0), |loc| (loc.end.line, loc.end.column));
        Marker {
            offset: span.end,
            line,
            column,
        }
    }

    fn raw_of(&self, token: &Token<'_>) -> Option<String> {
        self.options.raw.then(|| token.raw.to_string())
    }

    fn mark_parenthesized(&mut self, span: Span) {
        self.parenthesized.insert((span.start, span.end));
    }

    fn is_parenthesized(&self, span: Span) -> bool {
        self.parenthesized.contains(&(span.start, span.end))
    }

    // ========== Errors ==========

    fn location_at(&self, offset: u32) -> SourceLocation {
        SourceLocation::from_offset(self.source, offset as usize)
    }

    fn syntax_error_at(&self, offset: u32, message: impl Into<String>) -> Error {
        Error::syntax_error_with_context(message, self.location_at(offset), self.source)
    }

    fn early_error_at(&self, offset: u32, message: impl Into<String>) -> Error {
        Error::early_error_with_context(message, self.location_at(offset), self.source)
    }

    /// Error for the current token not fitting the grammar
    fn unexpected(&self) -> Error {
        if self.at(TokenKind::Eof) {
            self.syntax_error_at(self.token.start, messages::UNEXPECTED_END)
        } else {
            self.syntax_error_at(
                self.token.start,
                format!("{} '{}'", messages::UNEXPECTED_TOKEN, self.token.raw),
            )
        }
    }

    fn pattern_error(&self, error: PatternError) -> Error {
        self.early_error_at(error.offset, error.message)
    }

    fn check_cover(&self, cover: &CoverErrors) -> Result<()> {
        if let Some(offset) = cover.shorthand_assign {
            return Err(self.syntax_error_at(offset, "Invalid shorthand property initializer"));
        }
        if let Some(offset) = cover.double_proto {
            return Err(self.early_error_at(offset, "Redefinition of __proto__ property"));
        }
        Ok(())
    }

    // ========== Context ==========

    /// Run `f` with `ctx` installed, restoring the previous context afterwards
    fn with_context<T>(&mut self, ctx: Context, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.ctx;
        self.ctx = ctx;
        let result = f(self);
        self.ctx = saved;
        result
    }

    /// Count one level of statement/expression nesting
    fn enter_nesting(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::nesting_depth_exceeded(
                self.options.max_depth,
                self.location_at(self.token.start),
            ));
        }
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    fn pattern_context(&self, mode: PatternMode) -> PatternContext<'_> {
        PatternContext {
            mode,
            strict: self.ctx.is_strict(),
            object_rest: self.options.next,
            parenthesized: &self.parenthesized,
        }
    }

    /// Reinterpret `expr` as a pattern, lifting failures into early errors
    fn to_pattern(&self, expr: Expression, mode: PatternMode) -> Result<Pattern> {
        pattern::expression_to_pattern(expr, &self.pattern_context(mode)).map_err(|e| self.pattern_error(e))
    }

    /// Reject legacy octal literals and octal escapes in strict code, and
    /// remember them in sloppy code
    fn check_octal(&mut self, token: &Token<'_>) -> Result<()> {
        let is_octal_literal = token.flags.contains(TokenFlags::LEGACY_OCTAL);
        let is_octal_escape = token.flags.contains(TokenFlags::OCTAL_ESCAPE);
        if !is_octal_literal && !is_octal_escape {
            return Ok(());
        }
        if self.ctx.is_strict() {
            let message = if is_octal_literal {
                messages::STRICT_OCTAL_LITERAL
            } else {
                messages::STRICT_OCTAL_ESCAPE
            };
            return Err(self.early_error_at(token.start, message));
        }
        self.last_octal = Some(token.start);
        Ok(())
    }
}

/// Parse `source` with the given goal symbol
pub fn parse(source: &str, options: ParseOptions, source_type: SourceType) -> Result<Program> {
    Parser::new(source, options, source_type)?.parse_program()
}
