//! Functions, arrow functions, classes and binding patterns

use super::expression::{is_identifier_kind, starts_property_name};
use super::*;

impl<'src> Parser<'src> {
    // ========== Functions ==========

    /// Function declaration or expression. `start` is at `function`, or at
    /// the `async` before it. The name is declared in the enclosing scope
    /// as `declare` when given.
    pub(super) fn parse_function(
        &mut self,
        start: Marker,
        kind: FunctionKind,
        is_async: bool,
        declare: Option<BindingKind>,
        id_optional: bool,
    ) -> Result<Function> {
        self.expect_keyword(Keyword::Function)?;
        let is_generator = self.eat(TokenKind::Star)?;
        if is_async && is_generator && !self.options.next {
            return Err(self.syntax_error_at(self.prev_end.offset - 1, "Async generators are not enabled"));
        }

        let id = if self.at(TokenKind::LeftParen) && (id_optional || kind == FunctionKind::FunctionExpression) {
            None
        } else if kind == FunctionKind::FunctionExpression {
            // A function expression's name is bound inside the function itself
            let ctx = self.ctx.and_yield(is_generator).and_await(is_async);
            Some(self.with_context(ctx, |p| p.parse_binding_identifier())?)
        } else {
            Some(self.parse_binding_identifier()?)
        };
        if let (Some(id), Some(binding)) = (&id, declare) {
            self.declare_name(id, binding)?;
        }

        self.parse_function_rest(start, kind, id, is_async, is_generator, Context::empty(), None)
    }

    pub(super) fn parse_function_expression(&mut self, start: Marker, is_async: bool) -> Result<Expression> {
        self.parse_function(start, FunctionKind::FunctionExpression, is_async, None, true)
            .map(|function| Expression::Function(Box::new(function)))
    }

    /// Method of an object literal or class: parameters and body, starting
    /// at `(`. `extra` adds `super` permissions to the body context.
    pub(super) fn parse_method(
        &mut self,
        is_async: bool,
        is_generator: bool,
        kind: MethodKind,
        extra: Context,
    ) -> Result<Function> {
        let start = self.start();
        self.parse_function_rest(
            start,
            FunctionKind::FunctionExpression,
            None,
            is_async,
            is_generator,
            extra,
            Some(kind),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn parse_function_rest(
        &mut self,
        start: Marker,
        kind: FunctionKind,
        id: Option<Identifier>,
        is_async: bool,
        is_generator: bool,
        extra: Context,
        method: Option<MethodKind>,
    ) -> Result<Function> {
        let ctx = self.ctx.function_body(is_async, is_generator) | extra;
        let saved_labels = std::mem::take(&mut self.labels);
        let saved_yield_or_await = self.last_yield_or_await.take();
        self.scopes.push(ScopeKind::Function);

        let result = self.with_context(ctx, |p| {
            let params = p.parse_formal_parameters()?;
            if let Some(method) = method {
                p.check_accessor_params(method, &params, start)?;
            }
            let body = p.parse_function_body(&params, id.as_ref(), method.is_some())?;
            Ok((params, body))
        });

        self.scopes.pop();
        self.labels = saved_labels;
        self.last_yield_or_await = saved_yield_or_await;
        let (params, body) = result?;

        Ok(Function {
            kind,
            id,
            params,
            body: FunctionBody::Block(body),
            is_generator,
            expression: false,
            is_async,
            span: self.finish(start),
        })
    }

    fn check_accessor_params(&self, method: MethodKind, params: &[Pattern], start: Marker) -> Result<()> {
        match method {
            MethodKind::Get if !params.is_empty() => {
                Err(self.syntax_error_at(start.offset, "Getter must not have any formal parameters."))
            }
            MethodKind::Set if params.len() != 1 => {
                Err(self.syntax_error_at(start.offset, "Setter must have exactly one formal parameter."))
            }
            MethodKind::Set if matches!(params[0], Pattern::Rest(_)) => {
                Err(self.syntax_error_at(params[0].span().start, "Setter function argument must not be a rest parameter"))
            }
            _ => Ok(()),
        }
    }

    /// `( FormalParameters )`
    fn parse_formal_parameters(&mut self) -> Result<Vec<Pattern>> {
        self.expect(TokenKind::LeftParen)?;
        let mut params = Vec::new();
        while !self.at(TokenKind::RightParen) {
            if self.at(TokenKind::DotDotDot) {
                let start = self.start();
                self.advance()?;
                let argument = self.parse_binding_target()?;
                if self.at(TokenKind::Equals) {
                    return Err(self.syntax_error_at(self.token.start, "Rest parameter may not have a default initializer"));
                }
                params.push(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(start),
                })));
                if !self.at(TokenKind::RightParen) {
                    return Err(self.syntax_error_at(self.token.start, "Rest parameter must be last formal parameter"));
                }
                break;
            }
            params.push(self.parse_binding_element()?);
            if !self.at(TokenKind::RightParen) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::RightParen)?;

        if let Some(offset) = self.last_yield_or_await {
            return Err(self.early_error_at(offset, "Yield or await expression not allowed in formal parameter"));
        }
        Ok(params)
    }

    /// `{ FunctionBody }`, with its directive prologue. Parameters are
    /// declared once the prologue has settled strictness.
    fn parse_function_body(
        &mut self,
        params: &[Pattern],
        id: Option<&Identifier>,
        unique_params: bool,
    ) -> Result<BlockStatement> {
        let start = self.start();
        self.expect(TokenKind::LeftBrace)?;

        let mut body = Vec::new();
        let has_use_strict = self.parse_directives(&mut body, start.offset)?;
        let simple = params.iter().all(Pattern::is_identifier);
        if has_use_strict {
            if !simple {
                return Err(self.syntax_error_at(
                    start.offset,
                    "Illegal 'use strict' directive in function with non-simple parameter list",
                ));
            }
            if let Some(id) = id {
                self.check_strict_binding_name(id)?;
            }
        }
        self.declare_params(params, unique_params || !simple)?;

        while !self.at(TokenKind::RightBrace) {
            if self.at(TokenKind::Eof) {
                return Err(self.unexpected());
            }
            body.push(self.parse_statement_list_item(StatementContext::TopLevel)?);
        }
        self.advance()?; // }

        Ok(BlockStatement {
            body,
            span: self.finish(start),
        })
    }

    /// Declare parameter names, rejecting duplicates where they are not
    /// allowed and names strict mode reserves
    fn declare_params(&mut self, params: &[Pattern], unique: bool) -> Result<()> {
        let strict = self.ctx.is_strict();
        let mut seen = FxHashSet::default();
        for param in params {
            for id in param.bound_names() {
                if strict {
                    self.check_strict_binding_name(id)?;
                }
                if !seen.insert(id.name.as_str()) && (unique || strict) {
                    return Err(self.early_error_at(id.span.start, messages::DUPLICATE_PARAMETER));
                }
                self.scopes.declare(&id.name, BindingKind::Param);
            }
        }
        Ok(())
    }

    /// Names a binding may not have once code is strict
    fn check_strict_binding_name(&self, id: &Identifier) -> Result<()> {
        if id.name == "eval" || id.name == "arguments" {
            return Err(self.early_error_at(id.span.start, messages::STRICT_EVAL_ARGUMENTS));
        }
        if Keyword::lookup(&id.name).is_some_and(|keyword| keyword.is_strict_reserved()) {
            return Err(self.early_error_at(id.span.start, messages::STRICT_RESERVED_WORD));
        }
        Ok(())
    }

    // ========== Arrow Functions ==========

    /// Arrow function body after already converted parameters; the current
    /// token is `=>`
    pub(super) fn parse_arrow_function(
        &mut self,
        start: Marker,
        params: Vec<Pattern>,
        is_async: bool,
    ) -> Result<Expression> {
        self.expect(TokenKind::Arrow)?;
        let expression = !self.at(TokenKind::LeftBrace);
        let mut ctx = self.ctx.arrow_body(is_async);
        if expression {
            ctx = ctx.and_in(self.ctx.has_in());
        }

        let saved_labels = std::mem::take(&mut self.labels);
        let saved_yield_or_await = self.last_yield_or_await.take();
        self.scopes.push(ScopeKind::Function);

        let result = self.with_context(ctx, |p| {
            if expression {
                p.declare_params(&params, true)?;
                let body = p.parse_assignment_expression()?;
                Ok(FunctionBody::Expression(Box::new(body)))
            } else {
                p.parse_function_body(&params, None, true).map(FunctionBody::Block)
            }
        });

        self.scopes.pop();
        self.labels = saved_labels;
        self.last_yield_or_await = saved_yield_or_await;
        let body = result?;

        Ok(Expression::Arrow(Box::new(Function {
            kind: FunctionKind::ArrowFunctionExpression,
            id: None,
            params,
            body,
            is_generator: false,
            expression,
            is_async,
            span: self.finish(start),
        })))
    }

    // ========== Classes ==========

    /// Class declaration or expression starting at `class`. All parts of a
    /// class are strict mode code.
    pub(super) fn parse_class(&mut self, start: Marker, kind: ClassKind) -> Result<Class> {
        self.parse_class_with(start, kind, false)
    }

    /// Class whose name may be omitted even as a declaration (`export default`)
    pub(super) fn parse_class_with(&mut self, start: Marker, kind: ClassKind, id_optional: bool) -> Result<Class> {
        self.expect_keyword(Keyword::Class)?;
        let ctx = self.ctx.and_strict(true);
        self.with_context(ctx, |p| p.parse_class_rest(start, kind, id_optional))
    }

    fn parse_class_rest(&mut self, start: Marker, kind: ClassKind, id_optional: bool) -> Result<Class> {
        let id = if self.at_identifier_like() {
            Some(self.parse_binding_identifier()?)
        } else if kind == ClassKind::ClassDeclaration && !id_optional {
            return Err(self.unexpected());
        } else {
            None
        };
        if let (Some(id), ClassKind::ClassDeclaration) = (&id, kind) {
            self.declare_name(id, BindingKind::Lexical)?;
        }

        let super_class = if self.eat_keyword(Keyword::Extends)? {
            Some(self.parse_lhs_expression()?)
        } else {
            None
        };
        let body = self.parse_class_body(super_class.is_some())?;

        Ok(Class {
            kind,
            id,
            super_class,
            body,
            span: self.finish(start),
        })
    }

    fn parse_class_body(&mut self, derived: bool) -> Result<ClassBody> {
        let start = self.start();
        self.expect(TokenKind::LeftBrace)?;
        self.private_names.enter_class();
        let mut body = Vec::new();
        let mut has_constructor = false;
        while !self.at(TokenKind::RightBrace) {
            if self.eat(TokenKind::Semicolon)? {
                continue;
            }
            body.push(self.parse_class_element(derived, &mut has_constructor)?);
        }
        if let Some((name, offset)) = self.private_names.exit_class() {
            return Err(self.early_error_at(
                offset,
                format!("Private field '#{}' must be declared in an enclosing class", name),
            ));
        }
        self.advance()?; // }
        Ok(ClassBody {
            body,
            span: self.finish(start),
        })
    }

    fn parse_class_element(&mut self, derived: bool, has_constructor: &mut bool) -> Result<ClassElement> {
        let start = self.start();

        let mut is_static = false;
        if self.at_keyword(Keyword::Static) {
            let next = self.peek()?;
            if !ends_member_name(&next) {
                self.advance()?;
                is_static = true;
            }
        }

        let mut is_async = false;
        if self.at_keyword(Keyword::Async) {
            let next = self.peek()?;
            if !next.newline_before && (next.kind == TokenKind::Star || starts_property_name(&next)) {
                self.advance()?;
                is_async = true;
            }
        }

        let mut is_generator = false;
        if self.at(TokenKind::Star) {
            if is_async && !self.options.next {
                return Err(self.unexpected());
            }
            self.advance()?;
            is_generator = true;
        }

        let mut kind = MethodKind::Method;
        if !is_async && !is_generator && (self.at_keyword(Keyword::Get) || self.at_keyword(Keyword::Set)) {
            let next = self.peek()?;
            if starts_property_name(&next) {
                kind = if self.at_keyword(Keyword::Get) { MethodKind::Get } else { MethodKind::Set };
                self.advance()?;
            }
        }

        let (key, computed) = self.parse_property_key(true)?;
        let key_span = key.span();
        let name = if computed { None } else { key.static_name().map(str::to_string) };

        if let PropertyKey::PrivateName(private) = &key {
            if private.name == "constructor" {
                return Err(self.early_error_at(key_span.start, "Classes may not have a private field named '#constructor'"));
            }
        }
        let is_private = matches!(key, PropertyKey::PrivateName(_));
        if is_static && !is_private && name.as_deref() == Some("prototype") {
            return Err(self.early_error_at(key_span.start, "Classes may not have a static property named 'prototype'"));
        }

        let is_method = is_async || is_generator || kind != MethodKind::Method || self.at(TokenKind::LeftParen);
        if let PropertyKey::PrivateName(private) = &key {
            let private_kind = match kind {
                _ if !is_method => PrivateKind::Field,
                MethodKind::Get => PrivateKind::Getter { is_static },
                MethodKind::Set => PrivateKind::Setter { is_static },
                _ => PrivateKind::Method,
            };
            if !self.private_names.declare(&private.name, private_kind) {
                return Err(self.early_error_at(
                    key_span.start,
                    format!("Identifier '#{}' has already been declared", private.name),
                ));
            }
        }
        if !is_method {
            return self.parse_class_field(start, key, computed, is_static, name.as_deref());
        }

        if !is_static && !is_private && name.as_deref() == Some("constructor") {
            let problem = match kind {
                MethodKind::Get | MethodKind::Set => Some("an accessor"),
                _ if is_generator => Some("a generator"),
                _ if is_async => Some("an async method"),
                _ => None,
            };
            if let Some(problem) = problem {
                return Err(self.early_error_at(key_span.start, format!("Class constructor may not be {}", problem)));
            }
            if *has_constructor {
                return Err(self.early_error_at(key_span.start, "A class may only have one constructor"));
            }
            *has_constructor = true;
            kind = MethodKind::Constructor;
        }

        let mut extra = Context::SUPER_PROPERTY;
        if kind == MethodKind::Constructor && derived {
            extra |= Context::SUPER_CALL;
        }
        let value = self.parse_method(is_async, is_generator, kind, extra)?;

        Ok(ClassElement::Method(MethodDefinition {
            key,
            value: Box::new(value),
            kind,
            computed,
            is_static,
            span: self.finish(start),
        }))
    }

    fn parse_class_field(
        &mut self,
        start: Marker,
        key: PropertyKey,
        computed: bool,
        is_static: bool,
        name: Option<&str>,
    ) -> Result<ClassElement> {
        if !self.options.next {
            return Err(self.unexpected());
        }
        if name == Some("constructor") && !matches!(key, PropertyKey::PrivateName(_)) {
            return Err(self.early_error_at(key.span().start, "Classes may not have a field named 'constructor'"));
        }

        let value = if self.eat(TokenKind::Equals)? {
            let ctx = (self.ctx & (Context::STRICT | Context::MODULE))
                | Context::IN
                | Context::IN_CLASS_FIELD
                | Context::SUPER_PROPERTY
                | Context::NEW_TARGET;
            Some(self.with_context(ctx, |p| p.parse_assignment_expression())?)
        } else {
            None
        };
        self.expect_semicolon()?;

        Ok(ClassElement::Property(PropertyDefinition {
            key,
            value,
            computed,
            is_static,
            span: self.finish(start),
        }))
    }

    // ========== Binding Patterns ==========

    /// Binding identifier or destructuring pattern, without a default
    pub(super) fn parse_binding_target(&mut self) -> Result<Pattern> {
        match self.token.kind {
            TokenKind::LeftBracket => self.parse_array_binding_pattern(),
            TokenKind::LeftBrace => self.parse_object_binding_pattern(),
            _ => self.parse_binding_identifier().map(Pattern::Identifier),
        }
    }

    /// Binding target with an optional `= default`
    pub(super) fn parse_binding_element(&mut self) -> Result<Pattern> {
        let start = self.start();
        let target = self.parse_binding_target()?;
        if !self.eat(TokenKind::Equals)? {
            return Ok(target);
        }
        let right = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
        Ok(Pattern::Assignment(Box::new(AssignmentPattern {
            left: target,
            right,
            span: self.finish(start),
        })))
    }

    fn parse_array_binding_pattern(&mut self) -> Result<Pattern> {
        self.enter_nesting()?;
        let result = self.parse_array_binding_elements();
        self.leave_nesting();
        result
    }

    fn parse_array_binding_elements(&mut self) -> Result<Pattern> {
        let start = self.start();
        self.advance()?; // [
        let mut elements = Vec::new();
        while !self.at(TokenKind::RightBracket) {
            if self.eat(TokenKind::Comma)? {
                elements.push(None);
                continue;
            }
            if self.at(TokenKind::DotDotDot) {
                let rest_start = self.start();
                self.advance()?;
                let argument = self.parse_binding_target()?;
                if self.at(TokenKind::Equals) {
                    return Err(self.syntax_error_at(self.token.start, "Rest elements cannot have a default value"));
                }
                elements.push(Some(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_start),
                }))));
                if !self.at(TokenKind::RightBracket) {
                    return Err(self.syntax_error_at(self.token.start, "Rest element must be last element"));
                }
                break;
            }
            elements.push(Some(self.parse_binding_element()?));
            if !self.at(TokenKind::RightBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.advance()?; // ]
        Ok(Pattern::Array(Box::new(ArrayPattern {
            elements,
            span: self.finish(start),
        })))
    }

    fn parse_object_binding_pattern(&mut self) -> Result<Pattern> {
        self.enter_nesting()?;
        let result = self.parse_object_binding_properties();
        self.leave_nesting();
        result
    }

    fn parse_object_binding_properties(&mut self) -> Result<Pattern> {
        let start = self.start();
        self.advance()?; // {
        let mut properties = Vec::new();
        while !self.at(TokenKind::RightBrace) {
            if self.at(TokenKind::DotDotDot) {
                if !self.options.next {
                    return Err(self.unexpected());
                }
                let rest_start = self.start();
                self.advance()?;
                let argument = self.parse_binding_identifier().map(Pattern::Identifier)?;
                if self.at(TokenKind::Equals) {
                    return Err(self.syntax_error_at(self.token.start, "Rest elements cannot have a default value"));
                }
                properties.push(ObjectPatternProperty::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_start),
                })));
                if !self.at(TokenKind::RightBrace) {
                    let comma = self.expect(TokenKind::Comma)?;
                    if self.at(TokenKind::RightBrace) {
                        return Err(self.syntax_error_at(comma.start, "A trailing comma is not permitted after the rest element"));
                    }
                }
                continue;
            }

            properties.push(ObjectPatternProperty::Property(Box::new(self.parse_binding_property()?)));
            if !self.at(TokenKind::RightBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.advance()?; // }
        Ok(Pattern::Object(Box::new(ObjectPattern {
            properties,
            span: self.finish(start),
        })))
    }

    fn parse_binding_property(&mut self) -> Result<AssignmentProperty> {
        let start = self.start();
        let key_kind = self.token.kind;
        let (key, computed) = self.parse_property_key(false)?;

        if self.eat(TokenKind::Colon)? {
            let value = self.parse_binding_element()?;
            return Ok(AssignmentProperty {
                key,
                value,
                shorthand: false,
                computed,
                span: self.finish(start),
            });
        }

        let id = match &key {
            PropertyKey::Identifier(id) if !computed && is_identifier_kind(key_kind) => id.clone(),
            _ => return Err(self.syntax_error_at(key.span().start, messages::INVALID_DESTRUCTURING_TARGET)),
        };
        self.check_identifier(&id.name, id.span.start, key_kind, true)?;

        let mut value = Pattern::Identifier(id);
        if self.eat(TokenKind::Equals)? {
            let right = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
            value = Pattern::Assignment(Box::new(AssignmentPattern {
                left: value,
                right,
                span: self.finish(start),
            }));
        }
        Ok(AssignmentProperty {
            key,
            value,
            shorthand: true,
            computed: false,
            span: self.finish(start),
        })
    }

    // ========== Declarations ==========

    /// Declare every name `pattern` binds
    pub(super) fn declare_pattern(&mut self, pattern: &Pattern, kind: BindingKind) -> Result<()> {
        for id in pattern.bound_names() {
            self.declare_name(id, kind)?;
        }
        Ok(())
    }

    pub(super) fn declare_name(&mut self, id: &Identifier, kind: BindingKind) -> Result<()> {
        if self.scopes.declare(&id.name, kind) {
            Ok(())
        } else {
            Err(self.early_error_at(id.span.start, format!("Identifier '{}' has already been declared", id.name)))
        }
    }
}

/// Tokens after `static` that make `static` itself the member name
fn ends_member_name(token: &Token<'_>) -> bool {
    matches!(
        token.kind,
        TokenKind::LeftParen | TokenKind::Equals | TokenKind::Semicolon | TokenKind::RightBrace
    )
}
