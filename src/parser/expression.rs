//! Expressions: assignment, operators, subscripts, primaries and literals

use super::*;

impl<'src> Parser<'src> {
    // ========== Expressions ==========

    /// Expression (comma-separated list of assignment expressions)
    pub(super) fn parse_expression(&mut self) -> Result<Expression> {
        let mut cover = CoverErrors::default();
        let expr = self.parse_expression_cover(&mut cover)?;
        self.check_cover(&cover)?;
        Ok(expr)
    }

    pub(super) fn parse_expression_cover(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        let first = self.parse_assignment_cover(cover)?;
        if !self.at(TokenKind::Comma) {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.eat(TokenKind::Comma)? {
            expressions.push(self.parse_assignment_cover(cover)?);
        }
        Ok(Expression::Sequence(Box::new(SequenceExpression {
            expressions,
            span: self.finish(start),
        })))
    }

    pub(super) fn parse_assignment_expression(&mut self) -> Result<Expression> {
        let mut cover = CoverErrors::default();
        let expr = self.parse_assignment_cover(&mut cover)?;
        self.check_cover(&cover)?;
        Ok(expr)
    }

    /// Assignment expression whose literal errors are reported to `cover`
    /// instead of immediately, because it may still become a pattern
    pub(super) fn parse_assignment_cover(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        self.enter_nesting()?;
        let result = self.parse_assignment_inner(cover);
        self.leave_nesting();
        result
    }

    fn parse_assignment_inner(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        if self.at_keyword(Keyword::Yield) && self.ctx.has_yield() {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_simple_arrow()? {
            return Ok(arrow);
        }

        let start = self.start();
        let left = self.parse_conditional(cover)?;
        let Some(operator) = assignment_operator(self.token.kind) else {
            return Ok(left);
        };

        let left_start = left.span().start;
        let target = self.to_assignment_target(left, operator == AssignmentOperator::Assign)?;
        cover.discard_from(left_start);
        self.advance()?;
        let right = self.parse_assignment_expression()?;
        Ok(Expression::Assignment(Box::new(AssignmentExpression {
            operator,
            left: target,
            right,
            span: self.finish(start),
        })))
    }

    /// Check and convert the left-hand side of an assignment operator.
    /// Only `=` accepts destructuring patterns.
    pub(super) fn to_assignment_target(&self, expr: Expression, allow_pattern: bool) -> Result<Pattern> {
        let valid = match &expr {
            Expression::Identifier(_) | Expression::Member(_) => true,
            Expression::Object(_) | Expression::Array(_) => allow_pattern,
            _ => false,
        };
        if !valid {
            return Err(self.early_error_at(expr.span().start, messages::INVALID_LEFT_HAND_SIDE));
        }
        self.to_pattern(expr, PatternMode::Assignment)
    }

    /// `x => ...` and `async x => ...`
    fn try_parse_simple_arrow(&mut self) -> Result<Option<Expression>> {
        if !self.at_identifier_like() {
            return Ok(None);
        }
        let next = self.peek()?;
        if next.kind == TokenKind::Arrow && !next.newline_before {
            let start = self.start();
            let param = self.parse_binding_identifier()?;
            return self
                .parse_arrow_function(start, vec![Pattern::Identifier(param)], false)
                .map(Some);
        }

        if self.at_keyword(Keyword::Async) && !next.newline_before && is_identifier_like(&next) {
            let mut lookahead = self.lexer.clone();
            lookahead.next_token()?;
            let after = lookahead.next_token()?;
            if after.kind == TokenKind::Arrow && !after.newline_before {
                let start = self.start();
                self.advance()?; // async
                let param = self.with_context(self.ctx.and_await(true), |p| p.parse_binding_identifier())?;
                return self
                    .parse_arrow_function(start, vec![Pattern::Identifier(param)], true)
                    .map(Some);
            }
        }
        Ok(None)
    }

    fn parse_yield_expression(&mut self) -> Result<Expression> {
        let start = self.start();
        self.last_yield_or_await = Some(start.offset);
        self.advance()?; // yield

        let mut delegate = false;
        let mut argument = None;
        if !self.token.newline_before {
            delegate = self.eat(TokenKind::Star)?;
            if delegate || self.token_starts_expression() {
                argument = Some(self.parse_assignment_expression()?);
            }
        }
        Ok(Expression::Yield(Box::new(YieldExpression {
            argument,
            delegate,
            span: self.finish(start),
        })))
    }

    fn parse_conditional(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        let test = self.parse_binary(cover, 1)?;
        if !self.at(TokenKind::Question) || self.is_bare_arrow(&test) {
            return Ok(test);
        }
        self.check_cover(cover)?;
        self.advance()?; // ?
        let consequent = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(Expression::Conditional(Box::new(ConditionalExpression {
            test,
            consequent,
            alternate,
            span: self.finish(start),
        })))
    }

    /// An arrow function that was not written in parentheses; it ends the
    /// expression and cannot be an operand
    fn is_bare_arrow(&self, expr: &Expression) -> bool {
        matches!(expr, Expression::Arrow(_)) && !self.is_parenthesized(expr.span())
    }

    // ========== Binary Operators ==========

    /// Precedence climbing over binary and logical operators, consuming
    /// every operator that binds at least as tightly as `min_prec`
    fn parse_binary(&mut self, cover: &mut CoverErrors, min_prec: u8) -> Result<Expression> {
        let depth = self.depth;
        let result = self.parse_binary_links(cover, min_prec);
        self.depth = depth;
        result
    }

    /// Each operator consumed nests the tree one level deeper on the left
    fn parse_binary_links(&mut self, cover: &mut CoverErrors, min_prec: u8) -> Result<Expression> {
        let start = self.start();
        let mut left = self.parse_unary(cover)?;
        if self.is_bare_arrow(&left) {
            return Ok(left);
        }

        loop {
            let prec = self.binary_precedence();
            if prec == 0 || prec < min_prec {
                break;
            }
            self.check_cover(cover)?;

            let kind = self.token.kind;
            if kind == TokenKind::StarStar && self.is_unparenthesized_unary(&left) {
                return Err(self.syntax_error_at(
                    self.token.start,
                    "Unary operator used immediately before exponentiation expression. Parenthesis must be used to disambiguate operator precedence",
                ));
            }
            self.advance()?;
            self.enter_nesting()?;

            // `**` is right-associative
            let next_prec = if kind == TokenKind::StarStar { prec } else { prec + 1 };
            let right = self.parse_binary_operand(next_prec)?;
            left = self.build_binary(start, kind, left, right)?;
        }

        Ok(left)
    }

    fn parse_binary_operand(&mut self, min_prec: u8) -> Result<Expression> {
        self.enter_nesting()?;
        let mut cover = CoverErrors::default();
        let result = self.parse_binary(&mut cover, min_prec);
        self.leave_nesting();
        let expr = result?;
        self.check_cover(&cover)?;
        if self.is_bare_arrow(&expr) {
            return Err(self.syntax_error_at(expr.span().start, "Malformed arrow function parameter list"));
        }
        Ok(expr)
    }

    fn build_binary(
        &self,
        start: Marker,
        kind: TokenKind,
        left: Expression,
        right: Expression,
    ) -> Result<Expression> {
        let span = self.finish(start);
        if let Some(operator) = logical_operator(kind) {
            let mixes = |expr: &Expression| match expr {
                Expression::Logical(logical) if !self.is_parenthesized(logical.span) => {
                    (logical.operator == LogicalOperator::NullishCoalescing)
                        != (operator == LogicalOperator::NullishCoalescing)
                }
                _ => false,
            };
            if mixes(&left) || mixes(&right) {
                return Err(self.syntax_error_at(
                    span.start,
                    "Nullish coalescing operator(??) requires parens when mixing with logical operators",
                ));
            }
            return Ok(Expression::Logical(Box::new(LogicalExpression {
                operator,
                left,
                right,
                span,
            })));
        }

        let operator = binary_operator(kind).ok_or_else(|| self.unexpected())?;
        Ok(Expression::Binary(Box::new(BinaryExpression {
            operator,
            left,
            right,
            span,
        })))
    }

    fn is_unparenthesized_unary(&self, expr: &Expression) -> bool {
        matches!(expr, Expression::Unary(_) | Expression::Await(_)) && !self.is_parenthesized(expr.span())
    }

    fn binary_precedence(&self) -> u8 {
        match self.token.kind {
            TokenKind::PipePipe | TokenKind::QuestionQuestion => 4,
            TokenKind::AmpersandAmpersand => 5,
            TokenKind::Pipe => 6,
            TokenKind::Caret => 7,
            TokenKind::Ampersand => 8,
            TokenKind::EqualsEquals
            | TokenKind::BangEquals
            | TokenKind::EqualsEqualsEquals
            | TokenKind::BangEqualsEquals => 9,
            TokenKind::Less | TokenKind::Greater | TokenKind::LessEquals | TokenKind::GreaterEquals => 10,
            TokenKind::Keyword(Keyword::Instanceof) if self.at_keyword(Keyword::Instanceof) => 10,
            TokenKind::Keyword(Keyword::In) if self.at_keyword(Keyword::In) && self.ctx.has_in() => 10,
            TokenKind::LessLess | TokenKind::GreaterGreater | TokenKind::GreaterGreaterGreater => 11,
            TokenKind::Plus | TokenKind::Minus => 12,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 13,
            TokenKind::StarStar => 14,
            _ => 0,
        }
    }

    // ========== Unary and Update ==========

    fn parse_unary(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        let operator = match self.token.kind {
            TokenKind::Bang => Some(UnaryOperator::Not),
            TokenKind::Tilde => Some(UnaryOperator::BitwiseNot),
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Minus => Some(UnaryOperator::Minus),
            TokenKind::Keyword(Keyword::Typeof) if self.at_keyword(Keyword::Typeof) => Some(UnaryOperator::Typeof),
            TokenKind::Keyword(Keyword::Void) if self.at_keyword(Keyword::Void) => Some(UnaryOperator::Void),
            TokenKind::Keyword(Keyword::Delete) if self.at_keyword(Keyword::Delete) => Some(UnaryOperator::Delete),
            _ => None,
        };

        if let Some(operator) = operator {
            self.advance()?;
            let argument = self.parse_unary_operand()?;
            if operator == UnaryOperator::Delete {
                self.check_delete_operand(&argument)?;
            }
            return Ok(Expression::Unary(Box::new(UnaryExpression {
                operator,
                prefix: true,
                argument,
                span: self.finish(start),
            })));
        }

        if self.at_keyword(Keyword::Await) && self.ctx.has_await() {
            self.last_yield_or_await = Some(start.offset);
            self.advance()?;
            let argument = self.parse_unary_operand()?;
            return Ok(Expression::Await(Box::new(AwaitExpression {
                argument,
                span: self.finish(start),
            })));
        }

        self.parse_update(cover)
    }

    fn check_delete_operand(&self, argument: &Expression) -> Result<()> {
        let member = match argument {
            Expression::Identifier(id) if self.ctx.is_strict() => {
                return Err(self.early_error_at(id.span.start, "Delete of an unqualified identifier in strict mode."));
            }
            Expression::Member(member) => member,
            Expression::Chain(chain) => match &chain.expression {
                Expression::Member(member) => member,
                _ => return Ok(()),
            },
            _ => return Ok(()),
        };
        if let MemberProperty::PrivateName(private) = &member.property {
            return Err(self.early_error_at(private.span.start, "Private fields can not be deleted"));
        }
        Ok(())
    }

    /// Operand of a prefix operator: a unary expression with no pending
    /// pattern errors
    fn parse_unary_operand(&mut self) -> Result<Expression> {
        self.enter_nesting()?;
        let mut cover = CoverErrors::default();
        let result = self.parse_unary(&mut cover);
        self.leave_nesting();
        let expr = result?;
        self.check_cover(&cover)?;
        if self.is_bare_arrow(&expr) {
            return Err(self.syntax_error_at(expr.span().start, "Malformed arrow function parameter list"));
        }
        Ok(expr)
    }

    fn parse_update(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        if let Some(operator) = update_operator(self.token.kind) {
            self.advance()?;
            let argument = self.parse_unary_operand()?;
            self.check_update_target(&argument, "prefix")?;
            return Ok(Expression::Update(Box::new(UpdateExpression {
                operator,
                prefix: true,
                argument,
                span: self.finish(start),
            })));
        }

        let expr = self.parse_lhs(cover)?;
        match update_operator(self.token.kind) {
            Some(operator) if !self.token.newline_before && !self.is_bare_arrow(&expr) => {
                self.check_cover(cover)?;
                self.check_update_target(&expr, "postfix")?;
                self.advance()?;
                Ok(Expression::Update(Box::new(UpdateExpression {
                    operator,
                    prefix: false,
                    argument: expr,
                    span: self.finish(start),
                })))
            }
            _ => Ok(expr),
        }
    }

    fn check_update_target(&self, expr: &Expression, position: &str) -> Result<()> {
        match expr {
            Expression::Identifier(id) => {
                if self.ctx.is_strict() && (id.name == "eval" || id.name == "arguments") {
                    return Err(self.early_error_at(id.span.start, messages::STRICT_EVAL_ARGUMENTS));
                }
                Ok(())
            }
            Expression::Member(_) => Ok(()),
            _ => Err(self.early_error_at(
                expr.span().start,
                format!("Invalid left-hand side expression in {} operation", position),
            )),
        }
    }

    // ========== Left-Hand Side ==========

    fn parse_lhs(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        let expr = if self.at_keyword(Keyword::New) {
            self.parse_new_expression()?
        } else {
            self.parse_primary(cover)?
        };
        self.parse_subscripts(start, expr, false, cover)
    }

    /// Left-hand side expression on its own, as in `class A extends <expr>`
    pub(super) fn parse_lhs_expression(&mut self) -> Result<Expression> {
        let mut cover = CoverErrors::default();
        let expr = self.parse_lhs(&mut cover)?;
        self.check_cover(&cover)?;
        Ok(expr)
    }

    fn parse_new_expression(&mut self) -> Result<Expression> {
        let start = self.start();
        let new_token = self.advance()?; // new

        if self.at(TokenKind::Dot) {
            self.advance()?;
            if !(self.token.kind == TokenKind::Keyword(Keyword::Target) && self.at_keyword(Keyword::Target)) {
                return Err(self.unexpected());
            }
            if !self.ctx.contains(Context::NEW_TARGET) {
                return Err(self.early_error_at(start.offset, "new.target expression is not allowed here"));
            }
            let property = Identifier::new("target", self.token_span());
            self.advance()?;
            let meta_end = Marker {
                offset: new_token.end,
                line: new_token.end_line,
                column: new_token.end_column,
            };
            let meta = Identifier::new("new", self.span_between(start, meta_end));
            return Ok(Expression::MetaProperty(Box::new(MetaProperty {
                meta,
                property,
                span: self.finish(start),
            })));
        }

        if self.at_keyword(Keyword::Import) {
            return Err(self.syntax_error_at(self.token.start, "Cannot use new with import"));
        }

        let callee_start = self.start();
        let mut cover = CoverErrors::default();
        let callee = if self.at_keyword(Keyword::New) {
            self.enter_nesting()?;
            let result = self.parse_new_expression();
            self.leave_nesting();
            result?
        } else {
            self.parse_primary(&mut cover)?
        };
        let callee = self.parse_subscripts(callee_start, callee, true, &mut cover)?;
        self.check_cover(&cover)?;
        if self.is_bare_arrow(&callee) {
            return Err(self.unexpected());
        }

        let arguments = if self.at(TokenKind::LeftParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(Expression::New(Box::new(NewExpression {
            callee,
            arguments,
            span: self.finish(start),
        })))
    }

    /// Member accesses, calls and tagged templates following `expr`.
    /// With `no_call`, stops before an argument list (the callee of `new`).
    fn parse_subscripts(
        &mut self,
        start: Marker,
        expr: Expression,
        no_call: bool,
        cover: &mut CoverErrors,
    ) -> Result<Expression> {
        let depth = self.depth;
        let result = self.parse_subscript_links(start, expr, no_call, cover);
        self.depth = depth;
        result
    }

    /// Every link counts one nesting level until the chain ends
    fn parse_subscript_links(
        &mut self,
        start: Marker,
        mut expr: Expression,
        no_call: bool,
        cover: &mut CoverErrors,
    ) -> Result<Expression> {
        if self.is_bare_arrow(&expr) {
            return Ok(expr);
        }

        let mut in_chain = false;
        loop {
            if matches!(
                self.token.kind,
                TokenKind::Dot
                    | TokenKind::QuestionDot
                    | TokenKind::LeftBracket
                    | TokenKind::TemplateLiteral
                    | TokenKind::TemplateHead
            ) || (self.token.kind == TokenKind::LeftParen && !no_call)
            {
                self.enter_nesting()?;
            }
            match self.token.kind {
                TokenKind::Dot => {
                    self.check_cover(cover)?;
                    self.advance()?;
                    let property = self.parse_member_property_name()?;
                    expr = self.build_member(start, expr, property, false, false);
                }
                TokenKind::QuestionDot => {
                    if no_call {
                        return Err(self.syntax_error_at(self.token.start, "Invalid optional chain from new expression"));
                    }
                    self.check_cover(cover)?;
                    self.advance()?;
                    in_chain = true;
                    match self.token.kind {
                        TokenKind::LeftParen => {
                            let arguments = self.parse_arguments()?;
                            expr = self.build_call(start, expr, arguments, true);
                        }
                        TokenKind::LeftBracket => {
                            let property = self.parse_computed_member()?;
                            expr = self.build_member(start, expr, property, true, true);
                        }
                        TokenKind::TemplateLiteral | TokenKind::TemplateHead => {
                            return Err(self.syntax_error_at(self.token.start, "Invalid tagged template on optional chain"));
                        }
                        _ => {
                            let property = self.parse_member_property_name()?;
                            expr = self.build_member(start, expr, property, false, true);
                        }
                    }
                }
                TokenKind::LeftBracket => {
                    self.check_cover(cover)?;
                    let property = self.parse_computed_member()?;
                    expr = self.build_member(start, expr, property, true, false);
                }
                TokenKind::LeftParen if !no_call => {
                    self.check_cover(cover)?;
                    let arguments = self.parse_arguments()?;
                    expr = self.build_call(start, expr, arguments, false);
                }
                TokenKind::TemplateLiteral | TokenKind::TemplateHead => {
                    if in_chain {
                        return Err(self.syntax_error_at(self.token.start, "Invalid tagged template on optional chain"));
                    }
                    self.check_cover(cover)?;
                    let quasi = self.parse_template(true)?;
                    expr = Expression::TaggedTemplate(Box::new(TaggedTemplateExpression {
                        tag: expr,
                        quasi,
                        span: self.finish(start),
                    }));
                }
                _ => break,
            }
        }

        if in_chain {
            let span = expr.span();
            expr = Expression::Chain(Box::new(ChainExpression { expression: expr, span }));
        }
        Ok(expr)
    }

    fn build_member(
        &self,
        start: Marker,
        object: Expression,
        property: MemberProperty,
        computed: bool,
        optional: bool,
    ) -> Expression {
        Expression::Member(Box::new(MemberExpression {
            object,
            property,
            computed,
            optional,
            span: self.finish(start),
        }))
    }

    fn build_call(&self, start: Marker, callee: Expression, arguments: Vec<Expression>, optional: bool) -> Expression {
        Expression::Call(Box::new(CallExpression {
            callee,
            arguments,
            optional,
            span: self.finish(start),
        }))
    }

    /// Name after `.`: any identifier name, or `#name` inside a class
    fn parse_member_property_name(&mut self) -> Result<MemberProperty> {
        if self.at(TokenKind::PrivateName) {
            if !self.options.next {
                return Err(self.unexpected());
            }
            let token = self.advance()?;
            let name = token.string_value();
            if !self.private_names.reference(&name, token.start) {
                return Err(self.early_error_at(
                    token.start,
                    format!("Private field '#{}' must be declared in an enclosing class", name),
                ));
            }
            return Ok(MemberProperty::PrivateName(PrivateIdentifier {
                name,
                span: self.finish(Marker {
                    offset: token.start,
                    line: token.line,
                    column: token.column,
                }),
            }));
        }
        self.parse_identifier_name().map(MemberProperty::Identifier)
    }

    /// `[expression]`
    fn parse_computed_member(&mut self) -> Result<MemberProperty> {
        self.expect(TokenKind::LeftBracket)?;
        let property = self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?;
        self.expect(TokenKind::RightBracket)?;
        Ok(MemberProperty::Expression(Box::new(property)))
    }

    pub(super) fn parse_arguments(&mut self) -> Result<Vec<Expression>> {
        let mut cover = CoverErrors::default();
        let (arguments, _) = self.parse_arguments_cover(&mut cover)?;
        self.check_cover(&cover)?;
        Ok(arguments)
    }

    /// Argument list; also returns the offset of a comma directly after a
    /// trailing spread, which matters if the list turns out to be async
    /// arrow parameters
    fn parse_arguments_cover(&mut self, cover: &mut CoverErrors) -> Result<(Vec<Expression>, Option<u32>)> {
        self.expect(TokenKind::LeftParen)?;
        let saved = self.ctx;
        self.ctx = self.ctx.and_in(true);
        let result = self.parse_argument_items(cover);
        self.ctx = saved;
        let items = result?;
        self.expect(TokenKind::RightParen)?;
        Ok(items)
    }

    fn parse_argument_items(&mut self, cover: &mut CoverErrors) -> Result<(Vec<Expression>, Option<u32>)> {
        let mut arguments = Vec::new();
        let mut trailing_comma = None;
        while !self.at(TokenKind::RightParen) {
            let is_spread = self.at(TokenKind::DotDotDot);
            let argument = if is_spread {
                let start = self.start();
                self.advance()?;
                let argument = self.parse_assignment_cover(cover)?;
                Expression::Spread(Box::new(SpreadElement {
                    argument,
                    span: self.finish(start),
                }))
            } else {
                self.parse_assignment_cover(cover)?
            };
            arguments.push(argument);
            if !self.at(TokenKind::RightParen) {
                let comma = self.expect(TokenKind::Comma)?;
                if is_spread && self.at(TokenKind::RightParen) {
                    trailing_comma = Some(comma.start);
                }
            }
        }
        Ok((arguments, trailing_comma))
    }

    // ========== Primary Expressions ==========

    fn parse_primary(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        match self.token.kind {
            TokenKind::Identifier => self.parse_identifier_reference().map(Expression::Identifier),
            TokenKind::NumberLiteral | TokenKind::BigIntLiteral | TokenKind::StringLiteral => {
                self.parse_literal().map(Expression::Literal)
            }
            TokenKind::TemplateLiteral | TokenKind::TemplateHead => {
                self.parse_template(false).map(|t| Expression::TemplateLiteral(Box::new(t)))
            }
            TokenKind::Slash | TokenKind::SlashEquals => {
                self.token = self.lexer.rescan_regexp(&self.token)?;
                self.parse_literal().map(Expression::Literal)
            }
            TokenKind::LeftParen => self.parse_paren_expression(),
            TokenKind::LeftBracket => self.parse_array_literal(cover),
            TokenKind::LeftBrace => self.parse_object_literal(cover),
            TokenKind::Less if self.options.jsx => self.parse_jsx_expression(),
            TokenKind::Keyword(keyword) => self.parse_keyword_primary(start, keyword),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_keyword_primary(&mut self, start: Marker, keyword: Keyword) -> Result<Expression> {
        let escaped = self.token.flags.contains(TokenFlags::ESCAPED);
        if escaped && keyword.is_reserved() {
            return Err(self.syntax_error_at(self.token.start, messages::ESCAPED_KEYWORD));
        }
        match keyword {
            Keyword::This => {
                self.advance()?;
                Ok(Expression::This(ThisExpression { span: self.finish(start) }))
            }
            Keyword::Null | Keyword::True | Keyword::False => self.parse_literal().map(Expression::Literal),
            Keyword::Function => self.parse_function_expression(start, false),
            Keyword::Class => self.parse_class(start, ClassKind::ClassExpression).map(|c| Expression::Class(Box::new(c))),
            Keyword::Super => self.parse_super(),
            Keyword::Import => self.parse_import_expression(),
            Keyword::Async if !escaped => {
                let next = self.peek()?;
                if next.is_keyword(Keyword::Function) && !next.newline_before {
                    self.advance()?; // async
                    return self.parse_function_expression(start, true);
                }
                if next.kind == TokenKind::LeftParen && !next.newline_before {
                    return self.parse_async_call_or_arrow();
                }
                self.parse_identifier_reference().map(Expression::Identifier)
            }
            _ if keyword.is_reserved() => Err(self.unexpected()),
            _ => self.parse_identifier_reference().map(Expression::Identifier),
        }
    }

    fn parse_super(&mut self) -> Result<Expression> {
        let start = self.start();
        self.advance()?; // super
        let allowed = match self.token.kind {
            TokenKind::LeftParen => self.ctx.contains(Context::SUPER_CALL),
            TokenKind::Dot | TokenKind::LeftBracket => self.ctx.contains(Context::SUPER_PROPERTY),
            _ => false,
        };
        if !allowed {
            return Err(self.early_error_at(start.offset, "'super' keyword unexpected here"));
        }
        Ok(Expression::Super(Super { span: self.finish(start) }))
    }

    /// `import(source)` and `import.meta`
    fn parse_import_expression(&mut self) -> Result<Expression> {
        let start = self.start();
        let import_token = self.advance()?; // import
        if self.at(TokenKind::Dot) {
            self.advance()?;
            if !(self.token.kind == TokenKind::Keyword(Keyword::Meta) && self.at_keyword(Keyword::Meta)) {
                return Err(self.unexpected());
            }
            if !self.ctx.is_module() {
                return Err(self.syntax_error_at(start.offset, "Cannot use 'import.meta' outside a module"));
            }
            let property = Identifier::new("meta", self.token_span());
            self.advance()?;
            let meta_end = Marker {
                offset: import_token.end,
                line: import_token.end_line,
                column: import_token.end_column,
            };
            let meta = Identifier::new("import", self.span_between(start, meta_end));
            return Ok(Expression::MetaProperty(Box::new(MetaProperty {
                meta,
                property,
                span: self.finish(start),
            })));
        }

        self.expect(TokenKind::LeftParen)?;
        let source = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
        self.expect(TokenKind::RightParen)?;
        Ok(Expression::Import(Box::new(ImportExpression {
            source,
            span: self.finish(start),
        })))
    }

    /// `async(...)`: a call of a function named `async`, or the parameters
    /// of an async arrow function
    fn parse_async_call_or_arrow(&mut self) -> Result<Expression> {
        let start = self.start();
        let callee = Identifier::new("async", self.token_span());
        self.advance()?; // async

        let outer_yield_or_await = self.last_yield_or_await.take();
        let mut cover = CoverErrors::default();
        let (arguments, trailing_comma) = self.parse_arguments_cover(&mut cover)?;
        let inner_yield_or_await = self.last_yield_or_await;

        if self.at(TokenKind::Arrow) && !self.token.newline_before {
            if let Some(offset) = inner_yield_or_await {
                return Err(self.early_error_at(offset, "Yield or await expression not allowed in formal parameter"));
            }
            self.last_yield_or_await = outer_yield_or_await;
            let params = self.arguments_to_params(arguments, trailing_comma)?;
            for param in &params {
                if let Some(id) = param.bound_names().into_iter().find(|id| id.name == "await") {
                    return Err(self.early_error_at(id.span.start, "'await' is not a valid parameter name in an async function"));
                }
            }
            return self.parse_arrow_function(start, params, true);
        }

        self.last_yield_or_await = inner_yield_or_await.or(outer_yield_or_await);
        self.check_cover(&cover)?;
        Ok(self.build_call(start, Expression::Identifier(callee), arguments, false))
    }

    /// Convert a parenthesized list into arrow parameters; a spread becomes
    /// a rest parameter and must come last
    fn arguments_to_params(&self, arguments: Vec<Expression>, trailing_comma: Option<u32>) -> Result<Vec<Pattern>> {
        let count = arguments.len();
        let mut params = Vec::with_capacity(count);
        for (index, argument) in arguments.into_iter().enumerate() {
            let param = match argument {
                Expression::Spread(spread) => {
                    if index + 1 != count {
                        return Err(self.syntax_error_at(spread.span.start, "Rest parameter must be last formal parameter"));
                    }
                    if let Some(offset) = trailing_comma {
                        return Err(self.syntax_error_at(offset, "A rest parameter or binding pattern may not have a trailing comma"));
                    }
                    let SpreadElement { argument, span } = *spread;
                    if let Expression::Assignment(assign) = &argument {
                        return Err(self.syntax_error_at(assign.span.start, "Rest parameter may not have a default initializer"));
                    }
                    let argument = self.to_pattern(argument, PatternMode::Binding)?;
                    Pattern::Rest(Box::new(RestElement { argument, span }))
                }
                other => self.to_pattern(other, PatternMode::Binding)?,
            };
            params.push(param);
        }
        Ok(params)
    }

    /// `( ... )`: a parenthesized expression or arrow parameters
    fn parse_paren_expression(&mut self) -> Result<Expression> {
        let start = self.start();
        let outer_yield_or_await = self.last_yield_or_await.take();
        self.advance()?; // (

        let mut cover = CoverErrors::default();
        let saved = self.ctx;
        self.ctx = self.ctx.and_in(true);
        let items = self.parse_paren_items(&mut cover);
        self.ctx = saved;
        let (elements, rest, trailing_comma) = items?;
        self.expect(TokenKind::RightParen)?;
        let inner_yield_or_await = self.last_yield_or_await;

        if self.at(TokenKind::Arrow) && !self.token.newline_before {
            if let Some(offset) = inner_yield_or_await {
                return Err(self.early_error_at(offset, "Yield or await expression not allowed in formal parameter"));
            }
            self.last_yield_or_await = outer_yield_or_await;
            let mut params = Vec::with_capacity(elements.len() + 1);
            for element in elements {
                params.push(self.to_pattern(element, PatternMode::Binding)?);
            }
            params.extend(rest);
            return self.parse_arrow_function(start, params, false);
        }

        self.last_yield_or_await = inner_yield_or_await.or(outer_yield_or_await);
        if elements.is_empty() || rest.is_some() || trailing_comma.is_some() {
            return Err(self.unexpected());
        }
        self.check_cover(&cover)?;

        let mut elements = elements;
        let expr = if elements.len() == 1 {
            elements.remove(0)
        } else {
            let first = Self::marker_of(elements[0].span());
            let last = Self::end_marker_of(elements[elements.len() - 1].span());
            Expression::Sequence(Box::new(SequenceExpression {
                expressions: elements,
                span: self.span_between(first, last),
            }))
        };
        self.mark_parenthesized(expr.span());
        Ok(expr)
    }

    /// Items of a parenthesized list: expressions, an optional trailing rest
    /// binding, and the offset of a trailing comma
    fn parse_paren_items(
        &mut self,
        cover: &mut CoverErrors,
    ) -> Result<(Vec<Expression>, Option<Pattern>, Option<u32>)> {
        let mut elements = Vec::new();
        let mut rest = None;
        let mut trailing_comma = None;
        while !self.at(TokenKind::RightParen) {
            if self.at(TokenKind::DotDotDot) {
                let start = self.start();
                self.advance()?;
                let argument = self.parse_binding_target()?;
                if self.at(TokenKind::Equals) {
                    return Err(self.syntax_error_at(self.token.start, "Rest parameter may not have a default initializer"));
                }
                rest = Some(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(start),
                })));
                if !self.at(TokenKind::RightParen) {
                    return Err(self.syntax_error_at(self.token.start, "Rest parameter must be last formal parameter"));
                }
                break;
            }
            elements.push(self.parse_assignment_cover(cover)?);
            if !self.at(TokenKind::RightParen) {
                let comma = self.expect(TokenKind::Comma)?;
                if self.at(TokenKind::RightParen) {
                    trailing_comma = Some(comma.start);
                }
            }
        }
        Ok((elements, rest, trailing_comma))
    }

    // ========== Literals ==========

    /// Literal from the current token: number, BigInt, string, regular
    /// expression, `null`, `true` or `false`
    pub(super) fn parse_literal(&mut self) -> Result<Literal> {
        let start = self.start();
        let token = self.advance()?;
        self.check_octal(&token)?;
        let value = match (&token.kind, token.value.clone()) {
            (TokenKind::NumberLiteral, TokenValue::Number(n)) => LiteralValue::Number(n),
            (TokenKind::BigIntLiteral, TokenValue::BigInt(digits)) => LiteralValue::BigInt(digits),
            (TokenKind::StringLiteral, TokenValue::String(s)) => LiteralValue::String(s),
            (TokenKind::RegexLiteral, TokenValue::RegExp { pattern, flags }) => LiteralValue::Regex { pattern, flags },
            (TokenKind::Keyword(Keyword::Null), _) => LiteralValue::Null,
            (TokenKind::Keyword(Keyword::True), _) => LiteralValue::Boolean(true),
            (TokenKind::Keyword(Keyword::False), _) => LiteralValue::Boolean(false),
            _ => return Err(self.syntax_error_at(token.start, format!("{} '{}'", messages::UNEXPECTED_TOKEN, token.raw))),
        };
        Ok(Literal {
            value,
            raw: self.raw_of(&token),
            span: self.finish(start),
        })
    }

    /// Template literal starting at the current `TemplateLiteral` or
    /// `TemplateHead` token. Invalid escapes are only allowed when tagged.
    fn parse_template(&mut self, tagged: bool) -> Result<TemplateLiteral> {
        let start = self.start();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        loop {
            let tail = matches!(self.token.kind, TokenKind::TemplateLiteral | TokenKind::TemplateTail);
            let token = self.advance()?;
            let TokenValue::Template { cooked, raw } = token.value else {
                return Err(self.syntax_error_at(token.start, messages::UNTERMINATED_TEMPLATE));
            };
            if cooked.is_none() && !tagged {
                return Err(self.syntax_error_at(token.start, "Invalid escape sequence in template"));
            }

            // The element excludes the delimiters: a backtick or `}` before,
            // a backtick or `${` after
            let closing = if tail { 1 } else { 2 };
            let element_start = Marker {
                offset: token.start + 1,
                line: token.line,
                column: token.column + 1,
            };
            let element_end = Marker {
                offset: token.end - closing,
                line: token.end_line,
                column: token.end_column.saturating_sub(closing),
            };
            quasis.push(TemplateElement {
                value: TemplateElementValue { raw, cooked },
                tail,
                span: self.span_between(element_start, element_end),
            });
            if tail {
                break;
            }

            expressions.push(self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?);
            if !self.at(TokenKind::RightBrace) {
                return Err(self.unexpected());
            }
            self.token = self.lexer.rescan_template_continuation(&self.token)?;
        }
        Ok(TemplateLiteral {
            quasis,
            expressions,
            span: self.finish(start),
        })
    }

    fn parse_array_literal(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        self.advance()?; // [
        let saved = self.ctx;
        self.ctx = self.ctx.and_in(true);
        let result = self.parse_array_elements(cover);
        self.ctx = saved;
        let (elements, trailing_comma_after_spread) = result?;
        self.expect(TokenKind::RightBracket)?;
        Ok(Expression::Array(Box::new(ArrayExpression {
            elements,
            span: self.finish(start),
            trailing_comma_after_spread,
        })))
    }

    fn parse_array_elements(&mut self, cover: &mut CoverErrors) -> Result<(Vec<Option<Expression>>, Option<u32>)> {
        let mut elements = Vec::new();
        let mut trailing_comma = None;
        while !self.at(TokenKind::RightBracket) {
            if self.at(TokenKind::Comma) {
                self.advance()?;
                elements.push(None);
                continue;
            }
            let is_spread = self.at(TokenKind::DotDotDot);
            let element = if is_spread {
                let start = self.start();
                self.advance()?;
                let argument = self.parse_assignment_cover(cover)?;
                Expression::Spread(Box::new(SpreadElement {
                    argument,
                    span: self.finish(start),
                }))
            } else {
                self.parse_assignment_cover(cover)?
            };
            elements.push(Some(element));
            if !self.at(TokenKind::RightBracket) {
                let comma = self.expect(TokenKind::Comma)?;
                if is_spread && self.at(TokenKind::RightBracket) {
                    trailing_comma = Some(comma.start);
                }
            }
        }
        Ok((elements, trailing_comma))
    }

    fn parse_object_literal(&mut self, cover: &mut CoverErrors) -> Result<Expression> {
        let start = self.start();
        self.advance()?; // {
        let saved = self.ctx;
        self.ctx = self.ctx.and_in(true);
        let result = self.parse_object_members(cover);
        self.ctx = saved;
        let (properties, trailing_comma_after_spread) = result?;
        self.expect(TokenKind::RightBrace)?;
        Ok(Expression::Object(Box::new(ObjectExpression {
            properties,
            span: self.finish(start),
            trailing_comma_after_spread,
        })))
    }

    fn parse_object_members(&mut self, cover: &mut CoverErrors) -> Result<(Vec<ObjectProperty>, Option<u32>)> {
        let mut properties = Vec::new();
        let mut trailing_comma = None;
        let mut has_proto = false;
        while !self.at(TokenKind::RightBrace) {
            let is_spread = self.at(TokenKind::DotDotDot);
            if is_spread {
                if !self.options.next {
                    return Err(self.unexpected());
                }
                let start = self.start();
                self.advance()?;
                let argument = self.parse_assignment_cover(cover)?;
                properties.push(ObjectProperty::Spread(Box::new(SpreadElement {
                    argument,
                    span: self.finish(start),
                })));
            } else {
                let property = self.parse_object_property(cover, &mut has_proto)?;
                properties.push(ObjectProperty::Property(Box::new(property)));
            }
            if !self.at(TokenKind::RightBrace) {
                let comma = self.expect(TokenKind::Comma)?;
                if is_spread && self.at(TokenKind::RightBrace) {
                    trailing_comma = Some(comma.start);
                }
            }
        }
        Ok((properties, trailing_comma))
    }

    fn parse_object_property(&mut self, cover: &mut CoverErrors, has_proto: &mut bool) -> Result<Property> {
        let start = self.start();
        let mut is_async = false;
        let mut is_generator = false;
        let mut kind = PropertyKind::Init;

        if self.at_keyword(Keyword::Async) {
            let next = self.peek()?;
            if !next.newline_before && (next.kind == TokenKind::Star || starts_property_name(&next)) {
                self.advance()?;
                is_async = true;
            }
        }
        if self.at(TokenKind::Star) {
            if is_async && !self.options.next {
                return Err(self.unexpected());
            }
            self.advance()?;
            is_generator = true;
        }
        if !is_async && !is_generator && (self.at_keyword(Keyword::Get) || self.at_keyword(Keyword::Set)) {
            let next = self.peek()?;
            if starts_property_name(&next) {
                kind = if self.at_keyword(Keyword::Get) {
                    PropertyKind::Get
                } else {
                    PropertyKind::Set
                };
                self.advance()?;
            }
        }

        let key_kind = self.token.kind;
        let (key, computed) = self.parse_property_key(false)?;

        if kind != PropertyKind::Init {
            let method_kind = if kind == PropertyKind::Get { MethodKind::Get } else { MethodKind::Set };
            let value = self.parse_method(false, false, method_kind, Context::SUPER_PROPERTY)?;
            return Ok(Property {
                key,
                value: Expression::Function(Box::new(value)),
                kind,
                method: false,
                shorthand: false,
                computed,
                span: self.finish(start),
            });
        }

        if is_async || is_generator || self.at(TokenKind::LeftParen) {
            let value = self.parse_method(is_async, is_generator, MethodKind::Method, Context::SUPER_PROPERTY)?;
            return Ok(Property {
                key,
                value: Expression::Function(Box::new(value)),
                kind,
                method: true,
                shorthand: false,
                computed,
                span: self.finish(start),
            });
        }

        if self.eat(TokenKind::Colon)? {
            if !computed && key.static_name() == Some("__proto__") {
                if *has_proto && cover.double_proto.is_none() {
                    cover.double_proto = Some(key.span().start);
                }
                *has_proto = true;
            }
            let value = self.parse_assignment_cover(cover)?;
            return Ok(Property {
                key,
                value,
                kind,
                method: false,
                shorthand: false,
                computed,
                span: self.finish(start),
            });
        }

        // Shorthand `{ a }` or `{ a = default }`
        let PropertyKey::Identifier(id) = &key else {
            return Err(self.unexpected());
        };
        if computed || !is_identifier_kind(key_kind) {
            return Err(self.syntax_error_at(id.span.start, format!("Unexpected keyword '{}'", id.name)));
        }
        self.check_identifier(&id.name, id.span.start, key_kind, false)?;
        let id = id.clone();

        let value = if self.at(TokenKind::Equals) {
            if cover.shorthand_assign.is_none() {
                cover.shorthand_assign = Some(self.token.start);
            }
            self.advance()?;
            let right = self.parse_assignment_expression()?;
            Expression::Assignment(Box::new(AssignmentExpression {
                operator: AssignmentOperator::Assign,
                left: Pattern::Identifier(id),
                right,
                span: self.finish(start),
            }))
        } else {
            Expression::Identifier(id)
        };
        Ok(Property {
            key,
            value,
            kind,
            method: false,
            shorthand: true,
            computed: false,
            span: self.finish(start),
        })
    }

    /// Property name in an object literal or class body. Returns the key and
    /// whether it was computed.
    pub(super) fn parse_property_key(&mut self, allow_private: bool) -> Result<(PropertyKey, bool)> {
        match self.token.kind {
            TokenKind::Identifier | TokenKind::Keyword(_) => {
                self.parse_identifier_name().map(|id| (PropertyKey::Identifier(id), false))
            }
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::BigIntLiteral => {
                self.parse_literal().map(|lit| (PropertyKey::Literal(lit), false))
            }
            TokenKind::LeftBracket => {
                self.advance()?;
                let expr = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
                self.expect(TokenKind::RightBracket)?;
                Ok((PropertyKey::Computed(Box::new(expr)), true))
            }
            TokenKind::PrivateName if allow_private && self.options.next => {
                let span = self.token_span();
                let token = self.advance()?;
                Ok((
                    PropertyKey::PrivateName(PrivateIdentifier {
                        name: token.string_value(),
                        span,
                    }),
                    false,
                ))
            }
            _ => Err(self.unexpected()),
        }
    }

    // ========== Identifiers ==========

    /// Identifier or keyword that is not reserved in every context
    pub(super) fn at_identifier_like(&self) -> bool {
        is_identifier_like(&self.token)
    }

    /// Identifier in expression position
    pub(super) fn parse_identifier_reference(&mut self) -> Result<Identifier> {
        self.parse_identifier_with(false)
    }

    /// Identifier that introduces a binding
    pub(super) fn parse_binding_identifier(&mut self) -> Result<Identifier> {
        self.parse_identifier_with(true)
    }

    fn parse_identifier_with(&mut self, is_binding: bool) -> Result<Identifier> {
        let kind = self.token.kind;
        let name = match (kind, self.token.name()) {
            (TokenKind::Identifier | TokenKind::Keyword(_), Some(name)) => name.to_string(),
            _ => return Err(self.unexpected()),
        };
        if let TokenKind::Keyword(keyword) = kind {
            if keyword.is_reserved() {
                if self.token.flags.contains(TokenFlags::ESCAPED) {
                    return Err(self.syntax_error_at(self.token.start, messages::ESCAPED_KEYWORD));
                }
                return Err(self.unexpected());
            }
        }
        self.check_identifier(&name, self.token.start, kind, is_binding)?;
        let span = self.token_span();
        self.advance()?;
        Ok(Identifier::new(name, span))
    }

    /// Early errors for an identifier spelled `name` in the current context
    pub(super) fn check_identifier(&self, name: &str, offset: u32, kind: TokenKind, is_binding: bool) -> Result<()> {
        let strict = self.ctx.is_strict();
        match name {
            "yield" if self.ctx.has_yield() || strict => {
                return Err(self.early_error_at(offset, "Unexpected identifier 'yield' in generator or strict mode code"));
            }
            "await" if self.ctx.has_await() || self.ctx.is_module() => {
                return Err(self.early_error_at(offset, "Unexpected reserved word 'await'"));
            }
            "arguments" if !is_binding && self.ctx.contains(Context::IN_CLASS_FIELD) => {
                return Err(self.early_error_at(offset, "'arguments' is not allowed in class field initializer"));
            }
            "eval" | "arguments" if is_binding && strict => {
                return Err(self.early_error_at(offset, messages::STRICT_EVAL_ARGUMENTS));
            }
            _ => {}
        }
        let keyword = match kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => Keyword::lookup(name),
        };
        if let Some(keyword) = keyword {
            if strict && keyword.is_strict_reserved() {
                return Err(self.early_error_at(offset, messages::STRICT_RESERVED_WORD));
            }
            if keyword.is_reserved() {
                return Err(self.early_error_at(offset, format!("Unexpected reserved word '{}'", name)));
            }
        }
        Ok(())
    }

    /// Any identifier name, keywords included: property names and the like
    pub(super) fn parse_identifier_name(&mut self) -> Result<Identifier> {
        let name = match self.token.name() {
            Some(name) if self.token.kind.is_identifier_name() => name.to_string(),
            _ => return Err(self.unexpected()),
        };
        let span = self.token_span();
        self.advance()?;
        Ok(Identifier::new(name, span))
    }

    /// Whether the current token can begin an expression; used for the
    /// optional operand of `yield`
    pub(super) fn token_starts_expression(&self) -> bool {
        match self.token.kind {
            TokenKind::Identifier
            | TokenKind::NumberLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::StringLiteral
            | TokenKind::TemplateLiteral
            | TokenKind::TemplateHead
            | TokenKind::Slash
            | TokenKind::SlashEquals
            | TokenKind::LeftParen
            | TokenKind::LeftBracket
            | TokenKind::LeftBrace
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus => true,
            TokenKind::Less => self.options.jsx,
            TokenKind::Keyword(keyword) => {
                !keyword.is_reserved()
                    || matches!(
                        keyword,
                        Keyword::This
                            | Keyword::Null
                            | Keyword::True
                            | Keyword::False
                            | Keyword::Function
                            | Keyword::Class
                            | Keyword::New
                            | Keyword::Typeof
                            | Keyword::Void
                            | Keyword::Delete
                            | Keyword::Super
                            | Keyword::Import
                    )
            }
            _ => false,
        }
    }
}

/// Identifier token, or a keyword that some context accepts as an identifier
pub(super) fn is_identifier_like(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::Identifier => true,
        TokenKind::Keyword(keyword) => !keyword.is_reserved(),
        _ => false,
    }
}

pub(super) fn is_identifier_kind(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Identifier => true,
        TokenKind::Keyword(keyword) => !keyword.is_reserved(),
        _ => false,
    }
}

/// Tokens that can begin a property name after `get`, `set` or `async`
pub(super) fn starts_property_name(token: &Token<'_>) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier
            | TokenKind::Keyword(_)
            | TokenKind::StringLiteral
            | TokenKind::NumberLiteral
            | TokenKind::BigIntLiteral
            | TokenKind::LeftBracket
            | TokenKind::PrivateName
    )
}

fn assignment_operator(kind: TokenKind) -> Option<AssignmentOperator> {
    let operator = match kind {
        TokenKind::Equals => AssignmentOperator::Assign,
        TokenKind::PlusEquals => AssignmentOperator::AddAssign,
        TokenKind::MinusEquals => AssignmentOperator::SubAssign,
        TokenKind::StarEquals => AssignmentOperator::MulAssign,
        TokenKind::SlashEquals => AssignmentOperator::DivAssign,
        TokenKind::PercentEquals => AssignmentOperator::ModAssign,
        TokenKind::StarStarEquals => AssignmentOperator::PowAssign,
        TokenKind::LessLessEquals => AssignmentOperator::ShlAssign,
        TokenKind::GreaterGreaterEquals => AssignmentOperator::ShrAssign,
        TokenKind::GreaterGreaterGreaterEquals => AssignmentOperator::UShrAssign,
        TokenKind::AmpersandEquals => AssignmentOperator::BitwiseAndAssign,
        TokenKind::PipeEquals => AssignmentOperator::BitwiseOrAssign,
        TokenKind::CaretEquals => AssignmentOperator::BitwiseXorAssign,
        TokenKind::AmpersandAmpersandEquals => AssignmentOperator::AndAssign,
        TokenKind::PipePipeEquals => AssignmentOperator::OrAssign,
        TokenKind::QuestionQuestionEquals => AssignmentOperator::NullishAssign,
        _ => return None,
    };
    Some(operator)
}

fn logical_operator(kind: TokenKind) -> Option<LogicalOperator> {
    match kind {
        TokenKind::AmpersandAmpersand => Some(LogicalOperator::And),
        TokenKind::PipePipe => Some(LogicalOperator::Or),
        TokenKind::QuestionQuestion => Some(LogicalOperator::NullishCoalescing),
        _ => None,
    }
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    let operator = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::StarStar => BinaryOperator::Pow,
        TokenKind::EqualsEquals => BinaryOperator::Eq,
        TokenKind::BangEquals => BinaryOperator::Ne,
        TokenKind::EqualsEqualsEquals => BinaryOperator::StrictEq,
        TokenKind::BangEqualsEquals => BinaryOperator::StrictNe,
        TokenKind::Less => BinaryOperator::Lt,
        TokenKind::LessEquals => BinaryOperator::Le,
        TokenKind::Greater => BinaryOperator::Gt,
        TokenKind::GreaterEquals => BinaryOperator::Ge,
        TokenKind::LessLess => BinaryOperator::Shl,
        TokenKind::GreaterGreater => BinaryOperator::Shr,
        TokenKind::GreaterGreaterGreater => BinaryOperator::UShr,
        TokenKind::Ampersand => BinaryOperator::BitwiseAnd,
        TokenKind::Pipe => BinaryOperator::BitwiseOr,
        TokenKind::Caret => BinaryOperator::BitwiseXor,
        TokenKind::Keyword(Keyword::In) => BinaryOperator::In,
        TokenKind::Keyword(Keyword::Instanceof) => BinaryOperator::Instanceof,
        _ => return None,
    };
    Some(operator)
}

fn update_operator(kind: TokenKind) -> Option<UpdateOperator> {
    match kind {
        TokenKind::PlusPlus => Some(UpdateOperator::Increment),
        TokenKind::MinusMinus => Some(UpdateOperator::Decrement),
        _ => None,
    }
}
