//! Statements and declarations

use super::expression::is_identifier_like;
use super::*;

impl<'src> Parser<'src> {
    // ========== Directive Prologue ==========

    /// Leading string literal statements of a script or function body.
    /// Returns whether the prologue contains `"use strict"`, in which case
    /// the current context has been made strict.
    pub(super) fn parse_directives(&mut self, body: &mut Vec<Statement>, body_start: u32) -> Result<bool> {
        let mut has_use_strict = false;
        while self.at(TokenKind::StringLiteral) {
            let start = self.start();
            let literal_raw = self.token.raw;
            let literal_end = self.token.end;

            let expression = self.parse_expression()?;
            let is_directive = matches!(
                &expression,
                Expression::Literal(literal) if literal.span.start == start.offset && literal.span.end == literal_end
            );
            self.expect_semicolon()?;

            if !is_directive {
                body.push(Statement::Expression(ExpressionStatement {
                    expression,
                    directive: None,
                    span: self.finish(start),
                }));
                break;
            }

            let text = &literal_raw[1..literal_raw.len() - 1];
            if text == "use strict" {
                has_use_strict = true;
                self.ctx = self.ctx.and_strict(true);
                if let Some(offset) = self.last_octal.filter(|&offset| offset >= body_start) {
                    let message = match self.source.as_bytes().get(offset as usize) {
                        Some(b'"' | b'\'') => messages::STRICT_OCTAL_ESCAPE,
                        _ => messages::STRICT_OCTAL_LITERAL,
                    };
                    return Err(self.early_error_at(offset, message));
                }
            }
            body.push(Statement::Expression(ExpressionStatement {
                expression,
                directive: Some(text.to_string()),
                span: self.finish(start),
            }));
        }
        Ok(has_use_strict)
    }

    // ========== Statement List Items ==========

    /// Statement or declaration in a statement list
    pub(super) fn parse_statement_list_item(&mut self, position: StatementContext) -> Result<Statement> {
        self.enter_nesting()?;
        let result = self.parse_statement_list_item_inner(position);
        self.leave_nesting();
        result
    }

    fn parse_statement_list_item_inner(&mut self, position: StatementContext) -> Result<Statement> {
        let TokenKind::Keyword(keyword) = self.token.kind else {
            return self.parse_statement_inner(position);
        };
        if self.token.flags.contains(TokenFlags::ESCAPED) {
            return self.parse_statement_inner(position);
        }

        match keyword {
            Keyword::Function => self.parse_function_declaration(position, false),
            Keyword::Async if self.at_async_function()? => self.parse_function_declaration(position, true),
            Keyword::Class => {
                let start = self.start();
                self.parse_class(start, ClassKind::ClassDeclaration)
                    .map(|class| Statement::ClassDeclaration(Box::new(class)))
            }
            Keyword::Const => self.parse_variable_statement(VariableKind::Const),
            Keyword::Let if self.at_let_declaration()? => self.parse_variable_statement(VariableKind::Let),
            Keyword::Import if !self.at_import_call()? => {
                self.check_module_item(position)?;
                self.parse_import_declaration()
            }
            Keyword::Export => {
                self.check_module_item(position)?;
                self.parse_export_declaration()
            }
            _ => self.parse_statement_inner(position),
        }
    }

    /// `import` and `export` declarations belong to module top level
    fn check_module_item(&self, position: StatementContext) -> Result<()> {
        if !self.ctx.is_module() {
            let keyword = self.token.raw;
            return Err(self.syntax_error_at(
                self.token.start,
                format!("Cannot use {} statement outside a module", keyword),
            ));
        }
        if position != StatementContext::TopLevel || self.scopes.depth() != 1 {
            return Err(self.syntax_error_at(
                self.token.start,
                "'import' and 'export' may only appear at the top level",
            ));
        }
        Ok(())
    }

    /// `async function` without a line break in between
    fn at_async_function(&self) -> Result<bool> {
        if !self.at_keyword(Keyword::Async) {
            return Ok(false);
        }
        let next = self.peek()?;
        Ok(next.is_keyword(Keyword::Function) && !next.newline_before)
    }

    /// `import(` or `import.`: an expression, not a declaration
    fn at_import_call(&self) -> Result<bool> {
        let next = self.peek()?;
        Ok(matches!(next.kind, TokenKind::LeftParen | TokenKind::Dot))
    }

    /// `let` starts a lexical declaration when followed by a binding
    /// identifier or pattern
    fn at_let_declaration(&self) -> Result<bool> {
        let next = self.peek()?;
        Ok(is_identifier_like(&next) || matches!(next.kind, TokenKind::LeftBracket | TokenKind::LeftBrace))
    }

    /// How a function declaration in `position` binds its name
    fn function_binding(&self, position: StatementContext) -> BindingKind {
        match position {
            StatementContext::TopLevel if self.ctx.is_module() && self.scopes.depth() == 1 => BindingKind::Lexical,
            StatementContext::TopLevel => BindingKind::TopLevelFunction,
            _ => BindingKind::BlockFunction {
                sloppy: !self.ctx.is_strict(),
            },
        }
    }

    fn parse_function_declaration(&mut self, position: StatementContext, is_async: bool) -> Result<Statement> {
        let start = self.start();
        if is_async {
            self.advance()?;
        }
        let binding = self.function_binding(position);
        self.parse_function(start, FunctionKind::FunctionDeclaration, is_async, Some(binding), false)
            .map(|function| Statement::FunctionDeclaration(Box::new(function)))
    }

    // ========== Statements ==========

    /// Statement in `position`; declarations are not allowed here except
    /// sloppy-mode functions as `if` or label bodies
    pub(super) fn parse_statement(&mut self, position: StatementContext) -> Result<Statement> {
        self.enter_nesting()?;
        let result = self.parse_statement_inner(position);
        self.leave_nesting();
        result
    }

    fn parse_statement_inner(&mut self, position: StatementContext) -> Result<Statement> {
        let TokenKind::Keyword(keyword) = self.token.kind else {
            return match self.token.kind {
                TokenKind::LeftBrace => self.parse_block().map(Statement::Block),
                TokenKind::Semicolon => {
                    let span = self.token_span();
                    self.advance()?;
                    Ok(Statement::Empty(EmptyStatement { span }))
                }
                _ => self.parse_expression_or_labeled_statement(position),
            };
        };
        if self.token.flags.contains(TokenFlags::ESCAPED) {
            return self.parse_expression_or_labeled_statement(position);
        }

        match keyword {
            Keyword::Var => self.parse_variable_statement(VariableKind::Var),
            Keyword::If => self.parse_if_statement(),
            Keyword::For => self.parse_for_statement(),
            Keyword::While => self.parse_while_statement(),
            Keyword::Do => self.parse_do_while_statement(),
            Keyword::Continue => self.parse_break_or_continue(false),
            Keyword::Break => self.parse_break_or_continue(true),
            Keyword::Return => self.parse_return_statement(),
            Keyword::Throw => self.parse_throw_statement(),
            Keyword::Try => self.parse_try_statement(),
            Keyword::Switch => self.parse_switch_statement(),
            Keyword::With => self.parse_with_statement(),
            Keyword::Debugger => {
                let start = self.start();
                self.advance()?;
                self.expect_semicolon()?;
                Ok(Statement::Debugger(DebuggerStatement { span: self.finish(start) }))
            }
            Keyword::Function => self.parse_function_in_statement_position(position),
            Keyword::Async if self.at_async_function()? => Err(self.syntax_error_at(
                self.token.start,
                "Async functions can only be declared at the top level or inside a block",
            )),
            Keyword::Class | Keyword::Const => Err(self.syntax_error_at(
                self.token.start,
                "Lexical declaration cannot appear in a single-statement context",
            )),
            Keyword::Let => {
                let next = self.peek()?;
                if next.kind == TokenKind::LeftBracket
                    || (!next.newline_before && (is_identifier_like(&next) || next.kind == TokenKind::LeftBrace))
                {
                    return Err(self.syntax_error_at(
                        self.token.start,
                        "Lexical declaration cannot appear in a single-statement context",
                    ));
                }
                self.parse_expression_or_labeled_statement(position)
            }
            Keyword::Import if !self.at_import_call()? => {
                self.check_module_item(StatementContext::StatementList)?;
                Err(self.unexpected())
            }
            Keyword::Export => {
                self.check_module_item(StatementContext::StatementList)?;
                Err(self.unexpected())
            }
            _ => self.parse_expression_or_labeled_statement(position),
        }
    }

    /// Annex B: a plain function declaration may be the body of an `if` or
    /// a label in sloppy code
    fn parse_function_in_statement_position(&mut self, position: StatementContext) -> Result<Statement> {
        if self.ctx.is_strict() {
            return Err(self.syntax_error_at(
                self.token.start,
                "In strict mode code, functions can only be declared at top level or inside a block.",
            ));
        }
        let is_generator = self.peek()?.kind == TokenKind::Star;
        if is_generator || !matches!(position, StatementContext::If | StatementContext::Label) {
            return Err(self.syntax_error_at(
                self.token.start,
                "In non-strict mode code, functions can only be declared at top level, inside a block, or as the body of an if statement.",
            ));
        }
        // The declaration behaves as if wrapped in its own block
        self.scopes.push(ScopeKind::Block);
        let result = self.parse_function_declaration(position, false);
        self.scopes.pop();
        result
    }

    fn parse_expression_or_labeled_statement(&mut self, position: StatementContext) -> Result<Statement> {
        if self.at_identifier_like() && self.peek()?.kind == TokenKind::Colon {
            return self.parse_labeled_statement(position);
        }
        let start = self.start();
        let expression = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement {
            expression,
            directive: None,
            span: self.finish(start),
        }))
    }

    fn parse_labeled_statement(&mut self, position: StatementContext) -> Result<Statement> {
        let start = self.start();
        let label = self.parse_identifier_reference()?;
        self.advance()?; // :

        if self.labels.iter().any(|active| active.name == label.name) {
            return Err(self.early_error_at(
                label.span.start,
                format!("Label '{}' has already been declared", label.name),
            ));
        }
        let is_loop = self.at_loop_statement()?;
        self.labels.push(Label {
            name: label.name.clone(),
            is_loop,
        });

        // A labeled function is never allowed where a function is not
        let body_position = match position {
            StatementContext::Loop | StatementContext::If => StatementContext::Loop,
            _ => StatementContext::Label,
        };
        let body = self.parse_statement(body_position);
        self.labels.pop();
        let body = body?;

        Ok(Statement::Labeled(Box::new(LabeledStatement {
            label,
            body,
            span: self.finish(start),
        })))
    }

    /// Whether the statement at the current token is an iteration
    /// statement, looking through further labels
    fn at_loop_statement(&self) -> Result<bool> {
        let mut lexer = self.lexer.clone();
        let mut token = self.token.clone();
        loop {
            if token.is_keyword(Keyword::For) || token.is_keyword(Keyword::While) || token.is_keyword(Keyword::Do) {
                return Ok(true);
            }
            if !is_identifier_like(&token) {
                return Ok(false);
            }
            if lexer.next_token()?.kind != TokenKind::Colon {
                return Ok(false);
            }
            token = lexer.next_token()?;
        }
    }

    pub(super) fn parse_block(&mut self) -> Result<BlockStatement> {
        self.scopes.push(ScopeKind::Block);
        let result = self.parse_block_body();
        self.scopes.pop();
        result
    }

    /// `{ StatementList }` in the current scope
    fn parse_block_body(&mut self) -> Result<BlockStatement> {
        let start = self.start();
        self.expect(TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while !self.at(TokenKind::RightBrace) {
            if self.at(TokenKind::Eof) {
                return Err(self.unexpected());
            }
            body.push(self.parse_statement_list_item(StatementContext::StatementList)?);
        }
        self.advance()?; // }
        Ok(BlockStatement {
            body,
            span: self.finish(start),
        })
    }

    // ========== Variable Declarations ==========

    fn parse_variable_statement(&mut self, kind: VariableKind) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // var, let or const
        let mut declaration = self.parse_variable_declarators(start, kind, false)?;
        self.expect_semicolon()?;
        declaration.span = self.finish(start);
        Ok(Statement::VariableDeclaration(declaration))
    }

    /// Declarator list after `var`, `let` or `const`. In a `for` head a
    /// missing initializer is checked by the caller, since `for-in/of`
    /// allows it.
    pub(super) fn parse_variable_declarators(
        &mut self,
        start: Marker,
        kind: VariableKind,
        in_for: bool,
    ) -> Result<VariableDeclaration> {
        let binding = match kind {
            VariableKind::Var => BindingKind::Var,
            VariableKind::Let | VariableKind::Const => BindingKind::Lexical,
        };
        let mut declarations = Vec::new();
        loop {
            let declarator_start = self.start();
            let id = self.parse_binding_target()?;
            if binding == BindingKind::Lexical {
                if let Some(id) = id.bound_names().into_iter().find(|id| id.name == "let") {
                    return Err(self.early_error_at(id.span.start, "let is disallowed as a lexically bound name"));
                }
            }
            self.declare_pattern(&id, binding)?;

            let init = if self.eat(TokenKind::Equals)? {
                Some(self.parse_assignment_expression()?)
            } else {
                if !in_for {
                    self.check_missing_initializer(kind, &id)?;
                }
                None
            };
            declarations.push(VariableDeclarator {
                id,
                init,
                span: self.finish(declarator_start),
            });
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        Ok(VariableDeclaration {
            declarations,
            kind,
            span: self.finish(start),
        })
    }

    fn check_missing_initializer(&self, kind: VariableKind, id: &Pattern) -> Result<()> {
        if kind == VariableKind::Const {
            return Err(self.syntax_error_at(id.span().start, "Missing initializer in const declaration"));
        }
        if !id.is_identifier() {
            return Err(self.syntax_error_at(id.span().start, "Missing initializer in destructuring declaration"));
        }
        Ok(())
    }

    // ========== Control Flow ==========

    fn parse_if_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // if
        let test = self.parse_parenthesized_expression()?;
        let consequent = self.parse_statement(StatementContext::If)?;
        let alternate = if self.eat_keyword(Keyword::Else)? {
            Some(self.parse_statement(StatementContext::If)?)
        } else {
            None
        };
        Ok(Statement::If(Box::new(IfStatement {
            test,
            consequent,
            alternate,
            span: self.finish(start),
        })))
    }

    /// `( Expression )`
    fn parse_parenthesized_expression(&mut self) -> Result<Expression> {
        self.expect(TokenKind::LeftParen)?;
        let expr = self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?;
        self.expect(TokenKind::RightParen)?;
        Ok(expr)
    }

    fn parse_loop_body(&mut self) -> Result<Statement> {
        let ctx = self.ctx | Context::IN_ITERATION;
        self.with_context(ctx, |p| p.parse_statement(StatementContext::Loop))
    }

    fn parse_while_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // while
        let test = self.parse_parenthesized_expression()?;
        let body = self.parse_loop_body()?;
        Ok(Statement::While(Box::new(WhileStatement {
            test,
            body,
            span: self.finish(start),
        })))
    }

    fn parse_do_while_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // do
        let body = self.parse_loop_body()?;
        self.expect_keyword(Keyword::While)?;
        let test = self.parse_parenthesized_expression()?;
        // A semicolon is always inserted after `do ... while (...)` when missing
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::DoWhile(Box::new(DoWhileStatement {
            body,
            test,
            span: self.finish(start),
        })))
    }

    fn parse_for_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // for
        let is_await = self.at_keyword(Keyword::Await);
        if is_await {
            if !self.options.next || !self.ctx.has_await() {
                return Err(self.unexpected());
            }
            self.advance()?;
        }
        self.expect(TokenKind::LeftParen)?;

        self.scopes.push(ScopeKind::Block);
        let result = self.parse_for_rest(start, is_await);
        self.scopes.pop();
        result
    }

    fn parse_for_rest(&mut self, start: Marker, is_await: bool) -> Result<Statement> {
        if self.at(TokenKind::Semicolon) {
            if is_await {
                return Err(self.unexpected());
            }
            return self.parse_for_loop(start, None);
        }

        let init_start = self.start();
        let declaration_kind = if self.at_keyword(Keyword::Var) {
            Some(VariableKind::Var)
        } else if self.at_keyword(Keyword::Const) {
            Some(VariableKind::Const)
        } else if self.at_keyword(Keyword::Let) && self.at_let_declaration()? {
            Some(VariableKind::Let)
        } else {
            None
        };

        if let Some(kind) = declaration_kind {
            self.advance()?;
            let declaration =
                self.with_context(self.ctx.and_in(false), |p| p.parse_variable_declarators(init_start, kind, true))?;
            let is_of = self.at_keyword(Keyword::Of);
            if is_of || self.at_keyword(Keyword::In) {
                self.check_for_in_of_declaration(&declaration, is_of)?;
                return self.parse_for_in_of(start, ForInLeft::Declaration(declaration), is_of, is_await);
            }
            if is_await {
                return Err(self.unexpected());
            }
            for declarator in &declaration.declarations {
                if declarator.init.is_none() {
                    self.check_missing_initializer(kind, &declarator.id)?;
                }
            }
            return self.parse_for_loop(start, Some(ForInit::Declaration(declaration)));
        }

        let starts_with_let = self.at_keyword(Keyword::Let);
        let starts_with_async = self.at_keyword(Keyword::Async);
        let mut cover = CoverErrors::default();
        let init = self.with_context(self.ctx.and_in(false), |p| p.parse_expression_cover(&mut cover))?;

        let is_of = self.at_keyword(Keyword::Of);
        if is_of || self.at_keyword(Keyword::In) {
            if is_of && starts_with_let {
                return Err(self.syntax_error_at(init_start.offset, "The left-hand side of a for-of loop may not be 'let'."));
            }
            if is_of && starts_with_async && matches!(&init, Expression::Identifier(id) if id.name == "async") {
                return Err(self.syntax_error_at(init_start.offset, "The left-hand side of a for-of loop may not be 'async'."));
            }
            let left = self.to_for_in_of_target(init)?;
            cover.discard_from(init_start.offset);
            self.check_cover(&cover)?;
            return self.parse_for_in_of(start, ForInLeft::Pattern(left), is_of, is_await);
        }

        if is_await {
            return Err(self.unexpected());
        }
        self.check_cover(&cover)?;
        self.parse_for_loop(start, Some(ForInit::Expression(init)))
    }

    /// A `for-in/of` declaration binds exactly one name, and only a sloppy
    /// `for (var x = init in ...)` may have an initializer
    fn check_for_in_of_declaration(&self, declaration: &VariableDeclaration, is_of: bool) -> Result<()> {
        let loop_kind = if is_of { "for-of" } else { "for-in" };
        if declaration.declarations.len() != 1 {
            return Err(self.syntax_error_at(
                declaration.span.start,
                format!("Invalid left-hand side in {} loop: Must have a single binding.", loop_kind),
            ));
        }
        let declarator = &declaration.declarations[0];
        if declarator.init.is_some() {
            let allowed = !is_of
                && !self.ctx.is_strict()
                && declaration.kind == VariableKind::Var
                && declarator.id.is_identifier();
            if !allowed {
                return Err(self.syntax_error_at(
                    declarator.span.start,
                    format!("{} loop variable declaration may not have an initializer.", loop_kind),
                ));
            }
        }
        Ok(())
    }

    fn to_for_in_of_target(&self, init: Expression) -> Result<Pattern> {
        match &init {
            Expression::Identifier(_) | Expression::Member(_) | Expression::Object(_) | Expression::Array(_) => {
                self.to_pattern(init, PatternMode::Assignment)
            }
            _ => Err(self.early_error_at(init.span().start, "Invalid left-hand side in for-loop")),
        }
    }

    fn parse_for_in_of(&mut self, start: Marker, left: ForInLeft, is_of: bool, is_await: bool) -> Result<Statement> {
        if is_await && !is_of {
            return Err(self.unexpected());
        }
        self.advance()?; // in or of
        let right = if is_of {
            self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?
        } else {
            self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?
        };
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_loop_body()?;
        let span = self.finish(start);

        Ok(if is_of {
            Statement::ForOf(Box::new(ForOfStatement {
                left,
                right,
                body,
                is_await,
                span,
            }))
        } else {
            Statement::ForIn(Box::new(ForInStatement { left, right, body, span }))
        })
    }

    fn parse_for_loop(&mut self, start: Marker, init: Option<ForInit>) -> Result<Statement> {
        self.expect(TokenKind::Semicolon)?;
        let test = if self.at(TokenKind::Semicolon) {
            None
        } else {
            Some(self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?)
        };
        self.expect(TokenKind::Semicolon)?;
        let update = if self.at(TokenKind::RightParen) {
            None
        } else {
            Some(self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?)
        };
        self.expect(TokenKind::RightParen)?;
        let body = self.parse_loop_body()?;
        Ok(Statement::For(Box::new(ForStatement {
            init,
            test,
            update,
            body,
            span: self.finish(start),
        })))
    }

    fn parse_break_or_continue(&mut self, is_break: bool) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // break or continue

        let label = if !self.token.newline_before && self.at_identifier_like() {
            let label = self.parse_identifier_reference()?;
            match self.labels.iter().find(|active| active.name == label.name) {
                None => {
                    return Err(self.early_error_at(label.span.start, format!("Undefined label '{}'", label.name)));
                }
                Some(active) if !is_break && !active.is_loop => {
                    return Err(self.early_error_at(
                        label.span.start,
                        format!("Illegal continue statement: '{}' does not denote an iteration statement", label.name),
                    ));
                }
                Some(_) => {}
            }
            Some(label)
        } else {
            if is_break && !self.ctx.intersects(Context::IN_ITERATION | Context::IN_SWITCH) {
                return Err(self.syntax_error_at(start.offset, "Illegal break statement"));
            }
            if !is_break && !self.ctx.contains(Context::IN_ITERATION) {
                return Err(self.syntax_error_at(
                    start.offset,
                    "Illegal continue statement: no surrounding iteration statement",
                ));
            }
            None
        };
        self.expect_semicolon()?;

        let span = self.finish(start);
        Ok(if is_break {
            Statement::Break(BreakStatement { label, span })
        } else {
            Statement::Continue(ContinueStatement { label, span })
        })
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        if !self.ctx.contains(Context::RETURN) {
            return Err(self.syntax_error_at(start.offset, "Illegal return statement"));
        }
        self.advance()?; // return
        let argument = if self.at(TokenKind::Semicolon) || self.can_insert_semicolon() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_semicolon()?;
        Ok(Statement::Return(ReturnStatement {
            argument,
            span: self.finish(start),
        }))
    }

    fn parse_throw_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // throw
        if self.token.newline_before {
            return Err(self.syntax_error_at(self.token.start, "Illegal newline after throw"));
        }
        let argument = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Statement::Throw(Box::new(ThrowStatement {
            argument,
            span: self.finish(start),
        })))
    }

    fn parse_try_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // try
        let block = self.parse_block()?;

        let handler = if self.at_keyword(Keyword::Catch) {
            Some(self.parse_catch_clause()?)
        } else {
            None
        };
        let finalizer = if self.eat_keyword(Keyword::Finally)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.syntax_error_at(self.token.start, "Missing catch or finally after try"));
        }

        Ok(Statement::Try(Box::new(TryStatement {
            block,
            handler,
            finalizer,
            span: self.finish(start),
        })))
    }

    fn parse_catch_clause(&mut self) -> Result<CatchClause> {
        let start = self.start();
        self.advance()?; // catch
        let param = if self.eat(TokenKind::LeftParen)? {
            let param = self.parse_binding_target()?;
            self.expect(TokenKind::RightParen)?;
            Some(param)
        } else {
            None
        };

        // The catch body shares the parameter's scope
        let simple = param.as_ref().map_or(true, Pattern::is_identifier);
        self.scopes.push(ScopeKind::Catch { simple });
        let result = match &param {
            Some(param) => self.declare_pattern(param, BindingKind::Lexical),
            None => Ok(()),
        }
        .and_then(|()| self.parse_block_body());
        self.scopes.pop();
        let body = result?;

        Ok(CatchClause {
            param,
            body,
            span: self.finish(start),
        })
    }

    fn parse_switch_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // switch
        let discriminant = self.parse_parenthesized_expression()?;
        self.expect(TokenKind::LeftBrace)?;

        self.scopes.push(ScopeKind::Block);
        let ctx = self.ctx | Context::IN_SWITCH;
        let cases = self.with_context(ctx, |p| p.parse_switch_cases());
        self.scopes.pop();
        let cases = cases?;
        self.expect(TokenKind::RightBrace)?;

        Ok(Statement::Switch(Box::new(SwitchStatement {
            discriminant,
            cases,
            span: self.finish(start),
        })))
    }

    fn parse_switch_cases(&mut self) -> Result<Vec<SwitchCase>> {
        let mut cases = Vec::new();
        let mut has_default = false;
        while !self.at(TokenKind::RightBrace) {
            let start = self.start();
            let test = if self.eat_keyword(Keyword::Case)? {
                Some(self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?)
            } else if self.at_keyword(Keyword::Default) {
                if has_default {
                    return Err(self.early_error_at(start.offset, "More than one default clause in switch statement"));
                }
                has_default = true;
                self.advance()?;
                None
            } else {
                return Err(self.unexpected());
            };
            self.expect(TokenKind::Colon)?;

            let mut consequent = Vec::new();
            while !(self.at(TokenKind::RightBrace)
                || self.at_keyword(Keyword::Case)
                || self.at_keyword(Keyword::Default)
                || self.at(TokenKind::Eof))
            {
                consequent.push(self.parse_statement_list_item(StatementContext::StatementList)?);
            }
            cases.push(SwitchCase {
                test,
                consequent,
                span: self.finish(start),
            });
        }
        Ok(cases)
    }

    fn parse_with_statement(&mut self) -> Result<Statement> {
        let start = self.start();
        if self.ctx.is_strict() {
            return Err(self.syntax_error_at(start.offset, "Strict mode code may not include a with statement"));
        }
        self.advance()?; // with
        let object = self.parse_parenthesized_expression()?;
        let body = self.parse_statement(StatementContext::Loop)?;
        Ok(Statement::With(Box::new(WithStatement {
            object,
            body,
            span: self.finish(start),
        })))
    }
}
