//! Import and export declarations

use super::expression::is_identifier_kind;
use super::*;

impl<'src> Parser<'src> {
    // ========== Imports ==========

    pub(super) fn parse_import_declaration(&mut self) -> Result<Statement> {
        let start = self.start();
        self.advance()?; // import

        let mut specifiers = Vec::new();
        if !self.at(TokenKind::StringLiteral) {
            if self.at_identifier_like() {
                let local_start = self.start();
                let local = self.parse_binding_identifier()?;
                self.declare_name(&local, BindingKind::Lexical)?;
                specifiers.push(ImportDeclarationSpecifier::Default(ImportDefaultSpecifier {
                    local,
                    span: self.finish(local_start),
                }));
                if self.eat(TokenKind::Comma)? {
                    self.parse_import_bindings(&mut specifiers)?;
                }
            } else {
                self.parse_import_bindings(&mut specifiers)?;
            }
            if !self.eat_keyword(Keyword::From)? {
                return Err(self.unexpected());
            }
        }

        let source = self.parse_module_specifier()?;
        self.expect_semicolon()?;
        Ok(Statement::Import(Box::new(ImportDeclaration {
            specifiers,
            source,
            span: self.finish(start),
        })))
    }

    /// `* as ns` or `{ a, b as c }`
    fn parse_import_bindings(&mut self, specifiers: &mut Vec<ImportDeclarationSpecifier>) -> Result<()> {
        let start = self.start();
        if self.eat(TokenKind::Star)? {
            if !self.eat_keyword(Keyword::As)? {
                return Err(self.unexpected());
            }
            let local = self.parse_binding_identifier()?;
            self.declare_name(&local, BindingKind::Lexical)?;
            specifiers.push(ImportDeclarationSpecifier::Namespace(ImportNamespaceSpecifier {
                local,
                span: self.finish(start),
            }));
            return Ok(());
        }

        self.expect(TokenKind::LeftBrace)?;
        while !self.at(TokenKind::RightBrace) {
            let specifier_start = self.start();
            let imported_kind = self.token.kind;
            let imported = self.parse_identifier_name()?;
            let local = if self.eat_keyword(Keyword::As)? {
                self.parse_binding_identifier()?
            } else {
                if !is_identifier_kind(imported_kind) {
                    return Err(self.early_error_at(
                        imported.span.start,
                        format!("Unexpected reserved word '{}'", imported.name),
                    ));
                }
                self.check_identifier(&imported.name, imported.span.start, imported_kind, true)?;
                imported.clone()
            };
            self.declare_name(&local, BindingKind::Lexical)?;
            specifiers.push(ImportDeclarationSpecifier::Named(ImportSpecifier {
                local,
                imported,
                span: self.finish(specifier_start),
            }));
            if !self.at(TokenKind::RightBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.advance()?; // }
        Ok(())
    }

    fn parse_module_specifier(&mut self) -> Result<Literal> {
        if !self.at(TokenKind::StringLiteral) {
            return Err(self.unexpected());
        }
        self.parse_literal()
    }

    // ========== Exports ==========

    pub(super) fn parse_export_declaration(&mut self) -> Result<Statement> {
        let start = self.start();
        let export_token = self.advance()?; // export

        if self.eat(TokenKind::Star)? {
            let exported = if self.eat_keyword(Keyword::As)? {
                let exported = self.parse_identifier_name()?;
                self.add_export_name(&exported)?;
                Some(exported)
            } else {
                None
            };
            if !self.eat_keyword(Keyword::From)? {
                return Err(self.unexpected());
            }
            let source = self.parse_module_specifier()?;
            self.expect_semicolon()?;
            return Ok(Statement::ExportAll(Box::new(ExportAllDeclaration {
                source,
                exported,
                span: self.finish(start),
            })));
        }

        if self.at_keyword(Keyword::Default) {
            let default_span = self.token_span();
            self.advance()?;
            self.add_export_name(&Identifier::new("default", default_span))?;
            let declaration = self.parse_export_default_kind()?;
            return Ok(Statement::ExportDefault(Box::new(ExportDefaultDeclaration {
                declaration,
                span: self.finish(start),
            })));
        }

        if self.at(TokenKind::LeftBrace) {
            return self.parse_export_specifiers(start);
        }

        let declaration = match self.token.kind {
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const | Keyword::Function | Keyword::Class)
            | TokenKind::Keyword(Keyword::Async)
                if !self.token.flags.contains(TokenFlags::ESCAPED) =>
            {
                if self.at_keyword(Keyword::Async) && self.peek()?.kind != TokenKind::Keyword(Keyword::Function) {
                    return Err(self.unexpected());
                }
                self.parse_statement_list_item(StatementContext::TopLevel)?
            }
            _ => {
                return Err(self.syntax_error_at(
                    export_token.end,
                    format!("{} '{}'", messages::UNEXPECTED_TOKEN, self.token.raw),
                ))
            }
        };
        for name in declared_names(&declaration) {
            self.add_export_name(&name)?;
        }

        Ok(Statement::ExportNamed(Box::new(ExportNamedDeclaration {
            declaration: Some(declaration),
            specifiers: Vec::new(),
            source: None,
            span: self.finish(start),
        })))
    }

    /// What follows `export default`
    fn parse_export_default_kind(&mut self) -> Result<ExportDefaultKind> {
        let start = self.start();
        if self.at_keyword(Keyword::Function) {
            let function = self.parse_function(
                start,
                FunctionKind::FunctionDeclaration,
                false,
                Some(BindingKind::Lexical),
                true,
            )?;
            return Ok(ExportDefaultKind::Function(Box::new(function)));
        }
        if self.at_keyword(Keyword::Async) {
            let next = self.peek()?;
            if next.is_keyword(Keyword::Function) && !next.newline_before {
                self.advance()?; // async
                let function = self.parse_function(
                    start,
                    FunctionKind::FunctionDeclaration,
                    true,
                    Some(BindingKind::Lexical),
                    true,
                )?;
                return Ok(ExportDefaultKind::Function(Box::new(function)));
            }
        }
        if self.at_keyword(Keyword::Class) {
            let class = self.parse_class_with(start, ClassKind::ClassDeclaration, true)?;
            return Ok(ExportDefaultKind::Class(Box::new(class)));
        }

        let expression = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
        self.expect_semicolon()?;
        Ok(ExportDefaultKind::Expression(expression))
    }

    /// `export { a, b as c }` with an optional `from "module"`
    fn parse_export_specifiers(&mut self, start: Marker) -> Result<Statement> {
        self.advance()?; // {
        let mut specifiers = Vec::new();
        let mut reserved_locals = Vec::new();
        while !self.at(TokenKind::RightBrace) {
            let specifier_start = self.start();
            if !is_identifier_kind(self.token.kind) {
                reserved_locals.push(self.token.start);
            }
            let local = self.parse_identifier_name()?;
            let exported = if self.eat_keyword(Keyword::As)? {
                self.parse_identifier_name()?
            } else {
                local.clone()
            };
            self.add_export_name(&exported)?;
            specifiers.push(ExportSpecifier {
                local,
                exported,
                span: self.finish(specifier_start),
            });
            if !self.at(TokenKind::RightBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.advance()?; // }

        let source = if self.eat_keyword(Keyword::From)? {
            Some(self.parse_module_specifier()?)
        } else {
            // Without `from`, every local must name a binding of this module
            if let Some(&offset) = reserved_locals.first() {
                return Err(self.syntax_error_at(offset, "Unexpected keyword in export list"));
            }
            self.exported_locals
                .extend(specifiers.iter().map(|specifier| specifier.local.clone()));
            None
        };
        self.expect_semicolon()?;

        Ok(Statement::ExportNamed(Box::new(ExportNamedDeclaration {
            declaration: None,
            specifiers,
            source,
            span: self.finish(start),
        })))
    }

    fn add_export_name(&mut self, name: &Identifier) -> Result<()> {
        if !self.exported_names.insert(name.name.clone()) {
            return Err(self.early_error_at(
                name.span.start,
                format!("Duplicate export of '{}'", name.name),
            ));
        }
        Ok(())
    }

    /// Every `export { x }` without `from` must refer to a top-level binding
    pub(super) fn check_exported_locals(&self) -> Result<()> {
        for local in &self.exported_locals {
            if !self.scopes.is_declared_at_top_level(&local.name) {
                return Err(self.early_error_at(
                    local.span.start,
                    format!("Export '{}' is not defined in module", local.name),
                ));
            }
        }
        Ok(())
    }
}

/// Names an exported declaration binds
fn declared_names(declaration: &Statement) -> Vec<Identifier> {
    match declaration {
        Statement::VariableDeclaration(variables) => variables
            .declarations
            .iter()
            .flat_map(|declarator| declarator.id.bound_names())
            .cloned()
            .collect(),
        Statement::FunctionDeclaration(function) => function.id.iter().cloned().collect(),
        Statement::ClassDeclaration(class) => class.id.iter().cloned().collect(),
        _ => Vec::new(),
    }
}
