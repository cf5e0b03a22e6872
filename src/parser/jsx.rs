//! JSX elements, fragments, attributes and children
//!
//! Inside a tag the lexer is switched to JSX tag tokens (names with dashes,
//! quoted attribute strings); between tags it reads raw text runs. Each
//! element is told which goal to read the token after its final `>` with,
//! since that depends on whether it is nested in another element, used as
//! an attribute value, or ends a JavaScript expression.

use super::*;

enum JsxNode {
    Element(JsxElement),
    Fragment(JsxFragment),
}

impl<'src> Parser<'src> {
    /// JSX element or fragment in expression position; the current token is `<`
    pub(super) fn parse_jsx_expression(&mut self) -> Result<Expression> {
        Ok(match self.parse_jsx_node(LexMode::Normal)? {
            JsxNode::Element(element) => Expression::JsxElement(Box::new(element)),
            JsxNode::Fragment(fragment) => Expression::JsxFragment(Box::new(fragment)),
        })
    }

    fn parse_jsx_node(&mut self, after: LexMode) -> Result<JsxNode> {
        self.enter_nesting()?;
        let result = self.parse_jsx_node_inner(after);
        self.leave_nesting();
        result
    }

    fn parse_jsx_node_inner(&mut self, after: LexMode) -> Result<JsxNode> {
        let start = self.start();
        self.advance_with(LexMode::JsxTag)?; // <

        if self.at(TokenKind::Greater) {
            return self.parse_jsx_fragment(start, after).map(JsxNode::Fragment);
        }

        let name = self.parse_jsx_element_name()?;
        let mut attributes = Vec::new();
        while !self.at(TokenKind::Greater) && !self.at(TokenKind::Slash) {
            attributes.push(self.parse_jsx_attribute()?);
        }

        if self.at(TokenKind::Slash) {
            self.advance_with(LexMode::JsxTag)?;
            self.expect_with(TokenKind::Greater, after)?;
            let span = self.finish(start);
            let opening_element = JsxOpeningElement {
                name,
                attributes,
                self_closing: true,
                span,
            };
            return Ok(JsxNode::Element(JsxElement {
                opening_element,
                children: Vec::new(),
                closing_element: None,
                span,
            }));
        }

        self.advance_with(LexMode::JsxChild)?; // >
        let opening_element = JsxOpeningElement {
            name,
            attributes,
            self_closing: false,
            span: self.finish(start),
        };
        let children = self.parse_jsx_children()?;

        let closing_start = self.start();
        self.advance_with(LexMode::JsxTag)?; // <
        self.advance_with(LexMode::JsxTag)?; // /
        let closing_name = self.parse_jsx_element_name()?;
        let opening_name = opening_element.name.qualified_name();
        if closing_name.qualified_name() != opening_name {
            return Err(self.early_error_at(
                closing_start.offset,
                format!(
                    "Expected corresponding JSX closing tag for <{}>, found </{}>",
                    opening_name,
                    closing_name.qualified_name()
                ),
            ));
        }
        self.expect_with(TokenKind::Greater, after)?;
        let closing_element = JsxClosingElement {
            name: closing_name,
            span: self.finish(closing_start),
        };

        Ok(JsxNode::Element(JsxElement {
            opening_element,
            children,
            closing_element: Some(closing_element),
            span: self.finish(start),
        }))
    }

    /// `<> children </>`; the current token is the opening `>`
    fn parse_jsx_fragment(&mut self, start: Marker, after: LexMode) -> Result<JsxFragment> {
        self.advance_with(LexMode::JsxChild)?; // >
        let opening_fragment = JsxOpeningFragment {
            span: self.finish(start),
        };
        let children = self.parse_jsx_children()?;

        let closing_start = self.start();
        self.advance_with(LexMode::JsxTag)?; // <
        self.advance_with(LexMode::JsxTag)?; // /
        if !self.at(TokenKind::Greater) {
            return Err(self.early_error_at(closing_start.offset, "Expected corresponding closing tag for JSX fragment"));
        }
        self.advance_with(after)?;
        let closing_fragment = JsxClosingFragment {
            span: self.finish(closing_start),
        };

        Ok(JsxFragment {
            opening_fragment,
            children,
            closing_fragment,
            span: self.finish(start),
        })
    }

    /// Consume `kind` and read the following token in `mode`
    fn expect_with(&mut self, kind: TokenKind, mode: LexMode) -> Result<Token<'src>> {
        if self.at(kind) {
            self.advance_with(mode)
        } else {
            Err(self.unexpected())
        }
    }

    // ========== Names ==========

    fn parse_jsx_identifier(&mut self) -> Result<JsxIdentifier> {
        if !self.at(TokenKind::JsxIdentifier) {
            return Err(self.unexpected());
        }
        let span = self.token_span();
        let token = self.advance_with(LexMode::JsxTag)?;
        Ok(JsxIdentifier {
            name: token.string_value(),
            span,
        })
    }

    /// `name`, `namespace:name` or `object.property.property`
    fn parse_jsx_element_name(&mut self) -> Result<JsxElementName> {
        let start = self.start();
        let first = self.parse_jsx_identifier()?;
        if self.at(TokenKind::Colon) {
            self.advance_with(LexMode::JsxTag)?;
            let name = self.parse_jsx_identifier()?;
            return Ok(JsxElementName::NamespacedName(JsxNamespacedName {
                namespace: first,
                name,
                span: self.finish(start),
            }));
        }

        let depth = self.depth;
        let result = self.parse_jsx_member_links(start, first);
        self.depth = depth;
        result
    }

    fn parse_jsx_member_links(&mut self, start: Marker, first: JsxIdentifier) -> Result<JsxElementName> {
        let mut object = JsxMemberObject::Identifier(first);
        while self.at(TokenKind::Dot) {
            self.enter_nesting()?;
            self.advance_with(LexMode::JsxTag)?;
            let property = self.parse_jsx_identifier()?;
            object = JsxMemberObject::MemberExpression(Box::new(JsxMemberExpression {
                object,
                property,
                span: self.finish(start),
            }));
        }
        Ok(match object {
            JsxMemberObject::Identifier(id) => JsxElementName::Identifier(id),
            JsxMemberObject::MemberExpression(member) => JsxElementName::MemberExpression(member),
        })
    }

    fn parse_jsx_attribute_name(&mut self) -> Result<JsxAttributeName> {
        let start = self.start();
        let first = self.parse_jsx_identifier()?;
        if !self.at(TokenKind::Colon) {
            return Ok(JsxAttributeName::Identifier(first));
        }
        self.advance_with(LexMode::JsxTag)?;
        let name = self.parse_jsx_identifier()?;
        Ok(JsxAttributeName::NamespacedName(JsxNamespacedName {
            namespace: first,
            name,
            span: self.finish(start),
        }))
    }

    // ========== Attributes ==========

    fn parse_jsx_attribute(&mut self) -> Result<JsxAttributeItem> {
        let start = self.start();
        if self.at(TokenKind::LeftBrace) {
            self.advance()?; // {
            self.expect(TokenKind::DotDotDot)?;
            let argument = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
            self.expect_with(TokenKind::RightBrace, LexMode::JsxTag)?;
            return Ok(JsxAttributeItem::Spread(Box::new(JsxSpreadAttribute {
                argument,
                span: self.finish(start),
            })));
        }

        let name = self.parse_jsx_attribute_name()?;
        let value = if self.at(TokenKind::Equals) {
            self.advance_with(LexMode::JsxTag)?;
            Some(self.parse_jsx_attribute_value()?)
        } else {
            None
        };
        Ok(JsxAttributeItem::Attribute(Box::new(JsxAttribute {
            name,
            value,
            span: self.finish(start),
        })))
    }

    fn parse_jsx_attribute_value(&mut self) -> Result<JsxAttributeValue> {
        match self.token.kind {
            TokenKind::JsxString => {
                let start = self.start();
                let token = self.advance_with(LexMode::JsxTag)?;
                let value = match token.value {
                    TokenValue::RawSlice(from, to) => self.source[from as usize..to as usize].to_string(),
                    _ => String::new(),
                };
                Ok(JsxAttributeValue::Literal(Literal {
                    value: LiteralValue::String(value),
                    raw: self.raw_of(&token),
                    span: self.finish(start),
                }))
            }
            TokenKind::LeftBrace => {
                let start = self.start();
                self.advance()?; // {
                if self.at(TokenKind::RightBrace) {
                    return Err(self.syntax_error_at(
                        start.offset,
                        "JSX attributes must only be assigned a non-empty expression",
                    ));
                }
                let expression = self.with_context(self.ctx.and_in(true), |p| p.parse_assignment_expression())?;
                self.expect_with(TokenKind::RightBrace, LexMode::JsxTag)?;
                Ok(JsxAttributeValue::ExpressionContainer(JsxExpressionContainer {
                    expression: JsxExpression::Expression(expression),
                    span: self.finish(start),
                }))
            }
            TokenKind::Less => Ok(match self.parse_jsx_node(LexMode::JsxTag)? {
                JsxNode::Element(element) => JsxAttributeValue::Element(Box::new(element)),
                JsxNode::Fragment(fragment) => JsxAttributeValue::Fragment(Box::new(fragment)),
            }),
            _ => Err(self.syntax_error_at(
                self.token.start,
                "JSX value should be either an expression or a quoted JSX text",
            )),
        }
    }

    // ========== Children ==========

    /// Children up to the `</` of the enclosing closing tag, which is left
    /// as the current token
    fn parse_jsx_children(&mut self) -> Result<Vec<JsxChild>> {
        let mut children = Vec::new();
        loop {
            match self.token.kind {
                TokenKind::JsxText => {
                    let span = self.token_span();
                    let token = self.advance_with(LexMode::JsxChild)?;
                    children.push(JsxChild::Text(JsxText {
                        value: token.raw.to_string(),
                        raw: self.raw_of(&token),
                        span,
                    }));
                }
                TokenKind::LeftBrace => children.push(self.parse_jsx_child_expression()?),
                TokenKind::Less => {
                    if self.lexer.clone().next_jsx_tag_token()?.kind == TokenKind::Slash {
                        return Ok(children);
                    }
                    children.push(match self.parse_jsx_node(LexMode::JsxChild)? {
                        JsxNode::Element(element) => JsxChild::Element(Box::new(element)),
                        JsxNode::Fragment(fragment) => JsxChild::Fragment(Box::new(fragment)),
                    });
                }
                TokenKind::Eof => {
                    return Err(self.syntax_error_at(self.token.start, "Unterminated JSX contents"));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// `{expression}`, `{...spread}` or `{}` between tags
    fn parse_jsx_child_expression(&mut self) -> Result<JsxChild> {
        let start = self.start();
        self.advance()?; // {

        if self.at(TokenKind::RightBrace) {
            let empty = JsxEmptyExpression {
                span: self.span_between(self.prev_end, self.start()),
            };
            self.advance_with(LexMode::JsxChild)?;
            return Ok(JsxChild::ExpressionContainer(JsxExpressionContainer {
                expression: JsxExpression::Empty(empty),
                span: self.finish(start),
            }));
        }

        let is_spread = self.eat(TokenKind::DotDotDot)?;
        let expression = self.with_context(self.ctx.and_in(true), |p| p.parse_expression())?;
        self.expect_with(TokenKind::RightBrace, LexMode::JsxChild)?;
        let span = self.finish(start);
        Ok(if is_spread {
            JsxChild::SpreadChild(JsxSpreadChild { expression, span })
        } else {
            JsxChild::ExpressionContainer(JsxExpressionContainer {
                expression: JsxExpression::Expression(expression),
                span,
            })
        })
    }
}
