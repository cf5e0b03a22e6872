//! Reinterpretation of already-parsed expressions as patterns
//!
//! Object and array literals, parenthesized lists and assignment left-hand
//! sides are parsed once as expressions. When the next token shows they
//! were really destructuring targets (`=`, `=>`, `in`/`of` in a `for` head)
//! they are converted here. The conversion is a pure function of the tree:
//! it reports the first offending sub-node instead of panicking or touching
//! parser state.

use rustc_hash::FxHashSet;

use crate::ast::*;

/// Which kind of pattern the expression must become
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternMode {
    /// Declarations and parameters: only identifiers can be bound
    Binding,
    /// `=` and `for-in/of` heads: member expressions are valid targets
    Assignment,
}

pub(crate) struct PatternContext<'a> {
    pub(crate) mode: PatternMode,
    pub(crate) strict: bool,
    /// Whether object rest properties are enabled
    pub(crate) object_rest: bool,
    /// (start, end) of every expression that was written in parentheses
    pub(crate) parenthesized: &'a FxHashSet<(u32, u32)>,
}

/// Why an expression cannot be a pattern, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternError {
    pub(crate) message: String,
    pub(crate) offset: u32,
}

impl PatternError {
    fn new(message: impl Into<String>, offset: u32) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

type PatternResult<T> = std::result::Result<T, PatternError>;

impl PatternContext<'_> {
    fn is_parenthesized(&self, span: Span) -> bool {
        self.parenthesized.contains(&(span.start, span.end))
    }

    fn target_message(&self) -> &'static str {
        match self.mode {
            PatternMode::Binding => "Invalid destructuring target",
            PatternMode::Assignment => "Invalid destructuring assignment target",
        }
    }
}

/// Convert `expr` into a pattern of the requested mode
pub(crate) fn expression_to_pattern(expr: Expression, ctx: &PatternContext<'_>) -> PatternResult<Pattern> {
    let span = expr.span();
    match expr {
        Expression::Identifier(id) => {
            if ctx.mode == PatternMode::Binding && ctx.is_parenthesized(span) {
                return Err(PatternError::new("Invalid destructuring target", span.start));
            }
            check_simple_name(&id, ctx)?;
            Ok(Pattern::Identifier(id))
        }
        Expression::Member(member) => match ctx.mode {
            PatternMode::Assignment => Ok(Pattern::Member(member)),
            PatternMode::Binding => Err(PatternError::new("Invalid destructuring target", span.start)),
        },
        Expression::Object(object) => {
            if ctx.is_parenthesized(span) {
                return Err(PatternError::new(ctx.target_message(), span.start));
            }
            object_to_pattern(*object, ctx)
        }
        Expression::Array(array) => {
            if ctx.is_parenthesized(span) {
                return Err(PatternError::new(ctx.target_message(), span.start));
            }
            array_to_pattern(*array, ctx)
        }
        Expression::Assignment(assign) => {
            if ctx.is_parenthesized(span) || assign.operator != AssignmentOperator::Assign {
                return Err(PatternError::new(ctx.target_message(), span.start));
            }
            let AssignmentExpression { left, right, span, .. } = *assign;
            match &left {
                _ if ctx.mode == PatternMode::Binding => validate_binding(&left, ctx)?,
                // Shorthand `{ eval = 0 }` builds its identifier target directly
                Pattern::Identifier(id) => check_simple_name(id, ctx)?,
                _ => {}
            }
            Ok(Pattern::Assignment(Box::new(AssignmentPattern { left, right, span })))
        }
        Expression::Chain(_) => Err(PatternError::new(
            "Invalid left-hand side in assignment: optional chain",
            span.start,
        )),
        _ => Err(PatternError::new(ctx.target_message(), span.start)),
    }
}

fn check_simple_name(id: &Identifier, ctx: &PatternContext<'_>) -> PatternResult<()> {
    if ctx.strict && (id.name == "eval" || id.name == "arguments") {
        return Err(PatternError::new(
            format!("Unexpected eval or arguments in strict mode: '{}'", id.name),
            id.span.start,
        ));
    }
    Ok(())
}

fn object_to_pattern(object: ObjectExpression, ctx: &PatternContext<'_>) -> PatternResult<Pattern> {
    let count = object.properties.len();
    if let Some(offset) = object.trailing_comma_after_spread {
        return Err(PatternError::new("Rest element may not have a trailing comma", offset));
    }
    let mut properties = Vec::with_capacity(count);
    for property in object.properties {
        match property {
            ObjectProperty::Property(prop) => {
                let prop = *prop;
                if prop.kind != PropertyKind::Init || prop.method {
                    return Err(PatternError::new(
                        "Object pattern can't contain getter, setter or method",
                        prop.key.span().start,
                    ));
                }
                let value = expression_to_pattern(prop.value, ctx)?;
                properties.push(ObjectPatternProperty::Property(Box::new(AssignmentProperty {
                    key: prop.key,
                    value,
                    shorthand: prop.shorthand,
                    computed: prop.computed,
                    span: prop.span,
                })));
            }
            ObjectProperty::Spread(spread) => {
                let rest = object_rest(*spread, ctx)?;
                properties.push(ObjectPatternProperty::Rest(Box::new(rest)));
            }
        }
    }
    Ok(Pattern::Object(Box::new(ObjectPattern {
        properties,
        span: object.span,
    })))
}

/// `...x` inside an object pattern binds an identifier, or in assignment
/// position any simple target, never a nested pattern
fn object_rest(spread: SpreadElement, ctx: &PatternContext<'_>) -> PatternResult<RestElement> {
    if !ctx.object_rest {
        return Err(PatternError::new("Unexpected token '...'", spread.span.start));
    }
    let argument_span = spread.argument.span();
    let argument = match spread.argument {
        Expression::Identifier(id) => {
            if ctx.mode == PatternMode::Binding && ctx.is_parenthesized(argument_span) {
                return Err(PatternError::new("Invalid rest element", argument_span.start));
            }
            check_simple_name(&id, ctx)?;
            Pattern::Identifier(id)
        }
        Expression::Member(member) if ctx.mode == PatternMode::Assignment => Pattern::Member(member),
        Expression::Assignment(_) => {
            return Err(PatternError::new(
                "Rest element cannot have a default initializer",
                argument_span.start,
            ))
        }
        Expression::Object(_) | Expression::Array(_) => {
            return Err(PatternError::new(
                "`...` must be followed by an identifier in declaration contexts",
                argument_span.start,
            ))
        }
        _ => return Err(PatternError::new("Invalid rest element", argument_span.start)),
    };
    Ok(RestElement {
        argument,
        span: spread.span,
    })
}

fn array_to_pattern(array: ArrayExpression, ctx: &PatternContext<'_>) -> PatternResult<Pattern> {
    let count = array.elements.len();
    let mut elements = Vec::with_capacity(count);
    for (index, element) in array.elements.into_iter().enumerate() {
        let Some(element) = element else {
            elements.push(None);
            continue;
        };
        let pattern = match element {
            Expression::Spread(spread) => {
                if index + 1 != count {
                    return Err(PatternError::new("Rest element must be last element", spread.span.start));
                }
                if let Some(offset) = array.trailing_comma_after_spread {
                    return Err(PatternError::new("Rest element may not have a trailing comma", offset));
                }
                let SpreadElement { argument, span } = *spread;
                if let Expression::Assignment(assign) = &argument {
                    return Err(PatternError::new(
                        "Rest element cannot have a default initializer",
                        assign.span.start,
                    ));
                }
                let argument = expression_to_pattern(argument, ctx)?;
                Pattern::Rest(Box::new(RestElement { argument, span }))
            }
            other => expression_to_pattern(other, ctx)?,
        };
        elements.push(Some(pattern));
    }
    Ok(Pattern::Array(Box::new(ArrayPattern {
        elements,
        span: array.span,
    })))
}

/// Check that a pattern built for an assignment is also a valid binding
/// pattern: no member targets, no parenthesized names
pub(crate) fn validate_binding(pattern: &Pattern, ctx: &PatternContext<'_>) -> PatternResult<()> {
    match pattern {
        Pattern::Identifier(id) => {
            if ctx.is_parenthesized(id.span) {
                return Err(PatternError::new("Invalid destructuring target", id.span.start));
            }
            check_simple_name(id, ctx)
        }
        Pattern::Member(member) => Err(PatternError::new("Invalid destructuring target", member.span.start)),
        Pattern::Array(array) => array
            .elements
            .iter()
            .flatten()
            .try_for_each(|element| validate_binding(element, ctx)),
        Pattern::Object(object) => object.properties.iter().try_for_each(|property| match property {
            ObjectPatternProperty::Property(prop) => validate_binding(&prop.value, ctx),
            ObjectPatternProperty::Rest(rest) => match &rest.argument {
                Pattern::Identifier(_) => validate_binding(&rest.argument, ctx),
                other => Err(PatternError::new("Invalid rest element", other.span().start)),
            },
        }),
        Pattern::Assignment(assign) => validate_binding(&assign.left, ctx),
        Pattern::Rest(rest) => validate_binding(&rest.argument, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, start: u32) -> Expression {
        Expression::Identifier(Identifier::new(name, Span::new(start, start + name.len() as u32)))
    }

    fn ctx(mode: PatternMode, parenthesized: &FxHashSet<(u32, u32)>) -> PatternContext<'_> {
        PatternContext {
            mode,
            strict: false,
            object_rest: true,
            parenthesized,
        }
    }

    fn member(start: u32) -> Expression {
        Expression::Member(Box::new(MemberExpression {
            object: ident("a", start),
            property: MemberProperty::Identifier(Identifier::new("b", Span::new(start + 2, start + 3))),
            computed: false,
            optional: false,
            span: Span::new(start, start + 3),
        }))
    }

    fn spread(argument: Expression, start: u32) -> Expression {
        let end = argument.span().end;
        Expression::Spread(Box::new(SpreadElement {
            argument,
            span: Span::new(start, end),
        }))
    }

    fn array(elements: Vec<Option<Expression>>) -> Expression {
        Expression::Array(Box::new(ArrayExpression {
            elements,
            span: Span::new(0, 20),
            trailing_comma_after_spread: None,
        }))
    }

    #[test]
    fn test_identifier_becomes_binding() {
        let parens = FxHashSet::default();
        let pattern = expression_to_pattern(ident("x", 0), &ctx(PatternMode::Binding, &parens)).unwrap();
        assert!(pattern.is_identifier());
    }

    #[test]
    fn test_member_only_in_assignment() {
        let parens = FxHashSet::default();
        assert!(expression_to_pattern(member(0), &ctx(PatternMode::Assignment, &parens)).is_ok());
        let err = expression_to_pattern(member(0), &ctx(PatternMode::Binding, &parens)).unwrap_err();
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_parenthesized_identifier() {
        let mut parens = FxHashSet::default();
        parens.insert((1, 2));
        assert!(expression_to_pattern(ident("x", 1), &ctx(PatternMode::Assignment, &parens)).is_ok());
        assert!(expression_to_pattern(ident("x", 1), &ctx(PatternMode::Binding, &parens)).is_err());
    }

    #[test]
    fn test_array_rest_must_be_last() {
        let parens = FxHashSet::default();
        let expr = array(vec![Some(spread(ident("a", 4), 1)), Some(ident("b", 7))]);
        let err = expression_to_pattern(expr, &ctx(PatternMode::Assignment, &parens)).unwrap_err();
        assert_eq!(err.message, "Rest element must be last element");
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn test_array_rest_trailing_comma() {
        let parens = FxHashSet::default();
        let expr = Expression::Array(Box::new(ArrayExpression {
            elements: vec![Some(spread(ident("a", 4), 1))],
            span: Span::new(0, 7),
            trailing_comma_after_spread: Some(5),
        }));
        let err = expression_to_pattern(expr, &ctx(PatternMode::Assignment, &parens)).unwrap_err();
        assert_eq!(err.offset, 5);
    }

    #[test]
    fn test_object_rest_rejects_nested_pattern() {
        let parens = FxHashSet::default();
        let inner = Expression::Object(Box::new(ObjectExpression {
            properties: vec![],
            span: Span::new(4, 6),
            trailing_comma_after_spread: None,
        }));
        let expr = Expression::Object(Box::new(ObjectExpression {
            properties: vec![ObjectProperty::Spread(Box::new(SpreadElement {
                argument: inner,
                span: Span::new(1, 6),
            }))],
            span: Span::new(0, 7),
            trailing_comma_after_spread: None,
        }));
        let err = expression_to_pattern(expr, &ctx(PatternMode::Binding, &parens)).unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn test_object_rest_requires_feature() {
        let parens = FxHashSet::default();
        let expr = Expression::Object(Box::new(ObjectExpression {
            properties: vec![ObjectProperty::Spread(Box::new(SpreadElement {
                argument: ident("x", 4),
                span: Span::new(1, 5),
            }))],
            span: Span::new(0, 6),
            trailing_comma_after_spread: None,
        }));
        let mut context = ctx(PatternMode::Binding, &parens);
        context.object_rest = false;
        assert!(expression_to_pattern(expr, &context).is_err());
    }

    #[test]
    fn test_strict_eval_target() {
        let parens = FxHashSet::default();
        let mut context = ctx(PatternMode::Assignment, &parens);
        context.strict = true;
        let err = expression_to_pattern(ident("eval", 0), &context).unwrap_err();
        assert!(err.message.contains("eval"));
    }

    #[test]
    fn test_strict_eval_shorthand_default() {
        let parens = FxHashSet::default();
        let default = Expression::Assignment(Box::new(AssignmentExpression {
            operator: AssignmentOperator::Assign,
            left: Pattern::Identifier(Identifier::new("eval", Span::new(1, 5))),
            right: ident("x", 8),
            span: Span::new(1, 9),
        }));
        let mut context = ctx(PatternMode::Assignment, &parens);
        context.strict = true;
        let err = expression_to_pattern(default, &context).unwrap_err();
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn test_literal_is_not_a_target() {
        let parens = FxHashSet::default();
        let literal = Expression::Literal(Literal {
            value: LiteralValue::Number(1.0),
            raw: None,
            span: Span::new(3, 4),
        });
        let err = expression_to_pattern(literal, &ctx(PatternMode::Assignment, &parens)).unwrap_err();
        assert_eq!(err.message, "Invalid destructuring assignment target");
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn test_validate_binding_rejects_member_defaults() {
        let parens = FxHashSet::default();
        let member_pattern = match member(1) {
            Expression::Member(m) => Pattern::Member(m),
            _ => unreachable!(),
        };
        let pattern = Pattern::Assignment(Box::new(AssignmentPattern {
            left: member_pattern,
            right: ident("c", 6),
            span: Span::new(1, 7),
        }));
        assert!(validate_binding(&pattern, &ctx(PatternMode::Binding, &parens)).is_err());
    }
}
