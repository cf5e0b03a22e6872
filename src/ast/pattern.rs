//! Pattern AST node types for destructuring

use super::*;

/// A binding or assignment target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    /// Simple identifier binding
    Identifier(Identifier),

    /// Array destructuring pattern [a, b, c]
    Array(Box<ArrayPattern>),

    /// Object destructuring pattern {a, b, c}
    Object(Box<ObjectPattern>),

    /// Assignment pattern with default value a = 1
    Assignment(Box<AssignmentPattern>),

    /// Rest element ...rest
    Rest(Box<RestElement>),

    /// Member expression (assignment targets only, never declarations)
    Member(Box<MemberExpression>),
}

impl Pattern {
    /// Get the span of this pattern
    pub fn span(&self) -> Span {
        match self {
            Pattern::Identifier(id) => id.span,
            Pattern::Array(a) => a.span,
            Pattern::Object(o) => o.span,
            Pattern::Assignment(a) => a.span,
            Pattern::Rest(r) => r.span,
            Pattern::Member(m) => m.span,
        }
    }

    /// Plain identifier, the only shape a "simple" parameter list contains
    pub fn is_identifier(&self) -> bool {
        matches!(self, Pattern::Identifier(_))
    }

    /// Get all bound identifiers in this pattern
    pub fn bound_names(&self) -> Vec<&Identifier> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names<'a>(&'a self, names: &mut Vec<&'a Identifier>) {
        match self {
            Pattern::Identifier(id) => names.push(id),
            Pattern::Array(arr) => {
                for elem in arr.elements.iter().flatten() {
                    elem.collect_bound_names(names);
                }
            }
            Pattern::Object(obj) => {
                for prop in &obj.properties {
                    match prop {
                        ObjectPatternProperty::Property(p) => p.value.collect_bound_names(names),
                        ObjectPatternProperty::Rest(r) => r.argument.collect_bound_names(names),
                    }
                }
            }
            Pattern::Assignment(a) => a.left.collect_bound_names(names),
            Pattern::Rest(r) => r.argument.collect_bound_names(names),
            Pattern::Member(_) => {}
        }
    }
}

/// Array destructuring pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayPattern {
    /// Pattern elements (None for holes); a rest element can only be last
    pub elements: Vec<Option<Pattern>>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Object destructuring pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectPattern {
    /// Pattern properties
    pub properties: Vec<ObjectPatternProperty>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Object pattern property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatternProperty {
    /// Regular property {key: value} or shorthand {key}
    Property(Box<AssignmentProperty>),
    /// Rest property {...rest}
    Rest(Box<RestElement>),
}

/// `key: pattern` inside an object pattern; serialized as an ESTree
/// `Property` with kind `init`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentProperty {
    /// Property key
    pub key: PropertyKey,
    /// Value pattern
    pub value: Pattern,
    /// Is this a shorthand property?
    pub shorthand: bool,
    /// Is this a computed property?
    pub computed: bool,
    /// Span in source
    pub span: Span,
}

impl Serialize for AssignmentProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "Property")?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry("value", &self.value)?;
        map.serialize_entry("kind", "init")?;
        map.serialize_entry("method", &false)?;
        map.serialize_entry("shorthand", &self.shorthand)?;
        map.serialize_entry("computed", &self.computed)?;
        self.span.serialize_fields(&mut map)?;
        map.end()
    }
}

/// Assignment pattern with default value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentPattern {
    /// Left-hand side pattern
    pub left: Pattern,
    /// Default value expression
    pub right: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Rest element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct RestElement {
    /// Rest argument pattern
    pub argument: Pattern,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ident(name: &str) -> Pattern {
        Pattern::Identifier(Identifier::new(name, Span::default()))
    }

    #[test]
    fn test_bound_names_walks_nested_patterns() {
        let pattern = Pattern::Object(Box::new(ObjectPattern {
            properties: vec![
                ObjectPatternProperty::Property(Box::new(AssignmentProperty {
                    key: PropertyKey::Identifier(Identifier::new("a", Span::default())),
                    value: Pattern::Array(Box::new(ArrayPattern {
                        elements: vec![Some(ident("b")), None, Some(ident("c"))],
                        span: Span::default(),
                    })),
                    shorthand: false,
                    computed: false,
                    span: Span::default(),
                })),
                ObjectPatternProperty::Rest(Box::new(RestElement {
                    argument: ident("d"),
                    span: Span::default(),
                })),
            ],
            span: Span::default(),
        }));
        let names: Vec<&str> = pattern.bound_names().iter().map(|id| id.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_assignment_property_serializes_as_property() {
        let prop = AssignmentProperty {
            key: PropertyKey::Identifier(Identifier::new("x", Span::default())),
            value: ident("x"),
            shorthand: true,
            computed: false,
            span: Span::default(),
        };
        assert_eq!(
            serde_json::to_value(&prop).unwrap(),
            json!({
                "type": "Property",
                "key": {"type": "Identifier", "name": "x"},
                "value": {"type": "Identifier", "name": "x"},
                "kind": "init",
                "method": false,
                "shorthand": true,
                "computed": false
            })
        );
    }
}
