//! Abstract Syntax Tree (AST) types for ECMAScript and JSX
//!
//! The tree mirrors ESTree: every node serializes (through `serde`) to the
//! object a JavaScript ESTree consumer expects, with `type` naming the node.
//! Enums that group node kinds (`Expression`, `Statement`, `Pattern`, ...)
//! are untagged, so each variant contributes exactly its node's object.
//!
//! Position metadata lives in [`Span`]. Offsets are always recorded; whether
//! they and the line/column `loc` appear in the serialized output follows
//! the `ranges` and `locations` options the tree was parsed with.

mod expr;
mod jsx;
mod pattern;
mod stmt;

pub use expr::*;
pub use jsx::*;
pub use pattern::*;
pub use stmt::*;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Line/column pair in ESTree `loc` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub column: u32,
}

/// ESTree `loc` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// A span in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character
    pub start: u32,
    /// Byte offset just past the last character
    pub end: u32,
    /// Line/column information, present when parsed with `locations`
    pub loc: Option<Location>,
    /// Serialize `start`/`end`; set when parsed with `ranges`
    pub(crate) with_range: bool,
}

impl Span {
    /// Create a span without serialized metadata
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            loc: None,
            with_range: false,
        }
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Span) -> Span {
        let loc = match (self.loc, other.loc) {
            (Some(a), Some(b)) => Some(Location {
                start: a.start,
                end: b.end,
            }),
            _ => None,
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            loc,
            with_range: self.with_range,
        }
    }

    /// Write `start`, `end` and `loc` into an enclosing node's map
    pub(crate) fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if self.with_range {
            map.serialize_entry("start", &self.start)?;
            map.serialize_entry("end", &self.end)?;
        }
        if let Some(loc) = &self.loc {
            map.serialize_entry("loc", loc)?;
        }
        Ok(())
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_fields(&mut map)?;
        map.end()
    }
}

/// A complete ECMAScript program
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    /// The statements in the program
    pub body: Vec<Statement>,
    /// Source type (script or module)
    pub source_type: SourceType,
    /// Whether this program is in strict mode
    #[serde(skip)]
    pub strict: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

impl Program {
    /// Serialize to an ESTree JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Serialize to an ESTree JSON string
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Source type of the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Script goal (no import/export)
    #[default]
    Script,
    /// Module goal (strict, import/export allowed)
    Module,
}

/// An identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    /// The name of the identifier
    pub name: String,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A `#name` class member name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct PrivateIdentifier {
    /// Name without the leading `#`
    pub name: String,
    #[serde(flatten)]
    pub span: Span,
}

/// Variable declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// `var`/`let`/`const` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    /// Declared bindings
    pub declarations: Vec<VariableDeclarator>,
    /// Declaration kind
    pub kind: VariableKind,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Single binding in a variable declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    /// Binding target
    pub id: Pattern,
    /// Initializer
    pub init: Option<Expression>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Which ESTree node a [`Function`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionKind {
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunctionExpression,
}

/// Function declaration, expression, arrow function or method value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    /// ESTree node type
    #[serde(rename = "type")]
    pub kind: FunctionKind,
    /// Function name
    pub id: Option<Identifier>,
    /// Parameters, including a trailing rest element
    pub params: Vec<Pattern>,
    /// Function body
    pub body: FunctionBody,
    /// Is this a generator function?
    #[serde(rename = "generator")]
    pub is_generator: bool,
    /// Arrow function with a concise expression body
    pub expression: bool,
    /// Is this an async function?
    #[serde(rename = "async")]
    pub is_async: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Function body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FunctionBody {
    /// Block body { ... }
    Block(BlockStatement),
    /// Expression body (arrow functions)
    Expression(Box<Expression>),
}

/// Which ESTree node a [`Class`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassKind {
    ClassDeclaration,
    ClassExpression,
}

/// Class declaration or expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    /// ESTree node type
    #[serde(rename = "type")]
    pub kind: ClassKind,
    /// Class name
    pub id: Option<Identifier>,
    /// Superclass expression
    pub super_class: Option<Expression>,
    /// Class body
    pub body: ClassBody,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Class body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ClassBody {
    /// Class elements
    pub body: Vec<ClassElement>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Class element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassElement {
    /// Method definition
    Method(MethodDefinition),
    /// Field definition
    Property(PropertyDefinition),
}

/// Method definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MethodDefinition {
    /// Method name
    pub key: PropertyKey,
    /// Method function
    pub value: Box<Function>,
    /// Method kind
    pub kind: MethodKind,
    /// Is this a computed property?
    pub computed: bool,
    /// Is this a static method?
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Method kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// Constructor
    Constructor,
    /// Regular method
    Method,
    /// Getter
    Get,
    /// Setter
    Set,
}

/// Class field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct PropertyDefinition {
    /// Field name
    pub key: PropertyKey,
    /// Initializer
    pub value: Option<Expression>,
    /// Is this a computed property?
    pub computed: bool,
    /// Is this a static field?
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Property key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
    /// Identifier key
    Identifier(Identifier),
    /// String or numeric literal key
    Literal(Literal),
    /// Computed key [expr]
    Computed(Box<Expression>),
    /// Private name #name
    PrivateName(PrivateIdentifier),
}

impl PropertyKey {
    pub fn span(&self) -> Span {
        match self {
            PropertyKey::Identifier(id) => id.span,
            PropertyKey::Literal(lit) => lit.span,
            PropertyKey::Computed(expr) => expr.span(),
            PropertyKey::PrivateName(name) => name.span,
        }
    }

    /// The statically known name of this key, used for `__proto__` and
    /// `constructor` checks
    pub fn static_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Identifier(id) => Some(&id.name),
            PropertyKey::Literal(Literal {
                value: LiteralValue::String(s),
                ..
            }) => Some(s),
            _ => None,
        }
    }
}

/// Cooked and raw text of a template piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateElementValue {
    /// Source text, with line terminators normalized to `\n`
    pub raw: String,
    /// Escape-processed text; `None` for invalid escapes in tagged templates
    pub cooked: Option<String>,
}

/// Template element (string part of template literal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateElement {
    pub value: TemplateElementValue,
    /// Is this the last element?
    pub tail: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Serialize an ESTree tree to a JSON value
pub fn to_estree(program: &Program) -> serde_json::Value {
    program.to_json()
}

/// Serialize a number the way JSON.stringify would, so integral values
/// compare equal to JSON integers
pub(crate) fn serialize_number<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        if value >= 0.0 {
            serializer.serialize_u64(value as u64)
        } else {
            serializer.serialize_i64(value as i64)
        }
    } else {
        serializer.serialize_f64(value)
    }
}
