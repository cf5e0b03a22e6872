//! Expression AST node types

use super::*;

/// An expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),

    /// Literal value
    Literal(Literal),

    /// Template literal `hello ${name}`
    TemplateLiteral(Box<TemplateLiteral>),

    /// Tagged template literal tag`hello`
    TaggedTemplate(Box<TaggedTemplateExpression>),

    /// Array literal [1, 2, 3]
    Array(Box<ArrayExpression>),

    /// Object literal {a: 1, b: 2}
    Object(Box<ObjectExpression>),

    /// Function expression
    Function(Box<Function>),

    /// Arrow function expression
    Arrow(Box<Function>),

    /// Class expression
    Class(Box<Class>),

    /// this expression
    This(ThisExpression),

    /// super, as a call callee or member object
    Super(Super),

    /// Member expression obj.prop or obj[prop]
    Member(Box<MemberExpression>),

    /// Call expression func(args)
    Call(Box<CallExpression>),

    /// new expression new Foo(args)
    New(Box<NewExpression>),

    /// Optional chain wrapper a?.b.c
    Chain(Box<ChainExpression>),

    /// Unary expression !x, -x, typeof x
    Unary(Box<UnaryExpression>),

    /// Update expression ++x, x++
    Update(Box<UpdateExpression>),

    /// Binary expression x + y, x === y
    Binary(Box<BinaryExpression>),

    /// Logical expression x && y, x || y, x ?? y
    Logical(Box<LogicalExpression>),

    /// Assignment expression x = y, x += y
    Assignment(Box<AssignmentExpression>),

    /// Conditional expression x ? y : z
    Conditional(Box<ConditionalExpression>),

    /// Sequence expression x, y, z
    Sequence(Box<SequenceExpression>),

    /// Spread element ...x in array literals and argument lists
    Spread(Box<SpreadElement>),

    /// Yield expression yield x
    Yield(Box<YieldExpression>),

    /// Await expression await x
    Await(Box<AwaitExpression>),

    /// new.target / import.meta
    MetaProperty(Box<MetaProperty>),

    /// import(source)
    Import(Box<ImportExpression>),

    /// JSX element <a></a>
    JsxElement(Box<JsxElement>),

    /// JSX fragment <></>
    JsxFragment(Box<JsxFragment>),
}

impl Expression {
    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(id) => id.span,
            Expression::Literal(lit) => lit.span,
            Expression::TemplateLiteral(t) => t.span,
            Expression::TaggedTemplate(t) => t.span,
            Expression::Array(a) => a.span,
            Expression::Object(o) => o.span,
            Expression::Function(f) => f.span,
            Expression::Arrow(f) => f.span,
            Expression::Class(c) => c.span,
            Expression::This(t) => t.span,
            Expression::Super(s) => s.span,
            Expression::Member(m) => m.span,
            Expression::Call(c) => c.span,
            Expression::New(n) => n.span,
            Expression::Chain(c) => c.span,
            Expression::Unary(u) => u.span,
            Expression::Update(u) => u.span,
            Expression::Binary(b) => b.span,
            Expression::Logical(l) => l.span,
            Expression::Assignment(a) => a.span,
            Expression::Conditional(c) => c.span,
            Expression::Sequence(s) => s.span,
            Expression::Spread(s) => s.span,
            Expression::Yield(y) => y.span,
            Expression::Await(a) => a.span,
            Expression::MetaProperty(m) => m.span,
            Expression::Import(i) => i.span,
            Expression::JsxElement(e) => e.span,
            Expression::JsxFragment(f) => f.span,
        }
    }

    /// Identifier or non-optional member access: the only expressions that
    /// compound assignment and update operators accept
    pub fn is_simple_assignment_target(&self) -> bool {
        matches!(self, Expression::Identifier(_) | Expression::Member(_))
    }
}

/// `this`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {
    #[serde(flatten)]
    pub span: Span,
}

/// `super`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Super {
    #[serde(flatten)]
    pub span: Span,
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The literal value
    pub value: LiteralValue,
    /// Raw source text, kept when parsing with `raw`
    pub raw: Option<String>,
    /// Span in source
    pub span: Span,
}

/// Literal value types
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// null
    Null,
    /// true or false
    Boolean(bool),
    /// Number (integer or float)
    Number(f64),
    /// BigInt, as decimal digits
    BigInt(String),
    /// String
    String(String),
    /// Regular expression
    Regex { pattern: String, flags: String },
}

struct NumberValue(f64);

impl Serialize for NumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

#[derive(Serialize)]
struct RegexValue<'a> {
    pattern: &'a str,
    flags: &'a str,
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", "Literal")?;
        match &self.value {
            LiteralValue::Null => map.serialize_entry("value", &())?,
            LiteralValue::Boolean(b) => map.serialize_entry("value", b)?,
            LiteralValue::Number(n) => map.serialize_entry("value", &NumberValue(*n))?,
            LiteralValue::String(s) => map.serialize_entry("value", s)?,
            LiteralValue::BigInt(_) | LiteralValue::Regex { .. } => map.serialize_entry("value", &())?,
        }
        if let Some(raw) = &self.raw {
            map.serialize_entry("raw", raw)?;
        }
        match &self.value {
            LiteralValue::Regex { pattern, flags } => {
                map.serialize_entry("regex", &RegexValue { pattern, flags })?
            }
            LiteralValue::BigInt(digits) => map.serialize_entry("bigint", digits)?,
            _ => {}
        }
        self.span.serialize_fields(&mut map)?;
        map.end()
    }
}

/// Template literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateLiteral {
    /// String parts (quasis)
    pub quasis: Vec<TemplateElement>,
    /// Expression parts
    pub expressions: Vec<Expression>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Tagged template literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TaggedTemplateExpression {
    /// Tag expression
    pub tag: Expression,
    /// Template literal
    pub quasi: TemplateLiteral,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Array expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayExpression {
    /// Array elements (None for holes like [1,,3])
    pub elements: Vec<Option<Expression>>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
    /// Offset of a comma directly following a spread element; legal in a
    /// literal but not once the array is read as a pattern
    #[serde(skip)]
    pub trailing_comma_after_spread: Option<u32>,
}

/// Object expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectExpression {
    /// Object properties
    pub properties: Vec<ObjectProperty>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
    /// Offset of a comma directly following a spread property
    #[serde(skip)]
    pub trailing_comma_after_spread: Option<u32>,
}

/// Object literal member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectProperty {
    /// Regular, shorthand, method or accessor property
    Property(Box<Property>),
    /// Spread property {...obj}
    Spread(Box<SpreadElement>),
}

/// `init`, `get` or `set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Object literal property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Property {
    pub key: PropertyKey,
    /// Value; a function for methods and accessors. A shorthand property
    /// with an initializer (`{a = 1}`) holds the assignment here until the
    /// object is read as a pattern.
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    #[serde(flatten)]
    pub span: Span,
}

/// Member expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    /// Object being accessed
    pub object: Expression,
    /// Property being accessed
    pub property: MemberProperty,
    /// Is this a computed property access? (obj[prop])
    pub computed: bool,
    /// Is this an optional access? (obj?.prop)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Member property (can be identifier or computed)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MemberProperty {
    /// obj.prop
    Identifier(Identifier),
    /// obj[expr]
    Expression(Box<Expression>),
    /// obj.#privateProp
    PrivateName(PrivateIdentifier),
}

/// Call expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    /// Callee expression
    pub callee: Expression,
    /// Arguments
    pub arguments: Vec<Expression>,
    /// Is this an optional call? (f?.())
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// New expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    /// Constructor expression
    pub callee: Expression,
    /// Arguments
    pub arguments: Vec<Expression>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Outermost node of an optional chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ChainExpression {
    pub expression: Expression,
    #[serde(flatten)]
    pub span: Span,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    /// Operator
    pub operator: UnaryOperator,
    /// Always true
    pub prefix: bool,
    /// Argument
    pub argument: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitwiseNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

/// Update expression (++, --)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UpdateExpression {
    /// Operator
    pub operator: UpdateOperator,
    /// Is prefix (++x) or postfix (x++)
    pub prefix: bool,
    /// Argument
    pub argument: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Update operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    /// Operator
    pub operator: BinaryOperator,
    /// Left operand; a private name only for `#x in obj`
    pub left: Expression,
    /// Right operand
    pub right: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
    #[serde(rename = "**")]
    Pow,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNe,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,
    #[serde(rename = "&")]
    BitwiseAnd,
    #[serde(rename = "|")]
    BitwiseOr,
    #[serde(rename = "^")]
    BitwiseXor,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

/// Logical expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    /// Operator
    pub operator: LogicalOperator,
    /// Left operand
    pub left: Expression,
    /// Right operand
    pub right: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "??")]
    NullishCoalescing,
}

/// Assignment expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    /// Operator
    pub operator: AssignmentOperator,
    /// Assignment target: a destructuring pattern for `=`, otherwise an
    /// identifier or member expression
    pub left: Pattern,
    /// Right-hand side
    pub right: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    ModAssign,
    #[serde(rename = "**=")]
    PowAssign,
    #[serde(rename = "<<=")]
    ShlAssign,
    #[serde(rename = ">>=")]
    ShrAssign,
    #[serde(rename = ">>>=")]
    UShrAssign,
    #[serde(rename = "&=")]
    BitwiseAndAssign,
    #[serde(rename = "|=")]
    BitwiseOrAssign,
    #[serde(rename = "^=")]
    BitwiseXorAssign,
    #[serde(rename = "&&=")]
    AndAssign,
    #[serde(rename = "||=")]
    OrAssign,
    #[serde(rename = "??=")]
    NullishAssign,
}

/// Conditional expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConditionalExpression {
    /// Test expression
    pub test: Expression,
    /// Consequent expression
    pub consequent: Expression,
    /// Alternate expression
    pub alternate: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Sequence expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SequenceExpression {
    /// Expressions in sequence
    pub expressions: Vec<Expression>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Spread element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SpreadElement {
    /// Spread argument
    pub argument: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Yield expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct YieldExpression {
    /// Yielded value
    pub argument: Option<Expression>,
    /// Is this a delegating yield? (yield*)
    pub delegate: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Await expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AwaitExpression {
    /// Awaited expression
    pub argument: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Meta property (new.target, import.meta)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MetaProperty {
    /// Meta object (new or import)
    pub meta: Identifier,
    /// Property (target or meta)
    pub property: Identifier,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Dynamic import expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportExpression {
    /// Module specifier
    pub source: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}
