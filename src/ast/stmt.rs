//! Statement AST node types

use super::*;

/// A JavaScript statement or module item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    /// Block statement { ... }
    Block(BlockStatement),

    /// Empty statement ;
    Empty(EmptyStatement),

    /// Expression statement
    Expression(ExpressionStatement),

    /// If statement
    If(Box<IfStatement>),

    /// While statement
    While(Box<WhileStatement>),

    /// Do-while statement
    DoWhile(Box<DoWhileStatement>),

    /// For statement
    For(Box<ForStatement>),

    /// For-in statement
    ForIn(Box<ForInStatement>),

    /// For-of statement
    ForOf(Box<ForOfStatement>),

    /// Switch statement
    Switch(Box<SwitchStatement>),

    /// Break statement
    Break(BreakStatement),

    /// Continue statement
    Continue(ContinueStatement),

    /// Return statement
    Return(ReturnStatement),

    /// Throw statement
    Throw(Box<ThrowStatement>),

    /// Try statement
    Try(Box<TryStatement>),

    /// Labeled statement
    Labeled(Box<LabeledStatement>),

    /// With statement
    With(Box<WithStatement>),

    /// Debugger statement
    Debugger(DebuggerStatement),

    /// Variable declaration
    VariableDeclaration(VariableDeclaration),

    /// Function declaration
    FunctionDeclaration(Box<Function>),

    /// Class declaration
    ClassDeclaration(Box<Class>),

    /// Import declaration
    Import(Box<ImportDeclaration>),

    /// export { a, b } / export var ... / export function ...
    ExportNamed(Box<ExportNamedDeclaration>),

    /// export default ...
    ExportDefault(Box<ExportDefaultDeclaration>),

    /// export * from 'mod'
    ExportAll(Box<ExportAllDeclaration>),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> Span {
        match self {
            Statement::Block(b) => b.span,
            Statement::Empty(e) => e.span,
            Statement::Expression(e) => e.span,
            Statement::If(i) => i.span,
            Statement::While(w) => w.span,
            Statement::DoWhile(d) => d.span,
            Statement::For(f) => f.span,
            Statement::ForIn(f) => f.span,
            Statement::ForOf(f) => f.span,
            Statement::Switch(s) => s.span,
            Statement::Break(b) => b.span,
            Statement::Continue(c) => c.span,
            Statement::Return(r) => r.span,
            Statement::Throw(t) => t.span,
            Statement::Try(t) => t.span,
            Statement::Labeled(l) => l.span,
            Statement::With(w) => w.span,
            Statement::Debugger(d) => d.span,
            Statement::VariableDeclaration(v) => v.span,
            Statement::FunctionDeclaration(f) => f.span,
            Statement::ClassDeclaration(c) => c.span,
            Statement::Import(i) => i.span,
            Statement::ExportNamed(e) => e.span,
            Statement::ExportDefault(e) => e.span,
            Statement::ExportAll(e) => e.span,
        }
    }
}

/// Block statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    /// Statements in the block
    pub body: Vec<Statement>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DebuggerStatement {
    #[serde(flatten)]
    pub span: Span,
}

/// Expression statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    /// Expression
    pub expression: Expression,
    /// Raw string content of a directive prologue entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// If statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    /// Test condition
    pub test: Expression,
    /// Consequent statement
    pub consequent: Statement,
    /// Alternate statement (else)
    pub alternate: Option<Statement>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// While statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    /// Test condition
    pub test: Expression,
    /// Loop body
    pub body: Statement,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Do-while statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    /// Loop body
    pub body: Statement,
    /// Test condition
    pub test: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// For loop init
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    /// Variable declaration
    Declaration(VariableDeclaration),
    /// Expression
    Expression(Expression),
}

/// For statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    /// Initialization
    pub init: Option<ForInit>,
    /// Test condition
    pub test: Option<Expression>,
    /// Update expression
    pub update: Option<Expression>,
    /// Loop body
    pub body: Statement,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// For-in/for-of left-hand side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInLeft {
    /// Variable declaration
    Declaration(VariableDeclaration),
    /// Assignment target
    Pattern(Pattern),
}

/// For-in statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForInStatement {
    /// Left-hand side
    pub left: ForInLeft,
    /// Right-hand side (object to iterate)
    pub right: Expression,
    /// Loop body
    pub body: Statement,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// For-of statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForOfStatement {
    /// Left-hand side
    pub left: ForInLeft,
    /// Right-hand side (iterable)
    pub right: Expression,
    /// Loop body
    pub body: Statement,
    /// Is this a for-await-of?
    #[serde(rename = "await")]
    pub is_await: bool,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Switch statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SwitchStatement {
    /// Discriminant expression
    pub discriminant: Expression,
    /// Switch cases
    pub cases: Vec<SwitchCase>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// `case` or `default` clause
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SwitchCase {
    /// Case test; `None` for `default`
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    #[serde(flatten)]
    pub span: Span,
}

/// Break statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BreakStatement {
    /// Optional label
    pub label: Option<Identifier>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Continue statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ContinueStatement {
    /// Optional label
    pub label: Option<Identifier>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    /// Return value
    pub argument: Option<Expression>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Throw statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThrowStatement {
    /// Exception to throw
    pub argument: Expression,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Try statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TryStatement {
    /// Try block
    pub block: BlockStatement,
    /// Catch clause
    pub handler: Option<CatchClause>,
    /// Finally block
    pub finalizer: Option<BlockStatement>,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Catch clause
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CatchClause {
    /// Catch binding; absent for `catch { }`
    pub param: Option<Pattern>,
    pub body: BlockStatement,
    #[serde(flatten)]
    pub span: Span,
}

/// Labeled statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LabeledStatement {
    /// Label
    pub label: Identifier,
    /// Body statement
    pub body: Statement,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// With statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WithStatement {
    /// Object expression
    pub object: Expression,
    /// Body statement
    pub body: Statement,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// Import declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportDeclaration {
    /// Import specifiers
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    /// Source module
    pub source: Literal,
    /// Span in source
    #[serde(flatten)]
    pub span: Span,
}

/// One binding introduced by an import declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportDeclarationSpecifier {
    /// import { a as b } from 'mod'
    Named(ImportSpecifier),
    /// import a from 'mod'
    Default(ImportDefaultSpecifier),
    /// import * as ns from 'mod'
    Namespace(ImportNamespaceSpecifier),
}

impl ImportDeclarationSpecifier {
    pub fn local(&self) -> &Identifier {
        match self {
            ImportDeclarationSpecifier::Named(s) => &s.local,
            ImportDeclarationSpecifier::Default(s) => &s.local,
            ImportDeclarationSpecifier::Namespace(s) => &s.local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportSpecifier {
    pub local: Identifier,
    pub imported: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportDefaultSpecifier {
    pub local: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportNamespaceSpecifier {
    pub local: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

/// export { a as b }, export { a } from 'mod', or an exported declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportNamedDeclaration {
    /// Exported declaration (export var/let/const/function/class)
    pub declaration: Option<Statement>,
    pub specifiers: Vec<ExportSpecifier>,
    /// Re-export source
    pub source: Option<Literal>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

/// export default ...
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportDefaultDeclaration {
    pub declaration: ExportDefaultKind,
    #[serde(flatten)]
    pub span: Span,
}

/// What `export default` exports
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
    /// Function declaration, possibly anonymous
    Function(Box<Function>),
    /// Class declaration, possibly anonymous
    Class(Box<Class>),
    /// Any assignment expression
    Expression(Expression),
}

/// export * from 'mod' / export * as ns from 'mod'
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportAllDeclaration {
    pub source: Literal,
    pub exported: Option<Identifier>,
    #[serde(flatten)]
    pub span: Span,
}
