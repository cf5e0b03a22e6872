//! JSX AST node types, following the JSX ESTree extension

use super::*;

/// `<name attrs>children</name>` or `<name attrs />`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXElement", rename_all = "camelCase")]
pub struct JsxElement {
    pub opening_element: JsxOpeningElement,
    pub children: Vec<JsxChild>,
    /// `None` when the opening element is self-closing
    pub closing_element: Option<JsxClosingElement>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningElement", rename_all = "camelCase")]
pub struct JsxOpeningElement {
    pub name: JsxElementName,
    pub attributes: Vec<JsxAttributeItem>,
    pub self_closing: bool,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingElement")]
pub struct JsxClosingElement {
    pub name: JsxElementName,
    #[serde(flatten)]
    pub span: Span,
}

/// `<>children</>`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXFragment", rename_all = "camelCase")]
pub struct JsxFragment {
    pub opening_fragment: JsxOpeningFragment,
    pub children: Vec<JsxChild>,
    pub closing_fragment: JsxClosingFragment,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningFragment")]
pub struct JsxOpeningFragment {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingFragment")]
pub struct JsxClosingFragment {
    #[serde(flatten)]
    pub span: Span,
}

/// Element name: `div`, `svg:path` or `A.B.C`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxElementName {
    Identifier(JsxIdentifier),
    NamespacedName(JsxNamespacedName),
    MemberExpression(Box<JsxMemberExpression>),
}

impl JsxElementName {
    /// Name as written without whitespace, used to match closing tags
    pub fn qualified_name(&self) -> String {
        match self {
            JsxElementName::Identifier(id) => id.name.clone(),
            JsxElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
            JsxElementName::MemberExpression(member) => member.qualified_name(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            JsxElementName::Identifier(id) => id.span,
            JsxElementName::NamespacedName(ns) => ns.span,
            JsxElementName::MemberExpression(member) => member.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "JSXIdentifier")]
pub struct JsxIdentifier {
    pub name: String,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "JSXNamespacedName")]
pub struct JsxNamespacedName {
    pub namespace: JsxIdentifier,
    pub name: JsxIdentifier,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXMemberExpression")]
pub struct JsxMemberExpression {
    pub object: JsxMemberObject,
    pub property: JsxIdentifier,
    #[serde(flatten)]
    pub span: Span,
}

impl JsxMemberExpression {
    fn qualified_name(&self) -> String {
        let object = match &self.object {
            JsxMemberObject::Identifier(id) => id.name.clone(),
            JsxMemberObject::MemberExpression(inner) => inner.qualified_name(),
        };
        format!("{}.{}", object, self.property.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxMemberObject {
    Identifier(JsxIdentifier),
    MemberExpression(Box<JsxMemberExpression>),
}

/// Attribute or `{...spread}` in an opening element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeItem {
    Attribute(Box<JsxAttribute>),
    Spread(Box<JsxSpreadAttribute>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXAttribute")]
pub struct JsxAttribute {
    pub name: JsxAttributeName,
    pub value: Option<JsxAttributeValue>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeName {
    Identifier(JsxIdentifier),
    NamespacedName(JsxNamespacedName),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxAttributeValue {
    /// Quoted string
    Literal(Literal),
    ExpressionContainer(JsxExpressionContainer),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadAttribute")]
pub struct JsxSpreadAttribute {
    pub argument: Expression,
    #[serde(flatten)]
    pub span: Span,
}

/// `{expression}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXExpressionContainer")]
pub struct JsxExpressionContainer {
    pub expression: JsxExpression,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxExpression {
    Expression(Expression),
    Empty(JsxEmptyExpression),
}

/// The nothing between `{` and `}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXEmptyExpression")]
pub struct JsxEmptyExpression {
    #[serde(flatten)]
    pub span: Span,
}

/// `{...expression}` as a child
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadChild")]
pub struct JsxSpreadChild {
    pub expression: Expression,
    #[serde(flatten)]
    pub span: Span,
}

/// Run of literal text between tags
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXText")]
pub struct JsxText {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsxChild {
    Text(JsxText),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
    ExpressionContainer(JsxExpressionContainer),
    SpreadChild(JsxSpreadChild),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jsx_ident(name: &str) -> JsxIdentifier {
        JsxIdentifier {
            name: name.to_string(),
            span: Span::default(),
        }
    }

    #[test]
    fn test_qualified_names() {
        let member = JsxElementName::MemberExpression(Box::new(JsxMemberExpression {
            object: JsxMemberObject::MemberExpression(Box::new(JsxMemberExpression {
                object: JsxMemberObject::Identifier(jsx_ident("A")),
                property: jsx_ident("B"),
                span: Span::default(),
            })),
            property: jsx_ident("C"),
            span: Span::default(),
        }));
        assert_eq!(member.qualified_name(), "A.B.C");

        let namespaced = JsxElementName::NamespacedName(JsxNamespacedName {
            namespace: jsx_ident("svg"),
            name: jsx_ident("path"),
            span: Span::default(),
        });
        assert_eq!(namespaced.qualified_name(), "svg:path");
    }
}
