//! Construct kind tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fieldless tag for every construct a [`NodeData`](super::NodeData) can hold.
///
/// Serialized names follow the compiler's own node type names so provenance
/// snapshots produced by the host can be read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    Program,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoWhileStatement,
    WithStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    SwitchStatement,
    SwitchCase,
    TryStatement,
    CatchClause,
    LabeledStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunctionExpression,
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    Identifier,
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    RegExpLiteral,
    TemplateLiteral,
    TemplateElement,
    TaggedTemplateExpression,
    ThisExpression,
    Super,
    ArrayExpression,
    ArrayPattern,
    ObjectExpression,
    ObjectPattern,
    ObjectProperty,
    ObjectMethod,
    SpreadElement,
    RestElement,
    AssignmentPattern,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    OptionalCallExpression,
    NewExpression,
    MemberExpression,
    OptionalMemberExpression,
    SequenceExpression,
    YieldExpression,
    AwaitExpression,
    DoExpression,
    BindExpression,
    MetaProperty,
    #[serde(rename = "JSXElement")]
    JsxElement,
    #[serde(rename = "JSXAttribute")]
    JsxAttribute,
    #[serde(rename = "JSXIdentifier")]
    JsxIdentifier,
    #[serde(rename = "JSXText")]
    JsxText,
    #[serde(rename = "JSXExpressionContainer")]
    JsxExpressionContainer,
}

impl SyntaxKind {
    /// Kinds whose whole text is a single token
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            SyntaxKind::Identifier
                | SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::BooleanLiteral
                | SyntaxKind::NullLiteral
                | SyntaxKind::RegExpLiteral
                | SyntaxKind::TemplateElement
                | SyntaxKind::ThisExpression
                | SyntaxKind::Super
                | SyntaxKind::EmptyStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::JsxIdentifier
                | SyntaxKind::JsxText
        )
    }

    /// Name used by the compiler for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::Program => "Program",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::BlockStatement => "BlockStatement",
            SyntaxKind::EmptyStatement => "EmptyStatement",
            SyntaxKind::DebuggerStatement => "DebuggerStatement",
            SyntaxKind::IfStatement => "IfStatement",
            SyntaxKind::ForStatement => "ForStatement",
            SyntaxKind::ForInStatement => "ForInStatement",
            SyntaxKind::ForOfStatement => "ForOfStatement",
            SyntaxKind::WhileStatement => "WhileStatement",
            SyntaxKind::DoWhileStatement => "DoWhileStatement",
            SyntaxKind::WithStatement => "WithStatement",
            SyntaxKind::BreakStatement => "BreakStatement",
            SyntaxKind::ContinueStatement => "ContinueStatement",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::ThrowStatement => "ThrowStatement",
            SyntaxKind::SwitchStatement => "SwitchStatement",
            SyntaxKind::SwitchCase => "SwitchCase",
            SyntaxKind::TryStatement => "TryStatement",
            SyntaxKind::CatchClause => "CatchClause",
            SyntaxKind::LabeledStatement => "LabeledStatement",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::VariableDeclarator => "VariableDeclarator",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::FunctionExpression => "FunctionExpression",
            SyntaxKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            SyntaxKind::ImportDeclaration => "ImportDeclaration",
            SyntaxKind::ImportSpecifier => "ImportSpecifier",
            SyntaxKind::ImportDefaultSpecifier => "ImportDefaultSpecifier",
            SyntaxKind::ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::BigIntLiteral => "BigIntLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::BooleanLiteral => "BooleanLiteral",
            SyntaxKind::NullLiteral => "NullLiteral",
            SyntaxKind::RegExpLiteral => "RegExpLiteral",
            SyntaxKind::TemplateLiteral => "TemplateLiteral",
            SyntaxKind::TemplateElement => "TemplateElement",
            SyntaxKind::TaggedTemplateExpression => "TaggedTemplateExpression",
            SyntaxKind::ThisExpression => "ThisExpression",
            SyntaxKind::Super => "Super",
            SyntaxKind::ArrayExpression => "ArrayExpression",
            SyntaxKind::ArrayPattern => "ArrayPattern",
            SyntaxKind::ObjectExpression => "ObjectExpression",
            SyntaxKind::ObjectPattern => "ObjectPattern",
            SyntaxKind::ObjectProperty => "ObjectProperty",
            SyntaxKind::ObjectMethod => "ObjectMethod",
            SyntaxKind::SpreadElement => "SpreadElement",
            SyntaxKind::RestElement => "RestElement",
            SyntaxKind::AssignmentPattern => "AssignmentPattern",
            SyntaxKind::UnaryExpression => "UnaryExpression",
            SyntaxKind::UpdateExpression => "UpdateExpression",
            SyntaxKind::BinaryExpression => "BinaryExpression",
            SyntaxKind::LogicalExpression => "LogicalExpression",
            SyntaxKind::AssignmentExpression => "AssignmentExpression",
            SyntaxKind::ConditionalExpression => "ConditionalExpression",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::OptionalCallExpression => "OptionalCallExpression",
            SyntaxKind::NewExpression => "NewExpression",
            SyntaxKind::MemberExpression => "MemberExpression",
            SyntaxKind::OptionalMemberExpression => "OptionalMemberExpression",
            SyntaxKind::SequenceExpression => "SequenceExpression",
            SyntaxKind::YieldExpression => "YieldExpression",
            SyntaxKind::AwaitExpression => "AwaitExpression",
            SyntaxKind::DoExpression => "DoExpression",
            SyntaxKind::BindExpression => "BindExpression",
            SyntaxKind::MetaProperty => "MetaProperty",
            SyntaxKind::JsxElement => "JSXElement",
            SyntaxKind::JsxAttribute => "JSXAttribute",
            SyntaxKind::JsxIdentifier => "JSXIdentifier",
            SyntaxKind::JsxText => "JSXText",
            SyntaxKind::JsxExpressionContainer => "JSXExpressionContainer",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_display() {
        for kind in [
            SyntaxKind::IfStatement,
            SyntaxKind::JsxAttribute,
            SyntaxKind::OptionalMemberExpression,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_leaf_kinds() {
        assert!(SyntaxKind::Identifier.is_leaf());
        assert!(SyntaxKind::JsxText.is_leaf());
        assert!(!SyntaxKind::TemplateLiteral.is_leaf());
        assert!(!SyntaxKind::Program.is_leaf());
    }
}
