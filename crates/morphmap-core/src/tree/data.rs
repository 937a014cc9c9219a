//! Per-kind node payloads
//!
//! [`NodeData`] is a closed union: each variant carries the child references
//! and token-level attributes the alignment rules need for that construct.
//! Child references are [`NodeId`]s into the owning [`SyntaxTree`](super::SyntaxTree).

use super::{NodeId, SyntaxKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    EmptyStatement,
    DebuggerStatement,
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    ForInStatement(ForInStatement),
    ForOfStatement(ForOfStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(WhileStatement),
    WithStatement(WithStatement),
    BreakStatement(JumpStatement),
    ContinueStatement(JumpStatement),
    ReturnStatement(ArgumentStatement),
    ThrowStatement(ArgumentStatement),
    SwitchStatement(SwitchStatement),
    SwitchCase(SwitchCase),
    TryStatement(TryStatement),
    CatchClause(CatchClause),
    LabeledStatement(LabeledStatement),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    FunctionDeclaration(Function),
    FunctionExpression(Function),
    ArrowFunctionExpression(ArrowFunction),
    ImportDeclaration(ImportDeclaration),
    ImportSpecifier(ImportSpecifier),
    ImportDefaultSpecifier(ImportLocal),
    ImportNamespaceSpecifier(ImportLocal),
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    BigIntLiteral(BigIntLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral,
    RegExpLiteral(RegExpLiteral),
    TemplateLiteral(TemplateLiteral),
    TemplateElement(TemplateElement),
    TaggedTemplateExpression(TaggedTemplate),
    ThisExpression,
    Super,
    ArrayExpression(ArrayLike),
    ArrayPattern(ArrayLike),
    ObjectExpression(ObjectLike),
    ObjectPattern(ObjectLike),
    ObjectProperty(ObjectProperty),
    ObjectMethod(ObjectMethod),
    SpreadElement(Spread),
    RestElement(Spread),
    AssignmentPattern(AssignmentPattern),
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    BinaryExpression(BinaryLike),
    LogicalExpression(BinaryLike),
    AssignmentExpression(BinaryLike),
    ConditionalExpression(ConditionalExpression),
    CallExpression(Call),
    OptionalCallExpression(Call),
    NewExpression(Call),
    MemberExpression(Member),
    OptionalMemberExpression(Member),
    SequenceExpression(SequenceExpression),
    YieldExpression(YieldExpression),
    AwaitExpression(AwaitExpression),
    DoExpression(DoExpression),
    BindExpression(BindExpression),
    MetaProperty(MetaProperty),
    #[serde(rename = "JSXElement")]
    JsxElement(JsxElement),
    #[serde(rename = "JSXAttribute")]
    JsxAttribute(JsxAttribute),
    #[serde(rename = "JSXIdentifier")]
    JsxIdentifier(Identifier),
    #[serde(rename = "JSXText")]
    JsxText(JsxText),
    #[serde(rename = "JSXExpressionContainer")]
    JsxExpressionContainer(JsxExpressionContainer),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub body: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: NodeId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStatement {
    #[serde(default)]
    pub body: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub test: NodeId,
    pub consequent: NodeId,
    #[serde(default)]
    pub alternate: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    #[serde(default)]
    pub init: Option<NodeId>,
    #[serde(default)]
    pub test: Option<NodeId>,
    #[serde(default)]
    pub update: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStatement {
    pub left: NodeId,
    pub right: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStatement {
    pub left: NodeId,
    pub right: NodeId,
    pub body: NodeId,
    #[serde(default, rename = "await")]
    pub is_await: bool,
}

/// Shared by `while (test) body` and `do body while (test);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub test: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithStatement {
    pub object: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JumpStatement {
    #[serde(default)]
    pub label: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgumentStatement {
    #[serde(default)]
    pub argument: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: NodeId,
    #[serde(default)]
    pub cases: Vec<NodeId>,
}

/// `case test:` or `default:` when `test` is absent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchCase {
    #[serde(default)]
    pub test: Option<NodeId>,
    #[serde(default)]
    pub consequent: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStatement {
    pub block: NodeId,
    #[serde(default)]
    pub handler: Option<NodeId>,
    #[serde(default)]
    pub finalizer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub param: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStatement {
    pub label: NodeId,
    pub body: NodeId,
}

/// `var`, `let` or `const` with one or more declarators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: String,
    #[serde(default)]
    pub declarations: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: NodeId,
    #[serde(default)]
    pub init: Option<NodeId>,
}

/// Function declarations and expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub id: Option<NodeId>,
    #[serde(default)]
    pub params: Vec<NodeId>,
    pub body: NodeId,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    #[serde(default)]
    pub params: Vec<NodeId>,
    pub body: NodeId,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    #[serde(default)]
    pub specifiers: Vec<NodeId>,
    pub source: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    pub imported: NodeId,
    pub local: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportLocal {
    pub local: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigIntLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    #[serde(default)]
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateLiteral {
    #[serde(default)]
    pub quasis: Vec<NodeId>,
    #[serde(default)]
    pub expressions: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub raw: String,
    #[serde(default)]
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedTemplate {
    pub tag: NodeId,
    pub quasi: NodeId,
}

/// Array literals and patterns; `None` entries are holes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayLike {
    #[serde(default)]
    pub elements: Vec<Option<NodeId>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectLike {
    #[serde(default)]
    pub properties: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: NodeId,
    pub value: NodeId,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMethod {
    #[serde(default)]
    pub kind: MethodKind,
    pub key: NodeId,
    #[serde(default)]
    pub params: Vec<NodeId>,
    pub body: NodeId,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
}

/// `...argument` in spread and rest position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub argument: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPattern {
    pub left: NodeId,
    pub right: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub argument: NodeId,
    #[serde(default)]
    pub prefix: bool,
}

/// Binary, logical and assignment expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryLike {
    pub operator: String,
    pub left: NodeId,
    pub right: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: NodeId,
    pub consequent: NodeId,
    pub alternate: NodeId,
}

/// Plain, optional and `new` calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub callee: NodeId,
    #[serde(default)]
    pub arguments: Vec<NodeId>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub object: NodeId,
    pub property: NodeId,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequenceExpression {
    #[serde(default)]
    pub expressions: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldExpression {
    #[serde(default)]
    pub argument: Option<NodeId>,
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwaitExpression {
    pub argument: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoExpression {
    pub body: NodeId,
}

/// `object::callee` or `::callee`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindExpression {
    #[serde(default)]
    pub object: Option<NodeId>,
    pub callee: NodeId,
}

/// `new.target`, `import.meta`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaProperty {
    pub meta: NodeId,
    pub property: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    pub name: NodeId,
    #[serde(default)]
    pub attributes: Vec<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default, rename = "selfClosing")]
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxAttribute {
    pub name: NodeId,
    #[serde(default)]
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxText {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxExpressionContainer {
    pub expression: NodeId,
}

impl NodeData {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeData::Program(_) => SyntaxKind::Program,
            NodeData::ExpressionStatement(_) => SyntaxKind::ExpressionStatement,
            NodeData::BlockStatement(_) => SyntaxKind::BlockStatement,
            NodeData::EmptyStatement => SyntaxKind::EmptyStatement,
            NodeData::DebuggerStatement => SyntaxKind::DebuggerStatement,
            NodeData::IfStatement(_) => SyntaxKind::IfStatement,
            NodeData::ForStatement(_) => SyntaxKind::ForStatement,
            NodeData::ForInStatement(_) => SyntaxKind::ForInStatement,
            NodeData::ForOfStatement(_) => SyntaxKind::ForOfStatement,
            NodeData::WhileStatement(_) => SyntaxKind::WhileStatement,
            NodeData::DoWhileStatement(_) => SyntaxKind::DoWhileStatement,
            NodeData::WithStatement(_) => SyntaxKind::WithStatement,
            NodeData::BreakStatement(_) => SyntaxKind::BreakStatement,
            NodeData::ContinueStatement(_) => SyntaxKind::ContinueStatement,
            NodeData::ReturnStatement(_) => SyntaxKind::ReturnStatement,
            NodeData::ThrowStatement(_) => SyntaxKind::ThrowStatement,
            NodeData::SwitchStatement(_) => SyntaxKind::SwitchStatement,
            NodeData::SwitchCase(_) => SyntaxKind::SwitchCase,
            NodeData::TryStatement(_) => SyntaxKind::TryStatement,
            NodeData::CatchClause(_) => SyntaxKind::CatchClause,
            NodeData::LabeledStatement(_) => SyntaxKind::LabeledStatement,
            NodeData::VariableDeclaration(_) => SyntaxKind::VariableDeclaration,
            NodeData::VariableDeclarator(_) => SyntaxKind::VariableDeclarator,
            NodeData::FunctionDeclaration(_) => SyntaxKind::FunctionDeclaration,
            NodeData::FunctionExpression(_) => SyntaxKind::FunctionExpression,
            NodeData::ArrowFunctionExpression(_) => SyntaxKind::ArrowFunctionExpression,
            NodeData::ImportDeclaration(_) => SyntaxKind::ImportDeclaration,
            NodeData::ImportSpecifier(_) => SyntaxKind::ImportSpecifier,
            NodeData::ImportDefaultSpecifier(_) => SyntaxKind::ImportDefaultSpecifier,
            NodeData::ImportNamespaceSpecifier(_) => SyntaxKind::ImportNamespaceSpecifier,
            NodeData::Identifier(_) => SyntaxKind::Identifier,
            NodeData::NumericLiteral(_) => SyntaxKind::NumericLiteral,
            NodeData::BigIntLiteral(_) => SyntaxKind::BigIntLiteral,
            NodeData::StringLiteral(_) => SyntaxKind::StringLiteral,
            NodeData::BooleanLiteral(_) => SyntaxKind::BooleanLiteral,
            NodeData::NullLiteral => SyntaxKind::NullLiteral,
            NodeData::RegExpLiteral(_) => SyntaxKind::RegExpLiteral,
            NodeData::TemplateLiteral(_) => SyntaxKind::TemplateLiteral,
            NodeData::TemplateElement(_) => SyntaxKind::TemplateElement,
            NodeData::TaggedTemplateExpression(_) => SyntaxKind::TaggedTemplateExpression,
            NodeData::ThisExpression => SyntaxKind::ThisExpression,
            NodeData::Super => SyntaxKind::Super,
            NodeData::ArrayExpression(_) => SyntaxKind::ArrayExpression,
            NodeData::ArrayPattern(_) => SyntaxKind::ArrayPattern,
            NodeData::ObjectExpression(_) => SyntaxKind::ObjectExpression,
            NodeData::ObjectPattern(_) => SyntaxKind::ObjectPattern,
            NodeData::ObjectProperty(_) => SyntaxKind::ObjectProperty,
            NodeData::ObjectMethod(_) => SyntaxKind::ObjectMethod,
            NodeData::SpreadElement(_) => SyntaxKind::SpreadElement,
            NodeData::RestElement(_) => SyntaxKind::RestElement,
            NodeData::AssignmentPattern(_) => SyntaxKind::AssignmentPattern,
            NodeData::UnaryExpression(_) => SyntaxKind::UnaryExpression,
            NodeData::UpdateExpression(_) => SyntaxKind::UpdateExpression,
            NodeData::BinaryExpression(_) => SyntaxKind::BinaryExpression,
            NodeData::LogicalExpression(_) => SyntaxKind::LogicalExpression,
            NodeData::AssignmentExpression(_) => SyntaxKind::AssignmentExpression,
            NodeData::ConditionalExpression(_) => SyntaxKind::ConditionalExpression,
            NodeData::CallExpression(_) => SyntaxKind::CallExpression,
            NodeData::OptionalCallExpression(_) => SyntaxKind::OptionalCallExpression,
            NodeData::NewExpression(_) => SyntaxKind::NewExpression,
            NodeData::MemberExpression(_) => SyntaxKind::MemberExpression,
            NodeData::OptionalMemberExpression(_) => SyntaxKind::OptionalMemberExpression,
            NodeData::SequenceExpression(_) => SyntaxKind::SequenceExpression,
            NodeData::YieldExpression(_) => SyntaxKind::YieldExpression,
            NodeData::AwaitExpression(_) => SyntaxKind::AwaitExpression,
            NodeData::DoExpression(_) => SyntaxKind::DoExpression,
            NodeData::BindExpression(_) => SyntaxKind::BindExpression,
            NodeData::MetaProperty(_) => SyntaxKind::MetaProperty,
            NodeData::JsxElement(_) => SyntaxKind::JsxElement,
            NodeData::JsxAttribute(_) => SyntaxKind::JsxAttribute,
            NodeData::JsxIdentifier(_) => SyntaxKind::JsxIdentifier,
            NodeData::JsxText(_) => SyntaxKind::JsxText,
            NodeData::JsxExpressionContainer(_) => SyntaxKind::JsxExpressionContainer,
        }
    }

    /// Child references in source order
    ///
    /// Holes in array literals are skipped; a shorthand property still lists
    /// both its key and value.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeData::Program(n) => out.extend(&n.body),
            NodeData::ExpressionStatement(n) => out.push(n.expression),
            NodeData::BlockStatement(n) => out.extend(&n.body),
            NodeData::IfStatement(n) => {
                out.push(n.test);
                out.push(n.consequent);
                out.extend(n.alternate);
            }
            NodeData::ForStatement(n) => {
                out.extend(n.init);
                out.extend(n.test);
                out.extend(n.update);
                out.push(n.body);
            }
            NodeData::ForInStatement(n) => out.extend([n.left, n.right, n.body]),
            NodeData::ForOfStatement(n) => out.extend([n.left, n.right, n.body]),
            NodeData::WhileStatement(n) => out.extend([n.test, n.body]),
            NodeData::DoWhileStatement(n) => out.extend([n.body, n.test]),
            NodeData::WithStatement(n) => out.extend([n.object, n.body]),
            NodeData::BreakStatement(n) | NodeData::ContinueStatement(n) => out.extend(n.label),
            NodeData::ReturnStatement(n) | NodeData::ThrowStatement(n) => out.extend(n.argument),
            NodeData::SwitchStatement(n) => {
                out.push(n.discriminant);
                out.extend(&n.cases);
            }
            NodeData::SwitchCase(n) => {
                out.extend(n.test);
                out.extend(&n.consequent);
            }
            NodeData::TryStatement(n) => {
                out.push(n.block);
                out.extend(n.handler);
                out.extend(n.finalizer);
            }
            NodeData::CatchClause(n) => {
                out.extend(n.param);
                out.push(n.body);
            }
            NodeData::LabeledStatement(n) => out.extend([n.label, n.body]),
            NodeData::VariableDeclaration(n) => out.extend(&n.declarations),
            NodeData::VariableDeclarator(n) => {
                out.push(n.id);
                out.extend(n.init);
            }
            NodeData::FunctionDeclaration(n) | NodeData::FunctionExpression(n) => {
                out.extend(n.id);
                out.extend(&n.params);
                out.push(n.body);
            }
            NodeData::ArrowFunctionExpression(n) => {
                out.extend(&n.params);
                out.push(n.body);
            }
            NodeData::ImportDeclaration(n) => {
                out.extend(&n.specifiers);
                out.push(n.source);
            }
            NodeData::ImportSpecifier(n) => {
                out.push(n.imported);
                if n.local != n.imported {
                    out.push(n.local);
                }
            }
            NodeData::ImportDefaultSpecifier(n) | NodeData::ImportNamespaceSpecifier(n) => {
                out.push(n.local)
            }
            NodeData::TemplateLiteral(n) => {
                // quasis and expressions interleave in the text
                let mut quasis = n.quasis.iter();
                let mut expressions = n.expressions.iter();
                loop {
                    match (quasis.next(), expressions.next()) {
                        (None, None) => break,
                        (q, e) => {
                            out.extend(q);
                            out.extend(e);
                        }
                    }
                }
            }
            NodeData::TaggedTemplateExpression(n) => out.extend([n.tag, n.quasi]),
            NodeData::ArrayExpression(n) | NodeData::ArrayPattern(n) => {
                out.extend(n.elements.iter().flatten())
            }
            NodeData::ObjectExpression(n) | NodeData::ObjectPattern(n) => {
                out.extend(&n.properties)
            }
            NodeData::ObjectProperty(n) => {
                out.push(n.key);
                if n.value != n.key {
                    out.push(n.value);
                }
            }
            NodeData::ObjectMethod(n) => {
                out.push(n.key);
                out.extend(&n.params);
                out.push(n.body);
            }
            NodeData::SpreadElement(n) | NodeData::RestElement(n) => out.push(n.argument),
            NodeData::AssignmentPattern(n) => out.extend([n.left, n.right]),
            NodeData::UnaryExpression(n) => out.push(n.argument),
            NodeData::UpdateExpression(n) => out.push(n.argument),
            NodeData::BinaryExpression(n)
            | NodeData::LogicalExpression(n)
            | NodeData::AssignmentExpression(n) => out.extend([n.left, n.right]),
            NodeData::ConditionalExpression(n) => {
                out.extend([n.test, n.consequent, n.alternate])
            }
            NodeData::CallExpression(n)
            | NodeData::OptionalCallExpression(n)
            | NodeData::NewExpression(n) => {
                out.push(n.callee);
                out.extend(&n.arguments);
            }
            NodeData::MemberExpression(n) | NodeData::OptionalMemberExpression(n) => {
                out.extend([n.object, n.property])
            }
            NodeData::SequenceExpression(n) => out.extend(&n.expressions),
            NodeData::YieldExpression(n) => out.extend(n.argument),
            NodeData::AwaitExpression(n) => out.push(n.argument),
            NodeData::DoExpression(n) => out.push(n.body),
            NodeData::BindExpression(n) => {
                out.extend(n.object);
                out.push(n.callee);
            }
            NodeData::MetaProperty(n) => out.extend([n.meta, n.property]),
            NodeData::JsxElement(n) => {
                out.push(n.name);
                out.extend(&n.attributes);
                out.extend(&n.children);
            }
            NodeData::JsxAttribute(n) => {
                out.push(n.name);
                out.extend(n.value);
            }
            NodeData::JsxExpressionContainer(n) => out.push(n.expression),
            NodeData::EmptyStatement
            | NodeData::DebuggerStatement
            | NodeData::Identifier(_)
            | NodeData::NumericLiteral(_)
            | NodeData::BigIntLiteral(_)
            | NodeData::StringLiteral(_)
            | NodeData::BooleanLiteral(_)
            | NodeData::NullLiteral
            | NodeData::RegExpLiteral(_)
            | NodeData::TemplateElement(_)
            | NodeData::ThisExpression
            | NodeData::Super
            | NodeData::JsxIdentifier(_)
            | NodeData::JsxText(_) => {}
        }
        out
    }
}
