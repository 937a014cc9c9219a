//! Node-kind alignment rules
//!
//! [`align_node`] dispatches on the output node's kind. Every output kind has
//! an arm, so a new [`NodeData`] variant fails to compile until it is given
//! a rule. When the predecessor has the same kind the construct's own rule
//! runs; otherwise the pair goes to the shape-change remappers.

mod collections;
mod expressions;
mod functions;
mod jsx;
mod literals;
mod modules;
mod statements;

pub(crate) use functions::arrow_to_function;

use crate::context::{RuleContext, Side};
use crate::remap;
use morphmap_core::tree::NodeData;
use morphmap_core::{NodeId, TextSize};

/// Run the same-kind rule when the payloads match, the remappers otherwise
macro_rules! same_kind {
    ($cx:ident, $src:ident, $variant:ident, $o:ident, $rule:path) => {
        match &$src.data {
            NodeData::$variant(s) => $rule($cx, s, $o),
            _ => remap::cross_kind($cx),
        }
    };
}

/// Same for payload-less kinds, which only ever compare their text
macro_rules! same_leaf {
    ($cx:ident, $src:ident, $variant:ident) => {
        match &$src.data {
            NodeData::$variant => {
                literals::leaf($cx);
            }
            _ => remap::cross_kind($cx),
        }
    };
}

/// Compute the anchors for the node pair held by `cx`
pub fn align_node(cx: &mut RuleContext<'_>) {
    let src = cx.src.node;
    let out = cx.out.node;
    match &out.data {
        NodeData::Program(_) => {}
        NodeData::ExpressionStatement(o) => {
            same_kind!(cx, src, ExpressionStatement, o, statements::expression_statement)
        }
        NodeData::BlockStatement(o) => same_kind!(cx, src, BlockStatement, o, statements::block),
        NodeData::EmptyStatement => same_leaf!(cx, src, EmptyStatement),
        NodeData::DebuggerStatement => same_leaf!(cx, src, DebuggerStatement),
        NodeData::IfStatement(o) => same_kind!(cx, src, IfStatement, o, statements::if_statement),
        NodeData::ForStatement(o) => same_kind!(cx, src, ForStatement, o, statements::for_statement),
        NodeData::ForInStatement(o) => same_kind!(cx, src, ForInStatement, o, statements::for_in),
        NodeData::ForOfStatement(o) => same_kind!(cx, src, ForOfStatement, o, statements::for_of),
        NodeData::WhileStatement(o) => {
            same_kind!(cx, src, WhileStatement, o, statements::while_statement)
        }
        NodeData::DoWhileStatement(o) => same_kind!(cx, src, DoWhileStatement, o, statements::do_while),
        NodeData::WithStatement(o) => same_kind!(cx, src, WithStatement, o, statements::with_statement),
        NodeData::BreakStatement(o) => same_kind!(cx, src, BreakStatement, o, statements::break_statement),
        NodeData::ContinueStatement(o) => {
            same_kind!(cx, src, ContinueStatement, o, statements::continue_statement)
        }
        NodeData::ReturnStatement(o) => {
            same_kind!(cx, src, ReturnStatement, o, statements::return_statement)
        }
        NodeData::ThrowStatement(o) => same_kind!(cx, src, ThrowStatement, o, statements::throw_statement),
        NodeData::SwitchStatement(o) => same_kind!(cx, src, SwitchStatement, o, statements::switch),
        NodeData::SwitchCase(o) => same_kind!(cx, src, SwitchCase, o, statements::switch_case),
        NodeData::TryStatement(o) => same_kind!(cx, src, TryStatement, o, statements::try_statement),
        NodeData::CatchClause(o) => same_kind!(cx, src, CatchClause, o, statements::catch_clause),
        NodeData::LabeledStatement(o) => same_kind!(cx, src, LabeledStatement, o, statements::labeled),
        NodeData::VariableDeclaration(o) => {
            same_kind!(cx, src, VariableDeclaration, o, statements::variable_declaration)
        }
        NodeData::VariableDeclarator(o) => {
            same_kind!(cx, src, VariableDeclarator, o, statements::variable_declarator)
        }
        NodeData::FunctionDeclaration(o) => same_kind!(cx, src, FunctionDeclaration, o, functions::function),
        NodeData::FunctionExpression(o) => same_kind!(cx, src, FunctionExpression, o, functions::function),
        NodeData::ArrowFunctionExpression(o) => {
            same_kind!(cx, src, ArrowFunctionExpression, o, functions::arrow)
        }
        NodeData::ImportDeclaration(o) => same_kind!(cx, src, ImportDeclaration, o, modules::import_declaration),
        NodeData::ImportSpecifier(o) => same_kind!(cx, src, ImportSpecifier, o, modules::import_specifier),
        // `import a from` has no fixed token of its own beyond the local name
        NodeData::ImportDefaultSpecifier(_) => match &src.data {
            NodeData::ImportDefaultSpecifier(_) => {}
            _ => remap::cross_kind(cx),
        },
        NodeData::ImportNamespaceSpecifier(o) => {
            same_kind!(cx, src, ImportNamespaceSpecifier, o, modules::import_namespace)
        }
        NodeData::Identifier(o) => same_kind!(cx, src, Identifier, o, literals::identifier),
        NodeData::NumericLiteral(o) => same_kind!(cx, src, NumericLiteral, o, literals::numeric),
        NodeData::BigIntLiteral(o) => same_kind!(cx, src, BigIntLiteral, o, literals::bigint),
        NodeData::StringLiteral(o) => same_kind!(cx, src, StringLiteral, o, literals::string),
        NodeData::BooleanLiteral(o) => same_kind!(cx, src, BooleanLiteral, o, literals::boolean),
        NodeData::NullLiteral => same_leaf!(cx, src, NullLiteral),
        NodeData::RegExpLiteral(o) => same_kind!(cx, src, RegExpLiteral, o, literals::regexp),
        NodeData::TemplateLiteral(o) => same_kind!(cx, src, TemplateLiteral, o, literals::template),
        NodeData::TemplateElement(o) => same_kind!(cx, src, TemplateElement, o, literals::template_element),
        // tag and quasi carry their own ranges
        NodeData::TaggedTemplateExpression(_) => match &src.data {
            NodeData::TaggedTemplateExpression(_) => {}
            _ => remap::cross_kind(cx),
        },
        NodeData::ThisExpression => same_leaf!(cx, src, ThisExpression),
        NodeData::Super => same_leaf!(cx, src, Super),
        NodeData::ArrayExpression(o) => same_kind!(cx, src, ArrayExpression, o, collections::array),
        NodeData::ArrayPattern(o) => same_kind!(cx, src, ArrayPattern, o, collections::array),
        NodeData::ObjectExpression(o) => same_kind!(cx, src, ObjectExpression, o, collections::object),
        NodeData::ObjectPattern(o) => same_kind!(cx, src, ObjectPattern, o, collections::object),
        NodeData::ObjectProperty(o) => same_kind!(cx, src, ObjectProperty, o, collections::property),
        NodeData::ObjectMethod(o) => same_kind!(cx, src, ObjectMethod, o, functions::object_method),
        NodeData::SpreadElement(o) => same_kind!(cx, src, SpreadElement, o, expressions::spread),
        NodeData::RestElement(o) => same_kind!(cx, src, RestElement, o, expressions::spread),
        NodeData::AssignmentPattern(o) => {
            same_kind!(cx, src, AssignmentPattern, o, expressions::assignment_pattern)
        }
        NodeData::UnaryExpression(o) => same_kind!(cx, src, UnaryExpression, o, expressions::unary),
        NodeData::UpdateExpression(o) => same_kind!(cx, src, UpdateExpression, o, expressions::update),
        NodeData::BinaryExpression(o) => same_kind!(cx, src, BinaryExpression, o, expressions::binary),
        NodeData::LogicalExpression(o) => same_kind!(cx, src, LogicalExpression, o, expressions::binary),
        NodeData::AssignmentExpression(o) => {
            same_kind!(cx, src, AssignmentExpression, o, expressions::binary)
        }
        NodeData::ConditionalExpression(o) => {
            same_kind!(cx, src, ConditionalExpression, o, expressions::conditional)
        }
        NodeData::CallExpression(o) => same_kind!(cx, src, CallExpression, o, expressions::call),
        NodeData::OptionalCallExpression(o) => {
            same_kind!(cx, src, OptionalCallExpression, o, expressions::call)
        }
        NodeData::NewExpression(o) => same_kind!(cx, src, NewExpression, o, expressions::new_expression),
        NodeData::MemberExpression(o) => same_kind!(cx, src, MemberExpression, o, expressions::member),
        NodeData::OptionalMemberExpression(o) => {
            same_kind!(cx, src, OptionalMemberExpression, o, expressions::member)
        }
        NodeData::SequenceExpression(o) => same_kind!(cx, src, SequenceExpression, o, expressions::sequence),
        NodeData::YieldExpression(o) => same_kind!(cx, src, YieldExpression, o, expressions::yield_expression),
        NodeData::AwaitExpression(o) => same_kind!(cx, src, AwaitExpression, o, expressions::await_expression),
        NodeData::DoExpression(o) => same_kind!(cx, src, DoExpression, o, expressions::do_expression),
        NodeData::BindExpression(o) => same_kind!(cx, src, BindExpression, o, expressions::bind),
        NodeData::MetaProperty(o) => same_kind!(cx, src, MetaProperty, o, expressions::meta_property),
        NodeData::JsxElement(o) => same_kind!(cx, src, JsxElement, o, jsx::element),
        NodeData::JsxAttribute(o) => same_kind!(cx, src, JsxAttribute, o, jsx::attribute),
        NodeData::JsxIdentifier(o) => same_kind!(cx, src, JsxIdentifier, o, jsx::identifier),
        NodeData::JsxText(o) => same_kind!(cx, src, JsxText, o, jsx::text),
        NodeData::JsxExpressionContainer(o) => {
            same_kind!(cx, src, JsxExpressionContainer, o, jsx::expression_container)
        }
    }
}

/// Anchor `token` where both nodes start with it
pub(crate) fn leading(cx: &mut RuleContext<'_>, token: &str) {
    let at = cx.sides(|side| side.leading(token));
    cx.token(at, token);
}

/// Anchor `token` where both nodes end with it
pub(crate) fn trailing(cx: &mut RuleContext<'_>, token: &str) {
    let at = cx.sides(|side| side.trailing(token));
    cx.token(at, token);
}

/// Separator after item `i` of a list, searched up to the next item or `close`
fn separator_after(
    side: &Side<'_>,
    items: &[Option<NodeId>],
    i: usize,
    close: TextSize,
    sep: &str,
) -> Option<TextSize> {
    let from = side.outer_end((*items.get(i)?)?)?;
    let to = match items.get(i + 1) {
        Some(next) => side.outer_start((*next)?)?,
        None => close,
    };
    side.find(from, to, sep)
}

fn touches_hole(items: &[Option<NodeId>], i: usize) -> bool {
    items[i].is_none() || items.get(i + 1).is_some_and(Option::is_none)
}

/// Anchor the separators of two lists item by item
///
/// `close` is where the list ends on each side (the closing delimiter or the
/// node end). A trailing separator, or one the other list has no item for,
/// is anchored only when both buffers actually contain it.
pub(crate) fn separators(
    cx: &mut RuleContext<'_>,
    items: (&[NodeId], &[NodeId]),
    close: (Option<TextSize>, Option<TextSize>),
    sep: &str,
) {
    let src: Vec<_> = items.0.iter().copied().map(Some).collect();
    let out: Vec<_> = items.1.iter().copied().map(Some).collect();
    separators_with_holes(cx, (&src, &out), close, sep);
}

/// [`separators`] for lists that may contain holes
///
/// A separator next to a hole on either side is not anchored: without
/// pairing hole for hole the offsets are ambiguous, so the node reports it.
pub(crate) fn separators_with_holes(
    cx: &mut RuleContext<'_>,
    items: (&[Option<NodeId>], &[Option<NodeId>]),
    close: (Option<TextSize>, Option<TextSize>),
    sep: &str,
) {
    let (src_items, out_items) = items;
    let (Some(src_close), Some(out_close)) = close else {
        return;
    };
    let mut declined = None;
    for i in 0..src_items.len().min(out_items.len()) {
        if touches_hole(src_items, i) || touches_hole(out_items, i) {
            declined.get_or_insert(i);
            continue;
        }
        let at = (
            separator_after(&cx.src, src_items, i, src_close, sep),
            separator_after(&cx.out, out_items, i, out_close, sep),
        );
        cx.token(at, sep);
    }
    if let Some(first) = declined {
        cx.ambiguous(format!(
            "sparse collection: separator after element {first} sits next to a hole"
        ));
    }
}
