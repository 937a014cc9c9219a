//! JSX rules

use super::{leading, literals, trailing};
use crate::context::{RuleContext, Side};
use morphmap_core::TextSize;
use morphmap_core::tree::{Identifier, JsxAttribute, JsxElement, JsxExpressionContainer, JsxText};

/// End of the opening tag: the `>` after the name and attributes
fn opening_close(side: &Side<'_>, n: &JsxElement) -> Option<TextSize> {
    let last = n.attributes.last().copied().unwrap_or(n.name);
    let to = match n.children.first() {
        Some(child) => side.outer_start(*child)?,
        None => side.end(),
    };
    side.find(side.outer_end(last)?, to, ">")
}

/// `<name attr>children</name>` or `<name attr />`
pub(super) fn element(cx: &mut RuleContext<'_>, s: &JsxElement, o: &JsxElement) {
    leading(cx, "<");
    if s.self_closing != o.self_closing {
        return;
    }
    if s.self_closing {
        trailing(cx, "/>");
        return;
    }
    let open_end = cx.both(s, o, opening_close);
    cx.token(open_end, ">");
    let closing = cx.both(s, o, |side, n| {
        let from = match n.children.last() {
            Some(child) => side.outer_end(*child)?,
            None => opening_close(side, n)?,
        };
        side.rfind(from, side.end(), "</")
    });
    cx.token(closing, "</");
    trailing(cx, ">");
}

/// `name="value"` or `name={value}`
pub(super) fn attribute(cx: &mut RuleContext<'_>, s: &JsxAttribute, o: &JsxAttribute) {
    if s.value.is_none() || o.value.is_none() {
        return;
    }
    let equals = cx.both(s, o, |side, n| side.between(n.name, n.value?, "="));
    cx.token(equals, "=");
}

pub(super) fn identifier(cx: &mut RuleContext<'_>, _s: &Identifier, _o: &Identifier) {
    literals::leaf(cx);
}

pub(super) fn text(cx: &mut RuleContext<'_>, _s: &JsxText, _o: &JsxText) {
    literals::leaf(cx);
}

/// `{expression}`
pub(super) fn expression_container(
    cx: &mut RuleContext<'_>,
    _s: &JsxExpressionContainer,
    _o: &JsxExpressionContainer,
) {
    leading(cx, "{");
    trailing(cx, "}");
}
