//! Leaves: identifiers and literals
//!
//! Leaves have no fixed tokens, so the default is identity: identical text
//! on both sides maps 1:1. Literals whose text a transform rewrites are
//! handled piecewise (delimiters, then the body when unchanged).

use crate::context::{RuleContext, Side};
use crate::remap;
use morphmap_core::TextSize;
use morphmap_core::tree::{
    BigIntLiteral, BooleanLiteral, Identifier, NumericLiteral, RegExpLiteral, StringLiteral,
    TemplateElement, TemplateLiteral,
};

/// Map identical leaf text 1:1
///
/// Returns whether the texts were identical, regardless of whether
/// identity anchoring is enabled.
pub(crate) fn leaf(cx: &mut RuleContext<'_>) -> bool {
    let (Some(src), Some(out)) = (cx.src.slice(), cx.out.slice()) else {
        return false;
    };
    if src != out {
        return false;
    }
    if cx.options.identity_leaves {
        cx.run(cx.src.start(), cx.out.start(), TextSize::of(src));
    }
    true
}

/// Renamed identifiers have nothing to anchor
pub(super) fn identifier(cx: &mut RuleContext<'_>, _s: &Identifier, _o: &Identifier) {
    leaf(cx);
}

fn has_separators(side: &Side<'_>) -> bool {
    side.slice().is_some_and(|text| text.contains('_'))
}

fn number_like(cx: &mut RuleContext<'_>) {
    if leaf(cx) {
        return;
    }
    if has_separators(&cx.src) && !has_separators(&cx.out) {
        remap::numeric_separators(cx);
    }
}

/// `1_000` becomes `1000`
pub(super) fn numeric(cx: &mut RuleContext<'_>, _s: &NumericLiteral, _o: &NumericLiteral) {
    number_like(cx);
}

pub(super) fn bigint(cx: &mut RuleContext<'_>, _s: &BigIntLiteral, _o: &BigIntLiteral) {
    number_like(cx);
}

pub(super) fn boolean(cx: &mut RuleContext<'_>, _s: &BooleanLiteral, _o: &BooleanLiteral) {
    leaf(cx);
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Offsets of the opening and closing quote of a string literal node
fn quotes(side: &Side<'_>) -> Option<(TextSize, TextSize)> {
    let open = side.start();
    let close = side.end().checked_sub(TextSize::from(1))?;
    if close <= open {
        return None;
    }
    let quoted =
        side.char_at(open).is_some_and(is_quote) && side.char_at(close).is_some_and(is_quote);
    quoted.then_some((open, close))
}

/// `'a'` to `"a"`: quote substitutions plus the unchanged body
pub(super) fn string(cx: &mut RuleContext<'_>, _s: &StringLiteral, _o: &StringLiteral) {
    if leaf(cx) {
        return;
    }
    let (Some(src), Some(out)) = (quotes(&cx.src), quotes(&cx.out)) else {
        return;
    };
    cx.substitute(src.0, out.0);
    let one = TextSize::from(1);
    if src.1 - src.0 == out.1 - out.0 {
        cx.run(src.0 + one, out.0 + one, src.1 - src.0 - one);
    }
    cx.substitute(src.1, out.1);
}

/// `/pattern/flags`
pub(super) fn regexp(cx: &mut RuleContext<'_>, s: &RegExpLiteral, o: &RegExpLiteral) {
    if leaf(cx) {
        return;
    }
    let open = cx.sides(|side| side.leading("/"));
    cx.token(open, "/");
    let close = cx.sides(|side| side.rfind(side.start() + TextSize::from(1), side.end(), "/"));
    cx.token(close, "/");
    let (Some(src_close), Some(out_close)) = close else {
        return;
    };
    let one = TextSize::from(1);
    if s.pattern == o.pattern {
        cx.run(cx.src.start() + one, cx.out.start() + one, TextSize::of(s.pattern.as_str()));
    }
    if s.flags == o.flags && !s.flags.is_empty() {
        cx.run(src_close + one, out_close + one, TextSize::of(s.flags.as_str()));
    }
}

/// `` `a${b}c` ``: backticks and the `${`/`}` around each substitution
pub(super) fn template(cx: &mut RuleContext<'_>, s: &TemplateLiteral, o: &TemplateLiteral) {
    let open = cx.sides(|side| side.leading("`"));
    cx.token(open, "`");
    for (src_expr, out_expr) in s.expressions.iter().zip(&o.expressions) {
        let open = (
            cx.src
                .outer_start(*src_expr)
                .and_then(|to| cx.src.rfind(cx.src.start(), to, "${")),
            cx.out
                .outer_start(*out_expr)
                .and_then(|to| cx.out.rfind(cx.out.start(), to, "${")),
        );
        cx.token(open, "${");
        let close = (cx.src.after(*src_expr, "}"), cx.out.after(*out_expr, "}"));
        cx.token(close, "}");
    }
    let close = cx.sides(|side| side.trailing("`"));
    cx.token(close, "`");
}

pub(super) fn template_element(
    cx: &mut RuleContext<'_>,
    _s: &TemplateElement,
    _o: &TemplateElement,
) {
    leaf(cx);
}
