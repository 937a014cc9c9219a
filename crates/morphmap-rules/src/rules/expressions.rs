//! Expression rules

use super::{leading, separators, trailing};
use crate::context::{RuleContext, Side};
use morphmap_core::TextSize;
use morphmap_core::tree::{
    AssignmentPattern, AwaitExpression, BinaryLike, BindExpression, Call, ConditionalExpression,
    DoExpression, Member, MetaProperty, SequenceExpression, Spread, UnaryExpression,
    UpdateExpression, YieldExpression,
};

/// `...argument`
pub(super) fn spread(cx: &mut RuleContext<'_>, _s: &Spread, _o: &Spread) {
    leading(cx, "...");
}

/// `left = right` in binding position
pub(super) fn assignment_pattern(
    cx: &mut RuleContext<'_>,
    s: &AssignmentPattern,
    o: &AssignmentPattern,
) {
    let equals = cx.both(s, o, |side, n| side.between(n.left, n.right, "="));
    cx.token(equals, "=");
}

pub(super) fn unary(cx: &mut RuleContext<'_>, s: &UnaryExpression, o: &UnaryExpression) {
    let at = cx.both(s, o, |side, n| side.leading(&n.operator));
    cx.token_or_substitute(at, &s.operator, &o.operator);
}

/// `++x` or `x++`; a prefix/postfix flip leaves the operator unanchored
pub(super) fn update(cx: &mut RuleContext<'_>, s: &UpdateExpression, o: &UpdateExpression) {
    if s.prefix != o.prefix {
        return;
    }
    let at = if s.prefix {
        cx.both(s, o, |side, n| side.leading(&n.operator))
    } else {
        cx.both(s, o, |side, n| side.trailing(&n.operator))
    };
    cx.token_or_substitute(at, &s.operator, &o.operator);
}

/// Binary, logical and assignment operators
///
/// A rewritten operator (`**` to `*`) becomes a substitution.
pub(super) fn binary(cx: &mut RuleContext<'_>, s: &BinaryLike, o: &BinaryLike) {
    let at = cx.both(s, o, |side, n| side.between(n.left, n.right, &n.operator));
    cx.token_or_substitute(at, &s.operator, &o.operator);
}

/// `test ? consequent : alternate`
pub(super) fn conditional(
    cx: &mut RuleContext<'_>,
    s: &ConditionalExpression,
    o: &ConditionalExpression,
) {
    let question = cx.both(s, o, |side, n| side.between(n.test, n.consequent, "?"));
    cx.token(question, "?");
    let colon = cx.both(s, o, |side, n| side.between(n.consequent, n.alternate, ":"));
    cx.token(colon, ":");
}

/// Opening parenthesis of an argument list, searched after the callee
fn open_paren(side: &Side<'_>, n: &Call) -> Option<TextSize> {
    let to = match n.arguments.first() {
        Some(first) => side.outer_start(*first)?,
        None => side.end(),
    };
    side.find(side.outer_end(n.callee)?, to, "(")
}

fn arguments(cx: &mut RuleContext<'_>, s: &Call, o: &Call) {
    let open = cx.both(s, o, open_paren);
    if open.0.is_none() || open.1.is_none() {
        return;
    }
    cx.token(open, "(");
    let close = cx.sides(|side| side.trailing(")"));
    separators(cx, (&s.arguments, &o.arguments), close, ",");
    cx.token(close, ")");
}

/// `callee(arguments)` and `callee?.(arguments)`
pub(super) fn call(cx: &mut RuleContext<'_>, s: &Call, o: &Call) {
    if s.optional && o.optional {
        let at = cx.both(s, o, |side, n| {
            side.find(side.outer_end(n.callee)?, open_paren(side, n)?, "?.")
        });
        cx.token(at, "?.");
    }
    arguments(cx, s, o);
}

/// `new callee(arguments)`; the argument list itself is optional
pub(super) fn new_expression(cx: &mut RuleContext<'_>, s: &Call, o: &Call) {
    leading(cx, "new");
    arguments(cx, s, o);
}

/// `object.property`, `object[property]` and their optional forms
pub(super) fn member(cx: &mut RuleContext<'_>, s: &Member, o: &Member) {
    if s.optional && o.optional {
        let at = cx.both(s, o, |side, n| side.between(n.object, n.property, "?."));
        cx.token(at, "?.");
    }
    if s.computed != o.computed {
        return;
    }
    if s.computed {
        let open = cx.both(s, o, |side, n| side.between(n.object, n.property, "["));
        cx.token(open, "[");
        trailing(cx, "]");
    } else if !(s.optional && o.optional) {
        let dot = cx.both(s, o, |side, n| side.between(n.object, n.property, "."));
        cx.token(dot, ".");
    }
}

/// `a, b, c`
pub(super) fn sequence(cx: &mut RuleContext<'_>, s: &SequenceExpression, o: &SequenceExpression) {
    let close = cx.sides(|side| Some(side.end()));
    separators(cx, (&s.expressions, &o.expressions), close, ",");
}

/// `yield* argument`
pub(super) fn yield_expression(
    cx: &mut RuleContext<'_>,
    s: &YieldExpression,
    o: &YieldExpression,
) {
    leading(cx, "yield");
    if s.delegate && o.delegate {
        let star = cx.both(s, o, |side, n| side.before(n.argument?, "*"));
        cx.token(star, "*");
    }
}

pub(super) fn await_expression(
    cx: &mut RuleContext<'_>,
    _s: &AwaitExpression,
    _o: &AwaitExpression,
) {
    leading(cx, "await");
}

pub(super) fn do_expression(cx: &mut RuleContext<'_>, _s: &DoExpression, _o: &DoExpression) {
    leading(cx, "do");
}

/// `object::callee` or `::callee`
pub(super) fn bind(cx: &mut RuleContext<'_>, s: &BindExpression, o: &BindExpression) {
    let at = cx.both(s, o, |side, n| match n.object {
        Some(object) => side.between(object, n.callee, "::"),
        None => side.before(n.callee, "::"),
    });
    cx.token(at, "::");
}

/// `new.target`
pub(super) fn meta_property(cx: &mut RuleContext<'_>, s: &MetaProperty, o: &MetaProperty) {
    let dot = cx.both(s, o, |side, n| side.between(n.meta, n.property, "."));
    cx.token(dot, ".");
}
