//! Functions, arrows and object methods

use super::{leading, separators};
use crate::context::{RuleContext, Side};
use morphmap_core::TextSize;
use morphmap_core::tree::{ArrowFunction, Function, MethodKind, NodeId, ObjectMethod};

/// Opening and closing parenthesis of a parameter list
///
/// The list starts after `from` and ends before `body`.
fn param_parens(
    side: &Side<'_>,
    from: TextSize,
    params: &[NodeId],
    body: NodeId,
) -> (Option<TextSize>, Option<TextSize>) {
    let body_start = side.outer_start(body);
    let first = match params.first() {
        Some(param) => side.outer_start(*param),
        None => body_start,
    };
    let open = first.and_then(|to| side.find(from, to, "("));
    let last = match params.last() {
        Some(param) => side.outer_end(*param),
        None => open.map(|o| o + TextSize::from(1)),
    };
    let close = last
        .zip(body_start)
        .and_then(|(from, to)| side.rfind(from, to, ")"));
    (open, close)
}

fn anchor_params(
    cx: &mut RuleContext<'_>,
    src: (Option<TextSize>, Option<TextSize>),
    out: (Option<TextSize>, Option<TextSize>),
    params: (&[NodeId], &[NodeId]),
) {
    cx.token((src.0, out.0), "(");
    separators(cx, params, (src.1, out.1), ",");
    cx.token((src.1, out.1), ")");
}

/// The `function` keyword and the start of the name or parameter list after it
fn function_head(side: &Side<'_>, n: &Function) -> Option<(TextSize, TextSize)> {
    let limit = n
        .id
        .or(n.params.first().copied())
        .and_then(|id| side.outer_start(id))
        .or(side.outer_start(n.body))?;
    let keyword = side.find(side.start(), limit, "function")?;
    Some((keyword, limit))
}

/// `async function* name(params) { body }`
pub(super) fn function(cx: &mut RuleContext<'_>, s: &Function, o: &Function) {
    if s.is_async && o.is_async {
        leading(cx, "async");
    }
    let head = cx.both(s, o, function_head);
    cx.token((head.0.map(|h| h.0), head.1.map(|h| h.0)), "function");

    if s.generator && o.generator {
        let star = |side: &Side<'_>, head: Option<(TextSize, TextSize)>| {
            let (keyword, limit) = head?;
            side.find(keyword + TextSize::of("function"), limit, "*")
        };
        let at = (star(&cx.src, head.0), star(&cx.out, head.1));
        cx.token(at, "*");
    }

    let parens = cx.both(s, o, |side, n| {
        let from = match n.id {
            Some(id) => side.outer_end(id)?,
            None => side.start(),
        };
        Some(param_parens(side, from, &n.params, n.body))
    });
    if let (Some(src), Some(out)) = parens {
        anchor_params(cx, src, out, (&s.params, &o.params));
    }
}

/// `async (params) => body`
pub(super) fn arrow(cx: &mut RuleContext<'_>, s: &ArrowFunction, o: &ArrowFunction) {
    if s.is_async && o.is_async {
        leading(cx, "async");
    }
    let parens = cx.both(s, o, |side, n| {
        Some(param_parens(side, side.start(), &n.params, n.body))
    });
    if let (Some(src), Some(out)) = parens {
        anchor_params(cx, src, out, (&s.params, &o.params));
    }

    let arrow = cx.both(s, o, |side, n| {
        let from = side
            .outer_start(n.body)
            .and_then(|to| side.rfind(side.start(), to, ")"))
            .map(|close| close + TextSize::from(1));
        let from = match n.params.last() {
            Some(last) => side.outer_end(*last).max(from),
            None => from,
        }
        .unwrap_or(side.start());
        side.find(from, side.outer_start(n.body)?, "=>")
    });
    cx.token(arrow, "=>");
}

/// `get [key](params) { body }` and friends inside an object literal
pub(super) fn object_method(cx: &mut RuleContext<'_>, s: &ObjectMethod, o: &ObjectMethod) {
    if s.is_async && o.is_async {
        leading(cx, "async");
    }
    if s.kind == o.kind {
        match s.kind {
            MethodKind::Get => leading(cx, "get"),
            MethodKind::Set => leading(cx, "set"),
            MethodKind::Method => {}
        }
    }
    if s.generator && o.generator {
        let star = cx.both(s, o, |side, n| side.before(n.key, "*"));
        cx.token(star, "*");
    }
    if s.computed && o.computed {
        let open = cx.both(s, o, |side, n| {
            side.rfind(side.start(), side.outer_start(n.key)?, "[")
        });
        cx.token(open, "[");
        let close = cx.both(s, o, |side, n| {
            let to = match n.params.first() {
                Some(param) => side.outer_start(*param)?,
                None => side.outer_start(n.body)?,
            };
            side.find(side.outer_end(n.key)?, to, "]")
        });
        cx.token(close, "]");
    }

    let parens = cx.both(s, o, |side, n| {
        Some(param_parens(side, side.outer_end(n.key)?, &n.params, n.body))
    });
    if let (Some(src), Some(out)) = parens {
        anchor_params(cx, src, out, (&s.params, &o.params));
    }
}

/// `(a, b) => body` lowered to `function (a, b) { body }`
pub(crate) fn arrow_to_function(cx: &mut RuleContext<'_>, s: &ArrowFunction, o: &Function) {
    if s.is_async && o.is_async {
        leading(cx, "async");
    }
    let src = param_parens(&cx.src, cx.src.start(), &s.params, s.body);
    let out_from = match o.id {
        Some(id) => cx.out.outer_end(id),
        None => Some(cx.out.start()),
    };
    let Some(out_from) = out_from else { return };
    let out = param_parens(&cx.out, out_from, &o.params, o.body);
    anchor_params(cx, src, out, (&s.params, &o.params));
}
