//! Array and object literals and patterns

use super::{leading, separators, separators_with_holes, trailing};
use crate::context::RuleContext;
use morphmap_core::tree::{ArrayLike, ObjectLike, ObjectProperty};

/// `[a, , b]`
pub(super) fn array(cx: &mut RuleContext<'_>, s: &ArrayLike, o: &ArrayLike) {
    leading(cx, "[");
    let close = cx.sides(|side| side.trailing("]"));
    separators_with_holes(cx, (&s.elements, &o.elements), close, ",");
    cx.token(close, "]");
}

/// `{ a, b: c }`
pub(super) fn object(cx: &mut RuleContext<'_>, s: &ObjectLike, o: &ObjectLike) {
    leading(cx, "{");
    let close = cx.sides(|side| side.trailing("}"));
    separators(cx, (&s.properties, &o.properties), close, ",");
    trailing(cx, "}");
}

/// `key: value`, `[key]: value` or shorthand `key`
pub(super) fn property(cx: &mut RuleContext<'_>, s: &ObjectProperty, o: &ObjectProperty) {
    if s.computed && o.computed {
        let open = cx.both(s, o, |side, n| {
            side.rfind(side.start(), side.outer_start(n.key)?, "[")
        });
        cx.token(open, "[");
        let close = cx.both(s, o, |side, n| side.between(n.key, n.value, "]"));
        cx.token(close, "]");
    }
    if s.shorthand || o.shorthand {
        return;
    }
    let colon = cx.both(s, o, |side, n| side.between(n.key, n.value, ":"));
    cx.token(colon, ":");
}
