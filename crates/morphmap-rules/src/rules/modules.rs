//! Import declarations

use super::{leading, separators, trailing};
use crate::context::{RuleContext, Side};
use morphmap_core::TextSize;
use morphmap_core::tree::{ImportDeclaration, ImportLocal, ImportSpecifier};

fn from_keyword(side: &Side<'_>, n: &ImportDeclaration) -> Option<TextSize> {
    let from = match n.specifiers.last() {
        Some(last) => side.outer_end(*last)?,
        None => side.start(),
    };
    side.find(from, side.outer_start(n.source)?, "from")
}

/// `import a, { b as c } from "m";`
pub(super) fn import_declaration(
    cx: &mut RuleContext<'_>,
    s: &ImportDeclaration,
    o: &ImportDeclaration,
) {
    leading(cx, "import");

    let open = cx.both(s, o, |side, n| side.before(n.source, "{"));
    cx.token(open, "{");
    let from = cx.both(s, o, from_keyword);
    separators(cx, (&s.specifiers, &o.specifiers), from, ",");
    let close = cx.both(s, o, |side, n| {
        side.rfind(side.start(), side.outer_start(n.source)?, "}")
    });
    cx.token(close, "}");
    cx.token(from, "from");
    trailing(cx, ";");
}

/// `imported as local`
pub(super) fn import_specifier(cx: &mut RuleContext<'_>, s: &ImportSpecifier, o: &ImportSpecifier) {
    if s.imported == s.local || o.imported == o.local {
        return;
    }
    let keyword = cx.both(s, o, |side, n| side.between(n.imported, n.local, "as"));
    cx.token(keyword, "as");
}

/// `* as local`
pub(super) fn import_namespace(cx: &mut RuleContext<'_>, s: &ImportLocal, o: &ImportLocal) {
    leading(cx, "*");
    let keyword = cx.both(s, o, |side, n| side.before(n.local, "as"));
    cx.token(keyword, "as");
}
