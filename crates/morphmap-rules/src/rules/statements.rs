//! Statement rules

use super::{leading, separators, trailing};
use crate::context::{RuleContext, Side};
use morphmap_core::TextSize;
use morphmap_core::tree::{
    ArgumentStatement, BlockStatement, CatchClause, ExpressionStatement, ForInStatement,
    ForOfStatement, ForStatement, IfStatement, JumpStatement, LabeledStatement, SwitchCase,
    SwitchStatement, TryStatement, VariableDeclaration, VariableDeclarator, WhileStatement,
    WithStatement,
};

/// `expression;`
pub(super) fn expression_statement(
    cx: &mut RuleContext<'_>,
    _s: &ExpressionStatement,
    _o: &ExpressionStatement,
) {
    trailing(cx, ";");
}

/// `{ body }`
pub(super) fn block(cx: &mut RuleContext<'_>, _s: &BlockStatement, _o: &BlockStatement) {
    leading(cx, "{");
    trailing(cx, "}");
}

/// `if (test) consequent else alternate`
pub(super) fn if_statement(cx: &mut RuleContext<'_>, s: &IfStatement, o: &IfStatement) {
    leading(cx, "if");
    let open = cx.both(s, o, |side, n| side.before(n.test, "("));
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.between(n.test, n.consequent, ")"));
    cx.token(close, ")");
    if s.alternate.is_some() && o.alternate.is_some() {
        let keyword = cx.both(s, o, |side, n| side.between(n.consequent, n.alternate?, "else"));
        cx.token(keyword, "else");
    }
}

struct ForTokens {
    open: Option<TextSize>,
    first: Option<TextSize>,
    second: Option<TextSize>,
    close: Option<TextSize>,
}

fn for_tokens(side: &Side<'_>, n: &ForStatement) -> ForTokens {
    let one = TextSize::from(1);
    let body = side.outer_start(n.body);
    let head_start = [n.init, n.test, n.update]
        .into_iter()
        .flatten()
        .find_map(|id| side.outer_start(id))
        .or(body);
    let open = head_start.and_then(|to| side.find(side.start(), to, "("));

    let first_from = n.init.and_then(|id| side.outer_end(id)).or(open.map(|o| o + one));
    let first_to = [n.test, n.update]
        .into_iter()
        .flatten()
        .find_map(|id| side.outer_start(id))
        .or(body);
    let first = first_from
        .zip(first_to)
        .and_then(|(from, to)| side.find(from, to, ";"));

    let second_from = n.test.and_then(|id| side.outer_end(id)).or(first.map(|f| f + one));
    let second_to = n.update.and_then(|id| side.outer_start(id)).or(body);
    let second = second_from
        .zip(second_to)
        .and_then(|(from, to)| side.find(from, to, ";"));

    let close_from = n.update.and_then(|id| side.outer_end(id)).or(second.map(|s| s + one));
    let close = close_from
        .zip(body)
        .and_then(|(from, to)| side.rfind(from, to, ")"));

    ForTokens {
        open,
        first,
        second,
        close,
    }
}

/// `for (init; test; update) body`, every clause optional
pub(super) fn for_statement(cx: &mut RuleContext<'_>, s: &ForStatement, o: &ForStatement) {
    leading(cx, "for");
    let src = for_tokens(&cx.src, s);
    let out = for_tokens(&cx.out, o);
    cx.token((src.open, out.open), "(");
    cx.token((src.first, out.first), ";");
    cx.token((src.second, out.second), ";");
    cx.token((src.close, out.close), ")");
}

/// `for (left in right) body`
pub(super) fn for_in(cx: &mut RuleContext<'_>, s: &ForInStatement, o: &ForInStatement) {
    leading(cx, "for");
    let open = cx.both(s, o, |side, n| side.before(n.left, "("));
    cx.token(open, "(");
    let keyword = cx.both(s, o, |side, n| side.between(n.left, n.right, "in"));
    cx.token(keyword, "in");
    let close = cx.both(s, o, |side, n| {
        side.rfind(side.outer_end(n.right)?, side.outer_start(n.body)?, ")")
    });
    cx.token(close, ")");
}

/// `for await (left of right) body`
pub(super) fn for_of(cx: &mut RuleContext<'_>, s: &ForOfStatement, o: &ForOfStatement) {
    leading(cx, "for");
    if s.is_await && o.is_await {
        let keyword = cx.both(s, o, |side, n| side.before(n.left, "await"));
        cx.token(keyword, "await");
    }
    let open = cx.both(s, o, |side, n| side.before(n.left, "("));
    cx.token(open, "(");
    let keyword = cx.both(s, o, |side, n| side.between(n.left, n.right, "of"));
    cx.token(keyword, "of");
    let close = cx.both(s, o, |side, n| {
        side.rfind(side.outer_end(n.right)?, side.outer_start(n.body)?, ")")
    });
    cx.token(close, ")");
}

/// `while (test) body`
pub(super) fn while_statement(cx: &mut RuleContext<'_>, s: &WhileStatement, o: &WhileStatement) {
    leading(cx, "while");
    let open = cx.both(s, o, |side, n| side.before(n.test, "("));
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.between(n.test, n.body, ")"));
    cx.token(close, ")");
}

/// `do body while (test);`
pub(super) fn do_while(cx: &mut RuleContext<'_>, s: &WhileStatement, o: &WhileStatement) {
    leading(cx, "do");
    let keyword = cx.both(s, o, |side, n| side.between(n.body, n.test, "while"));
    cx.token(keyword, "while");
    let open = cx.both(s, o, |side, n| {
        side.rfind(side.outer_end(n.body)?, side.outer_start(n.test)?, "(")
    });
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.after(n.test, ")"));
    cx.token(close, ")");
    trailing(cx, ";");
}

/// `with (object) body`
pub(super) fn with_statement(cx: &mut RuleContext<'_>, s: &WithStatement, o: &WithStatement) {
    leading(cx, "with");
    let open = cx.both(s, o, |side, n| side.before(n.object, "("));
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.between(n.object, n.body, ")"));
    cx.token(close, ")");
}

fn prefixed(cx: &mut RuleContext<'_>, keyword: &str) {
    leading(cx, keyword);
    trailing(cx, ";");
}

pub(super) fn break_statement(cx: &mut RuleContext<'_>, _s: &JumpStatement, _o: &JumpStatement) {
    prefixed(cx, "break");
}

pub(super) fn continue_statement(
    cx: &mut RuleContext<'_>,
    _s: &JumpStatement,
    _o: &JumpStatement,
) {
    prefixed(cx, "continue");
}

pub(super) fn return_statement(
    cx: &mut RuleContext<'_>,
    _s: &ArgumentStatement,
    _o: &ArgumentStatement,
) {
    prefixed(cx, "return");
}

pub(super) fn throw_statement(
    cx: &mut RuleContext<'_>,
    _s: &ArgumentStatement,
    _o: &ArgumentStatement,
) {
    prefixed(cx, "throw");
}

/// `switch (discriminant) { cases }`
pub(super) fn switch(cx: &mut RuleContext<'_>, s: &SwitchStatement, o: &SwitchStatement) {
    leading(cx, "switch");
    let open = cx.both(s, o, |side, n| side.before(n.discriminant, "("));
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.after(n.discriminant, ")"));
    cx.token(close, ")");
    let brace = cx.both(s, o, |side, n| {
        let close = side.after(n.discriminant, ")")?;
        let to = match n.cases.first() {
            Some(case) => side.outer_start(*case)?,
            None => side.end(),
        };
        side.find(close, to, "{")
    });
    cx.token(brace, "{");
    trailing(cx, "}");
}

fn case_colon(side: &Side<'_>, n: &SwitchCase) -> Option<TextSize> {
    let from = match n.test {
        Some(test) => side.outer_end(test)?,
        None => side.leading("default")? + TextSize::of("default"),
    };
    let to = match n.consequent.first() {
        Some(first) => side.outer_start(*first)?,
        None => side.end(),
    };
    side.find(from, to, ":")
}

/// `case test: consequent` or `default: consequent`
pub(super) fn switch_case(cx: &mut RuleContext<'_>, s: &SwitchCase, o: &SwitchCase) {
    match (s.test, o.test) {
        (Some(_), Some(_)) => leading(cx, "case"),
        (None, None) => leading(cx, "default"),
        _ => return,
    }
    let colon = cx.both(s, o, case_colon);
    cx.token(colon, ":");
}

/// `try block catch finally`
pub(super) fn try_statement(cx: &mut RuleContext<'_>, s: &TryStatement, o: &TryStatement) {
    leading(cx, "try");
    if s.finalizer.is_some() && o.finalizer.is_some() {
        let keyword = cx.both(s, o, |side, n| {
            let before = n.handler.unwrap_or(n.block);
            side.between(before, n.finalizer?, "finally")
        });
        cx.token(keyword, "finally");
    }
}

/// `catch (param) body`
pub(super) fn catch_clause(cx: &mut RuleContext<'_>, s: &CatchClause, o: &CatchClause) {
    leading(cx, "catch");
    if s.param.is_none() || o.param.is_none() {
        return;
    }
    let open = cx.both(s, o, |side, n| side.before(n.param?, "("));
    cx.token(open, "(");
    let close = cx.both(s, o, |side, n| side.between(n.param?, n.body, ")"));
    cx.token(close, ")");
}

/// `label: body`
pub(super) fn labeled(cx: &mut RuleContext<'_>, s: &LabeledStatement, o: &LabeledStatement) {
    let colon = cx.both(s, o, |side, n| side.between(n.label, n.body, ":"));
    cx.token(colon, ":");
}

/// `kind a = 1, b;`
///
/// The keyword may have been rewritten (`const` to `var`); that becomes a
/// per-character substitution.
pub(super) fn variable_declaration(
    cx: &mut RuleContext<'_>,
    s: &VariableDeclaration,
    o: &VariableDeclaration,
) {
    let at = (cx.src.leading(&s.kind), cx.out.leading(&o.kind));
    cx.token_or_substitute(at, &s.kind, &o.kind);
    let close = cx.sides(|side| Some(side.end()));
    separators(cx, (&s.declarations, &o.declarations), close, ",");
    trailing(cx, ";");
}

/// `id = init`
pub(super) fn variable_declarator(
    cx: &mut RuleContext<'_>,
    s: &VariableDeclarator,
    o: &VariableDeclarator,
) {
    if s.init.is_none() || o.init.is_none() {
        return;
    }
    let equals = cx.both(s, o, |side, n| side.between(n.id, n.init?, "="));
    cx.token(equals, "=");
}
