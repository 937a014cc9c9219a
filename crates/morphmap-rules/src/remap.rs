//! Shape-change remappers
//!
//! These handle predecessor/output pairs whose text was rewritten by a
//! known transformation: separators stripped from numerals, JSX lowered to
//! calls, keys unquoted, declaration keywords swapped. A pair no remapper
//! recognises is reported as unsupported; its coarse range survives.

use crate::context::RuleContext;
use crate::rules;
use morphmap_core::tree::{JsxAttribute, NodeData, ObjectProperty};
use morphmap_core::{AnchorPair, TextSize};

/// Entry point for pairs whose kinds differ
pub(crate) fn cross_kind(cx: &mut RuleContext<'_>) {
    let src = cx.src.node;
    let out = cx.out.node;
    match (&src.data, &out.data) {
        (NodeData::JsxAttribute(s), NodeData::ObjectProperty(o)) => {
            attribute_to_property(cx, s, o)
        }
        (NodeData::JsxIdentifier(_), NodeData::StringLiteral(_)) => {
            let (s, o) = (cx.src.start(), cx.out.start() + TextSize::from(1));
            cx.run(s, o, cx.src.span().len());
        }
        (NodeData::JsxIdentifier(_), NodeData::Identifier(_)) => {
            cx.run(cx.src.start(), cx.out.start(), cx.src.span().len());
        }
        (NodeData::JsxText(_), NodeData::StringLiteral(_)) => text_to_string(cx),
        (NodeData::StringLiteral(_), NodeData::Identifier(_)) => unquote(cx),
        (NodeData::TemplateLiteral(s), NodeData::StringLiteral(_)) if s.expressions.is_empty() => {
            requote(cx)
        }
        (NodeData::ArrowFunctionExpression(s), NodeData::FunctionExpression(o)) => {
            rules::arrow_to_function(cx, s, o)
        }
        _ => cx.unsupported(),
    }
}

/// `1_000` to `1000`
///
/// Source characters other than `_` map in order onto the output; a pair is
/// only emitted where the characters agree.
pub(crate) fn numeric_separators(cx: &mut RuleContext<'_>) {
    let source = cx.src.text.char_offsets(cx.src.span());
    let output = cx.out.text.char_offsets(cx.out.span());
    let mut output = output.into_iter();
    for (offset, c) in source {
        if c == '_' {
            continue;
        }
        let Some((out_offset, out_c)) = output.next() else {
            break;
        };
        if c == out_c {
            cx.push(AnchorPair::new(offset, out_offset));
        }
    }
}

/// `const` to `var`: one substitution per source character
///
/// A source keyword longer than the output one clamps its excess characters
/// onto the last output character, whose `output_char` is then absent.
pub(crate) fn keyword(
    cx: &mut RuleContext<'_>,
    s: TextSize,
    source_token: &str,
    o: TextSize,
    output_token: &str,
) {
    let output: Vec<(usize, char)> = output_token.char_indices().collect();
    let Some(last) = output.len().checked_sub(1) else {
        return;
    };
    for (i, (byte, c)) in source_token.char_indices().enumerate() {
        let (out_byte, _) = output[i.min(last)];
        let out_char = output.get(i).map(|(_, c)| *c);
        cx.push(AnchorPair::substitution(
            s + TextSize::from(byte as u32),
            o + TextSize::from(out_byte as u32),
            Some(c),
            out_char,
        ));
    }
}

/// `<a b="1" />` to `{ b: "1" }`: `=` becomes `:`
fn attribute_to_property(cx: &mut RuleContext<'_>, s: &JsxAttribute, o: &ObjectProperty) {
    let Some(value) = s.value else { return };
    let equals = cx.src.between(s.name, value, "=");
    let colon = cx.out.between(o.key, o.value, ":");
    if let (Some(equals), Some(colon)) = (equals, colon) {
        cx.substitute(equals, colon);
    }
}

/// Surrounding whitespace of JSX text is dropped by the lowering
fn text_to_string(cx: &mut RuleContext<'_>) {
    let Some(text) = cx.src.slice() else { return };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = TextSize::of(&text[..text.len() - text.trim_start().len()]);
    let one = TextSize::from(1);
    cx.run(cx.src.start() + lead, cx.out.start() + one, TextSize::of(trimmed));
}

/// `"key"` to `key`
///
/// The opening quote becomes a substitution onto the first identifier
/// character; the body shifts left by one.
fn unquote(cx: &mut RuleContext<'_>) {
    let (s, o) = (cx.src.start(), cx.out.start());
    let Some(quote) = cx.src.char_at(s).filter(|c| matches!(c, '"' | '\'')) else {
        return;
    };
    cx.push(AnchorPair::substitution(s, o, Some(quote), None));
    cx.run(s + TextSize::from(1), o, cx.out.span().len());
}

/// `` `text` `` to `"text"`: both delimiters substituted, body 1:1
fn requote(cx: &mut RuleContext<'_>) {
    let one = TextSize::from(1);
    let (Some(src_close), Some(out_close)) = (
        cx.src.end().checked_sub(one),
        cx.out.end().checked_sub(one),
    ) else {
        return;
    };
    let (s, o) = (cx.src.start(), cx.out.start());
    if src_close <= s || out_close <= o {
        return;
    }
    cx.substitute(s, o);
    if src_close - s == out_close - o {
        cx.run(s + one, o + one, src_close - s - one);
    }
    cx.substitute(src_close, out_close);
}
