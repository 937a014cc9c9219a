//! Per-character classification of both texts
//!
//! Every output byte is exactly one of carried, substituted or inserted.
//! A byte is inserted when the deepest output node covering it has no
//! correspondence range (unlinked, synthesized or rejected), so the range
//! spans plus the inserted spans always cover the whole output. Source bytes
//! no accepted range maps back to are removed, so a rejected range leaves
//! inserted output and removed source behind. Each class is a sorted list of
//! coalesced spans.

use crate::ranges::RangeSet;
use morphmap_core::text::spans_serde;
use morphmap_core::{NodeId, SyntaxTree, TextRange, TextSize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Carried,
    Substituted,
    Inserted,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClasses {
    #[serde(with = "spans_serde")]
    pub carried: Vec<TextRange>,
    #[serde(with = "spans_serde")]
    pub substituted: Vec<TextRange>,
    #[serde(with = "spans_serde")]
    pub inserted: Vec<TextRange>,
    #[serde(with = "spans_serde")]
    pub removed: Vec<TextRange>,
}

impl CharacterClasses {
    /// Class of an output byte
    pub fn output_class(&self, offset: TextSize) -> Option<CharClass> {
        [
            (&self.carried, CharClass::Carried),
            (&self.substituted, CharClass::Substituted),
            (&self.inserted, CharClass::Inserted),
        ]
        .into_iter()
        .find(|(spans, _)| spans.iter().any(|s| s.contains(offset)))
        .map(|(_, class)| class)
    }

    pub fn is_removed(&self, offset: TextSize) -> bool {
        self.removed.iter().any(|s| s.contains(offset))
    }
}

/// Everything classification looks at
pub(crate) struct ClassInput<'a> {
    pub source_len: TextSize,
    pub output_len: TextSize,
    pub source_tree: &'a SyntaxTree,
    pub output_tree: &'a SyntaxTree,
    pub ranges: &'a RangeSet,
}

/// Owner of each byte: the deepest node whose span covers it
fn paint<T: Copy>(
    tree: &SyntaxTree,
    len: usize,
    fill: T,
    mut value: impl FnMut(NodeId) -> T,
) -> Vec<T> {
    let mut bytes = vec![fill; len];
    for id in tree.preorder() {
        let Some(node) = tree.get(id) else { continue };
        let start = usize::from(node.start()).min(len);
        let end = usize::from(node.end()).min(len);
        let v = value(id);
        bytes[start..end].fill(v);
    }
    bytes
}

/// Collapse per-byte classes into runs of `class`
fn runs(bytes: &[CharClass], class: CharClass) -> Vec<TextRange> {
    let mut out = Vec::new();
    let mut start = None;
    for i in 0..=bytes.len() {
        match (start, bytes.get(i) == Some(&class)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                if let (Ok(s), Ok(e)) = (TextSize::try_from(s), TextSize::try_from(i)) {
                    out.push(TextRange::new(s, e));
                }
                start = None;
            }
            _ => {}
        }
    }
    out
}

pub(crate) fn classify(input: &ClassInput<'_>) -> CharacterClasses {
    let output_len = usize::from(input.output_len);
    let source_len = usize::from(input.source_len);

    // an output byte is linked when its deepest node produced a range
    let ranged: HashSet<NodeId> = input.ranges.iter().map(|r| r.node).collect();
    let owners = paint(input.output_tree, output_len, false, |id| ranged.contains(&id));

    let mut substituted = HashSet::new();
    for anchor in input.ranges.iter().flat_map(|r| &r.anchors) {
        let Some(sub) = anchor.substitution else { continue };
        if let Some(c) = sub.output_char
            && sub.source_char != Some(c)
        {
            let start = usize::from(anchor.output);
            substituted.extend(start..start + c.len_utf8());
        }
    }

    let output: Vec<CharClass> = owners
        .iter()
        .enumerate()
        .map(|(i, &linked)| match (linked, substituted.contains(&i)) {
            (false, _) => CharClass::Inserted,
            (true, true) => CharClass::Substituted,
            (true, false) => CharClass::Carried,
        })
        .collect();

    // source side: predecessors of accepted ranges claim their node, deepest wins
    let mut mapped = HashSet::new();
    let mut unresolved = Vec::new();
    for predecessor in input.ranges.iter().flat_map(|r| &r.predecessors) {
        match predecessor.node {
            Some(id) => {
                mapped.insert(id);
            }
            None => unresolved.push(predecessor.span),
        }
    }
    let mut source = paint(input.source_tree, source_len, CharClass::Removed, |id| {
        if mapped.contains(&id) {
            CharClass::Carried
        } else {
            CharClass::Removed
        }
    });
    for span in unresolved {
        let start = usize::from(span.start()).min(source_len);
        let end = usize::from(span.end()).min(source_len);
        source[start..end].fill(CharClass::Carried);
    }

    CharacterClasses {
        carried: runs(&output, CharClass::Carried),
        substituted: runs(&output, CharClass::Substituted),
        inserted: runs(&output, CharClass::Inserted),
        removed: runs(&source, CharClass::Removed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(s: u32, e: u32) -> TextRange {
        TextRange::new(TextSize::from(s), TextSize::from(e))
    }

    #[test]
    fn test_runs_coalesce() {
        use CharClass::*;
        let bytes = [Carried, Carried, Inserted, Carried, Inserted, Inserted];
        assert_eq!(runs(&bytes, Carried), vec![span(0, 2), span(3, 4)]);
        assert_eq!(runs(&bytes, Inserted), vec![span(2, 3), span(4, 6)]);
        assert!(runs(&bytes, Removed).is_empty());
    }

    #[test]
    fn test_output_class_lookup() {
        let classes = CharacterClasses {
            carried: vec![span(0, 3)],
            substituted: vec![span(3, 4)],
            inserted: vec![span(4, 6)],
            removed: vec![span(1, 2)],
        };
        assert_eq!(classes.output_class(TextSize::from(3)), Some(CharClass::Substituted));
        assert_eq!(classes.output_class(TextSize::from(5)), Some(CharClass::Inserted));
        assert_eq!(classes.output_class(TextSize::from(6)), None);
        assert!(classes.is_removed(TextSize::from(1)));
    }
}
