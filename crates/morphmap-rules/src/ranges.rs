//! Correspondence ranges and the ordered set they are aggregated into

use morphmap_core::text::span_serde;
use morphmap_core::{
    AnchorPair, NodeId, Predecessor, SyntaxKind, TextRange, TextSize, TransformStep,
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thiserror::Error;

/// Which of the two texts an offset refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinate {
    Source,
    Output,
}

impl Coordinate {
    pub fn other(self) -> Self {
        match self {
            Coordinate::Source => Coordinate::Output,
            Coordinate::Output => Coordinate::Source,
        }
    }
}

/// Source and output bounds of one linked output node, with its anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondenceRange {
    #[serde(with = "span_serde")]
    pub source: TextRange,
    #[serde(with = "span_serde")]
    pub output: TextRange,
    pub node: NodeId,
    pub output_kind: SyntaxKind,
    #[serde(default)]
    pub anchors: Vec<AnchorPair>,
    #[serde(default)]
    pub predecessors: Vec<Predecessor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TransformStep>,
}

impl CorrespondenceRange {
    pub fn span(&self, side: Coordinate) -> TextRange {
        match side {
            Coordinate::Source => self.source,
            Coordinate::Output => self.output,
        }
    }

    /// Offset on the other side anchored to `offset`, if any
    pub fn counterpart(&self, side: Coordinate, offset: TextSize) -> Option<TextSize> {
        self.anchors.iter().find_map(|a| match side {
            Coordinate::Source => (a.source == offset).then_some(a.output),
            Coordinate::Output => (a.output == offset).then_some(a.source),
        })
    }

    fn sort_key(&self) -> (TextSize, Reverse<TextSize>, TextSize, Reverse<TextSize>) {
        (
            self.output.start(),
            Reverse(self.output.end()),
            self.source.start(),
            Reverse(self.source.end()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Equal,
    Contains,
    Within,
    Disjoint,
    Crossing,
}

fn relation(a: TextRange, b: TextRange) -> Relation {
    if a == b {
        Relation::Equal
    } else if a.end() <= b.start() || b.end() <= a.start() {
        Relation::Disjoint
    } else if a.contains_range(b) {
        Relation::Contains
    } else if b.contains_range(a) {
        Relation::Within
    } else {
        Relation::Crossing
    }
}

/// Why a range could not be added to a [`RangeSet`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeConflict {
    #[error("{side:?} span of {node} crosses the range of {existing}")]
    Crossing {
        node: NodeId,
        existing: NodeId,
        side: Coordinate,
    },
    #[error("{node} and {existing} nest in opposite directions in the source and output")]
    InvertedNesting { node: NodeId, existing: NodeId },
}

/// Ranges ordered by output start, containers before what they contain
///
/// Ties fall back to the source bounds, then insertion order, so iteration
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeSet {
    ranges: Vec<CorrespondenceRange>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorrespondenceRange> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[CorrespondenceRange] {
        &self.ranges
    }

    /// Whether `range` can coexist with every range already in the set
    pub fn check(&self, range: &CorrespondenceRange) -> Result<(), RangeConflict> {
        for existing in &self.ranges {
            let output = relation(range.output, existing.output);
            let source = relation(range.source, existing.source);
            for (rel, side) in [(output, Coordinate::Output), (source, Coordinate::Source)] {
                if rel == Relation::Crossing {
                    return Err(RangeConflict::Crossing {
                        node: range.node,
                        existing: existing.node,
                        side,
                    });
                }
            }
            if matches!(
                (output, source),
                (Relation::Contains, Relation::Within) | (Relation::Within, Relation::Contains)
            ) {
                return Err(RangeConflict::InvertedNesting {
                    node: range.node,
                    existing: existing.node,
                });
            }
        }
        Ok(())
    }

    /// Splice `range` into its ordered position, returning the index
    pub fn insert(&mut self, range: CorrespondenceRange) -> Result<usize, RangeConflict> {
        self.check(&range)?;
        let key = range.sort_key();
        let at = self.ranges.partition_point(|r| r.sort_key() <= key);
        self.ranges.insert(at, range);
        Ok(at)
    }

    /// Every range whose `side` span holds `offset`, outermost first
    ///
    /// The end is inclusive, the way a cursor sitting right after a token
    /// still belongs to it.
    pub fn containing(&self, side: Coordinate, offset: TextSize) -> Vec<&CorrespondenceRange> {
        let mut hits: Vec<_> = self
            .ranges
            .iter()
            .filter(|r| r.span(side).contains_inclusive(offset))
            .collect();
        hits.sort_by_key(|r| {
            let span = r.span(side);
            (span.start(), Reverse(span.end()))
        });
        hits
    }

    /// Innermost range holding `offset`
    pub fn closest_enclosing(
        &self,
        side: Coordinate,
        offset: TextSize,
    ) -> Option<&CorrespondenceRange> {
        self.containing(side, offset).pop()
    }

    /// Anchored counterpart of `offset`, searching the innermost range first
    pub fn counterpart(&self, side: Coordinate, offset: TextSize) -> Option<TextSize> {
        self.containing(side, offset)
            .into_iter()
            .rev()
            .find_map(|r| r.counterpart(side, offset))
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a CorrespondenceRange;
    type IntoIter = std::slice::Iter<'a, CorrespondenceRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
