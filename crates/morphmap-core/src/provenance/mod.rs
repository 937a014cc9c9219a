//! Provenance side-table
//!
//! Links from output nodes back to the source nodes they were derived from.
//! The table is keyed by output [`NodeId`] and never written onto the trees
//! themselves.

mod capture;

pub use capture::{HostKey, ProvenanceRecorder};

use crate::error::MorphError;
use crate::result::Result;
use crate::text::span_serde;
use crate::tree::{NodeId, SyntaxKind, SyntaxTree};
use biome_text_size::TextRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a source node taken before it was mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Predecessor {
    pub kind: SyntaxKind,
    #[serde(with = "span_serde")]
    pub span: TextRange,
    /// Source node the snapshot resolves to, when it still exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
}

impl Predecessor {
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            node: None,
        }
    }
}

/// One transformation step that replaced, inserted or moved a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformStep {
    /// Name of the transformation, e.g. `transform-react-jsx`
    pub transformer: String,
    /// Where in the transformation the node was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TransformStep {
    pub fn new(transformer: impl Into<String>) -> Self {
        Self {
            transformer: transformer.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Provenance of a single output node
///
/// No predecessors means the node was synthesized by one of `steps`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceLink {
    #[serde(default)]
    pub predecessors: Vec<Predecessor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TransformStep>,
}

impl ProvenanceLink {
    /// Link for a node carried over unchanged from `source`
    pub fn carried(kind: SyntaxKind, span: TextRange, source: NodeId) -> Self {
        Self {
            predecessors: vec![Predecessor {
                kind,
                span,
                node: Some(source),
            }],
            steps: Vec::new(),
        }
    }

    pub fn is_synthesized(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Single predecessor kind, if the link has exactly one
    pub fn sole_predecessor(&self) -> Option<&Predecessor> {
        match self.predecessors.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Smallest source span covering every predecessor
    pub fn source_hull(&self) -> Option<TextRange> {
        crate::text::hull(self.predecessors.iter().map(|p| p.span))
    }
}

/// Side-table of provenance links keyed by output node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvenanceTable {
    links: BTreeMap<NodeId, ProvenanceLink>,
}

impl ProvenanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, output: NodeId, link: ProvenanceLink) -> Option<ProvenanceLink> {
        self.links.insert(output, link)
    }

    pub fn get(&self, output: NodeId) -> Option<&ProvenanceLink> {
        self.links.get(&output)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ProvenanceLink)> {
        self.links.iter().map(|(id, link)| (*id, link))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Link same-kind nodes at the same structural position in both trees
    ///
    /// This is the carry-over for code the compiler reparsed identically:
    /// the walk descends only while kinds agree, pairing children by index,
    /// so appended or reshaped subtrees stay unlinked.
    pub fn zip(source: &SyntaxTree, output: &SyntaxTree) -> Self {
        let mut table = Self::new();
        let mut stack = vec![(source.root, output.root)];
        let mut visited = vec![false; output.len()];
        while let Some((src_id, out_id)) = stack.pop() {
            let (Some(src), Some(out)) = (source.get(src_id), output.get(out_id)) else {
                continue;
            };
            if src.kind() != out.kind() {
                continue;
            }
            if std::mem::replace(&mut visited[out_id.index()], true) {
                continue;
            }
            table.insert(out_id, ProvenanceLink::carried(src.kind(), src.span, src_id));
            stack.extend(src.children().into_iter().zip(out.children()));
        }
        tracing::trace!("Zipped {} node pairs", table.len());
        table
    }

    /// Overlay `recorded` on top of this table; recorded links win
    pub fn merge(mut self, recorded: ProvenanceTable) -> Self {
        self.links.extend(recorded.links);
        self
    }

    /// Fill in `node` for every predecessor snapshot that resolves in `source`
    pub fn resolve(&mut self, source: &SyntaxTree) {
        let index = source.span_index();
        for link in self.links.values_mut() {
            for predecessor in &mut link.predecessors {
                if predecessor.node.is_none() {
                    predecessor.node = index.get(&(predecessor.kind, predecessor.span)).copied();
                }
            }
        }
    }

    /// Check every link against the two trees
    ///
    /// Keys must name output nodes and resolved predecessors must agree with
    /// the source node they point at.
    pub fn validate(&self, source: &SyntaxTree, output: &SyntaxTree) -> Result<()> {
        for (out_id, link) in self.iter() {
            if output.get(out_id).is_none() {
                return Err(MorphError::provenance_error(format!(
                    "link for missing output node {out_id}"
                )));
            }
            for predecessor in &link.predecessors {
                let Some(src_id) = predecessor.node else { continue };
                let Some(src) = source.get(src_id) else {
                    return Err(MorphError::provenance_error(format!(
                        "output node {out_id} points at missing source node {src_id}"
                    )));
                };
                if src.kind() != predecessor.kind || src.span != predecessor.span {
                    return Err(MorphError::provenance_error(format!(
                        "output node {out_id}: snapshot {} {:?} does not match source {} {:?}",
                        predecessor.kind,
                        predecessor.span,
                        src.kind(),
                        src.span
                    )));
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(NodeId, ProvenanceLink)> for ProvenanceTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, ProvenanceLink)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ArrayLike, ExpressionStatement, NodeData, NumericLiteral, Program, TreeBuilder};
    use biome_text_size::TextSize;

    fn num(b: &mut TreeBuilder, start: u32, text: &str) -> NodeId {
        b.node(
            start,
            start + text.len() as u32,
            NodeData::NumericLiteral(NumericLiteral {
                value: text.parse().unwrap(),
            }),
        )
    }

    /// `[1,2]` style statement with numeric elements at the given offsets
    fn array_tree(len: u32, elements: &[(u32, &str)]) -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let ids: Vec<_> = elements.iter().map(|(s, t)| Some(num(&mut b, *s, t))).collect();
        let array = b.node(0, len - 1, NodeData::ArrayExpression(ArrayLike { elements: ids }));
        let stmt = b.node(
            0,
            len,
            NodeData::ExpressionStatement(ExpressionStatement { expression: array }),
        );
        let root = b.node(0, len, NodeData::Program(Program { body: vec![stmt] }));
        b.finish(root)
    }

    #[test]
    fn test_zip_leaves_appended_elements_unlinked() {
        let source = array_tree(6, &[(1, "1"), (3, "2")]);
        let output = array_tree(10, &[(1, "1"), (4, "2"), (7, "3")]);
        let table = ProvenanceTable::zip(&source, &output);

        assert_eq!(table.len(), 5);
        assert!(table.get(NodeId(2)).is_none());
        let second = table.get(NodeId(1)).unwrap();
        assert_eq!(second.predecessors[0].node, Some(NodeId(1)));
        assert_eq!(
            second.predecessors[0].span,
            TextRange::new(TextSize::from(3), TextSize::from(4))
        );
    }

    #[test]
    fn test_zip_stops_at_kind_change() {
        let source = array_tree(6, &[(1, "1"), (3, "2")]);
        let mut b = TreeBuilder::new();
        let x = b.ident(0, "x");
        let stmt = b.node(0, 2, NodeData::ExpressionStatement(ExpressionStatement { expression: x }));
        let root = b.node(0, 2, NodeData::Program(Program { body: vec![stmt] }));
        let output = b.finish(root);

        let table = ProvenanceTable::zip(&source, &output);
        assert_eq!(table.len(), 2);
        assert!(table.get(x).is_none());
    }

    #[test]
    fn test_merge_prefers_recorded_links() {
        let source = array_tree(6, &[(1, "1"), (3, "2")]);
        let zipped = ProvenanceTable::zip(&source, &source);
        let recorded: ProvenanceTable = [(
            NodeId(0),
            ProvenanceLink {
                predecessors: vec![],
                steps: vec![TransformStep::new("inline-constants")],
            },
        )]
        .into_iter()
        .collect();

        let merged = zipped.merge(recorded);
        assert!(merged.get(NodeId(0)).unwrap().is_synthesized());
        assert!(!merged.get(NodeId(1)).unwrap().is_synthesized());
    }

    #[test]
    fn test_resolve_and_validate() {
        let source = array_tree(6, &[(1, "1"), (3, "2")]);
        let span = TextRange::new(TextSize::from(3), TextSize::from(4));
        let mut table: ProvenanceTable = [(
            NodeId(1),
            ProvenanceLink {
                predecessors: vec![Predecessor::new(SyntaxKind::NumericLiteral, span)],
                steps: vec![],
            },
        )]
        .into_iter()
        .collect();
        table.resolve(&source);
        assert_eq!(table.get(NodeId(1)).unwrap().predecessors[0].node, Some(NodeId(1)));
        assert!(table.validate(&source, &source).is_ok());

        table.insert(NodeId(99), ProvenanceLink::default());
        assert!(table.validate(&source, &source).is_err());
    }

    #[test]
    fn test_json_keys_are_output_ids() {
        let span = TextRange::new(TextSize::from(0), TextSize::from(5));
        let table: ProvenanceTable = [(
            NodeId(3),
            ProvenanceLink {
                predecessors: vec![Predecessor::new(SyntaxKind::JsxAttribute, span)],
                steps: vec![TransformStep::new("transform-react-jsx").at("index.js (12:4)")],
            },
        )]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"3":{"predecessors":[{"kind":"JSXAttribute","span":[0,5]}],"steps":[{"transformer":"transform-react-jsx","location":"index.js (12:4)"}]}}"#
        );
        let back: ProvenanceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
