//! Syntax tree arena
//!
//! Trees are produced once per compile cycle by the host compiler and are
//! never mutated afterwards. Nodes live in a flat arena and reference their
//! children by [`NodeId`], so provenance can be kept in a side-table instead
//! of on the nodes themselves.

mod data;
mod kind;

pub use data::*;
pub use kind::SyntaxKind;

use crate::error::MorphError;
use crate::result::Result;
use crate::text::span_serde;
use biome_text_size::{TextRange, TextSize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Index of a node inside its [`SyntaxTree`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of either tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Span of the node itself, excluding any wrapping parentheses
    #[serde(with = "span_serde")]
    pub span: TextRange,
    /// The node is wrapped in one pair of parentheses in its buffer
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub parenthesized: bool,
    #[serde(flatten)]
    pub data: NodeData,
}

impl SyntaxNode {
    pub fn new(span: TextRange, data: NodeData) -> Self {
        Self {
            span,
            parenthesized: false,
            data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data.kind()
    }

    pub fn start(&self) -> TextSize {
        self.span.start()
    }

    pub fn end(&self) -> TextSize {
        self.span.end()
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.data.children()
    }
}

/// Arena of nodes plus the id of the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub root: NodeId,
    pub nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    pub fn root_node(&self) -> Option<&SyntaxNode> {
        self.get(self.root)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All ids in arena order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Depth-first pre-order walk from the root
    ///
    /// Each node is visited at most once even if the arena is malformed.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            order.push(id);
            let children = node.children();
            stack.extend(children.into_iter().rev());
        }
        order
    }

    /// Parent of every node reachable from the root
    pub fn parents(&self) -> Vec<Option<NodeId>> {
        let mut parents = vec![None; self.nodes.len()];
        for id in self.preorder() {
            if let Some(node) = self.get(id) {
                for child in node.children() {
                    if let Some(slot) = parents.get_mut(child.index()) {
                        slot.get_or_insert(id);
                    }
                }
            }
        }
        parents
    }

    /// Lookup from `(kind, span)` to the first node carrying both
    ///
    /// Used to resolve provenance snapshots back to source nodes. When a
    /// wrapper and its only child share a span, the outermost wins.
    pub fn span_index(&self) -> HashMap<(SyntaxKind, TextRange), NodeId> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for id in self.preorder() {
            if let Some(node) = self.get(id) {
                index.entry((node.kind(), node.span)).or_insert(id);
            }
        }
        index
    }

    /// Check that the arena is a well-formed tree over a buffer of `text_len`
    ///
    /// Rejects dangling child ids, nodes with more than one parent, a root
    /// that is also a child, spans past the end of the buffer and children
    /// whose span escapes their parent.
    pub fn validate(&self, text_len: TextSize) -> Result<()> {
        let root = self
            .root_node()
            .ok_or_else(|| MorphError::invalid_tree(format!("root {} is missing", self.root)))?;
        if root.end() > text_len {
            return Err(MorphError::invalid_tree(format!(
                "root span {:?} exceeds text length {}",
                root.span,
                u32::from(text_len)
            )));
        }

        let mut parent_of: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index as u32);
            if node.end() > text_len {
                return Err(MorphError::invalid_tree(format!(
                    "{} {} span {:?} exceeds text length {}",
                    node.kind(),
                    id,
                    node.span,
                    u32::from(text_len)
                )));
            }
            for child in node.children() {
                let Some(child_node) = self.get(child) else {
                    return Err(MorphError::invalid_tree(format!(
                        "{} {} references missing child {}",
                        node.kind(),
                        id,
                        child
                    )));
                };
                if child == self.root {
                    return Err(MorphError::invalid_tree(format!(
                        "root {} is referenced as a child of {}",
                        child, id
                    )));
                }
                if let Some(previous) = parent_of[child.index()].replace(id) {
                    return Err(MorphError::invalid_tree(format!(
                        "{} has two parents: {} and {}",
                        child, previous, id
                    )));
                }
                if !node.span.contains_range(child_node.span) {
                    return Err(MorphError::invalid_tree(format!(
                        "{} {} span {:?} escapes parent {} {:?}",
                        child_node.kind(),
                        child,
                        child_node.span,
                        id,
                        node.span
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Incremental construction of a [`SyntaxTree`], children before parents
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node spanning `start..end`
    pub fn node(&mut self, start: u32, end: u32, data: NodeData) -> NodeId {
        let span = TextRange::new(TextSize::from(start), TextSize::from(end.max(start)));
        self.push(SyntaxNode::new(span, data))
    }

    pub fn push(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Mark an already added node as wrapped in parentheses
    pub fn parenthesize(&mut self, id: NodeId) -> NodeId {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.parenthesized = true;
        }
        id
    }

    pub fn ident(&mut self, start: u32, name: &str) -> NodeId {
        let end = start + name.len() as u32;
        self.node(
            start,
            end,
            NodeData::Identifier(Identifier {
                name: name.to_string(),
            }),
        )
    }

    pub fn finish(self, root: NodeId) -> SyntaxTree {
        SyntaxTree {
            root,
            nodes: self.nodes,
        }
    }
}
