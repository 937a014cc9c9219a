//! Capture hook for host compilers
//!
//! The host calls into a [`ProvenanceRecorder`] while it transforms the
//! source tree. Nodes are identified by an opaque [`HostKey`] (whatever the
//! host uses for node identity). Once the output tree has been reparsed,
//! [`ProvenanceRecorder::finish`] turns the recording into a
//! [`ProvenanceTable`] keyed by output [`NodeId`].

use super::{Predecessor, ProvenanceLink, ProvenanceTable, TransformStep};
use crate::error::MorphError;
use crate::result::Result;
use crate::tree::{NodeId, SyntaxKind, SyntaxTree};
use biome_text_size::TextRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Host-side identity of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostKey(pub u64);

#[derive(Debug, Default)]
struct PendingLink {
    predecessors: Vec<HostKey>,
    steps: Vec<TransformStep>,
}

#[derive(Debug, Default)]
pub struct ProvenanceRecorder {
    snapshots: HashMap<HostKey, Predecessor>,
    pending: BTreeMap<HostKey, PendingLink>,
}

impl ProvenanceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a node before it is mutated
    ///
    /// Only the first snapshot per key is kept, so later calls made after
    /// the node already moved cannot overwrite its original offsets.
    /// Returns `true` when this call recorded the snapshot.
    pub fn snapshot(&mut self, key: HostKey, kind: SyntaxKind, span: TextRange) -> bool {
        if self.snapshots.contains_key(&key) {
            return false;
        }
        self.snapshots.insert(key, Predecessor::new(kind, span));
        true
    }

    /// `produced` is `original` carried over without a transformation step
    pub fn carry(&mut self, produced: HostKey, original: HostKey) {
        let link = self.pending.entry(produced).or_default();
        if !link.predecessors.contains(&original) {
            link.predecessors.push(original);
        }
    }

    /// A transformation step produced `produced`
    ///
    /// `predecessor` is the node it replaced or was derived from; `None`
    /// marks freshly synthesized code. Steps accumulate in call order.
    pub fn record(&mut self, produced: HostKey, predecessor: Option<HostKey>, step: TransformStep) {
        let link = self.pending.entry(produced).or_default();
        if let Some(original) = predecessor
            && !link.predecessors.contains(&original)
        {
            link.predecessors.push(original);
        }
        link.steps.push(step);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Build the side-table
    ///
    /// `resolve` maps a produced host key to the output node it became after
    /// reparsing; keys it cannot place (nodes dropped by a later step) are
    /// skipped. Snapshots are resolved against `source`. A predecessor key
    /// that was never snapshotted is an error.
    pub fn finish<F>(self, source: &SyntaxTree, mut resolve: F) -> Result<ProvenanceTable>
    where
        F: FnMut(HostKey) -> Option<NodeId>,
    {
        let mut table = ProvenanceTable::new();
        for (produced, pending) in self.pending {
            let Some(output) = resolve(produced) else {
                tracing::trace!("Dropping provenance for unplaced host node {:?}", produced);
                continue;
            };
            let predecessors = pending
                .predecessors
                .iter()
                .map(|key| {
                    self.snapshots.get(key).cloned().ok_or_else(|| {
                        MorphError::provenance_error(format!(
                            "host node {} has no snapshot but is the predecessor of {}",
                            key.0, produced.0
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            table.insert(
                output,
                ProvenanceLink {
                    predecessors,
                    steps: pending.steps,
                },
            );
        }
        table.resolve(source);
        Ok(table)
    }
}
