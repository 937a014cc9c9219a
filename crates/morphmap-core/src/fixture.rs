//! Self-contained alignment inputs
//!
//! A fixture bundles both buffers, both trees and any provenance the host
//! recorded into one JSON document, so an alignment can be replayed without
//! the compiler that produced it.

use crate::error::MorphError;
use crate::provenance::ProvenanceTable;
use crate::result::Result;
use crate::text::SourceText;
use crate::tree::SyntaxTree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_zip() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentFixture {
    pub source: String,
    pub output: String,
    pub source_tree: SyntaxTree,
    pub output_tree: SyntaxTree,
    /// Links recorded by the capture hook, keyed by output node id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<ProvenanceTable>,
    /// Link structurally identical subtrees before applying `provenance`
    #[serde(default = "default_zip")]
    pub zip: bool,
}

impl AlignmentFixture {
    pub fn new(
        source: impl Into<String>,
        output: impl Into<String>,
        source_tree: SyntaxTree,
        output_tree: SyntaxTree,
    ) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            source_tree,
            output_tree,
            provenance: None,
            zip: true,
        }
    }

    pub fn with_provenance(mut self, provenance: ProvenanceTable) -> Self {
        self.provenance = Some(provenance);
        self
    }

    /// Parse and validate a fixture document
    pub fn from_json(text: &str) -> Result<Self> {
        let fixture: Self = serde_json::from_str(text)
            .map_err(|e| MorphError::fixture_error(format!("invalid fixture document: {e}")))?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| MorphError::io_error(path, e))?;
        Self::from_json(&text).map_err(|e| match e {
            MorphError::FixtureError { message } => {
                MorphError::fixture_error(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Check both trees against their buffers and the provenance against both trees
    pub fn validate(&self) -> Result<()> {
        self.source_tree
            .validate(SourceText::new(&self.source).len())
            .map_err(|e| MorphError::invalid_tree(format!("source tree: {e}")))?;
        self.output_tree
            .validate(SourceText::new(&self.output).len())
            .map_err(|e| MorphError::invalid_tree(format!("output tree: {e}")))?;
        self.provenance_table().validate(&self.source_tree, &self.output_tree)
    }

    /// Effective provenance: structural zip (if enabled) overlaid with recorded links
    pub fn provenance_table(&self) -> ProvenanceTable {
        let base = if self.zip {
            ProvenanceTable::zip(&self.source_tree, &self.output_tree)
        } else {
            ProvenanceTable::new()
        };
        let mut table = match &self.provenance {
            Some(recorded) => base.merge(recorded.clone()),
            None => base,
        };
        table.resolve(&self.source_tree);
        table
    }
}
