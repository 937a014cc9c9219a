//! Configuration file types

use crate::diagnostics::DiagnosticCode;
use crate::error::MorphError;
use crate::result::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MorphConfig {
    /// JSON Schema reference, ignored by the loader
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Alignment engine settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<AlignConfiguration>,
}

/// Alignment engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlignConfiguration {
    #[schemars(description = "Anchor every character of same-kind leaves whose text is identical")]
    pub identity_leaves: Option<bool>,

    #[schemars(description = "Anchor wrapping parentheses when both nodes carry them")]
    pub parentheses: Option<bool>,

    #[schemars(description = "Severity of surfaced alignment diagnostics")]
    pub diagnostics: Option<DiagnosticsConfiguration>,
}

/// Per-diagnostic severity overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsConfiguration {
    #[schemars(description = "Predecessor/output kind combination without a rule")]
    pub unsupported_pairing: Option<RuleSeverity>,

    #[schemars(description = "Structure the engine declines to align, such as array holes")]
    pub ambiguous_structure: Option<RuleSeverity>,
}

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Suppress the diagnostic
    Off,
    /// Informational message
    Info,
    /// Warning
    Warn,
    /// Error (makes the CLI exit non-zero)
    Error,
}

/// Resolved settings the engine runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOptions {
    pub identity_leaves: bool,
    pub parentheses: bool,
    pub unsupported_pairing: RuleSeverity,
    pub ambiguous_structure: RuleSeverity,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            identity_leaves: true,
            parentheses: true,
            unsupported_pairing: RuleSeverity::Warn,
            ambiguous_structure: RuleSeverity::Warn,
        }
    }
}

impl AlignOptions {
    pub fn severity(&self, code: DiagnosticCode) -> RuleSeverity {
        match code {
            DiagnosticCode::UnsupportedPairing => self.unsupported_pairing,
            DiagnosticCode::AmbiguousStructure => self.ambiguous_structure,
        }
    }
}

impl MorphConfig {
    /// Load configuration from a JSON, TOML or YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MorphError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str());

        let parsed = match ext {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => Err("unsupported file extension (expected .json, .toml, .yaml or .yml)".to_string()),
        };
        parsed.map_err(|message| {
            MorphError::config_error(format!("{}: {}", path.display(), message))
        })
    }

    /// Settings with every default filled in
    pub fn align_options(&self) -> AlignOptions {
        let defaults = AlignOptions::default();
        let Some(align) = &self.align else {
            return defaults;
        };
        let diagnostics = align.diagnostics.clone().unwrap_or_default();
        AlignOptions {
            identity_leaves: align.identity_leaves.unwrap_or(defaults.identity_leaves),
            parentheses: align.parentheses.unwrap_or(defaults.parentheses),
            unsupported_pairing: diagnostics
                .unsupported_pairing
                .unwrap_or(defaults.unsupported_pairing),
            ambiguous_structure: diagnostics
                .ambiguous_structure
                .unwrap_or(defaults.ambiguous_structure),
        }
    }

    /// Configuration written by `morphmap config init`
    pub fn starter() -> Self {
        let defaults = AlignOptions::default();
        Self {
            schema: None,
            align: Some(AlignConfiguration {
                identity_leaves: Some(defaults.identity_leaves),
                parentheses: Some(defaults.parentheses),
                diagnostics: Some(DiagnosticsConfiguration {
                    unsupported_pairing: Some(defaults.unsupported_pairing),
                    ambiguous_structure: Some(defaults.ambiguous_structure),
                }),
            }),
        }
    }

    /// JSON Schema describing the configuration file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(MorphConfig)).unwrap_or_default()
    }
}
