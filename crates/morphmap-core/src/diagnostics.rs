//! Diagnostics surfaced by an alignment run
//!
//! Only two conditions are reported to the caller: a predecessor/output kind
//! combination with no rule, and structure the engine refuses to align.
//! Tokens that simply cannot be found shorten the anchor list and are not
//! reported.

use crate::config::RuleSeverity;
use crate::text::span_serde;
use crate::tree::{NodeId, SyntaxKind};
use biome_text_size::TextRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of each diagnostic, used as the configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    UnsupportedPairing,
    AmbiguousStructure,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::UnsupportedPairing => "unsupported-pairing",
            DiagnosticCode::AmbiguousStructure => "ambiguous-structure",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Severity a configured level maps to; `Off` suppresses the diagnostic
    pub fn from_rule(level: RuleSeverity) -> Option<Self> {
        match level {
            RuleSeverity::Off => None,
            RuleSeverity::Info => Some(Severity::Info),
            RuleSeverity::Warn => Some(Severity::Warning),
            RuleSeverity::Error => Some(Severity::Error),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// No rule covers this predecessor/output kind combination
    UnsupportedPairing {
        #[serde(rename = "outputKind")]
        output_kind: SyntaxKind,
        #[serde(rename = "sourceKinds")]
        source_kinds: Vec<SyntaxKind>,
    },
    /// The engine declined to align part of this node
    AmbiguousStructure { reason: String },
}

/// A surfaced alignment problem, tied to one output node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignDiagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub node: NodeId,
    #[serde(with = "span_serde")]
    pub output_span: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "optional_span")]
    pub source_span: Option<TextRange>,
}

impl AlignDiagnostic {
    pub fn code(&self) -> DiagnosticCode {
        match self.kind {
            DiagnosticKind::UnsupportedPairing { .. } => DiagnosticCode::UnsupportedPairing,
            DiagnosticKind::AmbiguousStructure { .. } => DiagnosticCode::AmbiguousStructure,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::UnsupportedPairing {
                output_kind,
                source_kinds,
            } => {
                let sources: Vec<_> = source_kinds.iter().map(|k| k.as_str()).collect();
                format!(
                    "no rule maps {} to {}",
                    sources.join(" + "),
                    output_kind
                )
            }
            DiagnosticKind::AmbiguousStructure { reason } => reason.clone(),
        }
    }
}

impl fmt::Display for AlignDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {} at {}..{}",
            self.severity,
            self.code(),
            self.message(),
            u32::from(self.output_span.start()),
            u32::from(self.output_span.end())
        )
    }
}

mod optional_span {
    use biome_text_size::TextRange;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Span(#[serde(with = "crate::text::span_serde")] TextRange);

    pub fn serialize<S: Serializer>(
        range: &Option<TextRange>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        range.map(Span).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TextRange>, D::Error> {
        Ok(Option::<Span>::deserialize(deserializer)?.map(|s| s.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biome_text_size::TextSize;

    fn diagnostic() -> AlignDiagnostic {
        AlignDiagnostic {
            kind: DiagnosticKind::UnsupportedPairing {
                output_kind: SyntaxKind::CallExpression,
                source_kinds: vec![SyntaxKind::JsxElement],
            },
            severity: Severity::Warning,
            node: NodeId(4),
            output_span: TextRange::new(TextSize::from(10), TextSize::from(42)),
            source_span: Some(TextRange::new(TextSize::from(0), TextSize::from(9))),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            diagnostic().to_string(),
            "warning[unsupported-pairing] no rule maps JSXElement to CallExpression at 10..42"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_value(diagnostic()).unwrap();
        assert_eq!(json["code"], "unsupported-pairing");
        assert_eq!(json["outputKind"], "CallExpression");
        assert_eq!(json["sourceSpan"], serde_json::json!([0, 9]));
        let back: AlignDiagnostic = serde_json::from_value(json).unwrap();
        assert_eq!(back, diagnostic());
    }

    #[test]
    fn test_off_suppresses() {
        assert_eq!(Severity::from_rule(RuleSeverity::Off), None);
        assert_eq!(
            Severity::from_rule(RuleSeverity::Warn),
            Some(Severity::Warning)
        );
    }
}
