//! Tree walker that turns provenance links into correspondence ranges
//!
//! Output nodes are visited in preorder. Each linked node gets one range:
//! the output bound is the node span, the source bound is the hull of its
//! predecessors. A node with a single resolved predecessor additionally
//! runs its construct rule for token-level anchors. Ranges are spliced into
//! a [`RangeSet`]; the character classes are derived from the accepted set.

use crate::classes::{CharacterClasses, ClassInput, classify};
use crate::context::{RuleContext, RuleProblem, Side};
use crate::ranges::{CorrespondenceRange, RangeSet};
use crate::rules;
use morphmap_core::diagnostics::{AlignDiagnostic, DiagnosticCode, DiagnosticKind, Severity};
use morphmap_core::text::SourceText;
use morphmap_core::{
    AlignOptions, AlignmentFixture, AnchorPair, NodeId, ProvenanceLink, ProvenanceTable,
    SyntaxKind, SyntaxNode, SyntaxTree, TextRange, TextSize, TransformStep,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Both texts, both trees and the provenance linking them
#[derive(Debug, Clone, Copy)]
pub struct AlignmentInput<'a> {
    pub source: &'a str,
    pub output: &'a str,
    pub source_tree: &'a SyntaxTree,
    pub output_tree: &'a SyntaxTree,
    pub provenance: &'a ProvenanceTable,
}

/// An output node with no source counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedNode {
    pub node: NodeId,
    pub kind: SyntaxKind,
    #[serde(with = "morphmap_core::text::span_serde")]
    pub output: TextRange,
    #[serde(default)]
    pub steps: Vec<TransformStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    pub ranges: RangeSet,
    pub classes: CharacterClasses,
    #[serde(default)]
    pub diagnostics: Vec<AlignDiagnostic>,
    #[serde(default)]
    pub synthesized: Vec<SynthesizedNode>,
}

impl AlignmentResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn anchor_count(&self) -> usize {
        self.ranges.iter().map(|r| r.anchors.len()).sum()
    }
}

/// Parentheses wrapping `span`, separated from it only by whitespace
fn wrapping_parens(text: SourceText<'_>, span: TextRange) -> Option<(TextSize, TextSize)> {
    let full = text.as_str();
    let before = full.get(..usize::from(span.start()))?.trim_end();
    let open = before.strip_suffix('(')?.len();
    let after = full.get(usize::from(span.end())..)?;
    let gap = after.len() - after.trim_start().len();
    if !after[gap..].starts_with(')') {
        return None;
    }
    let open = TextSize::try_from(open).ok()?;
    let close = span.end() + TextSize::try_from(gap).ok()?;
    Some((open, close))
}

fn widen(span: TextRange, parens: (TextSize, TextSize)) -> TextRange {
    TextRange::new(parens.0, parens.1 + TextSize::from(1)).cover(span)
}

/// Per-node outcome before it is spliced into the set
struct NodeAlignment {
    range: CorrespondenceRange,
    problems: Vec<RuleProblem>,
}

#[derive(Debug, Clone, Default)]
pub struct Aligner {
    options: AlignOptions,
}

impl Aligner {
    pub fn new(options: AlignOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Align a fixture using its effective provenance table
    pub fn align_fixture(&self, fixture: &AlignmentFixture) -> AlignmentResult {
        let provenance = fixture.provenance_table();
        self.align(&AlignmentInput {
            source: &fixture.source,
            output: &fixture.output,
            source_tree: &fixture.source_tree,
            output_tree: &fixture.output_tree,
            provenance: &provenance,
        })
    }

    pub fn align(&self, input: &AlignmentInput<'_>) -> AlignmentResult {
        let source = SourceText::new(input.source);
        let output = SourceText::new(input.output);
        let mut result = AlignmentResult::default();

        let order = input.output_tree.preorder();
        debug!(
            "Aligning {} output nodes against {} provenance links",
            order.len(),
            input.provenance.len()
        );

        for id in order {
            let Some(node) = input.output_tree.get(id) else {
                continue;
            };
            let Some(link) = input.provenance.get(id) else {
                trace!("{} {} has no provenance, treating as inserted", node.kind(), id);
                continue;
            };
            if link.is_synthesized() {
                result.synthesized.push(SynthesizedNode {
                    node: id,
                    kind: node.kind(),
                    output: node.span,
                    steps: link.steps.clone(),
                });
                continue;
            }
            let Some(aligned) = self.align_node(input, (source, output), id, node, link) else {
                continue;
            };

            for problem in aligned.problems {
                let kind = match problem {
                    RuleProblem::Unsupported => DiagnosticKind::UnsupportedPairing {
                        output_kind: node.kind(),
                        source_kinds: link.predecessors.iter().map(|p| p.kind).collect(),
                    },
                    RuleProblem::Ambiguous(reason) => DiagnosticKind::AmbiguousStructure { reason },
                };
                let spans = (aligned.range.output, aligned.range.source);
                self.report(&mut result, kind, id, spans);
            }

            let (output_span, source_span) = (aligned.range.output, aligned.range.source);
            if let Err(conflict) = result.ranges.insert(aligned.range) {
                debug!("Rejecting range for {}: {}", id, conflict);
                let kind = DiagnosticKind::AmbiguousStructure {
                    reason: conflict.to_string(),
                };
                self.report(&mut result, kind, id, (output_span, source_span));
            }
        }

        result.classes = classify(&ClassInput {
            source_len: source.len(),
            output_len: output.len(),
            source_tree: input.source_tree,
            output_tree: input.output_tree,
            ranges: &result.ranges,
        });
        debug!(
            "Aligned {} ranges with {} anchors, {} diagnostics",
            result.ranges.len(),
            result.anchor_count(),
            result.diagnostics.len()
        );
        result
    }

    fn align_node(
        &self,
        input: &AlignmentInput<'_>,
        texts: (SourceText<'_>, SourceText<'_>),
        id: NodeId,
        node: &SyntaxNode,
        link: &ProvenanceLink,
    ) -> Option<NodeAlignment> {
        let (source, output) = texts;
        let mut source_bound = link.source_hull()?;
        let mut output_bound = node.span;
        let mut anchors = Vec::new();
        let mut problems = Vec::new();

        // token-level rules need exactly one predecessor that still exists
        let counterpart = link
            .sole_predecessor()
            .and_then(|p| p.node)
            .and_then(|src_id| input.source_tree.get(src_id));

        if let Some(src_node) = counterpart {
            let mut cx = RuleContext::new(
                Side::new(source, input.source_tree, src_node),
                Side::new(output, input.output_tree, node),
                &self.options,
            );
            rules::align_node(&mut cx);
            (anchors, problems) = cx.finish();

            if self.options.parentheses
                && src_node.parenthesized
                && node.parenthesized
                && let (Some(sp), Some(op)) = (
                    wrapping_parens(source, src_node.span),
                    wrapping_parens(output, node.span),
                )
            {
                source_bound = widen(source_bound, sp);
                output_bound = widen(output_bound, op);
                anchors.push(AnchorPair::new(sp.0, op.0));
                anchors.push(AnchorPair::new(sp.1, op.1));
            }
        } else {
            trace!(
                "{} {} has {} predecessors, coarse range only",
                node.kind(),
                id,
                link.predecessors.len()
            );
        }

        let before = anchors.len();
        anchors.retain(|a| source_bound.contains(a.source) && output_bound.contains(a.output));
        if anchors.len() < before {
            trace!(
                "Dropped {} anchors outside the bounds of {}",
                before - anchors.len(),
                id
            );
        }
        anchors.sort_by_key(|a| (a.output, a.source));
        anchors.dedup();

        Some(NodeAlignment {
            range: CorrespondenceRange {
                source: source_bound,
                output: output_bound,
                node: id,
                output_kind: node.kind(),
                anchors,
                predecessors: link.predecessors.clone(),
                steps: link.steps.clone(),
            },
            problems,
        })
    }

    fn report(
        &self,
        result: &mut AlignmentResult,
        kind: DiagnosticKind,
        node: NodeId,
        (output_span, source_span): (TextRange, TextRange),
    ) {
        let code = match kind {
            DiagnosticKind::UnsupportedPairing { .. } => DiagnosticCode::UnsupportedPairing,
            DiagnosticKind::AmbiguousStructure { .. } => DiagnosticCode::AmbiguousStructure,
        };
        let Some(severity) = Severity::from_rule(self.options.severity(code)) else {
            trace!("Suppressed {} for {}", code, node);
            return;
        };
        let diagnostic = AlignDiagnostic {
            kind,
            severity,
            node,
            output_span,
            source_span: Some(source_span),
        };
        warn!("{}", diagnostic);
        result.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphmap_core::tree::{
        ExpressionStatement, Identifier, NodeData, NumericLiteral, Program, TreeBuilder,
    };

    fn span(s: u32, e: u32) -> TextRange {
        TextRange::new(TextSize::from(s), TextSize::from(e))
    }

    /// `(a);` with the identifier parenthesized
    fn paren_tree() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let a = b.ident(1, "a");
        b.parenthesize(a);
        let stmt = b.node(
            0,
            4,
            NodeData::ExpressionStatement(ExpressionStatement { expression: a }),
        );
        let program = b.node(0, 4, NodeData::Program(Program { body: vec![stmt] }));
        b.finish(program)
    }

    #[test]
    fn test_wrapping_parens() {
        let text = SourceText::new("( a )");
        assert_eq!(
            wrapping_parens(text, span(2, 3)),
            Some((TextSize::from(0), TextSize::from(4)))
        );
        assert_eq!(wrapping_parens(SourceText::new("a"), span(0, 1)), None);
    }

    #[test]
    fn test_parentheses_widen_both_bounds() {
        let tree = paren_tree();
        let fixture = AlignmentFixture::new("(a);", "(a);", tree.clone(), tree);
        let result = Aligner::default().align_fixture(&fixture);
        let ident = result
            .ranges
            .iter()
            .find(|r| r.output_kind == SyntaxKind::Identifier)
            .unwrap();
        assert_eq!(ident.output, span(0, 3));
        assert_eq!(ident.source, span(0, 3));
        assert!(ident.anchors.contains(&AnchorPair::new(TextSize::from(2), TextSize::from(2))));
    }

    #[test]
    fn test_parentheses_off_keeps_node_bounds() {
        let tree = paren_tree();
        let fixture = AlignmentFixture::new("(a);", "(a);", tree.clone(), tree);
        let options = AlignOptions {
            parentheses: false,
            ..AlignOptions::default()
        };
        let result = Aligner::new(options).align_fixture(&fixture);
        let ident = result
            .ranges
            .iter()
            .find(|r| r.output_kind == SyntaxKind::Identifier)
            .unwrap();
        assert_eq!(ident.output, span(1, 2));
    }

    #[test]
    fn test_synthesized_nodes_are_listed_and_inserted() {
        let mut b = TreeBuilder::new();
        let n = b.node(0, 1, NodeData::NumericLiteral(NumericLiteral { value: 1.0 }));
        let source = b.finish(n);

        let mut b = TreeBuilder::new();
        let helper = b.node(0, 6, NodeData::Identifier(Identifier { name: "helper".into() }));
        let output = b.finish(helper);

        let mut table = ProvenanceTable::new();
        table.insert(
            helper,
            ProvenanceLink {
                predecessors: Vec::new(),
                steps: vec![TransformStep::new("runtime-helpers")],
            },
        );
        let fixture = AlignmentFixture::new("1", "helper", source, output).with_provenance(table);
        let result = Aligner::default().align_fixture(&fixture);

        assert!(result.ranges.is_empty());
        assert_eq!(result.synthesized.len(), 1);
        assert_eq!(result.synthesized[0].steps[0].transformer, "runtime-helpers");
        assert_eq!(result.classes.inserted, vec![span(0, 6)]);
        assert_eq!(result.classes.removed, vec![span(0, 1)]);
    }
}
