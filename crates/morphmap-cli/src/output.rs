//! Output formatting for alignment results and queries

use anyhow::Result;
use colored::*;
use morphmap_core::diagnostics::Severity;
use morphmap_core::{AlignmentFixture, AnchorPair, TextRange, TextSize};
use morphmap_rules::{AlignmentResult, CharClass, Coordinate, CorrespondenceRange};

use crate::OutputFormat;

fn span(range: TextRange) -> String {
    format!("{}..{}", u32::from(range.start()), u32::from(range.end()))
}

fn spans(ranges: &[TextRange]) -> String {
    if ranges.is_empty() {
        return "-".to_string();
    }
    ranges.iter().map(|r| span(*r)).collect::<Vec<_>>().join(", ")
}

fn anchor(pair: &AnchorPair) -> String {
    let base = format!("{}→{}", u32::from(pair.source), u32::from(pair.output));
    match pair.substitution {
        Some(sub) => {
            let show = |c: Option<char>| c.map_or("∅".to_string(), |c| format!("{c:?}"));
            format!("{base} {}→{}", show(sub.source_char), show(sub.output_char))
        }
        None => base,
    }
}

/// Nesting depth of each range in set order
fn depths(ranges: &[CorrespondenceRange]) -> Vec<usize> {
    let mut open: Vec<TextRange> = Vec::new();
    ranges
        .iter()
        .map(|range| {
            while open.last().is_some_and(|o| !o.contains_range(range.output)) {
                open.pop();
            }
            let depth = open.len();
            open.push(range.output);
            depth
        })
        .collect()
}

/// Result of `morphmap query`
pub struct QueryReport<'a> {
    pub side: Coordinate,
    pub offset: TextSize,
    pub ranges: Vec<&'a CorrespondenceRange>,
    pub counterpart: Option<TextSize>,
    pub class: Option<CharClass>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn print_alignment(
        &self,
        fixture: &AlignmentFixture,
        result: &AlignmentResult,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Human => self.print_alignment_human(fixture, result),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(result)?);
                Ok(())
            }
            OutputFormat::Compact => self.print_alignment_compact(result),
        }
    }

    fn print_alignment_human(
        &self,
        fixture: &AlignmentFixture,
        result: &AlignmentResult,
    ) -> Result<()> {
        println!("{} ({})", "Ranges".bold(), result.ranges.len());
        let ranges = result.ranges.as_slice();
        for (range, depth) in ranges.iter().zip(depths(ranges)) {
            let text = fixture
                .output
                .get(usize::from(range.output.start())..usize::from(range.output.end()))
                .unwrap_or_default();
            let preview: String = text.chars().take(24).collect();
            println!(
                "{}{} {} ← {}  {}",
                "  ".repeat(depth + 1),
                range.output_kind.as_str().cyan(),
                span(range.output),
                span(range.source),
                format!("{preview:?}").dimmed()
            );
            if !range.anchors.is_empty() {
                let anchors: Vec<_> = range.anchors.iter().map(anchor).collect();
                println!("{}  {}", "  ".repeat(depth + 1), anchors.join(" ").dimmed());
            }
        }

        if !result.synthesized.is_empty() {
            println!("\n{} ({})", "Synthesized".bold(), result.synthesized.len());
            for node in &result.synthesized {
                let steps: Vec<_> = node.steps.iter().map(|s| s.transformer.as_str()).collect();
                println!(
                    "  {} {} by {}",
                    node.kind.as_str().cyan(),
                    span(node.output),
                    if steps.is_empty() { "-".to_string() } else { steps.join(", ") }
                );
            }
        }

        let classes = &result.classes;
        println!("\n{}", "Characters".bold());
        println!("  carried:     {}", spans(&classes.carried).green());
        println!("  substituted: {}", spans(&classes.substituted).yellow());
        println!("  inserted:    {}", spans(&classes.inserted).blue());
        println!("  removed:     {}", spans(&classes.removed).red());

        if result.diagnostics.is_empty() {
            println!("\n{} No diagnostics", "✅".green());
        } else {
            println!("\n{} ({})", "Diagnostics".bold(), result.diagnostics.len());
            for diagnostic in &result.diagnostics {
                let line = diagnostic.to_string();
                let line = match diagnostic.severity {
                    Severity::Error => line.red(),
                    Severity::Warning => line.yellow(),
                    Severity::Info => line.blue(),
                };
                println!("  {line}");
            }
        }
        Ok(())
    }

    fn print_alignment_compact(&self, result: &AlignmentResult) -> Result<()> {
        for range in &result.ranges {
            println!(
                "{} {} {} {}",
                range.output_kind,
                span(range.output),
                span(range.source),
                range.anchors.len()
            );
        }
        for diagnostic in &result.diagnostics {
            println!("{diagnostic}");
        }
        Ok(())
    }

    pub fn print_query(&self, report: &QueryReport<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "side": report.side,
                    "offset": u32::from(report.offset),
                    "counterpart": report.counterpart.map(u32::from),
                    "class": report.class,
                    "ranges": report.ranges,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Compact => {
                let counterpart = report
                    .counterpart
                    .map_or("-".to_string(), |c| u32::from(c).to_string());
                println!("{} {}", u32::from(report.offset), counterpart);
            }
            OutputFormat::Human => {
                let side = match report.side {
                    Coordinate::Source => "source",
                    Coordinate::Output => "output",
                };
                println!(
                    "{} {side} offset {}",
                    "Query".bold(),
                    u32::from(report.offset)
                );
                match report.counterpart {
                    Some(c) => println!(
                        "  counterpart: {} offset {}",
                        match report.side.other() {
                            Coordinate::Source => "source",
                            Coordinate::Output => "output",
                        },
                        u32::from(c).to_string().green()
                    ),
                    None => println!("  counterpart: {}", "none".dimmed()),
                }
                if let Some(class) = report.class {
                    println!("  class: {}", format!("{class:?}").to_lowercase());
                }
                if report.ranges.is_empty() {
                    println!("  no range holds this offset");
                }
                for (depth, range) in report.ranges.iter().enumerate() {
                    println!(
                        "{}{} {} ← {}",
                        "  ".repeat(depth + 1),
                        range.output_kind.as_str().cyan(),
                        span(range.output),
                        span(range.source)
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphmap_core::{NodeId, SyntaxKind};

    fn range(output: (u32, u32)) -> CorrespondenceRange {
        let span = TextRange::new(TextSize::from(output.0), TextSize::from(output.1));
        CorrespondenceRange {
            source: span,
            output: span,
            node: NodeId(0),
            output_kind: SyntaxKind::Identifier,
            anchors: Vec::new(),
            predecessors: Vec::new(),
            steps: Vec::new(),
        }
    }

    #[test]
    fn test_depths_follow_nesting() {
        let ranges = [range((0, 10)), range((0, 4)), range((1, 2)), range((5, 9))];
        assert_eq!(depths(&ranges), vec![0, 1, 2, 1]);
    }

    #[test]
    fn test_anchor_rendering() {
        let plain = AnchorPair::new(TextSize::from(3), TextSize::from(1));
        assert_eq!(anchor(&plain), "3→1");
        let sub = AnchorPair::substitution(TextSize::from(4), TextSize::from(2), Some('t'), None);
        assert_eq!(anchor(&sub), "4→2 't'→∅");
    }
}
