//! Per-node rule context
//!
//! A rule sees the node on each side through a [`Side`]: its buffer, its
//! tree and helpers for locating tokens between known child boundaries.
//! Anchors are collected in a [`RuleContext`]; a token is only anchored when
//! it is actually present at the computed offset on both sides.

use morphmap_core::text::SourceText;
use morphmap_core::tree::{NodeId, SyntaxNode, SyntaxTree};
use morphmap_core::{AlignOptions, AnchorPair, TextRange, TextSize};

/// One side (source or output) of the node pair being aligned
#[derive(Clone, Copy)]
pub struct Side<'a> {
    pub text: SourceText<'a>,
    pub tree: &'a SyntaxTree,
    pub node: &'a SyntaxNode,
}

impl<'a> Side<'a> {
    pub fn new(text: SourceText<'a>, tree: &'a SyntaxTree, node: &'a SyntaxNode) -> Self {
        Self { text, tree, node }
    }

    pub fn start(&self) -> TextSize {
        self.node.start()
    }

    pub fn end(&self) -> TextSize {
        self.node.end()
    }

    pub fn span(&self) -> TextRange {
        self.node.span
    }

    pub fn child(&self, id: NodeId) -> Option<&'a SyntaxNode> {
        self.tree.get(id)
    }

    /// Span of a child including the parentheses wrapping it
    pub fn outer(&self, id: NodeId) -> Option<TextRange> {
        let child = self.child(id)?;
        if !child.parenthesized {
            return Some(child.span);
        }
        let open = self.text.rfind_between(self.start(), child.start(), "(")?;
        let close = self.text.find_between(child.end(), self.end(), ")")?;
        Some(TextRange::new(open, close + TextSize::from(1)))
    }

    pub fn outer_start(&self, id: NodeId) -> Option<TextSize> {
        self.outer(id).map(|r| r.start())
    }

    pub fn outer_end(&self, id: NodeId) -> Option<TextSize> {
        self.outer(id).map(|r| r.end())
    }

    /// First `needle` in `[from, to)`
    pub fn find(&self, from: TextSize, to: TextSize, needle: &str) -> Option<TextSize> {
        self.text.find_between(from, to, needle)
    }

    /// Last `needle` in `[from, to)`
    pub fn rfind(&self, from: TextSize, to: TextSize, needle: &str) -> Option<TextSize> {
        self.text.rfind_between(from, to, needle)
    }

    /// First `needle` between the end of child `after` and the start of child `before`
    pub fn between(&self, after: NodeId, before: NodeId, needle: &str) -> Option<TextSize> {
        self.find(self.outer_end(after)?, self.outer_start(before)?, needle)
    }

    /// First `needle` from the node start up to child `before`
    pub fn before(&self, before: NodeId, needle: &str) -> Option<TextSize> {
        self.find(self.start(), self.outer_start(before)?, needle)
    }

    /// First `needle` from the end of child `after` up to the node end
    pub fn after(&self, after: NodeId, needle: &str) -> Option<TextSize> {
        self.find(self.outer_end(after)?, self.end(), needle)
    }

    /// Last `needle` from the end of child `after` up to the node end
    pub fn last_after(&self, after: NodeId, needle: &str) -> Option<TextSize> {
        self.rfind(self.outer_end(after)?, self.end(), needle)
    }

    /// Offset of `token` if the node text starts with it
    pub fn leading(&self, token: &str) -> Option<TextSize> {
        self.text
            .starts_with_at(self.start(), token)
            .then(|| self.start())
    }

    /// Offset of `token` if the node text ends with it
    pub fn trailing(&self, token: &str) -> Option<TextSize> {
        if !self.text.ends_with_at(self.end(), token) {
            return None;
        }
        self.end().checked_sub(TextSize::of(token))
    }

    /// Text of the node itself
    pub fn slice(&self) -> Option<&'a str> {
        self.text.slice(self.span())
    }

    pub fn char_at(&self, offset: TextSize) -> Option<char> {
        self.text.char_at(offset)
    }
}

/// A problem a rule declines to paper over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleProblem {
    Unsupported,
    Ambiguous(String),
}

/// Collects anchors and problems for one node pair
pub struct RuleContext<'a> {
    pub src: Side<'a>,
    pub out: Side<'a>,
    pub options: &'a AlignOptions,
    anchors: Vec<AnchorPair>,
    problems: Vec<RuleProblem>,
}

impl<'a> RuleContext<'a> {
    pub fn new(src: Side<'a>, out: Side<'a>, options: &'a AlignOptions) -> Self {
        Self {
            src,
            out,
            options,
            anchors: Vec::new(),
            problems: Vec::new(),
        }
    }

    /// Evaluate `f` on both sides of a same-kind pair
    pub fn both<T, R>(
        &self,
        s: &T,
        o: &T,
        f: impl Fn(&Side<'a>, &T) -> Option<R>,
    ) -> (Option<R>, Option<R>) {
        (f(&self.src, s), f(&self.out, o))
    }

    /// Evaluate `f` on both sides without a payload
    pub fn sides<R>(&self, f: impl Fn(&Side<'a>) -> Option<R>) -> (Option<R>, Option<R>) {
        (f(&self.src), f(&self.out))
    }

    /// Anchor every character of `token` found at the given offsets
    ///
    /// Nothing is emitted unless both offsets are known and `token` really
    /// appears at each of them.
    pub fn token(&mut self, at: (Option<TextSize>, Option<TextSize>), token: &str) {
        let (Some(s), Some(o)) = at else { return };
        if !self.src.text.starts_with_at(s, token) || !self.out.text.starts_with_at(o, token) {
            return;
        }
        for (i, _) in token.char_indices() {
            let i = TextSize::from(i as u32);
            self.anchors.push(AnchorPair::new(s + i, o + i));
        }
    }

    /// Anchor a token that may be spelled differently on each side
    ///
    /// Equal spellings give plain pairs; otherwise one substitution pair is
    /// emitted per character of the source token, clamped to the last
    /// character of the output token.
    pub fn token_or_substitute(
        &mut self,
        at: (Option<TextSize>, Option<TextSize>),
        source_token: &str,
        output_token: &str,
    ) {
        if source_token == output_token {
            self.token(at, source_token);
            return;
        }
        let (Some(s), Some(o)) = at else { return };
        if !self.src.text.starts_with_at(s, source_token)
            || !self.out.text.starts_with_at(o, output_token)
        {
            return;
        }
        crate::remap::keyword(self, s, source_token, o, output_token);
    }

    /// Anchor two single characters that differ
    pub fn substitute(&mut self, s: TextSize, o: TextSize) {
        let sc = self.src.char_at(s);
        let oc = self.out.char_at(o);
        if sc.is_none() && oc.is_none() {
            return;
        }
        if sc == oc {
            self.anchors.push(AnchorPair::new(s, o));
        } else {
            self.anchors.push(AnchorPair::substitution(s, o, sc, oc));
        }
    }

    /// Push an already computed pair
    pub fn push(&mut self, pair: AnchorPair) {
        self.anchors.push(pair);
    }

    /// Anchor `len` bytes 1:1 starting at `s` and `o`, one pair per character
    pub fn run(&mut self, s: TextSize, o: TextSize, len: TextSize) {
        let (Some(src), Some(out)) = (
            morphmap_core::text::checked_range(s, s + len).and_then(|r| self.src.text.slice(r)),
            morphmap_core::text::checked_range(o, o + len).and_then(|r| self.out.text.slice(r)),
        ) else {
            return;
        };
        if src != out {
            return;
        }
        for (i, _) in src.char_indices() {
            let i = TextSize::from(i as u32);
            self.anchors.push(AnchorPair::new(s + i, o + i));
        }
    }

    pub fn ambiguous(&mut self, reason: impl Into<String>) {
        self.problems.push(RuleProblem::Ambiguous(reason.into()));
    }

    pub fn unsupported(&mut self) {
        self.problems.push(RuleProblem::Unsupported);
    }

    pub fn anchors(&self) -> &[AnchorPair] {
        &self.anchors
    }

    pub fn finish(self) -> (Vec<AnchorPair>, Vec<RuleProblem>) {
        (self.anchors, self.problems)
    }
}
