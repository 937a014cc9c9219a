//! Token anchoring for each construct rule
//!
//! The catalogue aligns every construct with an unchanged copy of itself:
//! each fixed token must be anchored onto its own offset. The remaining
//! tests rewrite delimiters or reshape nodes and check the remapped pairs.

use morphmap_core::tree::{
    ArgumentStatement, ArrowFunction, BinaryLike, BlockStatement, Call, CatchClause, Function,
    ForInStatement, ForOfStatement, ForStatement, Identifier, ImportDeclaration, ImportLocal,
    ImportSpecifier, JsxElement, JsxText, JumpStatement, Member, MethodKind, NumericLiteral,
    ObjectMethod, RegExpLiteral, StringLiteral, SwitchCase, SwitchStatement, TemplateElement,
    TemplateLiteral, TryStatement, UpdateExpression, WhileStatement,
};
use morphmap_core::{
    AlignmentFixture, AnchorPair, NodeData, NodeId, ProvenanceLink, ProvenanceTable, SyntaxKind,
    SyntaxTree, TextRange, TextSize, TreeBuilder,
};
use morphmap_rules::{Aligner, AlignmentResult, CorrespondenceRange};

fn span(s: u32, e: u32) -> TextRange {
    TextRange::new(TextSize::from(s), TextSize::from(e))
}

fn at(n: u32) -> TextSize {
    TextSize::from(n)
}

fn block(b: &mut TreeBuilder, start: u32) -> NodeId {
    b.node(
        start,
        start + 2,
        NodeData::BlockStatement(BlockStatement::default()),
    )
}

fn num(b: &mut TreeBuilder, start: u32, value: f64) -> NodeId {
    b.node(
        start,
        start + 1,
        NodeData::NumericLiteral(NumericLiteral { value }),
    )
}

fn string(b: &mut TreeBuilder, start: u32, raw: &str) -> NodeId {
    b.node(
        start,
        start + raw.len() as u32,
        NodeData::StringLiteral(StringLiteral {
            value: raw[1..raw.len() - 1].to_string(),
        }),
    )
}

fn call(callee: NodeId, arguments: Vec<NodeId>, optional: bool) -> Call {
    Call {
        callee,
        arguments,
        optional,
    }
}

fn member(object: NodeId, property: NodeId, computed: bool, optional: bool) -> Member {
    Member {
        object,
        property,
        computed,
        optional,
    }
}

fn align(fixture: &AlignmentFixture) -> AlignmentResult {
    fixture.validate().unwrap();
    Aligner::default().align_fixture(fixture)
}

fn range_at(result: &AlignmentResult, kind: SyntaxKind, start: u32) -> &CorrespondenceRange {
    result
        .ranges
        .iter()
        .find(|r| r.output_kind == kind && r.output.start() == at(start))
        .unwrap_or_else(|| panic!("no {kind} range at {start}"))
}

fn offsets(range: &CorrespondenceRange) -> Vec<(u32, u32)> {
    range
        .anchors
        .iter()
        .map(|a| (u32::from(a.source), u32::from(a.output)))
        .collect()
}

/// One construct aligned with itself
struct Case {
    text: &'static str,
    tree: SyntaxTree,
    kind: SyntaxKind,
    start: u32,
    tokens: Vec<u32>,
}

impl Case {
    fn root(text: &'static str, tree: SyntaxTree, tokens: Vec<u32>) -> Self {
        let kind = tree.root_node().map(|n| n.kind()).unwrap();
        Self {
            text,
            tree,
            kind,
            start: 0,
            tokens,
        }
    }

    fn inner(mut self, kind: SyntaxKind, start: u32, tokens: Vec<u32>) -> Self {
        self.kind = kind;
        self.start = start;
        self.tokens = tokens;
        self
    }
}

fn for_full() -> Case {
    let mut b = TreeBuilder::new();
    let i = b.ident(5, "i");
    let zero = num(&mut b, 9, 0.0);
    let init = b.node(
        5,
        10,
        NodeData::AssignmentExpression(BinaryLike {
            operator: "=".into(),
            left: i,
            right: zero,
        }),
    );
    let i = b.ident(12, "i");
    let n = b.ident(16, "n");
    let test = b.node(
        12,
        17,
        NodeData::BinaryExpression(BinaryLike {
            operator: "<".into(),
            left: i,
            right: n,
        }),
    );
    let i = b.ident(19, "i");
    let update = b.node(
        19,
        22,
        NodeData::UpdateExpression(UpdateExpression {
            operator: "++".into(),
            argument: i,
            prefix: false,
        }),
    );
    let body = block(&mut b, 24);
    let root = b.node(
        0,
        26,
        NodeData::ForStatement(ForStatement {
            init: Some(init),
            test: Some(test),
            update: Some(update),
            body,
        }),
    );
    Case::root(
        "for (i = 0; i < n; i++) {}",
        b.finish(root),
        vec![0, 1, 2, 4, 10, 17, 22],
    )
}

fn for_empty() -> Case {
    let mut b = TreeBuilder::new();
    let body = block(&mut b, 9);
    let root = b.node(
        0,
        11,
        NodeData::ForStatement(ForStatement {
            init: None,
            test: None,
            update: None,
            body,
        }),
    );
    Case::root("for (;;) {}", b.finish(root), vec![0, 1, 2, 4, 5, 6, 7])
}

fn for_in() -> Case {
    let mut b = TreeBuilder::new();
    let left = b.ident(5, "k");
    let right = b.ident(10, "o");
    let body = block(&mut b, 13);
    let root = b.node(
        0,
        15,
        NodeData::ForInStatement(ForInStatement { left, right, body }),
    );
    Case::root("for (k in o) {}", b.finish(root), vec![0, 1, 2, 4, 7, 8, 11])
}

fn for_await_of() -> Case {
    let mut b = TreeBuilder::new();
    let left = b.ident(11, "x");
    let right = b.ident(16, "xs");
    let body = block(&mut b, 20);
    let root = b.node(
        0,
        22,
        NodeData::ForOfStatement(ForOfStatement {
            left,
            right,
            body,
            is_await: true,
        }),
    );
    Case::root(
        "for await (x of xs) {}",
        b.finish(root),
        vec![0, 1, 2, 4, 5, 6, 7, 8, 10, 13, 14, 18],
    )
}

fn while_loop() -> Case {
    let mut b = TreeBuilder::new();
    let test = b.ident(7, "a");
    let body = b.node(10, 11, NodeData::EmptyStatement);
    let root = b.node(
        0,
        11,
        NodeData::WhileStatement(WhileStatement { test, body }),
    );
    Case::root("while (a) ;", b.finish(root), vec![0, 1, 2, 3, 4, 6, 8])
}

fn do_while() -> Case {
    let mut b = TreeBuilder::new();
    let body = b.node(3, 4, NodeData::EmptyStatement);
    let test = b.ident(12, "a");
    let root = b.node(
        0,
        15,
        NodeData::DoWhileStatement(WhileStatement { test, body }),
    );
    Case::root(
        "do ; while (a);",
        b.finish(root),
        vec![0, 1, 5, 6, 7, 8, 9, 11, 13, 14],
    )
}

const SWITCH: &str = "switch (x) { case 1: break; default: }";

fn switch() -> Case {
    let mut b = TreeBuilder::new();
    let discriminant = b.ident(8, "x");
    let one = num(&mut b, 18, 1.0);
    let brk = b.node(
        21,
        27,
        NodeData::BreakStatement(JumpStatement::default()),
    );
    let case = b.node(
        13,
        27,
        NodeData::SwitchCase(SwitchCase {
            test: Some(one),
            consequent: vec![brk],
        }),
    );
    let default = b.node(28, 36, NodeData::SwitchCase(SwitchCase::default()));
    let root = b.node(
        0,
        38,
        NodeData::SwitchStatement(SwitchStatement {
            discriminant,
            cases: vec![case, default],
        }),
    );
    Case::root(
        SWITCH,
        b.finish(root),
        vec![0, 1, 2, 3, 4, 5, 7, 9, 11, 37],
    )
}

const TRY: &str = "try {} catch (e) {} finally {}";

fn try_catch() -> Case {
    let mut b = TreeBuilder::new();
    let body = block(&mut b, 4);
    let param = b.ident(14, "e");
    let catch_body = block(&mut b, 17);
    let handler = b.node(
        7,
        19,
        NodeData::CatchClause(CatchClause {
            param: Some(param),
            body: catch_body,
        }),
    );
    let finalizer = block(&mut b, 28);
    let root = b.node(
        0,
        30,
        NodeData::TryStatement(TryStatement {
            block: body,
            handler: Some(handler),
            finalizer: Some(finalizer),
        }),
    );
    Case::root(
        TRY,
        b.finish(root),
        vec![0, 1, 2, 20, 21, 22, 23, 24, 25, 26],
    )
}

fn call_without_arguments() -> Case {
    let mut b = TreeBuilder::new();
    let f = b.ident(0, "f");
    let root = b.node(0, 3, NodeData::CallExpression(call(f, Vec::new(), false)));
    Case::root("f()", b.finish(root), vec![1, 2])
}

fn call_with_arguments() -> Case {
    let mut b = TreeBuilder::new();
    let f = b.ident(0, "f");
    let a = b.ident(2, "a");
    let bb = b.ident(5, "b");
    let root = b.node(0, 7, NodeData::CallExpression(call(f, vec![a, bb], false)));
    Case::root("f(a, b)", b.finish(root), vec![1, 3, 6])
}

fn optional_call() -> Case {
    let mut b = TreeBuilder::new();
    let f = b.ident(0, "f");
    let a = b.ident(4, "a");
    let root = b.node(
        0,
        6,
        NodeData::OptionalCallExpression(call(f, vec![a], true)),
    );
    Case::root("f?.(a)", b.finish(root), vec![1, 2, 3, 5])
}

fn new_with_arguments() -> Case {
    let mut b = TreeBuilder::new();
    let callee = b.ident(4, "A");
    let arg = b.ident(6, "b");
    let root = b.node(0, 8, NodeData::NewExpression(call(callee, vec![arg], false)));
    Case::root("new A(b)", b.finish(root), vec![0, 1, 2, 5, 7])
}

fn new_without_arguments() -> Case {
    let mut b = TreeBuilder::new();
    let callee = b.ident(4, "A");
    let root = b.node(0, 5, NodeData::NewExpression(call(callee, Vec::new(), false)));
    Case::root("new A", b.finish(root), vec![0, 1, 2])
}

fn computed_member() -> Case {
    let mut b = TreeBuilder::new();
    let object = b.ident(0, "a");
    let property = b.ident(2, "b");
    let root = b.node(
        0,
        4,
        NodeData::MemberExpression(member(object, property, true, false)),
    );
    Case::root("a[b]", b.finish(root), vec![1, 3])
}

fn optional_member() -> Case {
    let mut b = TreeBuilder::new();
    let object = b.ident(0, "a");
    let property = b.ident(3, "b");
    let root = b.node(
        0,
        4,
        NodeData::OptionalMemberExpression(member(object, property, false, true)),
    );
    Case::root("a?.b", b.finish(root), vec![1, 2])
}

fn dotted_member() -> Case {
    let mut b = TreeBuilder::new();
    let object = b.ident(0, "a");
    let property = b.ident(2, "b");
    let root = b.node(
        0,
        3,
        NodeData::MemberExpression(member(object, property, false, false)),
    );
    Case::root("a.b", b.finish(root), vec![1])
}

fn template() -> Case {
    let mut b = TreeBuilder::new();
    let head = b.node(
        1,
        2,
        NodeData::TemplateElement(TemplateElement {
            raw: "a".into(),
            tail: false,
        }),
    );
    let expression = b.ident(4, "b");
    let tail = b.node(
        6,
        7,
        NodeData::TemplateElement(TemplateElement {
            raw: "c".into(),
            tail: true,
        }),
    );
    let root = b.node(
        0,
        8,
        NodeData::TemplateLiteral(TemplateLiteral {
            quasis: vec![head, tail],
            expressions: vec![expression],
        }),
    );
    Case::root("`a${b}c`", b.finish(root), vec![0, 2, 3, 5, 7])
}

fn generator_function() -> Case {
    let mut b = TreeBuilder::new();
    let id = b.ident(10, "g");
    let a = b.ident(12, "a");
    let bb = b.ident(15, "b");
    let body = block(&mut b, 18);
    let root = b.node(
        0,
        20,
        NodeData::FunctionDeclaration(Function {
            id: Some(id),
            params: vec![a, bb],
            body,
            is_async: false,
            generator: true,
        }),
    );
    Case::root(
        "function* g(a, b) {}",
        b.finish(root),
        vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 11, 13, 16],
    )
}

fn async_arrow() -> Case {
    let mut b = TreeBuilder::new();
    let param = b.ident(7, "a");
    let body = b.ident(13, "a");
    let root = b.node(
        0,
        14,
        NodeData::ArrowFunctionExpression(ArrowFunction {
            params: vec![param],
            body,
            is_async: true,
        }),
    );
    Case::root(
        "async (a) => a",
        b.finish(root),
        vec![0, 1, 2, 3, 4, 6, 8, 10, 11],
    )
}

fn accessor(kind: MethodKind, text: &'static str, param: Option<u32>) -> Case {
    let mut b = TreeBuilder::new();
    let key = b.ident(4, "x");
    let params: Vec<_> = param.into_iter().map(|p| b.ident(p, "v")).collect();
    let body_start = text.len() as u32 - 2;
    let body = block(&mut b, body_start);
    let root = b.node(
        0,
        text.len() as u32,
        NodeData::ObjectMethod(ObjectMethod {
            kind,
            key,
            params,
            body,
            computed: false,
            is_async: false,
            generator: false,
        }),
    );
    let close = param.map_or(6, |p| p + 1);
    Case::root(text, b.finish(root), vec![0, 1, 2, 5, close])
}

const IMPORT: &str = "import a, { b as c } from \"m\";";

fn import_named() -> Case {
    let mut b = TreeBuilder::new();
    let a = b.ident(7, "a");
    let default = b.node(
        7,
        8,
        NodeData::ImportDefaultSpecifier(ImportLocal { local: a }),
    );
    let imported = b.ident(12, "b");
    let local = b.ident(17, "c");
    let named = b.node(
        12,
        18,
        NodeData::ImportSpecifier(ImportSpecifier { imported, local }),
    );
    let source = string(&mut b, 26, "\"m\"");
    let root = b.node(
        0,
        30,
        NodeData::ImportDeclaration(ImportDeclaration {
            specifiers: vec![default, named],
            source,
        }),
    );
    Case::root(
        IMPORT,
        b.finish(root),
        vec![0, 1, 2, 3, 4, 5, 8, 10, 19, 21, 22, 23, 24, 29],
    )
}

const IMPORT_NAMESPACE: &str = "import * as ns from \"m\";";

fn import_namespace() -> Case {
    let mut b = TreeBuilder::new();
    let local = b.ident(12, "ns");
    let namespace = b.node(
        7,
        14,
        NodeData::ImportNamespaceSpecifier(ImportLocal { local }),
    );
    let source = string(&mut b, 20, "\"m\"");
    let root = b.node(
        0,
        24,
        NodeData::ImportDeclaration(ImportDeclaration {
            specifiers: vec![namespace],
            source,
        }),
    );
    Case::root(
        IMPORT_NAMESPACE,
        b.finish(root),
        vec![0, 1, 2, 3, 4, 5, 15, 16, 17, 18, 23],
    )
}

fn jsx_element() -> Case {
    let mut b = TreeBuilder::new();
    let name = b.node(1, 2, NodeData::JsxIdentifier(Identifier { name: "a".into() }));
    let text = b.node(3, 4, NodeData::JsxText(JsxText { value: "x".into() }));
    let root = b.node(
        0,
        8,
        NodeData::JsxElement(JsxElement {
            name,
            attributes: Vec::new(),
            children: vec![text],
            self_closing: false,
        }),
    );
    Case::root("<a>x</a>", b.finish(root), vec![0, 2, 4, 5, 7])
}

fn catalogue() -> Vec<Case> {
    vec![
        for_full(),
        for_empty(),
        for_in(),
        for_await_of(),
        while_loop(),
        do_while(),
        switch(),
        switch().inner(SyntaxKind::SwitchCase, 13, vec![13, 14, 15, 16, 19]),
        switch().inner(
            SyntaxKind::SwitchCase,
            28,
            vec![28, 29, 30, 31, 32, 33, 34, 35],
        ),
        switch().inner(SyntaxKind::BreakStatement, 21, vec![21, 22, 23, 24, 25, 26]),
        try_catch(),
        try_catch().inner(SyntaxKind::CatchClause, 7, vec![7, 8, 9, 10, 11, 13, 15]),
        call_without_arguments(),
        call_with_arguments(),
        optional_call(),
        new_with_arguments(),
        new_without_arguments(),
        computed_member(),
        optional_member(),
        dotted_member(),
        template(),
        generator_function(),
        async_arrow(),
        accessor(MethodKind::Get, "get x() {}", None),
        accessor(MethodKind::Set, "set x(v) {}", Some(6)),
        import_named(),
        import_named().inner(SyntaxKind::ImportSpecifier, 12, vec![14, 15]),
        import_namespace(),
        import_namespace().inner(SyntaxKind::ImportNamespaceSpecifier, 7, vec![7, 9, 10]),
        jsx_element(),
    ]
}

#[test]
fn test_unchanged_constructs_anchor_their_tokens() {
    for case in catalogue() {
        let fixture = AlignmentFixture::new(case.text, case.text, case.tree.clone(), case.tree);
        let result = align(&fixture);
        assert!(result.diagnostics.is_empty(), "{}: {:?}", case.text, result.diagnostics);

        let range = range_at(&result, case.kind, case.start);
        let expected: Vec<_> = case.tokens.iter().map(|&t| (t, t)).collect();
        assert_eq!(offsets(range), expected, "{} in {:?}", case.kind, case.text);
        assert!(range.anchors.iter().all(|a| !a.is_substitution()));
    }
}

/// Single-node trees; the roots share a kind so they zip
fn literal_pair(source: (&str, NodeData), output: (&str, NodeData)) -> AlignmentResult {
    let single = |(text, data): (&str, NodeData)| {
        let mut b = TreeBuilder::new();
        let root = b.node(0, text.len() as u32, data);
        b.finish(root)
    };
    let fixture = AlignmentFixture::new(source.0, output.0, single(source), single(output));
    align(&fixture)
}

fn regexp(pattern: &str, flags: &str) -> NodeData {
    NodeData::RegExpLiteral(RegExpLiteral {
        pattern: pattern.into(),
        flags: flags.into(),
    })
}

#[test]
fn test_string_quote_change_substitutes_delimiters() {
    let data = || NodeData::StringLiteral(StringLiteral { value: "ab".into() });
    let result = literal_pair(("'ab'", data()), ("\"ab\"", data()));

    let range = range_at(&result, SyntaxKind::StringLiteral, 0);
    assert_eq!(
        range.anchors,
        vec![
            AnchorPair::substitution(at(0), at(0), Some('\''), Some('"')),
            AnchorPair::new(at(1), at(1)),
            AnchorPair::new(at(2), at(2)),
            AnchorPair::substitution(at(3), at(3), Some('\''), Some('"')),
        ]
    );
    assert_eq!(result.classes.substituted, vec![span(0, 1), span(3, 4)]);
    assert_eq!(result.classes.carried, vec![span(1, 3)]);
}

#[test]
fn test_regexp_body_and_flags() {
    // flags rewritten: slashes and body still line up
    let result = literal_pair(("/ab/g", regexp("ab", "g")), ("/ab/i", regexp("ab", "i")));
    let range = range_at(&result, SyntaxKind::RegExpLiteral, 0);
    assert_eq!(offsets(range), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

    // body rewritten: slashes and flags still line up
    let result = literal_pair(("/ab/g", regexp("ab", "g")), ("/cd/g", regexp("cd", "g")));
    let range = range_at(&result, SyntaxKind::RegExpLiteral, 0);
    assert_eq!(offsets(range), vec![(0, 0), (3, 3), (4, 4)]);
}

/// Single-node trees of different kinds, linked by one recorded predecessor
fn remapped(source: (&str, NodeData), output: (&str, NodeData)) -> AlignmentResult {
    let (source_text, source_data) = source;
    let (output_text, output_data) = output;
    let source_kind = source_data.kind();

    let mut b = TreeBuilder::new();
    let src = b.node(0, source_text.len() as u32, source_data);
    let source_tree = b.finish(src);
    let mut b = TreeBuilder::new();
    let out = b.node(0, output_text.len() as u32, output_data);
    let output_tree = b.finish(out);

    let table: ProvenanceTable = [(
        out,
        ProvenanceLink::carried(source_kind, span(0, source_text.len() as u32), src),
    )]
    .into_iter()
    .collect();
    let fixture = AlignmentFixture::new(source_text, output_text, source_tree, output_tree)
        .with_provenance(table);
    align(&fixture)
}

fn quoted(value: &str) -> NodeData {
    NodeData::StringLiteral(StringLiteral {
        value: value.into(),
    })
}

#[test]
fn test_jsx_text_to_string_drops_padding() {
    let text = NodeData::JsxText(JsxText { value: " hi ".into() });
    let result = remapped((" hi ", text), ("\"hi\"", quoted("hi")));

    let range = range_at(&result, SyntaxKind::StringLiteral, 0);
    assert_eq!(offsets(range), vec![(1, 1), (2, 2)]);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.classes.carried, vec![span(0, 4)]);
}

#[test]
fn test_string_key_to_identifier() {
    let key = NodeData::Identifier(Identifier { name: "ab".into() });
    let result = remapped(("\"ab\"", quoted("ab")), ("ab", key));

    let range = range_at(&result, SyntaxKind::Identifier, 0);
    assert_eq!(
        range.anchors,
        vec![
            AnchorPair::substitution(at(0), at(0), Some('"'), None),
            AnchorPair::new(at(1), at(0)),
            AnchorPair::new(at(2), at(1)),
        ]
    );
    // the dropped quote does not count as a substituted output byte
    assert!(result.classes.substituted.is_empty());
    assert_eq!(result.classes.carried, vec![span(0, 2)]);
}

#[test]
fn test_plain_template_to_string() {
    let template = NodeData::TemplateLiteral(TemplateLiteral::default());
    let result = remapped(("`ab`", template), ("\"ab\"", quoted("ab")));

    let range = range_at(&result, SyntaxKind::StringLiteral, 0);
    assert_eq!(offsets(range), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert!(range.anchors[0].is_substitution());
    assert!(range.anchors[3].is_substitution());
    assert_eq!(result.classes.substituted, vec![span(0, 1), span(3, 4)]);
}

#[test]
fn test_arrow_lowered_to_function_expression() {
    // (a, b) => a
    let mut b = TreeBuilder::new();
    let a = b.ident(1, "a");
    let bb = b.ident(4, "b");
    let body = b.ident(10, "a");
    let arrow = b.node(
        0,
        11,
        NodeData::ArrowFunctionExpression(ArrowFunction {
            params: vec![a, bb],
            body,
            is_async: false,
        }),
    );
    let source = b.finish(arrow);

    // function (a, b) { return a; }
    let mut b = TreeBuilder::new();
    let out_a = b.ident(10, "a");
    let out_b = b.ident(13, "b");
    let returned = b.ident(25, "a");
    let ret = b.node(
        18,
        27,
        NodeData::ReturnStatement(ArgumentStatement {
            argument: Some(returned),
        }),
    );
    let out_body = b.node(
        16,
        29,
        NodeData::BlockStatement(BlockStatement { body: vec![ret] }),
    );
    let function = b.node(
        0,
        29,
        NodeData::FunctionExpression(Function {
            id: None,
            params: vec![out_a, out_b],
            body: out_body,
            is_async: false,
            generator: false,
        }),
    );
    let output = b.finish(function);

    let table: ProvenanceTable = [
        (
            function,
            ProvenanceLink::carried(SyntaxKind::ArrowFunctionExpression, span(0, 11), arrow),
        ),
        (out_a, ProvenanceLink::carried(SyntaxKind::Identifier, span(1, 2), a)),
        (out_b, ProvenanceLink::carried(SyntaxKind::Identifier, span(4, 5), bb)),
        (returned, ProvenanceLink::carried(SyntaxKind::Identifier, span(10, 11), body)),
    ]
    .into_iter()
    .collect();
    let fixture = AlignmentFixture::new(
        "(a, b) => a",
        "function (a, b) { return a; }",
        source,
        output,
    )
    .with_provenance(table);
    let result = align(&fixture);

    let range = range_at(&result, SyntaxKind::FunctionExpression, 0);
    assert_eq!(offsets(range), vec![(0, 9), (2, 11), (5, 14)]);
    assert!(result.diagnostics.is_empty());
    assert_eq!(offsets(range_at(&result, SyntaxKind::Identifier, 25)), vec![(10, 25)]);
    // the synthesized block around the returned value
    assert_eq!(result.classes.inserted, vec![span(16, 25), span(26, 29)]);
    assert!(result.classes.removed.is_empty());
}

#[test]
fn test_alignment_is_idempotent() {
    for case in [switch(), import_named(), generator_function()] {
        let fixture = AlignmentFixture::new(case.text, case.text, case.tree.clone(), case.tree);
        let aligner = Aligner::default();
        let first = serde_json::to_string(&aligner.align_fixture(&fixture)).unwrap();
        let second = serde_json::to_string(&aligner.align_fixture(&fixture)).unwrap();
        assert_eq!(first, second, "{}", case.text);
    }
}
