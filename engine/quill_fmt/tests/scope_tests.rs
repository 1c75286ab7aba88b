//! Behavior of the span-scoping rule: self-pinning, enclosing-node
//! suppression, and clipping of wrapped-chain candidates.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use quill_fmt::operations::{
    IndentBlockOperation, IndentBlockOption, SuppressOperation, SuppressOption,
};
use quill_fmt::{
    FormatOptions, FormattingRule, NextIndentOps, NextSuppressOps, NodeContext, RuleChain,
    ScopedIndentationRule,
};
use quill_tree::{NodeId, Span, StringInterner, SyntaxTree, TokenId, TreeBuilder};

// Tokens p[8,10)  q[12,14)  r[16,18)  s[20,22), document length 24.
//
//   file          [8,22)
//     mid         [8,22)
//       head      p q
//       tail      r s
//
// The query span [11,19) normalizes to [10,20) with bounding tokens p and
// s, so the scope root is `mid` and `file` strictly encloses the scope.
fn scoped_tree(interner: &StringInterner) -> SyntaxTree {
    let mut builder = TreeBuilder::new(interner);
    let steps = (|| {
        builder.open("file")?;
        builder.open("mid")?;
        builder.open("head")?;
        builder.token("p", Span::new(8, 10))?;
        builder.token("q", Span::new(12, 14))?;
        builder.close()?;
        builder.open("tail")?;
        builder.token("r", Span::new(16, 18))?;
        builder.token("s", Span::new(20, 22))?;
        builder.close()?;
        builder.close()?;
        builder.close()
    })();
    steps.unwrap();
    builder.finish_with_len(24).unwrap()
}

const FILE: NodeId = NodeId::new(0);
const MID: NodeId = NodeId::new(1);
const HEAD: NodeId = NodeId::new(2);

const P: TokenId = TokenId::new(0);
const Q: TokenId = TokenId::new(1);
const R: TokenId = TokenId::new(2);
const S: TokenId = TokenId::new(3);

const QUERY: Span = Span::new(11, 19);
const SCOPE: Span = Span::new(10, 20);
const BASE: i32 = 4;

fn self_pin() -> IndentBlockOperation {
    IndentBlockOperation::new(P, S, SCOPE, BASE, IndentBlockOption::AbsolutePosition)
}

/// Contributes a fixed candidate list and never delegates.
struct FixedIndentRule {
    ops: Vec<IndentBlockOperation>,
}

impl FormattingRule for FixedIndentRule {
    fn add_indent_block_operations(
        &self,
        ops: &mut Vec<IndentBlockOperation>,
        _ctx: NodeContext<'_>,
        _next: NextIndentOps<'_>,
    ) {
        ops.extend(self.ops.iter().copied());
    }
}

/// Contributes one fixed suppress operation and never delegates.
struct FixedSuppressRule {
    op: SuppressOperation,
}

impl FormattingRule for FixedSuppressRule {
    fn add_suppress_operations(
        &self,
        ops: &mut Vec<SuppressOperation>,
        _ctx: NodeContext<'_>,
        _next: NextSuppressOps<'_>,
    ) {
        ops.push(self.op);
    }
}

fn relative(span: Span, indentation: i32) -> IndentBlockOperation {
    IndentBlockOperation::new(Q, R, span, indentation, IndentBlockOption::RelativePosition)
}

#[test]
fn construction_normalizes_the_query_span() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();
    assert_eq!(scoped.span(), SCOPE);
    assert_eq!(scoped.base_indentation(), BASE);
}

#[test]
fn scope_root_query_yields_exactly_the_self_pin() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    // a base chain that would happily contribute is never consulted for
    // the scope root
    let base = FixedIndentRule {
        ops: vec![relative(Span::new(12, 18), 9)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.indent_block_operations(MID), vec![self_pin()]);
}

#[test]
fn node_enclosing_the_scope_yields_nothing() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let base = FixedIndentRule {
        ops: vec![relative(Span::new(12, 18), 9)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.indent_block_operations(FILE), vec![]);
}

#[test]
fn straddling_operations_are_clamped_to_the_scope() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let base = FixedIndentRule {
        ops: vec![relative(Span::new(5, 15), 2), relative(Span::new(15, 25), 3)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    // token boundaries, indentation, and option kind survive; only the
    // spans are cut down to the scope
    assert_eq!(
        chain.indent_block_operations(HEAD),
        vec![relative(Span::new(10, 15), 2), relative(Span::new(15, 20), 3)]
    );
}

#[test]
fn operation_covering_the_whole_scope_is_dropped() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let base = FixedIndentRule {
        ops: vec![relative(Span::new(5, 25), 2)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.indent_block_operations(HEAD), vec![]);
}

#[test]
fn operation_inside_the_scope_is_kept_unchanged() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let inside = IndentBlockOperation::relative_to_base(P, Q, R, Span::new(12, 18), 1);
    let base = FixedIndentRule {
        ops: vec![inside],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    // field-for-field identical, base token included
    assert_eq!(chain.indent_block_operations(HEAD), vec![inside]);
}

#[test]
fn exact_span_impostor_is_dropped_but_the_literal_pin_survives() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    // same span as the scope but different indentation semantics
    let base = FixedIndentRule {
        ops: vec![relative(SCOPE, 7)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);
    assert_eq!(chain.indent_block_operations(HEAD), vec![]);

    // the literal self-pin fields pass the identity check
    let base = FixedIndentRule {
        ops: vec![self_pin()],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);
    assert_eq!(chain.indent_block_operations(HEAD), vec![self_pin()]);
}

#[test]
fn disjoint_operation_passes_through_untouched() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let stray = relative(Span::new(0, 9), 5);
    let base = FixedIndentRule { ops: vec![stray] };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.indent_block_operations(HEAD), vec![stray]);
}

#[test]
fn abutting_operation_clamps_to_an_empty_boundary_span() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    // ends exactly where the scope starts: still an intersection, and the
    // clamp leaves an empty span at the shared boundary
    let base = FixedIndentRule {
        ops: vec![relative(Span::new(5, 10), 2)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(
        chain.indent_block_operations(HEAD),
        vec![relative(Span::new(10, 10), 2)]
    );
}

#[test]
fn inner_rule_replaces_the_base_chain() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();

    let inner = FixedIndentRule {
        ops: vec![relative(Span::new(12, 18), 1)],
    };
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, Some(Box::new(inner))).unwrap();

    // the base chain's candidate must not appear: the scoped rule owns a
    // wrapped chain and never asks onward
    let base = FixedIndentRule {
        ops: vec![relative(Span::new(13, 17), 9)],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(
        chain.indent_block_operations(HEAD),
        vec![relative(Span::new(12, 18), 1)]
    );
}

#[test]
fn other_queries_pass_through_to_the_base_chain() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    let suppress = SuppressOperation::new(Q, R, Span::new(12, 18), SuppressOption::NO_WRAPPING);
    let base = FixedSuppressRule { op: suppress };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.suppress_operations(HEAD), vec![suppress]);
}

#[test]
fn other_queries_use_the_inner_rule_when_present() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();

    let inner_suppress =
        SuppressOperation::new(Q, R, Span::new(12, 14), SuppressOption::NO_SPACING);
    let scoped = ScopedIndentationRule::new(
        &tree,
        QUERY,
        BASE,
        Some(Box::new(FixedSuppressRule { op: inner_suppress })),
    )
    .unwrap();

    let base = FixedSuppressRule {
        op: SuppressOperation::new(P, S, Span::new(8, 22), SuppressOption::NO_WRAPPING),
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    assert_eq!(chain.suppress_operations(HEAD), vec![inner_suppress]);
}

#[test]
fn empty_tree_has_nothing_to_scope() {
    let interner = StringInterner::new();
    let mut builder = TreeBuilder::new(&interner);
    builder.open("file").unwrap();
    builder.close().unwrap();
    let tree = builder.finish().unwrap();

    assert!(ScopedIndentationRule::new(&tree, Span::new(0, 0), 0, None).is_none());
}

#[test]
fn clipped_output_stays_inside_the_scope() {
    let interner = StringInterner::new();
    let tree = scoped_tree(&interner);
    let options = FormatOptions::default();
    let scoped = ScopedIndentationRule::new(&tree, QUERY, BASE, None).unwrap();

    // everything here intersects the scope one way or another
    let base = FixedIndentRule {
        ops: vec![
            relative(Span::new(5, 15), 1),
            relative(Span::new(12, 18), 2),
            relative(Span::new(15, 25), 3),
            relative(Span::new(5, 25), 4),
            relative(SCOPE, 5),
        ],
    };
    let rules: [&dyn FormattingRule; 2] = [&scoped, &base];
    let chain = RuleChain::new(&tree, &options, rules);

    let ops = chain.indent_block_operations(HEAD);
    assert!(!ops.is_empty());
    for op in &ops {
        assert!(SCOPE.contains_span(op.span), "{} escapes {SCOPE}", op.span);
    }

    // and the self-pin obeys the same containment
    for op in chain.indent_block_operations(MID) {
        assert!(SCOPE.contains_span(op.span));
    }
}
