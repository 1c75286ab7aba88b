//! Continuation dispatch through an ordered rule chain.
//!
//! A query walks the chain front to back: rule 0 receives a continuation
//! bound to rule 1, and so on, until an index past the end dispatches to
//! the [`NoOpRule`] terminal. The continuation is a plain copyable value
//! (rule slice + index), not a closure, so passing one costs nothing and
//! nothing is allocated per link.
//!
//! The dispatcher never looks at operation semantics. Which trait method a
//! query maps to is decided once per operation kind by the
//! [`NodeOperation`] / [`PairOperation`] impls below; everything else is
//! shape-generic: list-accumulating for the four `add_*` kinds,
//! single-result for the two `adjust_*` kinds.

use std::marker::PhantomData;

use quill_tree::{NodeId, SyntaxTree, TokenId};
use tracing::trace;

use crate::noop::NoOpRule;
use crate::operations::{
    AdjustNewLinesOperation, AdjustSpacesOperation, AlignTokensOperation,
    AnchorIndentationOperation, IndentBlockOperation, SuppressOperation,
};
use crate::options::FormatOptions;
use crate::rule::{FormattingRule, NodeContext, PairContext};

static TERMINAL: NoOpRule = NoOpRule;

/// A list-accumulating operation kind: maps the query to its rule method.
pub trait NodeOperation: Sized {
    /// Kind name for trace events.
    const KIND: &'static str;

    /// Ask one rule to contribute for this kind.
    fn dispatch(
        rule: &dyn FormattingRule,
        ops: &mut Vec<Self>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Self>,
    );
}

/// A single-result operation kind: maps the query to its rule method.
pub trait PairOperation: Sized {
    /// Kind name for trace events.
    const KIND: &'static str;

    /// Ask one rule to decide for this kind.
    fn dispatch(
        rule: &dyn FormattingRule,
        ctx: PairContext<'_>,
        next: NextPairOp<'_, Self>,
    ) -> Option<Self>;
}

impl NodeOperation for SuppressOperation {
    const KIND: &'static str = "suppress";

    fn dispatch(
        rule: &dyn FormattingRule,
        ops: &mut Vec<Self>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Self>,
    ) {
        rule.add_suppress_operations(ops, ctx, next);
    }
}

impl NodeOperation for AnchorIndentationOperation {
    const KIND: &'static str = "anchor";

    fn dispatch(
        rule: &dyn FormattingRule,
        ops: &mut Vec<Self>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Self>,
    ) {
        rule.add_anchor_indentation_operations(ops, ctx, next);
    }
}

impl NodeOperation for IndentBlockOperation {
    const KIND: &'static str = "indent_block";

    fn dispatch(
        rule: &dyn FormattingRule,
        ops: &mut Vec<Self>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Self>,
    ) {
        rule.add_indent_block_operations(ops, ctx, next);
    }
}

impl NodeOperation for AlignTokensOperation {
    const KIND: &'static str = "align";

    fn dispatch(
        rule: &dyn FormattingRule,
        ops: &mut Vec<Self>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Self>,
    ) {
        rule.add_align_tokens_operations(ops, ctx, next);
    }
}

impl PairOperation for AdjustNewLinesOperation {
    const KIND: &'static str = "new_lines";

    fn dispatch(
        rule: &dyn FormattingRule,
        ctx: PairContext<'_>,
        next: NextPairOp<'_, Self>,
    ) -> Option<Self> {
        rule.adjust_new_lines(ctx, next)
    }
}

impl PairOperation for AdjustSpacesOperation {
    const KIND: &'static str = "spaces";

    fn dispatch(
        rule: &dyn FormattingRule,
        ctx: PairContext<'_>,
        next: NextPairOp<'_, Self>,
    ) -> Option<Self> {
        rule.adjust_spaces(ctx, next)
    }
}

/// Continuation for a list-accumulating query.
///
/// Invoking it dispatches to the rule at `index`, handing that rule a
/// continuation bound to `index + 1`; past the end of the slice it
/// dispatches to the no-op terminal.
pub struct NextNodeOps<'a, Op> {
    rules: &'a [&'a dyn FormattingRule],
    index: usize,
    _op: PhantomData<fn() -> Op>,
}

impl<Op> Clone for NextNodeOps<'_, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op> Copy for NextNodeOps<'_, Op> {}

impl<'a, Op: NodeOperation> NextNodeOps<'a, Op> {
    pub(crate) fn seed(rules: &'a [&'a dyn FormattingRule]) -> Self {
        NextNodeOps {
            rules,
            index: 0,
            _op: PhantomData,
        }
    }

    /// Let the rest of the chain contribute to `ops`.
    pub fn invoke(self, ops: &mut Vec<Op>, ctx: NodeContext<'_>) {
        let next = NextNodeOps {
            rules: self.rules,
            index: self.index + 1,
            _op: PhantomData,
        };
        match self.rules.get(self.index) {
            Some(rule) => Op::dispatch(*rule, ops, ctx, next),
            None => Op::dispatch(&TERMINAL, ops, ctx, next),
        }
    }
}

/// Continuation for a single-result query.
///
/// Same dispatch scheme as [`NextNodeOps`]; the rest-of-chain decision is
/// the return value, so a rule only sees it by invoking the continuation.
pub struct NextPairOp<'a, Op> {
    rules: &'a [&'a dyn FormattingRule],
    index: usize,
    _op: PhantomData<fn() -> Op>,
}

impl<Op> Clone for NextPairOp<'_, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op> Copy for NextPairOp<'_, Op> {}

impl<'a, Op: PairOperation> NextPairOp<'a, Op> {
    pub(crate) fn seed(rules: &'a [&'a dyn FormattingRule]) -> Self {
        NextPairOp {
            rules,
            index: 0,
            _op: PhantomData,
        }
    }

    /// The rest of the chain's decision.
    pub fn invoke(self, ctx: PairContext<'_>) -> Option<Op> {
        let next = NextPairOp {
            rules: self.rules,
            index: self.index + 1,
            _op: PhantomData,
        };
        match self.rules.get(self.index) {
            Some(rule) => Op::dispatch(*rule, ctx, next),
            None => Op::dispatch(&TERMINAL, ctx, next),
        }
    }
}

/// Continuation alias for suppress queries.
pub type NextSuppressOps<'a> = NextNodeOps<'a, SuppressOperation>;
/// Continuation alias for anchor-indentation queries.
pub type NextAnchorOps<'a> = NextNodeOps<'a, AnchorIndentationOperation>;
/// Continuation alias for indent-block queries.
pub type NextIndentOps<'a> = NextNodeOps<'a, IndentBlockOperation>;
/// Continuation alias for align-tokens queries.
pub type NextAlignOps<'a> = NextNodeOps<'a, AlignTokensOperation>;
/// Continuation alias for newline adjustment queries.
pub type NextNewLines<'a> = NextPairOp<'a, AdjustNewLinesOperation>;
/// Continuation alias for space adjustment queries.
pub type NextSpaces<'a> = NextPairOp<'a, AdjustSpacesOperation>;

/// The chain's decisions for one adjacent token pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PairAdjustment {
    pub prev: TokenId,
    pub current: TokenId,
    pub new_lines: Option<AdjustNewLinesOperation>,
    pub spaces: Option<AdjustSpacesOperation>,
}

/// An ordered rule chain bound to one tree and one options bag.
///
/// Rule order is the caller's policy; the chain runs whatever order it is
/// given and reserves no position for any particular rule. A chain is
/// cheap to build and holds no state across queries, so build one per
/// formatting session.
pub struct RuleChain<'a> {
    rules: Vec<&'a dyn FormattingRule>,
    tree: &'a SyntaxTree,
    options: &'a FormatOptions,
}

impl<'a> RuleChain<'a> {
    pub fn new(
        tree: &'a SyntaxTree,
        options: &'a FormatOptions,
        rules: impl IntoIterator<Item = &'a dyn FormattingRule>,
    ) -> Self {
        RuleChain {
            rules: rules.into_iter().collect(),
            tree,
            options,
        }
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the chain holds no rules.
    ///
    /// An empty chain is valid: every query resolves at the terminal.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn node_ctx(&self, node: NodeId) -> NodeContext<'a> {
        NodeContext {
            tree: self.tree,
            node,
            options: self.options,
        }
    }

    fn pair_ctx(&self, prev: TokenId, current: TokenId) -> PairContext<'a> {
        PairContext {
            tree: self.tree,
            prev,
            current,
            options: self.options,
        }
    }

    fn node_query<Op: NodeOperation>(&self, node: NodeId) -> Vec<Op> {
        trace!(
            kind = Op::KIND,
            node = node.raw(),
            rules = self.rules.len(),
            "seed chain"
        );
        let mut ops = Vec::new();
        NextNodeOps::seed(&self.rules).invoke(&mut ops, self.node_ctx(node));
        ops
    }

    fn pair_query<Op: PairOperation>(&self, prev: TokenId, current: TokenId) -> Option<Op> {
        trace!(
            kind = Op::KIND,
            prev = prev.raw(),
            current = current.raw(),
            rules = self.rules.len(),
            "seed chain"
        );
        NextPairOp::seed(&self.rules).invoke(self.pair_ctx(prev, current))
    }

    /// Suppress operations for one node.
    pub fn suppress_operations(&self, node: NodeId) -> Vec<SuppressOperation> {
        self.node_query(node)
    }

    /// Anchor-indentation operations for one node.
    pub fn anchor_indentation_operations(&self, node: NodeId) -> Vec<AnchorIndentationOperation> {
        self.node_query(node)
    }

    /// Indent-block operations for one node.
    pub fn indent_block_operations(&self, node: NodeId) -> Vec<IndentBlockOperation> {
        self.node_query(node)
    }

    /// Align-tokens operations for one node.
    pub fn align_tokens_operations(&self, node: NodeId) -> Vec<AlignTokensOperation> {
        self.node_query(node)
    }

    /// Newline decision for an adjacent token pair.
    pub fn adjust_new_lines(
        &self,
        prev: TokenId,
        current: TokenId,
    ) -> Option<AdjustNewLinesOperation> {
        self.pair_query(prev, current)
    }

    /// Space decision for an adjacent token pair.
    pub fn adjust_spaces(&self, prev: TokenId, current: TokenId) -> Option<AdjustSpacesOperation> {
        self.pair_query(prev, current)
    }

    fn collect_nodes<Op: NodeOperation>(&self) -> Vec<Op> {
        let mut ops = Vec::new();
        for node in self.tree.node_ids() {
            NextNodeOps::seed(&self.rules).invoke(&mut ops, self.node_ctx(node));
        }
        ops
    }

    /// Suppress operations for every node, in tree order.
    pub fn collect_suppress(&self) -> Vec<SuppressOperation> {
        self.collect_nodes()
    }

    /// Anchor-indentation operations for every node, in tree order.
    pub fn collect_anchor(&self) -> Vec<AnchorIndentationOperation> {
        self.collect_nodes()
    }

    /// Indent-block operations for every node, in tree order.
    pub fn collect_indent_blocks(&self) -> Vec<IndentBlockOperation> {
        self.collect_nodes()
    }

    /// Align-tokens operations for every node, in tree order.
    pub fn collect_align(&self) -> Vec<AlignTokensOperation> {
        self.collect_nodes()
    }

    /// Newline and space decisions for every adjacent token pair.
    pub fn collect_adjustments(&self) -> Vec<PairAdjustment> {
        let mut result = Vec::new();
        let mut ids = self.tree.token_ids();
        let Some(mut prev) = ids.next() else {
            return result;
        };
        for current in ids {
            result.push(PairAdjustment {
                prev,
                current,
                new_lines: self.adjust_new_lines(prev, current),
                spaces: self.adjust_spaces(prev, current),
            });
            prev = current;
        }
        result
    }
}
