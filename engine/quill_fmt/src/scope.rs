//! Scoping indent-block formatting to an embedded sub-span.

use quill_tree::{Span, SyntaxTree};
use tracing::trace;

use crate::chain::{
    NextAlignOps, NextAnchorOps, NextIndentOps, NextNewLines, NextNodeOps, NextPairOp, NextSpaces,
    NextSuppressOps, NodeOperation, PairOperation,
};
use crate::operations::{
    AdjustNewLinesOperation, AdjustSpacesOperation, AlignTokensOperation,
    AnchorIndentationOperation, IndentBlockOperation, IndentBlockOption, SuppressOperation,
};
use crate::resolve::{resolve_scope, ResolvedScope};
use crate::rule::{FormattingRule, NodeContext, PairContext};

/// Pins an embedded region of a larger tree to a fixed column and clips
/// every other indent-block decision to that region.
///
/// Used when formatting a fragment embedded in a larger document: the
/// fragment's root is indented to an absolute base column, operations the
/// wrapped chain computes for the enclosing tree are cut down to the
/// fragment, and queries about nodes enclosing the fragment produce
/// nothing at all.
///
/// The rule wraps an optional inner rule; when none is given, the rest of
/// the chain it is linked into acts as the wrapped chain. Construct one
/// per scope per formatting session; the resolved span and bounding tokens
/// are its identity for its whole lifetime.
pub struct ScopedIndentationRule {
    scope: ResolvedScope,
    base_indentation: i32,
    inner: Option<Box<dyn FormattingRule>>,
}

impl ScopedIndentationRule {
    /// Resolve `span` against `tree` and build the rule.
    ///
    /// Returns `None` when the tree has no tokens to bound the span with;
    /// there is nothing to scope then, and the caller should format
    /// without this rule.
    pub fn new(
        tree: &SyntaxTree,
        span: Span,
        base_indentation: i32,
        inner: Option<Box<dyn FormattingRule>>,
    ) -> Option<Self> {
        let scope = resolve_scope(tree, span)?;
        trace!(
            input = %span,
            scope = %scope.span,
            base = base_indentation,
            "scoped indentation rule"
        );
        Some(ScopedIndentationRule {
            scope,
            base_indentation,
            inner,
        })
    }

    /// The normalized scope span.
    pub fn span(&self) -> Span {
        self.scope.span
    }

    /// The absolute column the scoped region is pinned to.
    pub fn base_indentation(&self) -> i32 {
        self.base_indentation
    }

    /// The operation pinning the scoped region to the base column.
    fn self_pin(&self) -> IndentBlockOperation {
        IndentBlockOperation::new(
            self.scope.first,
            self.scope.last,
            self.scope.span,
            self.base_indentation,
            IndentBlockOption::AbsolutePosition,
        )
    }

    // Identity on the five constructed fields; the base-token field never
    // participates, a self-pin carries none.
    fn is_self_pin(&self, op: &IndentBlockOperation) -> bool {
        op.start_token == self.scope.first
            && op.end_token == self.scope.last
            && op.span == self.scope.span
            && op.indentation == self.base_indentation
            && op.option == IndentBlockOption::AbsolutePosition
    }

    /// Clip one candidate against the scope span.
    ///
    /// `None` means the candidate is dropped: either it covers the whole
    /// scope and more (an artifact of the enclosing tree), or it pins
    /// exactly the scoped region and would fight the self-pin.
    fn clip(&self, op: IndentBlockOperation) -> Option<IndentBlockOperation> {
        let scope = self.scope.span;
        if op.span == scope {
            if self.is_self_pin(&op) {
                Some(op)
            } else {
                None
            }
        } else if scope.contains_span(op.span) {
            Some(op)
        } else if op.span.contains_span(scope) {
            None
        } else if op.span.intersects(scope) {
            let clamped = Span::from_bounds(
                scope.start.max(op.span.start),
                scope.end.min(op.span.end),
            );
            Some(op.with_span(clamped))
        } else {
            // disjoint; cannot happen for a normalized scope, but a stray
            // candidate passes through untouched rather than faulting
            Some(op)
        }
    }

    fn wrapped_node_ops<Op: NodeOperation>(
        &self,
        ops: &mut Vec<Op>,
        ctx: NodeContext<'_>,
        next: NextNodeOps<'_, Op>,
    ) {
        match self.inner.as_deref() {
            Some(inner) => {
                let rules: [&dyn FormattingRule; 1] = [inner];
                NextNodeOps::seed(&rules).invoke(ops, ctx);
            }
            None => next.invoke(ops, ctx),
        }
    }

    fn wrapped_pair_op<Op: PairOperation>(
        &self,
        ctx: PairContext<'_>,
        next: NextPairOp<'_, Op>,
    ) -> Option<Op> {
        match self.inner.as_deref() {
            Some(inner) => {
                let rules: [&dyn FormattingRule; 1] = [inner];
                NextPairOp::seed(&rules).invoke(ctx)
            }
            None => next.invoke(ctx),
        }
    }
}

impl FormattingRule for ScopedIndentationRule {
    fn add_indent_block_operations(
        &self,
        ops: &mut Vec<IndentBlockOperation>,
        ctx: NodeContext<'_>,
        next: NextIndentOps<'_>,
    ) {
        // The scope root is pinned to the base column, whatever the
        // wrapped chain would have said about it.
        if ctx.node == self.scope.root {
            ops.push(self.self_pin());
            return;
        }

        // An enclosing ancestor's operations cover text outside the
        // region of interest.
        if ctx.tree.node(ctx.node).span.contains_span(self.scope.span) {
            return;
        }

        let mut candidates = Vec::new();
        self.wrapped_node_ops(&mut candidates, ctx, next);
        for candidate in candidates {
            match self.clip(candidate) {
                Some(clipped) => ops.push(clipped),
                None => trace!(span = %candidate.span, "dropped candidate outside scope"),
            }
        }
    }

    fn add_suppress_operations(
        &self,
        ops: &mut Vec<SuppressOperation>,
        ctx: NodeContext<'_>,
        next: NextSuppressOps<'_>,
    ) {
        self.wrapped_node_ops(ops, ctx, next);
    }

    fn add_anchor_indentation_operations(
        &self,
        ops: &mut Vec<AnchorIndentationOperation>,
        ctx: NodeContext<'_>,
        next: NextAnchorOps<'_>,
    ) {
        self.wrapped_node_ops(ops, ctx, next);
    }

    fn add_align_tokens_operations(
        &self,
        ops: &mut Vec<AlignTokensOperation>,
        ctx: NodeContext<'_>,
        next: NextAlignOps<'_>,
    ) {
        self.wrapped_node_ops(ops, ctx, next);
    }

    fn adjust_new_lines(
        &self,
        ctx: PairContext<'_>,
        next: NextNewLines<'_>,
    ) -> Option<AdjustNewLinesOperation> {
        self.wrapped_pair_op(ctx, next)
    }

    fn adjust_spaces(
        &self,
        ctx: PairContext<'_>,
        next: NextSpaces<'_>,
    ) -> Option<AdjustSpacesOperation> {
        self.wrapped_pair_op(ctx, next)
    }
}
