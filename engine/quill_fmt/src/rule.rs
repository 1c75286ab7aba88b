//! The rule provider contract.

use crate::chain::{
    NextAlignOps, NextAnchorOps, NextIndentOps, NextNewLines, NextSpaces, NextSuppressOps,
};
use crate::operations::{
    AdjustNewLinesOperation, AdjustSpacesOperation, AlignTokensOperation,
    AnchorIndentationOperation, IndentBlockOperation, SuppressOperation,
};
use crate::options::FormatOptions;
use quill_tree::{NodeId, SyntaxTree, TokenId};

/// Arguments for a node-scoped query.
#[derive(Copy, Clone)]
pub struct NodeContext<'a> {
    pub tree: &'a SyntaxTree,
    pub node: NodeId,
    pub options: &'a FormatOptions,
}

/// Arguments for an adjacent-token-pair query.
#[derive(Copy, Clone)]
pub struct PairContext<'a> {
    pub tree: &'a SyntaxTree,
    /// The earlier token of the pair.
    pub prev: TokenId,
    /// The later token of the pair.
    pub current: TokenId,
    pub options: &'a FormatOptions,
}

/// One link of a formatting rule chain.
///
/// Every query method receives a continuation bound to the rest of the
/// chain. The default bodies delegate immediately ("no opinion"); a
/// concrete rule overrides only the queries it cares about and chooses
/// freely whether to call the continuation before contributing, after, not
/// at all, or to post-process what the rest of the chain produced.
///
/// Rules must not write shared state during a query: one chain may serve
/// many concurrent formatting sessions, so everything per-query lives on
/// the stack or in the accumulated operation list.
pub trait FormattingRule: Send + Sync {
    /// Contribute suppress operations for a node.
    fn add_suppress_operations(
        &self,
        ops: &mut Vec<SuppressOperation>,
        ctx: NodeContext<'_>,
        next: NextSuppressOps<'_>,
    ) {
        next.invoke(ops, ctx);
    }

    /// Contribute anchor-indentation operations for a node.
    fn add_anchor_indentation_operations(
        &self,
        ops: &mut Vec<AnchorIndentationOperation>,
        ctx: NodeContext<'_>,
        next: NextAnchorOps<'_>,
    ) {
        next.invoke(ops, ctx);
    }

    /// Contribute indent-block operations for a node.
    fn add_indent_block_operations(
        &self,
        ops: &mut Vec<IndentBlockOperation>,
        ctx: NodeContext<'_>,
        next: NextIndentOps<'_>,
    ) {
        next.invoke(ops, ctx);
    }

    /// Contribute align-tokens operations for a node.
    fn add_align_tokens_operations(
        &self,
        ops: &mut Vec<AlignTokensOperation>,
        ctx: NodeContext<'_>,
        next: NextAlignOps<'_>,
    ) {
        next.invoke(ops, ctx);
    }

    /// Decide the newline count between an adjacent token pair.
    ///
    /// Returning `None` means no preference; the value of the rest of the
    /// chain is whatever `next.invoke` returns, so a rule that wants to
    /// refine it calls the continuation and post-processes.
    fn adjust_new_lines(
        &self,
        ctx: PairContext<'_>,
        next: NextNewLines<'_>,
    ) -> Option<AdjustNewLinesOperation> {
        next.invoke(ctx)
    }

    /// Decide the space count between an adjacent token pair.
    fn adjust_spaces(
        &self,
        ctx: PairContext<'_>,
        next: NextSpaces<'_>,
    ) -> Option<AdjustSpacesOperation> {
        next.invoke(ctx)
    }
}
