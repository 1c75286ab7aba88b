//! The terminal link of every chain.

use crate::chain::{
    NextAlignOps, NextAnchorOps, NextIndentOps, NextNewLines, NextSpaces, NextSuppressOps,
};
use crate::operations::{
    AdjustNewLinesOperation, AdjustSpacesOperation, AlignTokensOperation,
    AnchorIndentationOperation, IndentBlockOperation, SuppressOperation,
};
use crate::rule::{FormattingRule, NodeContext, PairContext};

/// Chain terminator: contributes nothing and never calls onward.
///
/// The dispatcher invokes this past the last caller-supplied rule, so a
/// chain of length `n` always resolves in `n` rule invocations plus this
/// one, whatever the rules do with their continuations.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpRule;

impl FormattingRule for NoOpRule {
    fn add_suppress_operations(
        &self,
        _ops: &mut Vec<SuppressOperation>,
        _ctx: NodeContext<'_>,
        _next: NextSuppressOps<'_>,
    ) {
    }

    fn add_anchor_indentation_operations(
        &self,
        _ops: &mut Vec<AnchorIndentationOperation>,
        _ctx: NodeContext<'_>,
        _next: NextAnchorOps<'_>,
    ) {
    }

    fn add_indent_block_operations(
        &self,
        _ops: &mut Vec<IndentBlockOperation>,
        _ctx: NodeContext<'_>,
        _next: NextIndentOps<'_>,
    ) {
    }

    fn add_align_tokens_operations(
        &self,
        _ops: &mut Vec<AlignTokensOperation>,
        _ctx: NodeContext<'_>,
        _next: NextAlignOps<'_>,
    ) {
    }

    fn adjust_new_lines(
        &self,
        _ctx: PairContext<'_>,
        _next: NextNewLines<'_>,
    ) -> Option<AdjustNewLinesOperation> {
        None
    }

    fn adjust_spaces(
        &self,
        _ctx: PairContext<'_>,
        _next: NextSpaces<'_>,
    ) -> Option<AdjustSpacesOperation> {
        None
    }
}
