//! Resolving an arbitrary text span to bounding tokens and a scope root.

use quill_tree::{NodeId, Span, SyntaxTree, TokenId};
use tracing::trace;

/// A span normalized against a tree, with its bounding tokens and root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedScope {
    /// The input span expanded through the whitespace around its bounding
    /// tokens.
    pub span: Span,
    /// Token bounding the scope at the start.
    pub first: TokenId,
    /// Token bounding the scope at the end.
    pub last: TokenId,
    /// Lowest node containing both bounding tokens.
    pub root: NodeId,
}

/// Resolve `span` to its bounding tokens and their common ancestor.
///
/// The input may be empty, sit entirely inside whitespace, or touch token
/// boundaries; the result is the minimal region consistent with the tree:
///
/// - the end position is resolved searching from the end, so a position
///   exactly on a token boundary picks the token before it;
/// - a span holding no token at all falls back to the adjacent tokens;
/// - a boundary token whose start (respectively end) the span covers is
///   stepped one further out, and the bound extends through the adjacent
///   whitespace to that neighbor's edge, or to the document edge when no
///   neighbor exists.
///
/// Returns `None` when the tree has no tokens; there is nothing to bound
/// a span with then.
pub fn resolve_scope(tree: &SyntaxTree, span: Span) -> Option<ResolvedScope> {
    let mut first = tree.token_at(span.start)?;
    let mut last = tree.token_at_from_end(span.end)?;

    // The span may hold no token at all; fall back to the adjacent ones.
    if span.end < tree.token(first).span.start {
        if let Some(prev) = tree.prev_token(first) {
            first = prev;
        }
    }
    if tree.token(last).span.end < span.start {
        if let Some(next) = tree.next_token(last) {
            last = next;
        }
    }

    // Expand through the whitespace bordering each boundary token.
    let start = if span.start <= tree.token(first).span.start {
        match tree.prev_token(first) {
            Some(prev) => {
                first = prev;
                tree.token(prev).span.end
            }
            None => 0,
        }
    } else {
        span.start
    };
    let end = if tree.token(last).span.end <= span.end {
        match tree.next_token(last) {
            Some(next) => {
                last = next;
                tree.token(next).span.start
            }
            None => tree.len(),
        }
    } else {
        span.end
    };

    // A lone token wedged between content of a different embedding can
    // make both expansions overshoot; swap to keep the span valid.
    let normalized = if end < start {
        Span::from_bounds(end, start)
    } else {
        Span::from_bounds(start, end)
    };

    let root = tree.common_ancestor(first, last)?;
    trace!(
        input = %span,
        normalized = %normalized,
        first = first.raw(),
        last = last.raw(),
        root = root.raw(),
        "resolved scope"
    );
    Some(ResolvedScope {
        span: normalized,
        first,
        last,
        root,
    })
}
