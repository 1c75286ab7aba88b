//! Anchoring a region to a token's column.

use quill_tree::{Span, TokenId};

/// Move the tokens in the span together with the anchor token's column.
///
/// When the layout engine shifts the anchor token, everything between the
/// start and end tokens shifts by the same amount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnchorIndentationOperation {
    pub anchor_token: TokenId,
    pub start_token: TokenId,
    pub end_token: TokenId,
    pub span: Span,
}

impl AnchorIndentationOperation {
    #[must_use]
    pub fn new(anchor_token: TokenId, start_token: TokenId, end_token: TokenId, span: Span) -> Self {
        debug_assert!(start_token <= end_token);
        AnchorIndentationOperation {
            anchor_token,
            start_token,
            end_token,
            span,
        }
    }
}
