//! Suppression of wrapping or spacing inside a token range.

use bitflags::bitflags;
use quill_tree::{Span, TokenId};

bitflags! {
    /// What to suppress between the bounding tokens.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SuppressOption: u8 {
        /// Keep the range on one line.
        const NO_WRAPPING = 1 << 0;
        /// Keep the range on one line, but only if it already is on one.
        const NO_WRAPPING_IF_ON_SINGLE_LINE = 1 << 1;
        /// Leave spacing in the range untouched.
        const NO_SPACING = 1 << 2;
        /// Leave spacing untouched if the range is on a single line.
        const NO_SPACING_IF_ON_SINGLE_LINE = 1 << 3;
        /// Ignore elastic trivia when deciding the above.
        const IGNORE_ELASTIC = 1 << 4;
    }
}

/// Suppress formatting between two tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuppressOperation {
    pub start_token: TokenId,
    pub end_token: TokenId,
    pub span: Span,
    pub option: SuppressOption,
}

impl SuppressOperation {
    #[must_use]
    pub fn new(start_token: TokenId, end_token: TokenId, span: Span, option: SuppressOption) -> Self {
        debug_assert!(start_token <= end_token);
        SuppressOperation {
            start_token,
            end_token,
            span,
            option,
        }
    }
}
