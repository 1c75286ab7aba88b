//! Indentation of a token-bounded block.

use quill_tree::{Span, TokenId};

/// How an [`IndentBlockOperation`]'s indentation value is read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndentBlockOption {
    /// The value is an exact column.
    AbsolutePosition,
    /// The value is a delta from the enclosing block's indentation.
    RelativePosition,
    /// The value is a delta from the column of the first token on the base
    /// token's line.
    RelativeToFirstTokenOnBaseTokenLine,
}

/// Indent the text between two tokens, within a span.
///
/// The span usually covers the token range but can be narrower when the
/// operation was clipped to a scope; the layout engine applies the
/// indentation only inside the span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndentBlockOperation {
    pub start_token: TokenId,
    pub end_token: TokenId,
    pub span: Span,
    pub indentation: i32,
    pub option: IndentBlockOption,
    /// Only present for [`IndentBlockOption::RelativeToFirstTokenOnBaseTokenLine`].
    pub base_token: Option<TokenId>,
}

impl IndentBlockOperation {
    /// Create an absolute or relative indent operation.
    ///
    /// For the base-token-relative kind use
    /// [`relative_to_base`](Self::relative_to_base).
    #[must_use]
    pub fn new(
        start_token: TokenId,
        end_token: TokenId,
        span: Span,
        indentation: i32,
        option: IndentBlockOption,
    ) -> Self {
        debug_assert!(start_token <= end_token);
        debug_assert!(!matches!(
            option,
            IndentBlockOption::RelativeToFirstTokenOnBaseTokenLine
        ));
        IndentBlockOperation {
            start_token,
            end_token,
            span,
            indentation,
            option,
            base_token: None,
        }
    }

    /// Create an operation indented relative to the first token on
    /// `base_token`'s line.
    #[must_use]
    pub fn relative_to_base(
        base_token: TokenId,
        start_token: TokenId,
        end_token: TokenId,
        span: Span,
        indentation: i32,
    ) -> Self {
        debug_assert!(start_token <= end_token);
        IndentBlockOperation {
            start_token,
            end_token,
            span,
            indentation,
            option: IndentBlockOption::RelativeToFirstTokenOnBaseTokenLine,
            base_token: Some(base_token),
        }
    }

    /// Clone with a different span; used when clipping to a scope.
    ///
    /// Token boundaries, indentation value, and option kind carry over. The
    /// base token survives only for the option kind that reads it.
    #[must_use]
    pub fn with_span(&self, span: Span) -> Self {
        match self.option {
            IndentBlockOption::RelativeToFirstTokenOnBaseTokenLine => {
                IndentBlockOperation { span, ..*self }
            }
            IndentBlockOption::AbsolutePosition | IndentBlockOption::RelativePosition => {
                IndentBlockOperation::new(
                    self.start_token,
                    self.end_token,
                    span,
                    self.indentation,
                    self.option,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_span_keeps_everything_but_the_span() {
        let op = IndentBlockOperation::new(
            TokenId::new(1),
            TokenId::new(4),
            Span::new(5, 25),
            2,
            IndentBlockOption::RelativePosition,
        );
        let clipped = op.with_span(Span::new(10, 20));
        assert_eq!(clipped.span, Span::new(10, 20));
        assert_eq!(clipped.start_token, op.start_token);
        assert_eq!(clipped.end_token, op.end_token);
        assert_eq!(clipped.indentation, 2);
        assert_eq!(clipped.option, IndentBlockOption::RelativePosition);
        assert_eq!(clipped.base_token, None);
    }

    #[test]
    fn with_span_preserves_base_token_for_the_base_relative_kind() {
        let op = IndentBlockOperation::relative_to_base(
            TokenId::new(0),
            TokenId::new(1),
            TokenId::new(4),
            Span::new(5, 25),
            4,
        );
        let clipped = op.with_span(Span::new(10, 20));
        assert_eq!(clipped.base_token, Some(TokenId::new(0)));
        assert_eq!(
            clipped.option,
            IndentBlockOption::RelativeToFirstTokenOnBaseTokenLine
        );
    }
}
