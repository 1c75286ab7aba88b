//! Column alignment of a token group.

use quill_tree::TokenId;
use rustc_hash::FxHashSet;

/// How the aligned tokens relate to the base token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlignTokensOption {
    /// Align each token's indentation to the base token's column.
    AlignIndentationOfTokensToBaseToken,
    /// Align to the column of the first token on the base token's line.
    AlignIndentationOfTokensToFirstTokenOfBaseTokenLine,
}

/// Align a group of tokens against a base token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignTokensOperation {
    pub base_token: TokenId,
    pub tokens: Vec<TokenId>,
    pub option: AlignTokensOption,
}

impl AlignTokensOperation {
    /// Create an alignment group.
    ///
    /// Duplicate targets collapse to the first occurrence and the base
    /// token is dropped from the target list; aligning a token to itself
    /// is meaningless.
    #[must_use]
    pub fn new(
        base_token: TokenId,
        tokens: impl IntoIterator<Item = TokenId>,
        option: AlignTokensOption,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let tokens = tokens
            .into_iter()
            .filter(|&token| token != base_token && seen.insert(token))
            .collect();
        AlignTokensOperation {
            base_token,
            tokens,
            option,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn targets_are_deduplicated_in_first_seen_order() {
        let op = AlignTokensOperation::new(
            TokenId::new(0),
            [
                TokenId::new(3),
                TokenId::new(1),
                TokenId::new(3),
                TokenId::new(2),
                TokenId::new(1),
            ],
            AlignTokensOption::AlignIndentationOfTokensToBaseToken,
        );
        assert_eq!(
            op.tokens,
            vec![TokenId::new(3), TokenId::new(1), TokenId::new(2)]
        );
    }

    #[test]
    fn base_token_is_dropped_from_targets() {
        let op = AlignTokensOperation::new(
            TokenId::new(1),
            [TokenId::new(1), TokenId::new(2)],
            AlignTokensOption::AlignIndentationOfTokensToFirstTokenOfBaseTokenLine,
        );
        assert_eq!(op.tokens, vec![TokenId::new(2)]);
    }
}
