//! Newline and space counts between an adjacent token pair.

/// How an [`AdjustNewLinesOperation`]'s line count applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AdjustNewLinesOption {
    /// Keep existing lines, but ensure at least this many.
    PreserveLines,
    /// Replace whatever is there with exactly this many lines.
    ForceLines,
    /// Force the count only when the pair currently shares a line.
    ForceLinesIfOnSingleLine,
}

/// Decide the newline count between two adjacent tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjustNewLinesOperation {
    pub lines: u32,
    pub option: AdjustNewLinesOption,
}

impl AdjustNewLinesOperation {
    #[must_use]
    pub fn new(lines: u32, option: AdjustNewLinesOption) -> Self {
        AdjustNewLinesOperation { lines, option }
    }

    /// Keep existing lines, with `lines` as the minimum.
    #[must_use]
    pub fn preserve(lines: u32) -> Self {
        AdjustNewLinesOperation::new(lines, AdjustNewLinesOption::PreserveLines)
    }

    /// Force exactly `lines` lines.
    #[must_use]
    pub fn force(lines: u32) -> Self {
        AdjustNewLinesOperation::new(lines, AdjustNewLinesOption::ForceLines)
    }
}

/// How an [`AdjustSpacesOperation`]'s space count applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AdjustSpacesOption {
    /// Keep existing spaces, but ensure at least this many.
    PreserveSpaces,
    /// Replace whatever is there with exactly this many spaces.
    ForceSpaces,
    /// Force the count only when the pair currently shares a line.
    ForceSpacesIfOnSingleLine,
    /// On a single line, pad to the current indentation instead of a fixed
    /// count.
    DynamicSpaceToIndentationIfOnSingleLine,
}

/// Decide the space count between two adjacent tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdjustSpacesOperation {
    pub spaces: u32,
    pub option: AdjustSpacesOption,
}

impl AdjustSpacesOperation {
    #[must_use]
    pub fn new(spaces: u32, option: AdjustSpacesOption) -> Self {
        AdjustSpacesOperation { spaces, option }
    }

    /// Keep existing spaces, with `spaces` as the minimum.
    #[must_use]
    pub fn preserve(spaces: u32) -> Self {
        AdjustSpacesOperation::new(spaces, AdjustSpacesOption::PreserveSpaces)
    }

    /// Force exactly `spaces` spaces.
    #[must_use]
    pub fn force(spaces: u32) -> Self {
        AdjustSpacesOperation::new(spaces, AdjustSpacesOption::ForceSpaces)
    }
}
