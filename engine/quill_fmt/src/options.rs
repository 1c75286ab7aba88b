//! Formatting configuration passed through the rule chain.

/// Default spaces per indentation level.
pub const INDENT_SIZE: u32 = 4;

/// Default columns per tab stop.
pub const TAB_SIZE: u32 = 4;

/// Configuration threaded through every rule query.
///
/// The chain machinery treats this as opaque: it hands the options to each
/// rule unchanged and never reads them itself. Rules are free to consult
/// them when sizing the operations they contribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_size: u32,
    /// Columns per tab stop.
    pub tab_size: u32,
    /// Emit tabs instead of spaces for leading indentation.
    pub use_tabs: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_size: INDENT_SIZE,
            tab_size: TAB_SIZE,
            use_tabs: false,
        }
    }
}

impl FormatOptions {
    /// Replace the indent size.
    #[must_use]
    pub fn with_indent_size(self, indent_size: u32) -> Self {
        FormatOptions {
            indent_size,
            ..self
        }
    }

    /// Replace the tab size.
    #[must_use]
    pub fn with_tab_size(self, tab_size: u32) -> Self {
        FormatOptions { tab_size, ..self }
    }

    /// Switch between tabs and spaces for leading indentation.
    #[must_use]
    pub fn with_use_tabs(self, use_tabs: bool) -> Self {
        FormatOptions { use_tabs, ..self }
    }
}
