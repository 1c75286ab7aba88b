//! Quill Formatter Engine
//!
//! Formatting rule pipeline and span-scoped indentation engine. Rules
//! composed into an ordered chain produce declarative [`operations`] for a
//! syntax tree; a separate layout engine turns those into whitespace
//! edits. This crate never touches source text.
//!
//! # Architecture
//!
//! - **Operations** ([`operations`]): immutable values, one formatting
//!   decision each (indent a block, suppress wrapping, anchor to a column,
//!   align tokens, adjust newlines/spaces between a token pair)
//! - **Rule contract** ([`FormattingRule`]): six query methods, each
//!   receiving a continuation bound to the rest of the chain; the default
//!   bodies delegate immediately
//! - **Dispatch** ([`RuleChain`]): continuation-passing walk of the
//!   caller-ordered rule list, terminating at [`NoOpRule`]
//! - **Scoping** ([`ScopedIndentationRule`]): pins an embedded sub-span of
//!   a larger tree to an absolute column and clips every other
//!   indent-block decision to that sub-span
//!
//! Rule ordering is the caller's policy. Chains hold no per-query state,
//! so one tree can serve many concurrent formatting sessions.
//!
//! # Example
//!
//! ```
//! use quill_fmt::{FormatOptions, FormattingRule, RuleChain, ScopedIndentationRule};
//! use quill_tree::{Span, StringInterner, TreeBuilder};
//!
//! let interner = StringInterner::new();
//! let mut builder = TreeBuilder::new(&interner);
//! builder.open("fragment")?;
//! builder.token("let", Span::new(4, 7))?;
//! builder.token("x", Span::new(8, 9))?;
//! builder.close()?;
//! let tree = builder.finish()?;
//!
//! let scoped = ScopedIndentationRule::new(&tree, Span::new(4, 9), 8, None)
//!     .ok_or("nothing to scope")?;
//! let options = FormatOptions::default();
//! let rules: [&dyn FormattingRule; 1] = [&scoped];
//! let chain = RuleChain::new(&tree, &options, rules);
//!
//! let ops = chain.indent_block_operations(tree.root());
//! assert_eq!(ops.len(), 1);
//! assert_eq!(ops[0].indentation, 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod operations;

mod chain;
mod noop;
mod options;
mod resolve;
mod rule;
mod scope;

pub use chain::{
    NextAlignOps, NextAnchorOps, NextIndentOps, NextNewLines, NextNodeOps, NextPairOp, NextSpaces,
    NextSuppressOps, NodeOperation, PairAdjustment, PairOperation, RuleChain,
};
pub use noop::NoOpRule;
pub use options::{FormatOptions, INDENT_SIZE, TAB_SIZE};
pub use resolve::{resolve_scope, ResolvedScope};
pub use rule::{FormattingRule, NodeContext, PairContext};
pub use scope::ScopedIndentationRule;
