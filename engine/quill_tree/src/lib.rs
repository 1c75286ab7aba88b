//! Quill Tree - Syntax Tree Substrate
//!
//! Storage and navigation for the token/node model the Quill formatting
//! engine runs against:
//!
//! - [`Span`]: half-open byte ranges over the document text
//! - [`Name`]: interned token text and node labels
//! - [`Token`] / [`TokenId`]: atomic lexical units addressed by dense index
//! - [`Node`] / [`NodeId`]: syntactic groupings with parent links
//! - [`SyntaxTree`] / [`TreeBuilder`]: the assembled tree plus the
//!   navigation queries the formatter needs (token at position, neighbors,
//!   common ancestor)
//!
//! # Design Philosophy
//!
//! - **Intern everything**: token text and labels become `Name(u32)`
//! - **Flatten everything**: no boxed nodes, only `TokenId`/`NodeId` indices
//!   into dense arrays
//!
//! The tree is immutable once built and shareable across threads, so many
//! formatting queries can run against it concurrently.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod node;
mod span;
mod token;
mod tree;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use node::{Node, NodeId};
pub use span::{Span, SpanError};
pub use token::{Token, TokenId};
pub use tree::{SyntaxTree, TreeBuilder, TreeError};
