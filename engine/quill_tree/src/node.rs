//! Nodes and their dense-index identities.

use crate::{Name, Span};
use std::fmt;

/// Index of a node in its tree's node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Create an id from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    /// The index into the tree's node arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw index value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A syntactic grouping of tokens and child nodes.
///
/// A node's span covers all of its descendants; a root has no parent.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub label: Name,
    pub span: Span,
    pub parent: Option<NodeId>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.label, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::NodeId;
    crate::static_assert_size!(NodeId, 4);
}
