//! The assembled syntax tree and its navigation queries.

use crate::{Node, NodeId, Span, StringInterner, Token, TokenId};
use std::fmt;

/// Error while assembling a tree with [`TreeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// `open` was called after the root node was already closed.
    SecondRoot,
    /// `token` was called with no node open.
    TokenOutsideNode,
    /// A token starts before the previous token ends.
    TokenOutOfOrder { previous: Span, next: Span },
    /// The tree holds more tokens or nodes than a dense `u32` index can address.
    CapacityExhausted,
    /// `close` was called with no node open.
    UnbalancedClose,
    /// `finish` was called while nodes were still open.
    UnclosedNodes { open: usize },
    /// `finish` was called before any node was opened.
    EmptyTree,
    /// `finish_with_len` was given a length shorter than the last token's end.
    LengthTooShort { len: u32, required: u32 },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::SecondRoot => write!(f, "root node already closed"),
            TreeError::TokenOutsideNode => write!(f, "token emitted with no node open"),
            TreeError::TokenOutOfOrder { previous, next } => {
                write!(f, "token at {next} starts before previous token at {previous} ends")
            }
            TreeError::CapacityExhausted => {
                write!(f, "tree capacity exhausted: more than u32::MAX tokens or nodes")
            }
            TreeError::UnbalancedClose => write!(f, "close with no node open"),
            TreeError::UnclosedNodes { open } => {
                write!(f, "finish with {open} node(s) still open")
            }
            TreeError::EmptyTree => write!(f, "finish on a tree with no nodes"),
            TreeError::LengthTooShort { len, required } => {
                write!(f, "document length {len} is shorter than last token end {required}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// An immutable syntax tree: tokens in document order plus a node arena.
///
/// Built once with [`TreeBuilder`], then shared freely; every query takes
/// `&self`, so concurrent formatting sessions can navigate the same tree.
///
/// Whitespace between tokens belongs to no token. The position queries
/// resolve a position inside a gap to the nearest token on the relevant
/// side: [`token_at`](Self::token_at) reaches forward,
/// [`token_at_from_end`](Self::token_at_from_end) reaches backward.
#[derive(Debug)]
pub struct SyntaxTree {
    tokens: Vec<Token>,
    /// Innermost enclosing node per token, parallel to `tokens`.
    token_parents: Vec<NodeId>,
    /// Pre-order node arena; index 0 is the root.
    nodes: Vec<Node>,
    len: u32,
}

impl SyntaxTree {
    /// Document length in bytes.
    ///
    /// At least the last token's end; [`TreeBuilder::finish_with_len`] can
    /// extend it past a trailing gap.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Check if the tree holds no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    /// Panics if the id is not from this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look up a token.
    ///
    /// # Panics
    /// Panics if the id is not from this tree.
    #[inline]
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// The innermost node enclosing a token.
    ///
    /// # Panics
    /// Panics if the id is not from this tree.
    #[inline]
    pub fn token_parent(&self, id: TokenId) -> NodeId {
        self.token_parents[id.index()]
    }

    /// Number of tokens.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate node ids in tree (pre-)order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).filter_map(|i| u32::try_from(i).ok().map(NodeId::new))
    }

    /// Iterate token ids in document order.
    pub fn token_ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        (0..self.tokens.len()).filter_map(|i| u32::try_from(i).ok().map(TokenId::new))
    }

    /// The token covering or following a position.
    ///
    /// Returns the first token whose span ends strictly after `offset`; a
    /// position past the last token resolves to the last token. Empty tree
    /// returns `None`.
    pub fn token_at(&self, offset: u32) -> Option<TokenId> {
        if self.tokens.is_empty() {
            return None;
        }
        let idx = self.tokens.partition_point(|t| t.span.end <= offset);
        let idx = idx.min(self.tokens.len() - 1);
        u32::try_from(idx).ok().map(TokenId::new)
    }

    /// The token covering or preceding a position, searching from the end.
    ///
    /// Returns the last token whose span starts strictly before `offset`; a
    /// position at or before the first token's start resolves to the first
    /// token. Empty tree returns `None`.
    ///
    /// At an exact token boundary this resolves to the token *before* the
    /// boundary while [`token_at`](Self::token_at) resolves to the one
    /// after, which is what span resolution needs for an end position.
    pub fn token_at_from_end(&self, offset: u32) -> Option<TokenId> {
        if self.tokens.is_empty() {
            return None;
        }
        let idx = self.tokens.partition_point(|t| t.span.start < offset);
        let idx = idx.saturating_sub(1);
        u32::try_from(idx).ok().map(TokenId::new)
    }

    /// The token before `id` in document order.
    pub fn prev_token(&self, id: TokenId) -> Option<TokenId> {
        id.raw().checked_sub(1).map(TokenId::new)
    }

    /// The token after `id` in document order.
    pub fn next_token(&self, id: TokenId) -> Option<TokenId> {
        let next = id.raw().checked_add(1)?;
        if (next as usize) < self.tokens.len() {
            Some(TokenId::new(next))
        } else {
            None
        }
    }

    /// The lowest node containing both tokens.
    ///
    /// Walks the parent links upward, equalizing depth first. Returns `None`
    /// only for ids outside this tree; any two tokens of one tree meet at
    /// the root at the latest.
    pub fn common_ancestor(&self, a: TokenId, b: TokenId) -> Option<NodeId> {
        let mut x = *self.token_parents.get(a.index())?;
        let mut y = *self.token_parents.get(b.index())?;

        let mut dx = self.depth(x);
        let mut dy = self.depth(y);
        while dx > dy {
            x = self.nodes[x.index()].parent?;
            dx -= 1;
        }
        while dy > dx {
            y = self.nodes[y.index()].parent?;
            dy -= 1;
        }
        while x != y {
            x = self.nodes[x.index()].parent?;
            y = self.nodes[y.index()].parent?;
        }
        Some(x)
    }

    fn depth(&self, mut node: NodeId) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.nodes[node.index()].parent {
            node = parent;
            depth += 1;
        }
        depth
    }
}

struct OpenNode {
    id: NodeId,
    span: Option<Span>,
}

/// Incremental construction of a [`SyntaxTree`].
///
/// Nodes are opened and closed like brackets; tokens land in the innermost
/// open node. Node spans are computed as the union of their children when
/// closed. Token text and node labels are interned through the given
/// interner.
///
/// ```
/// use quill_tree::{Span, StringInterner, TreeBuilder};
///
/// let interner = StringInterner::new();
/// let mut builder = TreeBuilder::new(&interner);
/// builder.open("file")?;
/// builder.token("fn", Span::new(0, 2))?;
/// builder.token("main", Span::new(3, 7))?;
/// builder.close()?;
/// let tree = builder.finish()?;
/// assert_eq!(tree.len(), 7);
/// # Ok::<(), quill_tree::TreeError>(())
/// ```
pub struct TreeBuilder<'i> {
    interner: &'i StringInterner,
    tokens: Vec<Token>,
    token_parents: Vec<NodeId>,
    nodes: Vec<Node>,
    stack: Vec<OpenNode>,
    /// End of the last token pushed so far.
    cursor: u32,
}

impl<'i> TreeBuilder<'i> {
    /// Create a builder interning through `interner`.
    pub fn new(interner: &'i StringInterner) -> Self {
        TreeBuilder {
            interner,
            tokens: Vec::new(),
            token_parents: Vec::new(),
            nodes: Vec::new(),
            stack: Vec::new(),
            cursor: 0,
        }
    }

    /// Open a node under the innermost open node.
    ///
    /// The first opened node becomes the root; opening another top-level
    /// node after the root closed is an error.
    pub fn open(&mut self, label: &str) -> Result<(), TreeError> {
        if self.stack.is_empty() && !self.nodes.is_empty() {
            return Err(TreeError::SecondRoot);
        }
        let raw = u32::try_from(self.nodes.len()).map_err(|_| TreeError::CapacityExhausted)?;
        let id = NodeId::new(raw);
        self.nodes.push(Node {
            label: self.interner.intern(label),
            span: Span::point(self.cursor),
            parent: self.stack.last().map(|open| open.id),
        });
        self.stack.push(OpenNode { id, span: None });
        Ok(())
    }

    /// Append a token to the innermost open node.
    ///
    /// Tokens must arrive in document order and must not overlap; the gap
    /// between two tokens is whitespace owned by neither.
    pub fn token(&mut self, text: &str, span: Span) -> Result<(), TreeError> {
        let Some(open) = self.stack.last_mut() else {
            return Err(TreeError::TokenOutsideNode);
        };
        if let Some(previous) = self.tokens.last() {
            if span.start < previous.span.end {
                return Err(TreeError::TokenOutOfOrder {
                    previous: previous.span,
                    next: span,
                });
            }
        }
        if u32::try_from(self.tokens.len()).is_err() {
            return Err(TreeError::CapacityExhausted);
        }
        open.span = Some(match open.span {
            Some(existing) => existing.merge(span),
            None => span,
        });
        self.token_parents.push(open.id);
        self.tokens.push(Token::new(self.interner.intern(text), span));
        self.cursor = span.end;
        Ok(())
    }

    /// Close the innermost open node, fixing its span.
    ///
    /// A node that received no tokens and no children gets a zero-length
    /// span at the current position.
    pub fn close(&mut self) -> Result<(), TreeError> {
        let Some(closed) = self.stack.pop() else {
            return Err(TreeError::UnbalancedClose);
        };
        let span = closed.span.unwrap_or(Span::point(self.cursor));
        self.nodes[closed.id.index()].span = span;
        if let Some(parent) = self.stack.last_mut() {
            parent.span = Some(match parent.span {
                Some(existing) => existing.merge(span),
                None => span,
            });
        }
        Ok(())
    }

    /// Finish the tree; document length is the last token's end.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        let len = self.cursor;
        self.finish_with_len(len)
    }

    /// Finish the tree with an explicit document length.
    ///
    /// Use when trailing whitespace extends past the last token, so span
    /// expansion at the document's end can reach it.
    pub fn finish_with_len(self, len: u32) -> Result<SyntaxTree, TreeError> {
        if !self.stack.is_empty() {
            return Err(TreeError::UnclosedNodes {
                open: self.stack.len(),
            });
        }
        if self.nodes.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if len < self.cursor {
            return Err(TreeError::LengthTooShort {
                len,
                required: self.cursor,
            });
        }
        Ok(SyntaxTree {
            tokens: self.tokens,
            token_parents: self.token_parents,
            nodes: self.nodes,
            len,
        })
    }
}
