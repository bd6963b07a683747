//! Node implementation for the ternary search tree.
//!
//! This module contains the `TstNode` structure that forms the backbone of the
//! tree. Every node is exclusively owned by a single slot: either one of its
//! parent's three child links or the tree's root.

use std::fmt;

/// Owned link to a child node. `None` means the subtree is empty.
pub(crate) type Link<S> = Option<Box<TstNode<S>>>;

/// A single symbol position along one or more stored words.
///
/// Siblings at the same word position are ordered through `less` and
/// `greater`; `equal` continues with the next symbol of the words that
/// match this node's symbol.
pub struct TstNode<S> {
    /// The symbol compared against at this node
    pub(crate) symbol: S,

    /// Whether a stored word ends at this node
    pub(crate) terminal: bool,

    /// Siblings with a strictly smaller symbol
    pub(crate) less: Link<S>,

    /// Continuation with the next symbol of the word
    pub(crate) equal: Link<S>,

    /// Siblings with a strictly larger symbol
    pub(crate) greater: Link<S>,
}

impl<S> TstNode<S> {
    /// Creates a non-terminal node with no children.
    pub fn new(symbol: S) -> Self {
        TstNode {
            symbol,
            terminal: false,
            less: None,
            equal: None,
            greater: None,
        }
    }

    /// Returns the symbol stored at this node.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Returns whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the first sibling with a smaller symbol, if any.
    pub fn less(&self) -> Option<&TstNode<S>> {
        self.less.as_deref()
    }

    /// Returns the node holding the next symbol, if any word continues past this one.
    pub fn equal(&self) -> Option<&TstNode<S>> {
        self.equal.as_deref()
    }

    /// Returns the first sibling with a larger symbol, if any.
    pub fn greater(&self) -> Option<&TstNode<S>> {
        self.greater.as_deref()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.less.is_none() && self.equal.is_none() && self.greater.is_none()
    }

    /// Returns whether this node is dead weight: no children and no word ends here.
    pub fn is_prunable(&self) -> bool {
        !self.terminal && self.is_leaf()
    }

    /// Returns the number of nodes in this subtree, this node included.
    pub fn subtree_nodes(&self) -> usize {
        self.descendants().count()
    }

    /// Returns the number of words ending in this subtree.
    ///
    /// Words ending in the `equal` subtree extend the symbols on the path to
    /// this node, so every terminal node counts exactly once.
    pub fn subtree_words(&self) -> usize {
        self.descendants().filter(|node| node.terminal).count()
    }

    /// Visits this node and everything below it, depth-first, with an
    /// explicit stack so long sibling chains don't grow the call stack.
    pub(crate) fn descendants(&self) -> impl Iterator<Item = &TstNode<S>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children());
            Some(node)
        })
    }

    /// Iterates over the present children in `less`, `equal`, `greater` order.
    pub(crate) fn children(&self) -> impl Iterator<Item = &TstNode<S>> {
        self.less()
            .into_iter()
            .chain(self.equal())
            .chain(self.greater())
    }
}

// Dropping a long sibling chain through the default recursive drop would use
// one stack frame per node, so children are detached onto a heap stack first
impl<S> Drop for TstNode<S> {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }

        let mut stack: Vec<Box<TstNode<S>>> = Vec::new();
        stack.extend(self.less.take());
        stack.extend(self.equal.take());
        stack.extend(self.greater.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.less.take());
            stack.extend(node.equal.take());
            stack.extend(node.greater.take());
        }
    }
}

// Shallow on purpose: children are shown by symbol only
impl<S: fmt::Debug> fmt::Debug for TstNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TstNode")
            .field("symbol", &self.symbol)
            .field("terminal", &self.terminal)
            .field("less", &self.less().map(|node| &node.symbol))
            .field("equal", &self.equal().map(|node| &node.symbol))
            .field("greater", &self.greater().map(|node| &node.symbol))
            .finish()
    }
}
