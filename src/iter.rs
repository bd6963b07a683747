//! In-order traversal over the words of a tree.

use std::iter::FusedIterator;

use crate::node::TstNode;

/// Pending work for the traversal.
enum Step<'a, S> {
    /// Visit the subtree rooted at the node; the `Vec` holds the symbols on the
    /// path to it, not including the node's own symbol
    Enter(&'a TstNode<S>, Vec<S>),
    /// A complete word ready to be yielded
    Yield(Vec<S>),
}

/// An iterator over the words of a `TernarySearchTree`, in ascending order.
///
/// This iterator performs a depth-first traversal with an explicit stack. For
/// every node, the `less` siblings come first, then the word ending at the
/// node, then the words continuing through `equal`, and finally the `greater`
/// siblings.
pub struct Words<'a, S> {
    /// Stack of pending steps, the next one on top
    stack: Vec<Step<'a, S>>,

    /// The number of words not yet yielded
    remaining: usize,
}

impl<'a, S> Words<'a, S> {
    pub(crate) fn new(root: Option<&'a TstNode<S>>, len: usize) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Step::Enter(root, Vec::new()));
        }

        Words {
            stack,
            remaining: len,
        }
    }
}

impl<'a, S: Clone> Iterator for Words<'a, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            let (node, prefix) = match step {
                Step::Yield(word) => {
                    self.remaining -= 1;
                    return Some(word);
                }
                Step::Enter(node, prefix) => (node, prefix),
            };

            let mut word = prefix.clone();
            word.push(node.symbol.clone());

            // Pushed in reverse so that `less` is popped first
            if let Some(greater) = node.greater() {
                self.stack.push(Step::Enter(greater, prefix.clone()));
            }
            if let Some(equal) = node.equal() {
                self.stack.push(Step::Enter(equal, word.clone()));
            }
            if node.terminal {
                self.stack.push(Step::Yield(word));
            }
            if let Some(less) = node.less() {
                self.stack.push(Step::Enter(less, prefix));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, S: Clone> ExactSizeIterator for Words<'a, S> {}

impl<'a, S: Clone> FusedIterator for Words<'a, S> {}
