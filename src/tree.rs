//! The main tree implementation.
//!
//! This module contains the `TernarySearchTree` type, which provides the primary
//! API for storing, looking up and removing words.

use std::cmp::Ordering;
use std::fmt;

use crate::iter::Words;
use crate::node::{Link, TstNode};
use crate::word::Word;
use crate::Error;

/// A set of words stored in a ternary search tree.
///
/// Symbols are compared with their `Ord` implementation. The default symbol
/// type is `char`, so string words are ordered by Unicode code point and
/// compared case-sensitively.
///
/// All three core operations reject the empty word with [`Error::EmptyWord`].
pub struct TernarySearchTree<S = char> {
    /// The root slot of the tree, `None` when no word is stored
    pub(crate) root: Link<S>,

    /// The number of words stored in the tree
    size: usize,
}

impl<S> TernarySearchTree<S> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::TernarySearchTree;
    ///
    /// let tree = TernarySearchTree::<char>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        TernarySearchTree {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of words stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::TernarySearchTree;
    ///
    /// let mut tree: TernarySearchTree = TernarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert("hello")?;
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), ternary_tree::Error>(())
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes currently allocated by the tree.
    ///
    /// Removal prunes every node that no longer leads to a stored word, so
    /// this drops back to zero once every word has been removed.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.subtree_nodes())
    }

    /// Returns the root node, if any word is stored.
    pub fn root(&self) -> Option<&TstNode<S>> {
        self.root.as_deref()
    }

    /// Removes every word from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns an iterator over the stored words in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::TernarySearchTree;
    ///
    /// let mut tree: TernarySearchTree = TernarySearchTree::new();
    /// tree.insert("bat")?;
    /// tree.insert("ball")?;
    ///
    /// let words: Vec<Vec<char>> = tree.iter().collect();
    /// assert_eq!(words, vec![vec!['b', 'a', 'l', 'l'], vec!['b', 'a', 't']]);
    /// # Ok::<(), ternary_tree::Error>(())
    /// ```
    pub fn iter(&self) -> Words<'_, S> {
        Words::new(self.root.as_deref(), self.size)
    }
}

impl<S: Ord + Copy> TernarySearchTree<S> {
    /// Inserts a word into the tree.
    ///
    /// Returns `Ok(true)` if the word was not yet stored, `Ok(false)` if it
    /// was. Inserting the same word again leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::{Error, TernarySearchTree};
    ///
    /// let mut tree: TernarySearchTree = TernarySearchTree::new();
    ///
    /// assert_eq!(tree.insert("cat"), Ok(true));
    /// assert_eq!(tree.insert("cat"), Ok(false));
    /// assert_eq!(tree.insert(""), Err(Error::EmptyWord));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert<W: Word<S> + ?Sized>(&mut self, word: &W) -> Result<bool, Error> {
        let symbols = word.symbols();
        if symbols.is_empty() {
            return Err(Error::EmptyWord);
        }

        let added = Self::insert_recursive(&mut self.root, &symbols, 0);

        if added {
            self.size += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(word_len = symbols.len(), added, size = self.size, "insert");

        Ok(added)
    }

    // Walks the sibling chain at `index` in a loop, creating the node when the
    // slot is empty, and recurses only to move on to the next symbol
    fn insert_recursive(mut slot: &mut Link<S>, word: &[S], index: usize) -> bool {
        let symbol = word[index];

        loop {
            let node = slot.get_or_insert_with(|| Box::new(TstNode::new(symbol)));

            match symbol.cmp(&node.symbol) {
                Ordering::Less => slot = &mut node.less,
                Ordering::Greater => slot = &mut node.greater,
                Ordering::Equal if index + 1 < word.len() => {
                    return Self::insert_recursive(&mut node.equal, word, index + 1);
                }
                Ordering::Equal => return !std::mem::replace(&mut node.terminal, true),
            }
        }
    }

    /// Returns whether the word is stored in the tree.
    ///
    /// A node existing for the last symbol is not enough: it may only route
    /// to longer words, so the node must also be marked terminal.
    ///
    /// A `&str` word is decoded into a `Vec<char>` on every call. On hot
    /// paths prefer a `TernarySearchTree<u8>` searched with byte slices,
    /// which borrow the caller's buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::TernarySearchTree;
    ///
    /// let mut tree: TernarySearchTree = TernarySearchTree::new();
    /// tree.insert("care")?;
    ///
    /// assert!(tree.search("care")?);
    /// assert!(!tree.search("car")?);
    /// assert!(!tree.search("dog")?);
    /// # Ok::<(), ternary_tree::Error>(())
    /// ```
    pub fn search<W: Word<S> + ?Sized>(&self, word: &W) -> Result<bool, Error> {
        let symbols = word.symbols();
        if symbols.is_empty() {
            return Err(Error::EmptyWord);
        }

        Ok(Self::search_nodes(self.root.as_deref(), &symbols))
    }

    fn search_nodes(mut node: Option<&TstNode<S>>, word: &[S]) -> bool {
        let mut index = 0;

        while let Some(current) = node {
            node = match word[index].cmp(&current.symbol) {
                Ordering::Less => current.less(),
                Ordering::Greater => current.greater(),
                Ordering::Equal if index + 1 == word.len() => return current.terminal,
                Ordering::Equal => {
                    index += 1;
                    current.equal()
                }
            };
        }

        false
    }

    /// Returns `true` if the word is stored in the tree.
    ///
    /// Unlike [`search`](Self::search) this treats the empty word as simply
    /// absent.
    pub fn contains<W: Word<S> + ?Sized>(&self, word: &W) -> bool {
        matches!(self.search(word), Ok(true))
    }

    /// Removes a word from the tree.
    ///
    /// Returns `Ok(true)` if the word was stored and has been removed. Nodes
    /// that no longer lead to any stored word are pruned on the way back to
    /// the root; nodes shared with other words are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ternary_tree::TernarySearchTree;
    ///
    /// let mut tree: TernarySearchTree = TernarySearchTree::new();
    /// tree.insert("car")?;
    /// tree.insert("care")?;
    ///
    /// assert!(tree.remove("car")?);
    /// assert!(!tree.remove("car")?);
    ///
    /// assert!(!tree.search("car")?);
    /// assert!(tree.search("care")?);
    /// # Ok::<(), ternary_tree::Error>(())
    /// ```
    pub fn remove<W: Word<S> + ?Sized>(&mut self, word: &W) -> Result<bool, Error> {
        let symbols = word.symbols();
        if symbols.is_empty() {
            return Err(Error::EmptyWord);
        }

        let removed = Self::remove_recursive(&mut self.root, &symbols, 0);

        if removed {
            self.size -= 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            word_len = symbols.len(),
            removed,
            size = self.size,
            pruned_to_empty = self.root.is_none(),
            "remove"
        );

        Ok(removed)
    }

    // Walks the sibling chain at `index` in a loop, remembering the turns taken,
    // and recurses only to move on to the next symbol. Once the word is gone the
    // chain is pruned bottom-up.
    fn remove_recursive(slot: &mut Link<S>, word: &[S], index: usize) -> bool {
        let symbol = word[index];
        let mut path = Vec::new();

        let removed = {
            let mut cursor = &mut *slot;
            loop {
                let node = match cursor {
                    Some(node) => node,
                    None => return false,
                };

                match symbol.cmp(&node.symbol) {
                    Ordering::Less => {
                        path.push(Ordering::Less);
                        cursor = &mut node.less;
                    }
                    Ordering::Greater => {
                        path.push(Ordering::Greater);
                        cursor = &mut node.greater;
                    }
                    Ordering::Equal if index + 1 == word.len() => {
                        break std::mem::replace(&mut node.terminal, false);
                    }
                    Ordering::Equal => {
                        break Self::remove_recursive(&mut node.equal, word, index + 1);
                    }
                }
            }
        };

        if removed {
            Self::prune_chain(slot, &path);
        }

        removed
    }

    // `path` leads from `slot` to the node that matched. That node goes if it is
    // now dead weight, and every node above it on the path goes with it as long
    // as the pruned link was its only reason to exist.
    fn prune_chain(slot: &mut Link<S>, path: &[Ordering]) {
        let mut cut = None;
        let mut cursor = slot.as_deref();

        for (depth, turn) in path.iter().enumerate() {
            let node = match cursor {
                Some(node) => node,
                None => return,
            };
            let (next, other) = match turn {
                Ordering::Less => (node.less(), node.greater()),
                _ => (node.greater(), node.less()),
            };

            let hangs_on_path = !node.terminal && node.equal.is_none() && other.is_none();
            cut = match (hangs_on_path, cut) {
                (true, None) => Some(depth),
                (true, cut) => cut,
                (false, _) => None,
            };
            cursor = next;
        }

        let matched_is_dead = cursor.map_or(false, TstNode::is_prunable);
        if !matched_is_dead {
            return;
        }

        let mut target = slot;
        for turn in &path[..cut.unwrap_or(path.len())] {
            let node = match target {
                Some(node) => node,
                None => return,
            };
            target = match turn {
                Ordering::Less => &mut node.less,
                _ => &mut node.greater,
            };
        }
        *target = None;
    }

    /// Checks the structural invariants of the tree.
    ///
    /// Returns `true` when siblings are ordered through their `less` and
    /// `greater` links, no reachable node is dead weight, and the word count
    /// matches the terminal nodes.
    pub fn is_well_formed(&self) -> bool {
        let words = self.root.as_ref().map_or(0, |root| root.subtree_words());
        if words != self.size {
            return false;
        }

        // `lower`/`upper` are the exclusive bounds inherited from the sibling
        // chain; an `equal` child starts a new position and resets them
        let mut stack: Vec<(&TstNode<S>, Option<S>, Option<S>)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, None, None));
        }

        while let Some((node, lower, upper)) = stack.pop() {
            if node.is_prunable() {
                return false;
            }
            if lower.map_or(false, |lower| node.symbol <= lower) {
                return false;
            }
            if upper.map_or(false, |upper| node.symbol >= upper) {
                return false;
            }

            if let Some(less) = node.less() {
                stack.push((less, lower, Some(node.symbol)));
            }
            if let Some(greater) = node.greater() {
                stack.push((greater, Some(node.symbol), upper));
            }
            if let Some(equal) = node.equal() {
                stack.push((equal, None, None));
            }
        }

        true
    }
}

impl TernarySearchTree<char> {
    /// Returns an iterator over the stored words as `String`s, in ascending order.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|word| word.into_iter().collect())
    }
}

impl<'a, S: Clone> IntoIterator for &'a TernarySearchTree<S> {
    type Item = Vec<S>;
    type IntoIter = Words<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Copies node by node with an explicit stack, filling each child slot of the
// copy as its source node is reached
impl<S: Clone> Clone for TernarySearchTree<S> {
    fn clone(&self) -> Self {
        let mut root: Link<S> = None;
        let mut stack: Vec<(&TstNode<S>, &mut Link<S>)> = Vec::new();
        if let Some(source) = self.root() {
            stack.push((source, &mut root));
        }

        while let Some((source, slot)) = stack.pop() {
            let mut copy = TstNode::new(source.symbol.clone());
            copy.terminal = source.terminal;

            let copy = slot.insert(Box::new(copy));
            let TstNode {
                less,
                equal,
                greater,
                ..
            } = &mut **copy;

            if let Some(child) = source.less() {
                stack.push((child, less));
            }
            if let Some(child) = source.equal() {
                stack.push((child, equal));
            }
            if let Some(child) = source.greater() {
                stack.push((child, greater));
            }
        }

        TernarySearchTree {
            root,
            size: self.size,
        }
    }
}

// Default implementation
impl<S> Default for TernarySearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug + Clone> fmt::Debug for TernarySearchTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Two trees are equal when they store the same words, whatever order they
// were inserted in
impl<S: PartialEq + Clone> PartialEq for TernarySearchTree<S> {
    fn eq(&self, other: &Self) -> bool {
        // If sizes differ, they can't be equal
        if self.size != other.size {
            return false;
        }

        self.iter().eq(other.iter())
    }
}

impl<S: Eq + Clone> Eq for TernarySearchTree<S> {}
