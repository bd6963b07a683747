//! # Ternary Search Tree
//!
//! A ternary search tree (TST) storing a set of words.
//!
//! Every node holds a single symbol and three children: `less` and `greater`
//! order the siblings that share a position in their words, while `equal`
//! advances to the next symbol of the word. Removing a word prunes the nodes
//! it no longer needs on the way back up, so a tree whose words have all been
//! removed holds no nodes at all.
//!
//! ## Features
//!
//! - **Set semantics**: inserting a word twice is idempotent
//! - **Exact lookup**: a word is a member only if its last node is marked terminal
//! - **Pruning removal**: dead nodes are unlinked bottom-up, shared prefixes survive
//! - **Generic symbols**: `char` by default, any `Ord + Copy` symbol via the `Word` trait
//!
//! ## Example
//!
//! ```rust
//! use ternary_tree::TernarySearchTree;
//!
//! let mut tree = TernarySearchTree::new();
//!
//! tree.insert("car")?;
//! tree.insert("care")?;
//!
//! assert!(tree.search("car")?);
//! assert!(!tree.search("ca")?);
//!
//! tree.remove("car")?;
//! assert!(!tree.search("car")?);
//! assert!(tree.search("care")?);
//! # Ok::<(), ternary_tree::Error>(())
//! ```

mod iter;
pub mod node;
mod tree;
mod word;

// Re-export public types
pub use crate::iter::Words;
pub use crate::node::TstNode;
pub use crate::tree::TernarySearchTree;
pub use crate::word::Word;

/// Errors that can occur in tree operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word has no symbols; the tree never stores the empty word
    EmptyWord,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyWord => write!(f, "Word must contain at least one symbol"),
        }
    }
}

impl std::error::Error for Error {}
