//! Inserts a handful of words, looks them up, removes some and looks again
use ternary_tree::{Error, TernarySearchTree};

fn main() -> Result<(), Error> {
    let mut tree: TernarySearchTree = TernarySearchTree::new();

    for word in &["cat", "car", "bat", "ball", "apple"] {
        tree.insert(*word)?;
    }

    for word in &["cat", "car", "bat", "ball", "apple", "dog"] {
        println!("Search '{}': {}", word, tree.search(*word)?);
    }

    for word in &["cat", "bat", "apple"] {
        tree.remove(*word)?;
    }

    println!("After removing 'cat', 'bat' and 'apple':");
    for word in &["cat", "car", "apple", "bat", "ball"] {
        println!("Search '{}': {}", word, tree.search(*word)?);
    }

    Ok(())
}
