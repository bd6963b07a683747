use quickcheck::{quickcheck, TestResult};
use std::collections::BTreeSet;
use ternary_tree::TernarySearchTree;

// Folds arbitrary bytes onto a four-letter alphabet so generated words collide
// and share prefixes often
fn to_word(raw: &[u8]) -> String {
    raw.iter().map(|b| (b'a' + b % 4) as char).collect()
}

fn to_words(raw: &[Vec<u8>]) -> Vec<String> {
    raw.iter()
        .map(|bytes| to_word(bytes))
        .filter(|word| !word.is_empty())
        .collect()
}

fn tree_of(words: &[String]) -> TernarySearchTree {
    let mut tree: TernarySearchTree = TernarySearchTree::new();
    for word in words {
        tree.insert(word).unwrap();
    }
    tree
}

quickcheck! {
    fn prop_inserted_words_are_found(raw: Vec<Vec<u8>>) -> bool {
        let words = to_words(&raw);
        let tree = tree_of(&words);

        words.iter().all(|word| tree.search(word) == Ok(true))
    }

    fn prop_never_inserted_words_are_absent(raw: Vec<Vec<u8>>, absent: Vec<u8>) -> TestResult {
        let words = to_words(&raw);
        let absent = to_word(&absent);
        if absent.is_empty() || words.contains(&absent) {
            return TestResult::discard();
        }

        let tree = tree_of(&words);
        TestResult::from_bool(tree.search(&absent) == Ok(false))
    }

    fn prop_insert_is_idempotent(raw: Vec<Vec<u8>>) -> bool {
        let words = to_words(&raw);
        let once = tree_of(&words);

        let mut twice = tree_of(&words);
        for word in &words {
            if twice.insert(word) != Ok(false) {
                return false;
            }
        }

        once == twice && once.node_count() == twice.node_count()
    }

    fn prop_removed_word_is_absent(raw: Vec<Vec<u8>>, index: usize) -> TestResult {
        let words = to_words(&raw);
        if words.is_empty() {
            return TestResult::discard();
        }

        let mut tree = tree_of(&words);
        let target = &words[index % words.len()];

        TestResult::from_bool(
            tree.remove(target) == Ok(true) && tree.search(target) == Ok(false),
        )
    }

    fn prop_remove_is_isolated(raw: Vec<Vec<u8>>, index: usize) -> TestResult {
        let words = to_words(&raw);
        if words.is_empty() {
            return TestResult::discard();
        }

        let mut tree = tree_of(&words);
        let target = words[index % words.len()].clone();
        tree.remove(&target).unwrap();

        TestResult::from_bool(
            words
                .iter()
                .filter(|word| **word != target)
                .all(|word| tree.search(word) == Ok(true)),
        )
    }

    fn prop_remove_absent_is_noop(raw: Vec<Vec<u8>>, absent: Vec<u8>) -> TestResult {
        let words = to_words(&raw);
        let absent = to_word(&absent);
        if absent.is_empty() || words.contains(&absent) {
            return TestResult::discard();
        }

        let mut tree = tree_of(&words);
        let before = tree.clone();
        let nodes = tree.node_count();

        TestResult::from_bool(
            tree.remove(&absent) == Ok(false) && tree == before && tree.node_count() == nodes,
        )
    }

    fn prop_removing_everything_prunes_all_nodes(raw: Vec<Vec<u8>>) -> bool {
        let words = to_words(&raw);
        let mut tree = tree_of(&words);

        // Remove in reverse insertion order to exercise a different shape
        for word in words.iter().rev() {
            tree.remove(word).unwrap();
        }

        tree.is_empty() && tree.root().is_none() && tree.node_count() == 0
    }

    fn prop_matches_btreeset_model(ops: Vec<(bool, Vec<u8>)>) -> bool {
        let mut tree: TernarySearchTree = TernarySearchTree::new();
        let mut model = BTreeSet::new();

        for (insert, raw) in ops {
            let word = to_word(&raw);
            if word.is_empty() {
                continue;
            }

            let agrees = if insert {
                tree.insert(&word) == Ok(model.insert(word.clone()))
            } else {
                tree.remove(&word) == Ok(model.remove(&word))
            };
            if !agrees || !tree.is_well_formed() {
                return false;
            }
        }

        tree.len() == model.len() && tree.words().eq(model.into_iter())
    }
}
