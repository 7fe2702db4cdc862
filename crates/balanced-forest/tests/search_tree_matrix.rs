use balanced_forest::{
    AvlNode, BinaryNode, BinarySearchTree, RedBlackNode, SearchTree, TreeError, Variant,
};

const KEYS: [i32; 7] = [10, 5, 15, 3, 8, 12, 18];

fn built<N: Variant<i32>>() -> SearchTree<i32, N> {
    let mut tree = SearchTree::new();
    tree.build(KEYS);
    tree.assert_valid().unwrap();
    tree
}

fn keys<N: Variant<i32>>(tree: &SearchTree<i32, N>) -> Vec<i32> {
    tree.iter().copied().collect()
}

fn build_find_matrix<N: Variant<i32>>() {
    let tree = built::<N>();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.find_min(), Some(&3));
    assert_eq!(tree.find_max(), Some(&18));
    assert_eq!(tree.find(&8), Some(&8));
    assert_eq!(tree.find(&20), None);
    assert!(tree.contains(&12));
    assert!(!tree.contains(&11));
}

fn insert_matrix<N: Variant<i32>>() {
    let mut tree = built::<N>();
    assert!(tree.insert(6));
    assert_eq!(tree.find(&6), Some(&6));
    assert_eq!(tree.len(), 8);
    assert_eq!(keys(&tree), vec![3, 5, 6, 8, 10, 12, 15, 18]);
    tree.assert_valid().unwrap();
}

fn delete_matrix<N: Variant<i32>>() {
    let mut tree = built::<N>();
    assert_eq!(tree.delete(&8), 8);
    assert_eq!(tree.find(&8), None);
    assert_eq!(tree.len(), 6);
    tree.assert_valid().unwrap();

    // Root and internal nodes.
    assert_eq!(tree.delete(&10), 10);
    assert_eq!(tree.delete(&15), 15);
    tree.assert_valid().unwrap();
    assert_eq!(keys(&tree), vec![3, 5, 12, 18]);

    for k in [3, 5, 12, 18] {
        tree.delete(&k);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.find_min(), None);
}

fn neighbours_matrix<N: Variant<i32>>() {
    let tree = built::<N>();
    assert_eq!(tree.find_next(&5), Some(&8));
    assert_eq!(tree.find_next(&9), Some(&10));
    assert_eq!(tree.find_next(&18), None);
    assert_eq!(tree.find_prev(&3), None);
    assert_eq!(tree.find_prev(&12), Some(&10));
    assert_eq!(tree.find_prev(&100), Some(&18));
}

fn duplicate_matrix<N: Variant<i32>>() {
    let mut tree = built::<N>();
    let before = keys(&tree);
    assert!(!tree.insert(15));
    assert_eq!(tree.len(), 7);
    assert_eq!(keys(&tree), before);
    tree.assert_valid().unwrap();
}

fn round_trip_matrix<N: Variant<i32>>() {
    let mut tree = built::<N>();
    let before = keys(&tree);
    for k in [1, 4, 9, 11, 13, 16, 20] {
        assert!(tree.insert(k));
        assert_eq!(tree.delete(&k), k);
        assert_eq!(keys(&tree), before);
        assert_eq!(tree.len(), before.len());
        tree.assert_valid().unwrap();
    }
}

fn try_delete_matrix<N: Variant<i32>>() {
    let mut tree: SearchTree<i32, N> = SearchTree::new();
    assert_eq!(tree.try_delete(&1), Err(TreeError::Empty));
    tree.extend([2, 1]);
    assert_eq!(tree.try_delete(&3), Err(TreeError::NotFound));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.try_delete(&2), Ok(2));
    tree.assert_valid().unwrap();
}

macro_rules! variant_matrix {
    ($($name:ident => $node:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn build_find() {
                    build_find_matrix::<$node>();
                }

                #[test]
                fn insert() {
                    insert_matrix::<$node>();
                }

                #[test]
                fn delete() {
                    delete_matrix::<$node>();
                }

                #[test]
                fn neighbours() {
                    neighbours_matrix::<$node>();
                }

                #[test]
                fn duplicate() {
                    duplicate_matrix::<$node>();
                }

                #[test]
                fn round_trip() {
                    round_trip_matrix::<$node>();
                }

                #[test]
                fn try_delete() {
                    try_delete_matrix::<$node>();
                }
            }
        )*
    };
}

variant_matrix! {
    binary => BinaryNode<i32>,
    avl => AvlNode<i32>,
    red_black => RedBlackNode<i32>,
}

#[test]
fn unbalanced_shape_follows_insertion_order() {
    let tree: BinarySearchTree<i32> = KEYS.into_iter().collect();
    let pre: Vec<i32> = tree.preorder().copied().collect();
    assert_eq!(pre, vec![10, 5, 3, 8, 15, 12, 18]);
    let post: Vec<i32> = tree.postorder().copied().collect();
    assert_eq!(post, vec![3, 8, 5, 12, 18, 15, 10]);
    let level: Vec<i32> = tree.level_order().copied().collect();
    assert_eq!(level, vec![10, 5, 15, 3, 8, 12, 18]);
}

#[test]
fn build_adds_to_existing_keys() {
    let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    tree.build([10, 5]);
    tree.build([15]);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 15]);
    tree.assert_valid().unwrap();
}

#[test]
fn into_iterator_on_reference() {
    let tree: BinarySearchTree<&str> = ["pear", "apple", "fig"].into_iter().collect();
    let mut seen = Vec::new();
    for k in &tree {
        seen.push(*k);
    }
    assert_eq!(seen, vec!["apple", "fig", "pear"]);
}

#[test]
fn duplicate_overwrites_stored_key() {
    #[derive(Debug)]
    struct Entry(i32, &'static str);

    let mut tree: BinarySearchTree<Entry, _> =
        BinarySearchTree::with_comparator(|a: &Entry, b: &Entry| a.0.cmp(&b.0));
    assert!(tree.insert(Entry(1, "old")));
    assert!(!tree.insert(Entry(1, "new")));
    assert_eq!(tree.find(&Entry(1, "")).map(|e| e.1), Some("new"));
}

#[test]
fn clear_resets() {
    let mut tree = built::<RedBlackNode<i32>>();
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.arena().is_empty());
    assert!(tree.insert(1));
    tree.assert_valid().unwrap();
}

#[test]
#[should_panic(expected = "delete from an empty tree")]
fn delete_from_empty_panics() {
    let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    tree.delete(&1);
}

#[test]
#[should_panic(expected = "delete of an absent key")]
fn delete_absent_panics() {
    let mut tree = built::<AvlNode<i32>>();
    tree.delete(&4);
}
