use balanced_forest::segment::subtree_at;
use balanced_forest::{SequenceTree, TreeError};

fn collect(tree: &SequenceTree<char>) -> String {
    tree.iter().collect()
}

#[test]
fn build_get_matrix() {
    let mut tree = SequenceTree::new();
    tree.build("hello".chars());
    tree.assert_valid().unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.get_at(0), Some(&'h'));
    assert_eq!(tree.get_at(4), Some(&'o'));
    assert_eq!(tree.get_at(5), None);

    let root = tree.root_index().unwrap();
    assert_eq!(subtree_at(tree.arena(), root, 2), Some(root));

    tree.build("ab".chars());
    assert_eq!(collect(&tree), "ab");
    tree.assert_valid().unwrap();
}

#[test]
fn insert_at_matrix() {
    let mut tree: SequenceTree<char> = SequenceTree::new();
    tree.insert_at(0, 'b').unwrap();
    tree.insert_at(0, 'a').unwrap();
    tree.insert_at(2, 'd').unwrap();
    tree.insert_at(2, 'c').unwrap();
    assert_eq!(collect(&tree), "abcd");
    assert_eq!(
        tree.insert_at(9, 'z'),
        Err(TreeError::IndexOutOfBounds { index: 9, len: 4 })
    );
    tree.insert_first('_');
    tree.insert_last('!');
    assert_eq!(collect(&tree), "_abcd!");
    tree.assert_valid().unwrap();
}

#[test]
fn delete_at_matrix() {
    let mut tree: SequenceTree<char> = "abcdefg".chars().collect();
    assert_eq!(tree.delete_at(3), Ok('d'));
    assert_eq!(tree.delete_first(), Ok('a'));
    assert_eq!(tree.delete_last(), Ok('g'));
    assert_eq!(collect(&tree), "bcef");
    assert_eq!(tree.delete_at(4), Err(TreeError::IndexOutOfBounds { index: 4, len: 4 }));
    tree.assert_valid().unwrap();

    while !tree.is_empty() {
        tree.delete_first().unwrap();
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.delete_last(), Err(TreeError::Empty));
}

#[test]
fn set_at_matrix() {
    let mut tree: SequenceTree<char> = "cat".chars().collect();
    assert_eq!(tree.set_at(0, 'b'), Ok('c'));
    assert_eq!(collect(&tree), "bat");
    assert_eq!(tree.set_at(3, 's'), Err(TreeError::IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn middle_insert_ladder_matrix() {
    let mut tree: SequenceTree<usize> = SequenceTree::new();
    let mut model: Vec<usize> = Vec::new();
    for i in 0..200 {
        let at = model.len() / 2;
        tree.insert_at(at, i).unwrap();
        model.insert(at, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
    for (i, v) in model.iter().enumerate() {
        assert_eq!(tree.get_at(i), Some(v));
    }
    for _ in 0..100 {
        let at = model.len() / 3;
        assert_eq!(tree.delete_at(at), Ok(model.remove(at)));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 100);
}
