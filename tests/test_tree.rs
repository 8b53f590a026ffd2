use huffwick::error::{Side, TreeError};
use huffwick::model::LinkedBinaryTree;

/// Builds
/// ```text
/// 12
/// ├─ L: 25
/// │  ├─ L: 58
/// │  └─ R: 36
/// └─ R: 31
/// ```
fn sample_tree() -> LinkedBinaryTree<i32> {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(12).unwrap();
    let left = tree.add_left(root, 25).unwrap();
    tree.add_right(root, 31).unwrap();
    tree.add_left(left, 58).unwrap();
    tree.add_right(left, 36).unwrap();
    tree
}

// --- CONSTRUCTION AND NAVIGATION ---
#[test]
fn test_empty_tree() {
    let tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.root(), None);
    assert!(tree.is_valid());
}

#[test]
fn test_building_tree() {
    let tree = sample_tree();
    assert_eq!(tree.size(), 5);
    assert!(tree.is_valid());

    let root = tree.root().unwrap();
    assert_eq!(tree[root], 12);
    assert!(tree.is_root(root).unwrap());
    assert!(tree.is_internal(root).unwrap());
    assert_eq!(tree.parent(root).unwrap(), None);

    let left = tree.left(root).unwrap().unwrap();
    let right = tree.right(root).unwrap().unwrap();
    assert_eq!(tree[left], 25);
    assert_eq!(tree[right], 31);
    assert_eq!(tree.parent(left).unwrap(), Some(root));
    assert_eq!(tree.sibling(left).unwrap(), Some(right));
    assert_eq!(tree.sibling(right).unwrap(), Some(left));
    assert_eq!(tree.sibling(root).unwrap(), None);

    assert!(tree.is_leaf(right).unwrap());
    assert_eq!(tree.num_children(left).unwrap(), 2);
    assert_eq!(tree.children(left).unwrap().len(), 2);
    assert!(tree.children(right).unwrap().is_empty());
}

#[test]
fn test_depth_and_height() {
    let tree = sample_tree();
    let root = tree.root().unwrap();
    let left = tree.left(root).unwrap().unwrap();
    let leaf = tree.left(left).unwrap().unwrap();

    assert_eq!(tree.depth(root).unwrap(), 0);
    assert_eq!(tree.depth(left).unwrap(), 1);
    assert_eq!(tree.depth(leaf).unwrap(), 2);
    assert_eq!(tree.height(root).unwrap(), 2);
    assert_eq!(tree.height(left).unwrap(), 1);
    assert_eq!(tree.height(leaf).unwrap(), 0);
}

#[test]
fn test_set_returns_old_element() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    assert_eq!(tree.set(root, 99).unwrap(), 12);
    assert_eq!(tree[root], 99);

    *tree.element_mut(root).unwrap() += 1;
    assert_eq!(*tree.element(root).unwrap(), 100);
}

// --- PRECONDITIONS ---
#[test]
fn test_add_root_on_non_empty_tree_fails() {
    let mut tree = sample_tree();
    assert_eq!(tree.add_root(1), Err(TreeError::TreeNotEmpty));
    assert_eq!(tree.size(), 5);
}

#[test]
fn test_add_child_to_occupied_slot_fails() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    assert_eq!(
        tree.add_left(root, 1),
        Err(TreeError::ChildAlreadyExists(Side::Left))
    );
    assert_eq!(
        tree.add_right(root, 1),
        Err(TreeError::ChildAlreadyExists(Side::Right))
    );
    assert_eq!(tree.size(), 5);
}

#[test]
fn test_remove_with_two_children_fails() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    assert_eq!(tree.remove(root), Err(TreeError::TwoChildren));
    assert_eq!(tree.size(), 5);
    assert!(tree.is_valid());
}

#[test]
fn test_foreign_position_is_invalid() {
    let tree = sample_tree();
    let other = sample_tree();
    let foreign = other.root().unwrap();

    assert!(matches!(tree.left(foreign), Err(TreeError::InvalidPosition(_))));
    assert!(matches!(tree.element(foreign), Err(TreeError::InvalidPosition(_))));
}

#[test]
#[should_panic]
fn test_index_with_foreign_position_panics() {
    let tree = sample_tree();
    let other = sample_tree();
    let _ = tree[other.root().unwrap()];
}

// --- REMOVE ---
#[test]
fn test_remove_leaf() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    let right = tree.right(root).unwrap().unwrap();

    assert_eq!(tree.remove(right).unwrap(), 31);
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.right(root).unwrap(), None);
    assert!(tree.is_valid());
}

#[test]
fn test_remove_promotes_only_child() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    let left = tree.left(root).unwrap().unwrap();
    let grandchild = tree.left(left).unwrap().unwrap();
    let other_grandchild = tree.right(left).unwrap().unwrap();
    tree.remove(other_grandchild).unwrap();

    assert_eq!(tree.remove(left).unwrap(), 25);
    assert_eq!(tree.left(root).unwrap(), Some(grandchild));
    assert_eq!(tree.parent(grandchild).unwrap(), Some(root));
    assert_eq!(tree.size(), 3);
    assert!(tree.is_valid());
}

#[test]
fn test_remove_root_promotes_child() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root('a').unwrap();
    let child = tree.add_right(root, 'b').unwrap();

    assert_eq!(tree.remove(root).unwrap(), 'a');
    assert_eq!(tree.root(), Some(child));
    assert_eq!(tree.parent(child).unwrap(), None);
    assert!(tree.is_root(child).unwrap());
    assert!(tree.is_valid());
}

#[test]
fn test_removed_position_is_invalid() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    let right = tree.right(root).unwrap().unwrap();
    tree.remove(right).unwrap();

    assert!(matches!(tree.parent(right), Err(TreeError::InvalidPosition(_))));
    assert!(matches!(tree.set(right, 0), Err(TreeError::InvalidPosition(_))));
    assert!(matches!(tree.remove(right), Err(TreeError::InvalidPosition(_))));
    assert!(matches!(tree.add_left(right, 0), Err(TreeError::InvalidPosition(_))));

    // New nodes do not revive the removed handle
    let new_right = tree.add_right(root, 7).unwrap();
    assert_ne!(new_right, right);
    assert!(tree.element(right).is_err());
}

#[test]
fn test_remove_last_node_empties_tree() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(1).unwrap();
    tree.remove(root).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);

    let new_root = tree.add_root(2).unwrap();
    assert_eq!(tree[new_root], 2);
    assert!(tree.element(root).is_err());
}

// --- ATTACH ---
#[test]
fn test_attach_moves_subtrees() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();

    let mut left = sample_tree();
    let mut right = LinkedBinaryTree::new();
    right.add_root(7).unwrap();
    let stale = left.root().unwrap();

    tree.attach(root, &mut left, &mut right).unwrap();

    assert_eq!(tree.size(), 7);
    assert!(tree.is_valid());
    assert!(left.is_empty());
    assert!(right.is_empty());
    assert!(left.element(stale).is_err());

    let new_left = tree.left(root).unwrap().unwrap();
    let new_right = tree.right(root).unwrap().unwrap();
    assert_eq!(tree[new_left], 12);
    assert_eq!(tree[new_right], 7);
    assert_eq!(tree.parent(new_left).unwrap(), Some(root));
    assert_eq!(tree.height(root).unwrap(), 3);

    // Donor trees are reusable and do not accept old handles
    left.add_root(1).unwrap();
    assert!(left.element(stale).is_err());
}

#[test]
fn test_attach_with_removed_nodes_in_donor() {
    let mut donor = sample_tree();
    let donor_root = donor.root().unwrap();
    let donor_right = donor.right(donor_root).unwrap().unwrap();
    donor.remove(donor_right).unwrap();

    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    tree.attach(root, &mut donor, &mut LinkedBinaryTree::new()).unwrap();

    assert_eq!(tree.size(), 5);
    assert_eq!(tree.right(root).unwrap(), None);
    assert!(tree.is_valid());
    let values: Vec<i32> = tree.preorder().map(|p| tree[p]).collect();
    assert_eq!(values, vec![0, 12, 25, 58, 36]);
}

#[test]
fn test_attach_to_internal_position_fails() {
    let mut tree = sample_tree();
    let root = tree.root().unwrap();
    let mut left = LinkedBinaryTree::new();
    left.add_root(1).unwrap();

    let result = tree.attach(root, &mut left, &mut LinkedBinaryTree::new());
    assert!(matches!(result, Err(TreeError::InvalidPosition(_))));
    assert_eq!(left.size(), 1);
    assert_eq!(tree.size(), 5);
}

// --- LEVEL ORDER CONSTRUCTION ---
#[test]
fn test_create_level_order() {
    let mut tree = LinkedBinaryTree::new();
    let slots = vec![
        Some("A"), Some("B"), Some("C"), Some("D"), Some("E"), None, Some("F"),
        None, None, Some("G"), Some("H"), None, None, None, None,
    ];
    let root = tree.create_level_order(slots).unwrap().unwrap();

    assert_eq!(tree.size(), 8);
    assert!(tree.is_valid());
    assert_eq!(tree[root], "A");

    let c = tree.right(root).unwrap().unwrap();
    assert_eq!(tree[c], "C");
    assert_eq!(tree.left(c).unwrap(), None);
    assert_eq!(tree[tree.right(c).unwrap().unwrap()], "F");

    let levels: Vec<&str> = tree.level_order().map(|p| tree[p]).collect();
    assert_eq!(levels, vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
}

#[test]
fn test_create_level_order_drops_orphans() {
    let mut tree = LinkedBinaryTree::new();
    // Slot 1 is empty, so its children at 3 and 4 have no parent
    tree.create_level_order(vec![Some(1), None, Some(3), Some(4), Some(5)])
        .unwrap();
    assert_eq!(tree.size(), 2);
    assert!(tree.is_valid());
}

#[test]
fn test_create_level_order_on_non_empty_tree_fails() {
    let mut tree = sample_tree();
    assert_eq!(
        tree.create_level_order(vec![Some(1)]),
        Err(TreeError::TreeNotEmpty)
    );
}

#[test]
fn test_create_level_order_without_root() {
    let mut tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    assert_eq!(tree.create_level_order(vec![None, Some(1)]).unwrap(), None);
    assert!(tree.is_empty());
}

// --- RANDOM TREES AND PRINTING ---
#[test]
fn test_make_random_is_search_tree() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(20280);
    for n in [0, 1, 2, 17, 100] {
        let tree = LinkedBinaryTree::<usize>::make_random(n, &mut rng);
        assert_eq!(tree.size(), n);
        assert!(tree.is_valid());
        let values: Vec<usize> = tree.inorder().map(|p| tree[p]).collect();
        assert_eq!(values, (1..=n).collect::<Vec<_>>());
    }
}

#[test]
fn test_display_tree() {
    let tree = sample_tree();
    let expected = "12\n├─ L: 25\n│  ├─ L: 58\n│  └─ R: 36\n└─ R: 31\n";
    assert_eq!(tree.to_string(), expected);

    let empty: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    assert_eq!(empty.to_string(), "(empty tree)\n");
}
