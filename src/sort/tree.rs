//! Tree sorts driven by a counting comparator.
//!
//! Unlike the strict-key [`AvlTree`](crate::avltree::AvlTree), these trees
//! route equal items to the right subtree, so items that compare equal come
//! back out in first-inserted order. The two contracts are intentionally
//! separate.

use crate::cmp::Compare;
use std::cmp::{max, Ordering};
use std::mem;

struct Node<T> {
    item: T,
    height: usize,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Per-node footprint, used for the harness's structural memory estimate.
pub fn node_footprint<T>() -> usize {
    mem::size_of::<Node<T>>()
}

fn height<T>(node: &Option<Box<Node<T>>>) -> usize {
    node.as_ref().map_or(0, |n| n.height)
}

impl<T> Node<T> {
    fn new(item: T) -> Box<Node<T>> {
        Box::new(Node {
            item,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn renew_height(&mut self) {
        self.height = max(height(&self.left), height(&self.right)) + 1;
    }

    fn factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = node.right.take().unwrap();
        node.right = new_parent.left.take();
        node.renew_height();
        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = node.left.take().unwrap();
        node.left = new_parent.right.take();
        node.renew_height();
        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }

    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.renew_height();

        match node.factor() {
            2 => {
                if node.left.as_ref().unwrap().factor() < 0 {
                    let left = node.left.take().unwrap();
                    node.left = Some(Node::rotate_left(left));
                }
                Node::rotate_right(node)
            }
            -2 => {
                if node.right.as_ref().unwrap().factor() > 0 {
                    let right = node.right.take().unwrap();
                    node.right = Some(Node::rotate_right(right));
                }
                Node::rotate_left(node)
            }
            _ => node,
        }
    }
}

/// Tree sort over a plain, non-balancing BST.
pub fn tree_sort_basic<T: Clone, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let mut root: Option<Box<Node<T>>> = None;

    for item in arr.to_vec() {
        root = Some(insert_bst(root, item, cmp));
    }

    write_inorder(root, arr);
}

fn insert_bst<T, C: Compare<T>>(node: Option<Box<Node<T>>>, item: T, cmp: &mut C) -> Box<Node<T>> {
    let mut node = match node {
        Some(node) => node,
        None => return Node::new(item),
    };

    if cmp.compare(&item, &node.item) == Ordering::Less {
        node.left = Some(insert_bst(node.left.take(), item, cmp));
    } else {
        // equal items go right
        node.right = Some(insert_bst(node.right.take(), item, cmp));
    }

    node
}

/// Tree sort over a self-balancing AVL tree. Same tie rule as the basic
/// variant; rotations keep the in-order sequence intact.
pub fn tree_sort_avl<T: Clone, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let mut root: Option<Box<Node<T>>> = None;

    for item in arr.to_vec() {
        root = Some(insert_avl(root, item, cmp));
    }

    write_inorder(root, arr);
}

fn insert_avl<T, C: Compare<T>>(node: Option<Box<Node<T>>>, item: T, cmp: &mut C) -> Box<Node<T>> {
    let mut node = match node {
        Some(node) => node,
        None => return Node::new(item),
    };

    if cmp.compare(&item, &node.item) == Ordering::Less {
        node.left = Some(insert_avl(node.left.take(), item, cmp));
    } else {
        node.right = Some(insert_avl(node.right.take(), item, cmp));
    }

    Node::rebalance(node)
}

fn write_inorder<T>(root: Option<Box<Node<T>>>, arr: &mut [T]) {
    let mut idx = 0;
    emit(root, arr, &mut idx);
    debug_assert_eq!(idx, arr.len());
}

fn emit<T>(node: Option<Box<Node<T>>>, arr: &mut [T], idx: &mut usize) {
    if let Some(node) = node {
        let node = *node;
        emit(node.left, arr, idx);
        arr[*idx] = node.item;
        *idx += 1;
        emit(node.right, arr, idx);
    }
}
