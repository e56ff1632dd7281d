use std::cmp::{max, Ordering};

/// Self-balancing binary search tree with strict keys.
///
/// Every node caches its subtree height; insertion rebalances on the way
/// back up with at most one single or double rotation. Duplicate keys are
/// rejected and leave the tree untouched.
pub struct AvlTree<K: Ord, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

fn height<K, V>(node: &Option<Box<Node<K, V>>>) -> usize {
    node.as_ref().map_or(0, |n| n.height)
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
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

    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut new_parent = node.right.take().unwrap();
        node.right = new_parent.left.take();
        node.renew_height();
        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut new_parent = node.left.take().unwrap();
        node.left = new_parent.right.take();
        node.renew_height();
        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }

    fn rebalance(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node.renew_height();

        match node.factor() {
            2 => {
                // left-right shape needs the child rotated first
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

impl<K: Ord, V> AvlTree<K, V> {
    pub fn new() -> AvlTree<K, V> {
        AvlTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Insert (key, value).
    ///
    /// If the key is already present, the tree is left unchanged and the
    /// rejected pair is handed back.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        let (root, rejected) = Self::insert_node(self.root.take(), key, value);
        self.root = Some(root);

        match rejected {
            Some(pair) => Err(pair),
            None => {
                self.len += 1;
                Ok(())
            }
        }
    }

    fn insert_node(
        node: Option<Box<Node<K, V>>>,
        key: K,
        value: V,
    ) -> (Box<Node<K, V>>, Option<(K, V)>) {
        let mut node = match node {
            Some(node) => node,
            None => return (Node::new(key, value), None),
        };

        let rejected = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, rejected) = Self::insert_node(node.left.take(), key, value);
                node.left = Some(child);
                rejected
            }
            Ordering::Greater => {
                let (child, rejected) = Self::insert_node(node.right.take(), key, value);
                node.right = Some(child);
                rejected
            }
            Ordering::Equal => return (node, Some((key, value))),
        };

        (Node::rebalance(node), rejected)
    }

    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.lookup_counted(key).0
    }

    /// Search, counting one step per node visited. Never rebalances.
    pub fn lookup_counted(&self, key: &K) -> (Option<&V>, usize) {
        let mut visited = 0;
        let mut current = self.root.as_ref();

        while let Some(node) = current {
            visited += 1;

            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_ref(),
                Ordering::Greater => node.right.as_ref(),
                Ordering::Equal => return (Some(&node.value), visited),
            };
        }

        (None, visited)
    }

    pub fn keys_inorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::inorder(&self.root, &mut keys);
        keys
    }

    fn inorder<'t>(node: &'t Option<Box<Node<K, V>>>, keys: &mut Vec<&'t K>) {
        if let Some(node) = node {
            Self::inorder(&node.left, keys);
            keys.push(&node.key);
            Self::inorder(&node.right, keys);
        }
    }

    pub fn keys_preorder(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        Self::preorder(&self.root, &mut keys);
        keys
    }

    fn preorder<'t>(node: &'t Option<Box<Node<K, V>>>, keys: &mut Vec<&'t K>) {
        if let Some(node) = node {
            keys.push(&node.key);
            Self::preorder(&node.left, keys);
            Self::preorder(&node.right, keys);
        }
    }

    /// True if every node satisfies the AVL bound and its cached height.
    pub fn is_balanced(&self) -> bool {
        Self::balanced(&self.root).is_some()
    }

    fn balanced(node: &Option<Box<Node<K, V>>>) -> Option<usize> {
        let node = match node {
            Some(node) => node,
            None => return Some(0),
        };

        let left = Self::balanced(&node.left)?;
        let right = Self::balanced(&node.right)?;

        let diff = if left > right { left - right } else { right - left };
        if diff > 1 || node.height != max(left, right) + 1 {
            return None;
        }

        Some(max(left, right) + 1)
    }
}

impl<K: Ord, V> Default for AvlTree<K, V> {
    fn default() -> AvlTree<K, V> {
        AvlTree::new()
    }
}
