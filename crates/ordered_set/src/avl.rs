use std::cmp::Ordering;

/// Ordered set of integer keys backed by an AVL tree.
///
/// - Keys are unique; inserting a present key leaves the tree unchanged.
/// - Every mutation keeps `height(left) - height(right)` within `[-1, 1]`
///   at each node, so all operations are O(log n).
pub struct AvlTreeSet {
    pub(crate) root: Link,
    len: usize,
}

pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) key: i64,
    height: i16,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new(key: i64) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn height(node: &Link) -> i16 {
        node.as_ref().map(|n| n.height).unwrap_or(0)
    }

    fn recalc(&mut self) {
        let hl = Self::height(&self.left);
        let hr = Self::height(&self.right);
        self.height = 1 + hl.max(hr);
    }

    fn balance_factor(&self) -> i16 {
        Self::height(&self.left) - Self::height(&self.right)
    }
}

impl AvlTreeSet {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        Node::height(&self.root) as usize
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns `true` iff `key` was newly inserted. Inserting a key that is
    /// already present leaves the tree untouched.
    pub fn insert(&mut self, key: i64) -> bool {
        let (root, inserted) = Self::insert_node(self.root.take(), key);
        self.root = root;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns `true` iff `key` was present. Removing an absent key leaves
    /// the tree untouched.
    pub fn remove(&mut self, key: i64) -> bool {
        let (root, removed) = Self::remove_node(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Drops the whole tree; every node is released through ownership.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    fn rotate_right(mut root: Box<Node>) -> Box<Node> {
        let mut left = match root.left.take() {
            Some(node) => node,
            None => return root,
        };
        root.left = left.right.take();
        root.recalc();
        left.right = Some(root);
        left.recalc();
        left
    }

    fn rotate_left(mut root: Box<Node>) -> Box<Node> {
        let mut right = match root.right.take() {
            Some(node) => node,
            None => return root,
        };
        root.right = right.left.take();
        root.recalc();
        right.left = Some(root);
        right.recalc();
        right
    }

    // A single insertion grows exactly one child subtree by at most one, so
    // the heavy grandchild is the one the new key descended into and the
    // case split can compare against the child's key instead of its balance
    // factor. That shortcut is not valid for removal.
    fn rebalance_after_insert(mut node: Box<Node>, key: i64) -> Box<Node> {
        node.recalc();
        let bf = node.balance_factor();
        if bf > 1 {
            let left_key = node.left.as_ref().map(|n| n.key).unwrap_or(key);
            if key > left_key {
                let left = node.left.take();
                node.left = left.map(Self::rotate_left);
            }
            return Self::rotate_right(node);
        }
        if bf < -1 {
            let right_key = node.right.as_ref().map(|n| n.key).unwrap_or(key);
            if key < right_key {
                let right = node.right.take();
                node.right = right.map(Self::rotate_right);
            }
            return Self::rotate_left(node);
        }
        node
    }

    // Removal can shrink a subtree along its whole root path, so every
    // ancestor is rebalanced on the unwind and the case split reads the
    // heavy child's balance factor. A child balance of 0 takes the single
    // rotation.
    fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
        node.recalc();
        let bf = node.balance_factor();
        if bf > 1 {
            let left_bf = node.left.as_ref().map(|n| n.balance_factor()).unwrap_or(0);
            if left_bf < 0 {
                let left = node.left.take();
                node.left = left.map(Self::rotate_left);
            }
            return Self::rotate_right(node);
        }
        if bf < -1 {
            let right_bf = node.right.as_ref().map(|n| n.balance_factor()).unwrap_or(0);
            if right_bf > 0 {
                let right = node.right.take();
                node.right = right.map(Self::rotate_right);
            }
            return Self::rotate_left(node);
        }
        node
    }

    fn insert_node(root: Link, key: i64) -> (Link, bool) {
        let Some(mut node) = root else {
            return (Some(Box::new(Node::new(key))), true);
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert_node(node.left.take(), key);
                node.left = left;
                (Some(Self::rebalance_after_insert(node, key)), inserted)
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_node(node.right.take(), key);
                node.right = right;
                (Some(Self::rebalance_after_insert(node, key)), inserted)
            }
            Ordering::Equal => (Some(node), false),
        }
    }

    fn remove_node(root: Link, key: i64) -> (Link, bool) {
        let Some(mut node) = root else {
            return (None, false);
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove_node(node.left.take(), key);
                node.left = left;
                (Some(Self::rebalance_after_remove(node)), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_node(node.right.take(), key);
                node.right = right;
                (Some(Self::rebalance_after_remove(node)), removed)
            }
            Ordering::Equal => {
                if node.left.is_none() {
                    return (node.right.take(), true);
                }
                if node.right.is_none() {
                    return (node.left.take(), true);
                }

                // Two children: promote the in-order predecessor's key and
                // delete that key from the left subtree, which bottoms out
                // in one of the splice cases above.
                let predecessor = Self::max_key(node.left.as_deref().unwrap());
                node.key = predecessor;
                let (left, _) = Self::remove_node(node.left.take(), predecessor);
                node.left = left;
                (Some(Self::rebalance_after_remove(node)), true)
            }
        }
    }

    fn max_key(mut node: &Node) -> i64 {
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node.key
    }
}

impl Default for AvlTreeSet {
    fn default() -> Self {
        Self::new()
    }
}
