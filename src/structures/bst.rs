//! Arena-backed binary search tree
//!
//! Nodes live in a `Vec` and refer to their children by [`NodeId`]. The tree
//! is append-only: nodes are never removed or re-parented, so a `NodeId` stays
//! valid for the lifetime of its [`Bst`].
//!
//! # Ordering
//!
//! Values strictly less than a node go left; values greater than **or equal
//! to** it go right. Duplicates therefore always end up in the right subtree.

/// Index of a node inside its [`Bst`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct BstNode<V> {
    pub value: V,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bst<V> {
    nodes: Vec<BstNode<V>>,
    root: Option<NodeId>,
}

impl<V> Bst<V> {
    pub fn new() -> Self {
        Bst {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node. Ids handed out by this tree are always valid.
    pub fn node(&self, id: NodeId) -> &BstNode<V> {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&BstNode<V>> {
        self.nodes.get(id.0)
    }

    pub fn value(&self, id: NodeId) -> &V {
        &self.node(id).value
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max_depth = 0;
        let mut work = vec![(root, 1)];
        while let Some((id, depth)) = work.pop() {
            max_depth = max_depth.max(depth);
            let node = self.node(id);
            work.extend(node.left.map(|c| (c, depth + 1)));
            work.extend(node.right.map(|c| (c, depth + 1)));
        }
        max_depth
    }

    /// Values in sorted (in-order) order
    pub fn in_order(&self) -> Vec<&V> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            if let Some(id) = stack.pop() {
                result.push(self.value(id));
                current = self.node(id).right;
            }
        }
        result
    }

    fn alloc(&mut self, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(BstNode {
            value,
            left: None,
            right: None,
        });
        id
    }
}

impl<V: Ord> Bst<V> {
    /// Insert `value` and return the root-to-node path, ending at the new node
    pub fn insert(&mut self, value: V) -> Vec<NodeId> {
        let mut path = Vec::new();
        let Some(mut current) = self.root else {
            let id = self.alloc(value);
            self.root = Some(id);
            path.push(id);
            return path;
        };

        loop {
            path.push(current);
            let goes_left = value < self.node(current).value;
            let next = if goes_left {
                self.node(current).left
            } else {
                self.node(current).right
            };

            match next {
                Some(child) => current = child,
                None => {
                    let id = self.alloc(value);
                    let parent = &mut self.nodes[current.0];
                    if goes_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    path.push(id);
                    return path;
                }
            }
        }
    }
}

impl<V> Default for Bst<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree built from a prefix of the input plus the path of its last insertion
#[derive(Debug, Clone)]
pub struct BstBuild<V> {
    pub tree: Bst<V>,
    /// Root-first path of the highlighted insertion; ends at `inserted`
    pub path: Vec<NodeId>,
    pub inserted: NodeId,
}

impl<V> BstBuild<V> {
    /// Values along the insertion path, root first
    pub fn path_values(&self) -> Vec<&V> {
        self.path.iter().map(|&id| self.tree.value(id)).collect()
    }
}

/// Insert `values[0..=highlight_index]` into an empty tree, recording the
/// insertion path of the value at `highlight_index`.
///
/// The result depends only on that prefix, so it can be recomputed for any
/// step independently. Returns `None` when `highlight_index` is out of range.
pub fn insert_all<V: Ord + Clone>(values: &[V], highlight_index: usize) -> Option<BstBuild<V>> {
    let prefix = values.get(..=highlight_index)?;
    let (last, rest) = prefix.split_last()?;

    let mut tree = Bst::new();
    for value in rest {
        tree.insert(value.clone());
    }
    let path = tree.insert(last.clone());
    let inserted = *path.last()?;

    Some(BstBuild {
        tree,
        path,
        inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_tree() {
        let mut tree = Bst::new();
        let path = tree.insert(7);
        assert_eq!(path.len(), 1);
        assert_eq!(tree.root(), Some(path[0]));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_ordering_invariant() {
        let mut tree = Bst::new();
        for v in [7, 3, 10, 1, 5, 8, 12] {
            tree.insert(v);
        }
        let root = tree.root().unwrap();
        assert_eq!(*tree.value(root), 7);
        let left = tree.node(root).left.unwrap();
        let right = tree.node(root).right.unwrap();
        assert_eq!(*tree.value(left), 3);
        assert_eq!(*tree.value(right), 10);
        assert_eq!(tree.height(), 3);
        assert_eq!(
            tree.in_order().into_iter().copied().collect::<Vec<_>>(),
            vec![1, 3, 5, 7, 8, 10, 12]
        );
    }

    #[test]
    fn test_duplicates_route_right() {
        let build = insert_all(&[5, 5], 1).unwrap();
        let root = build.tree.root().unwrap();
        assert_eq!(build.tree.node(root).left, None);
        assert_eq!(build.tree.node(root).right, Some(build.inserted));
        assert_eq!(*build.tree.value(build.inserted), 5);
    }

    #[test]
    fn test_insert_all_uses_prefix_only() {
        let values = [7, 3, 10, 1, 5, 8, 12];
        let build = insert_all(&values, 2).unwrap();
        assert_eq!(build.tree.len(), 3);
        assert_eq!(build.path_values(), vec![&7, &10]);
    }

    #[test]
    fn test_insert_all_out_of_range() {
        assert!(insert_all(&[1, 2], 2).is_none());
        assert!(insert_all::<i64>(&[], 0).is_none());
    }

    #[test]
    fn test_path_length_is_depth_plus_one() {
        let values = [50, 40, 30, 20, 10];
        for (i, _) in values.iter().enumerate() {
            let build = insert_all(&values, i).unwrap();
            assert_eq!(build.path.len(), i + 1);
        }
    }

    #[test]
    fn test_insert_all_is_repeatable() {
        let values = [4, 2, 6, 2];
        let a = insert_all(&values, 3).unwrap();
        let b = insert_all(&values, 3).unwrap();
        assert_eq!(a.tree, b.tree);
        assert_eq!(a.path, b.path);
    }
}
