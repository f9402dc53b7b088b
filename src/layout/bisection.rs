//! Interval-bisection layout for binary search trees
//!
//! The root owns the horizontal interval `[0, 2^height]`. Each node is placed
//! at the midpoint of its interval and hands the left half to its left child
//! and the right half to its right child, one row lower. Widths halve per
//! level, so deep, lopsided trees get squeezed horizontally; that is accepted
//! in exchange for not having to measure subtrees.

use super::{EdgeKind, Position, V_SPACING};
use crate::structures::bst::{Bst, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BstLayout {
    /// Nodes in pre-order with their positions
    pub positions: Vec<(NodeId, Position)>,
    pub edges: Vec<LayoutEdge>,
    /// Width of the root interval
    pub width: f64,
    /// Number of levels
    pub height: usize,
    /// Position by arena index; ids are dense
    by_id: Vec<Option<Position>>,
    path: Vec<NodeId>,
}

impl BstLayout {
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.by_id.get(id.0).copied().flatten()
    }

    /// Whether `id` lies on the emphasized path
    pub fn is_on_path(&self, id: NodeId) -> bool {
        self.path.contains(&id)
    }

    pub fn emphasized_edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Emphasized)
    }
}

/// An edge is emphasized iff its endpoints are consecutive entries of `path`
fn classify(path: &[NodeId], parent: NodeId, child: NodeId) -> EdgeKind {
    let on_path = path
        .windows(2)
        .any(|pair| pair[0] == parent && pair[1] == child);
    if on_path {
        EdgeKind::Emphasized
    } else {
        EdgeKind::Normal
    }
}

/// Lay out `tree`, emphasizing the edges along `path`
pub fn layout<V>(tree: &Bst<V>, path: &[NodeId]) -> BstLayout {
    let Some(root) = tree.root() else {
        return BstLayout::default();
    };

    let height = tree.height();
    let width = (1u64 << height.min(62)) as f64;

    let mut positions = Vec::with_capacity(tree.len());
    let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));
    let mut by_id = vec![None; tree.len()];

    // (node, x0, x1, y), right pushed first so left subtrees come out first
    let mut work = vec![(root, 0.0, width, 0.0)];
    while let Some((id, x0, x1, y)) = work.pop() {
        let x = (x0 + x1) / 2.0;
        let pos = Position::new(x, y);
        positions.push((id, pos));
        if let Some(slot) = by_id.get_mut(id.0) {
            *slot = Some(pos);
        }

        let node = tree.node(id);
        for child in [node.left, node.right].into_iter().flatten() {
            edges.push(LayoutEdge {
                parent: id,
                child,
                kind: classify(path, id, child),
            });
        }
        if let Some(right) = node.right {
            work.push((right, x, x1, y - V_SPACING));
        }
        if let Some(left) = node.left {
            work.push((left, x0, x, y - V_SPACING));
        }
    }

    BstLayout {
        positions,
        edges,
        width,
        height,
        by_id,
        path: path.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::bst::insert_all;

    #[test]
    fn test_empty_tree() {
        let tree: Bst<i64> = Bst::new();
        let layout = layout(&tree, &[]);
        assert!(layout.positions.is_empty());
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn test_balanced_tree_positions() {
        let build = insert_all(&[7, 3, 10, 1, 5, 8, 12], 6).unwrap();
        let layout = layout(&build.tree, &build.path);
        assert_eq!(layout.height, 3);
        assert_eq!(layout.width, 8.0);

        let pos_of = |v: i64| {
            let (id, _) = layout
                .positions
                .iter()
                .find(|(id, _)| *build.tree.value(*id) == v)
                .unwrap();
            layout.position(*id).unwrap()
        };
        assert_eq!(pos_of(7), Position::new(4.0, 0.0));
        assert_eq!(pos_of(3), Position::new(2.0, -V_SPACING));
        assert_eq!(pos_of(10), Position::new(6.0, -V_SPACING));
        assert_eq!(pos_of(1).x, 1.0);
        assert_eq!(pos_of(5).x, 3.0);
        assert_eq!(pos_of(12).x, 7.0);
        assert_eq!(pos_of(12).y, -2.0 * V_SPACING);
    }

    #[test]
    fn test_emphasized_edges_follow_path() {
        let build = insert_all(&[7, 3, 10, 1, 5, 8, 12], 4).unwrap();
        let layout = layout(&build.tree, &build.path);
        let emphasized: Vec<_> = layout
            .emphasized_edges()
            .map(|e| (*build.tree.value(e.parent), *build.tree.value(e.child)))
            .collect();
        assert_eq!(emphasized, vec![(7, 3), (3, 5)]);
        assert!(layout.is_on_path(build.inserted));
        assert_eq!(layout.edges.len(), build.tree.len() - 1);
    }

    #[test]
    fn test_preorder_output() {
        let build = insert_all(&[2, 1, 3], 2).unwrap();
        let layout = layout(&build.tree, &[]);
        let order: Vec<_> = layout
            .positions
            .iter()
            .map(|(id, _)| *build.tree.value(*id))
            .collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(layout.emphasized_edges().count(), 0);
    }

    #[test]
    fn test_position_lookup_by_id() {
        let values: Vec<i64> = (0..300).map(|i| (i * 37) % 300).collect();
        let build = insert_all(&values, values.len() - 1).unwrap();
        let layout = layout(&build.tree, &build.path);

        assert_eq!(layout.positions.len(), values.len());
        for &(id, pos) in &layout.positions {
            assert_eq!(layout.position(id), Some(pos));
        }
        assert!(layout
            .edges
            .iter()
            .all(|e| layout.position(e.parent).is_some() && layout.position(e.child).is_some()));
        assert_eq!(layout.position(NodeId(values.len())), None);
        assert_eq!(BstLayout::default().position(NodeId(0)), None);
    }
}
