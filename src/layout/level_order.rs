//! Layout of a complete binary tree stored in level order
//!
//! Node `i` sits on level `⌊log2(i + 1)⌋`. Every level is a band whose width
//! is proportional to its slot count `2^L`, and the slots are spread evenly
//! across it. Because the tree is complete, slot positions alone give the
//! familiar triangular shape; no subtree extents are needed.

use super::{Position, H_MARGIN, NODE_RADIUS, V_SPACING};
use crate::engine::tree::parent_of;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelOrderLayout {
    /// Position of node `i` at index `i`
    pub positions: Vec<Position>,
    /// `(parent, child)` for every non-root node
    pub edges: Vec<(usize, usize)>,
}

/// Level of node `index` (root is level 0)
pub fn level_of(index: usize) -> u32 {
    (index + 1).ilog2()
}

/// Position of the node at `index`
pub fn position_of(index: usize) -> Position {
    let level = level_of(index);
    let slots = 1usize << level;
    let index_in_level = index - (slots - 1);
    let y = -(level as f64) * V_SPACING;

    if slots == 1 {
        return Position::new(0.0, y);
    }

    let total_width = slots as f64 * (NODE_RADIUS * 2.0 + H_MARGIN);
    let x = -total_width / 2.0 + index_in_level as f64 * (total_width / (slots - 1) as f64);
    Position::new(x, y)
}

/// Lay out a complete tree of `count` nodes
pub fn layout(count: usize) -> LevelOrderLayout {
    LevelOrderLayout {
        positions: (0..count).map(position_of).collect(),
        edges: (1..count)
            .filter_map(|child| parent_of(child).map(|parent| (parent, child)))
            .collect(),
    }
}
