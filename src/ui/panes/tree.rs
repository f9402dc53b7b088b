//! Complete binary tree pane (level order)

use super::utils::{render_diagram, DiagramEdge, DiagramNode};
use crate::layout::level_order::LevelOrderLayout;
use crate::ui::theme::{palette_color, DEFAULT_THEME};
use ratatui::{layout::Rect, Frame};

/// Render the whole tree, highlighting the node placed at step `current` and
/// the edge to its parent
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[String],
    layout: &LevelOrderLayout,
    current: Option<usize>,
) {
    let nodes: Vec<DiagramNode> = layout
        .positions
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (&pos, value))| DiagramNode {
            pos,
            label: value.clone(),
            color: palette_color(i),
            is_active: Some(i) == current,
        })
        .collect();

    let edges: Vec<DiagramEdge> = layout
        .edges
        .iter()
        .map(|&(parent, child)| DiagramEdge {
            from: layout.positions[parent],
            to: layout.positions[child],
            color: if Some(child) == current {
                DEFAULT_THEME.path
            } else {
                DEFAULT_THEME.edge
            },
        })
        .collect();

    render_diagram(frame, area, "Binary Tree (Level Order)", &nodes, &edges);
}
