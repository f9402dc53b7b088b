//! Binary search tree pane

use super::utils::{render_diagram, render_placeholder, DiagramEdge, DiagramNode};
use crate::engine::BstStep;
use crate::layout::{bisection::BstLayout, EdgeKind};
use crate::ui::theme::{palette_color, DEFAULT_THEME};
use ratatui::{layout::Rect, Frame};

const TITLE: &str = "Binary Search Tree (BST)";

/// Render the tree after the current insertion with its insertion path
/// emphasized
pub fn render_bst_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&BstStep<i64>>,
    layout: Option<&BstLayout>,
) {
    let (Some(step), Some(layout)) = (step, layout) else {
        render_placeholder(frame, area, TITLE, "(nothing to show)");
        return;
    };
    let tree = &step.build.tree;

    let nodes: Vec<DiagramNode> = layout
        .positions
        .iter()
        .map(|&(id, pos)| DiagramNode {
            pos,
            label: tree.value(id).to_string(),
            color: if layout.is_on_path(id) {
                DEFAULT_THEME.path
            } else {
                palette_color(id.0)
            },
            is_active: id == step.build.inserted,
        })
        .collect();

    let edges: Vec<DiagramEdge> = layout
        .edges
        .iter()
        .filter_map(|edge| {
            Some(DiagramEdge {
                from: layout.position(edge.parent)?,
                to: layout.position(edge.child)?,
                color: match edge.kind {
                    EdgeKind::Emphasized => DEFAULT_THEME.path,
                    EdgeKind::Normal => DEFAULT_THEME.edge,
                },
            })
        })
        .collect();

    render_diagram(frame, area, TITLE, &nodes, &edges);
}
