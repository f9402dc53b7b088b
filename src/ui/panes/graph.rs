//! DFS graph pane
//!
//! Nodes the current step has already visited keep their palette color,
//! unvisited nodes are drawn pale, and the active node is highlighted. A
//! `Recurse` step additionally emphasizes the edge being followed.

use super::utils::{render_diagram, DiagramEdge, DiagramNode};
use crate::engine::StepEvent;
use crate::ui::app::DfsModel;
use crate::ui::theme::{palette_color, DEFAULT_THEME};
use ratatui::{layout::Rect, Frame};

pub fn render_graph_pane(frame: &mut Frame, area: Rect, model: &DfsModel, step: Option<&StepEvent>) {
    let highlight_edge = step.and_then(StepEvent::highlight_edge);

    let mut nodes: Vec<DiagramNode> = model
        .positions
        .iter()
        .map(|(name, &pos)| {
            let visited = step.is_some_and(|s| s.visited().contains(name));
            let color = if visited {
                palette_color(model.color_index.get(name).copied().unwrap_or(0))
            } else {
                DEFAULT_THEME.unvisited
            };
            DiagramNode {
                pos,
                label: name.clone(),
                color,
                is_active: step.is_some_and(|s| s.node() == name.as_str()),
            }
        })
        .collect();
    // Hash order is arbitrary; keep drawing order stable
    nodes.sort_by(|a, b| a.label.cmp(&b.label));

    let edges: Vec<DiagramEdge> = model
        .adjacency
        .edges()
        .into_iter()
        .filter_map(|(a, b)| {
            let emphasized = highlight_edge
                .is_some_and(|(from, to)| (from, to) == (a, b) || (from, to) == (b, a));
            Some(DiagramEdge {
                from: *model.positions.get(a)?,
                to: *model.positions.get(b)?,
                color: if emphasized {
                    DEFAULT_THEME.path
                } else {
                    DEFAULT_THEME.edge
                },
            })
        })
        .collect();

    render_diagram(frame, area, "DFS on Graph", &nodes, &edges);
}
