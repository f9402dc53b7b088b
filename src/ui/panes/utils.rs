//! Shared drawing helpers for the visualization panes
//!
//! Every structure pane reduces its state to a list of [`DiagramNode`]s and
//! [`DiagramEdge`]s in layout coordinates and hands them to
//! [`render_diagram`], which owns the canvas, scaling and labels.

use crate::layout::{Bounds, Position, NODE_RADIUS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Extra room around the outermost nodes, in layout units
const CANVAS_MARGIN: f64 = 0.8;

pub(super) struct DiagramNode {
    pub pos: Position,
    pub label: String,
    pub color: Color,
    /// Active element: label drawn inverted on the highlight color
    pub is_active: bool,
}

pub(super) struct DiagramEdge {
    pub from: Position,
    pub to: Position,
    pub color: Color,
}

/// Titled pane border
pub(super) fn pane_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

/// Placeholder used when a pane has nothing to draw
pub(super) fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let paragraph = Paragraph::new(text.to_string())
        .block(pane_block(title))
        .style(Style::default().fg(DEFAULT_THEME.comment));
    frame.render_widget(paragraph, area);
}

/// Draw nodes and edges on a braille canvas scaled to fit the pane
pub(super) fn render_diagram(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    nodes: &[DiagramNode],
    edges: &[DiagramEdge],
) {
    let Some(bounds) = Bounds::of(nodes.iter().map(|n| &n.pos)) else {
        render_placeholder(frame, area, title, "(nothing to show)");
        return;
    };
    let bounds = bounds.padded(CANVAS_MARGIN);

    let canvas = Canvas::default()
        .block(pane_block(title))
        .marker(Marker::Braille)
        .x_bounds([bounds.min.x, bounds.max.x])
        .y_bounds([bounds.min.y, bounds.max.y])
        .paint(|ctx| {
            for edge in edges {
                ctx.draw(&CanvasLine {
                    x1: edge.from.x,
                    y1: edge.from.y,
                    x2: edge.to.x,
                    y2: edge.to.y,
                    color: edge.color,
                });
            }
            for node in nodes {
                ctx.draw(&Circle {
                    x: node.pos.x,
                    y: node.pos.y,
                    radius: NODE_RADIUS,
                    color: if node.is_active {
                        DEFAULT_THEME.highlight
                    } else {
                        node.color
                    },
                });
            }

            // Labels on top of the shapes
            ctx.layer();
            for node in nodes {
                let style = if node.is_active {
                    Style::default()
                        .bg(DEFAULT_THEME.highlight)
                        .fg(DEFAULT_THEME.node_text)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(node.color).add_modifier(Modifier::BOLD)
                };
                ctx.print(
                    node.pos.x,
                    node.pos.y,
                    Span::styled(node.label.clone(), style),
                );
            }
        });

    frame.render_widget(canvas, area);
}
