//! Array pane: one cell per element, the scanned element highlighted

use super::utils::{pane_block, render_placeholder};
use crate::ui::theme::{palette_color, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Array Traversal";

/// Narrowest cell that still fits a short value
const MIN_CELL_WIDTH: u16 = 6;

/// First cell to show so that `current` stays visible when not every cell fits
fn window_start(len: usize, visible: usize, current: usize) -> usize {
    if len <= visible {
        return 0;
    }
    current.saturating_sub(visible / 2).min(len - visible)
}

pub fn render_array_pane(frame: &mut Frame, area: Rect, values: &[String], current: Option<usize>) {
    if values.is_empty() {
        render_placeholder(frame, area, TITLE, "(empty array)");
        return;
    }

    let block = pane_block(TITLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = ((inner.width / MIN_CELL_WIDTH) as usize).clamp(1, values.len());
    let start = window_start(values.len(), visible, current.unwrap_or(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, visible as u32); visible])
        .split(rows[0]);
    let indices = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, visible as u32); visible])
        .split(rows[1]);

    for (slot, (index, value)) in values.iter().enumerate().skip(start).take(visible).enumerate() {
        let is_current = Some(index) == current;
        let fill = if is_current {
            DEFAULT_THEME.highlight
        } else {
            palette_color(index)
        };

        let cell = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                value.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.node_text)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(fill))
        .block(Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(if is_current {
                DEFAULT_THEME.border_focused
            } else {
                DEFAULT_THEME.border_normal
            }),
        ));
        frame.render_widget(cell, cells[slot]);

        let label = Paragraph::new(format!("[{}]", index))
            .alignment(Alignment::Center)
            .style(Style::default().fg(if is_current {
                DEFAULT_THEME.highlight
            } else {
                DEFAULT_THEME.comment
            }));
        frame.render_widget(label, indices[slot]);
    }
}
