//! Reasoning pane: why the current step does what it does

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the reasoning pane
#[derive(Debug, Clone, Default)]
pub struct ReasoningRenderData {
    pub reasoning: Option<String>,
    /// Shown instead of the reasoning when the input was rejected
    pub warning: Option<(String, String)>,
    /// Extra `label: value` rows under the reasoning
    pub details: Vec<(String, String)>,
}

impl ReasoningRenderData {
    pub fn from_reasoning(reasoning: Option<String>) -> Self {
        ReasoningRenderData {
            reasoning,
            ..Default::default()
        }
    }

    pub fn warning(message: &str, cause: String) -> Self {
        ReasoningRenderData {
            warning: Some((message.to_string(), cause)),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, label: &str, value: String) -> Self {
        self.details.push((label.to_string(), value));
        self
    }
}

pub fn render_reasoning_pane(frame: &mut Frame, area: Rect, data: ReasoningRenderData) {
    let block = Block::default()
        .title(" Reasoning ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();

    if let Some((message, cause)) = data.warning {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", message),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            cause,
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else if let Some(reasoning) = data.reasoning {
        lines.push(Line::from(Span::styled(
            reasoning,
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "(nothing to show)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    if !data.details.is_empty() {
        lines.push(Line::default());
    }
    for (label, value) in data.details {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
