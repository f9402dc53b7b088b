//! Input pane: the raw text behind the active tab

use crate::ui::app::{EditState, InputField, RawInputs};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the input pane
pub struct InputRenderData<'a> {
    pub fields: &'a [InputField],
    pub inputs: &'a RawInputs,
    pub editing: Option<&'a EditState>,
}

pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    let is_editing = data.editing.is_some();
    let border_style = if is_editing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if is_editing {
        " Input (↵ apply, esc cancel) "
    } else {
        " Input (e edit) "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<Line> = data
        .fields
        .iter()
        .enumerate()
        .map(|(i, &field)| {
            let key_hint = match i {
                0 => "e",
                _ => "g",
            };
            let mut spans = vec![
                Span::styled(
                    format!("[{}] ", key_hint),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{}: ", field.label()),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
            ];
            match data.editing {
                Some(edit) if edit.field == field => {
                    spans.push(Span::styled(
                        edit.buffer.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .bg(DEFAULT_THEME.current_line_bg),
                    ));
                    spans.push(Span::styled(
                        "▏",
                        Style::default().fg(DEFAULT_THEME.border_focused),
                    ));
                }
                _ => spans.push(Span::styled(
                    data.inputs.get(field).to_string(),
                    Style::default().fg(DEFAULT_THEME.fg),
                )),
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
