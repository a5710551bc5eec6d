//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the verdict column to the right of each field
const VERDICT_COL_WIDTH: u16 = 22;

/// Draw a form field with its verdict column to the right
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),                     // Input box
            Constraint::Length(VERDICT_COL_WIDTH),   // Verdict column
        ])
        .split(area);

    draw_input_box(frame, chunks[0], field, is_active);
    draw_verdict(frame, chunks[1], field);
}

fn draw_input_box(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let is_invalid = field.verdict.as_ref().is_some_and(|v| !v.valid);

    // Active focus wins over the invalid highlight
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if is_invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.text().is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        let text_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(field.text(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the checkmark or error message once the field has been validated
fn draw_verdict(frame: &mut Frame, area: Rect, field: &FormField) {
    let Some(verdict) = &field.verdict else {
        return;
    };
    if area.height == 0 {
        return;
    }

    let color = if verdict.valid {
        Color::Green
    } else {
        Color::Red
    };

    // Align with the middle row of the bordered input box
    let row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", verdict.message),
        Style::default().fg(color),
    )));
    frame.render_widget(paragraph, row);
}
