//! Confirmation view shown after a successful submit

use crate::ui::layout::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the success screen. The form is torn down by this point; the only
/// remaining action is quitting.
pub fn draw(frame: &mut Frame, area: Rect) {
    let dialog_area = centered_rect(44, 7, area);
    frame.render_widget(Clear, dialog_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Registration Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(content)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(dialog, dialog_area);
}
