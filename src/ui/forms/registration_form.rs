//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, SUBMIT_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 66;
// Five field rows, the submit row, and the outer border
const FORM_HEIGHT: u16 = 5 * FIELD_HEIGHT + BUTTON_HEIGHT + 2;

/// Draw the registration form centered in the available area
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // First Name
            Constraint::Length(FIELD_HEIGHT), // Last Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Date of Birth
            Constraint::Length(FIELD_HEIGHT), // Zip Code
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(form_area);

    for idx in 0..SUBMIT_ROW {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, chunks[idx], field, form.active_field() == idx);
        }
    }

    // Submit stays disabled until every field's latest verdict is valid
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Submit button
            Constraint::Min(0),     // remaining space
        ])
        .split(chunks[SUBMIT_ROW]);

    render_button(
        frame,
        button_chunks[0],
        "Submit",
        form.is_submit_row_active(),
        form.can_submit(),
    );
}
