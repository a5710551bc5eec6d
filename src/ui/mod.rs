//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let content_area = layout::content_area(area);

    match app.state.current_view {
        View::Registration => forms::draw_registration(frame, content_area, app),
        View::Confirmation => confirmation::draw(frame, content_area),
    }

    layout::draw_status_bar(frame, app);
}
