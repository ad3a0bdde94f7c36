//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod form;
mod home;
mod lists;
mod status;

use busking_app::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;
    const HELP_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(frame.area());

    let [main_area, status_area, help_area] = chunks.as_ref() else {
        return;
    };

    match app.screen() {
        Screen::Home { selected } => home::render(frame, *selected, *main_area),
        Screen::Buses(list) => lists::render_buses(frame, list, *main_area),
        Screen::Bookings(list) => lists::render_bookings(frame, list, *main_area),
        Screen::Form(booking_form) => form::render(frame, booking_form, *main_area),
    }
    status::render(frame, app, *status_area);
    status::render_help(frame, app, *help_area);
}
