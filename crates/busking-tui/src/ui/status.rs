//! Status and help bars
//!
//! The status bar shows the last notice; the help bar lists the keys of the
//! current screen.

use busking_app::{FormState, Screen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let message = app.status_message().unwrap_or_default();
    let line = Line::from(vec![Span::raw(" "), Span::raw(message.to_string())]);
    let paragraph = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Render the key help for the current screen.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.screen() {
        Screen::Home { .. } => "↑/↓ move  Enter open  q/Esc quit",
        Screen::Buses(_) => "↑/↓ move  r refresh  Esc back",
        Screen::Bookings(_) => "↑/↓ move  Enter edit  n new  r refresh  Esc back",
        Screen::Form(form) if form.state() == FormState::Editing => {
            "Tab/Shift+Tab field  ←/→ bus  Enter submit  Esc back"
        },
        Screen::Form(_) => "Esc back",
    };

    let line = Line::from(Span::styled(format!(" {help}"), Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
