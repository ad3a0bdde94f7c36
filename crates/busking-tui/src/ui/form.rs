//! Booking form
//!
//! Renders the create/update form: one line per input with its validation
//! message underneath, the bus selector and the submit button. The terminal
//! cursor is placed in the focused text input.

use busking_app::{BookingForm, FormField, FormMode, FormState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: usize = 8;

/// Render the booking form.
pub fn render(frame: &mut Frame, form: &BookingForm, area: Rect) {
    let title = match form.mode() {
        FormMode::Create => " New booking ".to_string(),
        FormMode::Update { id } => format!(" Edit booking {id} "),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.state() == FormState::Loading {
        frame.render_widget(Paragraph::new("Loading...").style(dim()), inner);
        return;
    }

    let mut lines = Vec::new();
    let mut cursor = None;
    for field in FormField::ALL {
        let focused = form.focus() == field && form.state() == FormState::Editing;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label =
            Span::styled(format!("{:<LABEL_WIDTH$}", format!("{}:", field.label())), label_style);

        match field {
            FormField::Bus => lines.push(Line::from(vec![label, bus_selector(form, focused)])),
            FormField::Submit => {
                lines.push(Line::default());
                lines.push(Line::from(submit_button(form, focused)));
            },
            FormField::Name | FormField::Email | FormField::Phone | FormField::Seats => {
                if let Some(input) = form.field(field) {
                    if focused {
                        cursor = Some((lines.len(), input.cursor()));
                    }
                    lines.push(Line::from(vec![label, Span::raw(input.text().to_string())]));
                }
            },
        }

        if let Some(message) = field.validated().and_then(|f| form.errors().get(f)) {
            lines.push(Line::from(Span::styled(
                format!("{:LABEL_WIDTH$}{message}", ""),
                Style::default().fg(Color::Red),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, col)) = cursor {
        let x = inner.x.saturating_add(u16::try_from(LABEL_WIDTH + col).unwrap_or(u16::MAX));
        let y = inner.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

fn bus_selector(form: &BookingForm, focused: bool) -> Span<'static> {
    let style = if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    match (form.selected_bus_index(), form.selected_bus()) {
        (Some(i), _) => Span::styled(format!("< {} >", form.buses()[i].name), style),
        (None, Some(id)) => Span::styled(format!("< bus {id} >"), style),
        (None, None) if form.buses().is_empty() => Span::styled("(no buses available)", dim()),
        (None, None) => Span::styled("< choose a bus >", style),
    }
}

fn submit_button(form: &BookingForm, focused: bool) -> Span<'static> {
    let label = match (form.state(), form.mode()) {
        (FormState::Submitting, _) => "Submitting...",
        (FormState::Done, _) => "Saved",
        (_, FormMode::Create) => "[ Book ]",
        (_, FormMode::Update { .. }) => "[ Update ]",
    };
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("{:LABEL_WIDTH$}{label}", ""), style)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
