//! Bus and booking lists
//!
//! Both lists show a placeholder while loading, after a failed fetch and
//! when empty.

use busking_app::ListView;
use busking_core::{Booking, Bus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const SELECTED_PREFIX: &str = "> ";
const LOADING: &str = "Loading...";

/// Render the bus list.
pub fn render_buses(frame: &mut Frame, list: &ListView<Bus>, area: Rect) {
    render_list(frame, list, area, "Buses", "No buses", |bus| {
        vec![Span::raw(bus.name.clone()), Span::styled(format!("  (id {})", bus.id), dim())]
    });
}

/// Render the booking list.
pub fn render_bookings(frame: &mut Frame, list: &ListView<Booking>, area: Rect) {
    render_list(frame, list, area, "Bookings", "No bookings (press n to add one)", |booking| {
        let bus =
            booking.bus.as_ref().map_or_else(|| "no bus".to_string(), |bus| format!("bus {bus}"));
        vec![
            Span::raw(booking.name.clone()),
            Span::styled(format!("  {}  {} seat(s)  {bus}", booking.email, booking.seats), dim()),
        ]
    });
}

fn render_list<T>(
    frame: &mut Frame,
    list: &ListView<T>,
    area: Rect,
    title: &str,
    empty: &str,
    row: impl Fn(&T) -> Vec<Span<'static>>,
) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));

    let placeholder = if list.is_loading() {
        Some(LOADING.to_string())
    } else if list.is_failed() {
        Some(format!("Could not load {}", title.to_lowercase()))
    } else if list.items().is_empty() {
        Some(empty.to_string())
    } else {
        None
    };
    if let Some(text) = placeholder {
        frame.render_widget(Paragraph::new(text).style(dim()).block(block), area);
        return;
    }

    let items: Vec<ListItem> =
        list.items().iter().map(|item| ListItem::new(Line::from(row(item)))).collect();
    let widget = List::new(items)
        .block(block)
        .highlight_symbol(SELECTED_PREFIX)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    // The state offset keeps the selected row inside the visible area.
    let mut state = ListState::default().with_selected(Some(list.selected()));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
