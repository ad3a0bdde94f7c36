//! Home menu

use busking_app::HomeItem;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const SELECTED_PREFIX: &str = "> ";
const UNSELECTED_PREFIX: &str = "  ";

/// Render the home menu with `selected` highlighted.
pub fn render(frame: &mut Frame, selected: usize, area: Rect) {
    let items: Vec<ListItem> = HomeItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (prefix, style) = if i == selected {
                (SELECTED_PREFIX, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                (UNSELECTED_PREFIX, Style::default())
            };
            ListItem::new(Line::from(vec![Span::raw(prefix), Span::styled(item.label(), style)]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Busking ");
    frame.render_widget(List::new(items).block(block), area);
}
