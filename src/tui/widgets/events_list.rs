use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::models::Event;
use crate::tui::theme;
use crate::utils::format::event_list_lines;

/// Date-sorted event list. Public view passes `selected = None`; the
/// admin view highlights the row the delete key would act on.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    events: &[Event],
    selected: Option<usize>,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Events ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme::teal()
        } else {
            ratatui::style::Style::default().fg(theme::BORDER)
        })
        .style(theme::surface());

    let items: Vec<ListItem> = event_list_lines(events)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if events.is_empty() {
                theme::dim()
            } else if selected == Some(i) && focused {
                theme::teal().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            ListItem::new(Line::from(Span::styled(format!("  {}", text), style)))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
