use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::models::PrayerTiming;
use crate::tui::theme;

/// Static table of the masjid's posted timings, in stored order.
/// `selected` is Some only in the admin view.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    timings: &[PrayerTiming],
    selected: Option<usize>,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(" Prayer Timings ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme::teal()
        } else {
            ratatui::style::Style::default().fg(theme::BORDER)
        })
        .style(theme::surface());

    let items: Vec<ListItem> = timings
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let is_selected = selected == Some(i) && focused;
            let name_style = if is_selected {
                theme::teal().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let line = Line::from(vec![
                Span::styled(format!("  {:<10}", t.name.display_name()), name_style),
                Span::styled(t.time.clone(), theme::dim()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
