use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::calendar::{Cell, DAY_NAMES, MonthGrid};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, grid: &MonthGrid) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", grid.title()), theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![Line::from(
        DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:>4}", d), theme::dim()))
            .collect::<Vec<_>>(),
    )];

    for week in grid.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                Cell::Blank => Span::raw("    "),
                Cell::Day { number, has_event: true } => Span::styled(
                    format!("{:>3}*", number),
                    theme::amber().add_modifier(Modifier::BOLD),
                ),
                Cell::Day { number, has_event: false } => {
                    Span::styled(format!("{:>3} ", number), theme::bold())
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  * event day", theme::dim())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
