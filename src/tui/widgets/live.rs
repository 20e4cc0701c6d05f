use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::live::FETCH_FAILED_MESSAGE;
use crate::tui::app::LiveState;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &LiveState, city: &str, country: &str) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Live Adhan — {}, {} ", city, country),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let lines = match state {
        LiveState::Loading => vec![
            Line::from(""),
            Line::from(Span::styled("  Fetching live timings…", theme::dim())),
        ],
        LiveState::Failed => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", FETCH_FAILED_MESSAGE), theme::red())),
        ],
        LiveState::Ready(live) => {
            let row = |label: &str, value: &str| {
                Line::from(vec![
                    Span::styled(format!("  {:<9}", label), theme::dim()),
                    Span::styled(value.to_string(), theme::bold()),
                ])
            };
            vec![
                row("Date", &live.date),
                row("Fajr", &live.fajr),
                row("Dhuhr", &live.dhuhr),
                row("Asr", &live.asr),
                row("Maghrib", &live.maghrib),
                row("Isha", &live.isha),
            ]
        }
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
