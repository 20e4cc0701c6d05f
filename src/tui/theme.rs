use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 18, 17);
pub const SURFACE: Color = Color::Rgb(20, 27, 25);
pub const BORDER: Color = Color::Rgb(42, 58, 54);
pub const TEXT: Color = Color::Rgb(212, 224, 220);
pub const TEXT_DIM: Color = Color::Rgb(108, 128, 122);
pub const TEAL: Color = Color::Rgb(64, 160, 148);
pub const GREEN: Color = Color::Rgb(96, 156, 96);
pub const AMBER: Color = Color::Rgb(208, 150, 62);
pub const RED: Color = Color::Rgb(184, 84, 66);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
