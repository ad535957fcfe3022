use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::TaskStatus;

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);
pub const FG_FOCUS: Color = Color::Rgb(255, 214, 102);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Cyan,
        TaskStatus::Done => Color::Green,
    }
}

/// Style for a pressable element: focus wins over selection.
pub fn button_style(focused: bool, selected: bool) -> Style {
    if focused {
        Style::default()
            .fg(BG_BASE)
            .bg(FG_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default()
            .fg(Color::White)
            .bg(FG_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(BG_ACCENT)
    }
}

pub fn button(label: &str, focused: bool, selected: bool) -> Span<'static> {
    Span::styled(format!(" {} ", label), button_style(focused, selected))
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}
