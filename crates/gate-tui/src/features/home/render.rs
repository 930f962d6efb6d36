//! Home view rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled("Welcome back!", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw("You are logged in."),
    ];

    let y = area.y + area.height.saturating_sub(3) / 2;
    let body = Rect {
        x: area.x,
        y,
        width: area.width,
        height: 3.min(area.height),
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}
