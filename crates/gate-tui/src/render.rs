//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{AppState, Screen};
use crate::{home, login};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Routed screen
            Constraint::Length(STATUS_HEIGHT), // Status line
        ])
        .split(area);

    match app.screen {
        Screen::Login => login::render(&app.form, frame, chunks[0]),
        Screen::Home => home::render(frame, chunks[0]),
    }

    render_status_line(app, frame, chunks[1]);
}

/// Renders the status line below the routed screen.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hint = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = match app.screen {
        Screen::Login => {
            let mut spans = vec![
                Span::styled("Tab", hint),
                Span::raw(" switch field  "),
                Span::styled("Enter", hint),
                Span::raw(" submit  "),
                Span::styled("Esc", hint),
                Span::raw(" quit"),
            ];
            if app.form.debounce.is_armed() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    "checking...",
                    Style::default().fg(Color::Yellow),
                ));
            } else if app.form.form_valid {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("ready", Style::default().fg(Color::Green)));
            }
            spans
        }
        Screen::Home => vec![
            Span::styled("l", hint),
            Span::raw(" log out  "),
            Span::styled("q", hint),
            Span::raw(" quit"),
        ],
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}
