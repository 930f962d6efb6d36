//! Login form view.
//!
//! Pure rendering: reads state, draws to the frame, never mutates.

use gate_core::form::Validity;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{FieldInput, FocusedField, LoginFormState};

/// Width of the login card.
const CARD_WIDTH: u16 = 44;

/// Height of the login card: title + two bordered fields + submit row.
const CARD_HEIGHT: u16 = 10;

/// Mask character for the password field.
const MASK: char = '\u{2022}';

pub fn render(form: &LoginFormState, frame: &mut Frame, area: Rect) {
    let card = centered_card(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Email field
            Constraint::Length(3), // Password field
            Constraint::Length(2), // Submit row
        ])
        .split(card);

    let title = Paragraph::new("Sign in")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    render_field(
        frame,
        chunks[1],
        "E-Mail",
        form.email.value().to_string(),
        &form.email,
        form.focus == FocusedField::Email,
    );

    let masked: String = form.password.value().chars().map(|_| MASK).collect();
    render_field(
        frame,
        chunks[2],
        "Password",
        masked,
        &form.password,
        form.focus == FocusedField::Password,
    );

    render_submit(frame, chunks[3], form.form_valid);
}

/// Renders one bordered input row.
///
/// The invalid marker tracks an explicitly failed check only: an unchecked
/// (`Unknown`) field renders like a normal one.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: String,
    input: &FieldInput,
    focused: bool,
) {
    let invalid = input.validity() == Validity::Invalid;

    let border_style = if invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if invalid {
        format!(" {label} (invalid) ")
    } else {
        format!(" {label} ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    if focused {
        // Place the terminal cursor inside the field at the edit position.
        let prefix: String = display.chars().take(input.cursor()).collect();
        let x = (area.x + 1 + prefix.width() as u16).min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }

    frame.render_widget(Paragraph::new(display).block(block), area);
}

/// Renders the submit row, dimmed while the published form validity is
/// false.
fn render_submit(frame: &mut Frame, area: Rect, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let submit = Paragraph::new("[ Log in ]")
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(submit, area);
}

/// Centers the login card in the available area, shrinking on small
/// terminals.
fn centered_card(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
