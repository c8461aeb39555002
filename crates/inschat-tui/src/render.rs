//! Pure view/render functions for the auth screen.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::{AppState, Field, Screen, SubmissionOutcome};

/// Spinner frames for the in-flight submit indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Width of the centered form card.
const CARD_WIDTH: u16 = 46;

/// Renders the entire screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.screen {
        Screen::Auth => render_auth_card(app, frame, area),
        Screen::Home { username } => render_home_card(frame, area, username),
    }
}

fn render_auth_card(app: &AppState, frame: &mut Frame, area: Rect) {
    let card = centered_rect(area, CARD_WIDTH, 14);
    render_card_container(frame, card, "InsChat");
    let inner = inner_rect(card);

    let mut lines = vec![
        Line::from(Span::styled(
            app.mode.heading(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Username", Style::default().fg(Color::DarkGray))),
        input_line(
            &app.form.username,
            false,
            app.form.focus == Field::Username,
        ),
        Line::from(""),
        Line::from(Span::styled("Password", Style::default().fg(Color::DarkGray))),
        input_line(
            &app.form.password,
            true,
            app.form.focus == Field::Password,
        ),
        Line::from(""),
    ];
    lines.push(status_line(app));
    lines.push(Line::from(""));
    lines.push(hints_line(&[
        ("Enter", "submit"),
        ("Tab", "field"),
        ("^T", app.mode.toggled().heading()),
        ("Esc", "quit"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_home_card(frame: &mut Frame, area: Rect, username: &str) {
    let card = centered_rect(area, CARD_WIDTH, 8);
    render_card_container(frame, card, "InsChat");
    let inner = inner_rect(card);

    let who = if username.is_empty() {
        "Logged in.".to_string()
    } else {
        format!("Logged in as {username}.")
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(who, Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(""),
        hints_line(&[("o", "open /home in browser"), ("Esc", "quit")]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One form input rendered as "> value█". Password values are masked.
fn input_line(value: &str, masked: bool, focused: bool) -> Line<'static> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let prompt_color = if focused { Color::Magenta } else { Color::DarkGray };
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(prompt_color)),
        Span::styled(shown, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Magenta)));
    }
    Line::from(spans)
}

/// Error (red), success (green), or in-flight spinner (yellow).
fn status_line(app: &AppState) -> Line<'static> {
    if app.tasks.submit.is_running() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        return Line::from(Span::styled(
            format!("{spinner} Submitting..."),
            Style::default().fg(Color::Yellow),
        ));
    }
    match &app.outcome {
        SubmissionOutcome::None => Line::from(""),
        SubmissionOutcome::Error(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        SubmissionOutcome::Success(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )),
    }
}

fn hints_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// Clears the card area and draws its border and title.
fn render_card_container(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

fn inner_rect(card: Rect) -> Rect {
    Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    )
}

/// Returns a rect of the given size centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
