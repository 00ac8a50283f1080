//! Stateless rendering of a round, shared by the in-game and round-over screens.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::lobby::round::Round;
use crate::shrug;

const RULES: [&str; 4] = [
    "1. You will be given a title from a selected category with letters masked by underscores (_).",
    "2. Your task is to guess the letters in the title.",
    "3. Each incorrect guess will bring you one step closer to losing the game.",
    "4. You can guess one letter at a time.",
];

/// Rows needed by [`draw_round`].
pub const ROUND_HEIGHT: u16 = 17;

/// Draws the welcome banner, rules, category, masked title, guessed letters,
/// shrug figure and the wrong guesses left.
pub fn draw_round(frame: &mut Frame, area: Rect, round: &Round) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Intro and rules
            Constraint::Length(2),  // Category
            Constraint::Length(3),  // Masked title
            Constraint::Length(2),  // Guessed letters
            Constraint::Length(3),  // Shrug
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(intro(), chunks[0]);

    let category = Paragraph::new(format!("Category: {}", round.category())).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(category, chunks[1]);

    let snapshot = round.engine().snapshot();

    let mask = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            snapshot.spaced_mask().clone(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(mask, chunks[2]);

    let guessed = Paragraph::new(format!("Guessed Letters: {}", snapshot.guessed_display()));
    frame.render_widget(guessed, chunks[3]);

    let figure = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            shrug::stage(*snapshot.wrong_guesses()),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Wrong guesses left: {}", round.engine().remaining_guesses()),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(figure, chunks[4]);
}

fn intro() -> Paragraph<'static> {
    let gray = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to Shrugman!",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Rules of the Game:", gray)),
    ];
    lines.extend(RULES.iter().map(|rule| Line::from(Span::styled(*rule, gray))));
    lines.push(Line::from(Span::styled(
        "============================================",
        gray,
    )));
    Paragraph::new(lines)
}
