//! Round-over screen: announces the outcome and asks to play again.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_shrugman::Outcome;
use tracing::{info, instrument};

use super::board::{ROUND_HEIGHT, draw_round};
use crate::Catalog;
use crate::lobby::round::Round;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for a finished round.
#[derive(Debug, Getters)]
pub struct RoundOverScreen {
    round: Round,
}

impl RoundOverScreen {
    /// Creates the screen for a round that reached a win or loss.
    #[instrument(skip(round), fields(status = %round.engine().status()))]
    pub fn new(round: Round) -> Self {
        Self { round }
    }

    /// Outcome of the round; a round shown here is always finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.engine().status().outcome()
    }

    fn announcement(&self) -> Vec<Line<'_>> {
        match self.outcome() {
            Some(Outcome::Win) => vec![Line::from(Span::styled(
                "Congratulations! You won! 🎉",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))],
            Some(Outcome::Loss) | None => vec![
                Line::from(Span::styled(
                    "Game Over! You lost.",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("The title was: ", Style::default().fg(Color::White)),
                    Span::styled(
                        self.round.engine().secret().title(),
                        Style::default()
                            .fg(Color::LightBlue)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
        }
    }
}

impl Screen for RoundOverScreen {
    #[instrument(skip(self, frame, _catalog))]
    fn render(&self, frame: &mut Frame, _catalog: &Catalog) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ROUND_HEIGHT),
                Constraint::Length(3),  // Announcement
                Constraint::Length(3),  // Play again
                Constraint::Min(0),
            ])
            .split(area);

        draw_round(frame, chunks[0], &self.round);
        frame.render_widget(Paragraph::new(self.announcement()), chunks[1]);

        let prompt = Paragraph::new("Do you want to play again? (y/n)")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(prompt, chunks[2]);
    }

    #[instrument(skip(self, key, _catalog))]
    fn handle_key(&mut self, key: KeyEvent, _catalog: &Catalog) -> ScreenTransition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                info!("Playing again");
                ScreenTransition::PlayAgain
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
