//! In-game screen: the player types letters until the round is decided.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_shrugman::GuessStatus;
use tracing::{debug, info, instrument};

use super::board::{ROUND_HEIGHT, draw_round};
use crate::Catalog;
use crate::lobby::round::Round;
use crate::lobby::screen::{Screen, ScreenTransition};

/// Longest text the prompt accepts before ignoring keystrokes.
const MAX_INPUT: usize = 16;

/// Feedback shown under the board after a rejected guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notice {
    /// Nothing to report.
    #[default]
    None,
    /// The submitted text was not a single letter.
    InvalidInput,
    /// The letter had been guessed before.
    AlreadyGuessed,
}

impl Notice {
    /// Text shown for the notice.
    pub fn text(self) -> &'static str {
        match self {
            Self::None => "",
            Self::InvalidInput => "Invalid input. Please enter a single letter.",
            Self::AlreadyGuessed => "You already guessed that letter.",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::None => Style::default(),
            Self::InvalidInput => Style::default().fg(Color::Red),
            Self::AlreadyGuessed => Style::default().fg(Color::Yellow),
        }
    }
}

/// State for a round in progress.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    round: Round,
    input: String,
    notice: Notice,
}

impl InGameScreen {
    /// Creates the screen for a freshly started round.
    #[instrument(skip(round), fields(category = %round.category()))]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            input: String::new(),
            notice: Notice::None,
        }
    }

    /// Submits the typed text as a guess and clears the prompt.
    #[instrument(skip(self), fields(input = %self.input))]
    fn submit(&mut self) -> ScreenTransition {
        let input = std::mem::take(&mut self.input);
        let status = self.round.engine_mut().guess(&input);
        info!(
            %status,
            wrong = self.round.engine().wrong_guesses(),
            remaining = self.round.engine().remaining_guesses(),
            "Guess submitted"
        );

        match status {
            GuessStatus::InvalidInput => {
                self.notice = Notice::InvalidInput;
                ScreenTransition::Stay
            }
            GuessStatus::AlreadyGuessed => {
                self.notice = Notice::AlreadyGuessed;
                ScreenTransition::Stay
            }
            GuessStatus::Ongoing => {
                self.notice = Notice::None;
                ScreenTransition::Stay
            }
            GuessStatus::Win | GuessStatus::Loss | GuessStatus::RoundAlreadyOver => {
                self.notice = Notice::None;
                ScreenTransition::RoundFinished
            }
        }
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame, _catalog))]
    fn render(&self, frame: &mut Frame, _catalog: &Catalog) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ROUND_HEIGHT),
                Constraint::Length(1),  // Notice
                Constraint::Length(3),  // Prompt
                Constraint::Min(0),
                Constraint::Length(1),  // Help
            ])
            .split(area);

        draw_round(frame, chunks[0], &self.round);

        let notice = Paragraph::new(self.notice.text()).style(self.notice.style());
        frame.render_widget(notice, chunks[1]);

        let prompt = Paragraph::new(Line::from(vec![
            Span::raw("Guess a letter: "),
            Span::styled(self.input.as_str(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(prompt, chunks[2]);

        let help = Paragraph::new("Type a letter + Enter: Guess | Backspace: Edit | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, _catalog))]
    fn handle_key(&mut self, key: KeyEvent, _catalog: &Catalog) -> ScreenTransition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < MAX_INPUT {
                    self.input.push(c);
                } else {
                    debug!("Prompt full, keystroke ignored");
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_shrugman::GuessEngine;

    fn screen(title: &str) -> InGameScreen {
        InGameScreen::new(Round::new("Movies", GuessEngine::new(title).unwrap()))
    }

    fn type_and_submit(screen: &mut InGameScreen, text: &str, catalog: &Catalog) -> ScreenTransition {
        for c in text.chars() {
            screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), catalog);
        }
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), catalog)
    }

    #[test]
    fn test_invalid_input_sets_notice() {
        let catalog = Catalog::builtin();
        let mut screen = screen("cat");

        assert_eq!(type_and_submit(&mut screen, "ab", &catalog), ScreenTransition::Stay);
        assert_eq!(*screen.notice(), Notice::InvalidInput);
        assert!(screen.input().is_empty());
        assert!(screen.round().engine().guessed().is_empty());
    }

    #[test]
    fn test_repeat_sets_notice_then_clears() {
        let catalog = Catalog::builtin();
        let mut screen = screen("cat");

        type_and_submit(&mut screen, "c", &catalog);
        type_and_submit(&mut screen, "C", &catalog);
        assert_eq!(*screen.notice(), Notice::AlreadyGuessed);

        type_and_submit(&mut screen, "a", &catalog);
        assert_eq!(*screen.notice(), Notice::None);
    }

    #[test]
    fn test_win_finishes_round() {
        let catalog = Catalog::builtin();
        let mut screen = screen("ok");

        type_and_submit(&mut screen, "o", &catalog);
        assert_eq!(
            type_and_submit(&mut screen, "k", &catalog),
            ScreenTransition::RoundFinished
        );
    }

    #[test]
    fn test_backspace_edits_prompt() {
        let catalog = Catalog::builtin();
        let mut screen = screen("cat");

        screen.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &catalog);
        screen.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE), &catalog);
        assert_eq!(type_and_submit(&mut screen, "t", &catalog), ScreenTransition::Stay);
        assert_eq!(screen.round().engine().mask().to_string(), "__t");
        assert_eq!(screen.round().engine().wrong_guesses(), 0);
    }

    #[test]
    fn test_prompt_is_bounded() {
        let catalog = Catalog::builtin();
        let mut screen = screen("cat");
        for _ in 0..(MAX_INPUT + 5) {
            screen.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE), &catalog);
        }
        assert_eq!(screen.input().chars().count(), MAX_INPUT);
    }
}
