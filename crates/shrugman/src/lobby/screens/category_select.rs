//! Category selection screen: shown before every round unless a category was preselected.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::Catalog;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the category selection screen.
#[derive(Debug, Getters)]
pub struct CategorySelectScreen {
    list_state: ListState,
}

impl CategorySelectScreen {
    /// Creates the screen with the first category highlighted.
    #[instrument]
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    /// Index of the highlighted category.
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    #[instrument(skip(self))]
    fn select_previous(&mut self, count: usize) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count.saturating_sub(1),
        };
        self.list_state.select(Some(i));
    }

    #[instrument(skip(self))]
    fn select_next(&mut self, count: usize) {
        let i = match self.list_state.selected() {
            Some(i) if count > 0 => (i + 1) % count,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }
}

impl Default for CategorySelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CategorySelectScreen {
    #[instrument(skip(self, frame, catalog))]
    fn render(&self, frame: &mut Frame, catalog: &Catalog) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Welcome to Shrugman!")
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = catalog
            .names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| ListItem::new(format!("{}. {}", i + 1, name)))
            .collect();

        let menu = List::new(items)
            .style(Style::default().fg(Color::Green))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a category:"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | 1-9 or Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, catalog))]
    fn handle_key(&mut self, key: KeyEvent, catalog: &Catalog) -> ScreenTransition {
        let count = catalog.len();
        match key.code {
            KeyCode::Up => {
                self.select_previous(count);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next(count);
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let category = self.selected().min(count.saturating_sub(1));
                info!(category, "Category selected");
                ScreenTransition::StartRound { category }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let category = (c as usize) - ('1' as usize);
                if category < count {
                    info!(category, "Category selected by number");
                    ScreenTransition::StartRound { category }
                } else {
                    debug!(category, "No such category");
                    ScreenTransition::Stay
                }
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_starts_highlighted_category() {
        let catalog = Catalog::builtin();
        let mut screen = CategorySelectScreen::new();
        screen.handle_key(press(KeyCode::Down), &catalog);
        screen.handle_key(press(KeyCode::Down), &catalog);

        assert_eq!(
            screen.handle_key(press(KeyCode::Enter), &catalog),
            ScreenTransition::StartRound { category: 2 }
        );
    }

    #[test]
    fn test_up_wraps_to_last() {
        let catalog = Catalog::builtin();
        let mut screen = CategorySelectScreen::new();
        screen.handle_key(press(KeyCode::Up), &catalog);
        assert_eq!(screen.selected(), catalog.len() - 1);
    }

    #[test]
    fn test_digit_selects_directly() {
        let catalog = Catalog::builtin();
        let mut screen = CategorySelectScreen::new();
        assert_eq!(
            screen.handle_key(press(KeyCode::Char('5')), &catalog),
            ScreenTransition::StartRound { category: 4 }
        );
        assert_eq!(
            screen.handle_key(press(KeyCode::Char('9')), &catalog),
            ScreenTransition::Stay
        );
    }

    #[test]
    fn test_quit_keys() {
        let catalog = Catalog::builtin();
        let mut screen = CategorySelectScreen::new();
        assert_eq!(screen.handle_key(press(KeyCode::Esc), &catalog), ScreenTransition::Quit);
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &catalog),
            ScreenTransition::Quit
        );
    }
}
