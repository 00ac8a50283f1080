//! Lobby controller: state machine driving the multi-screen TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend};
use rand::rngs::StdRng;
use tracing::{debug, error, info, instrument};

use crate::Catalog;
use crate::lobby::round::Round;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{CategorySelectScreen, InGameScreen, RoundOverScreen};

/// Active screen in the lobby state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Choosing a category.
    CategorySelect(CategorySelectScreen),
    /// Guessing letters.
    InGame(InGameScreen),
    /// Showing the result of the last round.
    RoundOver(RoundOverScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::CategorySelect(s) => s,
            Self::InGame(s) => s,
            Self::RoundOver(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::CategorySelect(s) => s,
            Self::InGame(s) => s,
            Self::RoundOver(s) => s,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct LobbyController {
    catalog: Catalog,
    /// Category played every round, skipping the selection screen.
    preselected: Option<usize>,
    #[getter(skip)]
    rng: StdRng,
    screen: ActiveScreen,
}

impl LobbyController {
    /// Creates a controller. With a preselected category the first round
    /// starts immediately.
    #[instrument(skip(catalog, rng))]
    pub fn new(
        catalog: Catalog,
        preselected: Option<usize>,
        mut rng: StdRng,
    ) -> anyhow::Result<Self> {
        info!(categories = catalog.len(), "Creating LobbyController");
        let screen = Self::first_screen(&catalog, preselected, &mut rng)?;
        Ok(Self {
            catalog,
            preselected,
            rng,
            screen,
        })
    }

    fn first_screen(
        catalog: &Catalog,
        preselected: Option<usize>,
        rng: &mut StdRng,
    ) -> anyhow::Result<ActiveScreen> {
        Ok(match preselected {
            Some(index) => {
                ActiveScreen::InGame(InGameScreen::new(Round::start(catalog, index, rng)?))
            }
            None => ActiveScreen::CategorySelect(CategorySelectScreen::new()),
        })
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.as_screen().render(frame, &self.catalog);
    }

    /// Feeds one key press to the active screen and applies the resulting
    /// transition. Returns `false` once the player quits.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let transition = self.screen.as_screen_mut().handle_key(key, &self.catalog);
        self.apply_transition(transition)
    }

    /// Applies a screen transition. Returns `false` to quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> anyhow::Result<bool> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::StartRound { category } => {
                let round = Round::start(&self.catalog, category, &mut self.rng)?;
                info!(category = %round.category(), "Navigating to InGame");
                self.screen = ActiveScreen::InGame(InGameScreen::new(round));
            }

            ScreenTransition::RoundFinished => {
                if let ActiveScreen::InGame(s) = &self.screen {
                    let round = s.round().clone();
                    info!(status = %round.engine().status(), "Navigating to RoundOver");
                    self.screen = ActiveScreen::RoundOver(RoundOverScreen::new(round));
                } else {
                    error!("RoundFinished outside a round");
                }
            }

            ScreenTransition::PlayAgain => {
                info!(preselected = ?self.preselected, "Starting another round");
                self.screen = Self::first_screen(&self.catalog, self.preselected, &mut self.rng)?;
            }

            ScreenTransition::Quit => {
                info!("Lobby quitting");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm fires both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if !self.handle_key(key)? {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::SeedableRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn controller(preselected: Option<usize>) -> LobbyController {
        LobbyController::new(Catalog::builtin(), preselected, StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_starts_on_category_select() {
        let c = controller(None);
        assert!(matches!(c.screen(), ActiveScreen::CategorySelect(_)));
    }

    #[test]
    fn test_preselected_skips_selection() {
        let c = controller(Some(3));
        match c.screen() {
            ActiveScreen::InGame(s) => assert_eq!(s.round().category(), "TV Shows"),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_enter_starts_round() {
        let mut c = controller(None);
        assert!(c.handle_key(press(KeyCode::Enter)).unwrap());
        match c.screen() {
            ActiveScreen::InGame(s) => assert_eq!(s.round().category(), "Movies"),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_quit_returns_false() {
        let mut c = controller(None);
        assert!(!c.handle_key(press(KeyCode::Char('q'))).unwrap());
    }
}
