//! Drives the lobby controller through whole rounds with synthetic key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend};
use shrugman::{ActiveScreen, Catalog, LobbyController};
use strictly_shrugman::{Outcome, RoundStatus};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn guess(controller: &mut LobbyController, c: char) -> bool {
    controller.handle_key(press(KeyCode::Char(c))).expect("Key failed");
    controller.handle_key(press(KeyCode::Enter)).expect("Enter failed")
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn single_title_catalog(title: &str) -> Catalog {
    Catalog::from_toml_str(&format!(
        "[[categories]]\nname = \"Pets\"\ntitles = [\"{}\"]\n",
        title
    ))
    .expect("Catalog failed")
}

#[test]
fn test_win_then_play_again() {
    let mut controller =
        LobbyController::new(single_title_catalog("Cat"), None, StdRng::seed_from_u64(1))
            .expect("Controller failed");

    assert!(controller.handle_key(press(KeyCode::Enter)).expect("Enter failed"));
    for c in ['c', 'a', 't'] {
        assert!(guess(&mut controller, c));
    }

    match controller.screen() {
        ActiveScreen::RoundOver(s) => assert_eq!(s.outcome(), Some(Outcome::Win)),
        other => panic!("unexpected screen {:?}", other),
    }

    assert!(controller.handle_key(press(KeyCode::Char('y'))).expect("Key failed"));
    assert!(matches!(controller.screen(), ActiveScreen::CategorySelect(_)));
}

#[test]
fn test_loss_with_preselected_category() {
    let mut controller =
        LobbyController::new(single_title_catalog("ok"), Some(0), StdRng::seed_from_u64(1))
            .expect("Controller failed");

    for c in ['b', 'd', 'f', 'g', 'h', 'j', 'l', 'm'] {
        guess(&mut controller, c);
    }
    match controller.screen() {
        ActiveScreen::InGame(s) => {
            assert_eq!(s.round().engine().status(), RoundStatus::Ongoing);
            assert_eq!(s.round().engine().wrong_guesses(), 8);
        }
        other => panic!("unexpected screen {:?}", other),
    }

    guess(&mut controller, 'n');
    assert!(matches!(controller.screen(), ActiveScreen::RoundOver(_)));

    // A preselected category skips the menu on the next round.
    controller.handle_key(press(KeyCode::Char('Y'))).expect("Key failed");
    match controller.screen() {
        ActiveScreen::InGame(s) => {
            assert_eq!(s.round().category(), "Pets");
            assert!(s.round().engine().guessed().is_empty());
        }
        other => panic!("unexpected screen {:?}", other),
    }
}

#[test]
fn test_renders_each_screen() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("Terminal failed");
    let mut controller =
        LobbyController::new(single_title_catalog("The Matrix"), None, StdRng::seed_from_u64(1))
            .expect("Controller failed");

    terminal.draw(|f| controller.render(f)).expect("Draw failed");
    let text = screen_text(&terminal);
    assert!(text.contains("Welcome to Shrugman!"));
    assert!(text.contains("1. Pets"));

    controller.handle_key(press(KeyCode::Enter)).expect("Enter failed");
    guess(&mut controller, 't');
    controller.handle_key(press(KeyCode::Char('7'))).expect("Key failed");
    controller.handle_key(press(KeyCode::Enter)).expect("Enter failed");

    terminal.draw(|f| controller.render(f)).expect("Draw failed");
    let text = screen_text(&terminal);
    assert!(text.contains("Category: Pets"));
    assert!(text.contains("t _ _   _ _ t _ _ _"));
    assert!(text.contains("Guessed Letters: t"));
    assert!(text.contains("Wrong guesses left: 9"));
    assert!(text.contains("Invalid input. Please enter a single letter."));

    for c in ['b', 'c', 'd', 'f', 'g', 'j', 'k', 'l', 'n'] {
        guess(&mut controller, c);
    }
    terminal.draw(|f| controller.render(f)).expect("Draw failed");
    let text = screen_text(&terminal);
    assert!(text.contains("Game Over! You lost."));
    assert!(text.contains("The title was: The Matrix"));
    assert!(text.contains("Wrong guesses left: 0"));
}

#[test]
fn test_quit_from_game() {
    let mut controller =
        LobbyController::new(Catalog::builtin(), Some(0), StdRng::seed_from_u64(9))
            .expect("Controller failed");
    assert!(!controller.handle_key(press(KeyCode::Esc)).expect("Esc failed"));
}
