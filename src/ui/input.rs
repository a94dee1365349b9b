use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::quiz::{Phase, QuizIntent};
use crate::ui::app::App;

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Run this intent through the session reducer.
    Intent(QuizIntent),
    /// Share the quiz link (needs clipboard/share resources).
    Share,
    /// Open the sales page in the browser.
    Unlock,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    // Restart works from any phase, even mid-flight; an outstanding
    // provider call keeps running and its completion is ignored.
    if matches!(key.code, KeyCode::Char('r')) {
        return InputAction::Intent(QuizIntent::Restart);
    }

    match app.session().phase {
        Phase::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => InputAction::Intent(QuizIntent::Start),
            KeyCode::Char('c') => InputAction::Share,
            _ => InputAction::None,
        },
        // Both waiting phases ignore everything but the global keys;
        // provider calls cannot be cancelled once issued.
        Phase::Loading | Phase::Analyzing => InputAction::None,
        Phase::Quiz => match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
                let index = (ch as usize) - ('1' as usize);
                InputAction::Intent(QuizIntent::SelectOption(index))
            }
            KeyCode::Enter | KeyCode::Char('n') => InputAction::Intent(QuizIntent::Advance),
            _ => InputAction::None,
        },
        Phase::Results => match key.code {
            KeyCode::Char('u') => InputAction::Unlock,
            KeyCode::Char('c') => InputAction::Share,
            _ => InputAction::None,
        },
        Phase::Error => match key.code {
            KeyCode::Enter => InputAction::Intent(QuizIntent::Restart),
            _ => InputAction::None,
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
