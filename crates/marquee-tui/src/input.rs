use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marquee_core::pagination::Direction;

use crate::app::{App, Focus};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    NextCard,
    PrevCard,
    NextSlide,
    PrevSlide,
    JumpToSlide(usize),
    /// Arrow key on the focused panel
    Arrow(Direction),
    ToggleFocus,
    ScrollDown,
    ScrollUp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if let Some(action) = keymap.get(&KeyBinding::new(key.code, key.modifiers)) {
        return action;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Left, KeyModifiers::NONE) => arrow(app, Direction::Backward),
        (KeyCode::Right, KeyModifiers::NONE) => arrow(app, Direction::Forward),
        // Indicator shortcuts: 1-9 select a slide
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToSlide(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

fn arrow(app: &App, direction: Direction) -> Action {
    match app.focus {
        Focus::Jumbotron => Action::Arrow(direction),
        Focus::Carousel => match direction {
            Direction::Forward => Action::NextPage,
            Direction::Backward => Action::PrevPage,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use marquee_core::AppConfig;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_follow_focus() {
        let keymap = Keymap::default();
        let mut app = App::new(Arc::new(AppConfig::default()), 80, 24);

        assert_eq!(
            handle_key_event(press(KeyCode::Right), &app, &keymap),
            Action::NextPage
        );

        app.focus = Focus::Jumbotron;
        assert_eq!(
            handle_key_event(press(KeyCode::Left), &app, &keymap),
            Action::Arrow(Direction::Backward)
        );
    }

    #[test]
    fn test_digits_jump_to_slides() {
        let keymap = Keymap::default();
        let app = App::new(Arc::new(AppConfig::default()), 80, 24);

        assert_eq!(
            handle_key_event(press(KeyCode::Char('1')), &app, &keymap),
            Action::JumpToSlide(0)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('9')), &app, &keymap),
            Action::JumpToSlide(8)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('0')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_keymap_takes_precedence() {
        let keymap = Keymap::default();
        let app = App::new(Arc::new(AppConfig::default()), 80, 24);

        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
    }
}
