//! Event Handling - Keyboard input processing
//!
//! The key table is the whole of the input dispatcher: a closed set of
//! single-character commands. Anything unbound is a no-op here and never
//! reaches the topic state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::topic::Topic;

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchTopic(Topic),
    None,
}

/// Handle keyboard events
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.modifiers, key.code) {
        // Quit: shift+Q or Ctrl+C. Lowercase letters are topic keys.
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Char('Q')) => Action::Quit,

        // Topic selection: the lowercase letter keys
        (KeyModifiers::NONE, KeyCode::Char(c)) => match Topic::from_key(c) {
            Some(topic) => Action::SwitchTopic(topic),
            None => Action::None,
        },

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(press('Q', KeyModifiers::SHIFT)), Action::Quit);
        assert_eq!(
            handle_key_event(press('c', KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_topic_keys() {
        assert_eq!(
            handle_key_event(press('i', KeyModifiers::NONE)),
            Action::SwitchTopic(Topic::Instances)
        );
        assert_eq!(
            handle_key_event(press('r', KeyModifiers::NONE)),
            Action::SwitchTopic(Topic::DefinedExchangeRates)
        );
    }

    #[test]
    fn test_every_topic_is_reachable_by_key() {
        for topic in Topic::ALL {
            assert_eq!(
                handle_key_event(press(topic.key(), KeyModifiers::NONE)),
                Action::SwitchTopic(topic)
            );
        }
    }

    #[test]
    fn test_unbound_keys_are_noops() {
        assert_eq!(handle_key_event(press('z', KeyModifiers::NONE)), Action::None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Action::None
        );
    }
}
