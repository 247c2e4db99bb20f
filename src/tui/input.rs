use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use passmint::CharacterClass;

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LengthUp,
    LengthDown,
    Digit(char),
    Backspace,
    ClearLength,
    Toggle(CharacterClass),
    ToggleShow,
    Generate,
    Copy,
    Help,
    Quit,
}

/// Map a key event to an action. Releases and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearLength),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('+') => Action::LengthUp,
        KeyCode::Down | KeyCode::Char('-') => Action::LengthDown,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(c),
        KeyCode::Backspace | KeyCode::Delete => Action::Backspace,
        KeyCode::Char('u') => Action::Toggle(CharacterClass::Capital),
        KeyCode::Char('l') => Action::Toggle(CharacterClass::Lowercase),
        KeyCode::Char('n') => Action::Toggle(CharacterClass::Number),
        KeyCode::Char('s') => Action::Toggle(CharacterClass::Special),
        KeyCode::Char('v') => Action::ToggleShow,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Enter => Action::Generate,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_step_length() {
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::LengthUp));
        assert_eq!(action_for(press(KeyCode::Char('-'))), Some(Action::LengthDown));
    }

    #[test]
    fn letters_toggle_classes() {
        assert_eq!(
            action_for(press(KeyCode::Char('u'))),
            Some(Action::Toggle(CharacterClass::Capital))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('s'))),
            Some(Action::Toggle(CharacterClass::Special))
        );
    }

    #[test]
    fn control_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_u), Some(Action::ClearLength));
        assert_eq!(action_for(press(KeyCode::Char('c'))), Some(Action::Copy));
    }

    #[test]
    fn digits_edit_length() {
        assert_eq!(action_for(press(KeyCode::Char('7'))), Some(Action::Digit('7')));
        assert_eq!(action_for(press(KeyCode::Tab)), None);
    }
}
