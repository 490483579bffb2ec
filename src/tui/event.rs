use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::timer::Input;

/// Map key events to timer inputs
pub fn handle_key(key: KeyEvent) -> Option<Input> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Ctrl+R and friends are not bindings
    if key.modifiers != KeyModifiers::NONE {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') => Some(Input::Toggle),
        KeyCode::Char('r') => Some(Input::Reset),
        KeyCode::Char('f') => Some(Input::ToggleFullscreen),
        KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn should_bind_space_r_f_and_escape() {
        assert_eq!(handle_key(press(KeyCode::Char(' '))), Some(Input::Toggle));
        assert_eq!(handle_key(press(KeyCode::Char('r'))), Some(Input::Reset));
        assert_eq!(
            handle_key(press(KeyCode::Char('f'))),
            Some(Input::ToggleFullscreen)
        );
        assert_eq!(handle_key(press(KeyCode::Esc)), Some(Input::Quit));
    }

    #[test]
    fn should_ignore_unbound_keys() {
        assert_eq!(handle_key(press(KeyCode::Char('q'))), None);
        assert_eq!(handle_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn should_ignore_keys_with_modifiers() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        let alt_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT);

        assert_eq!(handle_key(ctrl_r), None);
        assert_eq!(handle_key(alt_f), None);
    }

    #[test]
    fn should_ignore_key_release() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(handle_key(release), None);
    }
}
