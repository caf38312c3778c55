use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use prioritizer_core::{InputEdit, Msg};

/// Shown in the footer.
pub const KEY_HELP: &str = "Ctrl+S/F5 analyze | Ctrl+L clear | PgUp/PgDn scroll | Esc quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    ScrollUp,
    ScrollDown,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('s') if ctrl => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::F(5) => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Char('l') if ctrl => KeyAction::Dispatch(Msg::InputEdited(InputEdit::Clear)),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => KeyAction::Ignore,
        KeyCode::Char(ch) => KeyAction::Dispatch(Msg::InputEdited(InputEdit::Insert(ch))),
        KeyCode::Enter => KeyAction::Dispatch(Msg::InputEdited(InputEdit::Insert('\n'))),
        KeyCode::Backspace => KeyAction::Dispatch(Msg::InputEdited(InputEdit::Backspace)),
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::Ignore,
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
pub fn paste_msg(text: &str) -> Msg {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    Msg::InputEdited(InputEdit::Paste(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_edits_the_input() {
        assert_eq!(
            map_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            KeyAction::Dispatch(Msg::InputEdited(InputEdit::Insert('a')))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyAction::Dispatch(Msg::InputEdited(InputEdit::Insert('A')))
        );
        assert_eq!(
            map_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            KeyAction::Dispatch(Msg::InputEdited(InputEdit::Insert('\n')))
        );
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(
            map_key(press(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            KeyAction::Dispatch(Msg::SubmitClicked)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            KeyAction::Dispatch(Msg::InputEdited(InputEdit::Clear))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyAction::Ignore
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), KeyAction::Ignore);
    }

    #[test]
    fn paste_normalizes_line_breaks() {
        assert_eq!(
            paste_msg("a\r\nb\rc"),
            Msg::InputEdited(InputEdit::Paste("a\nb\nc".into()))
        );
    }
}
