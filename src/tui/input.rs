use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map key events to widget actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Process a key event
    pub fn handle_key(&self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Tab => InputAction::NextVariant,
            KeyCode::BackTab => InputAction::PrevVariant,
            KeyCode::Char(c) => InputAction::Insert(c),
            KeyCode::Backspace => InputAction::Delete,
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Quit,
    Insert(char),
    Delete,
    NextVariant,
    PrevVariant,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let handler = InputHandler::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(handler.handle_key(key(KeyCode::Enter)), InputAction::Submit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('a'))), InputAction::Insert('a'));
        assert_eq!(handler.handle_key(key(KeyCode::Backspace)), InputAction::Delete);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), InputAction::NextVariant);
        assert_eq!(handler.handle_key(key(KeyCode::BackTab)), InputAction::PrevVariant);
        assert_eq!(handler.handle_key(key(KeyCode::F(1))), InputAction::None);
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }
}
