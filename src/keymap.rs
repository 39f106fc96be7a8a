use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    List,
    Form,
    Detail,
    ColorPicker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    OpenForm,
    OpenDetail,
    OpenColorPicker,
    Delete,
    ToggleFocus,
    /// Confirm the open form or overlay.
    Submit,
    /// Leave the open form or overlay the way clicking outside it would.
    Close,
    /// Leave without applying anything.
    Discard,
    /// Forward the key to the focused text input.
    Type,
}

/// Maps a key press on `screen` to what it means there.
pub fn action_for(screen: Screen, key: KeyEvent) -> Option<Action> {
    match screen {
        Screen::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Next),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Previous),
            KeyCode::Char('a') | KeyCode::Char('n') => Some(Action::OpenForm),
            KeyCode::Enter | KeyCode::Char('e') => Some(Action::OpenDetail),
            KeyCode::Char('c') => Some(Action::OpenColorPicker),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::Delete),
            _ => None,
        },
        Screen::Form | Screen::Detail => match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(Action::Submit),
            (KeyModifiers::CONTROL, KeyCode::Char('x')) => Some(Action::Discard),
            (_, KeyCode::Tab) => Some(Action::ToggleFocus),
            (_, KeyCode::Esc) => Some(Action::Close),
            _ => Some(Action::Type),
        },
        Screen::ColorPicker => match key.code {
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
                Some(Action::Next)
            }
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
                Some(Action::Previous)
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Discard),
            _ => None,
        },
    }
}
