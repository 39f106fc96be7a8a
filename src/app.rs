use crossterm::event::{Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    error::StoreResult,
    keymap::{Action, Screen, action_for},
    models::{PALETTE, palette_index},
    store::NoteStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusedInput {
    Title,
    Text,
}

/// Title and text inputs shared by the new-note form and the detail overlay.
pub struct NoteForm {
    pub title: Input,
    pub text: Input,
    pub focused: FocusedInput,
}

impl Default for NoteForm {
    fn default() -> Self {
        NoteForm {
            title: Input::default(),
            text: Input::default(),
            focused: FocusedInput::Title,
        }
    }
}

impl NoteForm {
    fn filled(title: &str, text: &str) -> NoteForm {
        NoteForm {
            title: Input::new(title.to_string()),
            text: Input::new(text.to_string()),
            focused: FocusedInput::Title,
        }
    }

    fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            FocusedInput::Title => FocusedInput::Text,
            FocusedInput::Text => FocusedInput::Title,
        };
    }

    fn handle_event(&mut self, event: &Event) {
        match self.focused {
            FocusedInput::Title => self.title.handle_event(event),
            FocusedInput::Text => self.text.handle_event(event),
        };
    }
}

pub struct App {
    pub store: NoteStore,
    pub screen: Screen,
    /// Index of the highlighted card.
    pub selected: usize,
    pub form: NoteForm,
    /// Note the detail overlay or color picker applies to.
    pub target: Option<i64>,
    pub palette_cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(store: NoteStore) -> App {
        App {
            store,
            screen: Screen::List,
            selected: 0,
            form: NoteForm::default(),
            target: None,
            palette_cursor: 0,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;
            let event = crossterm::event::read()?;
            self.handle_event(&event)?;
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event) -> StoreResult<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match action_for(self.screen, *key) {
            Some(action) => self.apply(action, event),
            None => Ok(()),
        }
    }

    fn apply(&mut self, action: Action, event: &Event) -> StoreResult<()> {
        match (self.screen, action) {
            (Screen::List, Action::Quit) => self.should_quit = true,
            (Screen::List, Action::Next) => self.select_next(),
            (Screen::List, Action::Previous) => self.select_previous(),
            (Screen::List, Action::OpenForm) => {
                self.form = NoteForm::default();
                self.screen = Screen::Form;
            }
            (Screen::List, Action::OpenDetail) => {
                if let Some(note) = self.store.notes().get(self.selected) {
                    self.form = NoteForm::filled(&note.title, &note.text);
                    self.target = Some(note.id);
                    self.screen = Screen::Detail;
                }
            }
            (Screen::List, Action::OpenColorPicker) => {
                if let Some(note) = self.store.notes().get(self.selected) {
                    self.palette_cursor = palette_index(&note.color).unwrap_or(0);
                    self.target = Some(note.id);
                    self.screen = Screen::ColorPicker;
                }
            }
            (Screen::List, Action::Delete) => {
                if let Some(id) = self.store.notes().get(self.selected).map(|n| n.id) {
                    self.store.delete(id)?;
                    self.clamp_selection();
                }
            }

            (Screen::Form | Screen::Detail, Action::ToggleFocus) => self.form.toggle_focus(),
            (Screen::Form | Screen::Detail, Action::Type) => self.form.handle_event(event),
            (Screen::Form, Action::Submit | Action::Close) => {
                let title = self.form.title.value().to_string();
                let text = self.form.text.value().to_string();
                if self.store.add(&title, &text)?.is_some() {
                    self.selected = self.store.len() - 1;
                }
                self.close();
            }
            (Screen::Detail, Action::Submit | Action::Close) => {
                if let Some(id) = self.target {
                    let title = self.form.title.value().to_string();
                    let text = self.form.text.value().to_string();
                    self.store.edit(id, &title, &text)?;
                }
                self.close();
            }

            (Screen::ColorPicker, Action::Next) => {
                self.palette_cursor = (self.palette_cursor + 1) % PALETTE.len();
            }
            (Screen::ColorPicker, Action::Previous) => {
                self.palette_cursor = (self.palette_cursor + PALETTE.len() - 1) % PALETTE.len();
            }
            (Screen::ColorPicker, Action::Submit) => {
                if let Some(id) = self.target {
                    self.store.set_color(id, PALETTE[self.palette_cursor].0)?;
                }
                self.close();
            }

            (_, Action::Discard) => self.close(),
            _ => {}
        }

        Ok(())
    }

    fn close(&mut self) {
        self.form = NoteForm::default();
        self.target = None;
        self.screen = Screen::List;
    }

    fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 >= len {
            0
        } else {
            self.selected + 1
        };
    }

    fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::db::Database;

    fn app() -> App {
        App::new(NoteStore::load(Database::open_in_memory().unwrap()).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_note(app: &mut App, title: &str, text: &str) {
        press(app, KeyCode::Char('a'));
        type_str(app, title);
        press(app, KeyCode::Tab);
        type_str(app, text);
        ctrl(app, 's');
    }

    #[test]
    fn test_form_submit_adds_note() {
        let mut app = app();
        add_note(&mut app, "Groceries", "milk");
        assert_eq!(app.screen, Screen::List);
        assert_eq!(app.store.len(), 1);
        let note = &app.store.notes()[0];
        assert_eq!((note.id, note.title.as_str(), note.text.as_str()), (1, "Groceries", "milk"));
        assert_eq!(note.color, "white");
    }

    #[test]
    fn test_form_escape_adds_when_filled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "kept");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_blank_form_adds_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Esc);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_form_discard_drops_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "gone");
        ctrl(&mut app, 'x');
        assert!(app.store.is_empty());
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_detail_close_saves_edit() {
        let mut app = app();
        add_note(&mut app, "a", "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.form.title.value(), "a");
        type_str(&mut app, "b");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.notes()[0].title, "ab");
        assert_eq!(app.store.notes()[0].text, "x");
    }

    #[test]
    fn test_detail_discard_keeps_note() {
        let mut app = app();
        add_note(&mut app, "a", "x");
        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "zzz");
        ctrl(&mut app, 'x');
        assert_eq!(app.store.notes()[0].title, "a");
    }

    #[test]
    fn test_color_picker_sets_color() {
        let mut app = app();
        add_note(&mut app, "a", "x");
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.screen, Screen::ColorPicker);
        assert_eq!(app.palette_cursor, 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.notes()[0].color, "red");
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_color_picker_wraps_backwards() {
        let mut app = app();
        add_note(&mut app, "a", "x");
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.palette_cursor, PALETTE.len() - 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.notes()[0].color, "white");
    }

    #[test]
    fn test_delete_selected_and_clamp() {
        let mut app = app();
        add_note(&mut app, "a", "");
        add_note(&mut app, "b", "");
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.notes()[0].title, "a");
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        add_note(&mut app, "a", "");
        add_note(&mut app, "b", "");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_overlays_need_a_note() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::List);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.screen, Screen::List);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
