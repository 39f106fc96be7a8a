use ratatui::style::Color;

use crate::models::{Note, color_for};

/// One note as it is drawn on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteCard {
    pub id: i64,
    /// `None` when the note has no title; the card then shows only its text.
    pub title: Option<String>,
    pub text: String,
    pub background: Color,
}

/// Display representation of the whole note list, rebuilt on every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    pub cards: Vec<NoteCard>,
}

impl Board {
    pub fn build(notes: &[Note]) -> Board {
        Board {
            cards: notes.iter().map(NoteCard::from).collect(),
        }
    }

    pub fn show_placeholder(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&Note> for NoteCard {
    fn from(note: &Note) -> Self {
        NoteCard {
            id: note.id,
            title: (!note.title.is_empty()).then(|| note.title.clone()),
            text: note.text.clone(),
            background: color_for(&note.color),
        }
    }
}
