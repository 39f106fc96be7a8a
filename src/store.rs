use crate::{
    db::Database,
    error::StoreResult,
    models::{DEFAULT_COLOR, Note},
    view::Board,
};

/// Storage key holding the serialized note list.
pub const NOTES_KEY: &str = "notes";

/// Owns the note list and keeps the storage slot in step with it.
///
/// Every mutation rewrites the whole slot and rebuilds the [`Board`].
/// Unknown ids leave the list untouched; the only errors are storage errors.
pub struct NoteStore {
    db: Database,
    notes: Vec<Note>,
    board: Board,
}

impl NoteStore {
    /// Reads the persisted list. Missing or unreadable data yields an empty list.
    pub fn load(db: Database) -> StoreResult<NoteStore> {
        let notes = match db.get_item(NOTES_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(err) => {
                    log::warn!("ignoring malformed note list in storage: {err}");
                    Vec::new()
                }
            },
        };
        log::info!("loaded {} notes", notes.len());

        let board = Board::build(&notes);
        Ok(NoteStore { db, notes, board })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a white note unless both fields are blank. Returns the new id.
    pub fn add(&mut self, title: &str, text: &str) -> StoreResult<Option<i64>> {
        if title.trim().is_empty() && text.trim().is_empty() {
            return Ok(None);
        }

        let id = self.next_id();
        self.notes.push(Note {
            id,
            title: title.to_string(),
            text: text.to_string(),
            color: DEFAULT_COLOR.to_string(),
        });
        log::debug!("added note {id}");
        self.render()?;

        Ok(Some(id))
    }

    pub fn edit(&mut self, id: i64, title: &str, text: &str) -> StoreResult<()> {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.title = title.to_string();
            note.text = text.to_string();
            log::debug!("edited note {id}");
        }
        self.render()?;
        Ok(())
    }

    pub fn set_color(&mut self, id: i64, color: &str) -> StoreResult<()> {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.color = color.to_string();
            log::debug!("note {id} is now {color}");
        }
        self.render()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() != before {
            log::debug!("deleted note {id}");
        }
        self.render()?;
        Ok(())
    }

    /// Persists the current list, then rebuilds the board from it.
    pub fn render(&mut self) -> StoreResult<&Board> {
        self.save()?;
        self.board = Board::build(&self.notes);
        Ok(&self.board)
    }

    fn save(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.db.set_item(NOTES_KEY, &raw)?;
        log::debug!("persisted {} notes", self.notes.len());
        Ok(())
    }

    // Largest id plus one, which stays unique even if the stored list is not
    // in id order. A deleted trailing id can come back. Once the largest id
    // is i64::MAX, the lowest free positive id is used instead.
    fn next_id(&self) -> i64 {
        let Some(max) = self.notes.iter().map(|n| n.id).max() else {
            return 1;
        };
        max.checked_add(1).unwrap_or_else(|| {
            log::warn!("note id {max} cannot be incremented, reusing the lowest free id");
            (1..)
                .find(|id| self.notes.iter().all(|n| n.id != *id))
                .unwrap_or(1)
        })
    }
}
