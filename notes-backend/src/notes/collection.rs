//! In-memory notes collection
//!
//! Ordered by insertion; names are kept unique by a linear scan on insert.
//! Nothing here touches the disk, callers persist after mutating.

use notes_types::Note;

use crate::error::{NotesError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesCollection {
    notes: Vec<Note>,
}

impl NotesCollection {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// First note with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.name == name)
    }

    /// Append a new note. Empty or missing text is replaced by the placeholder.
    pub fn insert(&mut self, name: &str, text: Option<String>) -> Result<Note> {
        if self.find_by_name(name).is_some() {
            return Err(NotesError::DuplicateName {
                name: name.to_string(),
            });
        }

        let note = Note::new(name, text);
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Replace the text of an existing note in place
    pub fn update(&mut self, name: &str, text: String) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.name == name)?;
        note.text = text;
        Some(note.clone())
    }

    /// Remove a note by name, returning whether anything was removed
    pub fn remove(&mut self, name: &str) -> bool {
        match self.notes.iter().position(|note| note.name == name) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }
}
