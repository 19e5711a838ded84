//! NoteStore — the notes repository
//!
//! Owns the in-memory collection and mirrors it to `<cache>/notes.json`.
//! All access goes through one mutex, so a mutation and its save are never
//! interleaved with another request.

use notes_types::Note;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use super::collection::NotesCollection;
use super::file_ops;
use crate::error::{NotesError, Result};

pub struct NoteStore {
    path: PathBuf,
    notes: Mutex<NotesCollection>,
}

impl NoteStore {
    /// Open the store for a cache directory, loading `notes.json` if present
    pub fn open(cache_dir: &Path) -> Result<Self> {
        let path = file_ops::store_path(cache_dir);
        let notes = file_ops::load_notes(&path)?;
        log::info!("[NOTES] Loaded {} notes from {:?}", notes.len(), path);

        Ok(Self {
            path,
            notes: Mutex::new(NotesCollection::new(notes)),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }

    /// Snapshot of every note in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.notes.lock().as_slice().to_vec()
    }

    pub fn get(&self, name: &str) -> Option<Note> {
        self.notes.lock().find_by_name(name).cloned()
    }

    pub fn create(&self, name: &str, text: Option<String>) -> Result<Note> {
        let note = self.mutate(|notes| notes.insert(name, text))?;
        log::info!("[NOTES] Created note '{}' ({} notes)", name, self.len());
        Ok(note)
    }

    /// Replace the text of an existing note. Saves even if the text is unchanged.
    /// An unknown name is reported before a missing text.
    pub fn update(&self, name: &str, text: Option<String>) -> Result<Note> {
        let note = self.mutate(|notes| {
            let not_found = || NotesError::NotFound {
                name: name.to_string(),
            };
            if notes.find_by_name(name).is_none() {
                return Err(not_found());
            }
            let text = text.ok_or(NotesError::MissingText)?;
            notes.update(name, text).ok_or_else(not_found)
        })?;
        log::info!("[NOTES] Updated note '{}' ({} notes)", name, self.len());
        Ok(note)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.mutate(|notes| {
            if notes.remove(name) {
                Ok(())
            } else {
                Err(NotesError::NotFound {
                    name: name.to_string(),
                })
            }
        })?;
        log::info!("[NOTES] Deleted note '{}' ({} notes)", name, self.len());
        Ok(())
    }

    /// Apply `op` to a working copy, persist it, then commit it in memory.
    /// A failed op or a failed save leaves both memory and disk untouched.
    fn mutate<T>(&self, op: impl FnOnce(&mut NotesCollection) -> Result<T>) -> Result<T> {
        let mut guard = self.notes.lock();
        let mut working = guard.clone();

        let value = op(&mut working)?;

        if let Err(e) = file_ops::save_notes(&self.path, working.as_slice()) {
            log::error!("[NOTES] Failed to save {:?}: {}", self.path, e);
            return Err(e);
        }

        *guard = working;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_empty_dir() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();

        assert!(store.is_empty());
        assert!(store.list().is_empty());
        // Opening never creates the file
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.json"), "not json at all").unwrap();

        let err = NoteStore::open(dir.path()).err().unwrap();
        assert!(matches!(err, NotesError::CorruptStore { .. }));
    }

    #[test]
    fn test_reload_reproduces_state() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();

        store.create("a", Some("one".into())).unwrap();
        store.create("b", None).unwrap();
        store.create("c", Some("three".into())).unwrap();
        store.update("a", Some("uno".into())).unwrap();
        store.delete("b").unwrap();
        store.create("b", Some("again".into())).unwrap();

        let reopened = NoteStore::open(dir.path()).unwrap();
        assert_eq!(reopened.list(), store.list());
        assert_eq!(
            reopened.list(),
            vec![
                Note::new("a", Some("uno".into())),
                Note::new("c", Some("three".into())),
                Note::new("b", Some("again".into())),
            ]
        );
    }

    #[test]
    fn test_failed_mutations_leave_file_untouched() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        store.create("a", Some("hi".into())).unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(matches!(
            store.create("a", Some("other".into())),
            Err(NotesError::DuplicateName { .. })
        ));
        assert!(matches!(store.delete("zzz"), Err(NotesError::NotFound { .. })));
        assert!(matches!(
            store.update("zzz", Some("x".into())),
            Err(NotesError::NotFound { .. })
        ));

        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert_eq!(store.get("a").unwrap().text, "hi");
    }

    #[test]
    fn test_update_checks_name_before_text() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        store.create("a", Some("hi".into())).unwrap();

        assert!(matches!(store.update("ghost", None), Err(NotesError::NotFound { .. })));
        assert!(matches!(store.update("a", None), Err(NotesError::MissingText)));
        assert_eq!(store.get("a").unwrap().text, "hi");

        assert_eq!(store.update("a", Some(String::new())).unwrap().text, "");
    }

    #[test]
    fn test_concurrent_creates_of_same_name() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();

        let created = std::thread::scope(|s| {
            let store = &store;
            let handles: Vec<_> = (0..8)
                .map(|i| s.spawn(move || store.create("race", Some(format!("writer {}", i)))))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|r| r.is_ok())
                .count()
        });

        assert_eq!(created, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(NoteStore::open(dir.path()).unwrap().list(), store.list());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = tempdir().unwrap();
        let cache = dir.path().join("cache");
        fs::create_dir(&cache).unwrap();
        let store = NoteStore::open(&cache).unwrap();

        // Make the backing file unwritable by turning it into a directory
        fs::create_dir(store.path()).unwrap();

        let err = store.create("a", None).unwrap_err();
        assert!(matches!(err, NotesError::Persistence(_)));
        assert!(store.get("a").is_none());
        assert_eq!(store.len(), 0);
    }
}
