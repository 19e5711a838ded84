//! File operations for the notes backing file
//!
//! The whole collection lives in a single pretty-printed JSON array that is
//! rewritten in place after every mutation.

use notes_types::Note;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{NotesError, Result};

/// File name of the backing store inside the cache directory
pub const NOTES_FILE: &str = "notes.json";

/// Path of the backing file for a cache directory
pub fn store_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(NOTES_FILE)
}

/// Load the notes array, returning an empty list if the file does not exist
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(NotesError::Persistence(e)),
    };

    serde_json::from_str(&raw).map_err(|source| NotesError::CorruptStore {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the backing file with the full collection (2-space indent).
/// Not atomic: a crash mid-write can leave a truncated file behind.
pub fn save_notes(path: &Path, notes: &[Note]) -> Result<()> {
    let content = serde_json::to_string_pretty(notes).map_err(io::Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let notes = load_notes(&store_path(dir.path())).unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = store_path(dir.path());

        save_notes(&path, &[Note::new("a", Some("hi".into()))]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "[\n  {\n    \"name\": \"a\",\n    \"text\": \"hi\"\n  }\n]");
        assert_eq!(load_notes(&path).unwrap(), vec![Note::new("a", Some("hi".into()))]);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = store_path(dir.path());
        fs::write(&path, "{ not json").unwrap();

        let err = load_notes(&path).unwrap_err();
        assert!(matches!(err, NotesError::CorruptStore { .. }));
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = store_path(dir.path());
        fs::write(&path, r#"{"name": "a", "text": "b"}"#).unwrap();
        assert!(matches!(load_notes(&path), Err(NotesError::CorruptStore { .. })));

        fs::write(&path, r#"[{"name": "a"}]"#).unwrap();
        assert!(matches!(load_notes(&path), Err(NotesError::CorruptStore { .. })));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone").join(NOTES_FILE);

        let err = save_notes(&path, &[]).unwrap_err();
        assert!(matches!(err, NotesError::Persistence(_)));
    }
}
