//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

/// Text stored when a note is created without any content.
pub const DEFAULT_NOTE_TEXT: &str = "No text provided";

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes/write`
///
/// Both fields are optional on the wire so a missing name can be reported
/// as a validation error rather than a decode failure.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Unique name of the note
    #[serde(default)]
    pub note_name: Option<String>,
    /// Note content (defaults to [`DEFAULT_NOTE_TEXT`])
    #[serde(default)]
    pub note: Option<String>,
}

/// Body of `PUT /notes/{name}`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// =====================================================
// Domain Types
// =====================================================

/// A named piece of text. `name` is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

impl Note {
    /// Build a note, substituting the placeholder for absent or empty text.
    pub fn new(name: impl Into<String>, text: Option<String>) -> Self {
        let text = text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_NOTE_TEXT.to_string());
        Self {
            name: name.into(),
            text,
        }
    }
}
