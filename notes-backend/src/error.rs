use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotesError>;

/// Errors raised by the notes repository and surfaced through the HTTP layer.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Lookup by name failed
    #[error("Note {name} not found!")]
    NotFound { name: String },

    #[error("Note already exists!")]
    DuplicateName { name: String },

    #[error("Name parameter is required.")]
    MissingName,

    #[error("Text parameter is required.")]
    MissingText,

    /// Backing file could not be read or written
    #[error("Failed to access notes file: {0}")]
    Persistence(#[from] io::Error),

    /// Backing file exists but does not decode to a list of notes
    #[error("Notes file {path:?} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl NotesError {
    /// Name of the note the failed request referred to, if any
    pub fn note_name(&self) -> Option<&str> {
        match self {
            NotesError::NotFound { name } | NotesError::DuplicateName { name } => Some(name.as_str()),
            _ => None,
        }
    }
}

impl ResponseError for NotesError {
    fn status_code(&self) -> StatusCode {
        match self {
            NotesError::NotFound { .. } => StatusCode::NOT_FOUND,
            NotesError::DuplicateName { .. } | NotesError::MissingName | NotesError::MissingText => {
                StatusCode::BAD_REQUEST
            }
            NotesError::Persistence(_) | NotesError::CorruptStore { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status.is_server_error() {
            log::error!("[NOTES] {}", self);
            "Internal server error".to_string()
        } else {
            if let Some(name) = self.note_name() {
                log::debug!("[NOTES] Rejected request for '{}': {}", name, self);
            }
            self.to_string()
        };

        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Directory cache path is invalid: {0:?}")]
    InvalidCacheDir(PathBuf),
}
