//! Notes service — CRUD over named text notes persisted to `notes.json`.

pub mod config;
pub mod controllers;
pub mod error;
pub mod notes;

use notes::NoteStore;

pub struct AppState {
    pub store: NoteStore,
}

impl AppState {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }
}
