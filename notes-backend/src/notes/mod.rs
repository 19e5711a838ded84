//! Notes repository — named text notes mirrored to a single JSON file

pub mod collection;
pub mod file_ops;
pub mod store;

pub use collection::NotesCollection;
pub use store::NoteStore;
