pub mod data;
pub mod models;

pub use data::NoteData;
pub use models::Note;
