mod document;
mod flashcard;

pub use document::{ContentType, Document, DocumentId};
pub use flashcard::Flashcard;
