mod generate;
mod health;
mod status;

pub use generate::generate_flashcards_handler;
pub use health::{health_handler, root_handler};
pub use status::status_handler;
