mod settings;

pub use settings::{GenerationSettings, LlmSettings, ServerSettings, Settings};
