use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    /// Extracted text is truncated to this many characters before it
    /// enters the prompt.
    pub text_cap: usize,
    pub default_num_flashcards: u32,
}

impl Settings {
    /// Populate settings from process environment, falling back to
    /// defaults suitable for local development. The API credential has
    /// no default.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse_or("SERVER_PORT", 8000),
            },
            llm: LlmSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("LLM_MODEL", "gpt-4o-mini"),
                timeout_seconds: env_parse_or("LLM_TIMEOUT_SECONDS", 30),
            },
            generation: GenerationSettings {
                text_cap: env_parse_or("TEXT_CAP", 2000),
                default_num_flashcards: env_parse_or("DEFAULT_NUM_FLASHCARDS", 5),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
