use std::env;

use tracing::debug;

pub const GOOGLE_API_KEY_NAME: &str = "GOOGLE_API_KEY";
pub const GEMINI_API_BASE_NAME: &str = "GEMINI_API_BASE";
pub const GEMINI_MODEL_NAME: &str = "GEMINI_MODEL";

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "models/gemini-1.5-flash-latest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Not validated here; a missing or bad key surfaces on the first call.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();
        Config {
            api_key: non_empty(GOOGLE_API_KEY_NAME),
            api_base: non_empty(GEMINI_API_BASE_NAME)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            model: non_empty(GEMINI_MODEL_NAME).unwrap_or(defaults.model),
        }
    }
}
