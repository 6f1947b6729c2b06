//! Runtime configuration
//!
//! Read from the process environment, after `.env.local` / `.env` at the
//! workspace root have been loaded. Browser builds have no process
//! environment, so the API key may also be baked in at compile time.

use std::time::Duration;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "SURVIVE_LLM_BASE_URL";
pub const MODEL_ENV: &str = "SURVIVE_LLM_MODEL";
pub const TIMEOUT_ENV: &str = "SURVIVE_LLM_TIMEOUT_SECS";

/// Settings for the chat-completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

impl LlmConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        if config.api_key.is_some() {
            return config;
        }
        Self {
            api_key: option_env!("OPENAI_API_KEY").map(str::to_string),
            ..config
        }
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout_secs = match get(TIMEOUT_ENV) {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_LLM_TIMEOUT_SECS,
                    "Invalid {}, using default",
                    TIMEOUT_ENV
                );
                DEFAULT_LLM_TIMEOUT_SECS
            }),
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Self {
            base_url: get(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            model: get(MODEL_ENV).unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            api_key: get(API_KEY_ENV),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the environment win over file contents.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = ?path, error = %e, "Failed to load env file");
            }
        }
    }
}
