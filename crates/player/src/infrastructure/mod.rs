//! Infrastructure adapters: the chat-completion client, platform
//! providers, and runtime configuration.

pub mod config;
pub mod openai;
pub mod platform;

pub use config::LlmConfig;
pub use openai::OpenAiClient;
