//! Outbound ports - capabilities the game needs from the outside world
//!
//! - Platform services (persistent storage, timers, document title)
//! - Chat-completion LLM access
//! - Scenario generation built on top of the LLM

mod error;
mod llm_port;
pub mod platform;
mod scenario_port;

pub use error::{GenerationError, LlmError};
pub use llm_port::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, ResponseFormat,
    TokenUsage,
};
pub use platform::{storage_keys, DocumentProvider, SleepProvider, StorageProvider};
pub use scenario_port::{GeneratedScenario, ScenarioGeneratorPort, ScenarioPrompt};

#[cfg(any(test, feature = "testing"))]
pub use llm_port::MockLlmPort;
#[cfg(any(test, feature = "testing"))]
pub use scenario_port::MockScenarioGeneratorPort;
