//! Error types for outbound port operations.

/// Failures talking to the chat-completion service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failures producing the next scenario.
///
/// `Service` covers transport problems and non-success responses; `Format`
/// covers content that arrived but does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Service(#[from] LlmError),
    #[error("Invalid response format: {0}")]
    Format(String),
}

impl GenerationError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
