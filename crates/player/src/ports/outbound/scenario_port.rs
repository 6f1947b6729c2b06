//! Scenario generation port
//!
//! The game loop only needs "give me the next scenario given what just
//! happened". How that is produced (an LLM, a canned script in tests) sits
//! behind this trait.

use survive_domain::Choice;

use super::GenerationError;

/// What the generator is asked to continue from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioPrompt {
    /// First scenario of a run, no prior context
    Opening,
    /// Continue after the player picked `choice` in `previous_scenario`
    Continue {
        previous_scenario: String,
        choice: String,
    },
}

impl ScenarioPrompt {
    pub fn continue_from(previous_scenario: impl Into<String>, choice: impl Into<String>) -> Self {
        Self::Continue {
            previous_scenario: previous_scenario.into(),
            choice: choice.into(),
        }
    }

    pub fn is_opening(&self) -> bool {
        matches!(self, Self::Opening)
    }
}

/// A validated scenario ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScenario {
    pub scenario: String,
    pub choices: Vec<Choice>,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ScenarioGeneratorPort: Send + Sync {
    async fn generate(&self, prompt: ScenarioPrompt) -> Result<GeneratedScenario, GenerationError>;
}
