//! LLM-backed scenario generation.
//!
//! Turns a [`ScenarioPrompt`] into a chat-completion request and parses the
//! model's JSON reply into a [`GeneratedScenario`]. Only the two top-level
//! fields are checked: `scenario` must be a non-empty string and `choices`
//! must be an array. Array elements are read leniently and never fail the
//! reply.

use std::sync::Arc;

use serde_json::Value;
use survive_domain::Choice;

use crate::ports::outbound::{
    ChatMessage, GeneratedScenario, GenerationError, LlmPort, LlmRequest, ResponseFormat,
    ScenarioGeneratorPort, ScenarioPrompt,
};

pub const SYSTEM_PROMPT: &str = "You are a fantasy/medieval survival scenario generator. \
Format the response as JSON with a 'scenario' field and a 'choices' array containing objects \
with 'text' and 'isBad' fields. Make the story continuous and engaging.";

const OPENING_PROMPT: &str = "Generate an initial survival scenario with 5 choices. \
2 of these choices should be bad decisions that would lead to health loss.";

const CONTINUE_INSTRUCTION: &str = "Continue the story based on this choice and create a new \
scenario with 5 choices. 2 of these choices should be bad decisions that would lead to health loss.";

/// Build the user message for a prompt.
pub fn user_prompt(prompt: &ScenarioPrompt) -> String {
    match prompt {
        ScenarioPrompt::Opening => OPENING_PROMPT.to_string(),
        ScenarioPrompt::Continue {
            previous_scenario,
            choice,
        } => format!(
            "Previous scenario: {}\nPrevious choice: {}\n\n{}",
            previous_scenario, choice, CONTINUE_INSTRUCTION
        ),
    }
}

/// Scenario generator driven by a chat-completion model
pub struct LlmScenarioGenerator {
    llm: Arc<dyn LlmPort>,
}

impl LlmScenarioGenerator {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    fn build_request(&self, prompt: &ScenarioPrompt) -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user(user_prompt(prompt))])
            .with_system_prompt(SYSTEM_PROMPT)
            .with_response_format(ResponseFormat::JsonObject)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ScenarioGeneratorPort for LlmScenarioGenerator {
    async fn generate(&self, prompt: ScenarioPrompt) -> Result<GeneratedScenario, GenerationError> {
        let request = self.build_request(&prompt);
        let response = self.llm.generate(request).await?;

        if response.content.trim().is_empty() {
            return Err(GenerationError::format("No content received from the model"));
        }

        parse_scenario(&response.content)
    }
}

/// Parse a model reply into a scenario.
pub fn parse_scenario(content: &str) -> Result<GeneratedScenario, GenerationError> {
    let value: Value = match serde_json::from_str(content.trim()) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(&extract_json(content)).map_err(|e| {
            GenerationError::format(format!("Response is not valid JSON: {}", e))
        })?,
    };

    let scenario = value
        .get("scenario")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GenerationError::format("Missing 'scenario' field"))?
        .to_string();

    let raw_choices = value
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| GenerationError::format("'choices' is not an array"))?;

    let choices = raw_choices.iter().map(read_choice).collect();

    Ok(GeneratedScenario { scenario, choices })
}

/// Read one array element as a choice, whatever its shape.
fn read_choice(raw: &Value) -> Choice {
    let text = match raw.get("text").unwrap_or(raw) {
        Value::String(text) => text.clone(),
        Value::Null | Value::Object(_) => String::new(),
        other => other.to_string(),
    };
    let is_bad = raw.get("isBad").is_some_and(is_truthy);
    Choice::new(text, is_bad)
}

/// JavaScript-style truthiness for the `isBad` flag
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extract JSON from a response that might have markdown code blocks or extra text.
fn extract_json(response: &str) -> String {
    // Try to find JSON in markdown code block
    if let Some(start) = response.find("```json") {
        if let Some(end) = response[start + 7..].find("```") {
            return response[start + 7..start + 7 + end].trim().to_string();
        }
    }

    // Try to find JSON in plain code block
    if let Some(start) = response.find("```") {
        if let Some(end) = response[start + 3..].find("```") {
            let content = response[start + 3..start + 3 + end].trim();
            // Skip language identifier if present
            if let Some(newline_pos) = content.find('\n') {
                let first_line = &content[..newline_pos];
                if !first_line.starts_with('{') {
                    return content[newline_pos + 1..].trim().to_string();
                }
            }
            return content.to_string();
        }
    }

    // Try to find raw JSON object
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return response[start..=end].to_string();
            }
        }
    }

    response.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{LlmError, LlmResponse, MockLlmPort};
    use mockall::predicate::function;

    const GOOD_REPLY: &str = r#"{
        "scenario": "Snow falls over the abandoned keep.",
        "choices": [
            {"text": "Light a fire in the hall", "isBad": false},
            {"text": "Sleep in the open courtyard", "isBad": true},
            {"text": "Search the cellar", "isBad": false},
            {"text": "Drink the stagnant well water", "isBad": true},
            {"text": "Bar the gate", "isBad": false}
        ]
    }"#;

    fn generator_replying(reply: &'static str) -> LlmScenarioGenerator {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(move |_| Ok(LlmResponse::text(reply)));
        LlmScenarioGenerator::new(Arc::new(llm))
    }

    #[test]
    fn opening_prompt_has_no_prior_context() {
        let text = user_prompt(&ScenarioPrompt::Opening);
        assert!(text.starts_with("Generate an initial survival scenario"));
        assert!(!text.contains("Previous scenario"));
    }

    #[test]
    fn continuation_prompt_carries_scenario_and_choice() {
        let text = user_prompt(&ScenarioPrompt::continue_from(
            "A bear blocks the path.",
            "Climb a tree",
        ));
        assert!(text.starts_with(
            "Previous scenario: A bear blocks the path.\nPrevious choice: Climb a tree\n\n"
        ));
        assert!(text.contains("2 of these choices should be bad decisions"));
    }

    #[tokio::test]
    async fn request_uses_system_prompt_and_json_mode() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .with(function(|req: &LlmRequest| {
                req.system_prompt.as_deref() == Some(SYSTEM_PROMPT)
                    && req.response_format == ResponseFormat::JsonObject
                    && req.messages.len() == 1
                    && req.messages[0].content.contains("Previous choice: Run")
            }))
            .times(1)
            .returning(|_| Ok(LlmResponse::text(GOOD_REPLY)));

        let generator = LlmScenarioGenerator::new(Arc::new(llm));
        let result = generator
            .generate(ScenarioPrompt::continue_from("Wolves howl.", "Run"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn parses_well_formed_reply() {
        let generated = generator_replying(GOOD_REPLY)
            .generate(ScenarioPrompt::Opening)
            .await
            .unwrap();

        assert_eq!(generated.scenario, "Snow falls over the abandoned keep.");
        assert_eq!(generated.choices.len(), 5);
        assert_eq!(generated.choices.iter().filter(|c| c.is_bad).count(), 2);
        assert_eq!(generated.choices[1], Choice::harmful("Sleep in the open courtyard"));
    }

    #[tokio::test]
    async fn empty_content_is_a_format_error() {
        let err = generator_replying("   ")
            .generate(ScenarioPrompt::Opening)
            .await
            .unwrap_err();
        assert!(err.is_format());
    }

    #[tokio::test]
    async fn transport_failure_is_a_service_error() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("503 Service Unavailable".into())));
        let err = LlmScenarioGenerator::new(Arc::new(llm))
            .generate(ScenarioPrompt::Opening)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Service(LlmError::RequestFailed("503 Service Unavailable".into()))
        );
    }

    #[test]
    fn missing_scenario_is_rejected() {
        let err = parse_scenario(r#"{"choices": []}"#).unwrap_err();
        assert_eq!(err, GenerationError::format("Missing 'scenario' field"));
    }

    #[test]
    fn blank_scenario_is_rejected() {
        assert!(parse_scenario(r#"{"scenario": "  ", "choices": []}"#).is_err());
    }

    #[test]
    fn non_array_choices_are_rejected() {
        let err = parse_scenario(r#"{"scenario": "Fog.", "choices": "run"}"#).unwrap_err();
        assert_eq!(err, GenerationError::format("'choices' is not an array"));
    }

    #[test]
    fn missing_choices_are_rejected() {
        assert!(parse_scenario(r#"{"scenario": "Fog."}"#).is_err());
    }

    #[test]
    fn unparsable_json_is_rejected() {
        let err = parse_scenario("the model rambled instead").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn choice_without_text_gets_empty_text() {
        let generated =
            parse_scenario(r#"{"scenario": "Fog.", "choices": [{"label": "Hide", "isBad": true}]}"#)
                .unwrap();
        assert_eq!(generated.choices, vec![Choice::harmful("")]);
    }

    #[test]
    fn loose_is_bad_values_follow_truthiness() {
        let generated = parse_scenario(
            r#"{"scenario": "Fog.", "choices": [
                {"text": "Wait", "isBad": null},
                {"text": "Shout", "isBad": "true"},
                {"text": "Dig", "isBad": 0},
                {"text": "Climb", "isBad": 1},
                {"text": "Swim", "isBad": ""}
            ]}"#,
        )
        .unwrap();
        let flags: Vec<bool> = generated.choices.iter().map(|c| c.is_bad).collect();
        assert_eq!(flags, vec![false, true, false, true, false]);
    }

    #[test]
    fn non_string_text_is_stringified() {
        let generated = parse_scenario(
            r#"{"scenario": "Fog.", "choices": [{"text": 42}, "Run for the hills", null]}"#,
        )
        .unwrap();
        assert_eq!(
            generated.choices,
            vec![
                Choice::safe("42"),
                Choice::safe("Run for the hills"),
                Choice::safe("")
            ]
        );
    }

    #[test]
    fn backticks_inside_valid_json_survive() {
        let reply = r#"{"scenario": "A rune reads ```beware``` on the door.", "choices": []}"#;
        let generated = parse_scenario(reply).unwrap();
        assert_eq!(generated.scenario, "A rune reads ```beware``` on the door.");
    }

    #[test]
    fn choice_count_is_not_enforced() {
        let generated = parse_scenario(
            r#"{"scenario": "Fog.", "choices": [{"text": "Wait"}, {"text": "Shout", "isBad": true}]}"#,
        )
        .unwrap();
        assert_eq!(
            generated.choices,
            vec![Choice::safe("Wait"), Choice::harmful("Shout")]
        );
    }

    #[test]
    fn accepts_fenced_json() {
        let reply = "Here you go:\n```json\n{\"scenario\": \"Rain.\", \"choices\": []}\n```";
        let generated = parse_scenario(reply).unwrap();
        assert_eq!(generated.scenario, "Rain.");
        assert!(generated.choices.is_empty());
    }

    #[test]
    fn extract_json_from_plain_block_with_language_tag() {
        let reply = "```javascript\n{\"a\": 1}\n```";
        assert_eq!(extract_json(reply), "{\"a\": 1}");
    }
}
