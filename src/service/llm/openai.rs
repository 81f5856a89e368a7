//! OpenAI implementation of the assistant model.
//!
//! Uses the Responses API through `async-openai`, with a per-call timeout and
//! exponential backoff between retries.

use std::sync::Arc;
use std::time::Duration;

use crate::base::{
    config::Config,
    types::{AssistantContext, Res},
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::responses::{Content, CreateResponseArgs, Input, InputItem, InputMessageArgs, OutputContent, Response, Role, TextConfig, TextResponseFormat},
};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI LLM client.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.openai_api_key.clone().unwrap_or_default());

        Self {
            client: Client::with_config(cfg),
            config: config.clone(),
        }
    }

    /// Build the assistant input from the triage context.
    #[instrument(name = "OpenAiLlmClient::build_assistant_input", skip_all)]
    fn build_assistant_input(&self, context: &AssistantContext) -> Res<Input> {
        Ok(Input::Items(vec![
            InputItem::Message(
                InputMessageArgs::default()
                    .role(Role::Developer)
                    .content(format!("## Detected Symptoms\n\n{}\n\n", format_symptoms(&context.detected_symptoms)))
                    .build()?,
            ),
            InputItem::Message(
                InputMessageArgs::default()
                    .role(Role::User)
                    .content(format!("# User Message\n\n{}\n\n", context.user_message))
                    .build()?,
            ),
        ]))
    }

    /// Helper function to make OpenAI API calls with retry logic and timeout handling.
    async fn call_openai_api(&self, request_builder: CreateResponseArgs) -> Res<Response> {
        const MAX_RETRIES: u32 = 3;
        const TIMEOUT: u64 = 120;
        const RETRY_DELAY_MS: u64 = 1000;

        let mut retries = 0;

        loop {
            let request = request_builder.build()?;
            let result = timeout(Duration::from_secs(TIMEOUT), self.client.responses().create(request)).await;

            match result {
                Ok(Ok(response)) => {
                    info!("OpenAI API call succeeded after {} attempts", retries + 1);
                    return Ok(response);
                }
                Ok(Err(err)) => {
                    if retries >= MAX_RETRIES {
                        return Err(anyhow::anyhow!("OpenAI API call failed after {MAX_RETRIES} retries: {err}"));
                    }
                    retries += 1;
                    warn!("OpenAI API call failed, retrying {retries}/{MAX_RETRIES}: {err}");

                    tokio::time::sleep(retry_delay(RETRY_DELAY_MS, retries)).await;
                }
                Err(_) => {
                    if retries >= MAX_RETRIES {
                        return Err(anyhow::anyhow!("OpenAI API call timed out after {MAX_RETRIES} attempts"));
                    }
                    retries += 1;
                    warn!("OpenAI API call timed out, retrying {retries}/{MAX_RETRIES}");

                    tokio::time::sleep(retry_delay(RETRY_DELAY_MS, retries)).await;
                }
            }
        }
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::get_assistant_reply", skip_all)]
    async fn get_assistant_reply(&self, context: &AssistantContext) -> Res<String> {
        let input = self.build_assistant_input(context)?;

        let text_config = TextConfig { format: TextResponseFormat::Text };

        let mut request = CreateResponseArgs::default();
        request
            .instructions(self.config.assistant_system_directive.clone())
            .max_output_tokens(self.config.openai_max_tokens)
            .model(&self.config.openai_model)
            .text(text_config)
            .input(input);

        // Add the temperature for the non-reasoning models.
        if self.config.openai_model.starts_with("gpt") {
            request.temperature(self.config.openai_temperature);
        }

        let response = self.call_openai_api(request).await?;

        let reply = parse_openai_response(&response)?.join("\n\n");

        if reply.trim().is_empty() {
            return Err(anyhow::anyhow!("OpenAI returned an empty reply."));
        }

        Ok(reply.trim().to_string())
    }
}

/// Extract the text outputs of an OpenAI response.
#[instrument(skip_all)]
pub fn parse_openai_response(response: &Response) -> Res<Vec<String>> {
    let mut result = Vec::new();

    info!("LLM response has {} outputs.", response.output.len());
    for output in &response.output {
        match output {
            OutputContent::Message(message) => {
                for message_content in &message.content {
                    match message_content {
                        Content::OutputText(text) => result.push(text.text.clone()),
                        Content::Refusal(reason) => {
                            return Err(anyhow::anyhow!("Request refused: {reason:#?}"));
                        }
                    }
                }
            }
            _ => {
                warn!("Unexpected output: {output:#?}");
            }
        }
    }

    Ok(result)
}

/// Render detected symptoms for the model.
fn format_symptoms(symptoms: &[String]) -> String {
    if symptoms.is_empty() {
        "None matched.".to_string()
    } else {
        symptoms.iter().map(|symptom| format!("- {symptom}")).collect::<Vec<_>>().join("\n")
    }
}

/// Exponential backoff: `base_ms`, then doubled for every further retry.
fn retry_delay(base_ms: u64, retry: u32) -> Duration {
    Duration::from_millis(base_ms * 2_u64.pow(retry.saturating_sub(1)))
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    fn create_test_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                openai_model: "gpt-4.1-nano".to_string(),
                openai_temperature: 0.1,
                openai_max_tokens: 200u32,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn symptoms_are_rendered_as_a_list() {
        assert_eq!(format_symptoms(&[]), "None matched.");
        assert_eq!(format_symptoms(&["fever".to_string(), "sore throat".to_string()]), "- fever\n- sore throat");
    }

    #[test]
    fn retry_delay_doubles() {
        assert_eq!(retry_delay(1000, 1), Duration::from_millis(1000));
        assert_eq!(retry_delay(1000, 2), Duration::from_millis(2000));
        assert_eq!(retry_delay(1000, 3), Duration::from_millis(4000));
    }

    #[test]
    fn assistant_input_carries_symptoms_and_message() {
        let client = OpenAiLlmClient::new(&create_test_config());
        let context = AssistantContext {
            user_message: "I have a sore throat".to_string(),
            detected_symptoms: vec!["sore throat".to_string()],
        };

        let Input::Items(items) = client.build_assistant_input(&context).unwrap() else {
            panic!("expected input items");
        };

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_llm_client_get_assistant_reply() {
        if std::env::var("OPENAI_API_KEY").is_err() {
            eprintln!("OPENAI_API_KEY not set; skipping live OpenAI test.");
            return;
        }

        let client = LlmClient::openai(&create_test_config());
        let context = AssistantContext {
            user_message: "I have a mild headache after a long day.".to_string(),
            detected_symptoms: vec!["headache".to_string()],
        };

        let reply = client.get_assistant_reply(&context).await.unwrap();

        assert!(!reply.is_empty(), "Reply should not be empty");
    }
}
