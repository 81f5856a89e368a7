//! Handling of a single user message in a chat session.

use tracing::{error, info, instrument, warn};

use crate::{
    base::{
        prompts::ASSISTANT_UNAVAILABLE,
        types::{AssistantContext, Res},
    },
    engine::{TriageEngine, TriageResult},
    interaction::report::render_report,
    service::{chat::ChatClient, llm::LlmClient},
};

/// Triage `message`, send the report, and optionally an assistant reply.
///
/// The assistant is never consulted when a red flag fires. A failing
/// assistant is reported to the user but does not fail the message.
#[instrument(skip_all)]
pub async fn handle_chat_event(message: &str, engine: &TriageEngine, llm: Option<&LlmClient>, chat: &ChatClient) -> Res<TriageResult> {
    let result = engine.triage(message);

    info!(symptoms = result.detected_symptoms.len(), is_red_flag = result.is_red_flag, "Triaged message.");

    chat.send_message(&render_report(&result)).await?;

    if result.is_red_flag {
        warn!("Red flag detected; skipping assistant reply.");
        return Ok(result);
    }

    let Some(llm) = llm else {
        return Ok(result);
    };

    let context = AssistantContext {
        user_message: message.to_string(),
        detected_symptoms: result.detected_symptoms.clone(),
    };

    match llm.get_assistant_reply(&context).await {
        Ok(reply) => chat.send_message(&format!("Assistant: {reply}")).await?,
        Err(err) => {
            error!("Error while getting assistant reply: {}", err);
            chat.send_message(ASSISTANT_UNAVAILABLE).await?;
        }
    }

    Ok(result)
}
