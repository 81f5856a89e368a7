//! Runtime services and shared state for health-triage.

use tracing::{error, info, instrument};

use crate::{
    base::{
        config::Config,
        prompts::{APOLOGY, FAREWELL, GREETING},
        types::{Res, Void},
    },
    engine::TriageEngine,
    interaction::chat_event::handle_chat_event,
    service::{chat::ChatClient, llm::LlmClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the triage engine, the chat and LLM clients, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The triage engine instance.
    pub engine: TriageEngine,
    /// The LLM client instance, if an assistant is configured.
    pub llm: Option<LlmClient>,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance talking over the console.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the engine over the builtin tables.
        let engine = TriageEngine::builtin().with_max_tips(config.max_tips);

        // Initialize the LLM client, if configured.
        let llm = if config.assistant_enabled() {
            info!("Assistant replies enabled (model `{}`).", config.openai_model);
            Some(LlmClient::openai(&config))
        } else {
            info!("No OpenAI API key configured; assistant replies disabled.");
            None
        };

        // Initialize the console chat client.
        let chat = ChatClient::console();

        Ok(Self { config, engine, llm, chat })
    }

    /// Run the conversation loop until an exit word or end of input.
    #[instrument(skip_all)]
    pub async fn start(&self) -> Void {
        self.chat.start().await?;
        self.chat.send_message(GREETING).await?;

        while let Some(message) = self.chat.read_message().await? {
            if self.config.is_exit_word(&message) {
                break;
            }

            if message.trim().is_empty() {
                continue;
            }

            if let Err(err) = handle_chat_event(&message, &self.engine, self.llm.as_ref(), &self.chat).await {
                error!("Error while handling: {}", err);
                self.chat.send_message(APOLOGY).await?;
            }
        }

        self.chat.send_message(FAREWELL).await?;
        info!("Session ended.");

        Ok(())
    }
}
