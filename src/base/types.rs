use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Context handed to the assistant model for a single user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantContext {
    /// The raw user message.
    pub user_message: String,
    /// Canonical symptoms the triage engine detected in the message.
    pub detected_symptoms: Vec<String>,
}
