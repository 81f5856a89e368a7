//! Integration with Large Language Model services.
//!
//! The triage engine never depends on a model. When one is configured, it
//! adds a short conversational reply after the triage report.

pub mod openai;

use crate::base::types::{AssistantContext, Res};
use async_trait::async_trait;
use std::ops::Deref;
use std::sync::Arc;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the core functionality for interacting with large language models.
/// Implementing this trait allows different LLM providers to be used with health-triage.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate a conversational reply from the assistant model.
    ///
    /// The context carries the user's message and the symptoms the triage
    /// engine detected in it.
    async fn get_assistant_reply(&self, context: &AssistantContext) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
