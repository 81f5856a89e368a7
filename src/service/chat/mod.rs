//! Chat service integration for health-triage.
//!
//! Defines the `GenericChatClient` trait that front-ends implement, with a
//! default implementation for an interactive console.

pub mod console;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Res, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for talking to a user through
/// some front-end. Implementing this trait allows different front-ends to be
/// driven by the same runtime loop.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Prepare the front-end for a session.
    async fn start(&self) -> Void;

    /// Wait for the next user message.
    ///
    /// Returns `None` once the user has no more input (e.g., end of file).
    async fn read_message(&self) -> Res<Option<String>>;

    /// Show a message to the user.
    async fn send_message(&self, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
