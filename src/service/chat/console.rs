//! Interactive console front-end over stdin/stdout.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout},
    sync::Mutex,
};
use tracing::{debug, instrument};

use crate::base::types::{Res, Void};

use super::{ChatClient, GenericChatClient};

/// Prompt printed before each user message.
const USER_PROMPT: &str = "You: ";

// Extra methods on `ChatClient` applied by the console implementation.

impl ChatClient {
    /// Creates a new console chat client.
    pub fn console() -> Self {
        Self { inner: Arc::new(ConsoleChatClient::new()) }
    }
}

// Structs.

/// Console client implementation.
struct ConsoleChatClient {
    input: Mutex<Lines<BufReader<Stdin>>>,
    output: Mutex<Stdout>,
}

impl ConsoleChatClient {
    fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            output: Mutex::new(tokio::io::stdout()),
        }
    }

    async fn write(&self, text: &str) -> Void {
        let mut output = self.output.lock().await;

        output.write_all(text.as_bytes()).await?;
        output.flush().await?;

        Ok(())
    }
}

#[async_trait]
impl GenericChatClient for ConsoleChatClient {
    async fn start(&self) -> Void {
        debug!("Console chat client started.");
        Ok(())
    }

    #[instrument(name = "ConsoleChatClient::read_message", skip_all)]
    async fn read_message(&self) -> Res<Option<String>> {
        self.write(USER_PROMPT).await?;

        let line = self.input.lock().await.next_line().await?;

        // Keep the transcript tidy when input ends without a newline.
        if line.is_none() {
            self.write("\n").await?;
        }

        Ok(line)
    }

    async fn send_message(&self, text: &str) -> Void {
        self.write(&format!("{text}\n")).await
    }
}
