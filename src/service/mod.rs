//! Service integrations for external I/O.
//!
//! This module contains implementations for the services used by health-triage:
//! - Chat services (e.g., the interactive console)
//! - LLM services (e.g., OpenAI)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod llm;
