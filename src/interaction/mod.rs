//! User-facing interactions for health-triage.
//!
//! This module provides functionality for handling user input and output:
//! - Assembling multi-field symptom forms into a single triage input
//! - Rendering triage results as reports
//! - Coordinating responses between the engine and services (LLM, chat)

pub mod chat_event;
pub mod form;
pub mod report;
