//! Core components, types, and utilities for health-triage.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - System prompts and user-facing message templates.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
