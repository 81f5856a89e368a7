//! Library root for `health-triage`.
//!
//! Health-triage is a symptom-check chatbot designed to:
//! - Map free-form descriptions of how someone feels to a canonical set of symptoms
//! - Recognize emergency ("red flag") phrasings and surface an urgent warning
//! - Offer a short, de-duplicated list of general self-care tips
//! - Optionally add a conversational reply from a hosted language model
//!
//! The triage engine is pure and synchronous; the chat front-end and the
//! language model sit behind extensible traits so either can be swapped out.

pub mod base;
pub mod engine;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{
    config::Config,
    types::{Res, Void},
};
use engine::TriageEngine;
use interaction::{form::TriageForm, report::render_report};
use rustls::crypto;
use tracing::{info, instrument};

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts an interactive session:
/// - Initializes the crypto provider
/// - Creates the runtime context with the engine, LLM, and chat clients
/// - Runs the conversation loop until the user leaves or presses Ctrl-C
pub async fn start(config: Config) -> Void {
    info!("Starting health-triage ...");

    // Start the crypto provider.
    if crypto::ring::default_provider().install_default().is_err() {
        info!("A crypto provider is already installed.");
    }

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    tokio::select! {
        result = runtime.start() => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted; shutting down."),
    }

    Ok(())
}

/// Triage a filled-in form once and render the outcome.
///
/// Returns the plain-text report, or the raw result as pretty JSON when `json`
/// is set.
#[instrument(skip_all)]
pub fn check_form(config: &Config, form: &TriageForm, json: bool) -> Res<String> {
    let engine = TriageEngine::builtin().with_max_tips(config.max_tips);
    let result = engine.triage(&form.assemble());

    if json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(render_report(&result))
    }
}

// Tests.
