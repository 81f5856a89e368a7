//! Binary entry point for `health-triage`.
//!
//! This module provides the command-line interface for health-triage with
//! options for configuration file paths, logging verbosity, and a one-shot
//! form mode. Without form fields it starts an interactive chat session.

use clap::Parser;
use health_triage::{
    base::{config::Config, types::Void},
    interaction::form::TriageForm,
};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Health-triage – a simple symptom check chatbot.
///
/// Configuration can come from `config.toml` or environment variables.
/// Describe how you feel and the bot lists matched symptoms, flags phrasings
/// that need urgent care, and offers general self-care tips. This is for
/// information only and is not a medical diagnosis.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: WARN level
    /// - -v: INFO level
    /// - -vv: DEBUG level
    /// - -vvv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Export spans over OTLP/HTTP (configured via the standard `OTEL_*` variables).
    #[arg(long)]
    otlp: bool,
    /// How are you feeling today? (one-shot mode)
    #[arg(long)]
    feeling: Option<String>,
    /// How long has this been going on? (one-shot mode)
    #[arg(long)]
    duration: Option<String>,
    /// Temperature, e.g. "38.5 C" or "101 F" (one-shot mode)
    #[arg(long)]
    temperature: Option<String>,
    /// Other symptoms or details (one-shot mode)
    #[arg(long)]
    notes: Option<String>,
    /// Print the one-shot result as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

impl Args {
    /// The one-shot form, if any form field was given.
    fn form(&self) -> Option<TriageForm> {
        let fields = [&self.feeling, &self.duration, &self.temperature, &self.notes];

        if fields.iter().all(|field| field.is_none()) {
            return None;
        }

        Some(TriageForm {
            feeling: self.feeling.clone().unwrap_or_default(),
            duration: self.duration.clone().unwrap_or_default(),
            temperature: self.temperature.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        })
    }
}

/// Main entry point for the health-triage binary.
///
/// Sets up logging based on verbosity, loads configuration, and either checks
/// a single form or starts the chat session.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.
    // Logs go to stderr so they never interleave with the chat transcript.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let otel = if args.otlp {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("health-triage");
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stderr).init();

    let config = Config::load(args.config.as_deref())?;

    if let Some(form) = args.form() {
        println!("{}", health_triage::check_form(&config, &form, args.json)?);
        return Ok(());
    }

    health_triage::start(config).await
}
