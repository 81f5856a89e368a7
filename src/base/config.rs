//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::{base::prompts, engine::DEFAULT_MAX_TIPS};

use super::types::Res;

/// Default OpenAI assistant model to use
fn default_openai_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Default sampling temperature for the OpenAI assistant model
fn default_openai_temperature() -> f32 {
    0.7
}

/// Default max output tokens for OpenAI model
fn default_openai_max_tokens() -> u32 {
    150
}

/// Default system directive for the assistant agent.
fn default_assistant_system_directive() -> String {
    prompts::ASSISTANT_AGENT_SYSTEM_DIRECTIVE.to_string()
}

/// Default cap on the number of self-care tips in a report.
fn default_max_tips() -> usize {
    DEFAULT_MAX_TIPS
}

/// Default words that end an interactive session.
fn default_exit_words() -> Vec<String> {
    vec!["exit".to_string(), "quit".to_string(), "bye".to_string()]
}

/// Configuration for the health-triage application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// OpenAI API key (`OPENAI_API_KEY`).
    /// When absent, assistant replies are disabled and only triage reports are shown.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// OpenAI assistant model to use (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Sampling temperature to use for the assistant model (`OPENAI_TEMPERATURE`).
    /// Value between 0 and 2. Only sent to `gpt` models.
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    /// Max output tokens for OpenAI model (`OPENAI_MAX_TOKENS`).
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Optional custom system directive to override the default (`ASSISTANT_SYSTEM_DIRECTIVE`).
    #[serde(default = "default_assistant_system_directive")]
    pub assistant_system_directive: String,
    /// Maximum number of self-care tips per report (`MAX_TIPS`).
    #[serde(default = "default_max_tips")]
    pub max_tips: usize,
    /// Words that end an interactive session, matched case-insensitively (`EXIT_WORDS`).
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: default_openai_model(),
            openai_temperature: default_openai_temperature(),
            openai_max_tokens: default_openai_max_tokens(),
            assistant_system_directive: default_assistant_system_directive(),
            max_tips: default_max_tips(),
            exit_words: default_exit_words(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("HEALTH_TRIAGE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Res<()> {
        if self.openai_temperature < 0.0 || self.openai_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI temperature must be between 0 and 2."));
        }

        if self.openai_max_tokens < 1 || self.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        if self.max_tips < 1 {
            return Err(anyhow::anyhow!("Max tips must be at least 1."));
        }

        Ok(())
    }

    /// Whether an assistant model is configured.
    pub fn assistant_enabled(&self) -> bool {
        self.openai_api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Whether `message` should end an interactive session.
    pub fn is_exit_word(&self, message: &str) -> bool {
        let message = message.trim();
        self.exit_words.iter().any(|word| word.eq_ignore_ascii_case(message))
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with(inner: ConfigInner) -> Config {
        Config { inner: Arc::new(inner) }
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.max_tips, DEFAULT_MAX_TIPS);
        assert_eq!(config.openai_model, "gpt-4.1-mini");
        assert!(!config.assistant_enabled());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let bad = [
            ConfigInner { openai_temperature: 2.5, ..Default::default() },
            ConfigInner { openai_temperature: -0.1, ..Default::default() },
            ConfigInner { openai_max_tokens: 0, ..Default::default() },
            ConfigInner { openai_max_tokens: 200_000, ..Default::default() },
            ConfigInner { max_tips: 0, ..Default::default() },
        ];

        for inner in bad {
            assert!(config_with(inner).validate().is_err());
        }
    }

    #[test]
    fn exit_words_ignore_case_and_whitespace() {
        let config = Config::default();

        assert!(config.is_exit_word("exit"));
        assert!(config.is_exit_word("  QUIT \n"));
        assert!(config.is_exit_word("Bye"));
        assert!(!config.is_exit_word("bye bye headache"));
        assert!(!config.is_exit_word(""));
    }

    #[test]
    fn blank_api_key_disables_assistant() {
        let config = config_with(ConfigInner { openai_api_key: Some("  ".to_string()), ..Default::default() });
        assert!(!config.assistant_enabled());

        let config = config_with(ConfigInner { openai_api_key: Some("sk-test".to_string()), ..Default::default() });
        assert!(config.assistant_enabled());
    }

    #[test]
    fn loads_from_explicit_file() {
        let path = std::env::temp_dir().join(format!("health-triage-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "openai_model = \"gpt-4.1-nano\"\nmax_tips = 5\nexit_words = [\"stop\"]").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.openai_model, "gpt-4.1-nano");
        assert_eq!(config.max_tips, 5);
        assert!(config.is_exit_word("STOP"));
        assert!(!config.is_exit_word("exit"));
        assert_eq!(config.openai_temperature, 0.7);
    }

    #[test]
    fn invalid_file_values_fail_to_load() {
        let path = std::env::temp_dir().join(format!("health-triage-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "max_tips = 0\n").unwrap();

        let result = Config::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
