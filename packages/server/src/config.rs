use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use llm_client::Provider;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub llm: LlmConfig,
    /// Live LLM tests check this before talking to a real model.
    pub skip_llm_tests: bool,
}

/// Text-generation service settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: String,
    /// `None` means the provider's default endpoint.
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Ollama,
            model: "llama3.1:8b".to_string(),
            base_url: None,
            api_key: None,
            timeout: llm_client::DEFAULT_TIMEOUT,
            max_attempts: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let provider: Provider = env::var("LLM_PROVIDER")
            .unwrap_or_else(|_| "ollama".to_string())
            .parse()
            .context("LLM_PROVIDER must be 'ollama' or 'openai'")?;

        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        if provider == Provider::OpenAI && api_key.is_none() {
            bail!("OPENAI_API_KEY must be set when LLM_PROVIDER=openai");
        }

        let timeout_secs: u64 = env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse()
            .context("LLM_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/app.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            llm: LlmConfig {
                provider,
                model: env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:8b".to_string()),
                base_url: env::var("LLM_BASE_URL").ok().filter(|u| !u.is_empty()),
                api_key,
                timeout: Duration::from_secs(timeout_secs),
                max_attempts: env::var("LLM_MAX_ATTEMPTS")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()
                    .context("LLM_MAX_ATTEMPTS must be a valid number")?,
            },
            skip_llm_tests: parse_flag(env::var("SKIP_LLM_TESTS").ok().as_deref()),
        })
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
