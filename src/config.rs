//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

/// Pacing configuration for the dialogue engine.
///
/// These delays exist purely to pace message delivery ("assistant is
/// typing"); they carry no concurrency semantics. The single-flight guard
/// in the engine is what keeps submissions serialized.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Pause before the typing indicator would appear.
    pub pre_typing_delay: Duration,
    /// How long the assistant "types" before the next prompt lands.
    pub typing_delay: Duration,
    /// How long the caller should display the success message before
    /// navigating to the trip view.
    pub redirect_delay: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            pre_typing_delay: Duration::from_millis(500),
            typing_delay: Duration::from_millis(1500),
            redirect_delay: Duration::from_millis(2000),
        }
    }
}

impl ChatConfig {
    /// Zero-delay pacing, for tests and non-interactive runs.
    pub fn instant() -> Self {
        Self {
            pre_typing_delay: Duration::ZERO,
            typing_delay: Duration::ZERO,
            redirect_delay: Duration::ZERO,
        }
    }
}

/// Configuration for the HTTP travel store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the persistence API, e.g. `http://localhost:5000/api`.
    pub base_url: String,
}

impl StoreConfig {
    /// Read from `TRIPTACTIX_API_URL`, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var("TRIPTACTIX_API_URL")
            .ok()
            .map(|base_url| Self { base_url })
    }
}

/// Configuration for the advisory LLM client.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    /// API key for the chat-completions endpoint. When absent every
    /// generation degrades to its canned fallback payload.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

impl AdvisoryConfig {
    /// Read `OPENAI_API_KEY` and `TRIPTACTIX_MODEL` from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.api_key = Some(SecretString::from(key));
        }
        if let Ok(model) = std::env::var("TRIPTACTIX_MODEL") {
            config.model = model;
        }
        config
    }
}
