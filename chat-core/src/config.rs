/// Client configuration loaded from TOML

use crate::controller::Variant;
use crate::error::{ChatError, Result};
use crate::render::MarkupPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub chat_path: String,
    pub timeout_secs: u64,
    /// Plain-text client: no timeout bound and no multi-agent formatting.
    pub legacy: bool,
    /// Insert contribution bodies into HTML output as markup instead of
    /// escaping them.
    pub trust_markup: bool,
    pub greeting: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            legacy: false,
            trust_markup: false,
            greeting: None,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ChatError::InvalidConfig("base_url must not be empty".to_string()));
        }
        if !self.chat_path.starts_with('/') {
            return Err(ChatError::InvalidConfig(format!(
                "chat_path must start with '/': {}",
                self.chat_path
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ChatError::InvalidConfig("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn variant(&self) -> Variant {
        if self.legacy {
            Variant::Legacy
        } else {
            Variant::Enhanced {
                timeout: Duration::from_secs(self.timeout_secs),
            }
        }
    }

    pub fn markup_policy(&self) -> MarkupPolicy {
        MarkupPolicy::from_trust(self.trust_markup)
    }
}
