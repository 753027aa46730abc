use super::{ChatRequest, ChatResponse, ChatTransport};
use crate::config::ClientConfig;
use crate::error::{ChatError, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// JSON-over-HTTP transport posting to the backend chat endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, chat_path: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), chat_path),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, &config.chat_path)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
        debug!(target: "request", url = %self.url, "posting chat message");
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str::<ChatResponse>(&body)?)
    }
}
